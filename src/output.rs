//! Output-path resolution and PNG persistence.
//!
//! The base directory and timestamp are parameters rather than read here, so
//! tests can pass a fixed directory and a fixed clock value instead of the
//! real temp dir and wall clock.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat};

/// Resolve the output file path inside `dir`.
///
/// An explicit non-empty `output` name is used verbatim; otherwise the name is
/// synthesized as `qrimg-<millis>.png` so repeated runs do not collide.
pub fn resolve_path(dir: &Path, output: Option<&str>, millis: u128) -> PathBuf {
    match output {
        Some(name) if !name.is_empty() => dir.join(name),
        _ => dir.join(format!("qrimg-{}.png", millis)),
    }
}

/// Write `img` as a PNG file at `path`, creating or truncating it.
///
/// The file handle is scoped to this function and released on every exit
/// path. File creation and PNG serialization fail with distinct user-facing
/// messages; a failed write may leave a partial file behind.
pub fn write_png(img: &GrayImage, path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("Error creating file: {}", e))?;
    let mut out = BufWriter::new(file);
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| format!("Error encoding PNG image: {}", e))?;
    out.flush()
        .map_err(|e| format!("Error encoding PNG image: {}", e))
}
