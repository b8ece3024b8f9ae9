//! QR encoding and pixel rendering.
//!
//! Encoding delegates to the `qrcode` crate at a fixed medium error-correction
//! level; rendering turns the resulting module grid into a grayscale
//! `image::GrayImage` with a standard 4-module quiet zone. The two steps are
//! separate because the requested pixel size only matters at render time.

use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};

/// Quiet zone width in modules on each side of the symbol.
const QUIET_ZONE: u32 = 4;

/// Encode `text` as a QR code at medium error correction.
///
/// # Errors
/// Returns `Err(String)` when the payload cannot be represented at level M,
/// for example when it exceeds the level's byte capacity.
pub fn encode(text: &str) -> Result<QrCode, String> {
    QrCode::with_error_correction_level(text, EcLevel::M).map_err(|e| e.to_string())
}

/// Render `code` into a square grayscale image.
///
/// `size` requests the image edge length in pixels. Modules are drawn at the
/// largest whole number of pixels per module that fits inside `size`
/// (including the quiet zone), and the symbol is centered with white padding,
/// so the image is exactly `size` pixels on each side. Two special cases:
///
/// - a positive `size` too small for one pixel per module (or 0) falls back
///   to one pixel per module, and the image edge becomes the bordered grid
///   edge instead;
/// - a negative `size` means `|size|` pixels per module, with the image edge
///   scaling to fit.
///
/// Dark modules render as 0, everything else as 255.
pub fn render(code: &QrCode, size: i32) -> GrayImage {
    let modules = code.width() as u32;
    let grid = modules + 2 * QUIET_ZONE;

    let edge = if size < 0 {
        grid * size.unsigned_abs()
    } else {
        (size as u32).max(grid)
    };
    let scale = edge / grid;
    let offset = (edge - grid * scale) / 2;

    let mut img = GrayImage::from_pixel(edge, edge, Luma([255u8]));
    for y in 0..modules {
        for x in 0..modules {
            if code[(x as usize, y as usize)] == Color::Dark {
                let px = offset + (QUIET_ZONE + x) * scale;
                let py = offset + (QUIET_ZONE + y) * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(px + dx, py + dy, Luma([0u8]));
                    }
                }
            }
        }
    }
    img
}
