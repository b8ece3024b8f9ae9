//! Launch the OS default viewer for a file.
//!
//! The platform set is closed and known at build time, so dispatch is a small
//! lookup keyed by the host platform identifier. Callers should treat errors
//! as non-fatal (the CLI prints a message and still exits normally, leaving
//! the written file in place).

use std::path::Path;
use std::process::Command;

/// Map a platform identifier (as in `std::env::consts::OS`) to the program
/// and fixed leading arguments that open a file with its default application.
fn launcher(os: &str) -> Option<(&'static str, &'static [&'static str])> {
    match os {
        "linux" => Some(("xdg-open", &[])),
        "windows" => Some(("rundll32.exe", &["url.dll,FileProtocolHandler"])),
        "macos" => Some(("open", &[])),
        _ => None,
    }
}

/// Open `path` with the host's default application and wait for the launcher
/// command to finish.
///
/// Returns `Ok(())` on success or `Err(String)` describing the failure: an
/// unsupported platform, a command that could not be spawned, or a launcher
/// that exited unsuccessfully.
pub fn open_file(path: &Path) -> Result<(), String> {
    let (program, args) = launcher(std::env::consts::OS).ok_or("unsupported platform")?;
    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .map_err(|e| format!("{}: {}", program, e))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("{} exited with {}", program, status))
    }
}
