//! Payload resolution for qrimg.
//!
//! The payload comes from exactly one of two channels: a piped stdin stream
//! (drained to end-of-stream) or the trailing command-line arguments (joined
//! with single spaces). The caller decides which channel applies by checking
//! whether stdin is a terminal; both helpers here take their source as a
//! parameter so tests can drive them without a real stdin.

use std::io::{self, Read};

/// Drain `reader` to end-of-stream and return its contents as the payload.
///
/// The stream must be valid UTF-8; any read failure is returned as-is and is
/// treated as unrecoverable by the caller.
pub fn payload_from_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Join positional arguments into a single payload string.
///
/// Returns `None` when no arguments were given, which the caller turns into
/// the usage hint.
pub fn payload_from_args(args: &[String]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}
