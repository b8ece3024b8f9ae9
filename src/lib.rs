//! Qrimg library crate
//!
//! This crate provides the core functionality for the `qrimg` CLI, a small
//! pipeline that turns text into a QR code PNG and opens it with the system
//! viewer. It is organized into small modules: `input` (payload resolution
//! from stdin or arguments), `encode` (QR encoding and pixel rendering),
//! `output` (path resolution and PNG persistence), and `viewer`
//! (platform-dispatched default-viewer launch). The binary `src/main.rs`
//! calls `qrimg_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod encode;
pub mod input;
pub mod output;
pub mod viewer;

use std::env;
use std::io::{self, IsTerminal};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output image edge length in pixels; negative values mean that many
    /// pixels per QR module instead
    #[arg(
        short = 'x',
        long = "size",
        default_value_t = 1024,
        allow_hyphen_values = true
    )]
    size: i32,

    /// Output file name inside the temp directory (defaults to
    /// qrimg-<timestamp>.png)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Text to encode; ignored when stdin is piped
    text: Vec<String>,
}

/// Run the qrimg CLI.
///
/// This function is the high-level entrypoint used by the `qrimg` binary. It
/// resolves the payload (piped stdin wins over positional arguments), encodes
/// it as a QR code at medium error correction, writes the rendered image as a
/// PNG into the system temporary directory, and finally asks the OS to open
/// the file with its default viewer.
///
/// Failures in the implemented flow are printed to stdout and end the run
/// without changing the exit code; a viewer-launch failure leaves the written
/// file in place. The only abrupt abort is an unreadable stdin stream, which
/// reports to stderr and exits nonzero.
///
/// Example:
///
/// ```no_run
/// qrimg_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let text = if !stdin.is_terminal() {
        input::payload_from_reader(stdin.lock()).unwrap_or_else(|e| {
            eprintln!("error: failed to read stdin: {}", e);
            std::process::exit(1);
        })
    } else if let Some(joined) = input::payload_from_args(&cli.text) {
        joined
    } else {
        println!("Please provide text to encode, either via stdin or command-line arguments");
        return;
    };

    let code = match encode::encode(&text) {
        Ok(code) => code,
        Err(e) => {
            println!("Error generating QR code: {}", e);
            return;
        }
    };

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis();
    let path = output::resolve_path(&env::temp_dir(), cli.output.as_deref(), millis);

    let img = encode::render(&code, cli.size);
    if let Err(e) = output::write_png(&img, &path) {
        println!("{}", e);
        return;
    }

    println!("QR code saved to: {}", path.display());

    if let Err(e) = viewer::open_file(&path) {
        println!("Error opening image: {}", e);
    }
}
