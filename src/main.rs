/// Binary entrypoint for the `qrimg` executable.
///
/// Keeps the binary thin: all pipeline logic lives in the `qrimg_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    qrimg_lib::run();
}
