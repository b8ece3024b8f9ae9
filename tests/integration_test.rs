use std::time::{SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

#[test]
fn integration_encode_render_write() {
    // Drive the whole pipeline (minus the viewer launch) through the library
    let code = qrimg_lib::encode::encode("https://example.com").expect("encode");
    let img = qrimg_lib::encode::render(&code, 256);

    let tmp = TempDir::new().expect("tempdir");
    let path = qrimg_lib::output::resolve_path(tmp.path(), Some("test.png"), 0);
    assert_eq!(path, tmp.path().join("test.png"));

    qrimg_lib::output::write_png(&img, &path).expect("write png");

    let reopened = image::open(&path).expect("reopen").to_luma8();
    assert_eq!((reopened.width(), reopened.height()), (256, 256));
}

#[test]
fn integration_piped_payload_shape() {
    // Stdin contents are used verbatim; argument joining is a separate path
    let payload =
        qrimg_lib::input::payload_from_reader(std::io::Cursor::new("hello world\n")).expect("read");
    assert_eq!(payload, "hello world\n");
    assert_eq!(
        qrimg_lib::input::payload_from_args(&["hello".into(), "world".into()]).unwrap(),
        "hello world"
    );
}

#[test]
fn integration_timestamp_names_non_decreasing() {
    let tmp = TempDir::new().expect("tempdir");
    let millis = || {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_millis()
    };
    let first = qrimg_lib::output::resolve_path(tmp.path(), None, millis());
    let second = qrimg_lib::output::resolve_path(tmp.path(), None, millis());
    let name = |p: &std::path::Path| p.file_name().unwrap().to_str().unwrap().to_string();
    assert!(name(&first) <= name(&second));
    assert!(name(&first).starts_with("qrimg-"));
    assert!(name(&first).ends_with(".png"));
}
