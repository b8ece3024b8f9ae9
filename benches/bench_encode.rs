use criterion::{Criterion, criterion_group, criterion_main};

fn bench_encode_url(c: &mut Criterion) {
    c.bench_function("encode_url", |b| {
        b.iter(|| {
            // call binary via library
            let _ = qrimg_lib::encode::encode("https://example.com/some/long/path?q=qrimg");
        })
    });
}

fn bench_render_1024(c: &mut Criterion) {
    let code = qrimg_lib::encode::encode("https://example.com").expect("encode");
    c.bench_function("render_1024", |b| {
        b.iter(|| {
            let _ = qrimg_lib::encode::render(&code, 1024);
        })
    });
}

criterion_group!(benches, bench_encode_url, bench_render_1024);
criterion_main!(benches);
