use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qrblob::{Style, generate};

fn bench_classic_short(c: &mut Criterion) {
    c.bench_function("classic_hello", |b| {
        b.iter(|| generate(black_box("HELLO WORLD"), Style::Classic, black_box("#000000")))
    });
}

fn bench_blob_short(c: &mut Criterion) {
    c.bench_function("blob_hello", |b| {
        b.iter(|| generate(black_box("HELLO WORLD"), Style::Blob, black_box("#000000")))
    });
}

fn bench_blob_url(c: &mut Criterion) {
    // Longer text forces a higher symbol version with many more groups
    let url = "https://example.com/some/deeply/nested/path?with=query&and=parameters";
    c.bench_function("blob_url", |b| {
        b.iter(|| generate(black_box(url), Style::Blob, black_box("#000000")))
    });
}

criterion_group!(
    benches,
    bench_classic_short,
    bench_blob_short,
    bench_blob_url
);
criterion_main!(benches);
