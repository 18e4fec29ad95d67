//! Benchmarks for the retint pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

use retint::{
    composite, extract, recolor, synthesize_at, Colour, ExtractStrategy, PatternKind, PatternSpec,
    RecolorParams,
};

/// A synthetic photo-like input: smooth channel ramps.
fn test_image(edge: u32) -> RgbaImage {
    RgbaImage::from_fn(edge, edge, |x, y| {
        Rgba([
            (x % 256) as u8,
            (y % 256) as u8,
            ((x + y) % 256) as u8,
            255,
        ])
    })
}

fn bench_recolor(c: &mut Criterion) {
    let mut group = c.benchmark_group("recolor");

    let img = test_image(256);
    let params = RecolorParams::new(Colour::rgb(255, 69, 0)).with_intensity(0.7);

    group.bench_function("recolor_256", |b| {
        b.iter(|| recolor(black_box(&img), black_box(&params)).unwrap())
    });

    let grayscale_params = params.with_grayscale_first(true);
    group.bench_function("recolor_256_grayscale", |b| {
        b.iter(|| recolor(black_box(&img), black_box(&grayscale_params)).unwrap())
    });

    group.finish();
}

fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns");

    for kind in [
        PatternKind::Gradient,
        PatternKind::Checkerboard,
        PatternKind::Hexagonal,
        PatternKind::Waves,
    ] {
        let spec = PatternSpec::new(kind, Colour::rgb(200, 30, 30), Colour::rgb(30, 30, 200));
        group.bench_function(kind.name(), |b| {
            b.iter(|| synthesize_at(black_box(&spec), 512).unwrap())
        });
    }

    group.finish();
}

fn bench_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");

    let base = test_image(256);
    let spec = PatternSpec::new(
        PatternKind::Checkerboard,
        Colour::rgb(200, 30, 30),
        Colour::rgb(30, 30, 200),
    );
    let pattern = synthesize_at(&spec, 512).unwrap();

    group.bench_function("composite_256", |b| {
        b.iter(|| composite(black_box(&base), black_box(&pattern), 0.3).unwrap())
    });

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    let img = test_image(512);

    group.bench_function("frequency", |b| {
        b.iter(|| extract(black_box(&img), 5, ExtractStrategy::Frequency).unwrap())
    });

    group.bench_function("kmeans", |b| {
        b.iter(|| extract(black_box(&img), 5, ExtractStrategy::KMeans).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_recolor,
    bench_patterns,
    bench_composite,
    bench_extract
);
criterion_main!(benches);
