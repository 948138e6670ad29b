//! Benchmarks for the renderer crate - ramp encoding, relief and PNG output.
//!
//! Run with: cargo bench --package renderer --bench encode_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use elevation_common::{ColorRampConfig, GridExtent, GridOffset, HeightRange};
use grid_processor::SampleWindow;
use renderer::{apply_relief, encode_color, encode_gray, png, ReliefGain};
use test_utils::create_world_grid;

/// Viewport sizes as (name, width, height)
const SIZES: [(&str, usize, usize); 3] = [
    ("256x256", 256, 256),
    ("overview", 2160, 1080),
    ("area", 1920, 1080),
];

fn world_window(width: usize, height: usize) -> SampleWindow {
    SampleWindow::new(
        GridOffset::default(),
        GridExtent::new(height, width),
        create_world_grid(width, height),
    )
    .unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let range = HeightRange::default();
    let ramp = ColorRampConfig::default();

    for (name, width, height) in SIZES {
        let window = world_window(width, height);
        group.throughput(Throughput::Elements((width * height) as u64));

        group.bench_with_input(BenchmarkId::new("gray", name), &window, |b, window| {
            b.iter(|| encode_gray(black_box(window), &range).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("color", name), &window, |b, window| {
            b.iter(|| encode_color(black_box(window), &range, &ramp).unwrap())
        });
    }

    group.finish();
}

fn bench_relief(c: &mut Criterion) {
    let mut group = c.benchmark_group("relief");
    let range = HeightRange::default();

    for (name, width, height) in SIZES {
        let window = world_window(width, height);
        let encoded = encode_gray(&window, &range).unwrap();
        group.throughput(Throughput::Elements((width * height) as u64));

        group.bench_with_input(BenchmarkId::new("gray", name), &window, |b, window| {
            b.iter(|| {
                let mut image = encoded.clone();
                apply_relief(&mut image, black_box(window), ReliefGain::GRAY).unwrap();
                image
            })
        });
    }

    group.finish();
}

fn bench_png_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("png_encoding");
    let range = HeightRange::default();
    let ramp = ColorRampConfig::default();

    for (name, width, height) in SIZES {
        let window = world_window(width, height);
        let gray = encode_gray(&window, &range).unwrap();
        let color = encode_color(&window, &range, &ramp).unwrap();

        group.throughput(Throughput::Bytes(gray.pixels().len() as u64));
        group.bench_with_input(BenchmarkId::new("gray", name), &gray, |b, img| {
            b.iter(|| png::create_png(black_box(img)).unwrap())
        });

        group.throughput(Throughput::Bytes(color.pixels().len() as u64));
        group.bench_with_input(BenchmarkId::new("rgb", name), &color, |b, img| {
            b.iter(|| png::create_png(black_box(img)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_relief, bench_png_encoding);
criterion_main!(benches);
