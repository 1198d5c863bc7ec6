use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use enhancer_core::{AdjustmentEngine, AdjustmentParams, Filter, FilterEngine, Image};

fn test_image(width: u32, height: u32) -> Image {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x % 256) as u8);
            data.push((y % 256) as u8);
            data.push(((x ^ y) % 256) as u8);
        }
    }
    Image::from_data(width, height, data).unwrap()
}

fn bench_adjustments(c: &mut Criterion) {
    let engine = AdjustmentEngine::new();
    let image = test_image(1024, 768);
    let params = AdjustmentParams {
        brightness: 1.2,
        contrast: 1.3,
        sharpness: 1.5,
        color: 0.8,
    };

    c.bench_function("adjustments_1024x768", |b| {
        b.iter(|| engine.apply(black_box(&image), black_box(&params)))
    });
}

fn bench_filters(c: &mut Criterion) {
    let engine = FilterEngine::new();
    let image = test_image(640, 480);

    let mut group = c.benchmark_group("filters_640x480");
    group.sample_size(10);
    for filter in Filter::ALL {
        group.bench_function(filter.name(), |b| {
            b.iter(|| engine.apply(filter, black_box(&image)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_adjustments, bench_filters);
criterion_main!(benches);
