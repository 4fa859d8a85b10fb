use cider_model::{preprocess, softmax, WavelengthGrid};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_preprocess_typical(c: &mut Criterion) {
    let grid = WavelengthGrid::new(3850.0, 8500.0, 4650);
    let wavelengths: Vec<f64> = (0..2000).map(|i| 3200.0 + i as f64 * 3.2).collect();
    let fluxes: Vec<f64> = wavelengths
        .iter()
        .map(|w| 1e-15 * (1.0 + (w / 400.0).sin()))
        .collect();

    c.bench_function("preprocess_2000_samples", |b| {
        b.iter(|| preprocess(&wavelengths, &fluxes, &grid).unwrap())
    });
}

fn bench_preprocess_unsorted(c: &mut Criterion) {
    let grid = WavelengthGrid::new(3850.0, 8500.0, 4650);
    let mut wavelengths: Vec<f64> = (0..2000).map(|i| 3200.0 + i as f64 * 3.2).collect();
    wavelengths.reverse();
    let fluxes: Vec<f64> = wavelengths
        .iter()
        .map(|w| 1e-15 * (1.0 + (w / 400.0).sin()))
        .collect();

    c.bench_function("preprocess_2000_samples_reversed", |b| {
        b.iter(|| preprocess(&wavelengths, &fluxes, &grid).unwrap())
    });
}

fn bench_softmax(c: &mut Criterion) {
    let logits: Vec<f32> = (0..10).map(|i| i as f32 * 0.37 - 2.0).collect();

    c.bench_function("softmax_10_classes", |b| b.iter(|| softmax(&logits)));
}

criterion_group!(
    benches,
    bench_preprocess_typical,
    bench_preprocess_unsorted,
    bench_softmax
);
criterion_main!(benches);
