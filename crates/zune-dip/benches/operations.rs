/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use nanorand::Rng;
use zune_dip::descriptors::{
    calculate_haralick_features, calculate_intensity_stats, calculate_shape_moments
};
use zune_dip::equalize::histogram_equalization;
use zune_dip::filters::{apply_filter, FilterKind};
use zune_dip::frequency::{frequency_filter, FrequencyFilterKind};
use zune_dip::morphology::{apply_morphology, MorphOperation};
use zune_dip::threshold::apply_otsu;
use zune_dip::Raster;

fn random_raster(width: usize, height: usize) -> Raster {
    let mut pixels = vec![0_u8; width * height];
    nanorand::WyRand::new_seed(42).fill(&mut pixels);

    Raster::new(pixels, width, height).unwrap()
}

fn point_operations(c: &mut Criterion) {
    let raster = random_raster(512, 512);

    let mut group = c.benchmark_group("[dip]: point operations 512x512");
    group.throughput(Throughput::Bytes(raster.len() as u64));

    group.bench_function("otsu", |b| b.iter(|| black_box(apply_otsu(&raster))));

    group.bench_function("equalize", |b| {
        b.iter(|| black_box(histogram_equalization(&raster)))
    });
}

fn spatial_filters(c: &mut Criterion) {
    let raster = random_raster(512, 512);

    let mut group = c.benchmark_group("[dip]: spatial filters 512x512");
    group.throughput(Throughput::Bytes(raster.len() as u64));

    for kind in [FilterKind::Median, FilterKind::Gaussian, FilterKind::Sobel] {
        group.bench_function(kind.name(), |b| {
            b.iter(|| black_box(apply_filter(&raster, kind)))
        });
    }
    group.bench_function("closing", |b| {
        b.iter(|| black_box(apply_morphology(&raster, MorphOperation::Closing)))
    });
}

fn frequency_filters(c: &mut Criterion) {
    let raster = random_raster(500, 300);

    let mut group = c.benchmark_group("[dip]: frequency filters 500x300");
    group.sample_size(20);

    group.bench_function("gaussian_low", |b| {
        b.iter(|| black_box(frequency_filter(&raster, FrequencyFilterKind::GaussianLow)))
    });
}

fn descriptors(c: &mut Criterion) {
    let raster = random_raster(512, 512);

    let mut group = c.benchmark_group("[dip]: descriptors 512x512");

    group.bench_function("intensity", |b| {
        b.iter(|| black_box(calculate_intensity_stats(&raster)))
    });
    group.bench_function("haralick", |b| {
        b.iter(|| black_box(calculate_haralick_features(&raster)))
    });
    group.bench_function("moments", |b| {
        b.iter(|| black_box(calculate_shape_moments(&raster)))
    });
}

criterion_group!(
    benches,
    point_operations,
    spatial_filters,
    frequency_filters,
    descriptors
);
criterion_main!(benches);
