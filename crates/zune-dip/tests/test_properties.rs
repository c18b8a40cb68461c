/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use zune_dip::descriptors::{
    calculate_haralick_features, calculate_intensity_stats, calculate_shape_moments
};
use zune_dip::equalize::histogram_equalization;
use zune_dip::errors::DipErrors;
use zune_dip::filters::{apply_filter, FilterKind};
use zune_dip::fourier::calculate_fourier_spectrum;
use zune_dip::frequency::{frequency_filter, FrequencyFilterKind};
use zune_dip::histogram::calculate_histogram;
use zune_dip::morphology::{apply_morphology, MorphOperation};
use zune_dip::stretch_contrast::contrast_stretching;
use zune_dip::threshold::apply_otsu;
use zune_dip::{BinaryMask, Raster};

fn random_raster(width: usize, height: usize, seed: u64) -> Raster {
    let mut pixels = vec![0_u8; width * height];
    nanorand::WyRand::new_seed(seed).fill(&mut pixels);

    Raster::new(pixels, width, height).unwrap()
}

fn disk(width: usize, height: usize, cx: usize, cy: usize, radius: usize) -> Raster {
    Raster::from_fn(width, height, |x, y| {
        let dx = x.abs_diff(cx);
        let dy = y.abs_diff(cy);

        if dx * dx + dy * dy <= radius * radius {
            230
        } else {
            15
        }
    })
    .unwrap()
}

#[test]
fn otsu_separates_two_levels() {
    let raster = Raster::from_fn(40, 30, |_, y| if y < 15 { 50 } else { 200 }).unwrap();
    let (mask, threshold) = apply_otsu(&raster);

    assert!(threshold > 50.0 && threshold < 200.0);

    for y in 0..30 {
        for x in 0..40 {
            assert_eq!(mask.is_set(x, y), raster.get(x, y) == 200);
        }
    }
}

#[test]
fn histogram_sums_to_pixel_count() {
    for (seed, (w, h)) in [(1, (1, 1)), (2, (17, 3)), (3, (128, 96))] {
        let raster = random_raster(w, h, seed);
        let histogram = calculate_histogram(&raster);

        assert_eq!(histogram.iter().map(|x| *x as usize).sum::<usize>(), w * h);
    }
}

#[test]
fn equalization_twice_changes_nothing() {
    let raster = Raster::from_fn(64, 48, |x, y| ((x * y) % 97) as u8).unwrap();

    let once = histogram_equalization(&raster);
    assert_eq!(histogram_equalization(&once), once);
}

#[test]
fn stretching_full_range_image_is_idempotent() {
    // 10% black and 10% white pixels pin both percentiles to the extremes
    let raster = Raster::from_fn(100, 20, |x, _| match x {
        0..=9 => 0,
        90..=99 => 255,
        _ => (x * 2) as u8
    })
    .unwrap();

    let once = contrast_stretching(&raster);
    assert_eq!(once, raster);
    assert_eq!(contrast_stretching(&once), once);
}

#[test]
fn filters_stay_in_range_and_flatten_constants() {
    let noisy = random_raster(40, 40, 7);
    let constant = Raster::fill(128, 40, 40).unwrap();

    for kind in FilterKind::ALL {
        let out = apply_filter(&noisy, kind);
        assert_eq!(out.dimensions(), noisy.dimensions());
        assert_eq!(out.len(), 1600);

        let out = apply_filter(&constant, kind);
        assert!(out.pixels().iter().all(|x| *x == 0), "{kind:?}");
    }
    for kind in FrequencyFilterKind::ALL {
        let out = frequency_filter(&constant, kind);
        assert!(out.pixels().iter().all(|x| *x == 0), "{kind:?}");
    }
}

#[test]
fn spatial_filter_border_pixels() {
    #[rustfmt::skip]
    let raster = Raster::from_u8(&[
        0, 0, 0, 0,
        0, 90, 0, 0,
        0, 0, 0, 0,
    ], 4, 3).unwrap();

    // only windows touching (1,1) see the bright pixel
    let max = apply_filter(&raster, FilterKind::Max);
    assert_eq!(max.get(0, 0), 255);
    assert_eq!(max.get(3, 2), 0);
    assert_eq!(max.get(3, 0), 0);
    assert_eq!(max.get(2, 2), 255);
}

#[test]
fn hu_moments_of_disk_translation_invariant() {
    let a = calculate_shape_moments(&disk(80, 80, 25, 30, 12));
    let b = calculate_shape_moments(&disk(80, 80, 50, 55, 12));

    for (x, y) in a.hu.iter().zip(b.hu.iter()) {
        assert!((x - y).abs() <= 1e-9 * x.abs().max(1e-12));
    }
    assert_eq!(a.mu20, b.mu20);
}

#[test]
fn unknown_names_are_rejected() {
    assert!(matches!(
        "bogus".parse::<FilterKind>(),
        Err(DipErrors::InvalidArgument(_))
    ));
    assert!(matches!(
        "bogus".parse::<MorphOperation>(),
        Err(DipErrors::InvalidArgument(_))
    ));
    assert!(matches!(
        "bogus".parse::<FrequencyFilterKind>(),
        Err(DipErrors::InvalidArgument(_))
    ));
}

#[test]
fn opening_and_closing_are_idempotent() {
    let raster = random_raster(48, 48, 11);
    let mask = apply_otsu(&raster).0;

    for op in [MorphOperation::Opening, MorphOperation::Closing] {
        let once = apply_morphology(mask.as_raster(), op);
        let twice = apply_morphology(once.as_raster(), op);
        assert_eq!(once, twice, "{op:?}");
    }
}

#[test]
fn descriptors_of_constant_image() {
    let raster = Raster::fill(10, 16, 16).unwrap();

    let stats = calculate_intensity_stats(&raster);
    assert_eq!(stats.entropy, 0.0);
    assert_eq!(stats.std, 0.0);

    let texture = calculate_haralick_features(&raster);
    assert_eq!(texture.contrast, 0.0);
    assert_eq!(texture.correlation, 1.0);

    // a single non-zero level binarises to a full frame
    let moments = calculate_shape_moments(&raster);
    assert_eq!(moments.m00, 255.0 * 256.0);
    assert_eq!(moments.m10 / moments.m00, 7.5);
    assert_eq!(moments.mu11, 0.0);
}

#[test]
fn spectrum_is_a_raster_of_same_size() {
    let raster = random_raster(30, 20, 5);
    let spectrum = calculate_fourier_spectrum(&raster);

    assert_eq!(spectrum.dimensions(), (30, 20));
    // the mean dominates, so the centre is the brightest pixel
    assert_eq!(spectrum.get(15, 10), 255);
}

#[test]
fn mask_conversion_is_checked() {
    let raster = Raster::from_u8(&[0, 255, 255, 0], 2, 2).unwrap();
    let mask = BinaryMask::try_from_raster(raster.clone()).unwrap();
    assert_eq!(Raster::from(mask), raster);

    let raster = Raster::from_u8(&[0, 1, 255, 0], 2, 2).unwrap();
    assert!(BinaryMask::try_from_raster(raster).is_err());
}
