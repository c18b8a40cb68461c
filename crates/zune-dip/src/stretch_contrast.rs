/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Percentile based contrast stretching
//!
//! The intensities at the lower and upper percentile are found from the histogram,
//! pixels are clipped to that range and remapped linearly onto `0..=255`.
use crate::errors::DipErrors;
use crate::histogram::{calculate_histogram, cumulative, value_at_rank};
use crate::log::{trace, warn};
use crate::options::ProcessingOptions;
use crate::raster::Raster;

/// Value at percentile `p` (0..=100) with linear interpolation between
/// the two nearest order statistics.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn percentile(cdf: &[u64; 256], p: f64) -> f64 {
    let total = cdf[255];
    let position = (p / 100.0) * (total - 1) as f64;

    let lower_rank = position.floor() as u64;
    let upper_rank = (lower_rank + 1).min(total - 1);
    let fraction = position - lower_rank as f64;

    let lower = f64::from(value_at_rank(cdf, lower_rank));
    let upper = f64::from(value_at_rank(cdf, upper_rank));

    lower + (upper - lower) * fraction
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn stretch_inner(raster: &Raster, lower_p: f64, upper_p: f64) -> (Raster, bool) {
    let cdf = cumulative(&calculate_histogram(raster));

    let low = percentile(&cdf, lower_p);
    let high = percentile(&cdf, upper_p);

    trace!("Stretching contrast between {low} and {high}");

    if high <= low {
        return (
            Raster::with_dimensions_of(raster, vec![0; raster.len()]),
            true
        );
    }
    let range = high - low;

    // only 256 possible inputs, so map through a table
    let mut lut = [0_u8; 256];

    for (value, out) in lut.iter_mut().enumerate() {
        let clipped = (value as f64).clamp(low, high);
        // truncates, dividing first keeps `high` exactly on 255
        *out = ((clipped - low) / range * 255.0) as u8;
    }

    let pixels = raster
        .pixels()
        .iter()
        .map(|x| lut[usize::from(*x)])
        .collect();

    (Raster::with_dimensions_of(raster, pixels), false)
}

/// Stretch the contrast of a raster between its 2nd and 98th percentile
///
/// Intensities at or below the 2nd percentile become `0`, those at or above the 98th
/// become `255` and everything in between is remapped linearly.
///
/// If both percentiles are equal the image has no spread to stretch and
/// an all zero raster is returned.
#[must_use]
pub fn contrast_stretching(raster: &Raster) -> Raster {
    let (lower, upper) = ProcessingOptions::default().get_stretch_percentiles();
    let (out, flat) = stretch_inner(raster, lower, upper);

    if flat {
        warn!("Contrast stretch percentiles are equal, returning a zero raster");
    }
    out
}

/// Stretch the contrast of a raster between the percentiles in `options`
///
/// # Errors
/// - [`DipErrors::InvalidArgument`] for invalid options
/// - [`DipErrors::DegenerateInput`] if `strict_mode` is set and both percentiles
///   fall on the same intensity
pub fn contrast_stretching_with_options(
    raster: &Raster, options: &ProcessingOptions
) -> Result<Raster, DipErrors> {
    options.validate()?;

    let (lower, upper) = options.get_stretch_percentiles();
    let (out, flat) = stretch_inner(raster, lower, upper);

    if flat {
        if options.strict_mode {
            return Err(DipErrors::DegenerateInput(
                "Contrast stretch percentiles are equal"
            ));
        }
        warn!("Contrast stretch percentiles are equal, returning a zero raster");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use crate::histogram::{cumulative, histogram};
    use crate::options::ProcessingOptions;
    use crate::raster::Raster;
    use crate::stretch_contrast::{
        contrast_stretching, contrast_stretching_with_options, percentile
    };

    #[test]
    fn test_percentile_interpolates() {
        // sorted: 0 10 20 30 40, 50th percentile sits on 20, 10th between 0 and 10
        let cdf = cumulative(&histogram(&[40, 0, 30, 10, 20]));

        assert_eq!(percentile(&cdf, 50.0), 20.0);
        assert!((percentile(&cdf, 10.0) - 4.0).abs() < 1e-9);
        assert_eq!(percentile(&cdf, 100.0), 40.0);
        assert_eq!(percentile(&cdf, 0.0), 0.0);
    }

    #[test]
    fn test_full_range_is_unchanged() {
        // a large share of pure black and white pins p2 and p98 to 0 and 255
        let raster = Raster::from_fn(64, 64, |x, y| match x {
            0..=7 => 0,
            56..=63 => 255,
            _ => ((x * 4 + y) % 256) as u8
        })
        .unwrap();

        let stretched = contrast_stretching(&raster);
        assert_eq!(stretched, raster);
        assert_eq!(contrast_stretching(&stretched), stretched);
    }

    #[test]
    fn test_narrow_range_is_expanded() {
        let raster = Raster::from_fn(50, 2, |x, _| 100 + (x % 50) as u8).unwrap();
        let stretched = contrast_stretching(&raster);

        let min = *stretched.pixels().iter().min().unwrap();
        let max = *stretched.pixels().iter().max().unwrap();
        assert_eq!((min, max), (0, 255));
    }

    #[test]
    fn test_ramp_truncates_to_lower_level() {
        let raster = Raster::from_fn(200, 1, |x, _| x as u8).unwrap();
        let stretched = contrast_stretching(&raster);

        let cdf = cumulative(&histogram(raster.pixels()));
        let (low, high) = (percentile(&cdf, 2.0), percentile(&cdf, 98.0));

        assert!((low - 3.98).abs() < 1e-9);
        assert!((high - 195.02).abs() < 1e-9);

        for (input, output) in raster.pixels().iter().zip(stretched.pixels()) {
            let clipped = f64::from(*input).clamp(low, high);
            let expected = ((clipped - low) / (high - low) * 255.0).floor() as u8;

            assert_eq!(*output, expected, "input {input}");
        }
        // (6 - 3.98) / 191.04 * 255 = 2.69
        assert_eq!(stretched.get(6, 0), 2);
        assert_eq!(stretched.get(199, 0), 255);
    }

    #[test]
    fn test_equal_percentiles_give_zeros() {
        let raster = Raster::fill(90, 8, 8).unwrap();
        assert!(contrast_stretching(&raster)
            .pixels()
            .iter()
            .all(|x| *x == 0));

        let options = ProcessingOptions::default().set_strict_mode(true);
        assert!(contrast_stretching_with_options(&raster, &options).is_err());
    }
}
