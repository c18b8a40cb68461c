/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Histogram equalization
//!
//! Each intensity `v` is mapped to `floor(255 * cdf(v) / total)` where `cdf(v)`
//! is the number of pixels less than or equal to `v`.
//!
//! The mapping is computed with integers only, so equalizing an already
//! equalized raster returns it unchanged.
use crate::histogram::{calculate_histogram, cumulative};
use crate::log::trace;
use crate::raster::Raster;

/// Build the lookup table mapping every intensity to its equalized value
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn equalization_table(histogram: &[u32; 256]) -> [u8; 256] {
    let cdf = cumulative(histogram);
    let total = cdf[255].max(1);

    let mut lut = [0_u8; 256];

    for (out, count) in lut.iter_mut().zip(cdf.iter()) {
        *out = ((255 * count) / total) as u8;
    }
    lut
}

/// Equalize the histogram of a raster
///
/// # Example
/// ```
/// use zune_dip::raster::Raster;
/// use zune_dip::equalize::histogram_equalization;
///
/// let raster = Raster::from_fn(16, 16, |x, y| (y * 16 + x) as u8).unwrap();
/// // a uniform histogram is already equalized
/// assert_eq!(histogram_equalization(&raster), raster);
/// ```
#[must_use]
pub fn histogram_equalization(raster: &Raster) -> Raster {
    trace!("Equalizing histogram of {:?} raster", raster.dimensions());

    let lut = equalization_table(&calculate_histogram(raster));

    let pixels = raster
        .pixels()
        .iter()
        .map(|x| lut[usize::from(*x)])
        .collect();

    Raster::with_dimensions_of(raster, pixels)
}
