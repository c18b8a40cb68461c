/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global thresholding with Otsu's method
//!
//! Otsu's method picks the intensity that best separates the histogram into
//! two classes, i.e the one maximising the between class variance
//! `w0 * w1 * (mu0 - mu1)^2`.
//!
//! Class zero contains every level `<= t`, pixels above the threshold
//! become foreground (`255`) in the output mask.
use crate::errors::DipErrors;
use crate::histogram::calculate_histogram;
use crate::log::{trace, warn};
use crate::options::ProcessingOptions;
use crate::raster::{BinaryMask, Raster, MASK_BACKGROUND, MASK_FOREGROUND};

/// Result of searching a histogram for the Otsu level
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OtsuLevel {
    /// Highest intensity belonging to the background class
    pub level:     u8,
    /// Midpoint between `level` and the next occupied intensity,
    /// any value in that open interval separates the classes identically
    pub threshold: f64
}

/// Find the Otsu level of a histogram
///
/// Returns `None` when fewer than two intensity levels are occupied,
/// in that case there is nothing to separate.
///
/// When several levels give the same between class variance
/// the lowest one is kept.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn otsu_level(histogram: &[u32; 256]) -> Option<OtsuLevel> {
    let total: u64 = histogram.iter().map(|x| u64::from(*x)).sum();
    let total_sum: u64 = histogram
        .iter()
        .enumerate()
        .map(|(level, count)| level as u64 * u64::from(*count))
        .sum();

    let mut best: Option<(usize, f64)> = None;

    let mut w0 = 0_u64;
    let mut sum0 = 0_u64;

    for (level, count) in histogram.iter().enumerate().take(255) {
        w0 += u64::from(*count);
        sum0 += level as u64 * u64::from(*count);

        let w1 = total - w0;

        if w0 == 0 || w1 == 0 {
            continue;
        }
        let mu0 = sum0 as f64 / w0 as f64;
        let mu1 = (total_sum - sum0) as f64 / w1 as f64;

        let variance = (w0 as f64) * (w1 as f64) * (mu0 - mu1) * (mu0 - mu1);

        // strictly greater so that ties keep the lowest level
        if best.map_or(true, |(_, b)| variance > b) {
            best = Some((level, variance));
        }
    }
    let (level, _) = best?;

    // a level was found so at least one occupied intensity lies above it
    let next = histogram[level + 1..]
        .iter()
        .position(|x| *x != 0)
        .map_or(level + 1, |x| level + 1 + x);

    Some(OtsuLevel {
        level:     level as u8,
        threshold: (level + next) as f64 / 2.0
    })
}

/// Outcome of thresholding, `degenerate` is set when the image
/// had a single intensity level
struct OtsuOutcome {
    mask:       BinaryMask,
    threshold:  f64,
    degenerate: bool
}

fn otsu_inner(raster: &Raster) -> OtsuOutcome {
    let histogram = calculate_histogram(raster);

    match otsu_level(&histogram) {
        Some(found) => {
            let pixels = raster
                .pixels()
                .iter()
                .map(|x| {
                    if *x > found.level {
                        MASK_FOREGROUND
                    } else {
                        MASK_BACKGROUND
                    }
                })
                .collect();

            OtsuOutcome {
                mask:       BinaryMask::from_raster_unchecked(Raster::with_dimensions_of(
                    raster, pixels
                )),
                threshold:  found.threshold,
                degenerate: false
            }
        }
        None => {
            // a raster is never empty, so the first pixel is the only level
            let value = raster.pixels()[0];

            OtsuOutcome {
                mask:       BinaryMask::from_raster_unchecked(Raster::with_dimensions_of(
                    raster,
                    vec![MASK_BACKGROUND; raster.len()]
                )),
                threshold:  f64::from(value),
                degenerate: true
            }
        }
    }
}

/// Threshold a raster with Otsu's method
///
/// # Returns
/// The binary mask (`255` where the pixel is above the threshold) and the threshold.
///
/// A raster with a single intensity level has no threshold to find,
/// the value of that level is returned together with an empty mask.
///
/// # Example
/// ```
/// use zune_dip::raster::Raster;
/// use zune_dip::threshold::apply_otsu;
///
/// let raster = Raster::from_fn(4, 4, |x, _| if x < 2 { 50 } else { 200 }).unwrap();
/// let (mask, threshold) = apply_otsu(&raster);
/// assert!(threshold > 50.0 && threshold < 200.0);
/// assert_eq!(mask.count_set(), 8);
/// ```
#[must_use]
pub fn apply_otsu(raster: &Raster) -> (BinaryMask, f64) {
    trace!("Running otsu threshold on {:?} raster", raster.dimensions());

    let outcome = otsu_inner(raster);

    if outcome.degenerate {
        warn!(
            "Otsu threshold on a raster with a single intensity ({}), returning an empty mask",
            outcome.threshold
        );
    }
    (outcome.mask, outcome.threshold)
}

/// Threshold a raster with Otsu's method, honouring the options
///
/// # Errors
/// - [`DipErrors::InvalidArgument`] for invalid options
/// - [`DipErrors::DegenerateInput`] if `strict_mode` is set and the raster has a single
///   intensity level
pub fn apply_otsu_with_options(
    raster: &Raster, options: &ProcessingOptions
) -> Result<(BinaryMask, f64), DipErrors> {
    options.validate()?;

    let outcome = otsu_inner(raster);

    if outcome.degenerate {
        if options.strict_mode {
            return Err(DipErrors::DegenerateInput(
                "Otsu threshold needs at least two intensity levels"
            ));
        }
        warn!(
            "Otsu threshold on a raster with a single intensity ({}), returning an empty mask",
            outcome.threshold
        );
    }
    Ok((outcome.mask, outcome.threshold))
}

/// Otsu foreground used by the shape descriptors
///
/// A raster with a single intensity level is thresholded at `0`,
/// so a non-zero constant raster is entirely foreground.
pub(crate) fn descriptor_foreground(raster: &Raster) -> BinaryMask {
    let outcome = otsu_inner(raster);

    if !outcome.degenerate {
        return outcome.mask;
    }
    let pixels = raster
        .pixels()
        .iter()
        .map(|x| if *x > 0 { MASK_FOREGROUND } else { MASK_BACKGROUND })
        .collect();

    BinaryMask::from_raster_unchecked(Raster::with_dimensions_of(raster, pixels))
}

/// Return `raster` as a mask, running Otsu only when it contains
/// values other than `0` and `255`
pub(crate) fn binarize(raster: &Raster) -> BinaryMask {
    if raster.is_binary() {
        BinaryMask::from_raster_unchecked(raster.clone())
    } else {
        apply_otsu(raster).0
    }
}
