/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image moments and Hu invariants of the Otsu foreground
//!
//! Moments are weighted by the sample values of the binarised raster (`0` or `255`),
//! so `m00` is `255` times the foreground area. Hu's seven invariants
//! depend only on the normalised central moments and are therefore unchanged
//! by translation, scaling and rotation of the shape.
use crate::errors::DipErrors;
use crate::log::{trace, warn};
use crate::options::ProcessingOptions;
use crate::raster::{BinaryMask, Raster};
use crate::threshold::descriptor_foreground;

/// Spatial, central and Hu moments of a binary shape
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct ShapeMoments {
    pub m00:  f64,
    pub m10:  f64,
    pub m01:  f64,
    pub m20:  f64,
    pub m11:  f64,
    pub m02:  f64,
    pub mu20: f64,
    pub mu11: f64,
    pub mu02: f64,
    pub mu30: f64,
    pub mu21: f64,
    pub mu12: f64,
    pub mu03: f64,
    pub hu:   [f64; 7]
}

impl ShapeMoments {
    pub fn spatial_entries(&self) -> [(&'static str, f64); 6] {
        [
            ("m00", self.m00),
            ("m10", self.m10),
            ("m01", self.m01),
            ("m20", self.m20),
            ("m11", self.m11),
            ("m02", self.m02)
        ]
    }

    pub fn central_entries(&self) -> [(&'static str, f64); 7] {
        [
            ("mu20", self.mu20),
            ("mu11", self.mu11),
            ("mu02", self.mu02),
            ("mu30", self.mu30),
            ("mu21", self.mu21),
            ("mu12", self.mu12),
            ("mu03", self.mu03)
        ]
    }

    /// All moments as `(name, value)` pairs, Hu invariants are named `hu1` to `hu7`
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        const HU_NAMES: [&str; 7] = ["hu1", "hu2", "hu3", "hu4", "hu5", "hu6", "hu7"];

        let mut entries = Vec::with_capacity(20);

        entries.extend(self.spatial_entries());
        entries.extend(self.central_entries());
        entries.extend(HU_NAMES.iter().copied().zip(self.hu));

        entries
    }
}

/// Calculate moments of a mask
///
/// An empty mask has `m00 == 0`, there is no centroid so every central
/// moment and every Hu invariant is reported as zero.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn moments_of_mask(mask: &BinaryMask) -> ShapeMoments {
    let raster = mask.as_raster();
    let (width, _) = raster.dimensions();

    let mut moments = ShapeMoments::default();

    for (y, row) in raster.pixels().chunks_exact(width).enumerate() {
        let y = y as f64;

        for (x, value) in row.iter().enumerate().filter(|(_, v)| **v != 0) {
            let x = x as f64;
            let v = f64::from(*value);

            moments.m00 += v;
            moments.m10 += x * v;
            moments.m01 += y * v;
            moments.m20 += x * x * v;
            moments.m11 += x * y * v;
            moments.m02 += y * y * v;
        }
    }

    if moments.m00 == 0.0 {
        return moments;
    }

    let cx = moments.m10 / moments.m00;
    let cy = moments.m01 / moments.m00;

    // second pass from the centroid, subtracting raw moments loses precision
    for (y, row) in raster.pixels().chunks_exact(width).enumerate() {
        let dy = y as f64 - cy;

        for (x, value) in row.iter().enumerate().filter(|(_, v)| **v != 0) {
            let dx = x as f64 - cx;
            let v = f64::from(*value);

            moments.mu20 += dx * dx * v;
            moments.mu11 += dx * dy * v;
            moments.mu02 += dy * dy * v;
            moments.mu30 += dx * dx * dx * v;
            moments.mu21 += dx * dx * dy * v;
            moments.mu12 += dx * dy * dy * v;
            moments.mu03 += dy * dy * dy * v;
        }
    }
    moments.hu = hu_moments(&moments);

    moments
}

/// Hu's seven invariants from the central moments
fn hu_moments(m: &ShapeMoments) -> [f64; 7] {
    // eta_pq = mu_pq / m00^(1 + (p+q)/2)
    let second = m.m00 * m.m00;
    let third = second * m.m00.sqrt();

    let n20 = m.mu20 / second;
    let n11 = m.mu11 / second;
    let n02 = m.mu02 / second;
    let n30 = m.mu30 / third;
    let n21 = m.mu21 / third;
    let n12 = m.mu12 / third;
    let n03 = m.mu03 / third;

    let t0 = n30 + n12;
    let t1 = n21 + n03;
    let q0 = n30 - 3.0 * n12;
    let q1 = 3.0 * n21 - n03;

    let d = n20 - n02;

    [
        n20 + n02,
        d * d + 4.0 * n11 * n11,
        q0 * q0 + q1 * q1,
        t0 * t0 + t1 * t1,
        q0 * t0 * (t0 * t0 - 3.0 * t1 * t1) + q1 * t1 * (3.0 * t0 * t0 - t1 * t1),
        d * (t0 * t0 - t1 * t1) + 4.0 * n11 * t0 * t1,
        q1 * t0 * (t0 * t0 - 3.0 * t1 * t1) - q0 * t1 * (3.0 * t0 * t0 - t1 * t1)
    ]
}

/// Calculate shape moments of the Otsu foreground of a raster
///
/// A raster with a single intensity level is thresholded at `0`, a non-zero
/// constant raster is therefore one solid shape.
///
/// # Example
/// ```
/// use zune_dip::raster::Raster;
/// use zune_dip::descriptors::calculate_shape_moments;
///
/// let raster = Raster::from_fn(8, 8, |x, y| if x >= 4 && y >= 4 { 255 } else { 0 }).unwrap();
/// let moments = calculate_shape_moments(&raster);
/// assert_eq!(moments.m00, 255.0 * 16.0);
/// assert_eq!(moments.m10 / moments.m00, 5.5);
/// ```
#[must_use]
pub fn calculate_shape_moments(raster: &Raster) -> ShapeMoments {
    trace!("Calculating shape moments");

    moments_of_mask(&descriptor_foreground(raster))
}

/// Calculate shape moments, binarising with `options`
///
/// # Errors
/// - [`DipErrors::InvalidArgument`] for invalid options
/// - [`DipErrors::DegenerateInput`] if `strict_mode` is set and the foreground is empty
pub fn calculate_shape_moments_with_options(
    raster: &Raster, options: &ProcessingOptions
) -> Result<ShapeMoments, DipErrors> {
    options.validate()?;

    let moments = moments_of_mask(&descriptor_foreground(raster));

    if moments.m00 == 0.0 {
        if options.get_strict_mode() {
            return Err(DipErrors::DegenerateInput(
                "Shape moments need a non-empty foreground"
            ));
        }
        warn!("Empty foreground, central and hu moments are zero");
    }
    Ok(moments)
}
