/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Gray level co-occurrence matrix and Haralick texture features
//!
//! The co-occurrence matrix counts how often intensity `i` is found
//! at a fixed offset from intensity `j`. It is made symmetric (each pair is counted
//! in both directions) and normalised so that its entries sum to one.
use crate::errors::DipErrors;
use crate::log::{trace, warn};
use crate::options::{GlcmAngle, ProcessingOptions};
use crate::raster::Raster;

/// Number of gray levels in the co-occurrence matrix
pub const GLCM_LEVELS: usize = 256;

/// Texture features derived from the co-occurrence matrix
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct HaralickFeatures {
    pub contrast:      f64,
    pub dissimilarity: f64,
    pub homogeneity:   f64,
    /// Square root of the angular second moment
    pub energy:        f64,
    pub correlation:   f64,
    /// Angular second moment
    pub asm:           f64
}

impl HaralickFeatures {
    /// Features as `(name, value)` pairs
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("contrast", self.contrast),
            ("dissimilarity", self.dissimilarity),
            ("homogeneity", self.homogeneity),
            ("energy", self.energy),
            ("correlation", self.correlation),
            ("asm", self.asm),
        ]
    }
}

/// Row and column offset of the neighbour for a distance and angle
#[allow(clippy::cast_possible_truncation)]
fn glcm_offset(distance: usize, angle: GlcmAngle) -> (isize, isize) {
    let theta = angle.radians();
    let distance = distance as f64;

    (
        (theta.sin() * distance).round() as isize,
        (theta.cos() * distance).round() as isize
    )
}

/// Build the symmetric, normalised co-occurrence matrix of a raster
///
/// The returned matrix is row major, `GLCM_LEVELS x GLCM_LEVELS`, entry
/// `(i, j)` at `i * GLCM_LEVELS + j`.
///
/// If no pixel has a neighbour at the requested offset, e.g. an image
/// narrower than the distance, the matrix is all zeros.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
#[must_use]
pub fn co_occurrence_matrix(raster: &Raster, distance: usize, angle: GlcmAngle) -> Vec<f64> {
    let (width, height) = raster.dimensions();
    let (offset_row, offset_col) = glcm_offset(distance, angle);

    let mut counts = vec![0_u64; GLCM_LEVELS * GLCM_LEVELS];

    let row_start = (-offset_row).max(0);
    let row_end = (height as isize).min(height as isize - offset_row);
    let col_start = (-offset_col).max(0);
    let col_end = (width as isize).min(width as isize - offset_col);

    for row in row_start..row_end {
        for col in col_start..col_end {
            let i = raster.get(col as usize, row as usize);
            let j = raster.get((col + offset_col) as usize, (row + offset_row) as usize);

            counts[usize::from(i) * GLCM_LEVELS + usize::from(j)] += 1;
            counts[usize::from(j) * GLCM_LEVELS + usize::from(i)] += 1;
        }
    }

    let total: u64 = counts.iter().sum();

    if total == 0 {
        return vec![0.0; GLCM_LEVELS * GLCM_LEVELS];
    }
    let total = total as f64;

    counts.iter().map(|x| *x as f64 / total).collect()
}

/// Compute the texture features of a normalised co-occurrence matrix
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn haralick_from_matrix(matrix: &[f64]) -> HaralickFeatures {
    assert_eq!(matrix.len(), GLCM_LEVELS * GLCM_LEVELS);

    let mut features = HaralickFeatures::default();

    let mut mean_i = 0.0;
    let mut mean_j = 0.0;

    for (i, row) in matrix.chunks_exact(GLCM_LEVELS).enumerate() {
        for (j, p) in row.iter().enumerate().filter(|(_, p)| **p != 0.0) {
            let diff = i as f64 - j as f64;

            features.contrast += p * diff * diff;
            features.dissimilarity += p * diff.abs();
            features.homogeneity += p / (1.0 + diff * diff);
            features.asm += p * p;

            mean_i += p * i as f64;
            mean_j += p * j as f64;
        }
    }
    features.energy = features.asm.sqrt();

    let mut var_i = 0.0;
    let mut var_j = 0.0;
    let mut covariance = 0.0;

    for (i, row) in matrix.chunks_exact(GLCM_LEVELS).enumerate() {
        for (j, p) in row.iter().enumerate().filter(|(_, p)| **p != 0.0) {
            let di = i as f64 - mean_i;
            let dj = j as f64 - mean_j;

            var_i += p * di * di;
            var_j += p * dj * dj;
            covariance += p * di * dj;
        }
    }
    let std_i = var_i.sqrt();
    let std_j = var_j.sqrt();

    // a flat distribution along either axis is perfectly correlated
    features.correlation = if std_i < 1e-15 || std_j < 1e-15 {
        1.0
    } else {
        covariance / (std_i * std_j)
    };

    features
}

/// Calculate texture features at distance 1, angle 0
#[must_use]
pub fn calculate_haralick_features(raster: &Raster) -> HaralickFeatures {
    let options = ProcessingOptions::default();

    trace!("Calculating haralick features");

    haralick_from_matrix(&co_occurrence_matrix(
        raster,
        options.get_glcm_distance(),
        options.get_glcm_angle()
    ))
}

/// Calculate texture features at the distance and angle in `options`
///
/// # Errors
/// - [`DipErrors::InvalidArgument`] for invalid options
/// - [`DipErrors::DegenerateInput`] if `strict_mode` is set and no pixel pair exists
///   at the requested offset
pub fn calculate_haralick_features_with_options(
    raster: &Raster, options: &ProcessingOptions
) -> Result<HaralickFeatures, DipErrors> {
    options.validate()?;

    trace!(
        "Calculating haralick features, distance {} angle {:?}",
        options.get_glcm_distance(),
        options.get_glcm_angle()
    );

    let matrix = co_occurrence_matrix(raster, options.get_glcm_distance(), options.get_glcm_angle());

    if matrix.iter().all(|x| *x == 0.0) {
        if options.get_strict_mode() {
            return Err(DipErrors::DegenerateInput(
                "No pixel pairs exist at the requested co-occurrence offset"
            ));
        }
        warn!("No pixel pairs at the co-occurrence offset, features are zero");
    }
    Ok(haralick_from_matrix(&matrix))
}

#[cfg(test)]
mod tests {
    use crate::descriptors::haralick::{
        calculate_haralick_features, calculate_haralick_features_with_options,
        co_occurrence_matrix, GLCM_LEVELS
    };
    use crate::options::{GlcmAngle, ProcessingOptions};
    use crate::raster::Raster;

    #[test]
    fn test_constant_image() {
        let raster = Raster::fill(60, 8, 8).unwrap();
        let features = calculate_haralick_features(&raster);

        assert_eq!(features.contrast, 0.0);
        assert_eq!(features.dissimilarity, 0.0);
        assert_eq!(features.homogeneity, 1.0);
        assert_eq!(features.asm, 1.0);
        assert_eq!(features.energy, 1.0);
        assert_eq!(features.correlation, 1.0);
    }

    #[test]
    fn test_known_matrix() {
        // rows 0 1 / 0 1 : every horizontal pair is (0,1)
        let raster = Raster::from_u8(&[0, 1, 0, 1], 2, 2).unwrap();
        let matrix = co_occurrence_matrix(&raster, 1, GlcmAngle::Deg0);

        assert_eq!(matrix[1], 0.5);
        assert_eq!(matrix[GLCM_LEVELS], 0.5);
        assert_eq!(matrix.iter().sum::<f64>(), 1.0);

        let features = calculate_haralick_features(&raster);
        assert_eq!(features.contrast, 1.0);
        assert_eq!(features.dissimilarity, 1.0);
        assert_eq!(features.homogeneity, 0.5);
        assert_eq!(features.asm, 0.5);
        assert!((features.correlation + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_angle() {
        // rows alternate, columns are constant
        let raster = Raster::from_fn(4, 4, |_, y| if y % 2 == 0 { 10 } else { 20 }).unwrap();

        let horizontal = calculate_haralick_features(&raster);
        assert_eq!(horizontal.contrast, 0.0);

        let options = ProcessingOptions::default().set_glcm_angle(GlcmAngle::Deg90);
        let vertical = calculate_haralick_features_with_options(&raster, &options).unwrap();
        assert_eq!(vertical.contrast, 100.0);
    }

    #[test]
    fn test_no_pairs() {
        let raster = Raster::from_u8(&[1, 2, 3], 1, 3).unwrap();
        let features = calculate_haralick_features(&raster);

        assert_eq!(features.contrast, 0.0);
        assert_eq!(features.asm, 0.0);
        assert_eq!(features.homogeneity, 0.0);
        assert_eq!(features.correlation, 1.0);

        let strict = ProcessingOptions::default().set_strict_mode(true);
        assert!(calculate_haralick_features_with_options(&raster, &strict).is_err());
    }
}
