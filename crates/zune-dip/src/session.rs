/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An editing session over a single raster
//!
//! The session keeps three rasters
//!
//! - `original`: the raster the session was created with, never modified
//! - `current`: input of the next operation
//! - `processed`: output of the last operation, if any
//!
//! Operations are chained, each one reads `current` and replaces it with its output.
//! [`ImageSession::reset`] goes back to the original.
use crate::descriptors::{
    calculate_haralick_features_with_options, calculate_intensity_stats,
    calculate_shape_moments_with_options, HaralickFeatures, IntensityStats, ShapeMoments
};
use crate::equalize::histogram_equalization;
use crate::errors::DipErrors;
use crate::filters::{apply_filter_with_options, FilterKind};
use crate::fourier::calculate_fourier_spectrum;
use crate::frequency::{frequency_filter_with_options, FrequencyFilterKind};
use crate::histogram::calculate_histogram;
use crate::log::{debug, trace};
use crate::morphology::{apply_morphology_with_options, MorphOperation};
use crate::options::ProcessingOptions;
use crate::raster::Raster;
use crate::stretch_contrast::contrast_stretching_with_options;
use crate::threshold::apply_otsu_with_options;

/// A chain of operations applied to one raster
///
/// # Example
/// ```
/// use zune_dip::raster::Raster;
/// use zune_dip::session::ImageSession;
/// use zune_dip::filters::FilterKind;
///
/// let raster = Raster::from_fn(16, 16, |x, y| (x * y) as u8).unwrap();
/// let mut session = ImageSession::new(raster.clone());
///
/// session.filter(FilterKind::Median).unwrap();
/// session.otsu().unwrap();
/// assert!(session.current().is_binary());
///
/// session.reset();
/// assert_eq!(session.current(), &raster);
/// ```
#[derive(Clone, Debug)]
pub struct ImageSession {
    original:       Raster,
    current:        Raster,
    processed:      Option<Raster>,
    last_threshold: Option<f64>,
    options:        ProcessingOptions
}

impl ImageSession {
    /// Start a session using default options
    pub fn new(raster: Raster) -> ImageSession {
        ImageSession::new_with_options(raster, ProcessingOptions::default())
    }

    /// Start a session whose operations use `options`
    pub fn new_with_options(raster: Raster, options: ProcessingOptions) -> ImageSession {
        debug!("Starting session on {:?} raster", raster.dimensions());

        ImageSession {
            current: raster.clone(),
            original: raster,
            processed: None,
            last_threshold: None,
            options
        }
    }

    pub const fn original(&self) -> &Raster {
        &self.original
    }

    pub const fn current(&self) -> &Raster {
        &self.current
    }

    /// Output of the last operation, `None` before the first
    /// operation and after a reset
    pub const fn processed(&self) -> Option<&Raster> {
        self.processed.as_ref()
    }

    /// Threshold found by the last call to [`ImageSession::otsu`]
    pub const fn last_threshold(&self) -> Option<f64> {
        self.last_threshold
    }

    pub const fn options(&self) -> &ProcessingOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ProcessingOptions) {
        self.options = options;
    }

    fn store(&mut self, raster: Raster) -> &Raster {
        self.current = raster.clone();
        self.processed.insert(raster)
    }

    /// Threshold the current raster with Otsu's method
    ///
    /// # Errors
    /// See [`apply_otsu_with_options`](crate::threshold::apply_otsu_with_options)
    pub fn otsu(&mut self) -> Result<&Raster, DipErrors> {
        let (mask, threshold) = apply_otsu_with_options(&self.current, &self.options)?;

        trace!("Otsu threshold {threshold}");
        self.last_threshold = Some(threshold);

        Ok(self.store(mask.into_raster()))
    }

    /// # Errors
    /// See [`contrast_stretching_with_options`](crate::stretch_contrast::contrast_stretching_with_options)
    pub fn stretch_contrast(&mut self) -> Result<&Raster, DipErrors> {
        let out = contrast_stretching_with_options(&self.current, &self.options)?;
        Ok(self.store(out))
    }

    pub fn equalize_histogram(&mut self) -> &Raster {
        let out = histogram_equalization(&self.current);
        self.store(out)
    }

    /// # Errors
    /// Invalid options
    pub fn filter(&mut self, kind: FilterKind) -> Result<&Raster, DipErrors> {
        let out = apply_filter_with_options(&self.current, kind, &self.options)?;
        Ok(self.store(out))
    }

    /// # Errors
    /// Invalid options
    pub fn frequency_filter(&mut self, kind: FrequencyFilterKind) -> Result<&Raster, DipErrors> {
        let out = frequency_filter_with_options(&self.current, kind, &self.options)?;
        Ok(self.store(out))
    }

    /// # Errors
    /// See [`apply_morphology_with_options`](crate::morphology::apply_morphology_with_options)
    pub fn morphology(&mut self, operation: MorphOperation) -> Result<&Raster, DipErrors> {
        let mask = apply_morphology_with_options(&self.current, operation, &self.options)?;
        Ok(self.store(mask.into_raster()))
    }

    /// Discard every operation, the current raster becomes a copy of the original
    pub fn reset(&mut self) {
        debug!("Resetting session");

        self.current = self.original.clone();
        self.processed = None;
        self.last_threshold = None;
    }

    pub fn histogram(&self) -> [u32; 256] {
        calculate_histogram(&self.current)
    }

    pub fn fourier_spectrum(&self) -> Raster {
        calculate_fourier_spectrum(&self.current)
    }

    pub fn intensity_stats(&self) -> IntensityStats {
        calculate_intensity_stats(&self.current)
    }

    /// # Errors
    /// See [`calculate_haralick_features_with_options`]
    pub fn haralick_features(&self) -> Result<HaralickFeatures, DipErrors> {
        calculate_haralick_features_with_options(&self.current, &self.options)
    }

    /// # Errors
    /// See [`calculate_shape_moments_with_options`]
    pub fn shape_moments(&self) -> Result<ShapeMoments, DipErrors> {
        calculate_shape_moments_with_options(&self.current, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use crate::filters::FilterKind;
    use crate::morphology::MorphOperation;
    use crate::raster::Raster;
    use crate::session::ImageSession;

    fn gradient() -> Raster {
        Raster::from_fn(12, 10, |x, y| (x * 20 + y) as u8).unwrap()
    }

    #[test]
    fn test_operations_chain_on_current() {
        let mut session = ImageSession::new(gradient());
        assert!(session.processed().is_none());

        let sobel = session.filter(FilterKind::Sobel).unwrap().clone();
        assert_eq!(session.current(), &sobel);
        assert_eq!(session.processed(), Some(&sobel));

        session.otsu().unwrap();
        assert!(session.last_threshold().is_some());
        assert!(session.current().is_binary());

        session.morphology(MorphOperation::Closing).unwrap();
        assert!(session.current().is_binary());

        assert_eq!(session.original(), &gradient());
    }

    #[test]
    fn test_reset_restores_original() {
        let mut session = ImageSession::new(gradient());

        session.equalize_histogram();
        session.stretch_contrast().unwrap();
        session.otsu().unwrap();

        session.reset();

        assert_eq!(session.current(), &gradient());
        assert!(session.processed().is_none());
        assert!(session.last_threshold().is_none());
        assert_eq!(session.histogram().iter().sum::<u32>(), 120);
    }
}
