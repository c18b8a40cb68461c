/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Processing options
//!
//! All tunable parameters for operations and descriptors are put into one
//! `ProcessingOptions` so the same configuration can be reused across calls.
//!
//! The defaults reproduce the classical textbook settings, functions without
//! an `_with_options` suffix use them.
use crate::errors::DipErrors;

/// Direction of the pixel pair counted by the co-occurrence matrix
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GlcmAngle {
    /// Neighbour to the right
    Deg0,
    Deg45,
    Deg90,
    Deg135
}

impl GlcmAngle {
    pub fn from_string_result(input: &str) -> Result<Self, DipErrors> {
        match input {
            "0" => Ok(Self::Deg0),
            "45" => Ok(Self::Deg45),
            "90" => Ok(Self::Deg90),
            "135" => Ok(Self::Deg135),
            _ => Err(DipErrors::InvalidArgument(format!(
                "Unknown GLCM angle {input:?}, accepted values are 0,45,90,135"
            )))
        }
    }

    pub fn radians(self) -> f64 {
        match self {
            GlcmAngle::Deg0 => 0.0,
            GlcmAngle::Deg45 => std::f64::consts::FRAC_PI_4,
            GlcmAngle::Deg90 => std::f64::consts::FRAC_PI_2,
            GlcmAngle::Deg135 => 3.0 * std::f64::consts::FRAC_PI_4
        }
    }
}

/// Processing options
///
/// To remove the annoyance of getters and setters
/// all exposed options are declared public.
#[derive(Debug, Copy, Clone)]
pub struct ProcessingOptions {
    /// Lower and upper percentiles mapped to 0 and 255 by
    /// contrast stretching
    ///
    /// - Default value: `(2.0, 98.0)`
    pub stretch_percentiles:   (f64, f64),
    /// Standard deviation of the gaussian low-pass filter
    ///
    /// - Default value: 1.0
    pub gaussian_sigma:        f64,
    /// Radius of the gaussian low-pass window.
    ///
    /// A radius of 1 gives a 3x3 window, a radius of `4` matches a kernel
    /// truncated at four standard deviations.
    ///
    /// - Default value: 1
    pub gaussian_radius:       usize,
    /// The ideal frequency filter keeps a disc of radius
    /// `min(width,height) / ideal_radius_divisor`
    ///
    /// - Default value: 4
    pub ideal_radius_divisor:  usize,
    /// The gaussian frequency filter uses a sigma of
    /// `min(width,height) / gaussian_mask_divisor`
    ///
    /// - Default value: 6
    pub gaussian_mask_divisor: usize,
    /// Pixel distance between co-occurring pairs
    ///
    /// - Default value: 1
    pub glcm_distance:         usize,
    /// Direction between co-occurring pairs
    ///
    /// - Default value: `GlcmAngle::Deg0`
    pub glcm_angle:            GlcmAngle,
    /// Treat degenerate inputs as errors
    ///
    /// When false, degenerate inputs (a constant image for Otsu, an empty mask
    /// for moments) produce a documented fallback value and a warning is logged.
    ///
    /// When true, `_with_options` functions return
    /// [`DipErrors::DegenerateInput`] instead.
    ///
    /// - Default value: false
    pub strict_mode:           bool
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        ProcessingOptions {
            stretch_percentiles:   (2.0, 98.0),
            gaussian_sigma:        1.0,
            gaussian_radius:       1,
            ideal_radius_divisor:  4,
            gaussian_mask_divisor: 6,
            glcm_distance:         1,
            glcm_angle:            GlcmAngle::Deg0,
            strict_mode:           false
        }
    }
}

impl ProcessingOptions {
    /// Set the percentiles used by contrast stretching
    ///
    /// # Arguments
    ///
    /// * `lower`: Percentile mapped to 0
    /// * `upper`: Percentile mapped to 255
    ///
    /// returns: ProcessingOptions
    #[must_use]
    pub fn set_stretch_percentiles(mut self, lower: f64, upper: f64) -> Self {
        self.stretch_percentiles = (lower, upper);
        self
    }

    #[must_use]
    pub fn set_gaussian_sigma(mut self, sigma: f64) -> Self {
        self.gaussian_sigma = sigma;
        self
    }

    #[must_use]
    pub fn set_gaussian_radius(mut self, radius: usize) -> Self {
        self.gaussian_radius = radius;
        self
    }

    #[must_use]
    pub fn set_ideal_radius_divisor(mut self, divisor: usize) -> Self {
        self.ideal_radius_divisor = divisor;
        self
    }

    #[must_use]
    pub fn set_gaussian_mask_divisor(mut self, divisor: usize) -> Self {
        self.gaussian_mask_divisor = divisor;
        self
    }

    #[must_use]
    pub fn set_glcm_distance(mut self, distance: usize) -> Self {
        self.glcm_distance = distance;
        self
    }

    #[must_use]
    pub fn set_glcm_angle(mut self, angle: GlcmAngle) -> Self {
        self.glcm_angle = angle;
        self
    }

    /// Set whether degenerate inputs should be reported as errors
    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    pub const fn get_stretch_percentiles(&self) -> (f64, f64) {
        self.stretch_percentiles
    }

    pub const fn get_gaussian_sigma(&self) -> f64 {
        self.gaussian_sigma
    }

    pub const fn get_gaussian_radius(&self) -> usize {
        self.gaussian_radius
    }

    pub const fn get_ideal_radius_divisor(&self) -> usize {
        self.ideal_radius_divisor
    }

    pub const fn get_gaussian_mask_divisor(&self) -> usize {
        self.gaussian_mask_divisor
    }

    pub const fn get_glcm_distance(&self) -> usize {
        self.glcm_distance
    }

    pub const fn get_glcm_angle(&self) -> GlcmAngle {
        self.glcm_angle
    }

    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Check that every option is within its valid range
    ///
    /// # Errors
    /// [`DipErrors::InvalidArgument`] naming the first invalid option
    pub fn validate(&self) -> Result<(), DipErrors> {
        let (lower, upper) = self.stretch_percentiles;

        if !(0.0..=100.0).contains(&lower) || !(0.0..=100.0).contains(&upper) || lower > upper {
            return Err(DipErrors::InvalidArgument(format!(
                "Stretch percentiles must satisfy 0 <= lower <= upper <= 100, found ({lower},{upper})"
            )));
        }
        if !(self.gaussian_sigma > 0.0 && self.gaussian_sigma.is_finite()) {
            return Err(DipErrors::InvalidArgument(format!(
                "Gaussian sigma must be positive, found {}",
                self.gaussian_sigma
            )));
        }
        if self.gaussian_radius == 0 {
            return Err(DipErrors::InvalidArgument(
                "Gaussian radius must be at least 1".to_string()
            ));
        }
        if self.ideal_radius_divisor == 0 || self.gaussian_mask_divisor == 0 {
            return Err(DipErrors::InvalidArgument(
                "Frequency filter divisors must be non-zero".to_string()
            ));
        }
        if self.glcm_distance == 0 {
            return Err(DipErrors::InvalidArgument(
                "GLCM distance must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
