/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Frequency domain filtering
//!
//! The raster is transformed, shifted so the zero frequency sits at
//! `(cols/2, rows/2)`, multiplied by a mask, shifted back and transformed back.
//! The magnitude of the result is normalised to 8 bits.
use core::str::FromStr;

use rustfft::FftDirection;

use crate::errors::DipErrors;
use crate::fourier::{fft2, fftshift, forward_fft, ifftshift};
use crate::log::trace;
use crate::normalize::normalize_to_u8;
use crate::options::ProcessingOptions;
use crate::raster::Raster;

/// Frequency filters that can be applied to a raster
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FrequencyFilterKind {
    /// Keep frequencies inside a disc
    IdealLow,
    /// Keep frequencies outside a disc
    IdealHigh,
    /// Gaussian attenuation of high frequencies
    GaussianLow,
    /// Gaussian attenuation of low frequencies
    GaussianHigh
}

impl FrequencyFilterKind {
    pub const ALL: [FrequencyFilterKind; 4] = [
        FrequencyFilterKind::IdealLow,
        FrequencyFilterKind::IdealHigh,
        FrequencyFilterKind::GaussianLow,
        FrequencyFilterKind::GaussianHigh
    ];

    pub fn from_string_result(input: &str) -> Result<Self, DipErrors> {
        match input {
            "ideal_low" => Ok(Self::IdealLow),
            "ideal_high" => Ok(Self::IdealHigh),
            "gaussian_low" => Ok(Self::GaussianLow),
            "gaussian_high" => Ok(Self::GaussianHigh),
            _ => Err(DipErrors::InvalidArgument(format!(
                "Unknown frequency filter {input:?}, accepted values are ideal_low,ideal_high,gaussian_low,gaussian_high"
            )))
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FrequencyFilterKind::IdealLow => "ideal_low",
            FrequencyFilterKind::IdealHigh => "ideal_high",
            FrequencyFilterKind::GaussianLow => "gaussian_low",
            FrequencyFilterKind::GaussianHigh => "gaussian_high"
        }
    }

    const fn is_high_pass(self) -> bool {
        matches!(
            self,
            FrequencyFilterKind::IdealHigh | FrequencyFilterKind::GaussianHigh
        )
    }
}

impl FromStr for FrequencyFilterKind {
    type Err = DipErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FrequencyFilterKind::from_string_result(s)
    }
}

/// Create the centred filter mask for a `width x height` spectrum
///
/// - Ideal filters use the disc `d^2 <= r^2` with `r = min(width,height) / ideal_radius_divisor`
/// - Gaussian filters use `exp(-d^2 / (2 sigma^2))` with
///   `sigma = max(min(width,height) / gaussian_mask_divisor, 1)`
///
/// High pass masks are `1 - low pass mask`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn frequency_mask(
    width: usize, height: usize, kind: FrequencyFilterKind, options: &ProcessingOptions
) -> Vec<f64> {
    let shortest = width.min(height);

    let centre_x = (width / 2) as f64;
    let centre_y = (height / 2) as f64;

    let radius = (shortest / options.get_ideal_radius_divisor().max(1)) as f64;
    let sigma = (shortest / options.get_gaussian_mask_divisor().max(1)).max(1) as f64;

    let mut mask = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let dx = x as f64 - centre_x;
            let dy = y as f64 - centre_y;
            let distance = dx * dx + dy * dy;

            let low = match kind {
                FrequencyFilterKind::IdealLow | FrequencyFilterKind::IdealHigh => {
                    if distance <= radius * radius {
                        1.0
                    } else {
                        0.0
                    }
                }
                FrequencyFilterKind::GaussianLow | FrequencyFilterKind::GaussianHigh => {
                    (-distance / (2.0 * sigma * sigma)).exp()
                }
            };

            mask.push(if kind.is_high_pass() { 1.0 - low } else { low });
        }
    }
    mask
}

fn frequency_inner(
    raster: &Raster, kind: FrequencyFilterKind, options: &ProcessingOptions
) -> Raster {
    trace!("Applying {} frequency filter", kind.name());

    let (width, height) = raster.dimensions();

    let mask = frequency_mask(width, height, kind, options);

    let mut shifted = fftshift(&forward_fft(raster), width, height);

    for (value, weight) in shifted.iter_mut().zip(mask.iter()) {
        *value *= *weight;
    }

    let mut spatial = ifftshift(&shifted, width, height);
    fft2(&mut spatial, width, height, FftDirection::Inverse);

    let magnitude: Vec<f64> = spatial.iter().map(|x| x.norm()).collect();

    Raster::with_dimensions_of(raster, normalize_to_u8(&magnitude))
}

/// Filter a raster in the frequency domain using the default mask sizes
#[must_use]
pub fn frequency_filter(raster: &Raster, kind: FrequencyFilterKind) -> Raster {
    frequency_inner(raster, kind, &ProcessingOptions::default())
}

/// Filter a raster in the frequency domain, mask sizes come from `options`
///
/// # Errors
/// [`DipErrors::InvalidArgument`] for invalid options
pub fn frequency_filter_with_options(
    raster: &Raster, kind: FrequencyFilterKind, options: &ProcessingOptions
) -> Result<Raster, DipErrors> {
    options.validate()?;

    Ok(frequency_inner(raster, kind, options))
}

#[cfg(test)]
mod tests {
    use crate::errors::DipErrors;
    use crate::frequency::{frequency_filter, frequency_mask, FrequencyFilterKind};
    use crate::options::ProcessingOptions;
    use crate::raster::Raster;

    #[test]
    fn test_parse_names() {
        for kind in FrequencyFilterKind::ALL {
            assert_eq!(kind.name().parse::<FrequencyFilterKind>().unwrap(), kind);
        }
        assert!(matches!(
            "bogus".parse::<FrequencyFilterKind>(),
            Err(DipErrors::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_ideal_mask_disc() {
        let options = ProcessingOptions::default();
        // min(16,12)/4 = 3
        let mask = frequency_mask(16, 12, FrequencyFilterKind::IdealLow, &options);

        assert_eq!(mask[6 * 16 + 8], 1.0);
        assert_eq!(mask[6 * 16 + 11], 1.0);
        assert_eq!(mask[6 * 16 + 12], 0.0);
        assert_eq!(mask[0], 0.0);

        let high = frequency_mask(16, 12, FrequencyFilterKind::IdealHigh, &options);
        for (l, h) in mask.iter().zip(high.iter()) {
            assert_eq!(l + h, 1.0);
        }
    }

    #[test]
    fn test_gaussian_mask_peak() {
        let options = ProcessingOptions::default();
        let mask = frequency_mask(4, 4, FrequencyFilterKind::GaussianLow, &options);

        // sigma is clamped to one for tiny images
        assert_eq!(mask[2 * 4 + 2], 1.0);
        assert!((mask[2 * 4 + 3] - (-0.5_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_constant_image_gives_zeros() {
        let raster = Raster::fill(120, 9, 8).unwrap();

        for kind in FrequencyFilterKind::ALL {
            let out = frequency_filter(&raster, kind);
            assert!(out.pixels().iter().all(|x| *x == 0), "{kind:?}");
        }
    }

    #[test]
    fn test_ideal_low_pass_removes_checkerboard() {
        let raster = Raster::from_fn(32, 32, |x, y| if (x + y) % 2 == 0 { 0 } else { 255 }).unwrap();

        // a checkerboard is a mean plus the highest frequency, which lies outside the disc
        let out = frequency_filter(&raster, FrequencyFilterKind::IdealLow);
        assert!(out.pixels().iter().all(|x| *x == 0));

        let out = frequency_filter(&raster, FrequencyFilterKind::GaussianLow);
        assert_eq!(out.dimensions(), (32, 32));
    }

    #[test]
    fn test_high_pass_removes_mean() {
        // mean of 100 plus a checkerboard and alternating columns, both at
        // frequencies far outside the disc
        let raster = Raster::from_fn(32, 32, |x, y| {
            let checker = if (x + y) % 2 == 0 { 30 } else { -30 };
            let columns = if x % 2 == 0 { 10 } else { -10 };
            (100 + checker + columns) as u8
        })
        .unwrap();

        // without the mean, even rows have magnitude 40 and odd rows 20,
        // which normalise to the two ends of the range
        let out = frequency_filter(&raster, FrequencyFilterKind::IdealHigh);
        for y in 0..32 {
            for x in 0..32 {
                let value = out.get(x, y);
                if y % 2 == 0 {
                    assert!(value >= 254, "({x},{y}) {value}");
                } else {
                    assert!(value <= 1, "({x},{y}) {value}");
                }
            }
        }

        let out = frequency_filter(&raster, FrequencyFilterKind::GaussianHigh);
        for x in 0..32 {
            assert!(out.get(x, 0) > out.get(x, 1));
        }
        assert!(out.pixels().iter().any(|x| *x == 0));
    }
}
