/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! First order intensity statistics
//!
//! Every statistic is derived from the 256 bin histogram, so the
//! pixels are read exactly once.
use crate::histogram::{calculate_histogram, cumulative, value_at_rank};
use crate::log::trace;
use crate::raster::Raster;

/// Summary statistics of pixel intensities
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct IntensityStats {
    pub mean:    f64,
    /// Population standard deviation
    pub std:     f64,
    /// Mean of the two middle values when the pixel count is even
    pub median:  f64,
    pub min:     f64,
    pub max:     f64,
    /// Sum of squared intensities
    pub energy:  f64,
    /// Shannon entropy of the histogram in bits
    pub entropy: f64
}

impl IntensityStats {
    /// Statistics as `(name, value)` pairs
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("mean", self.mean),
            ("std", self.std),
            ("median", self.median),
            ("min", self.min),
            ("max", self.max),
            ("energy", self.energy),
            ("entropy", self.entropy),
        ]
    }
}

/// Calculate intensity statistics of a raster
///
/// # Example
/// ```
/// use zune_dip::raster::Raster;
/// use zune_dip::descriptors::calculate_intensity_stats;
///
/// let raster = Raster::from_u8(&[0, 10, 20, 30], 2, 2).unwrap();
/// let stats = calculate_intensity_stats(&raster);
/// assert_eq!(stats.mean, 15.0);
/// assert_eq!(stats.median, 15.0);
/// assert_eq!(stats.energy, 1400.0);
/// assert_eq!(stats.entropy, 2.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn calculate_intensity_stats(raster: &Raster) -> IntensityStats {
    trace!("Calculating intensity statistics");

    let histogram = calculate_histogram(raster);
    let cdf = cumulative(&histogram);

    let total = cdf[255];
    let total_f = total as f64;

    let mut sum = 0_u64;
    let mut energy = 0_u128;

    for (level, count) in histogram.iter().enumerate() {
        let count = u64::from(*count);
        sum += level as u64 * count;
        energy += (level * level) as u128 * u128::from(count);
    }
    let mean = sum as f64 / total_f;

    let mut variance = 0.0;
    let mut entropy = 0.0;

    for (level, count) in histogram.iter().enumerate().filter(|(_, c)| **c != 0) {
        let count = f64::from(*count);
        let diff = level as f64 - mean;

        variance += count * diff * diff;

        let p = count / total_f;
        entropy -= p * p.log2();
    }
    variance /= total_f;

    let median = if total % 2 == 1 {
        f64::from(value_at_rank(&cdf, total / 2))
    } else {
        let low = f64::from(value_at_rank(&cdf, total / 2 - 1));
        let high = f64::from(value_at_rank(&cdf, total / 2));
        (low + high) / 2.0
    };

    let min = histogram.iter().position(|x| *x != 0).unwrap_or(0);
    let max = histogram.iter().rposition(|x| *x != 0).unwrap_or(0);

    IntensityStats {
        mean,
        std: variance.sqrt(),
        median,
        min: min as f64,
        max: max as f64,
        energy: energy as f64,
        entropy
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::descriptors::intensity::calculate_intensity_stats;
    use crate::raster::Raster;

    #[test]
    fn test_constant_image() {
        let raster = Raster::fill(200, 30, 30).unwrap();
        let stats = calculate_intensity_stats(&raster);

        assert_eq!(stats.mean, 200.0);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.median, 200.0);
        assert_eq!((stats.min, stats.max), (200.0, 200.0));
        assert_eq!(stats.entropy, 0.0);
        // 900 * 200^2 would overflow 8 bit arithmetic many times over
        assert_eq!(stats.energy, 36_000_000.0);
    }

    #[test]
    fn test_matches_direct_computation() {
        let mut pixels = vec![0_u8; 57 * 31];
        nanorand::WyRand::new_seed(99).fill(&mut pixels);

        let raster = Raster::from_u8(&pixels, 57, 31).unwrap();
        let stats = calculate_intensity_stats(&raster);

        let n = pixels.len() as f64;
        let mean = pixels.iter().map(|x| f64::from(*x)).sum::<f64>() / n;
        let variance = pixels
            .iter()
            .map(|x| (f64::from(*x) - mean).powi(2))
            .sum::<f64>()
            / n;

        let mut sorted = pixels.clone();
        sorted.sort_unstable();

        assert!((stats.mean - mean).abs() < 1e-9);
        assert!((stats.std - variance.sqrt()).abs() < 1e-9);
        // odd pixel count
        assert_eq!(stats.median, f64::from(sorted[sorted.len() / 2]));
        assert_eq!(stats.min, f64::from(sorted[0]));
        assert_eq!(stats.max, f64::from(*sorted.last().unwrap()));
        assert!(stats.entropy > 0.0 && stats.entropy <= 8.0);
    }

    #[test]
    fn test_entries_order() {
        let raster = Raster::fill(1, 2, 2).unwrap();
        let names: Vec<&str> = calculate_intensity_stats(&raster)
            .entries()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(
            names,
            ["mean", "std", "median", "min", "max", "energy", "entropy"]
        );
    }
}
