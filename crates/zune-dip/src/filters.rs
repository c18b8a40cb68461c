/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Spatial domain filters
//!
//! Low-pass filters (mean, median, gaussian, maximum and minimum) smooth the image
//! over a 3x3 window, high-pass filters (laplacian, roberts, prewitt and sobel)
//! respond to edges.
//!
//! All filters run in floating point and the result is normalised
//! to the full `0..=255` range before being stored back into a raster.
use core::str::FromStr;

use crate::errors::DipErrors;
use crate::gaussian_blur::gaussian_blur;
use crate::laplacian::laplacian;
use crate::log::trace;
use crate::normalize::normalize_to_u8;
use crate::options::ProcessingOptions;
use crate::prewitt::prewitt;
use crate::raster::Raster;
use crate::roberts::roberts;
use crate::sobel::sobel;
use crate::spatial_ops::{spatial_ops, SpatialOperations};

/// Spatial filters that can be applied to a raster
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FilterKind {
    Mean,
    Median,
    Gaussian,
    Max,
    Min,
    Laplacian,
    Roberts,
    Prewitt,
    Sobel
}

impl FilterKind {
    /// All supported filters, in the order they are listed to users
    pub const ALL: [FilterKind; 9] = [
        FilterKind::Mean,
        FilterKind::Median,
        FilterKind::Gaussian,
        FilterKind::Max,
        FilterKind::Min,
        FilterKind::Laplacian,
        FilterKind::Roberts,
        FilterKind::Prewitt,
        FilterKind::Sobel
    ];

    pub fn from_string_result(input: &str) -> Result<Self, DipErrors> {
        match input {
            "mean" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            "gaussian" => Ok(Self::Gaussian),
            "max" => Ok(Self::Max),
            "min" => Ok(Self::Min),
            "laplacian" => Ok(Self::Laplacian),
            "roberts" => Ok(Self::Roberts),
            "prewitt" => Ok(Self::Prewitt),
            "sobel" => Ok(Self::Sobel),
            _ => Err(DipErrors::InvalidArgument(format!(
                "Unknown filter {input:?}, accepted values are mean,median,gaussian,max,min,laplacian,roberts,prewitt,sobel"
            )))
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FilterKind::Mean => "mean",
            FilterKind::Median => "median",
            FilterKind::Gaussian => "gaussian",
            FilterKind::Max => "max",
            FilterKind::Min => "min",
            FilterKind::Laplacian => "laplacian",
            FilterKind::Roberts => "roberts",
            FilterKind::Prewitt => "prewitt",
            FilterKind::Sobel => "sobel"
        }
    }
}

impl FromStr for FilterKind {
    type Err = DipErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::from_string_result(s)
    }
}

fn filter_inner(raster: &Raster, kind: FilterKind, sigma: f64, radius: usize) -> Raster {
    trace!("Applying {} filter", kind.name());

    let (width, height) = raster.dimensions();
    let pixels = raster.pixels();

    let response = match kind {
        FilterKind::Mean => spatial_ops(pixels, width, height, 1, SpatialOperations::Mean),
        FilterKind::Median => spatial_ops(pixels, width, height, 1, SpatialOperations::Median),
        FilterKind::Max => spatial_ops(pixels, width, height, 1, SpatialOperations::Maximum),
        FilterKind::Min => spatial_ops(pixels, width, height, 1, SpatialOperations::Minimum),
        FilterKind::Gaussian => gaussian_blur(pixels, width, height, sigma, radius),
        FilterKind::Laplacian => laplacian(pixels, width, height),
        FilterKind::Roberts => roberts(pixels, width, height),
        FilterKind::Prewitt => prewitt(pixels, width, height),
        FilterKind::Sobel => sobel(pixels, width, height)
    };

    Raster::with_dimensions_of(raster, normalize_to_u8(&response))
}

/// Apply a spatial filter with the default gaussian settings
///
/// # Example
/// ```
/// use zune_dip::raster::Raster;
/// use zune_dip::filters::{apply_filter, FilterKind};
///
/// let raster = Raster::fill(10, 8, 8).unwrap();
/// let edges = apply_filter(&raster, FilterKind::Sobel);
/// // no edges anywhere
/// assert!(edges.pixels().iter().all(|x| *x == 0));
/// ```
#[must_use]
pub fn apply_filter(raster: &Raster, kind: FilterKind) -> Raster {
    let options = ProcessingOptions::default();

    filter_inner(
        raster,
        kind,
        options.get_gaussian_sigma(),
        options.get_gaussian_radius()
    )
}

/// Apply a spatial filter, the gaussian filter uses the sigma and radius
/// from `options`
///
/// # Errors
/// [`DipErrors::InvalidArgument`] for invalid options
pub fn apply_filter_with_options(
    raster: &Raster, kind: FilterKind, options: &ProcessingOptions
) -> Result<Raster, DipErrors> {
    options.validate()?;

    Ok(filter_inner(
        raster,
        kind,
        options.get_gaussian_sigma(),
        options.get_gaussian_radius()
    ))
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::errors::DipErrors;
    use crate::filters::{apply_filter, apply_filter_with_options, FilterKind};
    use crate::options::ProcessingOptions;
    use crate::raster::Raster;

    #[test]
    fn test_parse_names() {
        for kind in FilterKind::ALL {
            assert_eq!(kind.name().parse::<FilterKind>().unwrap(), kind);
        }
        assert!(matches!(
            FilterKind::from_string_result("bogus"),
            Err(DipErrors::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_constant_input_gives_zeros() {
        let raster = Raster::fill(200, 7, 5).unwrap();

        for kind in FilterKind::ALL {
            let out = apply_filter(&raster, kind);
            assert_eq!(out.dimensions(), (7, 5));
            assert!(out.pixels().iter().all(|x| *x == 0), "{kind:?}");
        }
    }

    #[test]
    fn test_output_spans_full_range() {
        let mut pixels = vec![0_u8; 33 * 21];
        nanorand::WyRand::new_seed(3).fill(&mut pixels);
        let raster = Raster::new(pixels, 33, 21).unwrap();

        for kind in FilterKind::ALL {
            let out = apply_filter(&raster, kind);
            assert_eq!(*out.pixels().iter().max().unwrap(), 255, "{kind:?}");
            assert_eq!(*out.pixels().iter().min().unwrap(), 0, "{kind:?}");
        }
    }

    #[test]
    fn test_wider_gaussian() {
        let raster = Raster::from_fn(16, 16, |x, _| if x < 8 { 0 } else { 250 }).unwrap();
        let options = ProcessingOptions::default().set_gaussian_radius(4);

        let narrow = apply_filter(&raster, FilterKind::Gaussian);
        let wide = apply_filter_with_options(&raster, FilterKind::Gaussian, &options).unwrap();

        // the wider kernel reaches further from the step
        assert_eq!(narrow.get(5, 3), 0);
        assert!(wide.get(5, 3) > 0);
    }
}
