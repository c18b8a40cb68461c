/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Binary morphology with a 3x3 square structuring element
//!
//! Erosion keeps a pixel only if its whole neighbourhood is foreground (window minimum),
//! dilation sets it if any neighbour is foreground (window maximum).
//! Opening is an erosion followed by a dilation, closing the reverse.
//!
//! The border is replicated so the image edge neither erodes nor grows the mask.
use core::str::FromStr;

use crate::errors::DipErrors;
use crate::log::trace;
use crate::options::ProcessingOptions;
use crate::raster::{BinaryMask, Raster};
use crate::spatial_ops::rank_u8;
use crate::threshold::{apply_otsu_with_options, binarize};

/// Morphological operations supported
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MorphOperation {
    Erosion,
    Dilation,
    Opening,
    Closing
}

impl MorphOperation {
    pub const ALL: [MorphOperation; 4] = [
        MorphOperation::Erosion,
        MorphOperation::Dilation,
        MorphOperation::Opening,
        MorphOperation::Closing
    ];

    pub fn from_string_result(input: &str) -> Result<Self, DipErrors> {
        match input {
            "erosion" => Ok(Self::Erosion),
            "dilation" => Ok(Self::Dilation),
            "opening" => Ok(Self::Opening),
            "closing" => Ok(Self::Closing),
            _ => Err(DipErrors::InvalidArgument(format!(
                "Unknown morphological operation {input:?}, accepted values are erosion,dilation,opening,closing"
            )))
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MorphOperation::Erosion => "erosion",
            MorphOperation::Dilation => "dilation",
            MorphOperation::Opening => "opening",
            MorphOperation::Closing => "closing"
        }
    }
}

impl FromStr for MorphOperation {
    type Err = DipErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MorphOperation::from_string_result(s)
    }
}

fn erode(raster: &Raster) -> Raster {
    let (width, height) = raster.dimensions();
    Raster::with_dimensions_of(raster, rank_u8(raster.pixels(), width, height, 1, false))
}

fn dilate(raster: &Raster) -> Raster {
    let (width, height) = raster.dimensions();
    Raster::with_dimensions_of(raster, rank_u8(raster.pixels(), width, height, 1, true))
}

/// Apply a morphological operation to a mask
///
/// Minimum and maximum of `0`/`255` samples are again `0`/`255`,
/// so the result is still a mask.
#[must_use]
pub fn apply_morphology_to_mask(mask: &BinaryMask, operation: MorphOperation) -> BinaryMask {
    trace!("Running {} on {:?} mask", operation.name(), mask.dimensions());

    let raster = mask.as_raster();

    let out = match operation {
        MorphOperation::Erosion => erode(raster),
        MorphOperation::Dilation => dilate(raster),
        MorphOperation::Opening => dilate(&erode(raster)),
        MorphOperation::Closing => erode(&dilate(raster))
    };
    BinaryMask::from_raster_unchecked(out)
}

/// Apply a morphological operation to a raster
///
/// A raster containing values other than `0` and `255` is first
/// binarised with Otsu's method.
///
/// # Example
/// ```
/// use zune_dip::raster::Raster;
/// use zune_dip::morphology::{apply_morphology, MorphOperation};
///
/// // a single pixel does not survive erosion
/// let raster = Raster::from_fn(5, 5, |x, y| if (x, y) == (2, 2) { 255 } else { 0 }).unwrap();
/// let eroded = apply_morphology(&raster, MorphOperation::Erosion);
/// assert_eq!(eroded.count_set(), 0);
/// ```
#[must_use]
pub fn apply_morphology(raster: &Raster, operation: MorphOperation) -> BinaryMask {
    apply_morphology_to_mask(&binarize(raster), operation)
}

/// Apply a morphological operation to a raster, binarising with `options`
///
/// # Errors
/// Those of [`apply_otsu_with_options`] when the raster needs binarising
pub fn apply_morphology_with_options(
    raster: &Raster, operation: MorphOperation, options: &ProcessingOptions
) -> Result<BinaryMask, DipErrors> {
    options.validate()?;

    let mask = if raster.is_binary() {
        binarize(raster)
    } else {
        apply_otsu_with_options(raster, options)?.0
    };
    Ok(apply_morphology_to_mask(&mask, operation))
}
