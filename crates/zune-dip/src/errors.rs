/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

/// All errors that can occur when running operations or
/// extracting descriptors.
pub enum DipErrors {
    /// An unrecognised operation name or an out of range option
    InvalidArgument(String),
    /// The input has no usable structure for the requested operation,
    /// e.g. a single intensity image for Otsu thresholding.
    ///
    /// Only returned when strict mode is enabled, otherwise
    /// operations fall back to a documented value.
    DegenerateInput(&'static str),
    /// Buffer length does not match the declared dimensions,
    /// (expected, found)
    DimensionsMisMatch(usize, usize),
    /// Width or height was zero
    ZeroDimensions
}

impl Debug for DipErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(reason) => {
                writeln!(f, "Invalid argument: {reason}")
            }
            Self::DegenerateInput(reason) => {
                writeln!(f, "Degenerate input: {reason}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} pixels but found {found}"
                )
            }
            Self::ZeroDimensions => {
                writeln!(f, "Image dimensions must be non-zero")
            }
        }
    }
}

impl Display for DipErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for DipErrors {}
