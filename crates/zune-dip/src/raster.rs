/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Grayscale raster and binary mask types
//!
//! A [`Raster`] is a single channel, row major grid of 8-bit samples.
//! Once created its dimensions never change and operations never
//! modify it, they return a new raster instead.
//!
//! A [`BinaryMask`] is a raster whose only sample values are `0` and `255`.
//! It is produced by thresholding and morphology, and can be
//! viewed as a raster whenever an intensity image is expected.
use crate::errors::DipErrors;

/// Value used for foreground pixels in a [`BinaryMask`]
pub const MASK_FOREGROUND: u8 = 255;
/// Value used for background pixels in a [`BinaryMask`]
pub const MASK_BACKGROUND: u8 = 0;

/// A single channel 8-bit image
///
/// # Example
/// ```
/// use zune_dip::raster::Raster;
/// let raster = Raster::fill(10, 4, 3).unwrap();
/// assert_eq!(raster.dimensions(), (4, 3));
/// assert_eq!(raster.get(3, 2), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Raster {
    width:  usize,
    height: usize,
    pixels: Vec<u8>
}

impl Raster {
    /// Create a raster taking ownership of `pixels`
    ///
    /// # Errors
    /// - [`DipErrors::ZeroDimensions`] if width or height is zero
    /// - [`DipErrors::DimensionsMisMatch`] if `pixels.len() != width * height`
    pub fn new(pixels: Vec<u8>, width: usize, height: usize) -> Result<Raster, DipErrors> {
        if width == 0 || height == 0 {
            return Err(DipErrors::ZeroDimensions);
        }
        let expected = width
            .checked_mul(height)
            .ok_or(DipErrors::DimensionsMisMatch(usize::MAX, pixels.len()))?;

        if expected != pixels.len() {
            return Err(DipErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(Raster {
            width,
            height,
            pixels
        })
    }

    /// Create a raster by copying `pixels`
    ///
    /// # Errors
    /// See [`Raster::new`]
    pub fn from_u8(pixels: &[u8], width: usize, height: usize) -> Result<Raster, DipErrors> {
        Raster::new(pixels.to_vec(), width, height)
    }

    /// Create a raster where every sample is `value`
    ///
    /// # Errors
    /// See [`Raster::new`]
    pub fn fill(value: u8, width: usize, height: usize) -> Result<Raster, DipErrors> {
        Raster::new(vec![value; width.saturating_mul(height)], width, height)
    }

    /// Create a raster whose sample at `(x, y)` is `func(x, y)`
    ///
    /// # Errors
    /// See [`Raster::new`]
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Result<Raster, DipErrors>
    where
        F: FnMut(usize, usize) -> u8
    {
        let mut pixels = Vec::with_capacity(width.saturating_mul(height));

        for y in 0..height {
            for x in 0..width {
                pixels.push(func(x, y));
            }
        }
        Raster::new(pixels, width, height)
    }

    /// Build a raster from a buffer whose length is already known to
    /// match the dimensions of `like`
    pub(crate) fn with_dimensions_of(like: &Raster, pixels: Vec<u8>) -> Raster {
        debug_assert_eq!(pixels.len(), like.pixels.len());

        Raster {
            width: like.width,
            height: like.height,
            pixels
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of samples in the raster
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false, rasters cannot be empty
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row major samples
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Sample at column `x`, row `y`
    ///
    /// # Panics
    /// If `(x, y)` lies outside the raster
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "({x},{y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// True if every sample is either `0` or `255`
    pub fn is_binary(&self) -> bool {
        self.pixels
            .iter()
            .all(|x| *x == MASK_BACKGROUND || *x == MASK_FOREGROUND)
    }
}

/// A raster known to contain only `0` and `255`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryMask {
    raster: Raster
}

impl BinaryMask {
    /// Wrap a raster, checking that it only contains `0` and `255`
    ///
    /// # Errors
    /// [`DipErrors::InvalidArgument`] if any other value is present
    pub fn try_from_raster(raster: Raster) -> Result<BinaryMask, DipErrors> {
        if let Some(value) = raster
            .pixels()
            .iter()
            .find(|x| **x != MASK_BACKGROUND && **x != MASK_FOREGROUND)
        {
            return Err(DipErrors::InvalidArgument(format!(
                "Value {value} cannot be present in a binary mask, expected 0 or 255"
            )));
        }
        Ok(BinaryMask { raster })
    }

    pub(crate) fn from_raster_unchecked(raster: Raster) -> BinaryMask {
        debug_assert!(raster.is_binary());
        BinaryMask { raster }
    }

    pub const fn as_raster(&self) -> &Raster {
        &self.raster
    }

    pub fn into_raster(self) -> Raster {
        self.raster
    }

    /// Returns `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        self.raster.dimensions()
    }

    /// True if the pixel at `(x, y)` is foreground
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.raster.get(x, y) == MASK_FOREGROUND
    }

    /// Number of foreground pixels
    pub fn count_set(&self) -> usize {
        self.raster
            .pixels()
            .iter()
            .filter(|x| **x == MASK_FOREGROUND)
            .count()
    }
}

impl AsRef<Raster> for BinaryMask {
    fn as_ref(&self) -> &Raster {
        &self.raster
    }
}

impl From<BinaryMask> for Raster {
    fn from(value: BinaryMask) -> Self {
        value.raster
    }
}
