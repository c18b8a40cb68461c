/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Methods used for duplicating pixels around the border
//!
//! Neighbourhood operations read pixels outside the image near its edges,
//! the functions here create a bigger buffer whose border is filled
//! according to a [`PadMethod`].

/// Padding method to use
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PadMethod {
    /// Create a border that duplicates the current pixel
    /// at the original image border to the new border
    ///
    /// ```text
    ///  a,b,c
    ///  d,e,f
    /// ```
    /// Becomes
    /// ```text
    ///   a,b,c
    /// a a,b,c c
    /// d d,e,f f
    ///   d,e,f
    /// ```
    Replicate,
    /// Mirror pixels about the image edge, repeating the edge pixel
    ///
    /// ```text
    ///  c b a | a b c d | d c b
    /// ```
    /// For a border of one pixel this is identical to [`PadMethod::Replicate`]
    Reflect
}

/// Map a possibly out of bounds coordinate back into `0..len`
#[inline]
fn source_index(position: isize, len: usize, method: PadMethod) -> usize {
    let len_i = len as isize;

    match method {
        PadMethod::Replicate => position.clamp(0, len_i - 1) as usize,
        PadMethod::Reflect => {
            let period = 2 * len_i;
            let folded = position.rem_euclid(period);

            if folded < len_i {
                folded as usize
            } else {
                (period - 1 - folded) as usize
            }
        }
    }
}

/// Pad pixels creating a buffer around actual pixels
///
/// ```text
///    padded width ──────────────────────────────►
/// │ ┌─────────────────────────────────────┐
/// │ │          PADDING                    │
/// │ │     ┌────────────────────┐          │
/// │ │     │                    │          │
/// │ │     │   IMAGE            │          │
/// │ │     │                    │          │
/// │ │     └────────────────────┘          │
/// │ │                                     │
/// ▼ └─────────────────────────────────────┘
/// ```
///
/// # Arguments
/// - pixels: Row major image samples
/// - width, height: Image dimensions
/// - pad_x: Number of columns added to the left and to the right
/// - pad_y: Number of rows added to the top and to the bottom
/// - method: How to fill the border
///
/// # Returns
/// A buffer of `(width + 2*pad_x) * (height + 2*pad_y)` samples
#[must_use]
pub fn pad<T: Copy>(
    pixels: &[T], width: usize, height: usize, pad_x: usize, pad_y: usize, method: PadMethod
) -> Vec<T> {
    assert_eq!(pixels.len(), width * height);

    let out_width = width + pad_x * 2;
    let out_height = height + pad_y * 2;

    let columns: Vec<usize> = (0..out_width)
        .map(|x| source_index(x as isize - pad_x as isize, width, method))
        .collect();

    let mut out_pixels = Vec::with_capacity(out_width * out_height);

    for y in 0..out_height {
        let source_y = source_index(y as isize - pad_y as isize, height, method);
        let row = &pixels[source_y * width..(source_y + 1) * width];

        out_pixels.extend(columns.iter().map(|x| row[*x]));
    }
    out_pixels
}
