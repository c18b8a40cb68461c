/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Roberts cross derivative filter
use crate::pad::{pad, PadMethod};
use crate::spatial::spatial_NxN;

/// Roberts cross on the 2x2 block whose top left corner is the
/// centre of a 3x3 window
///
/// ```text
/// Gx       Gy
///  1, 0    0, 1
///  0,-1   -1, 0
/// ```
fn roberts_inner(c: &[u8; 9]) -> f32 {
    let c = c.map(f32::from);

    // c[4] is the pixel itself, c[5] right, c[7] below, c[8] diagonal
    let gx = c[4] - c[8];
    let gy = c[5] - c[7];

    ((gx * gx) + (gy * gy)).sqrt()
}

/// Carry out the roberts cross filter, returning the gradient magnitude
///
/// The last row and column use replicated pixels for their missing
/// neighbours.
#[must_use]
pub fn roberts(in_channel: &[u8], width: usize, height: usize) -> Vec<f32> {
    let padded_input = pad(in_channel, width, height, 1, 1, PadMethod::Replicate);
    let mut out_channel = vec![0.0; width * height];

    spatial_NxN::<_, _, _, 1, 9>(&padded_input, &mut out_channel, width, height, roberts_inner);

    out_channel
}
