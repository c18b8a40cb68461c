/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Prewitt derivative filter
use crate::pad::{pad, PadMethod};
use crate::spatial::spatial_NxN;

/// Calculate the prewitt gradient magnitude of a 3x3 window
///
/// ```text
/// Gx           Gy
/// -1, 0, 1    -1,-1,-1
/// -1, 0, 1     0, 0, 0
/// -1, 0, 1     1, 1, 1
/// ```
fn prewitt_inner(c: &[u8; 9]) -> f32 {
    let c = c.map(f32::from);

    let gx = (c[2] + c[5] + c[8]) - (c[0] + c[3] + c[6]);
    let gy = (c[6] + c[7] + c[8]) - (c[0] + c[1] + c[2]);

    ((gx * gx) + (gy * gy)).sqrt()
}

/// Carry out the prewitt filter, returning the gradient magnitude
///
/// # Arguments.
/// - in_channel: Input channel
/// - width: Width of input channel
/// - height: Height of input channel
#[must_use]
pub fn prewitt(in_channel: &[u8], width: usize, height: usize) -> Vec<f32> {
    let padded_input = pad(in_channel, width, height, 1, 1, PadMethod::Replicate);
    let mut out_channel = vec![0.0; width * height];

    spatial_NxN::<_, _, _, 1, 9>(&padded_input, &mut out_channel, width, height, prewitt_inner);

    out_channel
}
