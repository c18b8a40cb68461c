/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Gaussian weighted mean
//!
//! The kernel is separable so the image is filtered once horizontally
//! and once vertically with a normalised one dimensional kernel.
use crate::pad::{pad, PadMethod};

/// Create a normalised gaussian kernel of `2*radius+1` taps
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn gaussian_kernel(sigma: f64, radius: usize) -> Vec<f32> {
    let denominator = 2.0 * sigma * sigma;

    let weights: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let x = i as f64 - radius as f64;
            (-(x * x) / denominator).exp()
        })
        .collect();

    let sum: f64 = weights.iter().sum();

    weights.iter().map(|x| (x / sum) as f32).collect()
}

/// Gaussian blur a channel
///
/// The border is mirrored (`c b a | a b c`), which for a radius
/// of one is the same as replicating the edge pixel.
///
/// # Arguments
/// - in_channel: Input pixels
/// - width, height: Image dimensions
/// - sigma: Standard deviation of the gaussian
/// - radius: Half width of the kernel
#[must_use]
pub fn gaussian_blur(
    in_channel: &[u8], width: usize, height: usize, sigma: f64, radius: usize
) -> Vec<f32> {
    let kernel = gaussian_kernel(sigma, radius);

    let padded = pad(in_channel, width, height, radius, radius, PadMethod::Reflect);
    let padded_width = width + 2 * radius;
    let padded_height = height + 2 * radius;

    // horizontal pass, keeps the padded rows for the vertical pass
    let mut horizontal = vec![0.0_f32; width * padded_height];

    for (in_row, out_row) in padded
        .chunks_exact(padded_width)
        .zip(horizontal.chunks_exact_mut(width))
    {
        for (window, out) in in_row.windows(kernel.len()).zip(out_row.iter_mut()) {
            *out = window
                .iter()
                .zip(kernel.iter())
                .map(|(pix, weight)| f32::from(*pix) * weight)
                .sum();
        }
    }

    let mut out_channel = vec![0.0_f32; width * height];

    for (y, out_row) in out_channel.chunks_exact_mut(width).enumerate() {
        for (x, out) in out_row.iter_mut().enumerate() {
            *out = kernel
                .iter()
                .enumerate()
                .map(|(k, weight)| horizontal[(y + k) * width + x] * weight)
                .sum();
        }
    }
    out_channel
}
