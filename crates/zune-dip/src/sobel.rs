/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sobel derivative filter
use crate::pad::{pad, PadMethod};
use crate::spatial::spatial_NxN;

/// Calculate the sobel gradient magnitude of a 3x3 window
///
/// Gx matrix
/// ```text
///   -1, 0, 1,
///   -2, 0, 2,
///   -1, 0, 1
/// ```
/// Gy matrix
/// ```text
/// -1,-2,-1,
///  0, 0, 0,
///  1, 2, 1
/// ```
#[rustfmt::skip]
fn sobel_inner(c: &[u8; 9]) -> f32 {
    let c = c.map(f32::from);

    let gx = (c[2] + 2.0 * c[5] + c[8]) - (c[0] + 2.0 * c[3] + c[6]);
    let gy = (c[6] + 2.0 * c[7] + c[8]) - (c[0] + 2.0 * c[1] + c[2]);

    ((gx * gx) + (gy * gy)).sqrt()
}

/// Perform a sobel image derivative.
///
/// This calculates how quickly pixel values change in both the
/// horizontal and vertical directions and returns `sqrt(gx^2 + gy^2)`
/// for every pixel, the border is replicated.
///
/// # Arguments.
/// - in_channel: Input channel
/// - width: Width of input channel
/// - height: Height of input channel
#[must_use]
pub fn sobel(in_channel: &[u8], width: usize, height: usize) -> Vec<f32> {
    let padded_input = pad(in_channel, width, height, 1, 1, PadMethod::Replicate);
    let mut out_channel = vec![0.0; width * height];

    spatial_NxN::<_, _, _, 1, 9>(&padded_input, &mut out_channel, width, height, sobel_inner);

    out_channel
}

#[cfg(feature = "benchmarks")]
#[cfg(test)]
mod benchmarks {
    extern crate test;

    use nanorand::Rng;

    use crate::sobel::sobel;

    #[bench]
    fn bench_sobel(b: &mut test::Bencher) {
        let width = 800;
        let height = 800;

        let mut pixels = vec![0_u8; width * height];
        nanorand::WyRand::new().fill(&mut pixels);

        b.iter(|| sobel(&pixels, width, height));
    }
}
