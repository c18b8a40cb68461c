/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Laplacian second derivative filter
use crate::pad::{pad, PadMethod};
use crate::spatial::spatial_NxN;

/// ```text
/// 0, 1, 0
/// 1,-4, 1
/// 0, 1, 0
/// ```
fn laplacian_inner(c: &[u8; 9]) -> f32 {
    let c = c.map(f32::from);

    c[1] + c[3] + c[5] + c[7] - 4.0 * c[4]
}

/// Convolve with the 4-neighbour laplacian kernel
///
/// Output is signed, callers normalise it before going back to 8 bits.
#[must_use]
pub fn laplacian(in_channel: &[u8], width: usize, height: usize) -> Vec<f32> {
    let padded_input = pad(in_channel, width, height, 1, 1, PadMethod::Replicate);
    let mut out_channel = vec![0.0; width * height];

    spatial_NxN::<_, _, _, 1, 9>(&padded_input, &mut out_channel, width, height, laplacian_inner);

    out_channel
}

#[cfg(test)]
mod tests {
    use crate::laplacian::laplacian;
    use crate::prewitt::prewitt;
    use crate::roberts::roberts;
    use crate::sobel::sobel;

    #[rustfmt::skip]
    const STEP: [u8; 16] = [
        0, 0, 10, 10,
        0, 0, 10, 10,
        0, 0, 10, 10,
        0, 0, 10, 10,
    ];

    #[test]
    fn test_vertical_step_gradients() {
        let out = sobel(&STEP, 4, 4);
        // columns next to the step see the full kernel
        assert_eq!(out[1], 40.0);
        assert_eq!(out[2], 40.0);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[3], 0.0);

        let out = prewitt(&STEP, 4, 4);
        assert_eq!(out[5], 30.0);
        assert_eq!(out[4], 0.0);

        let out = roberts(&STEP, 4, 4);
        // only the pixel left of the step sees it in its 2x2 block
        assert_eq!(out[1], (200.0_f32).sqrt());
        assert_eq!(out[2], 0.0);
    }

    #[test]
    fn test_laplacian_signed_response() {
        let out = laplacian(&STEP, 4, 4);
        assert_eq!(out[1], 10.0);
        assert_eq!(out[2], -10.0);
        assert_eq!(out[0], 0.0);
    }
}
