/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Simple order statistic and averaging filters
use crate::pad::{pad, PadMethod};
use crate::spatial::spatial;

/// Spatial operations implemented for images
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpatialOperations {
    /// sum(pix)/len
    Mean,
    /// middle of sorted window
    Median,
    /// max
    Maximum,
    /// min
    Minimum
}

pub(crate) fn find_min<T: PartialOrd + Copy>(data: &[T]) -> T {
    let mut minimum = data[0];

    for datum in &data[1..] {
        if *datum < minimum {
            minimum = *datum;
        }
    }
    minimum
}

pub(crate) fn find_max<T: PartialOrd + Copy>(data: &[T]) -> T {
    let mut maximum = data[0];

    for datum in &data[1..] {
        if *datum > maximum {
            maximum = *datum;
        }
    }
    maximum
}

#[allow(clippy::cast_precision_loss)]
fn find_mean(data: &[u8]) -> f32 {
    let sum: u32 = data.iter().map(|x| u32::from(*x)).sum();
    sum as f32 / data.len() as f32
}

fn find_median(data: &[u8], scratch: &mut [u8]) -> f32 {
    scratch.copy_from_slice(data);
    scratch.sort_unstable();
    f32::from(scratch[scratch.len() / 2])
}

/// Run spatial operations on a channel
///
/// The border is replicated, so pixels near the edge only see
/// copies of the nearest edge pixels.
///
/// # Arguments
///
/// * `in_channel`:  Input channel.
/// * `width`:  Image width
/// * `height`:  Image height
/// * `radius`:  Radius for the spatial function
/// * `operation`:  Enum operation to run
///
/// # Returns
/// The filtered channel, kept in floating point so that means are not truncated
#[must_use]
pub fn spatial_ops(
    in_channel: &[u8], width: usize, height: usize, radius: usize, operation: SpatialOperations
) -> Vec<f32> {
    let padded_input = pad(
        in_channel,
        width,
        height,
        radius,
        radius,
        PadMethod::Replicate
    );
    let mut out_channel = vec![0.0_f32; width * height];

    match operation {
        SpatialOperations::Mean => {
            spatial(&padded_input, &mut out_channel, radius, width, height, find_mean);
        }
        SpatialOperations::Median => {
            let window = (2 * radius + 1) * (2 * radius + 1);
            let mut scratch = vec![0_u8; window];

            spatial(&padded_input, &mut out_channel, radius, width, height, |c| {
                find_median(c, &mut scratch)
            });
        }
        SpatialOperations::Maximum => {
            spatial(&padded_input, &mut out_channel, radius, width, height, |c| {
                f32::from(find_max(c))
            });
        }
        SpatialOperations::Minimum => {
            spatial(&padded_input, &mut out_channel, radius, width, height, |c| {
                f32::from(find_min(c))
            });
        }
    }
    out_channel
}

/// Replace each pixel with the minimum (`maximum == false`) or maximum of its
/// `(2*radius+1)^2` neighbourhood, staying in 8-bit.
#[must_use]
pub(crate) fn rank_u8(
    in_channel: &[u8], width: usize, height: usize, radius: usize, maximum: bool
) -> Vec<u8> {
    let padded_input = pad(
        in_channel,
        width,
        height,
        radius,
        radius,
        PadMethod::Replicate
    );
    let mut out_channel = vec![0_u8; width * height];

    if maximum {
        spatial(&padded_input, &mut out_channel, radius, width, height, find_max::<u8>);
    } else {
        spatial(&padded_input, &mut out_channel, radius, width, height, find_min::<u8>);
    }
    out_channel
}

#[cfg(test)]
mod tests {
    use crate::spatial_ops::{spatial_ops, SpatialOperations};

    #[rustfmt::skip]
    const IMAGE: [u8; 9] = [
        1, 2, 3,
        4, 50, 6,
        7, 8, 9
    ];

    #[test]
    fn test_centre_pixel() {
        let median = spatial_ops(&IMAGE, 3, 3, 1, SpatialOperations::Median);
        assert_eq!(median[4], 6.0);

        let max = spatial_ops(&IMAGE, 3, 3, 1, SpatialOperations::Maximum);
        assert_eq!(max[4], 50.0);

        let min = spatial_ops(&IMAGE, 3, 3, 1, SpatialOperations::Minimum);
        assert_eq!(min[4], 1.0);

        let mean = spatial_ops(&IMAGE, 3, 3, 1, SpatialOperations::Mean);
        assert!((mean[4] - 90.0 / 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_border_pixels_replicate() {
        // top left window is [1,1,2,1,1,2,4,4,50]
        let mean = spatial_ops(&IMAGE, 3, 3, 1, SpatialOperations::Mean);
        assert!((mean[0] - 66.0 / 9.0).abs() < 1e-5);

        let median = spatial_ops(&IMAGE, 3, 3, 1, SpatialOperations::Median);
        assert_eq!(median[0], 2.0);

        // bottom right window is [50,6,6,8,9,9,8,9,9]
        let min = spatial_ops(&IMAGE, 3, 3, 1, SpatialOperations::Minimum);
        assert_eq!(min[8], 6.0);
    }
}
