/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Neighbourhood traversal
//!
//! spatial goes through each pixel on an image collecting its neighbors and
//! passes them to a function which computes the output pixel.
//!
//! The parameter radius corresponds to the radius of the neighbor area to be searched,
//! for example a radius of R will result in a search window length of 2R+1 for each dimension.

/// Go through image neighbors, execute a function on them and store the result
///
/// # Arguments
///
/// - in_channel: input channel, the width and height are padded with radius*2 edges
///   (use [`pad`](crate::pad::pad) for that). otherwise this function will panic.
///
/// - out_channel: Output channel, the width and height are not padded at all.
///
/// - radius: Area to be searched, example a radius of R will result in a search window
///   length of 2R+1 for each dimension.
///
/// - function: Receives the window in row major order and returns the output pixel.
pub fn spatial<T, O, F>(
    in_channel: &[T], out_channel: &mut [O], radius: usize, width: usize, height: usize,
    mut function: F
) where
    T: Default + Copy,
    F: FnMut(&[T]) -> O
{
    let padded_width = (radius * 2) + width;
    let padded_height = (radius * 2) + height;

    assert_eq!(padded_height * padded_width, in_channel.len());
    assert_eq!(width * height, out_channel.len());

    let radius_size = (2 * radius) + 1;

    let mut local_storage = vec![T::default(); radius_size * radius_size];

    for (iy, out_row) in out_channel.chunks_exact_mut(width).enumerate() {
        for (ix, out) in out_row.iter_mut().enumerate() {
            for (ky, storage) in local_storage.chunks_exact_mut(radius_size).enumerate() {
                let start = (iy + ky) * padded_width + ix;
                storage.copy_from_slice(&in_channel[start..start + radius_size]);
            }
            *out = function(&local_storage);
        }
    }
}

/// A special spatial function that takes advantage of const generics to
/// speed up fixed size kernels
#[allow(non_snake_case)]
pub(crate) fn spatial_NxN<T, O, F, const RADIUS: usize, const OUT_SIZE: usize>(
    in_channel: &[T], out_channel: &mut [O], width: usize, height: usize, function: F
) where
    T: Default + Copy,
    F: Fn(&[T; OUT_SIZE]) -> O
{
    let padded_width = (RADIUS * 2) + width;
    let padded_height = (RADIUS * 2) + height;

    assert_eq!(padded_height * padded_width, in_channel.len());
    assert_eq!(width * height, out_channel.len());

    let radius_size = (2 * RADIUS) + 1;

    assert_eq!(radius_size * radius_size, OUT_SIZE);

    let mut local_storage = [T::default(); OUT_SIZE];

    for (iy, out_row) in out_channel.chunks_exact_mut(width).enumerate() {
        for (ix, out) in out_row.iter_mut().enumerate() {
            for (ky, storage) in local_storage.chunks_exact_mut(radius_size).enumerate() {
                let start = (iy + ky) * padded_width + ix;
                storage.copy_from_slice(&in_channel[start..start + radius_size]);
            }
            *out = function(&local_storage);
        }
    }
}
