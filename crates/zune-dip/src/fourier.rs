/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Two dimensional discrete fourier transform
//!
//! The 2D transform is separable, every row is transformed, the matrix
//! is transposed, every row (formerly column) is transformed again and the
//! matrix is transposed back.
//!
//! One dimensional transforms are provided by `rustfft`, which handles any
//! length so images need no padding to a power of two.
use rustfft::num_complex::Complex;
use rustfft::{FftDirection, FftPlanner};

use crate::log::trace;
use crate::normalize::normalize_to_u8;
use crate::raster::Raster;

fn transpose<T: Copy>(in_matrix: &[T], out_matrix: &mut [T], width: usize, height: usize) {
    for (y, in_row) in in_matrix.chunks_exact(width).enumerate() {
        for (x, value) in in_row.iter().enumerate() {
            out_matrix[x * height + y] = *value;
        }
    }
}

/// Transform `data` in place, `data` is row major with the given dimensions
///
/// The inverse direction divides by `width * height` so that a forward
/// transform followed by an inverse one returns the input.
#[allow(clippy::cast_precision_loss)]
pub fn fft2(data: &mut [Complex<f64>], width: usize, height: usize, direction: FftDirection) {
    assert_eq!(data.len(), width * height);

    let mut planner = FftPlanner::<f64>::new();

    // rows
    planner.plan_fft(width, direction).process(data);

    // columns
    let mut transposed = vec![Complex::default(); data.len()];
    transpose(data, &mut transposed, width, height);

    planner.plan_fft(height, direction).process(&mut transposed);

    transpose(&transposed, data, height, width);

    if direction == FftDirection::Inverse {
        let scale = 1.0 / (width * height) as f64;
        data.iter_mut().for_each(|x| *x *= scale);
    }
}

/// Circularly shift a matrix so that `(0,0)` lands on `(shift_x, shift_y)`
fn roll<T: Copy + Default>(
    data: &[T], width: usize, height: usize, shift_x: usize, shift_y: usize
) -> Vec<T> {
    let mut out = vec![T::default(); data.len()];

    for (y, in_row) in data.chunks_exact(width).enumerate() {
        let out_y = (y + shift_y) % height;
        let out_row = &mut out[out_y * width..(out_y + 1) * width];

        for (x, value) in in_row.iter().enumerate() {
            out_row[(x + shift_x) % width] = *value;
        }
    }
    out
}

/// Move the zero frequency component to `(width/2, height/2)`
#[must_use]
pub fn fftshift<T: Copy + Default>(data: &[T], width: usize, height: usize) -> Vec<T> {
    roll(data, width, height, width / 2, height / 2)
}

/// Undo [`fftshift`], also for odd dimensions
#[must_use]
pub fn ifftshift<T: Copy + Default>(data: &[T], width: usize, height: usize) -> Vec<T> {
    roll(data, width, height, width - width / 2, height - height / 2)
}

/// Forward transform of a raster, zero frequency at index 0
#[must_use]
pub fn forward_fft(raster: &Raster) -> Vec<Complex<f64>> {
    let (width, height) = raster.dimensions();

    let mut data: Vec<Complex<f64>> = raster
        .pixels()
        .iter()
        .map(|x| Complex::new(f64::from(*x), 0.0))
        .collect();

    fft2(&mut data, width, height, FftDirection::Forward);
    data
}

/// Log magnitude spectrum of a raster
///
/// Computes `20 * ln(|F| + 1)` of the shifted transform, so low frequencies
/// sit in the centre, and normalises it to `0..=255`.
#[must_use]
pub fn calculate_fourier_spectrum(raster: &Raster) -> Raster {
    trace!("Calculating fourier spectrum of {:?} raster", raster.dimensions());

    let (width, height) = raster.dimensions();
    let shifted = fftshift(&forward_fft(raster), width, height);

    let magnitude: Vec<f64> = shifted
        .iter()
        .map(|x| 20.0 * (x.norm() + 1.0).ln())
        .collect();

    Raster::with_dimensions_of(raster, normalize_to_u8(&magnitude))
}
