/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Map floating point filter output back to 8 bits

/// Normalise values to the full 8-bit range
///
/// The minimum is subtracted, the result is scaled so that the maximum becomes
/// 255 and then truncated. A constant input has nothing to scale and becomes
/// all zeros, floating point noise around a constant counts as constant.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn normalize_to_u8<T>(values: &[T]) -> Vec<u8>
where
    T: Copy + Into<f64>
{
    let minimum = values
        .iter()
        .map(|x| Into::<f64>::into(*x))
        .fold(f64::INFINITY, f64::min);

    let maximum = values
        .iter()
        .map(|x| Into::<f64>::into(*x) - minimum)
        .fold(0.0_f64, f64::max);

    // spreads this small relative to the values are rounding noise
    let reference = minimum.abs().max((minimum + maximum).abs()).max(1.0);

    if maximum > reference * 1e-9 {
        // x/x is exactly one, so the maximum lands on 255
        values
            .iter()
            .map(|x| ((Into::<f64>::into(*x) - minimum) / maximum * 255.0).clamp(0.0, 255.0) as u8)
            .collect()
    } else {
        vec![0; values.len()]
    }
}

#[cfg(test)]
mod tests {
    use crate::normalize::normalize_to_u8;

    #[test]
    fn test_constant_is_zero() {
        assert_eq!(normalize_to_u8(&[3.5_f32; 6]), vec![0; 6]);
    }

    #[test]
    fn test_full_range() {
        let out = normalize_to_u8(&[-10.0_f64, 0.0, 10.0]);
        assert_eq!(out, vec![0, 127, 255]);
    }
}
