/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Calculate intensity histograms
//!
//! An image histogram is a graph that shows the number of pixels in an image at each intensity value
//!
//! Most operations in this crate (Otsu, contrast stretching, equalization and
//! the intensity statistics) only need the histogram, never the pixels themselves.
use crate::raster::Raster;

/// Count occurrences of each of the 256 intensity levels
///
/// # Example
/// ```rust
/// use zune_dip::raster::Raster;
/// use zune_dip::histogram::calculate_histogram;
/// let raster = Raster::fill(100, 10, 10).unwrap();
/// let values = calculate_histogram(&raster);
/// assert_eq!(values[100], 100);
/// ```
#[must_use]
pub fn calculate_histogram(raster: &Raster) -> [u32; 256] {
    histogram(raster.pixels())
}

#[must_use]
pub fn histogram(data: &[u8]) -> [u32; 256] {
    // Four separate count tables avoid a store to load dependency when
    // neighbouring pixels have the same value, they are summed at the end.
    let mut counts = [[0_u32; 256]; 4];

    let chunks = data.chunks_exact(4);
    let remainder = chunks.remainder();

    for chunk in chunks {
        counts[0][usize::from(chunk[0])] += 1;
        counts[1][usize::from(chunk[1])] += 1;
        counts[2][usize::from(chunk[2])] += 1;
        counts[3][usize::from(chunk[3])] += 1;
    }
    for i in remainder {
        counts[0][usize::from(*i)] += 1;
    }

    let mut start = counts[0];

    for (i, total) in start.iter_mut().enumerate() {
        *total += counts[1][i] + counts[2][i] + counts[3][i];
    }
    start
}

/// Running sum of a histogram, entry `v` is the number of pixels `<= v`
#[must_use]
pub(crate) fn cumulative(histogram: &[u32; 256]) -> [u64; 256] {
    let mut cdf = [0_u64; 256];
    let mut running = 0_u64;

    for (out, count) in cdf.iter_mut().zip(histogram.iter()) {
        running += u64::from(*count);
        *out = running;
    }
    cdf
}

/// Intensity at zero based position `rank` when pixels are sorted ascending
///
/// `rank` must be less than the total count.
pub(crate) fn value_at_rank(cdf: &[u64; 256], rank: u64) -> u8 {
    // first level whose cumulative count exceeds the rank
    let position = cdf.partition_point(|x| *x <= rank);
    position.min(255) as u8
}

#[test]
fn test_histogram_sums_to_pixel_count() {
    use nanorand::Rng;

    let (w, h) = (401, 399);

    // randomize inputs
    let mut pixels = vec![0_u8; w * h];
    nanorand::WyRand::new().fill(&mut pixels);

    let raster = Raster::new(pixels, w, h).unwrap();
    let data = calculate_histogram(&raster);

    assert_eq!(data.iter().map(|x| *x as usize).sum::<usize>(), w * h);

    for (level, count) in data.iter().enumerate() {
        let expected = raster
            .pixels()
            .iter()
            .filter(|x| usize::from(**x) == level)
            .count();
        assert_eq!(*count as usize, expected);
    }
}

#[test]
fn test_rank_lookup() {
    let data = [3_u8, 1, 1, 7, 200];
    let cdf = cumulative(&histogram(&data));

    assert_eq!(value_at_rank(&cdf, 0), 1);
    assert_eq!(value_at_rank(&cdf, 1), 1);
    assert_eq!(value_at_rank(&cdf, 2), 3);
    assert_eq!(value_at_rank(&cdf, 4), 200);
}

#[cfg(feature = "benchmarks")]
#[cfg(test)]
mod benchmarks {
    extern crate test;

    use nanorand::Rng;

    use crate::histogram::histogram;

    #[bench]
    fn bench_histogram_u8(b: &mut test::Bencher) {
        let width = 800;
        let height = 800;
        let dimensions = width * height;

        let mut in_vec = vec![255_u8; dimensions];
        nanorand::WyRand::new().fill(&mut in_vec);

        b.iter(|| histogram(&in_vec));
    }
}
