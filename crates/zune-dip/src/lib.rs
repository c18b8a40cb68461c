/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Classical digital image processing on grayscale rasters
//!
//! This crate implements the textbook operations used to explore a single
//! grayscale image
//!
//! - Thresholding: [Otsu's method](threshold)
//! - Contrast: [percentile stretching](stretch_contrast) and [histogram equalization](equalize)
//! - [Spatial filters](filters): mean, median, gaussian, maximum, minimum, laplacian, roberts,
//!   prewitt and sobel
//! - [Frequency filters](frequency): ideal and gaussian, low and high pass
//! - [Binary morphology](morphology): erosion, dilation, opening and closing
//! - [Descriptors](descriptors): intensity statistics, Haralick texture features and shape moments
//!
//! Every operation is a pure function from a [`Raster`] to a new raster, an
//! [`ImageSession`](session::ImageSession) can be used to chain them.
//!
//! # Example
//! - Threshold an image and describe its foreground
//! ```
//! use zune_dip::raster::Raster;
//! use zune_dip::threshold::apply_otsu;
//! use zune_dip::descriptors::calculate_shape_moments;
//!
//! let raster = Raster::from_fn(32, 32, |x, y| if x > 10 && y > 10 { 200 } else { 20 }).unwrap();
//! let (mask, threshold) = apply_otsu(&raster);
//! assert!(threshold > 20.0 && threshold < 200.0);
//!
//! let moments = calculate_shape_moments(&raster);
//! assert_eq!(moments.m00, 255.0 * mask.count_set() as f64);
//! ```
//!
//! # Features
//! - `log`: Log operations with the `log` crate (enabled by default)
//! - `serde-support`: Implement `serde::Serialize` for descriptors
//! - `benchmarks`: Nightly micro benchmarks

// Benchmark support needs nightly
#![cfg_attr(feature = "benchmarks", feature(test))]
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::wildcard_imports,
    clippy::must_use_candidate
)]

pub use raster::{BinaryMask, Raster};

pub mod descriptors;
pub mod equalize;
pub mod errors;
pub mod filters;
pub mod fourier;
pub mod frequency;
pub mod gaussian_blur;
pub mod histogram;
mod laplacian;
pub mod morphology;
pub mod normalize;
pub mod options;
pub mod pad;
mod prewitt;
pub mod raster;
mod roberts;
pub mod serde;
pub mod session;
mod sobel;
pub mod spatial;
pub mod spatial_ops;
pub mod stretch_contrast;
pub mod threshold;

#[cfg(not(feature = "log"))]
pub mod log;

#[cfg(feature = "log")]
pub use log;
