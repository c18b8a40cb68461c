/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image descriptors
//!
//! Descriptors summarise a raster as a handful of numbers
//!
//! - [`IntensityStats`]: first order statistics of the pixel values
//! - [`HaralickFeatures`]: texture, from the gray level co-occurrence matrix
//! - [`ShapeMoments`]: spatial, central and Hu moments of the Otsu foreground
//!
//! Each descriptor can be flattened to `(name, value)` pairs with `entries()`.
pub use haralick::{
    calculate_haralick_features, calculate_haralick_features_with_options, HaralickFeatures
};
pub use intensity::{calculate_intensity_stats, IntensityStats};
pub use moments::{calculate_shape_moments, calculate_shape_moments_with_options, ShapeMoments};

pub mod haralick;
pub mod intensity;
pub mod moments;
