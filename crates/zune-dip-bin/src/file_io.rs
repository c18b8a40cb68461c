/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;

use log::{debug, info};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_dip::Raster;
use zune_image::image::Image;

use crate::errors::CliErrors;

/// Decode an image file into an 8-bit grayscale raster
///
/// Color images are converted to luma, deeper images are scaled
/// down to eight bits when flattened.
pub fn read_raster(path: &OsStr) -> Result<Raster, CliErrors> {
    info!("Decoding {:?}", path);

    let mut image = Image::open(path)?;

    debug!(
        "Input colorspace: {:?}, depth: {:?}",
        image.colorspace(),
        image.depth()
    );

    if image.colorspace() != ColorSpace::Luma {
        image.convert_color(ColorSpace::Luma)?;
    }
    if image.depth() != BitDepth::Eight {
        debug!("Scaling {:?} samples to eight bits", image.depth());
    }

    let (width, height) = image.dimensions();
    let frame = image
        .flatten_to_u8()
        .into_iter()
        .next()
        .ok_or_else(|| CliErrors::GenericString(format!("No frames decoded from {path:?}")))?;

    Ok(Raster::new(frame, width, height)?)
}

/// Encode a raster as a grayscale image, the format is picked
/// from the extension of `path`
pub fn write_raster(raster: &Raster, path: &OsStr) -> Result<(), CliErrors> {
    info!("Writing {:?} raster to {:?}", raster.dimensions(), path);

    let image = Image::from_u8(
        raster.pixels(),
        raster.width(),
        raster.height(),
        ColorSpace::Luma
    );
    image.save(path)?;

    Ok(())
}
