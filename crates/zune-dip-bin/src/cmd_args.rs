/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};
use zune_dip::filters::FilterKind;
use zune_dip::frequency::FrequencyFilterKind;
use zune_dip::morphology::MorphOperation;

/// Arguments that modify the image, applied in command line order
pub const OPERATION_IDS: [&str; 7] = [
    "otsu",
    "stretch",
    "equalize",
    "filter",
    "frequency",
    "morphology",
    "reset"
];

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("zune-dip")
        .about("Classical image processing operations and descriptors on grayscale images")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .long_help("Input image, any format that can be decoded is converted to 8-bit grayscale")
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("out")
            .help("Output to write the processed image to"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the processing steps"))
        .arg(Arg::new("otsu")
            .long("otsu")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Threshold the image with Otsu's method"))
        .arg(Arg::new("stretch")
            .long("stretch")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Stretch contrast between two percentiles")
            .long_help("Stretch contrast, intensities below the lower percentile become black and\nabove the upper percentile white. See --stretch-percentiles"))
        .arg(Arg::new("equalize")
            .long("equalize")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Equalize the image histogram"))
        .arg(Arg::new("filter")
            .long("filter")
            .action(ArgAction::Append)
            .value_name("KIND")
            .help_heading("OPERATIONS")
            .help("Apply a spatial filter")
            .value_parser(FilterKind::ALL.map(FilterKind::name)))
        .arg(Arg::new("frequency")
            .long("frequency")
            .action(ArgAction::Append)
            .value_name("KIND")
            .help_heading("OPERATIONS")
            .help("Apply a frequency domain filter")
            .value_parser(FrequencyFilterKind::ALL.map(FrequencyFilterKind::name)))
        .arg(Arg::new("morphology")
            .long("morphology")
            .action(ArgAction::Append)
            .value_name("OP")
            .help_heading("OPERATIONS")
            .help("Apply a morphological operation, binarising the image first if needed")
            .value_parser(MorphOperation::ALL.map(MorphOperation::name)))
        .arg(Arg::new("reset")
            .long("reset")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Discard previous operations and start again from the input image"))
        .arg(Arg::new("histogram")
            .long("histogram")
            .action(ArgAction::SetTrue)
            .help_heading("ANALYSIS")
            .help("Print the 256 bin histogram of the processed image"))
        .arg(Arg::new("spectrum")
            .long("spectrum")
            .value_name("PATH")
            .help_heading("ANALYSIS")
            .help("Write the fourier magnitude spectrum of the processed image to PATH"))
        .arg(Arg::new("stats")
            .long("stats")
            .action(ArgAction::SetTrue)
            .help_heading("ANALYSIS")
            .help("Print intensity statistics"))
        .arg(Arg::new("haralick")
            .long("haralick")
            .action(ArgAction::SetTrue)
            .help_heading("ANALYSIS")
            .help("Print Haralick texture features"))
        .arg(Arg::new("moments")
            .long("moments")
            .action(ArgAction::SetTrue)
            .help_heading("ANALYSIS")
            .help("Print spatial, central and Hu moments of the Otsu foreground"))
        .arg(Arg::new("stretch-percentiles")
            .long("stretch-percentiles")
            .num_args(2)
            .value_names(["LOW", "HIGH"])
            .value_parser(value_parser!(f64))
            .help_heading("OPTIONS")
            .help("Percentiles used by --stretch [default: 2 98]"))
        .arg(Arg::new("gaussian-sigma")
            .long("gaussian-sigma")
            .value_parser(value_parser!(f64))
            .help_heading("OPTIONS")
            .help("Standard deviation of the gaussian filter [default: 1.0]"))
        .arg(Arg::new("gaussian-radius")
            .long("gaussian-radius")
            .value_parser(value_parser!(usize))
            .help_heading("OPTIONS")
            .help("Radius of the gaussian filter window [default: 1]"))
        .arg(Arg::new("ideal-divisor")
            .long("ideal-divisor")
            .value_parser(value_parser!(usize))
            .help_heading("OPTIONS")
            .help("Ideal frequency filters use a radius of min(width,height)/N [default: 4]"))
        .arg(Arg::new("gaussian-divisor")
            .long("gaussian-divisor")
            .value_parser(value_parser!(usize))
            .help_heading("OPTIONS")
            .help("Gaussian frequency filters use a sigma of min(width,height)/N [default: 6]"))
        .arg(Arg::new("glcm-distance")
            .long("glcm-distance")
            .value_parser(value_parser!(usize))
            .help_heading("OPTIONS")
            .help("Pixel distance of co-occurring pairs [default: 1]"))
        .arg(Arg::new("glcm-angle")
            .long("glcm-angle")
            .value_parser(["0", "45", "90", "135"])
            .help_heading("OPTIONS")
            .help("Direction of co-occurring pairs in degrees [default: 0]"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("OPTIONS")
            .help("Treat degenerate images as errors instead of warning"))
}
