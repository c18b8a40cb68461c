/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use zune_dip::errors::DipErrors;
use zune_dip::options::{GlcmAngle, ProcessingOptions};

/// Build processing options from the command line, options
/// not given keep their defaults
pub fn parse_options(options: &ArgMatches) -> Result<ProcessingOptions, DipErrors> {
    let mut opts = ProcessingOptions::default();

    if let Some(mut values) = options.get_many::<f64>("stretch-percentiles") {
        if let (Some(low), Some(high)) = (values.next(), values.next()) {
            info!("Setting stretch percentiles to ({low},{high})");
            opts = opts.set_stretch_percentiles(*low, *high);
        }
    }
    if let Some(sigma) = options.get_one::<f64>("gaussian-sigma") {
        info!("Setting gaussian sigma to {sigma}");
        opts = opts.set_gaussian_sigma(*sigma);
    }
    if let Some(radius) = options.get_one::<usize>("gaussian-radius") {
        info!("Setting gaussian radius to {radius}");
        opts = opts.set_gaussian_radius(*radius);
    }
    if let Some(divisor) = options.get_one::<usize>("ideal-divisor") {
        info!("Setting ideal filter divisor to {divisor}");
        opts = opts.set_ideal_radius_divisor(*divisor);
    }
    if let Some(divisor) = options.get_one::<usize>("gaussian-divisor") {
        info!("Setting gaussian mask divisor to {divisor}");
        opts = opts.set_gaussian_mask_divisor(*divisor);
    }
    if let Some(distance) = options.get_one::<usize>("glcm-distance") {
        info!("Setting GLCM distance to {distance}");
        opts = opts.set_glcm_distance(*distance);
    }
    if let Some(angle) = options.get_one::<String>("glcm-angle") {
        info!("Setting GLCM angle to {angle}");
        opts = opts.set_glcm_angle(GlcmAngle::from_string_result(angle)?);
    }
    if options.get_flag("strict") {
        info!("Enabling strict mode");
        opts = opts.set_strict_mode(true);
    }

    opts.validate()?;

    Ok(opts)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use zune_dip::options::GlcmAngle;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn test_defaults_without_flags() {
        let matches = create_cmd_args().get_matches_from(["zune-dip", "-i", "a.png"]);
        let options = parse_options(&matches).unwrap();

        assert_eq!(options.get_stretch_percentiles(), (2.0, 98.0));
        assert!(!options.get_strict_mode());
    }

    #[test]
    fn test_flags_override_defaults() {
        let matches = create_cmd_args().get_matches_from([
            "zune-dip",
            "-i",
            "a.png",
            "--stretch-percentiles",
            "5",
            "95",
            "--glcm-angle",
            "90",
            "--strict"
        ]);
        let options = parse_options(&matches).unwrap();

        assert_eq!(options.get_stretch_percentiles(), (5.0, 95.0));
        assert_eq!(options.get_glcm_angle(), GlcmAngle::Deg90);
        assert!(options.get_strict_mode());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let matches = create_cmd_args().get_matches_from([
            "zune-dip",
            "-i",
            "a.png",
            "--glcm-distance",
            "0"
        ]);
        assert!(parse_options(&matches).is_err());
    }
}
