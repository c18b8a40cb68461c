/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::path::Path;

use clap::ArgMatches;
use log::{info, warn};
use zune_dip::options::ProcessingOptions;
use zune_dip::session::ImageSession;

use crate::cmd_parsers::operations::{apply_operation, collect_operations};
use crate::errors::CliErrors;
use crate::file_io::{read_raster, write_raster};
use crate::serde::Report;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, options: &ProcessingOptions
) -> Result<(), CliErrors> {
    info!("Creating workflow from input");

    let in_file = args
        .get_raw("in")
        .and_then(|mut x| x.next())
        .ok_or_else(|| CliErrors::GenericString("No input file given".to_string()))?;

    let out_file = args.get_raw("out").and_then(|mut x| x.next());
    let spectrum_file = args.get_raw("spectrum").and_then(|mut x| x.next());

    verify_file_paths(in_file, out_file)?;
    verify_file_paths(in_file, spectrum_file)?;

    let operations = collect_operations(args)?;
    let raster = read_raster(in_file)?;

    let mut session = ImageSession::new_with_options(raster, *options);

    for operation in operations {
        apply_operation(&mut session, operation)?;
    }

    if let Some(out) = out_file {
        write_raster(session.current(), out)?;
    } else if session.processed().is_some() {
        warn!("Image was processed but no output file was given, use -o to save it");
    }

    if let Some(path) = spectrum_file {
        info!("Computing fourier spectrum");
        write_raster(&session.fourier_spectrum(), path)?;
    }

    let mut report = Report::new(in_file.to_os_string(), session.current().dimensions());

    report.threshold = session.last_threshold();

    if args.get_flag("histogram") {
        report.histogram = Some(session.histogram());
    }
    if args.get_flag("stats") {
        report.stats = Some(session.intensity_stats());
    }
    if args.get_flag("haralick") {
        report.haralick = Some(session.haralick_features()?);
    }
    if args.get_flag("moments") {
        report.moments = Some(session.shape_moments()?);
    }

    if report.has_results() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn verify_file_paths(input: &OsStr, output: Option<&OsStr>) -> Result<(), CliErrors> {
    let in_path = Path::new(input);

    if !in_path.exists() {
        return Err(CliErrors::GenericString(format!(
            "Path {in_path:?}, does not exist"
        )));
    }
    if !in_path.is_file() {
        return Err(CliErrors::GenericString(format!(
            "Path {in_path:?} is not a file"
        )));
    }
    if let Some(output) = output {
        if input == output {
            return Err(CliErrors::GenericString(format!(
                "Cannot use {input:?} as both input and output"
            )));
        }
        if Path::new(output).exists() {
            info!("Overwriting path {output:?}");
        }
    }
    Ok(())
}
