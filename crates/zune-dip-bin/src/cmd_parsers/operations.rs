/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{debug, info};
use zune_dip::errors::DipErrors;
use zune_dip::filters::FilterKind;
use zune_dip::frequency::FrequencyFilterKind;
use zune_dip::morphology::MorphOperation;
use zune_dip::session::ImageSession;

use crate::cmd_args::OPERATION_IDS;

/// A step that modifies the session image
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Otsu,
    Stretch,
    Equalize,
    Filter(FilterKind),
    Frequency(FrequencyFilterKind),
    Morphology(MorphOperation),
    Reset
}

impl Operation {
    fn from_argument(argument: &str, value: Option<&str>) -> Result<Operation, DipErrors> {
        let required = || {
            value.ok_or_else(|| {
                DipErrors::InvalidArgument(format!("Missing value for --{argument}"))
            })
        };

        match argument {
            "otsu" => Ok(Operation::Otsu),
            "stretch" => Ok(Operation::Stretch),
            "equalize" => Ok(Operation::Equalize),
            "reset" => Ok(Operation::Reset),
            "filter" => Ok(Operation::Filter(FilterKind::from_string_result(required()?)?)),
            "frequency" => Ok(Operation::Frequency(
                FrequencyFilterKind::from_string_result(required()?)?
            )),
            "morphology" => Ok(Operation::Morphology(MorphOperation::from_string_result(
                required()?
            )?)),
            _ => Err(DipErrors::InvalidArgument(format!(
                "Unknown operation {argument}"
            )))
        }
    }
}

/// Collect operations in the order they were given on the command line
///
/// Arguments taking a value may be repeated, each occurrence becomes
/// its own operation.
pub fn collect_operations(args: &ArgMatches) -> Result<Vec<Operation>, DipErrors> {
    let mut ordered: Vec<(usize, Operation)> = Vec::new();

    for id in OPERATION_IDS {
        if args.value_source(id) != Some(ValueSource::CommandLine) {
            // defaults of flags carry an index too
            continue;
        }
        let Some(indices) = args.indices_of(id) else {
            continue;
        };

        match args.try_get_many::<String>(id) {
            Ok(Some(values)) => {
                for (index, value) in indices.zip(values) {
                    ordered.push((index, Operation::from_argument(id, Some(value.as_str()))?));
                }
            }
            _ => {
                for index in indices {
                    ordered.push((index, Operation::from_argument(id, None)?));
                }
            }
        }
    }
    ordered.sort_by_key(|(index, _)| *index);

    Ok(ordered.into_iter().map(|(_, op)| op).collect())
}

/// Run one operation on the session
pub fn apply_operation(session: &mut ImageSession, operation: Operation) -> Result<(), DipErrors> {
    debug!("Running {operation:?}");

    match operation {
        Operation::Otsu => {
            session.otsu()?;
            if let Some(threshold) = session.last_threshold() {
                info!("Otsu threshold: {threshold}");
            }
        }
        Operation::Stretch => {
            session.stretch_contrast()?;
        }
        Operation::Equalize => {
            session.equalize_histogram();
        }
        Operation::Filter(kind) => {
            session.filter(kind)?;
        }
        Operation::Frequency(kind) => {
            session.frequency_filter(kind)?;
        }
        Operation::Morphology(op) => {
            session.morphology(op)?;
        }
        Operation::Reset => {
            session.reset();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use zune_dip::filters::FilterKind;
    use zune_dip::morphology::MorphOperation;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::operations::{collect_operations, Operation};

    #[test]
    fn test_operations_keep_command_line_order() {
        let matches = create_cmd_args().get_matches_from([
            "zune-dip",
            "-i",
            "a.png",
            "--filter",
            "median",
            "--otsu",
            "--morphology",
            "opening",
            "--filter",
            "sobel"
        ]);
        let operations = collect_operations(&matches).unwrap();

        assert_eq!(
            operations,
            [
                Operation::Filter(FilterKind::Median),
                Operation::Otsu,
                Operation::Morphology(MorphOperation::Opening),
                Operation::Filter(FilterKind::Sobel)
            ]
        );
    }

    #[test]
    fn test_no_operations() {
        let matches = create_cmd_args().get_matches_from(["zune-dip", "-i", "a.png", "--stats"]);
        assert!(collect_operations(&matches).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_filter_rejected_by_parser() {
        let result =
            create_cmd_args().try_get_matches_from(["zune-dip", "-i", "a.png", "--filter", "bogus"]);
        assert!(result.is_err());
    }
}
