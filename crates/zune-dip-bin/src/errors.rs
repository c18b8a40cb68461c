/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use zune_dip::errors::DipErrors;
use zune_image::errors::ImageErrors;

/// Errors that stop the command line workflow
pub enum CliErrors {
    Image(ImageErrors),
    Processing(DipErrors),
    Io(std::io::Error),
    Json(serde_json::Error),
    GenericString(String)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image(err) => writeln!(f, "Image error: {err:?}"),
            Self::Processing(err) => writeln!(f, "{err:?}"),
            Self::Io(err) => writeln!(f, "I/O error: {err}"),
            Self::Json(err) => writeln!(f, "Could not serialize output: {err}"),
            Self::GenericString(reason) => writeln!(f, "{reason}")
        }
    }
}

impl From<ImageErrors> for CliErrors {
    fn from(value: ImageErrors) -> Self {
        CliErrors::Image(value)
    }
}

impl From<DipErrors> for CliErrors {
    fn from(value: DipErrors) -> Self {
        CliErrors::Processing(value)
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::Io(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::Json(value)
    }
}

impl From<String> for CliErrors {
    fn from(value: String) -> Self {
        CliErrors::GenericString(value)
    }
}
