/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use zune_dip::descriptors::{HaralickFeatures, IntensityStats, ShapeMoments};

/// Analysis results printed after the workflow finishes
///
/// Only the analyses that were requested are written out.
pub struct Report {
    file:          OsString,
    dimensions:    (usize, usize),
    pub threshold: Option<f64>,
    pub histogram: Option<[u32; 256]>,
    pub stats:     Option<IntensityStats>,
    pub haralick:  Option<HaralickFeatures>,
    pub moments:   Option<ShapeMoments>
}

impl Report {
    pub fn new(file: OsString, dimensions: (usize, usize)) -> Report {
        Report {
            file,
            dimensions,
            threshold: None,
            histogram: None,
            stats: None,
            haralick: None,
            moments: None
        }
    }

    /// Whether any analysis was added to the report
    pub fn has_results(&self) -> bool {
        self.histogram.is_some()
            || self.stats.is_some()
            || self.haralick.is_some()
            || self.moments.is_some()
    }
}

impl Serialize for Report {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let optional = [
            self.threshold.is_some(),
            self.histogram.is_some(),
            self.stats.is_some(),
            self.haralick.is_some(),
            self.moments.is_some()
        ];
        let len = 3 + optional.iter().filter(|x| **x).count();

        let mut state = serializer.serialize_struct("Report", len)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("width", &self.dimensions.0)?;
        state.serialize_field("height", &self.dimensions.1)?;

        if let Some(threshold) = &self.threshold {
            state.serialize_field("threshold", threshold)?;
        }
        if let Some(histogram) = &self.histogram {
            state.serialize_field("histogram", &histogram[..])?;
        }
        if let Some(stats) = &self.stats {
            state.serialize_field("intensity", stats)?;
        }
        if let Some(haralick) = &self.haralick {
            state.serialize_field("haralick", haralick)?;
        }
        if let Some(moments) = &self.moments {
            state.serialize_field("moments", moments)?;
        }

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use zune_dip::descriptors::calculate_intensity_stats;
    use zune_dip::Raster;

    use crate::serde::Report;

    #[test]
    fn test_report_skips_missing_results() {
        let report = Report::new("a.png".into(), (4, 2));
        assert!(!report.has_results());

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(json["width"], 4);
        assert_eq!(json["height"], 2);
        assert!(json.get("histogram").is_none());
        assert!(json.get("threshold").is_none());
    }

    #[test]
    fn test_report_with_stats() {
        let raster = Raster::fill(3, 2, 2).unwrap();
        let mut report = Report::new("a.png".into(), raster.dimensions());
        report.stats = Some(calculate_intensity_stats(&raster));
        report.histogram = Some([0; 256]);

        assert!(report.has_results());

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(json["histogram"].as_array().unwrap().len(), 256);
        assert_eq!(json["intensity"]["mean"], 3.0);
    }
}
