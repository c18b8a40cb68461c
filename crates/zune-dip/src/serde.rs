/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]
//! Serialization of descriptors
//!
//! Intensity and texture descriptors serialize as flat maps, shape moments
//! are grouped into `spatial_moments`, `central_moments` and `hu_moments`.

use serde::ser::*;

use crate::descriptors::{HaralickFeatures, IntensityStats, ShapeMoments};

/// `(name, value)` pairs serialized as a map
struct NamedValues<'a>(&'a [(&'static str, f64)]);

impl Serialize for NamedValues<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for IntensityStats {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("IntensityStats", 7)?;

        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("std", &self.std)?;
        state.serialize_field("median", &self.median)?;
        state.serialize_field("min", &self.min)?;
        state.serialize_field("max", &self.max)?;
        state.serialize_field("energy", &self.energy)?;
        state.serialize_field("entropy", &self.entropy)?;

        state.end()
    }
}

impl Serialize for HaralickFeatures {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("HaralickFeatures", 6)?;

        state.serialize_field("contrast", &self.contrast)?;
        state.serialize_field("dissimilarity", &self.dissimilarity)?;
        state.serialize_field("homogeneity", &self.homogeneity)?;
        state.serialize_field("energy", &self.energy)?;
        state.serialize_field("correlation", &self.correlation)?;
        state.serialize_field("asm", &self.asm)?;

        state.end()
    }
}

impl Serialize for ShapeMoments {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let spatial = self.spatial_entries();
        let central = self.central_entries();

        let mut state = serializer.serialize_struct("ShapeMoments", 3)?;

        state.serialize_field("spatial_moments", &NamedValues(&spatial))?;
        state.serialize_field("central_moments", &NamedValues(&central))?;
        state.serialize_field("hu_moments", &self.hu)?;

        state.end()
    }
}
