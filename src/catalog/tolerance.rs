// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Printer/machine tolerances

use super::registry::{Registry, RegistryEntry};
use crate::error::{HoleError, Result, SpecKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Extra material removed on top of the nominal dimensions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tolerance {
    /// Added to every hole diameter
    pub diameter: f64,
    /// Added to every cavity depth
    pub height: f64,
}

impl Tolerance {
    /// Exact dimensions
    pub const PERFECT: Tolerance = Tolerance::new(0.0, 0.0);

    /// Prusa-style FDM printer, 0.15 mm on diameters and heights
    pub const PRUSA_15: Tolerance = Tolerance::new(0.15, 0.15);

    pub const fn new(diameter: f64, height: f64) -> Self {
        Self { diameter, height }
    }
}

/// A tolerance registered under a name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TolerancePreset {
    pub name: String,
    #[serde(flatten)]
    pub tolerance: Tolerance,
}

impl TolerancePreset {
    pub const PERFECT: &'static str = "perfect";
    pub const PRUSA_15: &'static str = "prusa_15";

    pub fn new(name: impl Into<String>, tolerance: Tolerance) -> Self {
        Self {
            name: name.into(),
            tolerance,
        }
    }
}

impl RegistryEntry for TolerancePreset {
    type Key = String;

    const KIND: SpecKind = SpecKind::Tolerance;

    fn key(&self) -> String {
        self.name.clone()
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(HoleError::invalid_spec(Self::KIND, "<unnamed>", "preset needs a name"));
        }
        if !(self.tolerance.diameter.is_finite() && self.tolerance.height.is_finite()) {
            return Err(HoleError::invalid_spec(Self::KIND, &self.name, "allowances must be finite"));
        }
        Ok(())
    }
}

impl Registry<TolerancePreset> {
    pub fn lookup(&self, name: &str) -> Option<Arc<TolerancePreset>> {
        self.get(&name.to_string())
    }

    /// Preset names in registration order
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|preset| preset.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let mut presets = Registry::new();
        presets
            .register(TolerancePreset::new(TolerancePreset::PERFECT, Tolerance::PERFECT))
            .unwrap();
        presets
            .register(TolerancePreset::new(TolerancePreset::PRUSA_15, Tolerance::PRUSA_15))
            .unwrap();

        assert_eq!(presets.lookup("prusa_15").unwrap().tolerance, Tolerance::new(0.15, 0.15));
        assert_eq!(presets.names(), vec!["perfect", "prusa_15"]);
        assert!(presets.lookup("laser").is_none());
    }

    #[test]
    fn test_unnamed_preset_rejected() {
        let preset = TolerancePreset::new("  ", Tolerance::PERFECT);
        assert!(preset.validate().is_err());
    }
}
