// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Hex nut measurements

use super::registry::{Registry, RegistryEntry, SizedEntry, StyleKey, StyledEntry};
use super::{Designation, NutStyle};
use crate::error::{HoleError, Result, SpecKind};
use crate::utils::COS_30;
use serde::Serialize;

/// Width across flats (w) and height (k) ranges for one nut.
///
/// Corner radii (center to corner point) are derived once at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutSpec {
    designation: Designation,
    nut_style: NutStyle,
    nominal_diameter: f64,
    width_min: f64,
    width_max: f64,
    height_min: f64,
    height_max: f64,
    corner_radius_min: f64,
    corner_radius_max: f64,
}

impl NutSpec {
    pub fn new(
        designation: impl Into<Designation>,
        nut_style: NutStyle,
        nominal_diameter: f64,
        (width_min, width_max): (f64, f64),
        (height_min, height_max): (f64, f64),
    ) -> Self {
        Self {
            designation: designation.into(),
            nut_style,
            nominal_diameter,
            width_min,
            width_max,
            height_min,
            height_max,
            corner_radius_min: corner_radius(width_min),
            corner_radius_max: corner_radius(width_max),
        }
    }

    /// Plain metric nut, named after the bolt size it fits
    pub fn metric(size: f64, width: (f64, f64), height: (f64, f64)) -> Self {
        Self::new(Designation::metric(size), NutStyle::Plain, size, width, height)
    }

    pub fn designation(&self) -> &Designation {
        &self.designation
    }

    pub fn nut_style(&self) -> &NutStyle {
        &self.nut_style
    }

    /// Diameter of the bolt the nut fits
    pub fn nominal_diameter(&self) -> f64 {
        self.nominal_diameter
    }

    /// Minimum width between opposite flat sides
    pub fn width_min(&self) -> f64 {
        self.width_min
    }

    /// Maximum width between opposite flat sides
    pub fn width_max(&self) -> f64 {
        self.width_max
    }

    pub fn height_min(&self) -> f64 {
        self.height_min
    }

    pub fn height_max(&self) -> f64 {
        self.height_max
    }

    /// Minimum radius measured from center to a corner point
    pub fn corner_radius_min(&self) -> f64 {
        self.corner_radius_min
    }

    /// Maximum radius measured from center to a corner point
    pub fn corner_radius_max(&self) -> f64 {
        self.corner_radius_max
    }
}

fn corner_radius(width: f64) -> f64 {
    (width / 2.0) / COS_30
}

impl RegistryEntry for NutSpec {
    type Key = StyleKey<NutStyle>;

    const KIND: SpecKind = SpecKind::Nut;

    fn key(&self) -> Self::Key {
        StyleKey::new(self.designation.clone(), self.nut_style.clone())
    }

    // Published tables occasionally list the width range inverted (DIN 934
    // M27), so only positivity is enforced.
    fn validate(&self) -> Result<()> {
        let fail = |reason: &str| Err(HoleError::invalid_spec(Self::KIND, self.key(), reason));
        if !(self.nominal_diameter > 0.0) {
            return fail("nominal diameter must be positive");
        }
        if !(self.width_min > 0.0 && self.width_max > 0.0) {
            return fail("width across flats must be positive");
        }
        if !(self.height_min > 0.0 && self.height_max > 0.0) {
            return fail("height must be positive");
        }
        Ok(())
    }
}

impl SizedEntry for NutSpec {
    fn designation(&self) -> &Designation {
        &self.designation
    }

    fn nominal_diameter(&self) -> f64 {
        self.nominal_diameter
    }
}

impl StyledEntry for NutSpec {
    type Style = NutStyle;

    fn style(&self) -> &NutStyle {
        &self.nut_style
    }
}

impl Registry<NutSpec> {
    /// Nut styles available for a bolt size, sorted by name
    pub fn styles_for_size(&self, size: f64) -> Vec<NutStyle> {
        let mut styles: Vec<NutStyle> = self
            .iter()
            .filter(|nut| (nut.nominal_diameter - size).abs() < 1e-3)
            .map(|nut| nut.nut_style.clone())
            .collect();
        styles.sort_by(|a, b| a.name().cmp(b.name()));
        styles.dedup();
        styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_radius() {
        let nut = NutSpec::metric(5.0, (7.78, 8.0), (3.7, 4.0));
        let expected = 4.0 / (30f64.to_radians().cos());
        assert!((nut.corner_radius_max() - expected).abs() < 1e-9);
        assert!(nut.corner_radius_min() < nut.corner_radius_max());
    }

    #[test]
    fn test_styles_for_size() {
        let mut nuts = Registry::new();
        nuts.register(NutSpec::new("M5", NutStyle::Vigrue, 5.0, (7.75, 8.0), (4.5, 4.75)))
            .unwrap();
        nuts.register(NutSpec::metric(5.0, (7.78, 8.0), (3.7, 4.0))).unwrap();
        nuts.register(NutSpec::metric(4.0, (6.78, 7.0), (2.9, 3.2))).unwrap();

        assert_eq!(nuts.styles_for_size(5.0), vec![NutStyle::Plain, NutStyle::Vigrue]);
        assert_eq!(nuts.list_styles("M5"), vec![NutStyle::Vigrue, NutStyle::Plain]);
        assert!(nuts.styles_for_size(7.0).is_empty());
    }
}
