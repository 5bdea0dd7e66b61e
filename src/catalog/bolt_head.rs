// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bolt head measurements

use super::registry::{RegistryEntry, SizedEntry, StyleKey, StyledEntry};
use super::{Designation, HeadStyle};
use crate::error::{HoleError, Result, SpecKind};
use serde::{Deserialize, Serialize};

/// Head diameter (dk) and height (k) ranges for one bolt size and head style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltHeadSpec {
    pub designation: Designation,
    pub head_style: HeadStyle,
    /// Shaft diameter (5.0 for an M5 bolt)
    pub nominal_diameter: f64,
    pub head_diameter_min: f64,
    pub head_diameter_max: f64,
    /// Height of the head above the end of the shaft
    pub head_height_min: f64,
    pub head_height_max: f64,
}

impl BoltHeadSpec {
    pub fn new(
        designation: impl Into<Designation>,
        head_style: HeadStyle,
        nominal_diameter: f64,
        (head_diameter_min, head_diameter_max): (f64, f64),
        (head_height_min, head_height_max): (f64, f64),
    ) -> Self {
        Self {
            designation: designation.into(),
            head_style,
            nominal_diameter,
            head_diameter_min,
            head_diameter_max,
            head_height_min,
            head_height_max,
        }
    }

    /// Metric bolt, named after its size ("M" + size)
    pub fn metric(size: f64, head_style: HeadStyle, dk: (f64, f64), k: (f64, f64)) -> Self {
        Self::new(Designation::metric(size), head_style, size, dk, k)
    }

    /// Rough dimensions for a bolt with no published table: dk = 1.9d, k = 0.55d
    pub fn estimated(size: f64, head_style: HeadStyle) -> Self {
        let dk = size * 1.9;
        let k = size * 0.55;
        Self::metric(size, head_style, (dk, dk), (k, k))
    }
}

impl RegistryEntry for BoltHeadSpec {
    type Key = StyleKey<HeadStyle>;

    const KIND: SpecKind = SpecKind::BoltHead;

    fn key(&self) -> Self::Key {
        StyleKey::new(self.designation.clone(), self.head_style.clone())
    }

    fn validate(&self) -> Result<()> {
        let fail = |reason: &str| Err(HoleError::invalid_spec(Self::KIND, self.key(), reason));
        if !(self.nominal_diameter > 0.0) {
            return fail("nominal diameter must be positive");
        }
        if self.head_diameter_max < self.head_diameter_min {
            return fail("head diameter max is below min");
        }
        if self.head_height_max < self.head_height_min {
            return fail("head height max is below min");
        }
        Ok(())
    }
}

impl SizedEntry for BoltHeadSpec {
    fn designation(&self) -> &Designation {
        &self.designation
    }

    fn nominal_diameter(&self) -> f64 {
        self.nominal_diameter
    }
}

impl StyledEntry for BoltHeadSpec {
    type Style = HeadStyle;

    fn style(&self) -> &HeadStyle {
        &self.head_style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ranges() {
        let ok = BoltHeadSpec::metric(5.0, HeadStyle::Button, (9.14, 9.50), (2.50, 2.75));
        assert!(ok.validate().is_ok());

        let inverted = BoltHeadSpec::metric(5.0, HeadStyle::Button, (9.50, 9.14), (2.50, 2.75));
        assert!(matches!(
            inverted.validate(),
            Err(HoleError::InvalidSpec { kind: SpecKind::BoltHead, .. })
        ));

        let zero = BoltHeadSpec::metric(0.0, HeadStyle::Pan, (1.0, 1.0), (1.0, 1.0));
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_estimated_head() {
        let spec = BoltHeadSpec::estimated(10.0, HeadStyle::Custom("Hex".into()));
        assert_eq!(spec.designation.as_str(), "M10");
        assert!((spec.head_diameter_max - 19.0).abs() < 1e-12);
        assert!((spec.head_height_max - 5.5).abs() < 1e-12);
        assert!(spec.validate().is_ok());
    }
}
