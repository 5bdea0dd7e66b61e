// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Clearance and tap drill sizes

use super::registry::{Registry, RegistryEntry, SizedEntry};
use super::Designation;
use crate::error::{HoleError, Result, SpecKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Drill sizes for one thread designation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearanceSpec {
    pub designation: Designation,
    /// Diameter of the bolt
    pub nominal_diameter: f64,
    pub thread_pitch: f64,
    /// Hole the bolt drops through without touching the thread
    pub clearance_diameter: f64,
    /// Pilot hole to cut a thread into
    pub tap_diameter: f64,
}

impl ClearanceSpec {
    pub fn new(
        designation: impl Into<Designation>,
        nominal_diameter: f64,
        thread_pitch: f64,
        clearance_diameter: f64,
        tap_diameter: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            nominal_diameter,
            thread_pitch,
            clearance_diameter,
            tap_diameter,
        }
    }

    /// Metric coarse thread row: size, pitch, clearance, tap
    pub fn metric(size: f64, pitch: f64, clearance: f64, tap: f64) -> Self {
        Self::new(Designation::metric(size), size, pitch, clearance, tap)
    }

    /// How much larger the clearance hole is than the bolt
    pub fn enlarged(&self) -> f64 {
        self.clearance_diameter - self.nominal_diameter
    }
}

impl RegistryEntry for ClearanceSpec {
    type Key = Designation;

    const KIND: SpecKind = SpecKind::Clearance;

    fn key(&self) -> Designation {
        self.designation.clone()
    }

    fn validate(&self) -> Result<()> {
        let fail = |reason: &str| Err(HoleError::invalid_spec(Self::KIND, self.key(), reason));
        if !(self.nominal_diameter > 0.0) {
            return fail("nominal diameter must be positive");
        }
        if self.clearance_diameter < self.nominal_diameter {
            return fail("clearance diameter is below nominal diameter");
        }
        if self.nominal_diameter < self.tap_diameter {
            return fail("tap diameter exceeds nominal diameter");
        }
        Ok(())
    }
}

impl SizedEntry for ClearanceSpec {
    fn designation(&self) -> &Designation {
        &self.designation
    }

    fn nominal_diameter(&self) -> f64 {
        self.nominal_diameter
    }
}

impl Registry<ClearanceSpec> {
    pub fn lookup(&self, designation: &str) -> Option<Arc<ClearanceSpec>> {
        self.get(&Designation::from(designation))
    }

    /// Find the entry whose nominal diameter is within 1e-3 of `size`
    pub fn lookup_size(&self, size: f64) -> Option<Arc<ClearanceSpec>> {
        self.iter()
            .find(|spec| (spec.nominal_diameter - size).abs() < 1e-3)
            .cloned()
    }
}
