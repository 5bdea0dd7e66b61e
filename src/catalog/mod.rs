// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Dimension registries
//!
//! Four independent lookup tables (bolt heads, nuts, clearances and tolerance
//! presets). They are filled once, usually from [`Registries::standard`], and
//! then shared read-only between fastener configurators.

mod bolt_head;
mod clearance;
mod nut;
mod registry;
mod standard;
mod style;
mod tolerance;

pub use bolt_head::BoltHeadSpec;
pub use clearance::ClearanceSpec;
pub use nut::NutSpec;
pub use registry::{Registry, RegistryEntry, SizedEntry, StyleKey, StyledEntry};
pub use style::{Designation, HeadStyle, NutStyle};
pub use tolerance::{Tolerance, TolerancePreset};

use crate::error::Result;

/// The complete set of reference tables
#[derive(Debug, Clone, Default)]
pub struct Registries {
    pub bolt_heads: Registry<BoltHeadSpec>,
    pub nuts: Registry<NutSpec>,
    pub clearances: Registry<ClearanceSpec>,
    pub tolerances: Registry<TolerancePreset>,
}

impl Registries {
    /// Empty tables, for fixtures
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tables loaded with the canned metric reference data
    pub fn standard() -> Result<Self> {
        let mut registries = Self::empty();
        standard::load(&mut registries)?;
        Ok(registries)
    }

    /// Designations that have at least one bolt head, smallest first
    pub fn designations(&self) -> Vec<Designation> {
        self.bolt_heads.list_designations()
    }
}
