// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Versioned description of a configured fastener

use crate::catalog::{Designation, HeadStyle};
use crate::error::Result;
use crate::fastener::Fastener;
use crate::hole::{BoltHole, DrillParams, HeadHole, NutHole, Sinks, SlotPlacement};
use serde::{Deserialize, Serialize};

/// Bumped whenever the document layout changes
pub const DOCUMENT_VERSION: u32 = 1;

/// Keys a generator call may override
pub const OVERRIDE_KEYS: [&str; 3] = ["h", "sink", "slot"];

/// Drilling profile the fastener was configured with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillDefaults {
    pub h: f64,
    #[serde(default)]
    pub sink: Sinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<SlotPlacement>,
}

/// Per-call overrides; absent keys keep the fastener's defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillOverrides {
    pub h: Option<f64>,
    pub sink: Option<Sinks>,
    pub slot: Option<SlotPlacement>,
}

impl DrillOverrides {
    pub fn depth(h: f64) -> Self {
        Self {
            h: Some(h),
            ..Self::default()
        }
    }
}

/// Constants and defaults for one fastener, independent of any output language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastenerDocument {
    pub version: u32,
    pub designation: Designation,
    pub head_style: HeadStyle,
    /// Identifier prefix for the bolt, e.g. `m2_5`
    pub bolt_id: String,
    /// Identifier for the head style, e.g. `button`
    pub head_id: String,
    pub bolt_hole: BoltHole,
    pub head_hole: HeadHole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nut_hole: Option<NutHole>,
    pub defaults: DrillDefaults,
    pub override_keys: Vec<String>,
}

impl FastenerDocument {
    /// Capture the derived dimensions of a fastener.
    ///
    /// Fails when the fastener has no clearance data.
    pub fn from_fastener(fastener: &Fastener) -> Result<Self> {
        let head = fastener.head_spec();
        let params = fastener.drill_params()?;

        Ok(Self {
            version: DOCUMENT_VERSION,
            designation: head.designation.clone(),
            head_style: head.head_style.clone(),
            bolt_id: head.designation.ident(),
            head_id: head.head_style.ident(),
            bolt_hole: params.bolt,
            head_hole: params.head,
            nut_hole: params.nut.filter(|nut| nut.h > 0.0),
            defaults: DrillDefaults {
                h: params.h,
                sink: params.sink,
                slot: params.slot,
            },
            override_keys: OVERRIDE_KEYS.iter().map(|k| k.to_string()).collect(),
        })
    }

    /// Name of the generator routine, `<boltId>_<headId>`
    pub fn generator_name(&self) -> String {
        format!("{}_{}", self.bolt_id, self.head_id)
    }

    /// Drilling parameters with `overrides` merged over the defaults, key by key
    pub fn generate(&self, overrides: &DrillOverrides) -> DrillParams {
        DrillParams {
            h: overrides.h.unwrap_or(self.defaults.h),
            bolt: self.bolt_hole,
            head: self.head_hole,
            nut: self.nut_hole,
            sink: overrides.sink.unwrap_or(self.defaults.sink),
            slot: overrides.slot.or(self.defaults.slot),
        }
    }
}
