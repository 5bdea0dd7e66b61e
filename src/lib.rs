// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyframe Hole Tool
//!
//! Drill-hole geometry for metric fasteners. Reference tables for bolt
//! heads, nuts and thread clearances feed a fastener configurator, which
//! produces a solid tree of the material to remove (shaft bore, head and
//! nut recesses, nut slot) and parametric generator code for external
//! modelling scripts.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod fastener;
pub mod hole;
pub mod solid;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod ffi;

pub use catalog::{
    BoltHeadSpec, ClearanceSpec, Designation, HeadStyle, NutSpec, NutStyle, Registries, Registry,
    Tolerance, TolerancePreset,
};
pub use config::HoleToolConfig;
pub use emit::{DrillOverrides, FastenerDocument, JscadRenderer};
pub use error::{HoleError, Result, SpecKind};
pub use fastener::{Fastener, NutSlot};
pub use hole::{build_hole, DrillParams, Sink, Sinks, SlotPlacement};
pub use solid::{BoundingBox, Node, NodeKind, TransformOp};

use std::sync::Arc;

/// Fastener over the standard catalog, e.g. `fastener("M3", &HeadStyle::Socket, None)`
pub fn fastener(designation: &str, head: &HeadStyle, nut: Option<&NutStyle>) -> Result<Fastener> {
    let registries = Arc::new(Registries::standard()?);
    Fastener::create(registries, designation, head, nut)
}
