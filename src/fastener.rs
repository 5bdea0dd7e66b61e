// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Fastener configurator
//!
//! Combines a bolt head, an optional nut, the clearance data for the bolt
//! and a tolerance into working hole dimensions. Drill depth and sink
//! depths share one length budget: the plain shaft bore is whatever the
//! head and nut recesses leave of the total depth.

use crate::catalog::{
    BoltHeadSpec, ClearanceSpec, HeadStyle, NutSpec, NutStyle, Registries, Tolerance,
};
use crate::error::{HoleError, Result, SpecKind};
use crate::hole::{self, BoltHole, DrillParams, HeadHole, NutHole, Sinks, SlotPlacement};
use crate::solid::Node;
use crate::utils::COS_30;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_DESIGNATION: &str = "M5";
pub const DEFAULT_DRILL_DEPTH: f64 = 10.0;

/// Side-entry slot for sliding a nut in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutSlot {
    /// Distance from the bottom of the head recess to the top of the nut
    pub below_head: f64,
    /// How far the slot reaches out from the bolt axis
    pub extension: f64,
}

/// A configurable bolt/nut combination
#[derive(Debug, Clone)]
pub struct Fastener {
    registries: Arc<Registries>,
    head: Arc<BoltHeadSpec>,
    nut: Option<Arc<NutSpec>>,
    clearance: Option<Arc<ClearanceSpec>>,
    tolerance: Tolerance,
    bolt_length: Option<f64>,
    drill_depth: f64,
    bore_length: f64,
    head_sink: f64,
    nut_sink: f64,
    slot: Option<NutSlot>,
}

impl Fastener {
    /// M5 button head with its plain nut, exact tolerance, no recesses
    pub fn new(registries: Arc<Registries>) -> Result<Self> {
        let head = registries
            .bolt_heads
            .lookup(DEFAULT_DESIGNATION, &HeadStyle::Button)
            .ok_or_else(|| {
                HoleError::not_found(SpecKind::BoltHead, format!("{} Button", DEFAULT_DESIGNATION))
            })?;

        let mut fastener = Self {
            head: Arc::clone(&head),
            registries,
            nut: None,
            clearance: None,
            tolerance: Tolerance::PERFECT,
            bolt_length: None,
            drill_depth: DEFAULT_DRILL_DEPTH,
            bore_length: DEFAULT_DRILL_DEPTH,
            head_sink: 0.0,
            nut_sink: 0.0,
            slot: None,
        };
        fastener.attach_head(head);
        Ok(fastener)
    }

    /// Fastener for a designation and head style, with an optional nut style
    pub fn create(
        registries: Arc<Registries>,
        designation: &str,
        head_style: &HeadStyle,
        nut_style: Option<&NutStyle>,
    ) -> Result<Self> {
        let mut fastener = Self::new(registries)?;
        fastener.set_head(designation, head_style)?;
        if let Some(style) = nut_style {
            fastener.set_nut_style(Some(style))?;
        }
        Ok(fastener)
    }

    pub fn registries(&self) -> &Arc<Registries> {
        &self.registries
    }

    /// Switch to another bolt.
    ///
    /// The clearance data follows the new designation. A nut for a different
    /// designation (or no nut at all) is replaced with the plain nut for the
    /// new one, if the catalog has it.
    pub fn set_head(&mut self, designation: &str, head_style: &HeadStyle) -> Result<()> {
        let head = self
            .registries
            .bolt_heads
            .lookup(designation, head_style)
            .ok_or_else(|| {
                HoleError::not_found(SpecKind::BoltHead, format!("{} {}", designation, head_style))
            })?;
        self.attach_head(head);
        Ok(())
    }

    fn attach_head(&mut self, head: Arc<BoltHeadSpec>) {
        let designation = head.designation.as_str();

        self.clearance = self.registries.clearances.lookup(designation);
        if self.clearance.is_none() {
            tracing::warn!(designation, "no clearance data, hole radii are unavailable");
        }

        let nut_matches = self
            .nut
            .as_ref()
            .is_some_and(|nut| nut.designation().as_str() == designation);
        if !nut_matches {
            self.nut = self.registries.nuts.lookup(designation, &NutStyle::Plain);
        }

        tracing::debug!(
            designation,
            head = %head.head_style,
            nut = ?self.nut.as_ref().map(|n| n.nut_style().name()),
            "bolt head selected"
        );
        self.head = head;
    }

    /// Attach a nut (or none) without checking it fits the bolt
    pub fn set_nut(&mut self, nut: Option<Arc<NutSpec>>) {
        self.nut = nut;
    }

    /// Attach the nut of the given style for the current designation
    pub fn set_nut_style(&mut self, style: Option<&NutStyle>) -> Result<()> {
        let nut = match style {
            Some(style) => {
                let designation = self.head.designation.as_str();
                let nut = self
                    .registries
                    .nuts
                    .lookup(designation, style)
                    .ok_or_else(|| {
                        HoleError::not_found(SpecKind::Nut, format!("{} {}", designation, style))
                    })?;
                Some(nut)
            }
            None => None,
        };
        self.set_nut(nut);
        Ok(())
    }

    /// Replace the tolerance; sinks that were already set keep their value
    pub fn set_tolerance(&mut self, tolerance: Tolerance) {
        self.tolerance = tolerance;
    }

    /// Use a registered tolerance preset
    pub fn set_tolerance_preset(&mut self, name: &str) -> Result<()> {
        let preset = self
            .registries
            .tolerances
            .lookup(name)
            .ok_or_else(|| HoleError::not_found(SpecKind::Tolerance, name))?;
        self.set_tolerance(preset.tolerance);
        Ok(())
    }

    /// Record the bolt length (not necessarily how deep to drill)
    pub fn set_bolt_length(&mut self, length: f64) {
        self.bolt_length = Some(length);
    }

    /// Set the depth to drill through (the entire thickness of the material)
    pub fn set_drill_depth(&mut self, depth: f64) {
        self.drill_depth = depth;
        self.update_bore();
    }

    pub fn set_head_sink(&mut self, depth: f64) {
        self.head_sink = depth;
        self.update_bore();
    }

    /// Recess the nut; forced to 0 when no nut is attached
    pub fn set_nut_sink(&mut self, depth: f64) {
        self.nut_sink = if self.nut.is_some() { depth } else { 0.0 };
        self.update_bore();
    }

    /// Recess the head until its top is level with the surface
    pub fn set_head_flush(&mut self) {
        self.set_head_sink(self.head_height());
    }

    /// Recess the nut until it is level with the surface
    pub fn set_nut_flush(&mut self) {
        self.set_nut_sink(self.nut_height());
    }

    /// Side slot for the nut; an extension of 0 disables it
    pub fn set_nut_slot(&mut self, below_head: f64, extension: f64) {
        self.slot = (extension > 0.0).then_some(NutSlot {
            below_head,
            extension,
        });
    }

    /// Recess both head and nut so nothing protrudes from the material.
    ///
    /// `shaft_length` is the bolt length below the head; the drill depth
    /// grows by the head height.
    pub fn make_flush(&mut self, shaft_length: f64) {
        self.set_bolt_length(shaft_length);
        self.set_drill_depth(shaft_length + self.head_height());
        self.set_head_flush();
        self.set_nut_flush();
    }

    // Not clamped: a negative bore is reported when the solid is checked
    fn update_bore(&mut self) {
        self.bore_length = self.drill_depth - self.head_sink - self.nut_sink;
    }

    pub fn head_spec(&self) -> &Arc<BoltHeadSpec> {
        &self.head
    }

    pub fn nut_spec(&self) -> Option<&Arc<NutSpec>> {
        self.nut.as_ref()
    }

    /// Clearance data for the bolt, failing when the catalog has none
    pub fn clearance_spec(&self) -> Result<&Arc<ClearanceSpec>> {
        self.clearance
            .as_ref()
            .ok_or_else(|| HoleError::not_found(SpecKind::Clearance, &self.head.designation))
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    pub fn bolt_length(&self) -> Option<f64> {
        self.bolt_length
    }

    pub fn drill_depth(&self) -> f64 {
        self.drill_depth
    }

    /// Length of plain shaft bore between nut and head recesses
    pub fn bore_length(&self) -> f64 {
        self.bore_length
    }

    pub fn head_sink(&self) -> f64 {
        self.head_sink
    }

    pub fn nut_sink(&self) -> f64 {
        self.nut_sink
    }

    pub fn nut_slot(&self) -> Option<NutSlot> {
        self.slot
    }

    /// Depth that makes the head flush: max head height plus height tolerance
    pub fn head_height(&self) -> f64 {
        self.head.head_height_max + self.tolerance.height
    }

    /// Depth that makes the nut flush, 0 without a nut
    pub fn nut_height(&self) -> f64 {
        match &self.nut {
            Some(nut) => nut.height_max() + self.tolerance.height,
            None => 0.0,
        }
    }

    pub fn bolt_hole_radius(&self) -> Result<f64> {
        let clearance = self.clearance_spec()?;
        Ok((clearance.clearance_diameter + self.tolerance.diameter) / 2.0)
    }

    /// How much wider than the bolt the bore is, per side. Head and nut
    /// cavities get the same allowance.
    pub fn radius_clearance(&self) -> Result<f64> {
        Ok(self.bolt_hole_radius()? - self.head.nominal_diameter / 2.0)
    }

    pub fn bolt_head_radius(&self) -> Result<f64> {
        Ok(self.head.head_diameter_max / 2.0 + self.radius_clearance()?)
    }

    /// Corner radius of the nut cavity, 0 without a nut
    pub fn nut_radius(&self) -> Result<f64> {
        match &self.nut {
            Some(nut) => Ok(nut.corner_radius_max() + self.radius_clearance()?),
            None => Ok(0.0),
        }
    }

    /// Width across flats of the nut cavity
    pub fn nut_width(&self) -> Result<f64> {
        Ok(self.nut_radius()? * COS_30 * 2.0)
    }

    pub fn max_radius(&self) -> Result<f64> {
        Ok(self
            .bolt_hole_radius()?
            .max(self.bolt_head_radius()?)
            .max(self.nut_radius()?))
    }

    /// Nut cavity constants, if a nut is attached
    pub fn nut_hole(&self) -> Result<Option<NutHole>> {
        if self.nut.is_none() {
            return Ok(None);
        }
        Ok(Some(NutHole::hex(self.nut_radius()?, self.nut_height())))
    }

    /// Absolute placement of the nut slot, measured from the bottom of the hole
    pub fn slot_placement(&self) -> Option<SlotPlacement> {
        let slot = self.slot?;
        self.nut.as_ref()?;
        Some(SlotPlacement {
            z: self.drill_depth - self.head_sink - slot.below_head - self.nut_height(),
            l: slot.extension,
        })
    }

    /// Drill parameters for the current configuration
    pub fn drill_params(&self) -> Result<DrillParams> {
        Ok(DrillParams {
            h: self.drill_depth,
            bolt: BoltHole {
                r: self.bolt_hole_radius()?,
            },
            head: HeadHole {
                r: self.bolt_head_radius()?,
                h: self.head_height(),
            },
            nut: self.nut_hole()?,
            sink: Sinks::new(self.head_sink, self.nut_sink),
            slot: self.slot_placement(),
        })
    }

    /// Solid to subtract for the current configuration
    pub fn hole(&self) -> Result<Node> {
        Ok(hole::build_hole(&self.drill_params()?))
    }
}
