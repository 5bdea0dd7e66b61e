// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Drilling parameters consumed by the hole builder

use crate::utils::COS_30;
use serde::{Deserialize, Serialize};

/// Sides of a standard hex nut
pub const DEFAULT_SIDES: u32 = 6;

/// Shaft bore
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoltHole {
    pub r: f64,
}

/// Head cavity: radius and the depth that makes the head flush
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadHole {
    pub r: f64,
    pub h: f64,
}

/// Nut cavity: corner radius, flush depth, width across flats, side count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutHole {
    pub r: f64,
    pub h: f64,
    pub w: f64,
    #[serde(default = "default_sides")]
    pub sides: u32,
}

fn default_sides() -> u32 {
    DEFAULT_SIDES
}

impl NutHole {
    /// Hex cavity; the flat width follows from the corner radius
    pub fn hex(r: f64, h: f64) -> Self {
        Self {
            r,
            h,
            w: r * COS_30 * 2.0,
            sides: DEFAULT_SIDES,
        }
    }
}

/// How far a component is recessed below the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SinkRepr", into = "SinkRepr")]
pub enum Sink {
    Depth(f64),
    /// Recess by the component's own height
    Flush,
}

impl Sink {
    pub fn resolve(self, component_height: f64) -> f64 {
        match self {
            Sink::Depth(depth) => depth,
            Sink::Flush => component_height,
        }
    }
}

impl Default for Sink {
    fn default() -> Self {
        Sink::Depth(0.0)
    }
}

impl From<f64> for Sink {
    fn from(depth: f64) -> Self {
        Sink::Depth(depth)
    }
}

/// Sinks serialize as a bare number or the word "flush"
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SinkRepr {
    Depth(f64),
    Word(String),
}

impl TryFrom<SinkRepr> for Sink {
    type Error = String;

    fn try_from(repr: SinkRepr) -> Result<Self, Self::Error> {
        match repr {
            SinkRepr::Depth(depth) => Ok(Sink::Depth(depth)),
            SinkRepr::Word(word) if word.eq_ignore_ascii_case("flush") => Ok(Sink::Flush),
            SinkRepr::Word(word) => Err(format!("expected a depth or \"flush\", got {:?}", word)),
        }
    }
}

impl From<Sink> for SinkRepr {
    fn from(sink: Sink) -> Self {
        match sink {
            Sink::Depth(depth) => SinkRepr::Depth(depth),
            Sink::Flush => SinkRepr::Word("flush".to_string()),
        }
    }
}

/// Head and nut recess depths
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sinks {
    #[serde(default)]
    pub head: Sink,
    #[serde(default)]
    pub nut: Sink,
}

impl Sinks {
    pub fn new(head: impl Into<Sink>, nut: impl Into<Sink>) -> Self {
        Self {
            head: head.into(),
            nut: nut.into(),
        }
    }

    pub fn flush() -> Self {
        Self::new(Sink::Flush, Sink::Flush)
    }
}

/// Horizontal nut-insertion slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotPlacement {
    /// Absolute height of the slot floor above the bottom of the hole
    pub z: f64,
    /// How far the slot reaches out from the bolt axis; 0 disables it
    pub l: f64,
}

/// Everything needed to build one hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillParams {
    /// Total drill depth
    pub h: f64,
    pub bolt: BoltHole,
    pub head: HeadHole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nut: Option<NutHole>,
    #[serde(default)]
    pub sink: Sinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<SlotPlacement>,
}

impl DrillParams {
    /// Depths the head and nut are actually recessed by
    pub fn resolved_sinks(&self) -> (f64, f64) {
        let head = self.sink.head.resolve(self.head.h);
        let nut = match &self.nut {
            Some(nut) => self.sink.nut.resolve(nut.h),
            None => 0.0,
        };
        (head, nut)
    }

    /// Largest of the bolt, head and nut radii
    pub fn max_radius(&self) -> f64 {
        let nut = self.nut.map_or(0.0, |n| n.r);
        self.bolt.r.max(self.head.r).max(nut)
    }
}
