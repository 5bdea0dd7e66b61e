// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Hole geometry builder

mod builder;
mod params;
mod shapes;
pub mod verify;

pub use builder::build_hole;
pub use params::{
    BoltHole, DrillParams, HeadHole, NutHole, Sink, Sinks, SlotPlacement, DEFAULT_SIDES,
};
pub use shapes::{hex_slot, hex_slot_points, regular_polygon, regular_polygon_points, regular_prism};
pub use verify::{verification_block, verification_cylinder};
