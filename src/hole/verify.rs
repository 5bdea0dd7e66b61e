// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Test prints for checking hole dimensions on a real printer

use super::builder::build_hole;
use super::params::{DrillParams, Sinks, SlotPlacement};
use crate::solid::{Node, Vec3};

/// Wall left around the widest cavity in [`verification_cylinder`]
pub const CYLINDER_MARGIN: f64 = 3.0;

/// Drill parameters for a flush test print: both components recessed, the
/// slot halfway up the shaft and long enough to break through `reach`.
fn flush_params(shaft_length: f64, params: &DrillParams, reach: f64) -> DrillParams {
    let has_nut = params.nut.is_some_and(|nut| nut.h > 0.0);
    DrillParams {
        h: shaft_length + params.head.h,
        sink: Sinks::flush(),
        slot: has_nut.then_some(SlotPlacement {
            z: shaft_length / 2.0,
            l: reach,
        }),
        ..params.clone()
    }
}

/// Hole cut out of a round post (radius = widest cavity + 3 mm).
///
/// `shaft_length` is the bolt length below the head.
pub fn verification_cylinder(shaft_length: f64, params: &DrillParams) -> Node {
    let r = params.max_radius() + CYLINDER_MARGIN;
    let drill = flush_params(shaft_length, params, r * 2.0);

    Node::difference(vec![Node::cylinder(drill.h, r), build_hole(&drill)])
}

/// Two square posts laid on their sides (one per horizontal axis) plus a
/// round post, so the hole can be printed in every orientation at once.
pub fn verification_block(shaft_length: f64, params: &DrillParams) -> Node {
    let r = params.max_radius() * 1.05 + 1.5;
    let drill = flush_params(shaft_length, params, r * 2.0);
    let depth = drill.h;

    let w = r * 2.0;
    let lift = w / 2.0;
    let shift = w * 0.95;

    let post = Node::cube(Vec3::new(w, w, depth), true).translate(Vec3::new(0.0, 0.0, depth / 2.0));
    let square = Node::difference(vec![post, build_hole(&drill)]);
    let round = Node::difference(vec![Node::cylinder(depth, r), build_hole(&drill)]);

    Node::union(vec![
        square
            .clone()
            .rotate(Vec3::new(90.0, 90.0, 0.0))
            .translate(Vec3::new(shift, w, lift)),
        square
            .rotate(Vec3::new(90.0, 0.0, 90.0))
            .translate(Vec3::new(-shift, -shift, lift)),
        round.rotate(Vec3::new(0.0, 0.0, -45.0)),
    ])
}
