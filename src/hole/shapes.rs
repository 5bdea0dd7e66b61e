// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Outline helpers: regular polygons and the hex nut slot

use crate::solid::{Node, Point2};
use std::f64::consts::PI;

/// Corner points of a regular polygon, first corner on +X
pub fn regular_polygon_points(sides: u32, radius: f64) -> Vec<Point2> {
    let step = 2.0 * PI / sides as f64;
    (0..sides)
        .map(|i| {
            let angle = step * i as f64;
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

pub fn regular_polygon(sides: u32, radius: f64) -> Node {
    Node::polygon(regular_polygon_points(sides, radius))
}

/// Regular polygon extruded along +Z from the XY plane
pub fn regular_prism(sides: u32, radius: f64, h: f64) -> Node {
    Node::linear_extrude(h, regular_polygon(sides, radius))
}

/// Outline of a hex nut pushed sideways along -X by `l`.
///
/// The +X half keeps the nut's corner at (r, 0); the flats at y = ±r·cos30
/// run out to x = r·sin30 − l, so the nut can slide in from that side.
pub fn hex_slot_points(r: f64, l: f64) -> Vec<Point2> {
    let angle = PI / 6.0;
    let h = r * angle.cos();
    let x1 = r * angle.sin();
    let x2 = x1 - l;

    vec![
        Point2::new(r, 0.0),
        Point2::new(x1, h),
        Point2::new(x2, h),
        Point2::new(x2, -h),
        Point2::new(x1, -h),
    ]
}

pub fn hex_slot(r: f64, l: f64, h: f64) -> Node {
    Node::linear_extrude(h, Node::polygon(hex_slot_points(r, l)))
}
