// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! OpenSCAD source writer

use super::{Node, NodeKind, TransformOp, Vec3};
use crate::utils::format_mm;
use std::fmt;

const INDENT: &str = "  ";

impl Node {
    /// Write the tree as OpenSCAD source
    pub fn to_scad(&self) -> String {
        self.to_string()
    }

    /// Write the tree as OpenSCAD source into any text sink
    pub fn write_scad<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write_node(out, self, 0)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_scad(f)
    }
}

fn write_node<W: fmt::Write>(out: &mut W, node: &Node, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    if let Some(id) = &node.id {
        writeln!(out, "{}// {}", pad, id)?;
    }

    match &node.kind {
        NodeKind::Cube { size, center } => {
            writeln!(out, "{}cube(size = {}, center = {});", pad, vector(size), center)
        }
        NodeKind::Cylinder { h, r, fn_ } => {
            let segments = if *fn_ > 0 {
                format!(", $fn = {}", fn_)
            } else {
                String::new()
            };
            writeln!(
                out,
                "{}cylinder(h = {}, r = {}{});",
                pad,
                format_mm(*h),
                format_mm(*r),
                segments
            )
        }
        NodeKind::Polygon(points) => {
            let points: Vec<String> = points
                .iter()
                .map(|p| format!("[{}, {}]", format_mm(p.x), format_mm(p.y)))
                .collect();
            writeln!(out, "{}polygon(points = [{}]);", pad, points.join(", "))
        }
        NodeKind::LinearExtrude { height, children } => {
            let head = format!("linear_extrude(height = {})", format_mm(*height));
            write_block(out, &pad, &head, children, depth)
        }
        NodeKind::Union(children) => write_block(out, &pad, "union()", children, depth),
        NodeKind::Difference(children) => write_block(out, &pad, "difference()", children, depth),
        NodeKind::Transform { op, children } => {
            let head = match op {
                TransformOp::Translate(v) => format!("translate({})", vector(v)),
                TransformOp::Rotate(v) => format!("rotate({})", vector(v)),
            };
            write_block(out, &pad, &head, children, depth)
        }
    }
}

fn write_block<W: fmt::Write>(
    out: &mut W,
    pad: &str,
    head: &str,
    children: &[Node],
    depth: usize,
) -> fmt::Result {
    writeln!(out, "{}{} {{", pad, head)?;
    for child in children {
        write_node(out, child, depth + 1)?;
    }
    writeln!(out, "{}}}", pad)
}

fn vector(v: &Vec3) -> String {
    format!("[{}, {}, {}]", format_mm(v.x), format_mm(v.y), format_mm(v.z))
}
