// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Hole construction

use super::params::DrillParams;
use super::shapes::{hex_slot, regular_prism};
use crate::solid::{Node, Vec3};

/// Build the solid to subtract for one fastener.
///
/// Parts are stacked bottom to top along +Z: nut pocket, shaft bore, head
/// counter-bore. The nut slot sits at its own absolute height and may
/// overlap the pocket or the bore. A single part is returned bare, anything
/// more is wrapped in a union.
///
/// Over-specified sinks give the bore a negative height; that is passed
/// through untouched, see [`Node::check`].
pub fn build_hole(params: &DrillParams) -> Node {
    let (head_sink, nut_sink) = params.resolved_sinks();
    let mut parts = Vec::new();
    let mut z = 0.0;

    if let Some(nut) = &params.nut {
        if nut_sink > 0.0 {
            parts.push(regular_prism(nut.sides, nut.r, nut_sink).named("nut"));
            z += nut_sink;
        }

        if let Some(slot) = params.slot.filter(|slot| slot.l > 0.0) {
            let mut node = hex_slot(nut.r, slot.l, nut.h);
            if slot.z != 0.0 {
                node = node.translate(Vec3::new(0.0, 0.0, slot.z));
            }
            parts.push(node.named("nut_slot"));
        }
    } else if nut_sink > 0.0 || params.slot.is_some() {
        tracing::debug!("no nut attached, skipping nut pocket and slot");
    }

    let bore_height = params.h - z - head_sink;
    if bore_height <= 0.0 {
        tracing::warn!(bore_height, depth = params.h, "sinks leave no room for the shaft bore");
    }
    let mut bore = Node::cylinder(bore_height, params.bolt.r);
    if z > 0.0 {
        bore = bore.translate(Vec3::new(0.0, 0.0, z));
    }
    parts.push(bore.named("bore"));
    z += bore_height;

    if head_sink > 0.0 {
        let head = Node::cylinder(head_sink, params.head.r).translate(Vec3::new(0.0, 0.0, z));
        parts.push(head.named("head"));
    }

    if parts.len() == 1 {
        if let Some(only) = parts.pop() {
            return only;
        }
    }
    Node::union(parts)
}
