// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Declarative solid trees
//!
//! The hole builder describes material to remove as a tree of primitives
//! (cube, cylinder, polygon), extrusions, transforms and boolean operations.
//! Meshing is left to whichever solid modeller consumes the tree.

mod bbox;
mod node;
mod scad;

pub use bbox::BoundingBox;
pub use node::{Node, NodeKind, Point2, TransformOp, Vec3};
