// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Solid tree node definitions

use crate::error::{HoleError, Result};
use serde::{Deserialize, Serialize};

/// 3D Vector type alias
pub type Vec3 = nalgebra::Vector3<f64>;

/// 2D point in a polygon outline
pub type Point2 = nalgebra::Point2<f64>;

/// A single primitive or operation in a solid tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub id: Option<String>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, id: None }
    }

    /// Label this node (labels show up in the JSON tree and as SCAD comments)
    pub fn named(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Cylinder standing on the XY plane, `fn_ = 0` leaves the segment count to the renderer
    pub fn cylinder(h: f64, r: f64) -> Self {
        Self::new(NodeKind::Cylinder { h, r, fn_: 0 })
    }

    pub fn cube(size: Vec3, center: bool) -> Self {
        Self::new(NodeKind::Cube { size, center })
    }

    pub fn polygon(points: Vec<Point2>) -> Self {
        Self::new(NodeKind::Polygon(points))
    }

    /// Extrude a 2D outline along +Z
    pub fn linear_extrude(height: f64, outline: Node) -> Self {
        Self::new(NodeKind::LinearExtrude {
            height,
            children: vec![outline],
        })
    }

    pub fn union(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Union(children))
    }

    /// Remove every following child from the first one
    pub fn difference(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Difference(children))
    }

    pub fn translate(self, offset: Vec3) -> Self {
        Self::new(NodeKind::Transform {
            op: TransformOp::Translate(offset),
            children: vec![self],
        })
    }

    /// Rotate by Euler angles in degrees (X, then Y, then Z)
    pub fn rotate(self, degrees: Vec3) -> Self {
        Self::new(NodeKind::Transform {
            op: TransformOp::Rotate(degrees),
            children: vec![self],
        })
    }

    /// Number of primitives (cube, cylinder, polygon) in the tree
    pub fn primitive_count(&self) -> usize {
        match &self.kind {
            NodeKind::Cube { .. } | NodeKind::Cylinder { .. } | NodeKind::Polygon(_) => 1,
            kind => kind.get_children().iter().map(|c| c.primitive_count()).sum(),
        }
    }

    /// Report the first non-positive length or radius in the tree.
    ///
    /// Construction never clamps dimensions; callers that want to reject
    /// degenerate geometry (for example over-specified sinks producing a
    /// negative bore) call this before handing the tree to a renderer.
    pub fn check(&self) -> Result<()> {
        let invalid = |what: String| Err(HoleError::InvalidGeometry(what));
        match &self.kind {
            NodeKind::Cube { size, .. } => {
                if size.iter().any(|v| !(*v > 0.0)) {
                    return invalid(format!("cube size [{}, {}, {}]", size.x, size.y, size.z));
                }
            }
            NodeKind::Cylinder { h, r, .. } => {
                if !(*h > 0.0) {
                    return invalid(format!("cylinder height {}", h));
                }
                if !(*r > 0.0) {
                    return invalid(format!("cylinder radius {}", r));
                }
            }
            NodeKind::Polygon(points) => {
                if points.len() < 3 {
                    return invalid(format!("polygon with {} points", points.len()));
                }
            }
            NodeKind::LinearExtrude { height, .. } => {
                if !(*height > 0.0) {
                    return invalid(format!("extrusion height {}", height));
                }
            }
            _ => {}
        }
        for child in self.kind.get_children() {
            child.check()?;
        }
        Ok(())
    }
}

/// Types of solid tree nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    // Primitives
    Cube {
        size: Vec3,
        center: bool,
    },
    Cylinder {
        h: f64,
        r: f64,
        fn_: u32,
    },
    Polygon(Vec<Point2>),

    LinearExtrude {
        height: f64,
        children: Vec<Node>,
    },

    // Boolean operations
    Union(Vec<Node>),
    Difference(Vec<Node>),

    // Transformations
    Transform {
        op: TransformOp,
        children: Vec<Node>,
    },
}

impl NodeKind {
    /// Get child nodes
    pub fn get_children(&self) -> Vec<&Node> {
        match self {
            NodeKind::Union(children) => children.iter().collect(),
            NodeKind::Difference(children) => children.iter().collect(),
            NodeKind::LinearExtrude { children, .. } => children.iter().collect(),
            NodeKind::Transform { children, .. } => children.iter().collect(),
            _ => Vec::new(),
        }
    }
}

/// Transformation operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransformOp {
    Translate(Vec3),
    /// Euler angles in degrees
    Rotate(Vec3),
}

impl TransformOp {
    /// Convert transformation to a 4x4 matrix
    pub fn to_matrix(&self) -> nalgebra::Matrix4<f64> {
        use crate::utils::math::deg_to_rad;
        use nalgebra::{Matrix4, UnitQuaternion, Vector3};

        match self {
            TransformOp::Translate(v) => Matrix4::new_translation(v),
            TransformOp::Rotate(angles) => {
                let rx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), deg_to_rad(angles.x));
                let ry = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), deg_to_rad(angles.y));
                let rz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), deg_to_rad(angles.z));
                (rz * ry * rx).to_homogeneous()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_nest_children() {
        let node = Node::cylinder(5.0, 2.0).translate(Vec3::new(0.0, 0.0, 3.0));
        match &node.kind {
            NodeKind::Transform { op, children } => {
                assert_eq!(*op, TransformOp::Translate(Vec3::new(0.0, 0.0, 3.0)));
                assert_eq!(children.len(), 1);
            }
            other => panic!("expected transform, got {:?}", other),
        }
        assert_eq!(node.primitive_count(), 1);
    }

    #[test]
    fn test_check_rejects_negative_height() {
        let ok = Node::union(vec![Node::cylinder(5.0, 2.0), Node::cylinder(1.0, 4.0)]);
        assert!(ok.check().is_ok());

        let bad = Node::union(vec![Node::cylinder(-1.0, 2.0), Node::cylinder(1.0, 4.0)]);
        assert!(matches!(bad.check(), Err(HoleError::InvalidGeometry(_))));
    }

    #[test]
    fn test_rotation_matrix() {
        let m = TransformOp::Rotate(Vec3::new(0.0, 0.0, 90.0)).to_matrix();
        let p = m.transform_point(&nalgebra::Point3::new(1.0, 0.0, 0.0));
        assert!((p.x).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }
}
