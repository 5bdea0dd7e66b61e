// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bounding box estimates for solid trees

use super::{Node, NodeKind};
use crate::utils::approx_eq;
use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);

        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    pub fn merge(&mut self, other: &BoundingBox) {
        if !other.is_empty() {
            self.expand_to_include(&other.min);
            self.expand_to_include(&other.max);
        }
    }

    pub fn corners(&self) -> [Point3<f64>; 8] {
        let (a, b) = (self.min, self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(b.x, b.y, b.z),
            Point3::new(a.x, b.y, b.z),
        ]
    }

    /// Box enclosing this box after a transform
    pub fn transformed(&self, matrix: &Matrix4<f64>) -> Self {
        if self.is_empty() {
            return *self;
        }
        let mut bbox = Self::empty();
        for corner in self.corners() {
            bbox.expand_to_include(&matrix.transform_point(&corner));
        }
        bbox
    }

    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    pub fn size(&self) -> Vector3<f64> {
        Vector3::new(
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }

    /// Check if two bounding boxes are approximately equal within tolerance
    pub fn approx_eq(&self, other: &BoundingBox, tolerance: f64) -> bool {
        let mins = self.min.coords.iter().zip(other.min.coords.iter());
        let maxs = self.max.coords.iter().zip(other.max.coords.iter());
        mins.chain(maxs).all(|(a, b)| approx_eq(*a, *b, tolerance))
    }
}

impl Node {
    /// Conservative axis-aligned extent of the solid.
    ///
    /// A difference is bounded by its first child; rotated boxes are
    /// re-boxed, so rotations only ever grow the estimate.
    pub fn bounding_box(&self) -> BoundingBox {
        match &self.kind {
            NodeKind::Cube { size, center } => {
                let (min, max) = if *center {
                    (-size / 2.0, size / 2.0)
                } else {
                    (Vector3::zeros(), *size)
                };
                let mut bbox = BoundingBox::empty();
                bbox.expand_to_include(&Point3::from(min));
                bbox.expand_to_include(&Point3::from(max));
                bbox
            }
            NodeKind::Cylinder { h, r, .. } => {
                let mut bbox = BoundingBox::empty();
                bbox.expand_to_include(&Point3::new(-r, -r, 0.0));
                bbox.expand_to_include(&Point3::new(*r, *r, *h));
                bbox
            }
            NodeKind::Polygon(points) => {
                let mut bbox = BoundingBox::empty();
                for p in points {
                    bbox.expand_to_include(&Point3::new(p.x, p.y, 0.0));
                }
                bbox
            }
            NodeKind::LinearExtrude { height, children } => {
                let mut bbox = merged(children);
                if !bbox.is_empty() {
                    bbox.min.z = bbox.min.z.min(0.0).min(*height);
                    bbox.max.z = bbox.max.z.max(0.0).max(*height);
                }
                bbox
            }
            NodeKind::Union(children) => merged(children),
            NodeKind::Difference(children) => children
                .first()
                .map(Node::bounding_box)
                .unwrap_or_else(BoundingBox::empty),
            NodeKind::Transform { op, children } => merged(children).transformed(&op.to_matrix()),
        }
    }
}

fn merged(children: &[Node]) -> BoundingBox {
    let mut bbox = BoundingBox::empty();
    for child in children {
        bbox.merge(&child.bounding_box());
    }
    bbox
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solid::Vec3;

    #[test]
    fn test_bounding_box() {
        let mut bbox = BoundingBox::empty();
        assert!(bbox.is_empty());
        bbox.expand_to_include(&Point3::new(1.0, 2.0, 3.0));
        bbox.expand_to_include(&Point3::new(-1.0, -2.0, -3.0));

        assert_eq!(bbox.min, Point3::new(-1.0, -2.0, -3.0));
        assert_eq!(bbox.max, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(bbox.center(), Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_translated_cylinder_extent() {
        let node = Node::cylinder(5.0, 2.0).translate(Vec3::new(0.0, 0.0, 3.0));
        let expected = BoundingBox::new(Point3::new(-2.0, -2.0, 3.0), Point3::new(2.0, 2.0, 8.0));
        assert!(node.bounding_box().approx_eq(&expected, 1e-9));
    }

    #[test]
    fn test_difference_uses_first_child() {
        let node = Node::difference(vec![
            Node::cube(Vec3::new(4.0, 4.0, 2.0), true),
            Node::cylinder(10.0, 10.0),
        ]);
        assert!((node.bounding_box().size() - Vec3::new(4.0, 4.0, 2.0)).norm() < 1e-12);
    }
}
