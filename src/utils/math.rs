// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use std::f64::consts::PI;

/// cos(30°), the ratio between a hexagon's inscribed and circumscribed radius
pub const COS_30: f64 = 0.866_025_403_784_438_7;

/// Decimal places kept when millimetres are written as text
const MM_DECIMALS: i32 = 6;

/// Check if two floats are approximately equal
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Convert degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Format a length in millimetres as a plain decimal literal.
///
/// Values are rounded to six places and trailing zeros are dropped, so
/// `2.8250000000000002` becomes `2.825` and `6.0` becomes `6`.
pub fn format_mm(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scale = 10f64.powi(MM_DECIMALS);
    let rounded = (value * scale).round() / scale;
    let mut text = format!("{:.*}", MM_DECIMALS as usize, rounded);
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}
