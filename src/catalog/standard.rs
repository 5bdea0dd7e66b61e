// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Canned reference data

use super::{
    BoltHeadSpec, ClearanceSpec, HeadStyle, NutSpec, NutStyle, Registries, Tolerance,
    TolerancePreset,
};
use crate::error::Result;

/// Button head socket cap screws, ISO 7380: size, dk min/max, k min/max.
/// Source: fastenal.com M.BHSCS.73801.10.9.BO.00
const BUTTON_HEADS: &[[f64; 5]] = &[
    [2.5, 4.45, 4.75, 1.15, 1.37],
    [2.0, 3.50, 3.80, 0.88, 1.10],
    [3.0, 5.40, 5.70, 1.40, 1.65],
    [4.0, 7.24, 7.60, 1.95, 2.20],
    [5.0, 9.14, 9.50, 2.50, 2.75],
    [6.0, 10.07, 10.50, 3.00, 3.30],
    [8.0, 13.57, 14.00, 4.10, 4.40],
    [10.0, 17.07, 17.50, 5.20, 5.50],
    [12.0, 20.48, 21.00, 6.24, 6.60],
    [16.0, 27.48, 28.00, 8.44, 8.80],
];

/// Pan head (Phillips), DIN 7985
const PAN_HEADS: &[[f64; 5]] = &[
    [1.6, 2.9, 3.2, 1.18, 1.42],
    [2.0, 3.7, 4.0, 1.48, 1.72],
    [2.5, 4.7, 5.0, 1.88, 2.12],
    [3.0, 5.7, 6.0, 2.28, 2.52],
    [3.5, 6.64, 7.0, 2.58, 2.82],
    [4.0, 7.64, 8.0, 2.95, 3.25],
    [5.0, 9.64, 10.0, 3.65, 3.95],
    [6.0, 11.57, 12.0, 4.45, 4.75],
    [8.0, 15.57, 16.0, 5.85, 6.15],
    [10.0, 19.48, 20.0, 7.32, 7.68],
];

/// Socket head cap screws, DIN 912
const SOCKET_HEADS: &[[f64; 5]] = &[
    [1.6, 2.86, 3.14, 1.46, 1.60],
    [2.0, 3.62, 3.98, 1.86, 2.00],
    [2.5, 4.32, 4.68, 2.36, 2.5],
    [3.0, 5.32, 5.68, 2.36, 2.5],
    [4.0, 6.78, 7.22, 3.82, 4.0],
    [5.0, 8.28, 8.72, 4.82, 5.0],
    [6.0, 9.78, 10.22, 5.7, 6.0],
    [8.0, 12.73, 13.27, 7.64, 8.0],
    [10.0, 15.73, 16.27, 9.64, 10.0],
    [12.0, 17.73, 18.27, 11.57, 12.0],
    [14.0, 20.67, 21.33, 13.45, 14.0],
    [16.0, 23.67, 24.33, 15.57, 16.0],
];

/// Plain hex nuts, DIN 934: size, w max, w min, k max, k min.
/// Source: fastenal.com M.934.8.P
const PLAIN_NUTS: &[[f64; 5]] = &[
    [1.0, 2.5, 2.4, 0.8, 0.55],
    [1.2, 3.0, 2.9, 1.0, 0.75],
    [1.6, 3.2, 3.02, 1.3, 1.05],
    [2.0, 4.0, 3.82, 1.6, 1.35],
    [2.5, 5.0, 4.82, 2.0, 1.75],
    [3.0, 5.5, 5.32, 2.4, 2.15],
    [4.0, 7.0, 6.78, 3.2, 2.9],
    [5.0, 8.0, 7.78, 4.0, 3.7],
    [6.0, 10.0, 9.78, 5.0, 4.7],
    [7.0, 11.0, 10.73, 5.5, 5.2],
    [8.0, 13.0, 12.73, 6.5, 6.14],
    [10.0, 17.0, 16.73, 8.0, 7.64],
    [12.0, 19.0, 18.67, 10.0, 9.64],
    [14.0, 22.0, 21.67, 11.0, 10.3],
    [16.0, 24.0, 23.67, 13.0, 12.3],
    [18.0, 27.0, 26.16, 15.0, 14.3],
    [20.0, 30.0, 29.16, 16.0, 14.9],
    [22.0, 32.0, 31.0, 18.0, 16.9],
    [24.0, 36.0, 35.0, 19.0, 17.7],
    [27.0, 40.0, 41.0, 22.0, 20.7],
    [30.0, 46.0, 45.0, 24.0, 22.7],
    [33.0, 50.0, 49.0, 26.0, 24.7],
    [36.0, 55.0, 53.8, 29.0, 27.4],
    [39.0, 60.0, 58.8, 31.0, 29.4],
    [42.0, 65.0, 63.1, 34.0, 32.4],
    [45.0, 70.0, 68.1, 36.0, 34.4],
    [48.0, 75.0, 73.1, 38.0, 36.4],
    [56.0, 85.0, 82.8, 45.0, 43.4],
    [64.0, 95.0, 92.8, 51.0, 49.1],
    [80.0, 115.0, 112.8, 64.0, 62.1],
];

/// Nuts from the Vigrue S02 M3/M4/M5 assortment: size, w min/max, k min/max.
/// Ranges are caliper readings widened by a little on both sides.
const VIGRUE_NUTS: &[[f64; 5]] = &[
    [5.0, 7.75, 8.0, 4.5, 4.75],
    [4.0, 6.75, 7.0, 3.0, 3.25],
    [3.0, 5.4, 5.5, 2.3, 2.4],
];

/// Metric coarse threads: size, pitch, clearance, tap.
/// Source: engineeringtoolbox.com metric-threads
const METRIC_COARSE: &[[f64; 4]] = &[
    [1.6, 0.35, 1.8, 1.25],
    [2.0, 0.40, 2.4, 1.60],
    [2.5, 0.45, 2.90, 2.00],
    [3.0, 0.50, 3.40, 2.50],
    [3.5, 0.60, 3.90, 2.90],
    [4.0, 0.70, 4.50, 3.30],
    [5.0, 0.80, 5.50, 4.20],
    [6.0, 1.00, 6.60, 5.00],
    [8.0, 1.25, 9.00, 6.80],
    [10.0, 1.50, 12.00, 8.50],
    [12.0, 1.75, 14.00, 10.20],
    [14.0, 2.00, 16.00, 12.00],
    [16.0, 2.00, 18.00, 14.00],
    [20.0, 2.50, 22.00, 17.50],
    [22.0, 2.50, 25.00, 19.50],
    [24.0, 3.00, 27.00, 21.00],
    [27.0, 3.00, 30.00, 24.00],
    [30.0, 3.50, 33.00, 26.50],
    [36.0, 4.00, 40.00, 32.00],
    [42.0, 4.50, 46.00, 37.50],
    [48.0, 5.00, 53.00, 43.00],
    [56.0, 5.50, 62.00, 50.50],
    [64.0, 6.00, 70.00, 58.00],
    [68.0, 6.00, 74.00, 62.00],
];

pub(super) fn load(registries: &mut Registries) -> Result<()> {
    let heads = [
        (HeadStyle::Button, BUTTON_HEADS),
        (HeadStyle::Pan, PAN_HEADS),
        (HeadStyle::Socket, SOCKET_HEADS),
    ];
    for (style, rows) in heads {
        for &[size, dk_min, dk_max, k_min, k_max] in rows {
            registries.bolt_heads.register(BoltHeadSpec::metric(
                size,
                style.clone(),
                (dk_min, dk_max),
                (k_min, k_max),
            ))?;
        }
    }

    for &[size, w_max, w_min, k_max, k_min] in PLAIN_NUTS {
        registries
            .nuts
            .register(NutSpec::metric(size, (w_min, w_max), (k_min, k_max)))?;
    }
    for &[size, w_min, w_max, k_min, k_max] in VIGRUE_NUTS {
        registries.nuts.register(NutSpec::new(
            super::Designation::metric(size),
            NutStyle::Vigrue,
            size,
            (w_min, w_max),
            (k_min, k_max),
        ))?;
    }

    for &[size, pitch, clearance, tap] in METRIC_COARSE {
        registries
            .clearances
            .register(ClearanceSpec::metric(size, pitch, clearance, tap))?;
    }

    registries
        .tolerances
        .register(TolerancePreset::new(TolerancePreset::PERFECT, Tolerance::PERFECT))?;
    registries
        .tolerances
        .register(TolerancePreset::new(TolerancePreset::PRUSA_15, Tolerance::PRUSA_15))?;

    tracing::debug!(
        bolt_heads = registries.bolt_heads.len(),
        nuts = registries.nuts.len(),
        clearances = registries.clearances.len(),
        "loaded standard fastener catalog"
    );
    Ok(())
}
