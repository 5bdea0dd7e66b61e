// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! End-to-end fastener configuration scenarios

use approx::assert_relative_eq;
use holetool::{
    BoltHeadSpec, Fastener, HeadStyle, HoleError, NodeKind, NutStyle, Registries, SpecKind,
    Tolerance,
};
use std::sync::Arc;

fn registries() -> Arc<Registries> {
    Arc::new(Registries::standard().unwrap())
}

#[test]
fn test_m5_button_prusa() {
    let mut fastener = Fastener::create(registries(), "M5", &HeadStyle::Button, None).unwrap();
    fastener.set_tolerance_preset("prusa_15").unwrap();
    assert_eq!(fastener.tolerance(), Tolerance::PRUSA_15);
    assert_relative_eq!(fastener.bolt_hole_radius().unwrap(), 2.825, epsilon = 1e-9);
    assert_relative_eq!(fastener.bolt_head_radius().unwrap(), 5.075, epsilon = 1e-9);
}

#[test]
fn test_registries_are_shared() {
    let shared = registries();
    let a = Fastener::create(Arc::clone(&shared), "M3", &HeadStyle::Socket, None).unwrap();
    let b = Fastener::create(Arc::clone(&shared), "M4", &HeadStyle::Pan, Some(&NutStyle::Vigrue))
        .unwrap();
    assert!(Arc::ptr_eq(a.registries(), b.registries()));
    assert_eq!(b.nut_spec().unwrap().nut_style(), &NutStyle::Vigrue);
}

#[test]
fn test_depth_and_sinks_round_trip() {
    let mut fastener = Fastener::create(registries(), "M4", &HeadStyle::Socket, None).unwrap();
    fastener.set_drill_depth(18.0);
    fastener.set_head_sink(4.0);
    fastener.set_nut_sink(3.2);
    assert_relative_eq!(
        fastener.bore_length() + fastener.head_sink() + fastener.nut_sink(),
        fastener.drill_depth(),
        epsilon = 1e-12
    );

    fastener.set_drill_depth(25.0);
    assert_relative_eq!(fastener.bore_length(), 25.0 - 4.0 - 3.2, epsilon = 1e-12);
}

#[test]
fn test_flush_nut_and_head() {
    let mut fastener = Fastener::create(registries(), "M3", &HeadStyle::Button, None).unwrap();
    fastener.set_head_flush();
    fastener.set_nut_flush();
    assert_relative_eq!(fastener.head_sink(), 1.65);
    assert_relative_eq!(fastener.nut_sink(), 2.4);
    assert_relative_eq!(fastener.bore_length(), 10.0 - 1.65 - 2.4, epsilon = 1e-12);
}

#[test]
fn test_unknown_nut_style() {
    let mut fastener = Fastener::create(registries(), "M6", &HeadStyle::Socket, None).unwrap();
    let err = fastener
        .set_nut_style(Some(&NutStyle::Vigrue))
        .unwrap_err();
    assert_eq!(err, HoleError::not_found(SpecKind::Nut, "M6 Vigrue"));
    assert_eq!(fastener.nut_spec().unwrap().nut_style(), &NutStyle::Plain);

    fastener.set_nut_style(None).unwrap();
    assert!(fastener.nut_spec().is_none());
}

#[test]
fn test_unknown_tolerance_preset() {
    let mut fastener = Fastener::new(registries()).unwrap();
    let err = fastener.set_tolerance_preset("sloppy").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "tolerance not found: sloppy");
}

#[test]
fn test_missing_clearance_propagates() {
    let mut catalog = Registries::standard().unwrap();
    catalog
        .bolt_heads
        .register(BoltHeadSpec::estimated(9.0, HeadStyle::Pan))
        .unwrap();
    let mut fastener = Fastener::new(Arc::new(catalog)).unwrap();
    fastener.set_head("M9", &HeadStyle::Pan).unwrap();

    assert!(fastener.clearance_spec().is_err());
    for result in [
        fastener.bolt_hole_radius(),
        fastener.radius_clearance(),
        fastener.bolt_head_radius(),
        fastener.max_radius(),
    ] {
        assert_eq!(result.unwrap_err(), HoleError::not_found(SpecKind::Clearance, "M9"));
    }
    assert!(fastener.hole().is_err());
}

#[test]
fn test_over_sunk_configuration() {
    let mut fastener = Fastener::new(registries()).unwrap();
    fastener.set_drill_depth(5.0);
    fastener.set_head_sink(3.0);
    fastener.set_nut_sink(4.0);
    assert_eq!(fastener.bore_length(), -2.0);

    let hole = fastener.hole().unwrap();
    assert!(matches!(
        hole.check(),
        Err(HoleError::InvalidGeometry(_))
    ));
}

#[test]
fn test_hole_stack() {
    let mut fastener = Fastener::create(registries(), "M5", &HeadStyle::Socket, None).unwrap();
    fastener.set_drill_depth(20.0);
    fastener.set_head_sink(5.0);
    fastener.set_nut_sink(4.0);

    let hole = fastener.hole().unwrap();
    let NodeKind::Union(parts) = &hole.kind else {
        panic!("expected union, got {:?}", hole.kind);
    };
    let ids: Vec<_> = parts.iter().map(|p| p.id.as_deref().unwrap_or("")).collect();
    assert_eq!(ids, ["nut", "bore", "head"]);

    let bbox = hole.bounding_box();
    assert_relative_eq!(bbox.min.z, 0.0);
    assert_relative_eq!(bbox.max.z, 20.0, epsilon = 1e-9);
    assert_relative_eq!(bbox.max.x, fastener.max_radius().unwrap(), epsilon = 1e-9);
}
