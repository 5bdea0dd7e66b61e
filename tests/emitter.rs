// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Document generation and JSCAD text output

use holetool::emit::{DrillOverrides, FastenerDocument, JscadRenderer, DOCUMENT_VERSION};
use holetool::{build_hole, Fastener, HeadStyle, NutStyle, Registries, Sinks, Tolerance};
use std::sync::Arc;

fn document(designation: &str, head: HeadStyle, nut: Option<NutStyle>) -> FastenerDocument {
    let registries = Arc::new(Registries::standard().unwrap());
    let mut fastener = Fastener::create(registries, designation, &head, nut.as_ref()).unwrap();
    fastener.set_tolerance(Tolerance::PRUSA_15);
    FastenerDocument::from_fastener(&fastener).unwrap()
}

#[test]
fn test_generator_depth_override() {
    let doc = document("M5", HeadStyle::Button, Some(NutStyle::Vigrue));
    let params = doc.generate(&DrillOverrides::depth(20.0));
    assert_eq!(params.h, 20.0);
    assert_eq!(params.bolt, doc.bolt_hole);
    assert_eq!(params.head, doc.head_hole);
    assert_eq!(params.nut, doc.nut_hole);

    // The generated parameters feed the builder directly
    let hole = build_hole(&params);
    assert!(hole.check().is_ok());
}

#[test]
fn test_sink_override_only_touches_sink() {
    let doc = document("M3", HeadStyle::Socket, None);
    let overrides = DrillOverrides {
        sink: Some(Sinks::flush()),
        ..DrillOverrides::default()
    };
    let params = doc.generate(&overrides);
    assert_eq!(params.h, doc.defaults.h);
    assert_eq!(params.sink, Sinks::flush());
    assert_eq!(params.slot, doc.defaults.slot);
}

#[test]
fn test_json_document_shape() {
    let doc = document("M2.5", HeadStyle::Pan, None);
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["version"], DOCUMENT_VERSION);
    assert_eq!(value["designation"], "M2.5");
    assert_eq!(value["bolt_id"], "m2_5");
    assert_eq!(value["head_id"], "pan");
    assert_eq!(value["nut_hole"]["sides"], 6);
    assert_eq!(value["override_keys"], serde_json::json!(["h", "sink", "slot"]));
    assert_eq!(value["defaults"]["h"], 10.0);
}

#[test]
fn test_text_grammar() {
    let doc = document("M2.5", HeadStyle::Pan, None);
    let text = JscadRenderer::new().render(&doc);

    let consts: Vec<&str> = text.lines().filter(|l| l.starts_with("const ")).collect();
    assert_eq!(consts.len(), 3);
    assert!(consts[0].starts_with("const m2_5_bolt_hole = { \"r\": "));
    assert!(consts[1].starts_with("const m2_5_pan_hole = { \"r\": "));
    assert!(consts[2].starts_with("const m2_5_nut_hole = { \"r\": "));
    assert!(consts[2].ends_with(", \"sides\": 6 };"));
    assert!(text.contains("function m2_5_pan(drillInfo) {"));

    // Every literal is a plain decimal
    for line in &consts {
        assert!(!line.contains("e-"));
        assert!(!line.contains("0000000"));
    }
}

#[test]
fn test_preamble_is_standalone() {
    let renderer = JscadRenderer::new();
    let preamble = renderer.preamble();
    assert!(preamble.contains("const DRILL_INFO_KEYS = [ \"h\", \"sink\", \"slot\" ];"));
    for helper in [
        "regular_polygon_points",
        "regular_prism",
        "hex_slot",
        "copy_params",
        "hole_for_bolt",
        "bolt_hole_test",
        "bolt_hole_3d_test",
    ] {
        assert!(
            preamble.contains(&format!("function {}(", helper)),
            "missing {}",
            helper
        );
    }

    // Test prints recess both parts with the flush marker
    let test_print = &preamble[preamble.find("function flush_params(").unwrap()..];
    assert!(test_print.contains("\"sink\": { \"head\": \"flush\", \"nut\": \"flush\" }"));
}

#[test]
fn test_json_keeps_derived_radii_exact() {
    // Nut radii come from dividing by cos 30°, so they use every bit of the f64
    for designation in ["M3", "M5", "M8"] {
        let doc = document(designation, HeadStyle::Socket, Some(NutStyle::Plain));
        let json = serde_json::to_string(&doc).unwrap();
        let back: FastenerDocument = serde_json::from_str(&json).unwrap();
        let (nut, back_nut) = (doc.nut_hole.unwrap(), back.nut_hole.unwrap());
        assert_eq!(back_nut.r.to_bits(), nut.r.to_bits(), "{}", designation);
        assert_eq!(back_nut.w.to_bits(), nut.w.to_bits(), "{}", designation);
        assert_eq!(back, doc);
    }
}
