// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! WASM bindings using wasm-bindgen
//!
//! The browser UI polls getters after pushing a change through a setter.

use crate::emit::{FastenerDocument, JscadRenderer};
use crate::{Fastener, HeadStyle, NutStyle, Registries, Tolerance};
use std::sync::Arc;
use wasm_bindgen::prelude::*;

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

#[wasm_bindgen]
pub struct WasmFastener {
    inner: Fastener,
}

#[wasm_bindgen]
impl WasmFastener {
    /// M5 button head over the standard catalog
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmFastener, JsValue> {
        let registries = Registries::standard().map_err(|e| js_error("Catalog error", e))?;
        let inner = Fastener::new(Arc::new(registries)).map_err(|e| js_error("Fastener error", e))?;
        Ok(WasmFastener { inner })
    }

    pub fn set_head(&mut self, designation: &str, head: &str) -> Result<(), JsValue> {
        self.inner
            .set_head(designation, &HeadStyle::from(head.to_string()))
            .map_err(|e| js_error("Head error", e))
    }

    /// Nut style name; an empty string removes the nut
    pub fn set_nut(&mut self, style: &str) -> Result<(), JsValue> {
        let style = (!style.is_empty()).then(|| NutStyle::from(style.to_string()));
        self.inner
            .set_nut_style(style.as_ref())
            .map_err(|e| js_error("Nut error", e))
    }

    pub fn set_tolerance(&mut self, diameter: f64, height: f64) {
        self.inner.set_tolerance(Tolerance::new(diameter, height));
    }

    pub fn set_tolerance_preset(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner
            .set_tolerance_preset(name)
            .map_err(|e| js_error("Tolerance error", e))
    }

    pub fn set_drill_depth(&mut self, depth: f64) {
        self.inner.set_drill_depth(depth);
    }

    pub fn set_head_sink(&mut self, depth: f64) {
        self.inner.set_head_sink(depth);
    }

    pub fn set_nut_sink(&mut self, depth: f64) {
        self.inner.set_nut_sink(depth);
    }

    pub fn set_nut_slot(&mut self, below_head: f64, extension: f64) {
        self.inner.set_nut_slot(below_head, extension);
    }

    pub fn make_flush(&mut self, shaft_length: f64) {
        self.inner.make_flush(shaft_length);
    }

    /// Head, nut and clearance specs as JSON
    pub fn specs_json(&self) -> Result<String, JsValue> {
        let specs = serde_json::json!({
            "head": &**self.inner.head_spec(),
            "nut": self.inner.nut_spec().map(|n| &**n),
            "clearance": self.inner.clearance_spec().ok().map(|c| &**c),
        });
        serde_json::to_string(&specs).map_err(|e| js_error("JSON serialization error", e))
    }

    pub fn bolt_hole_radius(&self) -> Result<f64, JsValue> {
        self.inner
            .bolt_hole_radius()
            .map_err(|e| js_error("Clearance error", e))
    }

    pub fn bolt_head_radius(&self) -> Result<f64, JsValue> {
        self.inner
            .bolt_head_radius()
            .map_err(|e| js_error("Clearance error", e))
    }

    pub fn nut_radius(&self) -> Result<f64, JsValue> {
        self.inner.nut_radius().map_err(|e| js_error("Clearance error", e))
    }

    pub fn head_height(&self) -> f64 {
        self.inner.head_height()
    }

    pub fn nut_height(&self) -> f64 {
        self.inner.nut_height()
    }

    pub fn bore_length(&self) -> f64 {
        self.inner.bore_length()
    }

    /// Fastener document as JSON
    pub fn document_json(&self) -> Result<String, JsValue> {
        let doc = FastenerDocument::from_fastener(&self.inner)
            .map_err(|e| js_error("Document error", e))?;
        serde_json::to_string_pretty(&doc).map_err(|e| js_error("JSON serialization error", e))
    }

    /// JSCAD block for this fastener, optionally with the shared helpers
    pub fn jscad(&self, shared: bool) -> Result<String, JsValue> {
        let doc = FastenerDocument::from_fastener(&self.inner)
            .map_err(|e| js_error("Document error", e))?;
        let renderer = JscadRenderer::new();
        Ok(if shared {
            renderer.render_file([&doc])
        } else {
            renderer.render(&doc)
        })
    }

    /// Hole solid as OpenSCAD source
    pub fn hole_scad(&self) -> Result<String, JsValue> {
        let hole = self.inner.hole().map_err(|e| js_error("Hole error", e))?;
        Ok(hole.to_scad())
    }
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
