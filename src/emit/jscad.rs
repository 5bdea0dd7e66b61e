// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! OpenJSCAD text output
//!
//! A file is the shared [`JscadRenderer::preamble`] followed by one block
//! per fastener. Each block declares the hole constants and a generator
//! that merges caller overrides over the fastener's drilling defaults.

use super::document::FastenerDocument;
use crate::hole::{Sink, Sinks, SlotPlacement};
use crate::utils::format_mm;
use std::fmt;

const PREAMBLE: &str = include_str!("preamble.jscad");

#[derive(Debug, Default, Clone, Copy)]
pub struct JscadRenderer;

impl JscadRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Helper routines shared by every fastener block; emit once per file
    pub fn preamble(&self) -> &'static str {
        PREAMBLE
    }

    /// Constants and generator for one fastener
    pub fn render(&self, doc: &FastenerDocument) -> String {
        FastenerBlock(doc).to_string()
    }

    /// Write one fastener block into any text sink
    pub fn write_block<W: fmt::Write>(&self, out: &mut W, doc: &FastenerDocument) -> fmt::Result {
        write!(out, "{}", FastenerBlock(doc))
    }

    /// Preamble plus one block per document
    pub fn render_file<'a>(&self, docs: impl IntoIterator<Item = &'a FastenerDocument>) -> String {
        let mut out = String::from(PREAMBLE);
        for doc in docs {
            out.push('\n');
            out.push_str(&self.render(doc));
        }
        out
    }
}

/// Constants and generator text for one document
struct FastenerBlock<'a>(&'a FastenerDocument);

impl fmt::Display for FastenerBlock<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.0;
        let bolt = &doc.bolt_id;
        let name = doc.generator_name();

        writeln!(out, "//\n// {} {} info\n//", doc.designation, doc.head_style)?;
        writeln!(
            out,
            "const {}_bolt_hole = {{ \"r\": {} }};",
            bolt,
            format_mm(doc.bolt_hole.r)
        )?;
        writeln!(
            out,
            "const {}_hole = {{ \"r\": {}, \"h\": {} }};",
            name,
            format_mm(doc.head_hole.r),
            format_mm(doc.head_hole.h)
        )?;
        if let Some(nut) = &doc.nut_hole {
            writeln!(
                out,
                "const {}_nut_hole = {{ \"r\": {}, \"h\": {}, \"w\": {}, \"sides\": {} }};",
                bolt,
                format_mm(nut.r),
                format_mm(nut.h),
                format_mm(nut.w),
                nut.sides
            )?;
        }

        let mut fields = vec![
            format!("\"h\": {}", format_mm(doc.defaults.h)),
            format!("\"sink\": {}", sinks(&doc.defaults.sink)),
        ];
        if let Some(slot) = &doc.defaults.slot {
            fields.push(format!("\"slot\": {}", slot_literal(slot)));
        }
        fields.push(format!("\"bolt\": {}_bolt_hole", bolt));
        fields.push(format!("\"head\": {}_hole", name));
        if doc.nut_hole.is_some() {
            fields.push(format!("\"nut\": {}_nut_hole", bolt));
        }

        writeln!(out, "function {}(drillInfo) {{", name)?;
        writeln!(out, "  let boltInfo = {{ {} }};", fields.join(", "))?;
        writeln!(out, "  return copy_params(boltInfo, drillInfo, DRILL_INFO_KEYS);")?;
        writeln!(out, "}}")
    }
}

fn sink_literal(sink: Sink) -> String {
    match sink {
        Sink::Depth(depth) => format_mm(depth),
        Sink::Flush => "\"flush\"".to_string(),
    }
}

fn sinks(sinks: &Sinks) -> String {
    format!(
        "{{ \"head\": {}, \"nut\": {} }}",
        sink_literal(sinks.head),
        sink_literal(sinks.nut)
    )
}

fn slot_literal(slot: &SlotPlacement) -> String {
    format!("{{ \"z\": {}, \"l\": {} }}", format_mm(slot.z), format_mm(slot.l))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{HeadStyle, Registries, Tolerance};
    use crate::fastener::Fastener;
    use std::sync::Arc;

    fn m5_button() -> Fastener {
        let registries = Arc::new(Registries::standard().unwrap());
        let mut fastener = Fastener::new(registries).unwrap();
        fastener.set_tolerance(Tolerance::PRUSA_15);
        fastener
    }

    #[test]
    fn test_render_m5_button() {
        let doc = FastenerDocument::from_fastener(&m5_button()).unwrap();
        let text = JscadRenderer::new().render(&doc);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(&lines[..3], &["//", "// M5 Button info", "//"]);
        assert_eq!(lines[3], "const m5_bolt_hole = { \"r\": 2.825 };");
        assert_eq!(lines[4], "const m5_button_hole = { \"r\": 5.075, \"h\": 2.9 };");
        assert_eq!(
            lines[5],
            "const m5_nut_hole = { \"r\": 4.943802, \"h\": 4.15, \"w\": 8.562917, \"sides\": 6 };"
        );
        assert_eq!(lines[6], "function m5_button(drillInfo) {");
        assert_eq!(
            lines[7],
            "  let boltInfo = { \"h\": 10, \"sink\": { \"head\": 0, \"nut\": 0 }, \
             \"bolt\": m5_bolt_hole, \"head\": m5_button_hole, \"nut\": m5_nut_hole };"
        );
        assert_eq!(lines[8], "  return copy_params(boltInfo, drillInfo, DRILL_INFO_KEYS);");
        assert_eq!(lines[9], "}");
    }

    #[test]
    fn test_nut_constant_omitted_without_nut() {
        let mut fastener = m5_button();
        fastener.set_head("M2.5", &HeadStyle::Socket).unwrap();
        fastener.set_nut(None);
        fastener.set_nut_slot(1.0, 5.0);
        let doc = FastenerDocument::from_fastener(&fastener).unwrap();
        let text = JscadRenderer::new().render(&doc);

        assert!(text.contains("const m2_5_socket_hole = "));
        assert!(!text.contains("_nut_hole"));
        assert!(!text.contains("\"slot\""));
    }

    #[test]
    fn test_render_slot_and_flush() {
        let mut fastener = m5_button();
        fastener.make_flush(16.0);
        fastener.set_nut_slot(2.0, 12.0);
        let mut doc = FastenerDocument::from_fastener(&fastener).unwrap();
        doc.defaults.sink.head = Sink::Flush;
        let text = JscadRenderer::new().render(&doc);

        assert!(text.contains("\"sink\": { \"head\": \"flush\", \"nut\": 4.15 }"));
        assert!(text.contains("\"slot\": { \"z\": "));
        assert!(text.contains(", \"l\": 12 }"));
    }

    #[test]
    fn test_file_has_one_preamble() {
        let renderer = JscadRenderer::new();
        let doc = FastenerDocument::from_fastener(&m5_button()).unwrap();
        let text = renderer.render_file([&doc, &doc]);
        assert!(text.starts_with("// Constants related to making bolt holes"));
        assert_eq!(text.matches("function hole_for_bolt(").count(), 1);
        assert_eq!(text.matches("function m5_button(").count(), 2);
    }

    /// Refuses every write
    struct Closed;

    impl fmt::Write for Closed {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_write_block_reports_sink_errors() {
        let renderer = JscadRenderer::new();
        let doc = FastenerDocument::from_fastener(&m5_button()).unwrap();

        let mut text = String::new();
        renderer.write_block(&mut text, &doc).unwrap();
        assert_eq!(text, renderer.render(&doc));

        assert_eq!(renderer.write_block(&mut Closed, &doc), Err(fmt::Error));
    }
}
