// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::catalog::{Designation, Registries};
use crate::error::Result;
use crate::fastener::Fastener;
use crate::utils::format_mm;
use colored::*;

/// One labelled value in a report section
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
}

impl Row {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    fn mm(label: &'static str, value: f64) -> Self {
        Self::new(label, format!("{} mm", format_mm(value)))
    }
}

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Selected parts and tolerance
    pub fn selection_rows(fastener: &Fastener) -> Vec<Row> {
        let head = fastener.head_spec();
        let tolerance = fastener.tolerance();
        let nut = match fastener.nut_spec() {
            Some(nut) => nut.nut_style().name().to_string(),
            None => "none".to_string(),
        };
        vec![
            Row::new("Bolt", head.designation.as_str()),
            Row::new("Head", head.head_style.name()),
            Row::new("Nut", nut),
            Row::new(
                "Tolerance",
                format!(
                    "diameter {} / height {}",
                    format_mm(tolerance.diameter),
                    format_mm(tolerance.height)
                ),
            ),
        ]
    }

    /// Derived hole dimensions; fails without clearance data
    pub fn dimension_rows(fastener: &Fastener) -> Result<Vec<Row>> {
        let mut rows = vec![
            Row::mm("Bolt hole radius", fastener.bolt_hole_radius()?),
            Row::mm("Radius clearance", fastener.radius_clearance()?),
            Row::mm("Head radius", fastener.bolt_head_radius()?),
            Row::mm("Head height", fastener.head_height()),
        ];
        if fastener.nut_spec().is_some() {
            rows.push(Row::mm("Nut radius", fastener.nut_radius()?));
            rows.push(Row::mm("Nut width", fastener.nut_width()?));
            rows.push(Row::mm("Nut height", fastener.nut_height()));
        }
        rows.push(Row::mm("Max radius", fastener.max_radius()?));
        Ok(rows)
    }

    /// Drilling profile
    pub fn drilling_rows(fastener: &Fastener) -> Vec<Row> {
        let mut rows = vec![
            Row::mm("Drill depth", fastener.drill_depth()),
            Row::mm("Head sink", fastener.head_sink()),
            Row::mm("Nut sink", fastener.nut_sink()),
            Row::mm("Shaft bore", fastener.bore_length()),
        ];
        if let Some(slot) = fastener.slot_placement() {
            rows.push(Row::new(
                "Nut slot",
                format!("z {} mm, reach {} mm", format_mm(slot.z), format_mm(slot.l)),
            ));
        }
        rows
    }

    /// Report a fastener's configuration and derived dimensions
    pub fn report_fastener(fastener: &Fastener) {
        let head = fastener.head_spec();
        println!("\n{}", "━".repeat(60).bright_black());
        println!(
            "{} {}",
            "Fastener:".bold(),
            format!("{} {}", head.designation, head.head_style).cyan()
        );
        println!("{}", "━".repeat(60).bright_black());

        Self::print_rows(&Self::selection_rows(fastener));

        println!("\n{}", "Dimensions:".bold());
        match Self::dimension_rows(fastener) {
            Ok(rows) => Self::print_rows(&rows),
            Err(err) => Self::report_warning(&err.to_string()),
        }

        println!("\n{}", "Drilling:".bold());
        let bore = fastener.bore_length();
        Self::print_rows(&Self::drilling_rows(fastener));
        if bore <= 0.0 {
            Self::report_warning("sinks leave no room for the shaft bore");
        }

        println!("{}", "━".repeat(60).bright_black());
    }

    /// Report the designations in the catalog
    pub fn report_designations(designations: &[Designation]) {
        println!("{}", "Designations:".bold());
        let names: Vec<&str> = designations.iter().map(|d| d.as_str()).collect();
        println!("  {}", names.join(", ").cyan());
    }

    /// One line per registered tolerance preset, in registration order
    pub fn tolerance_lines(registries: &Registries) -> Vec<String> {
        registries
            .tolerances
            .names()
            .into_iter()
            .filter_map(|name| {
                let preset = registries.tolerances.lookup(&name)?;
                Some(format!(
                    "{}: diameter {} / height {}",
                    name,
                    format_mm(preset.tolerance.diameter),
                    format_mm(preset.tolerance.height)
                ))
            })
            .collect()
    }

    /// Report the tolerance presets in the catalog
    pub fn report_tolerances(registries: &Registries) {
        println!("{}", "Tolerances:".bold());
        for line in Self::tolerance_lines(registries) {
            println!("  {}", line.cyan());
        }
    }

    /// Report the head and nut styles available for one designation
    pub fn report_styles(registries: &Registries, designation: &str) {
        let heads: Vec<String> = registries
            .bolt_heads
            .list_styles(designation)
            .iter()
            .map(|s| s.to_string())
            .collect();
        let nuts: Vec<String> = registries
            .nuts
            .list_styles(designation)
            .iter()
            .map(|s| s.to_string())
            .collect();

        println!("{} {}", "Designation:".bold(), designation.cyan());
        println!("  {} {}", "Heads:".bright_black(), Self::or_none(&heads));
        println!("  {} {}", "Nuts:".bright_black(), Self::or_none(&nuts));
        match registries.clearances.lookup(designation) {
            Some(spec) => println!(
                "  {} {} mm (tap {} mm, pitch {} mm)",
                "Clearance:".bright_black(),
                format_mm(spec.clearance_diameter).cyan(),
                format_mm(spec.tap_diameter),
                format_mm(spec.thread_pitch)
            ),
            None => println!("  {} {}", "Clearance:".bright_black(), "none".yellow()),
        }
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn print_rows(rows: &[Row]) {
        for row in rows {
            println!(
                "  {} {}",
                format!("{:<18}", format!("{}:", row.label)).bright_black(),
                row.value.cyan()
            );
        }
    }

    fn or_none(items: &[String]) -> String {
        if items.is_empty() {
            "none".yellow().to_string()
        } else {
            items.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BoltHeadSpec, HeadStyle, Tolerance, TolerancePreset};
    use std::sync::Arc;

    fn fastener() -> Fastener {
        let mut f = Fastener::new(Arc::new(Registries::standard().unwrap())).unwrap();
        f.set_tolerance(Tolerance::PRUSA_15);
        f
    }

    #[test]
    fn test_selection_rows() {
        let rows = Reporter::selection_rows(&fastener());
        assert_eq!(rows[0], Row::new("Bolt", "M5"));
        assert_eq!(rows[2], Row::new("Nut", "Plain"));
        assert_eq!(rows[3].value, "diameter 0.15 / height 0.15");
    }

    #[test]
    fn test_dimension_rows() {
        let rows = Reporter::dimension_rows(&fastener()).unwrap();
        assert_eq!(rows[0], Row::new("Bolt hole radius", "2.825 mm"));
        assert_eq!(rows[2], Row::new("Head radius", "5.075 mm"));
        assert_eq!(rows.len(), 8);
    }

    #[test]
    fn test_dimension_rows_without_clearance() {
        let mut registries = Registries::standard().unwrap();
        registries
            .bolt_heads
            .register(BoltHeadSpec::estimated(9.0, HeadStyle::Socket))
            .unwrap();
        let mut f = Fastener::new(Arc::new(registries)).unwrap();
        f.set_head("M9", &HeadStyle::Socket).unwrap();
        assert!(Reporter::dimension_rows(&f).unwrap_err().is_not_found());
    }

    #[test]
    fn test_tolerance_lines() {
        let mut registries = Registries::standard().unwrap();
        registries
            .tolerances
            .register(TolerancePreset::new("laser", Tolerance::new(0.1, 0.0)))
            .unwrap();
        let lines = Reporter::tolerance_lines(&registries);
        assert!(lines.contains(&"prusa_15: diameter 0.15 / height 0.15".to_string()));
        assert_eq!(lines.last().unwrap(), "laser: diameter 0.1 / height 0");
        assert_eq!(lines.len(), registries.tolerances.len());
    }

    #[test]
    fn test_drilling_rows_include_slot() {
        let mut f = fastener();
        assert_eq!(Reporter::drilling_rows(&f).len(), 4);
        f.set_nut_slot(1.0, 6.0);
        let rows = Reporter::drilling_rows(&f);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].label, "Nut slot");
    }
}
