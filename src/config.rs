// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Tool configuration
//!
//! A `holetool.toml` selects the default fastener, the printer tolerance and
//! the drilling profile, and may patch the standard catalog with extra or
//! corrected dimensions.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::{
    BoltHeadSpec, ClearanceSpec, Designation, HeadStyle, NutSpec, NutStyle, Registries, Tolerance,
    TolerancePreset,
};
use crate::error::{HoleError, SpecKind};
use crate::fastener::{Fastener, NutSlot, DEFAULT_DESIGNATION, DEFAULT_DRILL_DEPTH};

pub const CONFIG_FILE: &str = "holetool.toml";

/// Tool configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoleToolConfig {
    /// Fastener used when the command line does not pick one
    pub fastener: FastenerSelection,
    pub tolerance: ToleranceSetting,
    pub drilling: DrillingSettings,
    /// Extra or corrected bolt heads
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bolt_heads: Vec<BoltHeadPatch>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nuts: Vec<NutPatch>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clearances: Vec<ClearancePatch>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tolerances: Vec<TolerancePatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FastenerSelection {
    pub designation: String,
    pub head: HeadStyle,
    /// Nut style, or "none"
    pub nut: String,
}

impl Default for FastenerSelection {
    fn default() -> Self {
        Self {
            designation: DEFAULT_DESIGNATION.to_string(),
            head: HeadStyle::Button,
            nut: NutStyle::Plain.name().to_string(),
        }
    }
}

impl FastenerSelection {
    pub fn nut_style(&self) -> Option<NutStyle> {
        let nut = self.nut.trim();
        if nut.is_empty() || nut.eq_ignore_ascii_case("none") {
            None
        } else {
            nut.parse().ok()
        }
    }
}

/// Preset name, optionally adjusted per component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToleranceSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter_tolerance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_tolerance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillingSettings {
    pub depth: f64,
    /// Bolt length below the head; recesses head and nut when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flush: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<NutSlot>,
}

impl Default for DrillingSettings {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DRILL_DEPTH,
            flush: None,
            slot: None,
        }
    }
}

/// Bolt head entry; missing dimensions are estimated from the size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltHeadPatch {
    /// Defaults to "M" + size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    pub size: f64,
    pub head: HeadStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_diameter_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_diameter_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_height_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_height_max: Option<f64>,
}

impl BoltHeadPatch {
    pub fn to_spec(&self) -> BoltHeadSpec {
        let estimate = BoltHeadSpec::estimated(self.size, self.head.clone());
        let dk_max = self.head_diameter_max.unwrap_or(estimate.head_diameter_max);
        let k_max = self.head_height_max.unwrap_or(estimate.head_height_max);
        BoltHeadSpec::new(
            designation(&self.designation, self.size),
            self.head.clone(),
            self.size,
            (self.head_diameter_min.unwrap_or(dk_max), dk_max),
            (self.head_height_min.unwrap_or(k_max), k_max),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    pub size: f64,
    #[serde(default = "plain")]
    pub style: NutStyle,
    pub width_min: f64,
    pub width_max: f64,
    pub height_min: f64,
    pub height_max: f64,
}

fn plain() -> NutStyle {
    NutStyle::Plain
}

impl NutPatch {
    pub fn to_spec(&self) -> NutSpec {
        NutSpec::new(
            designation(&self.designation, self.size),
            self.style.clone(),
            self.size,
            (self.width_min, self.width_max),
            (self.height_min, self.height_max),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearancePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    pub size: f64,
    pub pitch: f64,
    pub clearance: f64,
    pub tap: f64,
}

impl ClearancePatch {
    pub fn to_spec(&self) -> ClearanceSpec {
        ClearanceSpec::new(
            designation(&self.designation, self.size),
            self.size,
            self.pitch,
            self.clearance,
            self.tap,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TolerancePatch {
    pub name: String,
    pub diameter: f64,
    pub height: f64,
}

fn designation(name: &Option<String>, size: f64) -> Designation {
    match name {
        Some(name) => Designation::new(name.as_str()),
        None => Designation::metric(size),
    }
}

impl HoleToolConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: HoleToolConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `holetool.toml` from the working directory (if present), then
    /// apply environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(bolt) = var("HOLETOOL_BOLT") {
            self.fastener.designation = bolt;
        }
        if let Some(head) = var("HOLETOOL_HEAD") {
            self.fastener.head = HeadStyle::from(head);
        }
        if let Some(nut) = var("HOLETOOL_NUT") {
            self.fastener.nut = nut;
        }
        if let Some(preset) = var("HOLETOOL_TOLERANCE") {
            self.tolerance.preset = Some(preset);
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Standard catalog with this configuration's patches applied, in order
    pub fn registries(&self) -> Result<Registries> {
        let mut registries = Registries::standard().context("Failed to load standard catalog")?;

        for patch in &self.bolt_heads {
            registries
                .bolt_heads
                .register(patch.to_spec())
                .context("Invalid [[bolt_heads]] entry")?;
        }
        for patch in &self.nuts {
            registries
                .nuts
                .register(patch.to_spec())
                .context("Invalid [[nuts]] entry")?;
        }
        for patch in &self.clearances {
            registries
                .clearances
                .register(patch.to_spec())
                .context("Invalid [[clearances]] entry")?;
        }
        for patch in &self.tolerances {
            registries
                .tolerances
                .register(TolerancePreset::new(
                    patch.name.as_str(),
                    Tolerance::new(patch.diameter, patch.height),
                ))
                .context("Invalid [[tolerances]] entry")?;
        }

        Ok(registries)
    }

    /// Resolve the tolerance: the named preset (exact fit when unnamed),
    /// with explicit components taking precedence
    pub fn tolerance(&self, registries: &Registries) -> Result<Tolerance> {
        let base = match &self.tolerance.preset {
            Some(name) => {
                registries
                    .tolerances
                    .lookup(name)
                    .ok_or_else(|| HoleError::not_found(SpecKind::Tolerance, name))?
                    .tolerance
            }
            None => Tolerance::PERFECT,
        };
        Ok(Tolerance::new(
            self.tolerance.diameter_tolerance.unwrap_or(base.diameter),
            self.tolerance.height_tolerance.unwrap_or(base.height),
        ))
    }

    /// Fastener configured from the selection, tolerance and drilling settings
    pub fn fastener(&self, registries: Arc<Registries>) -> Result<Fastener> {
        let tolerance = self.tolerance(&registries)?;
        let selection = &self.fastener;
        let nut = selection.nut_style();

        let mut fastener = Fastener::create(
            registries,
            &selection.designation,
            &selection.head,
            nut.as_ref(),
        )
        .with_context(|| {
            format!(
                "Failed to configure {} {} fastener",
                selection.designation, selection.head
            )
        })?;
        if nut.is_none() {
            fastener.set_nut(None);
        }

        fastener.set_tolerance(tolerance);
        fastener.set_drill_depth(self.drilling.depth);
        if let Some(length) = self.drilling.flush {
            fastener.make_flush(length);
        }
        if let Some(slot) = self.drilling.slot {
            fastener.set_nut_slot(slot.below_head, slot.extension);
        }
        Ok(fastener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[fastener]
designation = "M3"
head = "socket"
nut = "none"

[tolerance]
preset = "prusa_15"
height_tolerance = 0.2

[drilling]
depth = 14.0
slot = { below_head = 2.0, extension = 6.0 }

[[bolt_heads]]
size = 7.0
head = "Button"
head_diameter_max = 13.0

[[clearances]]
size = 7.0
pitch = 1.0
clearance = 7.6
tap = 6.0

[[tolerances]]
name = "loose"
diameter = 0.4
height = 0.3
"#;

    #[test]
    fn test_default_config() {
        let config = HoleToolConfig::default();
        assert_eq!(config.fastener.designation, "M5");
        assert_eq!(config.fastener.nut_style(), Some(NutStyle::Plain));
        assert_eq!(config.drilling.depth, 10.0);
        assert!(config.bolt_heads.is_empty());
    }

    #[test]
    fn test_parse_sample() {
        let config: HoleToolConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.fastener.head, HeadStyle::Socket);
        assert_eq!(config.fastener.nut_style(), None);
        assert_eq!(
            config.drilling.slot,
            Some(NutSlot {
                below_head: 2.0,
                extension: 6.0
            })
        );

        let registries = config.registries().unwrap();
        let m7 = registries.bolt_heads.lookup("M7", &HeadStyle::Button).unwrap();
        assert_eq!(m7.head_diameter_min, 13.0);
        assert!((m7.head_height_max - 3.85).abs() < 1e-12);
        assert!(registries.clearances.lookup("M7").is_some());
        assert!(registries.tolerances.lookup("loose").is_some());

        let tolerance = config.tolerance(&registries).unwrap();
        assert_eq!(tolerance, Tolerance::new(0.15, 0.2));
    }

    #[test]
    fn test_fastener_from_config() {
        let config: HoleToolConfig = toml::from_str(SAMPLE).unwrap();
        let registries = Arc::new(config.registries().unwrap());
        let fastener = config.fastener(registries).unwrap();
        assert_eq!(fastener.head_spec().designation.as_str(), "M3");
        assert!(fastener.nut_spec().is_none());
        assert_eq!(fastener.drill_depth(), 14.0);
        // Without a nut the slot has nowhere to go
        assert!(fastener.slot_placement().is_none());
    }

    #[test]
    fn test_patch_overwrites_catalog_entry() {
        let mut config = HoleToolConfig::default();
        config.clearances.push(ClearancePatch {
            designation: None,
            size: 5.0,
            pitch: 0.8,
            clearance: 5.8,
            tap: 4.2,
        });
        let registries = config.registries().unwrap();
        assert_eq!(registries.clearances.lookup("M5").unwrap().clearance_diameter, 5.8);
        assert_eq!(
            registries.clearances.len(),
            Registries::standard().unwrap().clearances.len()
        );
    }

    #[test]
    fn test_invalid_patch_is_rejected() {
        let mut config = HoleToolConfig::default();
        config.clearances.push(ClearancePatch {
            designation: None,
            size: 5.0,
            pitch: 0.8,
            clearance: 4.0,
            tap: 4.2,
        });
        let err = config.registries().unwrap_err();
        assert!(err.to_string().contains("[[clearances]]"));
    }

    #[test]
    fn test_unknown_tolerance_preset() {
        let mut config = HoleToolConfig::default();
        config.tolerance.preset = Some("sloppy".to_string());
        let registries = config.registries().unwrap();
        assert!(config.tolerance(&registries).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HOLETOOL_BOLT", "M4"),
            ("HOLETOOL_HEAD", "pan"),
            ("HOLETOOL_NUT", "vigrue"),
            ("HOLETOOL_TOLERANCE", "prusa_15"),
        ]
        .into_iter()
        .collect();

        let mut config = HoleToolConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.fastener.designation, "M4");
        assert_eq!(config.fastener.head, HeadStyle::Pan);
        assert_eq!(config.fastener.nut_style(), Some(NutStyle::Vigrue));
        assert_eq!(config.tolerance.preset.as_deref(), Some("prusa_15"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config: HoleToolConfig = toml::from_str(SAMPLE).unwrap();
        config.drilling.flush = Some(12.0);
        config.save(&path).unwrap();

        let loaded = HoleToolConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = HoleToolConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
