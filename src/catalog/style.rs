// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Designations and head/nut styles

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Bolt thread size label, like "M5" or "M2.5"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Designation(String);

impl Designation {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Metric designation for a nominal diameter (5.0 -> "M5", 2.5 -> "M2.5")
    pub fn metric(size: f64) -> Self {
        Self(format!("M{}", size))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier form used in generated code ("M2.5" -> "m2_5")
    pub fn ident(&self) -> String {
        self.0.to_lowercase().replace('.', "_")
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Designation {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Designation {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Designation {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Cross-section shape of a bolt head
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeadStyle {
    Button,
    Socket,
    Pan,
    Custom(String),
}

impl HeadStyle {
    pub fn name(&self) -> &str {
        match self {
            HeadStyle::Button => "Button",
            HeadStyle::Socket => "Socket",
            HeadStyle::Pan => "Pan",
            HeadStyle::Custom(name) => name,
        }
    }

    /// Identifier form used in generated code ("Button" -> "button")
    pub fn ident(&self) -> String {
        self.name().to_lowercase().replace(['.', ' ', '-'], "_")
    }
}

impl fmt::Display for HeadStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeadStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "button" => HeadStyle::Button,
            "socket" => HeadStyle::Socket,
            "pan" => HeadStyle::Pan,
            _ => HeadStyle::Custom(s.to_string()),
        })
    }
}

impl From<String> for HeadStyle {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(style) => style,
            Err(never) => match never {},
        }
    }
}

impl From<HeadStyle> for String {
    fn from(style: HeadStyle) -> Self {
        style.name().to_string()
    }
}

/// Nut variety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NutStyle {
    /// Standard DIN 934 hex nut
    Plain,
    /// Hex nuts from the Vigrue assortment (caliper measured)
    Vigrue,
    Custom(String),
}

impl NutStyle {
    pub fn name(&self) -> &str {
        match self {
            NutStyle::Plain => "Plain",
            NutStyle::Vigrue => "Vigrue",
            NutStyle::Custom(name) => name,
        }
    }
}

impl fmt::Display for NutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NutStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "plain" => NutStyle::Plain,
            "vigrue" => NutStyle::Vigrue,
            _ => NutStyle::Custom(s.to_string()),
        })
    }
}

impl From<String> for NutStyle {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(style) => style,
            Err(never) => match never {},
        }
    }
}

impl From<NutStyle> for String {
    fn from(style: NutStyle) -> Self {
        style.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_designation() {
        assert_eq!(Designation::metric(5.0).as_str(), "M5");
        assert_eq!(Designation::metric(2.5).as_str(), "M2.5");
        assert_eq!(Designation::metric(2.5).ident(), "m2_5");
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("button".parse::<HeadStyle>().unwrap(), HeadStyle::Button);
        assert_eq!("SOCKET".parse::<HeadStyle>().unwrap(), HeadStyle::Socket);
        assert_eq!(
            "Flat".parse::<HeadStyle>().unwrap(),
            HeadStyle::Custom("Flat".to_string())
        );
        assert_eq!("plain".parse::<NutStyle>().unwrap(), NutStyle::Plain);
        assert_eq!(HeadStyle::Custom("Low Profile".into()).ident(), "low_profile");
    }

    #[test]
    fn test_style_serde() {
        let json = serde_json::to_string(&HeadStyle::Pan).unwrap();
        assert_eq!(json, "\"Pan\"");
        let style: NutStyle = serde_json::from_str("\"vigrue\"").unwrap();
        assert_eq!(style, NutStyle::Vigrue);
    }
}
