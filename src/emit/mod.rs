// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Parametric code emission
//!
//! A [`FastenerDocument`] captures a fastener's constants once; renderers
//! turn it into text for external modelling tools.

mod document;
mod jscad;

pub use document::{DrillDefaults, DrillOverrides, FastenerDocument, DOCUMENT_VERSION, OVERRIDE_KEYS};
pub use jscad::JscadRenderer;
