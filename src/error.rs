// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for catalog lookups, registration and geometry checks

use std::fmt;
use thiserror::Error;

/// Which reference table an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecKind {
    BoltHead,
    Nut,
    Clearance,
    Tolerance,
}

impl fmt::Display for SpecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpecKind::BoltHead => "bolt head",
            SpecKind::Nut => "nut",
            SpecKind::Clearance => "clearance",
            SpecKind::Tolerance => "tolerance",
        };
        f.write_str(name)
    }
}

/// Errors raised by the hole engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HoleError {
    /// A designation or style is absent from a registry.
    #[error("{kind} not found: {key}")]
    NotFound { kind: SpecKind, key: String },

    /// A spec violates its own invariants and was rejected at registration.
    #[error("invalid {kind} spec {key}: {reason}")]
    InvalidSpec {
        kind: SpecKind,
        key: String,
        reason: String,
    },

    /// A solid has a non-positive length or radius.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

impl HoleError {
    pub fn not_found(kind: SpecKind, key: impl fmt::Display) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn invalid_spec(kind: SpecKind, key: impl fmt::Display, reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            kind,
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// True for lookup misses
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, HoleError>;
