// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for the hole tool

pub mod reporter;

pub use reporter::{Reporter, Row};
