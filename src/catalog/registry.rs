// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Keyed reference tables with insertion-ordered listing

use super::Designation;
use crate::error::{Result, SpecKind};
use ahash::AHashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A spec that can live in a [`Registry`]
pub trait RegistryEntry {
    /// Natural key; registering a second spec with the same key replaces the first
    type Key: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    const KIND: SpecKind;

    fn key(&self) -> Self::Key;

    /// Check the spec's own invariants before it is accepted
    fn validate(&self) -> Result<()>;
}

/// Entries that belong to a thread designation
pub trait SizedEntry: RegistryEntry {
    fn designation(&self) -> &Designation;
    fn nominal_diameter(&self) -> f64;
}

/// Entries keyed by (designation, style)
pub trait StyledEntry: SizedEntry {
    type Style: Clone + Eq + Hash + fmt::Display;

    fn style(&self) -> &Self::Style;
}

/// Natural key of a styled entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleKey<S> {
    pub designation: Designation,
    pub style: S,
}

impl<S> StyleKey<S> {
    pub fn new(designation: impl Into<Designation>, style: S) -> Self {
        Self {
            designation: designation.into(),
            style,
        }
    }
}

impl<S: fmt::Display> fmt::Display for StyleKey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.designation, self.style)
    }
}

/// Lookup table of immutable specs.
///
/// Entries are shared as `Arc<T>` so configurators can hold on to a spec
/// without borrowing the registry.
#[derive(Debug, Clone)]
pub struct Registry<T: RegistryEntry> {
    index: AHashMap<T::Key, usize>,
    entries: Vec<Arc<T>>,
}

impl<T: RegistryEntry> Registry<T> {
    pub fn new() -> Self {
        Self {
            index: AHashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Validate and insert a spec, returning the spec it replaced.
    ///
    /// A replaced spec keeps its original position in listing order.
    pub fn register(&mut self, spec: T) -> Result<Option<Arc<T>>> {
        spec.validate()?;
        let key = spec.key();
        let spec = Arc::new(spec);

        match self.index.get(&key) {
            Some(&slot) => {
                tracing::debug!(kind = %T::KIND, key = %key, "replacing registered spec");
                Ok(Some(std::mem::replace(&mut self.entries[slot], spec)))
            }
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(spec);
                Ok(None)
            }
        }
    }

    /// Look up a spec by its natural key
    pub fn get(&self, key: &T::Key) -> Option<Arc<T>> {
        self.index.get(key).map(|&slot| Arc::clone(&self.entries[slot]))
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.index.contains_key(key)
    }

    /// All specs in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: SizedEntry> Registry<T> {
    /// Distinct designations ordered by ascending nominal diameter
    pub fn list_designations(&self) -> Vec<Designation> {
        let mut seen: Vec<(&Designation, f64)> = Vec::new();
        for entry in &self.entries {
            if !seen.iter().any(|(d, _)| *d == entry.designation()) {
                seen.push((entry.designation(), entry.nominal_diameter()));
            }
        }
        // Stable sort keeps registration order for equal sizes
        seen.sort_by(|a, b| a.1.total_cmp(&b.1));
        seen.into_iter().map(|(d, _)| d.clone()).collect()
    }

    /// Specs registered for a designation, in registration order
    pub fn for_designation<'a>(
        &'a self,
        designation: &'a str,
    ) -> impl Iterator<Item = &'a Arc<T>> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.designation().as_str() == designation)
    }
}

impl<T, S> Registry<T>
where
    T: StyledEntry<Style = S> + RegistryEntry<Key = StyleKey<S>>,
    S: Clone + Eq + Hash + fmt::Display,
{
    /// Look up the spec for a designation and style
    pub fn lookup(&self, designation: &str, style: &S) -> Option<Arc<T>> {
        self.get(&StyleKey::new(designation, style.clone()))
    }

    /// Styles registered for a designation, in registration order
    pub fn list_styles(&self, designation: &str) -> Vec<S> {
        self.for_designation(designation)
            .map(|entry| entry.style().clone())
            .collect()
    }
}

impl<T: RegistryEntry> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
