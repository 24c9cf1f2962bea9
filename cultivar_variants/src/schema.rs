// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime schema introspection.
//!
//! A [`Schema`] is a read-only snapshot of a generator's declared axes:
//! which value keys each axis accepts and which key is its default. Tooling
//! uses it to enumerate acceptable props without invoking the generator.

use alloc::string::String;
use alloc::vec::Vec;

use crate::key::VariantKey;

/// The declared shape of one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisSchema {
    name: String,
    values: Vec<VariantKey>,
    default: Option<VariantKey>,
}

impl AxisSchema {
    pub(crate) fn new(name: String, values: Vec<VariantKey>, default: Option<VariantKey>) -> Self {
        Self {
            name,
            values,
            default,
        }
    }

    /// Returns the axis name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared value keys, in declaration order.
    #[must_use]
    pub fn values(&self) -> &[VariantKey] {
        &self.values
    }

    /// Returns the declared default key, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&VariantKey> {
        self.default.as_ref()
    }

    /// Merges another declaration of the same axis into this one.
    ///
    /// Unseen value keys are appended in their order of appearance; a
    /// default in `other` replaces the existing default.
    pub(crate) fn merge(&mut self, other: Self) {
        for key in other.values {
            if !self.values.contains(&key) {
                self.values.push(key);
            }
        }
        if other.default.is_some() {
            self.default = other.default;
        }
    }
}

/// A read-only snapshot of a generator's declared axes.
///
/// # Example
///
/// ```rust
/// use cultivar_variants::CultivarBuilder;
///
/// let button = CultivarBuilder::new()
///     .variant("intent", "primary", "P")
///     .variant("intent", "secondary", "S")
///     .default_variant("intent", "primary")
///     .build();
///
/// let schema = button.schema();
/// let intent = schema.axis("intent").unwrap();
/// assert_eq!(intent.values().len(), 2);
/// assert_eq!(intent.default_value().map(|k| k.as_str()), Some("primary"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    axes: Vec<AxisSchema>,
}

impl Schema {
    pub(crate) fn new(axes: Vec<AxisSchema>) -> Self {
        Self { axes }
    }

    /// Returns the number of declared axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Returns `true` if no axes are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Returns the axes, in declaration order.
    #[must_use]
    pub fn axes(&self) -> &[AxisSchema] {
        &self.axes
    }

    /// Looks up one axis by name.
    #[must_use]
    pub fn axis(&self, name: &str) -> Option<&AxisSchema> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// Merges a sequence of schemas in order.
    ///
    /// Axes keep their first-seen position; later schemas extend an axis's
    /// value list with unseen keys and may replace its default.
    pub(crate) fn merge(schemas: impl IntoIterator<Item = Self>) -> Self {
        let mut merged: Vec<AxisSchema> = Vec::new();
        for schema in schemas {
            for axis in schema.axes {
                match merged.iter_mut().find(|existing| existing.name == axis.name) {
                    Some(existing) => existing.merge(axis),
                    None => merged.push(axis),
                }
            }
        }
        Self { axes: merged }
    }
}
