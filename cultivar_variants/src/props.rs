// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-invocation variant selections.
//!
//! This module provides [`Props`], the transient value a caller hands to
//! [`Cultivar::classes`](crate::Cultivar::classes), and [`Selection`], the
//! explicit per-axis choice.

use alloc::string::String;
use cultivar_class::ClassValue;
use hashbrown::HashMap;

use crate::key::VariantKey;

/// An explicit per-axis choice within [`Props`].
///
/// The third state, "use the axis default", is the absence of any
/// selection, so the undefined/falsy ambiguity that plagues loosely-typed
/// renditions of this engine cannot arise: a caller either selected a key
/// (however falsy its spelling), suppressed the axis, or said nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Use the named key for this axis.
    Value(VariantKey),
    /// Suppress this axis entirely, even if a default is declared.
    Unset,
}

/// Variant selections and ad hoc classes for a single invocation.
///
/// `Props` is built by chained calls and borrowed by the engine; it is never
/// mutated during resolution. Selecting the same axis twice keeps the later
/// choice.
///
/// # Example
///
/// ```rust
/// use cultivar_variants::{CultivarBuilder, Props};
///
/// let button = CultivarBuilder::new()
///     .variant("intent", "primary", "bg-blue-500")
///     .variant("intent", "secondary", "bg-white")
///     .default_variant("intent", "primary")
///     .build();
///
/// assert_eq!(button.classes(&Props::new()), "bg-blue-500");
/// assert_eq!(
///     button.classes(&Props::new().set("intent", "secondary").class("m-4")),
///     "bg-white m-4"
/// );
/// assert_eq!(button.classes(&Props::new().unset("intent")), "");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Props {
    selections: HashMap<String, Selection>,
    class: Option<ClassValue>,
    class_name: Option<ClassValue>,
}

impl Props {
    /// Creates an empty set of props.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a key for an axis.
    ///
    /// Falsy-but-valid keys (`false`, `0`, `""`) are honored as explicit
    /// selections; they never fall through to the axis default.
    #[must_use]
    pub fn set(mut self, axis: impl Into<String>, key: impl Into<VariantKey>) -> Self {
        self.selections
            .insert(axis.into(), Selection::Value(key.into()));
        self
    }

    /// Suppresses an axis, overriding any declared default.
    #[must_use]
    pub fn unset(mut self, axis: impl Into<String>) -> Self {
        self.selections.insert(axis.into(), Selection::Unset);
        self
    }

    /// Sets the ad hoc `class` fragment, appended after all variant output.
    #[must_use]
    pub fn class(mut self, value: impl Into<ClassValue>) -> Self {
        self.class = Some(value.into());
        self
    }

    /// Sets the ad hoc `class_name` fragment, appended last of all.
    ///
    /// `class` and `class_name` are two spellings of the same idea; when both
    /// are supplied, both are appended, `class` first.
    #[must_use]
    pub fn class_name(mut self, value: impl Into<ClassValue>) -> Self {
        self.class_name = Some(value.into());
        self
    }

    /// Returns the selection for an axis, if any.
    #[must_use]
    pub fn selection(&self, axis: &str) -> Option<&Selection> {
        self.selections.get(axis)
    }

    /// Returns the number of axes with a selection.
    #[must_use]
    pub fn selection_count(&self) -> usize {
        self.selections.len()
    }

    /// Returns an iterator over all axis selections, in no particular order.
    pub fn selections(&self) -> impl Iterator<Item = (&str, &Selection)> + '_ {
        self.selections.iter().map(|(axis, s)| (axis.as_str(), s))
    }

    /// Returns the ad hoc `class` fragment, if set.
    #[must_use]
    pub fn class_fragment(&self) -> Option<&ClassValue> {
        self.class.as_ref()
    }

    /// Returns the ad hoc `class_name` fragment, if set.
    #[must_use]
    pub fn class_name_fragment(&self) -> Option<&ClassValue> {
        self.class_name.as_ref()
    }

    /// Clones the axis selections while dropping both ad hoc fragments.
    ///
    /// Composition forwards selections to every constituent but keeps the
    /// caller's ad hoc classes for the very end of the combined string.
    pub(crate) fn without_adhoc(&self) -> Self {
        Self {
            selections: self.selections.clone(),
            class: None,
            class_name: None,
        }
    }
}
