// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compound-variant rules.
//!
//! A [`CompoundRule`] attaches extra classes when a combination of axis
//! values holds. Rules are evaluated in declaration order and every matching
//! rule contributes; there is no first-match-wins cutoff.

use alloc::string::String;
use alloc::vec::Vec;
use cultivar_class::ClassValue;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::key::VariantKey;

/// Inline capacity for a rule's predicate list.
///
/// Compound rules rarely constrain more than a few axes.
const INLINE_PREDICATES: usize = 4;

/// The effective value of one axis while matching compound rules.
///
/// Defaults overlaid with the caller's selections; an explicitly unset axis
/// is present here (it overrides its default) but satisfies no predicate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum EffectiveValue<'a> {
    /// The axis resolved to this key.
    Key(&'a VariantKey),
    /// The axis was explicitly suppressed.
    Unset,
}

/// The per-axis acceptance test of a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Predicate {
    /// Satisfied iff the effective key equals this key.
    One(VariantKey),
    /// Satisfied iff the effective key is a member of this set.
    AnyOf(Vec<VariantKey>),
}

impl Predicate {
    fn accepts(&self, key: &VariantKey) -> bool {
        match self {
            Self::One(expected) => expected == key,
            Self::AnyOf(expected) => expected.contains(key),
        }
    }
}

/// An extra class fragment applied when a combination of axis values holds.
///
/// A rule matches when **all** of its predicates are satisfied; a rule with
/// no predicates matches every invocation. A matching rule appends its
/// `class` fragment and then its `class_name` fragment, whichever are
/// present.
///
/// # Example
///
/// ```rust
/// use cultivar_variants::{CompoundRule, CultivarBuilder, Props};
///
/// let button = CultivarBuilder::new()
///     .variant("intent", "primary", "P")
///     .variant("size", "medium", "md")
///     .default_variant("intent", "primary")
///     .default_variant("size", "medium")
///     .compound(
///         CompoundRule::new()
///             .when("intent", "primary")
///             .when("size", "medium")
///             .class("PM"),
///     )
///     .build();
///
/// // Defaults satisfy the rule.
/// assert_eq!(button.classes(&Props::new()), "P md PM");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompoundRule {
    predicates: SmallVec<[(String, Predicate); INLINE_PREDICATES]>,
    class: Option<ClassValue>,
    class_name: Option<ClassValue>,
}

impl CompoundRule {
    /// Creates a rule with no predicates and no fragments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires an axis to resolve to exactly this key.
    ///
    /// Constraining the same axis again replaces the earlier requirement.
    #[must_use]
    pub fn when(self, axis: impl Into<String>, key: impl Into<VariantKey>) -> Self {
        self.constrain(axis.into(), Predicate::One(key.into()))
    }

    /// Requires an axis to resolve to any key in the given set.
    ///
    /// Membership, not equality: `when_any("intent", ["warning", "danger"])`
    /// is satisfied by either key. Constraining the same axis again replaces
    /// the earlier requirement.
    #[must_use]
    pub fn when_any<K>(
        self,
        axis: impl Into<String>,
        keys: impl IntoIterator<Item = K>,
    ) -> Self
    where
        K: Into<VariantKey>,
    {
        let keys: Vec<VariantKey> = keys.into_iter().map(Into::into).collect();
        self.constrain(axis.into(), Predicate::AnyOf(keys))
    }

    /// Sets the rule's `class` fragment.
    #[must_use]
    pub fn class(mut self, value: impl Into<ClassValue>) -> Self {
        self.class = Some(value.into());
        self
    }

    /// Sets the rule's `class_name` fragment, appended after `class` when
    /// both are present.
    #[must_use]
    pub fn class_name(mut self, value: impl Into<ClassValue>) -> Self {
        self.class_name = Some(value.into());
        self
    }

    /// Returns the number of constrained axes.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    fn constrain(mut self, axis: String, predicate: Predicate) -> Self {
        match self.predicates.iter_mut().find(|(name, _)| *name == axis) {
            Some((_, existing)) => *existing = predicate,
            None => self.predicates.push((axis, predicate)),
        }
        self
    }

    /// Returns `true` if every predicate is satisfied by the effective
    /// values. Vacuously true for a rule with no predicates.
    pub(crate) fn matches(&self, effective: &HashMap<&str, EffectiveValue<'_>>) -> bool {
        self.predicates
            .iter()
            .all(|(axis, predicate)| match effective.get(axis.as_str()) {
                Some(EffectiveValue::Key(key)) => predicate.accepts(key),
                Some(EffectiveValue::Unset) | None => false,
            })
    }

    pub(crate) fn class_fragment(&self) -> Option<&ClassValue> {
        self.class.as_ref()
    }

    pub(crate) fn class_name_fragment(&self) -> Option<&ClassValue> {
        self.class_name.as_ref()
    }
}
