// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variant generators.
//!
//! This module provides [`Cultivar`], an immutable description of base
//! classes, variant axes, defaults, and compound rules, and
//! [`CultivarBuilder`] for constructing one. Resolution walks a fixed
//! precedence per axis:
//!
//! **Unset → explicit selection → default → nothing**
//!
//! and assembles output in a fixed order:
//!
//! **base → axis fragments (declaration order) → compound fragments (rule
//! order) → ad hoc `class` → ad hoc `class_name`**

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use cultivar_class::{ClassValue, flatten_into};
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::compound::{CompoundRule, EffectiveValue};
use crate::key::VariantKey;
use crate::props::{Props, Selection};
use crate::schema::{AxisSchema, Schema};
use crate::styler::Hooks;

/// Inline capacity for an axis's value entries.
///
/// Axes rarely declare more than a handful of values, so this keeps the
/// whole schema allocation-free for typical components.
const INLINE_VALUES: usize = 8;

/// One declared axis: its value→fragment entries in declaration order.
///
/// Lookup is a linear scan; value counts are single digits and declaration
/// order is what schema introspection reports.
#[derive(Clone, Debug, Default)]
struct Axis {
    values: SmallVec<[(VariantKey, ClassValue); INLINE_VALUES]>,
}

impl Axis {
    fn get(&self, key: &VariantKey) -> Option<&ClassValue> {
        self.values
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, fragment)| fragment)
    }

    fn set(&mut self, key: VariantKey, fragment: ClassValue) {
        match self.values.iter_mut().find(|(candidate, _)| *candidate == key) {
            Some((_, existing)) => *existing = fragment,
            None => self.values.push((key, fragment)),
        }
    }

    fn keys(&self) -> impl Iterator<Item = &VariantKey> + '_ {
        self.values.iter().map(|(key, _)| key)
    }
}

/// Internal storage for a generator's configuration.
#[derive(Debug, Default)]
struct CultivarData {
    base: Option<ClassValue>,
    /// Axes in declaration order; order determines output order.
    axes: Vec<(String, Axis)>,
    /// Per-axis defaults, applied when a caller says nothing for an axis.
    defaults: HashMap<String, VariantKey>,
    /// Compound rules in declaration order.
    compounds: Vec<CompoundRule>,
    hooks: Hooks,
}

/// An immutable variant generator.
///
/// A `Cultivar` captures base classes, variant axes with their class
/// fragments, per-axis defaults, and compound rules. It is constructed once
/// with [`CultivarBuilder`], typically at module-initialization time, and
/// then invoked any number of times with [`Cultivar::classes`].
///
/// Internally the configuration is `Arc`-shared: cloning is cheap and a
/// generator can be cached and used from any thread.
///
/// Resolution is total. Unknown axes in props, unknown keys for a known
/// axis, and missing configuration all degrade to "no contribution"; nothing
/// here returns an error or panics.
///
/// # Example
///
/// ```rust
/// use cultivar_variants::{CultivarBuilder, Props};
///
/// let button = CultivarBuilder::new()
///     .base("font-semibold border rounded")
///     .variant("intent", "primary", "bg-blue-500 text-white")
///     .variant("intent", "secondary", "bg-white text-gray-800")
///     .variant("size", "small", "text-sm py-1 px-2")
///     .variant("size", "medium", "text-base py-2 px-4")
///     .default_variant("intent", "primary")
///     .default_variant("size", "medium")
///     .build();
///
/// assert_eq!(
///     button.classes(&Props::new()),
///     "font-semibold border rounded bg-blue-500 text-white text-base py-2 px-4"
/// );
/// assert_eq!(
///     button.classes(&Props::new().set("intent", "secondary").set("size", "small")),
///     "font-semibold border rounded bg-white text-gray-800 text-sm py-1 px-2"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Cultivar {
    inner: Arc<CultivarData>,
}

impl Cultivar {
    /// Resolves the class string for the given props.
    ///
    /// Per axis, in declaration order: an explicit [`Props::unset`]
    /// suppresses the axis outright; an explicit selection is used as-is
    /// (falsy-but-valid keys included); otherwise the axis default applies;
    /// otherwise the axis contributes nothing. Compound rules then match
    /// against the defaults overlaid with the caller's selections, every
    /// matching rule contributing in declaration order. Ad hoc `class` and
    /// `class_name` fragments come last, and the configured hook (if any)
    /// runs exactly once over the joined string.
    ///
    /// A generator with no variant axes ignores all selections and returns
    /// the flattened base plus ad hoc fragments.
    #[must_use]
    pub fn classes(&self, props: &Props) -> String {
        let data = &*self.inner;
        let mut out = String::new();

        if let Some(base) = &data.base {
            flatten_into(base, &mut out);
        }

        if data.axes.is_empty() {
            push_adhoc(props, &mut out);
            return data.hooks.apply(out);
        }

        for (name, axis) in &data.axes {
            let effective = match props.selection(name) {
                Some(Selection::Unset) => None,
                Some(Selection::Value(key)) => Some(key),
                None => data.defaults.get(name),
            };
            if let Some(key) = effective
                && let Some(fragment) = axis.get(key)
            {
                flatten_into(fragment, &mut out);
            }
        }

        if !data.compounds.is_empty() {
            let effective = self.effective_values(props);
            for rule in &data.compounds {
                if rule.matches(&effective) {
                    if let Some(fragment) = rule.class_fragment() {
                        flatten_into(fragment, &mut out);
                    }
                    if let Some(fragment) = rule.class_name_fragment() {
                        flatten_into(fragment, &mut out);
                    }
                }
            }
        }

        push_adhoc(props, &mut out);
        data.hooks.apply(out)
    }

    /// Resolves the class string with no selections, defaults only.
    #[must_use]
    pub fn default_classes(&self) -> String {
        self.classes(&Props::new())
    }

    /// Returns an introspection snapshot of the declared axes.
    ///
    /// Axes appear in declaration order with their value keys in declaration
    /// order; a default declared for an axis that was never given values is
    /// not reported (it still participates in compound matching).
    #[must_use]
    pub fn schema(&self) -> Schema {
        let data = &*self.inner;
        let axes = data
            .axes
            .iter()
            .map(|(name, axis)| {
                AxisSchema::new(
                    name.clone(),
                    axis.keys().cloned().collect(),
                    data.defaults.get(name).cloned(),
                )
            })
            .collect();
        Schema::new(axes)
    }

    /// Builds the defaults-overlaid-with-selections map compound rules
    /// match against. Every selection participates, whatever its axis name.
    fn effective_values<'a>(&'a self, props: &'a Props) -> HashMap<&'a str, EffectiveValue<'a>> {
        let data = &*self.inner;
        let mut effective =
            HashMap::with_capacity(data.defaults.len() + props.selection_count());
        for (name, key) in &data.defaults {
            effective.insert(name.as_str(), EffectiveValue::Key(key));
        }
        for (name, selection) in props.selections() {
            let value = match selection {
                Selection::Value(key) => EffectiveValue::Key(key),
                Selection::Unset => EffectiveValue::Unset,
            };
            effective.insert(name, value);
        }
        effective
    }

    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

fn push_adhoc(props: &Props, out: &mut String) {
    if let Some(fragment) = props.class_fragment() {
        flatten_into(fragment, out);
    }
    if let Some(fragment) = props.class_name_fragment() {
        flatten_into(fragment, out);
    }
}

/// Builder for [`Cultivar`] instances.
///
/// Axes come into existence the first time [`CultivarBuilder::variant`]
/// names them and keep that declaration order in the output. Declaring the
/// same axis/key pair again replaces the earlier fragment.
///
/// # Example
///
/// ```rust
/// use cultivar_variants::{CompoundRule, CultivarBuilder, Props};
///
/// let badge = CultivarBuilder::new()
///     .base("badge")
///     .variant("tone", "info", "badge--info")
///     .variant("tone", "error", "badge--error")
///     .default_variant("tone", "info")
///     .compound(CompoundRule::new().when("tone", "error").class("font-bold"))
///     .build();
///
/// assert_eq!(badge.classes(&Props::new()), "badge badge--info");
/// assert_eq!(
///     badge.classes(&Props::new().set("tone", "error")),
///     "badge badge--error font-bold"
/// );
/// ```
#[derive(Debug, Default)]
pub struct CultivarBuilder {
    data: CultivarData,
}

impl CultivarBuilder {
    /// Creates a builder with no base, axes, defaults, or rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose generator will run the given hooks.
    pub(crate) fn with_hooks(hooks: Hooks) -> Self {
        Self {
            data: CultivarData {
                hooks,
                ..CultivarData::default()
            },
        }
    }

    /// Sets the base fragment, emitted first in every result.
    #[must_use]
    pub fn base(mut self, value: impl Into<ClassValue>) -> Self {
        self.data.base = Some(value.into());
        self
    }

    /// Declares (or replaces) the fragment for one key of one axis.
    #[must_use]
    pub fn variant(
        mut self,
        axis: impl Into<String>,
        key: impl Into<VariantKey>,
        fragment: impl Into<ClassValue>,
    ) -> Self {
        let axis = axis.into();
        let key = key.into();
        let fragment = fragment.into();
        match self.data.axes.iter_mut().find(|(name, _)| *name == axis) {
            Some((_, entry)) => entry.set(key, fragment),
            None => {
                let mut entry = Axis::default();
                entry.set(key, fragment);
                self.data.axes.push((axis, entry));
            }
        }
        self
    }

    /// Declares the default key for an axis, applied when a caller supplies
    /// no selection for it.
    #[must_use]
    pub fn default_variant(
        mut self,
        axis: impl Into<String>,
        key: impl Into<VariantKey>,
    ) -> Self {
        self.data.defaults.insert(axis.into(), key.into());
        self
    }

    /// Appends a compound rule. Rules keep declaration order and all
    /// matching rules contribute.
    #[must_use]
    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.data.compounds.push(rule);
        self
    }

    /// Builds the generator.
    #[must_use]
    pub fn build(self) -> Cultivar {
        Cultivar {
            inner: Arc::new(self.data),
        }
    }
}
