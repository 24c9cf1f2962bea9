// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generator composition.
//!
//! A [`Composed`] concatenates the output of several generators behind one
//! call. Composition is structural: each constituent re-runs in full (its
//! own defaults, its own compound matching), and the final string is the
//! constituents' outputs in order, followed by the caller's ad hoc classes.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use cultivar_class::flatten_into;

use crate::cultivar::Cultivar;
use crate::props::Props;
use crate::schema::Schema;
use crate::styler::Hooks;

/// Internal storage for a composition.
#[derive(Debug)]
struct ComposedData {
    parts: Vec<Cultivar>,
    hooks: Hooks,
}

/// An ordered composition of variant generators.
///
/// Invoking a composition forwards the caller's axis selections (never the
/// ad hoc `class`/`class_name` fragments) to every constituent in supply
/// order, joins their outputs, appends the caller's ad hoc fragments, and
/// applies the composition's hook once. Constituents sharing an axis name
/// each resolve it independently.
///
/// # Example
///
/// ```rust
/// use cultivar_variants::{Composed, CultivarBuilder, Props};
///
/// let box_ = CultivarBuilder::new()
///     .variant("shadow", "sm", "shadow-sm")
///     .variant("shadow", "md", "shadow-md")
///     .default_variant("shadow", "sm")
///     .build();
/// let stack = CultivarBuilder::new()
///     .variant("gap", 1, "gap-1")
///     .variant("gap", 2, "gap-2")
///     .build();
///
/// let card = Composed::new([box_, stack]);
///
/// assert_eq!(card.classes(&Props::new()), "shadow-sm");
/// assert_eq!(card.classes(&Props::new().set("gap", 2)), "shadow-sm gap-2");
/// assert_eq!(
///     card.classes(&Props::new().set("shadow", "md").class("adhoc")),
///     "shadow-md adhoc"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Composed {
    inner: Arc<ComposedData>,
}

impl Composed {
    /// Composes generators in the given order, with no hooks of its own.
    #[must_use]
    pub fn new(parts: impl IntoIterator<Item = Cultivar>) -> Self {
        Self::with_hooks(parts, Hooks::new())
    }

    /// Composes generators, binding hooks to the composition itself.
    pub(crate) fn with_hooks(parts: impl IntoIterator<Item = Cultivar>, hooks: Hooks) -> Self {
        Self {
            inner: Arc::new(ComposedData {
                parts: parts.into_iter().collect(),
                hooks,
            }),
        }
    }

    /// Returns the number of constituent generators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.parts.len()
    }

    /// Returns `true` if the composition has no constituents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.parts.is_empty()
    }

    /// Returns the constituents, in supply order.
    pub fn parts(&self) -> impl Iterator<Item = &Cultivar> + '_ {
        self.inner.parts.iter()
    }

    /// Resolves the combined class string for the given props.
    #[must_use]
    pub fn classes(&self, props: &Props) -> String {
        let data = &*self.inner;
        let forwarded = props.without_adhoc();

        let mut out = String::new();
        for part in &data.parts {
            let rendered = part.classes(&forwarded);
            if rendered.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&rendered);
        }

        if let Some(fragment) = props.class_fragment() {
            flatten_into(fragment, &mut out);
        }
        if let Some(fragment) = props.class_name_fragment() {
            flatten_into(fragment, &mut out);
        }
        data.hooks.apply(out)
    }

    /// Returns the constituents' schemas merged in supply order.
    ///
    /// Purely introspective; resolution never consults the merged schema.
    #[must_use]
    pub fn schema(&self) -> Schema {
        Schema::merge(self.inner.parts.iter().map(Cultivar::schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cultivar::CultivarBuilder;
    use crate::key::VariantKey;
    use crate::styler::{Hooks, Styler};
    use alloc::format;

    fn box_generator() -> Cultivar {
        CultivarBuilder::new()
            .variant("shadow", "sm", "shadow-sm")
            .variant("shadow", "md", "shadow-md")
            .default_variant("shadow", "sm")
            .build()
    }

    fn stack_generator() -> Cultivar {
        CultivarBuilder::new()
            .variant("gap", 1, "gap-1")
            .variant("gap", 2, "gap-2")
            .variant("gap", 3, "gap-3")
            .build()
    }

    #[test]
    fn outputs_concatenate_in_supply_order() {
        let a = CultivarBuilder::new().base("a1").build();
        let b = CultivarBuilder::new().base("b1").build();
        let composed = Composed::new([a, b]);

        assert_eq!(composed.classes(&Props::new()), "a1 b1");
        assert_eq!(composed.classes(&Props::new().class("extra")), "a1 b1 extra");
    }

    #[test]
    fn constituents_resolve_their_own_defaults() {
        let card = Composed::new([box_generator(), stack_generator()]);

        assert_eq!(card.classes(&Props::new()), "shadow-sm");
        assert_eq!(card.classes(&Props::new().set("gap", 2)), "shadow-sm gap-2");
        assert_eq!(
            card.classes(&Props::new().set("shadow", "md").set("gap", 3).class("adhoc")),
            "shadow-md gap-3 adhoc"
        );
    }

    #[test]
    fn adhoc_fragments_are_not_forwarded_to_constituents() {
        // A constituent keyed on the ad hoc spelling must never see it.
        let trap = CultivarBuilder::new()
            .variant("class", "adhoc", "TRAP")
            .build();
        let composed = Composed::new([trap]);

        assert_eq!(composed.classes(&Props::new().class("adhoc")), "adhoc");
    }

    #[test]
    fn empty_constituent_output_adds_no_separator() {
        let silent = CultivarBuilder::new().build();
        let loud = CultivarBuilder::new().base("x").build();
        let composed = Composed::new([silent, loud]);

        assert_eq!(composed.classes(&Props::new()), "x");
    }

    #[test]
    fn both_adhoc_spellings_append_in_order() {
        let composed = Composed::new([CultivarBuilder::new().base("a").build()]);
        assert_eq!(
            composed.classes(&Props::new().class("b").class_name("c")),
            "a b c"
        );
    }

    #[test]
    fn empty_composition_yields_adhoc_only() {
        let composed = Composed::new([]);
        assert!(composed.is_empty());
        assert_eq!(composed.classes(&Props::new()), "");
        assert_eq!(composed.classes(&Props::new().class("only")), "only");
    }

    #[test]
    fn composition_hook_runs_after_concatenation() {
        let styler = Styler::with_hooks(Hooks::new().on_complete(|s| format!("[{s}]")));
        let a = CultivarBuilder::new().base("a1").build();
        let b = CultivarBuilder::new().base("b1").build();
        let composed = styler.compose([a, b]);

        assert_eq!(composed.classes(&Props::new().class("extra")), "[a1 b1 extra]");
    }

    #[test]
    fn merged_schema_spans_constituents() {
        let card = Composed::new([box_generator(), stack_generator()]);
        let schema = card.schema();

        assert_eq!(schema.len(), 2);
        let gap = schema.axis("gap").expect("gap axis");
        let keys: Vec<&str> = gap.values().iter().map(VariantKey::as_str).collect();
        assert_eq!(keys, ["1", "2", "3"]);
        assert_eq!(
            schema.axis("shadow").expect("shadow axis").default_value(),
            Some(&VariantKey::from("sm"))
        );
    }
}
