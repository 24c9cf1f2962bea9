// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configured entry points.
//!
//! A [`Styler`] binds hook configuration and hands out the three operations
//! (ad hoc joining, generator building, and composition) with that
//! configuration attached. Construction is explicit and side-effect-free;
//! there is no process-wide instance, and several differently-configured
//! stylers can coexist (e.g. multi-tenant styling).

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use cultivar_class::{ClassValue, flatten};

use crate::compose::Composed;
use crate::cultivar::{Cultivar, CultivarBuilder};

/// A post-processing hook applied to a finished class string.
pub type HookFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Hook configuration for a [`Styler`].
///
/// `on_complete` runs exactly once over every finished class string. The
/// legacy `cx_done` spelling is honored as an alias and takes precedence
/// when both are set, preserving the contract callers migrated from.
#[derive(Clone, Default)]
pub struct Hooks {
    on_complete: Option<HookFn>,
    cx_done: Option<HookFn>,
}

impl Hooks {
    /// Creates an empty hook configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hook applied to every finished class string.
    #[must_use]
    pub fn on_complete(mut self, hook: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Arc::new(hook));
        self
    }

    /// Sets the legacy-named completion hook.
    #[deprecated(note = "use `on_complete`")]
    #[must_use]
    pub fn cx_done(mut self, hook: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.cx_done = Some(Arc::new(hook));
        self
    }

    /// Returns `true` if no hook is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.on_complete.is_none() && self.cx_done.is_none()
    }

    /// Runs the configured hook over a finished string, legacy name first.
    pub(crate) fn apply(&self, joined: String) -> String {
        if let Some(hook) = &self.cx_done {
            return hook(&joined);
        }
        if let Some(hook) = &self.on_complete {
            return hook(&joined);
        }
        joined
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_complete", &self.on_complete.is_some())
            .field("cx_done", &self.cx_done.is_some())
            .finish()
    }
}

/// Explicit factory for hook-bound operations.
///
/// [`Styler::new`] is the zero-configuration convenience; generators built
/// through it behave identically to ones built with [`CultivarBuilder::new`]
/// directly.
///
/// # Example
///
/// ```rust
/// use cultivar_variants::{Hooks, Props, Styler};
///
/// let styler = Styler::with_hooks(
///     Hooks::new().on_complete(|classes| format!("tw:{classes}")),
/// );
///
/// assert_eq!(styler.cx("p-4 rounded"), "tw:p-4 rounded");
///
/// let chip = styler
///     .cultivar()
///     .base("chip")
///     .variant("tone", "info", "chip--info")
///     .default_variant("tone", "info")
///     .build();
/// assert_eq!(chip.classes(&Props::new()), "tw:chip chip--info");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Styler {
    hooks: Hooks,
}

impl Styler {
    /// Creates an unconfigured styler (no hooks).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a styler bound to the given hooks.
    #[must_use]
    pub fn with_hooks(hooks: Hooks) -> Self {
        Self { hooks }
    }

    /// Returns this styler's hook configuration.
    #[must_use]
    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// Joins arbitrary class values, then applies the configured hook.
    ///
    /// Flattening semantics are exactly [`cultivar_class::cx`]'s; only the
    /// hook step differs.
    #[must_use]
    pub fn cx(&self, value: impl Into<ClassValue>) -> String {
        self.hooks.apply(flatten(&value.into()))
    }

    /// Starts a generator builder bound to the configured hooks.
    #[must_use]
    pub fn cultivar(&self) -> CultivarBuilder {
        CultivarBuilder::with_hooks(self.hooks.clone())
    }

    /// Composes generators, binding the configured hooks to the composition.
    #[must_use]
    pub fn compose(&self, parts: impl IntoIterator<Item = Cultivar>) -> Composed {
        Composed::with_hooks(parts, self.hooks.clone())
    }
}
