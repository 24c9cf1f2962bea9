// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cultivar Variants: variant-driven CSS class-name resolution.
//!
//! This crate turns a declarative description of style variants (named
//! axes of mutually-exclusive choices, per-axis defaults, and compound
//! rules for combinations) into a single deterministic class string. It
//! builds on `cultivar_class` for flattening, so ad hoc joining and variant
//! resolution share one set of semantics.
//!
//! ## Core Concepts
//!
//! ### Generators
//!
//! A [`Cultivar`] is an immutable generator built once and invoked many
//! times. Axes render in declaration order; a caller selects keys per axis
//! through [`Props`]:
//!
//! ```rust
//! use cultivar_variants::{CultivarBuilder, Props};
//!
//! let button = CultivarBuilder::new()
//!     .base("font-semibold border rounded")
//!     .variant("intent", "primary", "bg-blue-500 text-white")
//!     .variant("intent", "secondary", "bg-white text-gray-800")
//!     .variant("size", "small", "text-sm py-1 px-2")
//!     .variant("size", "medium", "text-base py-2 px-4")
//!     .default_variant("intent", "primary")
//!     .default_variant("size", "medium")
//!     .build();
//!
//! // Defaults fill in whatever the caller leaves out.
//! assert_eq!(
//!     button.classes(&Props::new().set("intent", "secondary")),
//!     "font-semibold border rounded bg-white text-gray-800 text-base py-2 px-4"
//! );
//! ```
//!
//! Selections are explicit three-state values: a key, the
//! [`unset`](Props::unset) sentinel, or nothing at all. Falsy-but-valid
//! keys (`false`, `0`) are ordinary selections; there is no truthiness
//! anywhere in resolution, which is the classic correctness trap in
//! engines of this shape.
//!
//! ### Compound rules
//!
//! A [`CompoundRule`] appends extra classes when a combination of resolved
//! axis values holds; every matching rule contributes, in declaration
//! order:
//!
//! ```rust
//! use cultivar_variants::{CompoundRule, CultivarBuilder, Props};
//!
//! let button = CultivarBuilder::new()
//!     .variant("intent", "primary", "P")
//!     .variant("size", "medium", "md")
//!     .default_variant("intent", "primary")
//!     .default_variant("size", "medium")
//!     .compound(
//!         CompoundRule::new()
//!             .when("intent", "primary")
//!             .when("size", "medium")
//!             .class("PM"),
//!     )
//!     .build();
//!
//! assert_eq!(button.classes(&Props::new()), "P md PM");
//! ```
//!
//! ### Composition and configuration
//!
//! [`Composed`] concatenates several generators behind one call, and
//! [`Styler`] binds a post-processing hook to all three operations without
//! any process-wide state.
//!
//! ## Output order
//!
//! Every result is assembled as: base → axis fragments (declaration order)
//! → compound fragments (rule order) → ad hoc `class` → ad hoc
//! `class_name`, then the hook (if any) runs once.
//!
//! ## Totality
//!
//! Resolution never fails: unknown axes, unknown keys, and missing
//! configuration degrade to "no contribution". These operations sit on
//! rendering hot paths where a panic would be far worse than a slightly
//! bare element.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod compose;
mod compound;
mod cultivar;
mod key;
mod props;
mod schema;
mod styler;

pub use compose::Composed;
pub use compound::CompoundRule;
pub use cultivar::{Cultivar, CultivarBuilder};
pub use key::VariantKey;
pub use props::{Props, Selection};
pub use schema::{AxisSchema, Schema};
pub use styler::{HookFn, Hooks, Styler};
