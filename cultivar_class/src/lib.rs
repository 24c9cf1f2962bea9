// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cultivar Class: class-value trees and space-joined flattening.
//!
//! This crate is the foundation of the Cultivar workspace. It provides
//! [`ClassValue`], an owned tree of CSS class tokens, and [`flatten`], which
//! collapses such a tree into a single space-joined string. The variant
//! resolution engine in `cultivar_variants` builds every result through this
//! same traversal, so ad hoc joining and variant resolution can never drift
//! apart semantically.
//!
//! ## Core Concepts
//!
//! ### Class values
//!
//! A [`ClassValue`] is a string, a number, a boolean, null, a nested array of
//! class values, or a map from class name to an on/off flag. Conversions
//! exist from the obvious Rust types, so most call sites never name the enum:
//!
//! ```rust
//! use cultivar_class::{ClassValue, cx};
//!
//! assert_eq!(cx("font-semibold border"), "font-semibold border");
//! assert_eq!(cx(ClassValue::from(vec![
//!     ClassValue::from("rounded"),
//!     ClassValue::Null,
//!     ClassValue::from("shadow-md"),
//! ])), "rounded shadow-md");
//! ```
//!
//! ### Flattening
//!
//! [`flatten`] walks the tree depth-first and keeps:
//!
//! - string leaves that are non-empty,
//! - numeric leaves, always, stringified (`0` included),
//! - map entries whose flag is `true`.
//!
//! Boolean and null leaves are always dropped. Tokens are joined with a
//! single space in traversal order and never deduplicated; when the same
//! class appears twice, the CSS cascade decides, not this crate.
//!
//! ```rust
//! use cultivar_class::{ClassValue, flatten};
//!
//! let value = ClassValue::from(vec![
//!     ClassValue::from("a"),
//!     ClassValue::map([("hidden", false), ("block", true)]),
//!     ClassValue::from(vec![ClassValue::from("b"), ClassValue::Bool(true)]),
//!     ClassValue::from(0),
//! ]);
//! assert_eq!(flatten(&value), "a block b 0");
//! ```
//!
//! Flattening is total: it never panics and has no side effects.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod flatten;
mod value;

pub use flatten::{cx, flatten, flatten_into};
pub use value::ClassValue;
