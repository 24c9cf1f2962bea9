// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first flattening of class-value trees.
//!
//! This module provides [`flatten`], the single traversal every Cultivar
//! class string goes through, and [`cx`], the ad hoc joining entry point
//! built directly on it.

use alloc::string::{String, ToString};

use crate::value::ClassValue;

/// Flattens a class-value tree into a single space-joined string.
///
/// The traversal is depth-first and keeps, in encounter order:
///
/// - non-empty string leaves,
/// - numeric leaves (always, stringified, `0` included),
/// - map entries whose flag is `true`.
///
/// Boolean and null leaves are dropped. Repeated tokens are not
/// deduplicated. Flattening an already-flat token string returns it
/// unchanged.
///
/// ```rust
/// use cultivar_class::{ClassValue, flatten};
///
/// let value = ClassValue::from(vec![
///     ClassValue::from("a"),
///     ClassValue::Null,
///     ClassValue::from(vec![ClassValue::from("b"), ClassValue::Null]),
///     ClassValue::from("c"),
/// ]);
/// assert_eq!(flatten(&value), "a b c");
/// assert_eq!(flatten(&ClassValue::from("a b c")), "a b c");
/// ```
#[must_use]
pub fn flatten(value: &ClassValue) -> String {
    let mut out = String::new();
    flatten_into(value, &mut out);
    out
}

/// Flattens a class-value tree, appending tokens to `out`.
///
/// A separating space is written before the first appended token whenever
/// `out` is already non-empty, so several trees can be flattened into one
/// buffer back to back. Used by the variant engine's assembler to build the
/// final string in a single pass.
pub fn flatten_into(value: &ClassValue, out: &mut String) {
    match value {
        ClassValue::Null | ClassValue::Bool(_) => {}
        ClassValue::Str(s) => push_token(out, s),
        ClassValue::Num(n) => push_token(out, &n.to_string()),
        ClassValue::Array(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        ClassValue::Map(entries) => {
            for (name, on) in entries {
                if *on {
                    push_token(out, name);
                }
            }
        }
    }
}

/// Joins arbitrary class values into a single string.
///
/// This is the configuration-free entry point for callers who just need
/// conditional class joining, sharing [`flatten`]'s exact semantics.
///
/// ```rust
/// use cultivar_class::{ClassValue, cx};
///
/// assert_eq!(cx("foo"), "foo");
/// assert_eq!(cx(ClassValue::Null), "");
/// assert_eq!(
///     cx(ClassValue::from(vec![
///         ClassValue::from("foo"),
///         ClassValue::map([("bar", true), ("baz", false)]),
///     ])),
///     "foo bar"
/// );
/// ```
#[must_use]
pub fn cx(value: impl Into<ClassValue>) -> String {
    flatten(&value.into())
}

fn push_token(out: &mut String, token: &str) {
    if token.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(token);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn null_and_bool_leaves_are_dropped() {
        assert_eq!(cx(ClassValue::Null), "");
        assert_eq!(cx(ClassValue::Bool(false)), "");
        assert_eq!(cx(ClassValue::Bool(true)), "");
    }

    #[test]
    fn empty_strings_are_dropped() {
        assert_eq!(cx(""), "");
        assert_eq!(
            cx(ClassValue::from(vec![
                ClassValue::from(""),
                ClassValue::from("a"),
                ClassValue::from(""),
            ])),
            "a"
        );
    }

    #[test]
    fn numbers_are_always_kept() {
        assert_eq!(cx(0), "0");
        assert_eq!(cx(12), "12");
        assert_eq!(cx(ClassValue::from(vec![0.into(), "a".into()])), "0 a");
    }

    #[test]
    fn nulls_inside_arrays_are_skipped() {
        let value = ClassValue::from(vec![
            ClassValue::from("a"),
            ClassValue::Null,
            ClassValue::from(vec![ClassValue::from("b"), ClassValue::Null]),
            ClassValue::from("c"),
        ]);
        assert_eq!(flatten(&value), "a b c");
    }

    #[test]
    fn deep_nesting_preserves_depth_first_order() {
        let value = ClassValue::from(vec![
            ClassValue::from("foo"),
            ClassValue::from(vec![
                ClassValue::Null,
                ClassValue::from(vec![ClassValue::from("bar")]),
                ClassValue::from(vec![
                    ClassValue::Null,
                    ClassValue::from(vec![
                        ClassValue::from("baz"),
                        ClassValue::from("qux"),
                        ClassValue::from(vec![ClassValue::from(vec![ClassValue::from("corge")])]),
                    ]),
                ]),
            ]),
        ]);
        assert_eq!(flatten(&value), "foo bar baz qux corge");
    }

    #[test]
    fn map_keeps_only_true_flags() {
        let value = ClassValue::from(vec![
            ClassValue::from("foo"),
            ClassValue::map([("baz", false), ("bat", false), ("bar", true)]),
            ClassValue::from(vec![
                ClassValue::from("hello"),
                ClassValue::from(vec![ClassValue::from("world")]),
            ]),
            ClassValue::from("cya"),
        ]);
        assert_eq!(flatten(&value), "foo bar hello world cya");
    }

    #[test]
    fn repeated_tokens_are_not_deduplicated() {
        let value = ClassValue::from(["a", "b", "a"]);
        assert_eq!(flatten(&value), "a b a");
    }

    #[test]
    fn flattening_is_idempotent_on_flat_strings() {
        let flat = flatten(&ClassValue::from(["a", "b", "c"]));
        assert_eq!(flatten(&ClassValue::from(flat.clone())), flat);
    }

    #[test]
    fn flatten_into_separates_across_calls() {
        let mut out = String::new();
        flatten_into(&ClassValue::from("a"), &mut out);
        flatten_into(&ClassValue::Null, &mut out);
        flatten_into(&ClassValue::from("b"), &mut out);
        assert_eq!(out, "a b");
    }
}
