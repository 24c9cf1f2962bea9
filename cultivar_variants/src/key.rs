// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized axis-value keys.
//!
//! This module provides [`VariantKey`], the string lookup form every axis
//! value is reduced to before it touches a schema.

use alloc::string::{String, ToString};
use core::fmt;

/// The normalized lookup form of an axis value.
///
/// Axis value maps are keyed by string regardless of the type a caller
/// supplies, so booleans normalize to the literal strings `"true"` and
/// `"false"`, and integers to their decimal form. The normalization happens
/// in the `From` conversions; once a `VariantKey` exists there is no
/// truthiness left to misjudge: `false`, `0`, and `""` are ordinary keys.
///
/// # Example
///
/// ```rust
/// use cultivar_variants::VariantKey;
///
/// assert_eq!(VariantKey::from(true).as_str(), "true");
/// assert_eq!(VariantKey::from(0).as_str(), "0");
/// assert_eq!(VariantKey::from("primary").as_str(), "primary");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariantKey(String);

impl VariantKey {
    /// Creates a key from anything convertible into one.
    #[must_use]
    pub fn new(key: impl Into<Self>) -> Self {
        key.into()
    }

    /// Returns the normalized key as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VariantKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VariantKey {
    fn from(key: &str) -> Self {
        Self(String::from(key))
    }
}

impl From<String> for VariantKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<bool> for VariantKey {
    fn from(key: bool) -> Self {
        Self(String::from(if key { "true" } else { "false" }))
    }
}

impl From<i64> for VariantKey {
    fn from(key: i64) -> Self {
        Self(key.to_string())
    }
}

impl From<i32> for VariantKey {
    fn from(key: i32) -> Self {
        Self::from(i64::from(key))
    }
}

impl From<u32> for VariantKey {
    fn from(key: u32) -> Self {
        Self::from(i64::from(key))
    }
}

impl PartialEq<&str> for VariantKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
