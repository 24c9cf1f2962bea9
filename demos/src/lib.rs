// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared generators for the Cultivar demos.

use cultivar_class::ClassValue;
use cultivar_variants::{CompoundRule, Cultivar, CultivarBuilder};

/// A button generator in the classic component-library shape: intent and
/// size axes with defaults, plus a compound rule for the default pairing.
pub fn button() -> Cultivar {
    CultivarBuilder::new()
        .base("button font-semibold border rounded")
        .variant(
            "intent",
            "primary",
            "button--primary bg-blue-500 text-white border-transparent hover:bg-blue-600",
        )
        .variant(
            "intent",
            "secondary",
            "button--secondary bg-white text-gray-800 border-gray-400 hover:bg-gray-100",
        )
        .variant(
            "intent",
            "danger",
            ClassValue::from(vec![
                ClassValue::from("button--danger bg-red-500"),
                ClassValue::from(vec![ClassValue::from("text-white border-transparent")]),
                ClassValue::from("hover:bg-red-600"),
            ]),
        )
        .variant("size", "small", "button--small text-sm py-1 px-2")
        .variant("size", "medium", "button--medium text-base py-2 px-4")
        .default_variant("intent", "primary")
        .default_variant("size", "medium")
        .compound(
            CompoundRule::new()
                .when("intent", "primary")
                .when("size", "medium")
                .class("uppercase"),
        )
        .build()
}
