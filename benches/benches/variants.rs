// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `cultivar_variants` resolution.
//!
//! The workload is a realistic button generator: four axes, nested
//! fragments, five compound rules, defaults on every axis. Each iteration
//! resolves the same six prop shapes a component library would hit most.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cultivar_class::ClassValue;
use cultivar_variants::{Composed, CompoundRule, Cultivar, CultivarBuilder, Props};

fn button() -> Cultivar {
    CultivarBuilder::new()
        .base("button font-semibold border rounded")
        .variant("intent", "unset", ClassValue::Null)
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
            "warning",
            "button--warning bg-yellow-500 border-transparent hover:bg-yellow-600",
        )
        .variant(
            "intent",
            "danger",
            ClassValue::from(vec![
                ClassValue::from("button--danger"),
                ClassValue::from(vec![
                    ClassValue::from("bg-red-500"),
                    ClassValue::map([("baz", false), ("bat", false)]),
                    ClassValue::from(vec![
                        ClassValue::from("text-white"),
                        ClassValue::from(vec![ClassValue::from("border-transparent")]),
                    ]),
                ]),
                ClassValue::from("hover:bg-red-600"),
            ]),
        )
        .variant("disabled", true, "button--disabled opacity-50 cursor-not-allowed")
        .variant("disabled", false, "button--enabled cursor-pointer")
        .variant("size", "small", "button--small text-sm py-1 px-2")
        .variant("size", "medium", "button--medium text-base py-2 px-4")
        .variant("size", "large", "button--large text-lg py-2.5 px-4")
        .variant("m", 0, "m-0")
        .variant("m", 1, "m-1")
        .default_variant("m", 0)
        .default_variant("disabled", false)
        .default_variant("intent", "primary")
        .default_variant("size", "medium")
        .compound(
            CompoundRule::new()
                .when("intent", "primary")
                .when("size", "medium")
                .class_name("button--primary-medium uppercase"),
        )
        .compound(
            CompoundRule::new()
                .when("intent", "warning")
                .when("disabled", false)
                .class_name("button--warning-enabled text-gray-800"),
        )
        .compound(
            CompoundRule::new()
                .when("intent", "warning")
                .when("disabled", true)
                .class_name(ClassValue::from(vec![
                    ClassValue::from("button--warning-disabled"),
                    ClassValue::from(vec![ClassValue::from("text-black")]),
                ])),
        )
        .compound(
            CompoundRule::new()
                .when_any("intent", ["warning", "danger"])
                .class_name("button--warning-danger !border-red-500"),
        )
        .compound(
            CompoundRule::new()
                .when_any("intent", ["warning", "danger"])
                .when("size", "medium")
                .class_name("button--warning-danger-medium"),
        )
        .build()
}

fn resolve_six_shapes(button: &Cultivar) {
    black_box(button.classes(&Props::new()));
    black_box(button.classes(&Props::new().set("intent", "primary").set("disabled", true)));
    black_box(button.classes(&Props::new().set("intent", "primary").set("size", "medium")));
    black_box(button.classes(
        &Props::new()
            .set("intent", "warning")
            .set("size", "medium")
            .set("disabled", true),
    ));
    black_box(button.classes(&Props::new().set("size", "small")));
    black_box(button.classes(&Props::new().set("size", "large").unset("intent")));
}

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("variants");

    let shared = button();
    group.bench_function("resolve", |b| {
        b.iter(|| resolve_six_shapes(black_box(&shared)));
    });

    group.bench_function("build_and_resolve", |b| {
        b.iter(|| {
            let fresh = button();
            resolve_six_shapes(black_box(&fresh));
        });
    });

    let composed = Composed::new([button(), button()]);
    group.bench_function("composed_resolve", |b| {
        b.iter(|| black_box(composed.classes(&Props::new().set("size", "small"))));
    });

    group.finish();
}

criterion_group!(benches, bench_variants);
criterion_main!(benches);
