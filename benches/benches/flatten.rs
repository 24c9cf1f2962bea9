// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `cultivar_class` flattening.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cultivar_class::{ClassValue, flatten};

/// A flat run of plain tokens, the common fast path.
fn flat_tokens() -> ClassValue {
    ClassValue::from([
        "font-semibold",
        "border",
        "rounded",
        "bg-blue-500",
        "text-white",
        "hover:bg-blue-600",
    ])
}

/// A tree mixing nesting depths, maps, and dropped leaves.
fn nested_tree() -> ClassValue {
    ClassValue::from(vec![
        ClassValue::from("button--danger"),
        ClassValue::from(vec![
            ClassValue::from("bg-red-500"),
            ClassValue::map([("baz", false), ("bat", false), ("ring", true)]),
            ClassValue::from(vec![
                ClassValue::from("text-white"),
                ClassValue::from(vec![ClassValue::from("border-transparent")]),
            ]),
        ]),
        ClassValue::Null,
        ClassValue::Bool(true),
        ClassValue::from(0),
        ClassValue::from("hover:bg-red-600"),
    ])
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    let flat = flat_tokens();
    group.bench_function("flat_tokens", |b| {
        b.iter(|| flatten(black_box(&flat)));
    });

    let nested = nested_tree();
    group.bench_function("nested_tree", |b| {
        b.iter(|| flatten(black_box(&nested)));
    });

    group.finish();
}

criterion_group!(benches, bench_flatten);
criterion_main!(benches);
