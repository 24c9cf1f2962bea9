// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hooks and composition.
//!
//! Bind an `on_complete` hook through a `Styler` and compose two
//! generators into one card component.
//!
//! Run:
//! - `cargo run -p cultivar_demos --example hooks_compose`

use cultivar_variants::{Hooks, Props, Styler};

fn main() {
    // Every finished string passes through the hook exactly once.
    let styler = Styler::with_hooks(Hooks::new().on_complete(|classes| {
        println!("(hook saw: {classes:?})");
        classes.to_string()
    }));

    let surface = styler
        .cultivar()
        .variant("shadow", "sm", "shadow-sm")
        .variant("shadow", "md", "shadow-md")
        .default_variant("shadow", "sm")
        .build();

    let stack = styler
        .cultivar()
        .variant("gap", 1, "gap-1")
        .variant("gap", 2, "gap-2")
        .variant("gap", 3, "gap-3")
        .build();

    let card = styler.compose([surface, stack]);

    println!("card:      {}", card.classes(&Props::new()));
    println!(
        "roomy:     {}",
        card.classes(&Props::new().set("shadow", "md").set("gap", 3))
    );
    println!(
        "with edge: {}",
        card.classes(&Props::new().set("gap", 2).class("overflow-hidden"))
    );

    // Ad hoc joining shares the same flattening and hook.
    println!("cx:        {}", styler.cx("p-4 rounded-lg"));
}
