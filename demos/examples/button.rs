// Copyright 2026 the Cultivar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button resolution basics.
//!
//! Resolve a button generator across the prop shapes a component would see.
//!
//! Run:
//! - `cargo run -p cultivar_demos --example button`

use cultivar_demos::button;
use cultivar_variants::Props;

fn main() {
    let button = button();

    println!("defaults:   {}", button.classes(&Props::new()));
    println!(
        "secondary:  {}",
        button.classes(&Props::new().set("intent", "secondary"))
    );
    println!(
        "small:      {}",
        button.classes(&Props::new().set("size", "small"))
    );
    println!(
        "no intent:  {}",
        button.classes(&Props::new().unset("intent"))
    );
    println!(
        "with adhoc: {}",
        button.classes(&Props::new().set("intent", "danger").class("m-4"))
    );

    println!();
    println!("schema:");
    for axis in button.schema().axes() {
        let keys: Vec<&str> = axis.values().iter().map(|k| k.as_str()).collect();
        match axis.default_value() {
            Some(default) => {
                println!("  {}: {:?} (default {})", axis.name(), keys, default);
            }
            None => println!("  {}: {:?}", axis.name(), keys),
        }
    }
}
