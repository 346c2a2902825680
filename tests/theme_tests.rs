// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use costwise::commands::theme::{current_theme, toggle_theme};
use costwise::db::SCHEMA_VERSION;
use costwise::store::Ledger;

#[test]
fn theme_defaults_to_light() {
    let ledger = Ledger::open_in_memory(SCHEMA_VERSION).unwrap();
    assert_eq!(current_theme(&ledger).unwrap(), "light");
}

#[test]
fn toggle_flips_and_persists() {
    let mut ledger = Ledger::open_in_memory(SCHEMA_VERSION).unwrap();
    assert_eq!(toggle_theme(&mut ledger).unwrap(), "dark");
    assert_eq!(current_theme(&ledger).unwrap(), "dark");
    assert_eq!(toggle_theme(&mut ledger).unwrap(), "light");
    assert_eq!(current_theme(&ledger).unwrap(), "light");
}
