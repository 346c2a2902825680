// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Ledger;

const THEME_KEY: &str = "theme";

/// Current theme, defaulting to light when never set.
pub fn current_theme(ledger: &Ledger) -> Result<String> {
    Ok(ledger
        .get_setting(THEME_KEY)?
        .unwrap_or_else(|| "light".to_string()))
}

/// The single mutation entry point for the theme setting.
pub fn toggle_theme(ledger: &mut Ledger) -> Result<String> {
    let next = match current_theme(ledger)?.as_str() {
        "dark" => "light",
        _ => "dark",
    };
    ledger.set_setting(THEME_KEY, next)?;
    Ok(next.to_string())
}

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    if m.get_flag("toggle") {
        let theme = toggle_theme(ledger)?;
        println!("Theme set to {}", theme);
    } else {
        println!("{}", current_theme(ledger)?);
    }
    Ok(())
}
