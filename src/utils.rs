// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};

use crate::models::Collection;

pub const MAX_DESCRIPTION_LEN: usize = 15;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Amounts are non-negative finite floats; anything else is rejected
/// before a store call is attempted.
pub fn parse_amount(s: &str) -> Result<f64> {
    let v: f64 = s
        .parse()
        .with_context(|| format!("Invalid amount '{}'", s))?;
    if !v.is_finite() || v < 0.0 {
        bail!("Amount must be a non-negative number, got '{}'", s);
    }
    Ok(v)
}

pub fn validate_description(s: &str) -> Result<()> {
    if s.chars().count() > MAX_DESCRIPTION_LEN {
        bail!("Description cannot exceed {} characters", MAX_DESCRIPTION_LEN);
    }
    Ok(())
}

pub fn validate_category(collection: Collection, category: &str) -> Result<()> {
    if !collection.categories().contains(&category) {
        bail!(
            "Unknown {} category '{}' (expected one of: {})",
            collection.table(),
            category,
            collection.categories().join(", ")
        );
    }
    Ok(())
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
