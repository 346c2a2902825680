// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure filtering and aggregation over in-memory record sets. No I/O;
//! inputs are never mutated except where a sort is asked for
//! explicitly. Sums stay unrounded; rounding to two decimals happens
//! only at display time.

use chrono::{Datelike, NaiveDate};

use crate::models::{CategoryTotal, Entry, EntryFilter, NetIncomeReport};

/// Returns the subsequence of `entries` matching every predicate
/// present in `filter` (year, 1-indexed month, category). Input order
/// is preserved.
pub fn filter_entries(entries: &[Entry], filter: &EntryFilter) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| {
            filter.year.is_none_or(|y| e.date.year() == y)
                && filter.month.is_none_or(|m| e.date.month() == m)
                && filter.category.as_deref().is_none_or(|c| e.category == c)
        })
        .cloned()
        .collect()
}

/// Most recent date first. Stable: entries on the same date keep
/// their original relative order across re-sorts.
pub fn sort_by_date_desc(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Groups by category, summing amounts. Output order is the order of
/// first appearance in the input, not alphabetical, so charts render
/// deterministically for identical input order.
pub fn sum_by_category(entries: &[Entry]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for e in entries {
        match totals.iter_mut().find(|t| t.category == e.category) {
            Some(t) => t.total += e.amount,
            None => totals.push(CategoryTotal {
                category: e.category.clone(),
                total: e.amount,
            }),
        }
    }
    totals
}

pub fn total_amount(entries: &[Entry]) -> f64 {
    entries.iter().map(|e| e.amount).sum()
}

/// All-time and year-to-date income/expense/net totals. The bounded
/// window is the calendar year of `as_of`, through its month
/// inclusive. `as_of` is injectable so reports are deterministic
/// under test; the CLI passes today.
pub fn net_income(costs: &[Entry], incomes: &[Entry], as_of: NaiveDate) -> NetIncomeReport {
    let in_window =
        |e: &&Entry| e.date.year() == as_of.year() && e.date.month() <= as_of.month();

    let total_income = total_amount(incomes);
    let total_expenses = total_amount(costs);
    let income_until_now: f64 = incomes.iter().filter(in_window).map(|e| e.amount).sum();
    let expenses_until_now: f64 = costs.iter().filter(in_window).map(|e| e.amount).sum();

    NetIncomeReport {
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
        income_until_now,
        expenses_until_now,
        net_until_now: income_until_now - expenses_until_now,
    }
}
