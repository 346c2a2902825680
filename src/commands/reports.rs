// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::{Collection, EntryFilter};
use crate::report;
use crate::store::Ledger;
use crate::utils::{maybe_print_json, parse_date, pretty_table};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => monthly(ledger, sub)?,
        Some(("by-category", sub)) => by_category(ledger, sub)?,
        Some(("net", sub)) => net(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn period_filter(sub: &clap::ArgMatches) -> EntryFilter {
    EntryFilter {
        year: sub.get_one::<i32>("year").copied(),
        month: sub.get_one::<u32>("month").copied(),
        // `monthly` and `net` define no category argument.
        category: sub
            .try_get_one::<String>("category")
            .ok()
            .flatten()
            .cloned(),
    }
}

/// Filtered costs, newest first, for the monthly report. Used by the
/// handler and by the integration tests.
pub fn monthly_entries(
    ledger: &mut Ledger,
    sub: &clap::ArgMatches,
) -> Result<Vec<crate::models::Entry>> {
    let all = ledger.get_all(Collection::Costs)?;
    let mut entries = report::filter_entries(&all, &period_filter(sub));
    report::sort_by_date_desc(&mut entries);
    Ok(entries)
}

/// Cost totals grouped by category, first-appearance order.
pub fn category_totals(
    ledger: &mut Ledger,
    sub: &clap::ArgMatches,
) -> Result<Vec<crate::models::CategoryTotal>> {
    let all = ledger.get_all(Collection::Costs)?;
    let entries = report::filter_entries(&all, &period_filter(sub));
    Ok(report::sum_by_category(&entries))
}

/// Net income figures as of `--as-of`, defaulting to today.
pub fn net_figures(
    ledger: &mut Ledger,
    sub: &clap::ArgMatches,
) -> Result<crate::models::NetIncomeReport> {
    let as_of: NaiveDate = match sub.get_one::<String>("as-of") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let costs = ledger.get_all(Collection::Costs)?;
    let incomes = ledger.get_all(Collection::Incomes)?;
    Ok(report::net_income(&costs, &incomes, as_of))
}

fn monthly(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = monthly_entries(ledger, sub)?;
    let total = report::total_amount(&entries);
    if !maybe_print_json(json_flag, jsonl_flag, &entries)? {
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|e| {
                vec![
                    e.date.to_string(),
                    e.category.clone(),
                    format!("{:.2}", e.amount),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "Category", "Amount"], rows));
        println!("Total Expenses: {:.2}", total);
    }
    Ok(())
}

fn by_category(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let totals = category_totals(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let rows: Vec<Vec<String>> = totals
            .iter()
            .map(|t| vec![t.category.clone(), format!("{:.2}", t.total)])
            .collect();
        println!("{}", pretty_table(&["Category", "Total"], rows));
    }
    Ok(())
}

fn net(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let figures = net_figures(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &figures)? {
        let rows = vec![
            vec![
                "All time".to_string(),
                format!("{:.2}", figures.total_income),
                format!("{:.2}", figures.total_expenses),
                format!("{:.2}", figures.net_income),
            ],
            vec![
                "Year to date".to_string(),
                format!("{:.2}", figures.income_until_now),
                format!("{:.2}", figures.expenses_until_now),
                format!("{:.2}", figures.net_until_now),
            ],
        ];
        println!(
            "{}",
            pretty_table(&["Window", "Income", "Expenses", "Net"], rows)
        );
    }
    Ok(())
}
