// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use costwise::db::SCHEMA_VERSION;
use costwise::models::{Collection, NewEntry};
use costwise::store::Ledger;
use costwise::{cli, commands::reports};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn setup() -> Ledger {
    let mut ledger = Ledger::open_in_memory(SCHEMA_VERSION).unwrap();
    for (amount, category, date) in [
        (100.0, "Food", "2024-01-15"),
        (40.0, "Food", "2024-07-02"),
        (800.0, "Rent", "2024-02-01"),
    ] {
        ledger
            .add(
                Collection::Costs,
                &NewEntry {
                    amount,
                    category: category.to_string(),
                    description: String::new(),
                    date: d(date),
                },
            )
            .unwrap();
    }
    ledger
        .add(
            Collection::Incomes,
            &NewEntry {
                amount: 500.0,
                category: "Monthly Salary".to_string(),
                description: String::new(),
                date: d("2024-01-10"),
            },
        )
        .unwrap();
    ledger
}

fn report_matches(args: &[&str]) -> (&'static str, clap::ArgMatches) {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args);
    if let Some(("report", report_m)) = matches.subcommand() {
        if let Some((name, sub)) = report_m.subcommand() {
            for candidate in ["monthly", "by-category", "net"] {
                if name == candidate {
                    return (candidate, sub.clone());
                }
            }
        }
        panic!("unexpected report subcommand");
    }
    panic!("no report subcommand");
}

#[test]
fn monthly_filters_and_sorts_newest_first() {
    let mut ledger = setup();
    let (_, sub) = report_matches(&["costwise", "report", "monthly", "--year", "2024"]);
    let entries = reports::monthly_entries(&mut ledger, &sub).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].date, d("2024-07-02"));
    assert_eq!(entries[2].date, d("2024-01-15"));

    let (_, sub) = report_matches(&["costwise", "report", "monthly", "--month", "1"]);
    let entries = reports::monthly_entries(&mut ledger, &sub).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, 100.0);
}

#[test]
fn by_category_groups_in_first_appearance_order() {
    let mut ledger = setup();
    let (_, sub) = report_matches(&["costwise", "report", "by-category"]);
    let totals = reports::category_totals(&mut ledger, &sub).unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].category, "Food");
    assert_eq!(totals[0].total, 140.0);
    assert_eq!(totals[1].category, "Rent");
    assert_eq!(totals[1].total, 800.0);
}

#[test]
fn by_category_respects_category_argument() {
    let mut ledger = setup();
    let (_, sub) = report_matches(&[
        "costwise", "report", "by-category", "--category", "Rent",
    ]);
    let totals = reports::category_totals(&mut ledger, &sub).unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].category, "Rent");
    assert_eq!(totals[0].total, 800.0);
}

#[test]
fn net_uses_injected_reference_date() {
    let mut ledger = setup();
    let (_, sub) = report_matches(&["costwise", "report", "net", "--as-of", "2024-06-01"]);
    let figures = reports::net_figures(&mut ledger, &sub).unwrap();
    // All time sees every entry.
    assert_eq!(figures.total_income, 500.0);
    assert_eq!(figures.total_expenses, 940.0);
    assert_eq!(figures.net_income, -440.0);
    // The bounded window stops after June, excluding the July cost.
    assert_eq!(figures.income_until_now, 500.0);
    assert_eq!(figures.expenses_until_now, 900.0);
    assert_eq!(figures.net_until_now, -400.0);
}

#[test]
fn net_rejects_invalid_reference_date() {
    let mut ledger = setup();
    let (_, sub) = report_matches(&["costwise", "report", "net", "--as-of", "June 2024"]);
    assert!(reports::net_figures(&mut ledger, &sub).is_err());
}

#[test]
fn report_handlers_run_end_to_end() {
    let mut ledger = setup();
    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["costwise", "report", "net", "--as-of", "2024-06-01", "--json"]);
    if let Some(("report", sub)) = matches.subcommand() {
        reports::handle(&mut ledger, sub).unwrap();
    } else {
        panic!("no report subcommand");
    }
}
