// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{Collection, Entry, EntryFilter, NewEntry};
use crate::report;
use crate::store::Ledger;
use crate::utils::{
    maybe_print_json, parse_amount, parse_date, pretty_table, validate_category,
    validate_description,
};

/// Shared handler for the `cost` and `income` command trees; the two
/// collections have identical surfaces apart from their category sets.
pub fn handle(ledger: &mut Ledger, collection: Collection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, collection, sub)?,
        Some(("list", sub)) => list(ledger, collection, sub)?,
        Some(("update", sub)) => update(ledger, collection, sub)?,
        Some(("delete", sub)) => delete(ledger, collection, sub)?,
        _ => {}
    }
    Ok(())
}

/// Validates the add/update arguments into a record shape. Rejection
/// happens here, before any store call, so a bad field never causes a
/// partial write.
fn parse_entry(collection: Collection, sub: &clap::ArgMatches) -> Result<NewEntry> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    validate_category(collection, &category)?;
    let description = sub.get_one::<String>("description").unwrap().to_string();
    validate_description(&description)?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    Ok(NewEntry {
        amount,
        category,
        description,
        date,
    })
}

fn add(ledger: &mut Ledger, collection: Collection, sub: &clap::ArgMatches) -> Result<()> {
    let entry = parse_entry(collection, sub)?;
    let id = ledger.add(collection, &entry)?;
    println!(
        "Recorded {:.2} ({}) on {} in {} [id {}]",
        entry.amount,
        entry.category,
        entry.date,
        collection.table(),
        id
    );
    Ok(())
}

fn list(ledger: &mut Ledger, collection: Collection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = query_entries(ledger, collection, sub)?;
    let total = report::total_amount(&entries);
    if !maybe_print_json(json_flag, jsonl_flag, &entries)? {
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.date.to_string(),
                    e.category.clone(),
                    format!("{:.2}", e.amount),
                    e.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Category", "Amount", "Description"], rows)
        );
        println!("Total: {:.2}", total);
    }
    Ok(())
}

/// Full reload of the collection, then the filter/sort pipeline. Used
/// by `list` and by the integration tests.
pub fn query_entries(
    ledger: &mut Ledger,
    collection: Collection,
    sub: &clap::ArgMatches,
) -> Result<Vec<Entry>> {
    let filter = EntryFilter {
        year: sub.get_one::<i32>("year").copied(),
        month: sub.get_one::<u32>("month").copied(),
        category: sub.get_one::<String>("category").cloned(),
    };
    let all = ledger.get_all(collection)?;
    let mut entries = report::filter_entries(&all, &filter);
    report::sort_by_date_desc(&mut entries);
    Ok(entries)
}

fn update(ledger: &mut Ledger, collection: Collection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let entry = parse_entry(collection, sub)?;
    ledger.update(collection, id, &entry)?;
    println!("Saved {} entry {}", collection.table(), id);
    Ok(())
}

fn delete(ledger: &mut Ledger, collection: Collection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    ledger.delete(collection, id)?;
    println!("Deleted {} entry {}", collection.table(), id);
    Ok(())
}
