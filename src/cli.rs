// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(value_parser!(i64))
        .help("Record id")
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn entry_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("amount")
            .long("amount")
            .required(true)
            .help("Non-negative amount"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .required(true)
            .help("Category from the collection's fixed set"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .default_value("")
            .help("Free text, at most 15 characters"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .required(true)
            .help("Entry date, YYYY-MM-DD"),
    )
}

fn period_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("year")
            .long("year")
            .value_parser(value_parser!(i32))
            .help("Restrict to a calendar year"),
    )
    .arg(
        Arg::new("month")
            .long("month")
            .value_parser(value_parser!(u32).range(1..=12))
            .help("Restrict to a month (1-12)"),
    )
}

fn entry_commands(name: &'static str, noun: &'static str) -> Command {
    Command::new(name)
        .about(format!("Record and manage {noun} entries"))
        .subcommand(entry_args(
            Command::new("add").about(format!("Add a {noun} entry")),
        ))
        .subcommand(json_flags(period_args(
            Command::new("list")
                .about(format!("List {noun} entries, newest first"))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .help("Restrict to one category"),
                ),
        )))
        .subcommand(entry_args(
            Command::new("update")
                .about(format!(
                    "Replace a {noun} entry by id (creates it if missing)"
                ))
                .arg(id_arg()),
        ))
        .subcommand(
            Command::new("delete")
                .about(format!("Delete a {noun} entry by id"))
                .arg(id_arg()),
        )
}

pub fn build_cli() -> Command {
    Command::new("costwise")
        .about("Local-first personal cost and income tracker")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Initialize the database and print its location"))
        .subcommand(entry_commands("cost", "cost"))
        .subcommand(entry_commands("income", "income"))
        .subcommand(
            Command::new("report")
                .about("Aggregate views over the ledger")
                .subcommand(json_flags(period_args(
                    Command::new("monthly").about("Filtered cost table with total expenses"),
                )))
                .subcommand(json_flags(period_args(
                    Command::new("by-category")
                        .about("Cost totals grouped by category")
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Restrict to one category"),
                        ),
                )))
                .subcommand(json_flags(
                    Command::new("net")
                        .about("All-time and year-to-date income/expense/net totals")
                        .arg(
                            Arg::new("as-of")
                                .long("as-of")
                                .help("Reference date, YYYY-MM-DD (defaults to today)"),
                        ),
                )),
        )
        .subcommand(
            Command::new("theme")
                .about("Show or toggle the light/dark theme")
                .arg(
                    Arg::new("toggle")
                        .long("toggle")
                        .action(ArgAction::SetTrue)
                        .help("Flip between light and dark"),
                ),
        )
}
