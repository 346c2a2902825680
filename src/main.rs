// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use costwise::models::Collection;
use costwise::store::Ledger;
use costwise::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut ledger = Ledger::open(db::DB_NAME, db::SCHEMA_VERSION)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!(
                "Database initialized at {}",
                db::db_path(db::DB_NAME)?.display()
            );
        }
        Some(("cost", sub)) => commands::entries::handle(&mut ledger, Collection::Costs, sub)?,
        Some(("income", sub)) => commands::entries::handle(&mut ledger, Collection::Incomes, sub)?,
        Some(("report", sub)) => commands::reports::handle(&mut ledger, sub)?,
        Some(("theme", sub)) => commands::theme::handle(&mut ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
