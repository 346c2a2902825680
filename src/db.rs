// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

use crate::store::StoreError;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.costwise", "Costwise", "costwise"));

/// Default database name; `Ledger::open` accepts any name so tests and
/// alternate profiles can use their own files.
pub const DB_NAME: &str = "costwise";
pub const SCHEMA_VERSION: u32 = 1;

pub fn db_path(name: &str) -> Result<PathBuf, StoreError> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        StoreError::UnsupportedEnvironment("could not determine a platform data directory".into())
    })?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir)
        .map_err(|e| StoreError::UnsupportedEnvironment(format!("create data dir: {e}")))?;
    Ok(data_dir.join(format!("{name}.sqlite")))
}

/// Brings the database up to `version`. Idempotent: a database already
/// at `version` is left untouched; one ahead of it is refused rather
/// than silently downgraded. The `category` and `date` indexes are not
/// used by current query paths; they are kept for forward
/// compatibility with range and per-category queries.
pub(crate) fn upgrade_schema(conn: &mut Connection, version: u32) -> Result<(), StoreError> {
    let current: u32 = conn
        .query_row("PRAGMA user_version", [], |r| r.get(0))
        .map_err(|e| StoreError::Upgrade { to: version, message: e.to_string() })?;
    if current > version {
        return Err(StoreError::Upgrade {
            to: version,
            message: format!("database is at newer schema version {current}"),
        });
    }
    if current == version {
        return Ok(());
    }

    let tx = conn
        .transaction()
        .map_err(|e| StoreError::Upgrade { to: version, message: e.to_string() })?;
    tx.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS costs(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        date TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_costs_category ON costs(category);
    CREATE INDEX IF NOT EXISTS idx_costs_date ON costs(date);

    CREATE TABLE IF NOT EXISTS incomes(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        date TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_incomes_category ON incomes(category);
    CREATE INDEX IF NOT EXISTS idx_incomes_date ON incomes(date);
    "#,
    )
    .map_err(|e| StoreError::Upgrade { to: version, message: e.to_string() })?;
    tx.pragma_update(None, "user_version", version)
        .map_err(|e| StoreError::Upgrade { to: version, message: e.to_string() })?;
    tx.commit()
        .map_err(|e| StoreError::Upgrade { to: version, message: e.to_string() })?;
    Ok(())
}
