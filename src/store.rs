// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::{Connection, params};
use thiserror::Error;

use crate::db;
use crate::models::{Collection, Entry, NewEntry};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage unavailable: {0}")]
    UnsupportedEnvironment(String),
    #[error("failed to read from '{collection}': {source}")]
    Read {
        collection: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    #[error("failed to write to '{collection}': {source}")]
    Write {
        collection: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    #[error("schema upgrade to v{to} failed: {message}")]
    Upgrade { to: u32, message: String },
}

fn read_err(collection: &'static str, source: rusqlite::Error) -> StoreError {
    StoreError::Read { collection, source }
}

fn write_err(collection: &'static str, source: rusqlite::Error) -> StoreError {
    StoreError::Write { collection, source }
}

/// Durable CRUD persistence for the two record collections. Every
/// operation runs in its own transaction scoped to one collection;
/// there is no multi-collection atomicity.
#[derive(Debug)]
pub struct Ledger {
    conn: Connection,
}

impl Ledger {
    /// Opens (and if necessary initializes or upgrades) the named
    /// ledger database in the platform data directory.
    pub fn open(name: &str, version: u32) -> Result<Self, StoreError> {
        let path = db::db_path(name)?;
        Self::open_at(&path, version)
    }

    /// Opens the ledger database at an explicit path.
    pub fn open_at(path: &std::path::Path, version: u32) -> Result<Self, StoreError> {
        let mut conn = Connection::open(path)
            .map_err(|e| StoreError::UnsupportedEnvironment(e.to_string()))?;
        db::upgrade_schema(&mut conn, version)?;
        Ok(Ledger { conn })
    }

    /// In-memory ledger with the same schema; nothing survives drop.
    pub fn open_in_memory(version: u32) -> Result<Self, StoreError> {
        let mut conn = Connection::open_in_memory()
            .map_err(|e| StoreError::UnsupportedEnvironment(e.to_string()))?;
        db::upgrade_schema(&mut conn, version)?;
        Ok(Ledger { conn })
    }

    /// Inserts a new record and returns the store-assigned id. Ids are
    /// monotonically increasing and never reused after deletion
    /// (SQLite AUTOINCREMENT).
    pub fn add(&mut self, collection: Collection, entry: &NewEntry) -> Result<i64, StoreError> {
        let table = collection.table();
        let tx = self.conn.transaction().map_err(|e| write_err(table, e))?;
        tx.execute(
            &format!("INSERT INTO {table}(amount, category, description, date) VALUES (?1, ?2, ?3, ?4)"),
            params![
                entry.amount.to_string(),
                entry.category,
                entry.description,
                entry.date.to_string()
            ],
        )
        .map_err(|e| write_err(table, e))?;
        let id = tx.last_insert_rowid();
        tx.commit().map_err(|e| write_err(table, e))?;
        Ok(id)
    }

    /// Every record in the collection, unordered; call sites sort.
    /// An empty collection yields an empty vec, not an error. Amounts
    /// are re-parsed to a float on every read regardless of how they
    /// were stored; an unparseable value reads as 0.
    pub fn get_all(&mut self, collection: Collection) -> Result<Vec<Entry>, StoreError> {
        let table = collection.table();
        let tx = self.conn.transaction().map_err(|e| read_err(table, e))?;
        let mut entries = Vec::new();
        {
            let mut stmt = tx
                .prepare(&format!(
                    "SELECT id, amount, category, description, date FROM {table}"
                ))
                .map_err(|e| read_err(table, e))?;
            let mut rows = stmt.query([]).map_err(|e| read_err(table, e))?;
            while let Some(r) = rows.next().map_err(|e| read_err(table, e))? {
                let id: i64 = r.get(0).map_err(|e| read_err(table, e))?;
                let amount: String = r.get(1).map_err(|e| read_err(table, e))?;
                let category: String = r.get(2).map_err(|e| read_err(table, e))?;
                let description: String = r.get(3).map_err(|e| read_err(table, e))?;
                let date: NaiveDate = r.get(4).map_err(|e| read_err(table, e))?;
                entries.push(Entry {
                    id,
                    amount: amount.parse::<f64>().unwrap_or(0.0),
                    category,
                    description,
                    date,
                });
            }
        }
        tx.commit().map_err(|e| read_err(table, e))?;
        Ok(entries)
    }

    /// Replaces the entire record at `id`; the id itself is immutable
    /// and re-attached. Upsert on purpose: a missing id creates the
    /// record with that id, with no existence check beforehand.
    pub fn update(
        &mut self,
        collection: Collection,
        id: i64,
        entry: &NewEntry,
    ) -> Result<(), StoreError> {
        let table = collection.table();
        let tx = self.conn.transaction().map_err(|e| write_err(table, e))?;
        tx.execute(
            &format!(
                "INSERT INTO {table}(id, amount, category, description, date)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                     amount=excluded.amount,
                     category=excluded.category,
                     description=excluded.description,
                     date=excluded.date"
            ),
            params![
                id,
                entry.amount.to_string(),
                entry.category,
                entry.description,
                entry.date.to_string()
            ],
        )
        .map_err(|e| write_err(table, e))?;
        tx.commit().map_err(|e| write_err(table, e))?;
        Ok(())
    }

    /// Removes the record at `id`. Deleting a missing id is a no-op.
    pub fn delete(&mut self, collection: Collection, id: i64) -> Result<(), StoreError> {
        let table = collection.table();
        let tx = self.conn.transaction().map_err(|e| write_err(table, e))?;
        tx.execute(&format!("DELETE FROM {table} WHERE id=?1"), params![id])
            .map_err(|e| write_err(table, e))?;
        tx.commit().map_err(|e| write_err(table, e))?;
        Ok(())
    }

    pub fn get_setting(&self, key: &str) -> Result<Option<String>, StoreError> {
        use rusqlite::OptionalExtension;
        self.conn
            .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| r.get(0))
            .optional()
            .map_err(|e| read_err("settings", e))
    }

    pub fn set_setting(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO settings(key, value) VALUES(?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value",
                params![key, value],
            )
            .map_err(|e| write_err("settings", e))?;
        Ok(())
    }
}
