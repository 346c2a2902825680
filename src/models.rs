// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single ledger record. Costs and incomes share this shape but live
/// in disjoint collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Entry fields as supplied by the add/update surfaces. The store
/// assigns the id on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// The two record collections in the ledger database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Costs,
    Incomes,
}

impl Collection {
    pub fn table(self) -> &'static str {
        match self {
            Collection::Costs => "costs",
            Collection::Incomes => "incomes",
        }
    }

    /// The enumerated category set for entries in this collection.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            Collection::Costs => &["Food", "Transportation", "Rent", "Entertainment", "Other"],
            Collection::Incomes => &["Monthly Salary", "Other Income"],
        }
    }
}

/// Optional year/month/category triple narrowing a query. All present
/// predicates are conjunctive; absent fields impose no constraint.
/// `month` is 1-indexed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Income/expense/net figures for all time and for the window bounded
/// by the reference date's year and month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetIncomeReport {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_income: f64,
    pub income_until_now: f64,
    pub expenses_until_now: f64,
    pub net_until_now: f64,
}
