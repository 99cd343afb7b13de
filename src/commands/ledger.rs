// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ExpenseRecord;
use crate::session::ExpenseSession;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

const COLUMNS: [(&str, &str); 7] = [
    ("description", "Description"),
    ("date", "Date"),
    ("amount", "Amount"),
    ("currency", "Currency"),
    ("category", "Category"),
    ("taxDeductible", "Tax Deductible"),
    ("notes", "Notes"),
];

pub fn handle(session: &ExpenseSession, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = session.ledger();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No expenses submitted yet");
            return Ok(());
        }
        let headers: Vec<&str> = COLUMNS.iter().map(|(_, h)| *h).collect();
        println!("{}", pretty_table(&headers, table_rows(data)));
    }
    Ok(())
}

/// Base columns only; category-specific values show up in exports.
pub fn table_rows(records: &[ExpenseRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| {
            COLUMNS
                .iter()
                .map(|(k, _)| r.get(k).unwrap_or_default().to_string())
                .collect()
        })
        .collect()
}
