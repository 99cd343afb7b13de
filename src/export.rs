// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::ExportError;
use crate::models::ExpenseRecord;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const SHEET_NAME: &str = "Expenses";
pub const DEFAULT_STEM: &str = "expenses";
/// Excel's per-cell character limit.
pub const XLSX_MAX_CELL_CHARS: usize = 32_767;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn default_file_name(&self) -> String {
        format!("{}.{}", DEFAULT_STEM, self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Tabular view of the ledger. Columns are the union of record keys in the
/// order they are first seen; absent keys become empty cells.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(i64),
    Empty,
}

impl Cell {
    fn to_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

impl SheetTable {
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for rec in records {
            for k in rec.keys() {
                if !columns.iter().any(|c| c == k) {
                    columns.push(k.to_string());
                }
            }
        }
        let rows = records
            .iter()
            .map(|rec| {
                columns
                    .iter()
                    .map(|c| {
                        if c == "id" {
                            Cell::Number(rec.id)
                        } else {
                            rec.get(c)
                                .map(|v| Cell::Text(v.to_string()))
                                .unwrap_or(Cell::Empty)
                        }
                    })
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }
}

/// Writes the ledger in `format` to `path`. Nothing is written for an empty
/// ledger.
pub fn export_ledger(
    records: &[ExpenseRecord],
    format: ExportFormat,
    path: &Path,
) -> Result<PathBuf, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    match format {
        ExportFormat::Xlsx => write_xlsx(records, path)?,
        ExportFormat::Csv => write_csv(records, path)?,
        ExportFormat::Json => write_json(records, path)?,
    }
    log::debug!(
        "exported {} expenses as {} to {}",
        records.len(),
        format.extension(),
        path.display()
    );
    Ok(path.to_path_buf())
}

pub fn write_xlsx(records: &[ExpenseRecord], path: &Path) -> Result<(), ExportError> {
    if records.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    let table = SheetTable::from_records(records);
    if table.columns.len() > u16::MAX as usize {
        return Err(ExportError::TooManyColumns(table.columns.len()));
    }
    let xlsx = |source: rust_xlsxwriter::XlsxError| ExportError::Xlsx {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(xlsx)?;
    for (col, name) in table.columns.iter().enumerate() {
        sheet.write_string(0, col as u16, name).map_err(xlsx)?;
    }
    for (r, row) in table.rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(s) => {
                    let s = clamp_cell(s, &table.columns[col as usize], r);
                    sheet.write_string(r, col, s).map_err(xlsx)?;
                }
                Cell::Number(n) => {
                    sheet.write_number(r, col, *n as f64).map_err(xlsx)?;
                }
                Cell::Empty => {}
            }
        }
    }
    workbook.save(path).map_err(xlsx)?;
    Ok(())
}

// Excel rejects longer cells; truncate instead of failing the whole export.
fn clamp_cell<'a>(s: &'a str, column: &str, row: u32) -> &'a str {
    match s.char_indices().nth(XLSX_MAX_CELL_CHARS) {
        Some((cut, _)) => {
            log::warn!(
                "row {} column '{}' truncated to {} characters for xlsx",
                row,
                column,
                XLSX_MAX_CELL_CHARS
            );
            &s[..cut]
        }
        None => s,
    }
}

pub fn write_csv(records: &[ExpenseRecord], path: &Path) -> Result<(), ExportError> {
    if records.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    let table = SheetTable::from_records(records);
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(&table.columns)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(Cell::to_text))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json(records: &[ExpenseRecord], path: &Path) -> Result<(), ExportError> {
    if records.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    std::fs::write(path, serde_json::to_string_pretty(records)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormState;

    fn record(id: i64, category: &str, dynamic: &[(&str, &str)]) -> ExpenseRecord {
        let mut form = FormState::default();
        form.description = format!("item {}", id);
        form.category = category.to_string();
        let dynamic: Vec<(String, String)> = dynamic
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ExpenseRecord::merge(id, form.entries(), &dynamic)
    }

    #[test]
    fn columns_are_union_of_keys_in_first_seen_order() {
        let recs = vec![
            record(1, "Other", &[]),
            record(2, "Travel", &[("destination", "Dubai")]),
            record(3, "Salary", &[("employeeName", "Sam"), ("destination", "Oman")]),
        ];
        let t = SheetTable::from_records(&recs);
        assert_eq!(
            t.columns,
            [
                "description",
                "date",
                "amount",
                "currency",
                "category",
                "taxDeductible",
                "notes",
                "id",
                "destination",
                "employeeName"
            ]
        );
        assert_eq!(t.rows.len(), 3);
        assert_eq!(t.rows[0][8], Cell::Empty);
        assert_eq!(t.rows[1][8], Cell::Text("Dubai".into()));
        assert_eq!(t.rows[2][9], Cell::Text("Sam".into()));
        assert_eq!(t.rows[2][7], Cell::Number(3));
    }

    #[test]
    fn clamp_cell_cuts_at_the_excel_limit() {
        let short = "é".repeat(XLSX_MAX_CELL_CHARS);
        assert_eq!(clamp_cell(&short, "notes", 1), short);
        let long = "é".repeat(XLSX_MAX_CELL_CHARS + 10);
        let cut = clamp_cell(&long, "notes", 1);
        assert_eq!(cut.chars().count(), XLSX_MAX_CELL_CHARS);
        assert!(long.starts_with(cut));
    }

    #[test]
    fn xlsx_export_survives_oversized_cell() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("expenses.xlsx");
        let notes = "n".repeat(40_000);
        let recs = vec![
            record(1, "Other", &[("notes", notes.as_str())]),
            record(2, "Other", &[]),
        ];
        export_ledger(&recs, ExportFormat::Xlsx, &out).unwrap();
        assert!(out.exists());
    }

    #[test]
    fn format_names() {
        assert_eq!("XLSX".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert_eq!(ExportFormat::Csv.default_file_name(), "expenses.csv");
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(ExportError::UnknownFormat(_))
        ));
    }

    #[test]
    fn empty_ledger_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        for fmt in [ExportFormat::Xlsx, ExportFormat::Csv, ExportFormat::Json] {
            let out = dir.path().join(fmt.default_file_name());
            let err = export_ledger(&[], fmt, &out).unwrap_err();
            assert!(matches!(err, ExportError::NothingToExport));
            assert_eq!(err.to_string(), "No expenses to export!");
            assert!(!out.exists());
        }
    }

    #[test]
    fn csv_has_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("expenses.csv");
        let recs = vec![record(10, "Other", &[]), record(11, "Travel", &[("purpose", "")])];
        export_ledger(&recs, ExportFormat::Csv, &out).unwrap();
        let mut rdr = csv::Reader::from_path(&out).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.get(8), Some("purpose"));
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(7), Some("10"));
        assert_eq!(rows[0].get(8), Some(""));
        assert_eq!(rows[1].get(4), Some("Travel"));
    }
}
