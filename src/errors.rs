// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use thiserror::Error;

/// Rejections raised while editing or submitting the expense form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown form field '{0}' (use description|date|amount|currency|category|taxDeductible|notes)")]
    UnknownField(String),
    #[error("Category '{0}' not found")]
    UnknownCategory(String),
    #[error("Field '{field}' is not available for category '{category}'")]
    UnknownDynamicField { field: String, category: String },
    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    #[error("Please fill out the '{0}' field")]
    MissingRequired(&'static str),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No expenses to export!")]
    NothingToExport,
    #[error("Unknown format: {0} (use xlsx|csv|json)")]
    UnknownFormat(String),
    #[error("Spreadsheet has too many columns ({0})")]
    TooManyColumns(usize),
    #[error("Failed to write {path}: {source}")]
    Xlsx {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("Please enter both site URL and API key")]
    MissingCredentials,
    #[error("Connection failed: {0}")]
    Status(u16),
    #[error("Connection failed: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine platform-specific config dir")]
    NoConfigDir,
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
