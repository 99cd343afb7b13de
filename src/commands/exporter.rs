// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::export::{export_ledger, ExportFormat};
use crate::session::ExpenseSession;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn handle(session: &ExpenseSession, export_dir: &Path, sub: &clap::ArgMatches) -> Result<()> {
    let fmt: ExportFormat = sub.get_one::<String>("format").unwrap().parse()?;
    let out = match sub.get_one::<String>("out") {
        Some(p) => PathBuf::from(p),
        None => export_dir.join(fmt.default_file_name()),
    };
    let written = export_ledger(session.ledger(), fmt, &out)?;
    println!(
        "Exported {} expenses to {}",
        session.ledger().len(),
        written.display()
    );
    Ok(())
}
