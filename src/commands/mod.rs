// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod categories;
pub mod exporter;
pub mod form;
pub mod ledger;

use crate::cli;
use crate::probe::PingClient;
use crate::session::ExpenseSession;
use anyhow::{anyhow, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// How a failed command is reported at the prompt.
pub fn error_line(e: &anyhow::Error) -> String {
    format!("❌ {:#}", e)
}

/// One interactive session: state plus the collaborators commands need.
pub struct Shell {
    pub session: ExpenseSession,
    pub export_dir: PathBuf,
    client: Box<dyn PingClient>,
    repl: clap::Command,
}

impl Shell {
    pub fn new(session: ExpenseSession, export_dir: PathBuf, client: Box<dyn PingClient>) -> Self {
        Self {
            session,
            export_dir,
            client,
            repl: cli::build_repl(),
        }
    }

    /// Splits and runs one input line. Blank lines are ignored.
    pub fn run_line(&mut self, line: &str) -> Result<Flow> {
        let words = shlex::split(line).ok_or_else(|| anyhow!("Unbalanced quotes in input"))?;
        if words.is_empty() {
            return Ok(Flow::Continue);
        }
        let matches = match self.repl.try_get_matches_from_mut(words) {
            Ok(m) => m,
            Err(e) => {
                use clap::error::ErrorKind;
                if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                    e.print()?;
                    return Ok(Flow::Continue);
                }
                return Err(anyhow!(e.render().to_string().trim_end().to_string()));
            }
        };
        self.dispatch(&matches)
    }

    pub fn dispatch(&mut self, matches: &clap::ArgMatches) -> Result<Flow> {
        match matches.subcommand() {
            Some(("set", sub)) => form::handle_set(&mut self.session, sub)?,
            Some(("field", sub)) => form::handle_dynamic(&mut self.session, sub)?,
            Some(("form", _)) => form::show(&self.session)?,
            Some(("submit", _)) => form::submit(&mut self.session)?,
            Some(("list", sub)) => ledger::handle(&self.session, sub)?,
            Some(("category", sub)) => categories::handle(&mut self.session, sub)?,
            Some(("export", sub)) => exporter::handle(&self.session, &self.export_dir, sub)?,
            Some(("api", sub)) => api::handle(&mut self.session, self.client.as_ref(), sub)?,
            Some(("quit", _)) => return Ok(Flow::Quit),
            _ => {}
        }
        Ok(Flow::Continue)
    }
}
