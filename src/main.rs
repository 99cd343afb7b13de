// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use costbook::commands::{error_line, Flow, Shell};
use costbook::probe::HttpPingClient;
use costbook::session::ExpenseSession;
use costbook::{cli, config};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli::build_cli().get_matches();

    let mut cfg = config::load(matches.get_one::<String>("config").map(PathBuf::from).as_deref())?;
    if let Some(v) = matches.get_one::<String>("site-url") {
        cfg.site_url = v.clone();
    }
    if let Some(v) = matches.get_one::<String>("api-key") {
        cfg.api_key = v.clone();
    }
    if let Some(v) = matches.get_one::<String>("export-dir") {
        cfg.export_dir = Some(PathBuf::from(v));
    }

    let session = ExpenseSession::new(cfg.api_settings());
    let mut shell = Shell::new(session, cfg.export_dir(), Box::new(HttpPingClient::new()?));

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("costbook {} - type `help` for commands", env!("CARGO_PKG_VERSION"));
    }
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("costbook> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line.context("Failed to read input")?;
        match shell.run_line(&line) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => eprintln!("{}", error_line(&e)),
        }
    }
    Ok(())
}
