// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::probe::{status_line, test_connection, PingClient};
use crate::session::ExpenseSession;
use anyhow::Result;

pub fn handle(
    session: &mut ExpenseSession,
    client: &dyn PingClient,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("url", sub)) => {
            session.api.site_url = sub.get_one::<String>("url").unwrap().clone();
            println!("Site URL set to {}", session.api.site_url);
        }
        Some(("key", sub)) => {
            session.api.api_key = sub.get_one::<String>("key").unwrap().clone();
            println!("API key updated");
        }
        Some(("test", _)) => {
            test_connection(&mut session.api, client)?;
            println!("✅ Connected to finance site!");
        }
        Some(("status", _)) => match status_line(&session.api) {
            Some(line) => println!("{}", line),
            None => println!("Site URL or API key not set"),
        },
        _ => {}
    }
    Ok(())
}
