// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use costbook::commands::{error_line, Flow, Shell};
use costbook::models::ApiSettings;
use costbook::probe::{PingClient, PingResult};
use costbook::session::ExpenseSession;
use costbook::{cli, commands::form};
use std::cell::Cell;
use std::rc::Rc;
use tempfile::{tempdir, TempDir};

struct CountingClient {
    calls: Rc<Cell<usize>>,
    status: u16,
}

impl PingClient for CountingClient {
    fn ping(&self, _url: &str, _api_key: &str) -> PingResult {
        self.calls.set(self.calls.get() + 1);
        Ok(self.status)
    }
}

fn shell(api: ApiSettings, status: u16) -> (Shell, Rc<Cell<usize>>, TempDir) {
    let calls = Rc::new(Cell::new(0));
    let client = CountingClient {
        calls: calls.clone(),
        status,
    };
    let dir = tempdir().unwrap();
    (
        Shell::new(
            ExpenseSession::new(api),
            dir.path().to_path_buf(),
            Box::new(client),
        ),
        calls,
        dir,
    )
}

fn run(sh: &mut Shell, lines: &[&str]) {
    for l in lines {
        sh.run_line(l).unwrap_or_else(|e| panic!("`{}` failed: {:#}", l, e));
    }
}

#[test]
fn set_command_updates_form_through_clap() {
    let mut session = ExpenseSession::new(ApiSettings::default());
    let matches = cli::build_repl().get_matches_from(["set", "description", "Team lunch"]);
    if let Some(("set", sub)) = matches.subcommand() {
        form::handle_set(&mut session, sub).unwrap();
    } else {
        panic!("no set subcommand");
    }
    assert_eq!(session.form().description, "Team lunch");
}

#[test]
fn travel_scenario_through_the_shell() {
    let (mut sh, _, _dir) = shell(ApiSettings::default(), 200);
    run(
        &mut sh,
        &[
            "set category Travel",
            "field destination Dubai",
            "set description 'Client visit'",
            "set date 2024-03-10",
            "set amount 950",
            "set currency USD",
            "submit",
        ],
    );
    let ledger = sh.session.ledger();
    assert_eq!(ledger.len(), 1);
    let rec = &ledger[0];
    assert_eq!(rec.get("description"), Some("Client visit"));
    assert_eq!(rec.get("destination"), Some("Dubai"));
    assert_eq!(rec.get("purpose"), None);
    assert_eq!(rec.get("currency"), Some("USD"));
    assert_eq!(sh.session.form().category, "Other");
}

#[test]
fn failed_commands_do_not_end_the_session() {
    let (mut sh, _, _dir) = shell(ApiSettings::default(), 200);
    assert!(sh.run_line("submit").is_err());
    assert!(sh.run_line("field destination Dubai").is_err());
    assert!(sh.run_line("set category Nowhere").is_err());
    assert!(sh.run_line("frobnicate").is_err());
    assert!(sh.run_line("set description 'unterminated").is_err());
    assert_eq!(sh.run_line("").unwrap(), Flow::Continue);
    assert_eq!(sh.run_line("help").unwrap(), Flow::Continue);
    assert_eq!(sh.run_line("exit").unwrap(), Flow::Quit);
}

#[test]
fn drafted_category_is_added_and_used() {
    let (mut sh, _, _dir) = shell(ApiSettings::default(), 200);
    run(
        &mut sh,
        &[
            "category add-field 'Cost Center'",
            "category add-field 'Invoice Date' --type date",
            "category name Marketing",
            "category add",
            "set category Marketing",
            "field costcenter MK-1",
            "field invoicedate 2024-04-01",
        ],
    );
    assert!(sh.run_line("field invoicedate yesterday").is_err());
    assert_eq!(
        sh.session.registry().names().last().copied(),
        Some("Marketing")
    );
    assert!(sh.session.draft().is_empty());
    assert_eq!(sh.session.dynamic_value("costcenter"), Some("MK-1"));
}

#[test]
fn adding_unnamed_category_is_rejected() {
    let (mut sh, _, _dir) = shell(ApiSettings::default(), 200);
    run(&mut sh, &["category add-field Region"]);
    assert!(sh.run_line("category add").is_err());
    assert_eq!(sh.session.registry().len(), 5);
    assert_eq!(sh.session.draft().fields.len(), 1);
}

#[test]
fn api_test_without_key_makes_no_request() {
    let (mut sh, calls, _dir) = shell(ApiSettings::new("https://site.test", ""), 200);
    let err = sh.run_line("api test").unwrap_err();
    assert_eq!(err.to_string(), "Please enter both site URL and API key");
    assert_eq!(calls.get(), 0);

    run(&mut sh, &["api key secret", "api test"]);
    assert_eq!(calls.get(), 1);
    assert!(sh.session.api.connected);
}

#[test]
fn api_failure_disconnects() {
    let (mut sh, calls, _dir) = shell(ApiSettings::new("https://site.test", "k"), 503);
    let err = sh.run_line("api test").unwrap_err();
    assert_eq!(err.to_string(), "Connection failed: 503");
    assert_eq!(calls.get(), 1);
    assert!(!sh.session.api.connected);
    assert_eq!(sh.session.api.last_sync, None);
}

#[test]
fn failures_are_reported_with_cross_mark() {
    let (mut sh, _, _dir) = shell(ApiSettings::default(), 200);
    let err = sh.run_line("export").unwrap_err();
    assert_eq!(error_line(&err), "❌ No expenses to export!");
}
