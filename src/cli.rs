// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

/// Process arguments: where configuration and credentials come from.
pub fn build_cli() -> Command {
    Command::new("costbook")
        .version(crate_version!())
        .about("Record business expenses, export them to Excel and check the finance-site link")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Settings file (JSON); defaults to the platform config dir"),
        )
        .arg(
            Arg::new("site-url")
                .long("site-url")
                .value_name("URL")
                .help("Finance site base URL (overrides config and COSTBOOK_SITE_URL)"),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .value_name("KEY")
                .help("Finance site API key (overrides config and COSTBOOK_API_KEY)"),
        )
        .arg(
            Arg::new("export-dir")
                .long("export-dir")
                .value_name("DIR")
                .help("Directory for exported files"),
        )
}

/// Commands accepted at the session prompt.
pub fn build_repl() -> Command {
    Command::new("costbook")
        .no_binary_name(true)
        .disable_version_flag(true)
        .subcommand_required(true)
        .help_template("{all-args}")
        .subcommand(
            Command::new("set")
                .about("Set a form field (description|date|amount|currency|category|taxDeductible|notes)")
                .arg(Arg::new("field").required(true))
                .arg(Arg::new("value").required(true).allow_hyphen_values(true)),
        )
        .subcommand(
            Command::new("field")
                .about("Set a field specific to the selected category")
                .arg(Arg::new("name").required(true))
                .arg(Arg::new("value").required(true).allow_hyphen_values(true)),
        )
        .subcommand(Command::new("form").about("Show the expense being edited"))
        .subcommand(Command::new("submit").about("Add the current expense to the ledger"))
        .subcommand(
            Command::new("list")
                .about("Show submitted expenses")
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("json"),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Inspect and add categories")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List categories in selector order"))
                .subcommand(
                    Command::new("show")
                        .about("Show the fields of a category")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(
                    Command::new("name")
                        .about("Name the category being drafted")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(
                    Command::new("add-field")
                        .about("Add a field to the category being drafted")
                        .arg(Arg::new("label").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("text")
                                .value_parser(["text", "number", "date"]),
                        ),
                )
                .subcommand(Command::new("draft").about("Show the category being drafted"))
                .subcommand(Command::new("add").about("Add the drafted category")),
        )
        .subcommand(
            Command::new("export")
                .about("Export the ledger (default: expenses.xlsx)")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("xlsx")
                        .help("xlsx|csv|json"),
                )
                .arg(Arg::new("out").long("out").value_name("PATH")),
        )
        .subcommand(
            Command::new("api")
                .about("Finance site integration")
                .subcommand_required(true)
                .subcommand(
                    Command::new("url")
                        .about("Set the site URL")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(
                    Command::new("key")
                        .about("Set the API key")
                        .arg(Arg::new("key").required(true)),
                )
                .subcommand(Command::new("test").about("Ping the finance site"))
                .subcommand(Command::new("status").about("Show connection status")),
        )
        .subcommand(Command::new("quit").visible_alias("exit").about("Leave the session"))
}
