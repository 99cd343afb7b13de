// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryDefinition, FieldType};
use crate::session::ExpenseSession;
use crate::utils::pretty_table;
use anyhow::{anyhow, Result};

pub fn handle(session: &mut ExpenseSession, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let selected = session.form().category.clone();
            let data = session
                .registry()
                .iter()
                .map(|c| {
                    let mark = if c.name == selected { "*" } else { "" };
                    vec![mark.to_string(), c.name.clone(), c.fields.len().to_string()]
                })
                .collect();
            println!("{}", pretty_table(&["", "Category", "Fields"], data));
        }
        Some(("show", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let cat = session
                .registry()
                .find(name)
                .ok_or_else(|| anyhow!("Category '{}' not found", name))?;
            print_fields(cat);
        }
        Some(("name", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            session.draft_mut().name = name.clone();
            println!("Drafting category '{}'", name);
        }
        Some(("add-field", sub)) => {
            let label = sub.get_one::<String>("label").unwrap();
            let ty: FieldType = sub
                .get_one::<String>("type")
                .unwrap()
                .parse()
                .map_err(|e: String| anyhow!(e))?;
            if !session.draft_mut().add_field(label, ty) {
                return Err(anyhow!("Field label must not be empty"));
            }
            println!("Added field '{}' ({})", label, ty);
        }
        Some(("draft", _)) => {
            let draft = session.draft();
            if draft.is_empty() {
                println!("No category drafted yet");
            } else {
                print_fields(&CategoryDefinition {
                    name: draft.name.clone(),
                    fields: draft.fields.clone(),
                });
            }
        }
        Some(("add", _)) => {
            let name = session.draft().name.clone();
            if !session.commit_draft() {
                return Err(anyhow!("Name the category first (`category name <NAME>`)"));
            }
            println!("Added category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}

fn print_fields(cat: &CategoryDefinition) {
    if cat.fields.is_empty() {
        println!("'{}' has no additional fields", cat.name);
        return;
    }
    let rows = cat
        .fields
        .iter()
        .map(|f| vec![f.label.clone(), f.name.clone(), f.r#type.to_string()])
        .collect();
    println!("{}", cat.name);
    println!("{}", pretty_table(&["Label", "Name", "Type"], rows));
}
