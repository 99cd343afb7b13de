// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::ExpenseSession;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle_set(session: &mut ExpenseSession, sub: &clap::ArgMatches) -> Result<()> {
    let field = sub.get_one::<String>("field").unwrap();
    let value = sub.get_one::<String>("value").unwrap();
    session.update_field(field, value)?;
    if field == "category" {
        let extra = session
            .selected_category()
            .map(|c| c.fields.len())
            .unwrap_or(0);
        if extra > 0 {
            println!(
                "Category set to '{}' ({} additional fields, see `form`)",
                value, extra
            );
            return Ok(());
        }
    }
    println!("{} = {}", field, value);
    Ok(())
}

pub fn handle_dynamic(session: &mut ExpenseSession, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let value = sub.get_one::<String>("value").unwrap();
    session.update_dynamic_field(name, value)?;
    println!("{} = {}", name, value);
    Ok(())
}

pub fn show(session: &ExpenseSession) -> Result<()> {
    let data: Vec<Vec<String>> = session
        .form()
        .entries()
        .into_iter()
        .map(|(k, v)| vec![k, v])
        .collect();
    println!("{}", pretty_table(&["Field", "Value"], data));

    if let Some(cat) = session.selected_category().filter(|c| !c.fields.is_empty()) {
        println!("Additional Fields for {}", cat.name);
        let rows = cat
            .fields
            .iter()
            .map(|f| {
                vec![
                    f.label.clone(),
                    f.name.clone(),
                    f.r#type.to_string(),
                    session.dynamic_value(&f.name).unwrap_or("").to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Label", "Name", "Type", "Value"], rows));
    }
    Ok(())
}

pub fn submit(session: &mut ExpenseSession) -> Result<()> {
    let rec = session.submit()?;
    println!(
        "Recorded {} {} on {} for '{}' (id {})",
        rec.get("amount").unwrap_or_default(),
        rec.get("currency").unwrap_or_default(),
        rec.get("date").unwrap_or_default(),
        rec.get("description").unwrap_or_default(),
        rec.id
    );
    Ok(())
}
