// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The expense session: one controller owning the category registry, the
//! form being edited, the ledger and the finance-site settings.

use crate::errors::FormError;
use crate::models::{
    ApiSettings, CategoryDefinition, ExpenseRecord, FieldType, FormState,
};
use crate::registry::{CategoryDraft, CategoryRegistry};
use crate::utils::{parse_date, parse_decimal};
use chrono::Utc;

/// Field names accepted by [`ExpenseSession::update_field`].
pub const FORM_FIELDS: [&str; 7] = [
    "description",
    "date",
    "amount",
    "currency",
    "category",
    "taxDeductible",
    "notes",
];

#[derive(Debug)]
pub struct ExpenseSession {
    registry: CategoryRegistry,
    draft: CategoryDraft,
    form: FormState,
    // insertion-ordered; keys belong to the selected category
    dynamic: Vec<(String, String)>,
    ledger: Vec<ExpenseRecord>,
    pub api: ApiSettings,
    last_id: i64,
}

impl ExpenseSession {
    pub fn new(api: ApiSettings) -> Self {
        Self::with_registry(CategoryRegistry::with_defaults(), api)
    }

    pub fn with_registry(registry: CategoryRegistry, api: ApiSettings) -> Self {
        Self {
            registry,
            draft: CategoryDraft::default(),
            form: FormState::default(),
            dynamic: Vec::new(),
            ledger: Vec::new(),
            api,
            last_id: 0,
        }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn draft(&self) -> &CategoryDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CategoryDraft {
        &mut self.draft
    }

    /// Commits the draft category; false when the draft has no name.
    pub fn commit_draft(&mut self) -> bool {
        self.draft.commit_into(&mut self.registry)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn dynamic_fields(&self) -> &[(String, String)] {
        &self.dynamic
    }

    pub fn dynamic_value(&self, name: &str) -> Option<&str> {
        self.dynamic
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn ledger(&self) -> &[ExpenseRecord] {
        &self.ledger
    }

    pub fn selected_category(&self) -> Option<&CategoryDefinition> {
        self.registry.find(&self.form.category)
    }

    /// Sets one base attribute. Changing `category` clears every dynamic
    /// value, even when the new category is the current one.
    pub fn update_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let invalid = |reason: String| FormError::InvalidValue {
            field: name.to_string(),
            value: value.to_string(),
            reason,
        };
        match name {
            "description" => self.form.description = value.to_string(),
            "notes" => self.form.notes = value.to_string(),
            "date" => {
                check_typed(FieldType::Date, value).map_err(invalid)?;
                self.form.date = value.to_string();
            }
            "amount" => {
                check_typed(FieldType::Number, value).map_err(invalid)?;
                self.form.amount = value.to_string();
            }
            "currency" => self.form.currency = value.parse().map_err(invalid)?,
            "taxDeductible" | "tax-deductible" => {
                self.form.tax_deductible = value.parse().map_err(invalid)?
            }
            "category" => {
                if self.registry.find(value).is_none() {
                    return Err(FormError::UnknownCategory(value.to_string()));
                }
                self.form.category = value.to_string();
                self.dynamic.clear();
            }
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Sets a category-specific value. Only fields of the selected category
    /// can be edited; an empty value is kept as a touched entry.
    pub fn update_dynamic_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let unknown = || FormError::UnknownDynamicField {
            field: name.to_string(),
            category: self.form.category.clone(),
        };
        let def = self
            .selected_category()
            .and_then(|c| c.field(name))
            .ok_or_else(unknown)?;
        check_typed(def.r#type, value).map_err(|reason| FormError::InvalidValue {
            field: name.to_string(),
            value: value.to_string(),
            reason,
        })?;
        match self.dynamic.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.dynamic.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    /// Snapshots the form into the ledger and resets it.
    pub fn submit(&mut self) -> Result<&ExpenseRecord, FormError> {
        if self.form.description.is_empty() {
            return Err(FormError::MissingRequired("description"));
        }
        if self.form.date.is_empty() {
            return Err(FormError::MissingRequired("date"));
        }
        if self.form.amount.is_empty() {
            return Err(FormError::MissingRequired("amount"));
        }
        let id = self.next_id(Utc::now().timestamp_millis());
        let record = ExpenseRecord::merge(id, self.form.entries(), &self.dynamic);
        log::debug!(
            "expense {} submitted in category '{}'",
            id,
            self.form.category
        );
        self.ledger.push(record);
        self.form = FormState::default();
        self.dynamic.clear();
        Ok(&self.ledger[self.ledger.len() - 1])
    }

    // Millisecond timestamps, bumped so that ids stay distinct within one ms.
    fn next_id(&mut self, now_ms: i64) -> i64 {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

fn check_typed(r#type: FieldType, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    match r#type {
        FieldType::Text => Ok(()),
        FieldType::Number => parse_decimal(value).map(|_| ()),
        FieldType::Date => parse_date(value).map(|_| ()),
    }
}
