// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            other => Err(format!("unknown field type '{}' (use text|number|date)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub label: String,
    pub r#type: FieldType,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDefinition {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

impl CategoryDefinition {
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Currency {
    #[default]
    AED,
    USD,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::AED => "AED",
            Currency::USD => "USD",
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AED" => Ok(Currency::AED),
            "USD" => Ok(Currency::USD),
            _ => Err("expected AED or USD".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TaxDeductible {
    #[default]
    Yes,
    No,
}

impl TaxDeductible {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxDeductible::Yes => "Yes",
            TaxDeductible::No => "No",
        }
    }
}

impl FromStr for TaxDeductible {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(TaxDeductible::Yes),
            "no" => Ok(TaxDeductible::No),
            _ => Err("expected Yes or No".to_string()),
        }
    }
}

pub const DEFAULT_CATEGORY: &str = "Other";

/// Base attributes of the expense currently being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub description: String,
    pub date: String,
    pub amount: String,
    pub currency: Currency,
    pub category: String,
    pub tax_deductible: TaxDeductible,
    pub notes: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            description: String::new(),
            date: String::new(),
            amount: String::new(),
            currency: Currency::AED,
            category: DEFAULT_CATEGORY.to_string(),
            tax_deductible: TaxDeductible::Yes,
            notes: String::new(),
        }
    }
}

impl FormState {
    /// Attribute names and values in record order.
    pub fn entries(&self) -> Vec<(String, String)> {
        vec![
            ("description".into(), self.description.clone()),
            ("date".into(), self.date.clone()),
            ("amount".into(), self.amount.clone()),
            ("currency".into(), self.currency.as_str().into()),
            ("category".into(), self.category.clone()),
            ("taxDeductible".into(), self.tax_deductible.as_str().into()),
            ("notes".into(), self.notes.clone()),
        ]
    }
}

/// A submitted expense. Entries keep the order they were merged in; `id`
/// always comes last when the record is flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub id: i64,
    entries: Vec<(String, String)>,
}

impl ExpenseRecord {
    /// Merges base attributes with dynamic values. A dynamic key equal to a
    /// base key overwrites it in place; a dynamic `id` is shadowed by the
    /// generated one.
    pub fn merge(id: i64, base: Vec<(String, String)>, dynamic: &[(String, String)]) -> Self {
        let mut entries = base;
        for (k, v) in dynamic {
            if k == "id" {
                continue;
            }
            match entries.iter_mut().find(|(ek, _)| ek == k) {
                Some(slot) => slot.1 = v.clone(),
                None => entries.push((k.clone(), v.clone())),
            }
        }
        Self { id, entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        if key == "id" {
            return None;
        }
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Keys in natural order, `id` included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(|(k, _)| k.as_str())
            .chain(std::iter::once("id"))
    }
}

impl Serialize for ExpenseRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.serialize_entry("id", &self.id)?;
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSettings {
    pub site_url: String,
    pub api_key: String,
    pub last_sync: Option<DateTime<Utc>>,
    pub connected: bool,
}

impl ApiSettings {
    pub fn new(site_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            api_key: api_key.into(),
            last_sync: None,
            connected: false,
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.site_url.is_empty() && !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Vec<(String, String)> {
        FormState::default().entries()
    }

    #[test]
    fn merge_appends_dynamic_after_base_fields() {
        let rec = ExpenseRecord::merge(7, base(), &[("destination".into(), "Dubai".into())]);
        let keys: Vec<&str> = rec.keys().collect();
        assert_eq!(
            keys,
            [
                "description",
                "date",
                "amount",
                "currency",
                "category",
                "taxDeductible",
                "notes",
                "destination",
                "id"
            ]
        );
    }

    #[test]
    fn dynamic_key_overwrites_base_in_place() {
        let rec = ExpenseRecord::merge(
            1,
            base(),
            &[("notes".into(), "from dynamic".into()), ("id".into(), "x".into())],
        );
        assert_eq!(rec.get("notes"), Some("from dynamic"));
        assert_eq!(rec.entries().len(), 7);
        assert_eq!(rec.id, 1);
    }

    #[test]
    fn record_serializes_as_flat_object() {
        let rec = ExpenseRecord::merge(42, base(), &[]);
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["currency"], "AED");
        assert_eq!(v["taxDeductible"], "Yes");
        assert_eq!(v["id"], 42);
    }

    #[test]
    fn enums_parse_case_insensitively() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::USD));
        assert_eq!("NO".parse::<TaxDeductible>(), Ok(TaxDeductible::No));
        assert_eq!("Date".parse::<FieldType>(), Ok(FieldType::Date));
        assert!("eur".parse::<Currency>().is_err());
    }
}
