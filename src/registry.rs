// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryDefinition, FieldDefinition, FieldType};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Internal field name for a label: whitespace removed, lowercased.
pub fn field_name_from_label(label: &str) -> String {
    WHITESPACE.replace_all(label, "").to_lowercase()
}

fn field(label: &str, r#type: FieldType, name: &str) -> FieldDefinition {
    FieldDefinition {
        label: label.to_string(),
        r#type,
        name: name.to_string(),
    }
}

fn default_categories() -> Vec<CategoryDefinition> {
    let cat = |name: &str, fields: Vec<FieldDefinition>| CategoryDefinition {
        name: name.to_string(),
        fields,
    };
    vec![
        cat("Office Rent", vec![]),
        cat("Software", vec![]),
        cat(
            "Salary",
            vec![
                field("Employee Name", FieldType::Text, "employeeName"),
                field("Designation", FieldType::Text, "designation"),
                field("Salary Amount", FieldType::Number, "salaryAmount"),
            ],
        ),
        cat(
            "Travel",
            vec![
                field("Destination", FieldType::Text, "destination"),
                field("Purpose", FieldType::Text, "purpose"),
            ],
        ),
        cat("Other", vec![]),
    ]
}

/// Ordered, append-only list of categories. Order drives the selector.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<CategoryDefinition>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl CategoryRegistry {
    pub fn with_defaults() -> Self {
        Self {
            categories: default_categories(),
        }
    }

    pub fn empty() -> Self {
        Self { categories: vec![] }
    }

    /// Appends a category unless `name` is blank. Duplicates are accepted.
    pub fn add_category(&mut self, name: &str, fields: Vec<FieldDefinition>) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        log::debug!("category added: {} ({} fields)", name, fields.len());
        self.categories.push(CategoryDefinition {
            name: name.to_string(),
            fields,
        });
        true
    }

    /// First category with this name, in insertion order.
    pub fn find(&self, name: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.categories.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A category being assembled before it is committed to the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

impl CategoryDraft {
    /// Appends a field unless `label` is blank.
    pub fn add_field(&mut self, label: &str, r#type: FieldType) -> bool {
        if label.trim().is_empty() {
            return false;
        }
        self.fields.push(FieldDefinition {
            label: label.to_string(),
            r#type,
            name: field_name_from_label(label),
        });
        true
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.fields.is_empty()
    }

    /// Moves the draft into `registry` if it has a name; resets it on success.
    pub fn commit_into(&mut self, registry: &mut CategoryRegistry) -> bool {
        if !registry.add_category(&self.name, self.fields.clone()) {
            return false;
        }
        *self = CategoryDraft::default();
        true
    }
}
