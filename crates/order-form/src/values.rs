// File: src/values.rs
// Purpose: Form value set, field identifiers and the derived error map

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Identifies one field of the order form
///
/// Serialized with the names the order endpoint and the page use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Size,
    Toppings,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [FieldName::FullName, FieldName::Size, FieldName::Toppings];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Size => "size",
            FieldName::Toppings => "toppings",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pizza size offered by the select box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::S, Size::M, Size::L];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
        }
    }
}

/// Current value of a single field, as handed to the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toppings(Vec<String>),
}

/// The complete value set of one order form
///
/// Updates never mutate in place: every `with_*` method returns a new value set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    pub size: String,
    pub toppings: BTreeSet<String>,
}

impl FormValues {
    pub fn new<I, T>(full_name: impl Into<String>, size: impl Into<String>, toppings: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            full_name: full_name.into(),
            size: size.into(),
            toppings: toppings.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_full_name(&self, full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..self.clone()
        }
    }

    pub fn with_size(&self, size: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            ..self.clone()
        }
    }

    /// Add (`checked`) or remove one topping identifier
    pub fn with_topping(&self, id: &str, checked: bool) -> Self {
        let mut toppings = self.toppings.clone();
        if checked {
            toppings.insert(id.to_string());
        } else {
            toppings.remove(id);
        }
        Self {
            toppings,
            ..self.clone()
        }
    }

    /// Replace a single-valued field; `None` for the toppings set
    pub fn with_text(&self, field: FieldName, value: impl Into<String>) -> Option<Self> {
        match field {
            FieldName::FullName => Some(self.with_full_name(value)),
            FieldName::Size => Some(self.with_size(value)),
            FieldName::Toppings => None,
        }
    }

    pub fn field_value(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::FullName => FieldValue::Text(self.full_name.clone()),
            FieldName::Size => FieldValue::Text(self.size.clone()),
            FieldName::Toppings => FieldValue::Toppings(self.toppings.iter().cloned().collect()),
        }
    }
}

/// Per-field error messages; an empty string means the field has no error
///
/// Derived data only. New maps are produced by [`FieldErrors::with_result`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for `field`, or `""` if none
    pub fn get(&self, field: FieldName) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Returns a new map with `field` set to `message`, all other fields untouched
    pub fn with_result(&self, field: FieldName, message: impl Into<String>) -> Self {
        let mut errors = self.0.clone();
        errors.insert(field, message.into());
        Self(errors)
    }

    pub fn has_errors(&self) -> bool {
        self.0.values().any(|message| !message.is_empty())
    }
}
