// File: src/schema.rs
// Purpose: Per-field acceptance rules and failure messages

use crate::catalog::ToppingCatalog;
use crate::error::ValidationError;
use crate::values::{FieldName, FieldValue, FormValues, Size};
use once_cell::sync::Lazy;
use order_form_validation as rules;
use regex::Regex;

// Topping identifiers are single digits 1-5
static TOPPING_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-5]$").unwrap());

pub const FULL_NAME_MIN_LENGTH: usize = 3;
pub const FULL_NAME_MAX_LENGTH: usize = 20;

/// Messages shown next to invalid fields
pub mod messages {
    pub const FULL_NAME_TOO_SHORT: &str = "full name must be at least 3 characters";
    pub const FULL_NAME_TOO_LONG: &str = "full name must be at most 20 characters";
    pub const SIZE_INCORRECT: &str = "size must be S or M or L";
    pub const INVALID_TOPPING: &str = "Invalid topping ID";
}

/// Check an identifier against the topping id pattern
pub fn is_topping_id(id: &str) -> bool {
    TOPPING_ID_REGEX.is_match(id)
}

/// Immutable rule set for the order form
///
/// Build once and share it (`Arc<Schema>`); nothing in it changes after construction.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    catalog: ToppingCatalog,
}

impl Schema {
    pub fn new(catalog: ToppingCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ToppingCatalog {
        &self.catalog
    }

    /// Validate one field's current value
    ///
    /// Rules run in order: required, then length or membership, then pattern.
    /// The first violated rule decides the message.
    pub fn validate_field(&self, field: FieldName, value: &FieldValue) -> Result<(), ValidationError> {
        let outcome = match (field, value) {
            (FieldName::FullName, FieldValue::Text(name)) => check_full_name(name),
            (FieldName::Size, FieldValue::Text(size)) => check_size(size),
            (FieldName::Toppings, FieldValue::Toppings(ids)) => self.check_toppings(ids),
            (field, _) => Err(mismatch_message(field)),
        };

        outcome.map_err(|message| ValidationError::new(field, message))
    }

    /// Whether every field currently passes its rules
    pub fn validate_all(&self, values: &FormValues) -> bool {
        FieldName::ALL
            .into_iter()
            .all(|field| self.validate_field(field, &values.field_value(field)).is_ok())
    }

    fn check_toppings(&self, ids: &[String]) -> Result<(), &'static str> {
        let accepted = |id: &String| self.catalog.contains(id) && is_topping_id(id);

        rules::validate_each(ids, accepted).map_err(|_| messages::INVALID_TOPPING)
    }
}

fn check_full_name(name: &str) -> Result<(), &'static str> {
    rules::validate_required(name).map_err(|_| messages::FULL_NAME_TOO_SHORT)?;
    rules::validate_min_length(name, FULL_NAME_MIN_LENGTH).map_err(|_| messages::FULL_NAME_TOO_SHORT)?;
    rules::validate_max_length(name, FULL_NAME_MAX_LENGTH).map_err(|_| messages::FULL_NAME_TOO_LONG)
}

fn check_size(size: &str) -> Result<(), &'static str> {
    let allowed = Size::ALL.map(|size| size.as_str());

    rules::validate_required(size).map_err(|_| messages::SIZE_INCORRECT)?;
    rules::validate_one_of(size, &allowed).map_err(|_| messages::SIZE_INCORRECT)
}

fn mismatch_message(field: FieldName) -> &'static str {
    match field {
        FieldName::FullName => messages::FULL_NAME_TOO_SHORT,
        FieldName::Size => messages::SIZE_INCORRECT,
        FieldName::Toppings => messages::INVALID_TOPPING,
    }
}
