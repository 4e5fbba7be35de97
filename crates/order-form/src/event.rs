// File: src/event.rs
// Purpose: Types exchanged with the page that renders the form

use crate::catalog::ToppingCatalog;
use crate::values::{FieldErrors, FieldName, FormValues};
use serde::{Deserialize, Serialize};

/// Input event emitted by the page
///
/// ```json
/// {"type": "fieldChanged", "name": "fullName", "value": "Alice"}
/// {"type": "checkboxToggled", "name": "toppings", "value": "3", "checked": true}
/// {"type": "submitRequested"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormEvent {
    FieldChanged {
        name: FieldName,
        value: String,
    },
    CheckboxToggled {
        name: FieldName,
        value: String,
        checked: bool,
    },
    SubmitRequested,
}

/// How a field changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// New value for a text or select field
    Value(String),
    /// One checkbox of a multi-choice field
    Toggle { id: String, checked: bool },
}

impl FieldInput {
    pub fn value(value: impl Into<String>) -> Self {
        FieldInput::Value(value.into())
    }

    pub fn check(id: impl Into<String>) -> Self {
        FieldInput::Toggle {
            id: id.into(),
            checked: true,
        }
    }

    pub fn uncheck(id: impl Into<String>) -> Self {
        FieldInput::Toggle {
            id: id.into(),
            checked: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

/// Result of a submit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Submit was disabled or already in flight; nothing was sent
    Skipped,
    Succeeded(String),
    Failed(String),
}

/// Everything the page needs to draw the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub submit_enabled: bool,
    pub phase: FormPhase,
    pub success_message: String,
    pub failure_message: String,
    pub catalog: ToppingCatalog,
}

impl FormSnapshot {
    pub fn error(&self, field: FieldName) -> &str {
        self.errors.get(field)
    }

    pub fn is_checked(&self, topping_id: &str) -> bool {
        self.values.toppings.contains(topping_id)
    }
}
