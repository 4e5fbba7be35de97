// File: src/engine.rs
// Purpose: Async bridge between input changes and the schema

use crate::error::ValidationError;
use crate::schema::Schema;
use crate::values::{FieldName, FieldValue, FormValues};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Anything that can check form fields, possibly asynchronously
///
/// [`Schema`] answers immediately. Remote or deferred checkers implement this too.
#[async_trait]
pub trait FieldValidator: Send + Sync {
    /// Check one field; first violated rule wins
    async fn validate_field(&self, field: FieldName, value: &FieldValue) -> Result<(), ValidationError>;

    /// Check the whole value set
    async fn validate_all(&self, values: &FormValues) -> bool;
}

#[async_trait]
impl FieldValidator for Schema {
    async fn validate_field(&self, field: FieldName, value: &FieldValue) -> Result<(), ValidationError> {
        Schema::validate_field(self, field, value)
    }

    async fn validate_all(&self, values: &FormValues) -> bool {
        Schema::validate_all(self, values)
    }
}

/// Stateless validation front for the form controller
///
/// Every call is a pure function of its inputs and the validator it was built with.
/// Result ordering is the caller's job.
#[derive(Clone)]
pub struct ValidationEngine {
    validator: Arc<dyn FieldValidator>,
}

impl ValidationEngine {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self { validator: schema }
    }

    pub fn with_validator(validator: Arc<dyn FieldValidator>) -> Self {
        Self { validator }
    }

    /// Message to show for `field`; empty when the value is valid
    pub async fn validate_one(&self, field: FieldName, value: FieldValue) -> String {
        match self.validator.validate_field(field, &value).await {
            Ok(()) => String::new(),
            Err(err) => {
                debug!(field = %field, error = %err, "field failed validation");
                err.message
            }
        }
    }

    /// Whether the whole value set may be submitted
    pub async fn validate_submittable(&self, values: &FormValues) -> bool {
        self.validator.validate_all(values).await
    }
}
