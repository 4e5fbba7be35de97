// File: src/controller.rs
// Purpose: Owns form state, sequences validation results and drives submission

use crate::catalog::ToppingCatalog;
use crate::config::OrderFormConfig;
use crate::engine::ValidationEngine;
use crate::event::{FieldInput, FormEvent, FormPhase, FormSnapshot, SubmitStatus};
use crate::schema::Schema;
use crate::transport::{HttpTransport, OrderTransport};
use crate::values::{FieldErrors, FieldName, FormValues};
use anyhow::Context;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Shown when a failed submission carries no message of its own
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong.";

/// Position of one committed input in the form's history
#[derive(Debug, Clone, Copy)]
struct Ticket {
    field: FieldName,
    seq: u64,
    revision: u64,
}

#[derive(Debug, Default)]
struct FormState {
    values: FormValues,
    errors: FieldErrors,
    submit_enabled: bool,
    success_message: String,
    failure_message: String,
    /// Bumped whenever `values` is replaced
    revision: u64,
    /// Bumped per field on every input to that field
    field_seq: BTreeMap<FieldName, u64>,
}

impl FormState {
    fn seq(&self, field: FieldName) -> u64 {
        self.field_seq.get(&field).copied().unwrap_or(0)
    }

    /// Record an input to `field`, replacing the value set when one is given
    ///
    /// A replaced value set is not submittable until it has been checked.
    fn commit(&mut self, field: FieldName, values: Option<FormValues>) -> Ticket {
        let seq = self.seq(field) + 1;
        self.field_seq.insert(field, seq);

        if let Some(values) = values {
            self.values = values;
            self.revision += 1;
            self.submit_enabled = false;
        }

        Ticket {
            field,
            seq,
            revision: self.revision,
        }
    }

    /// Back to empty defaults; results of validations still in flight become stale
    fn reset(&mut self) -> u64 {
        for field in FieldName::ALL {
            let seq = self.seq(field) + 1;
            self.field_seq.insert(field, seq);
        }
        self.values = FormValues::default();
        self.errors = FieldErrors::default();
        self.submit_enabled = false;
        self.revision += 1;
        self.revision
    }
}

/// Clears the in-flight flag when a submission ends, including when its future is dropped
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The order form
///
/// All methods take `&self`; several input handlers may be awaiting at once.
/// State is never locked across an await on the engine or the transport.
pub struct FormController {
    engine: ValidationEngine,
    transport: Arc<dyn OrderTransport>,
    catalog: ToppingCatalog,
    state: RwLock<FormState>,
    submitting: AtomicBool,
}

impl FormController {
    pub fn new(schema: Arc<Schema>, transport: Arc<dyn OrderTransport>) -> Self {
        let catalog = schema.catalog().clone();
        Self::with_engine(ValidationEngine::new(schema), catalog, transport)
    }

    pub fn with_engine(
        engine: ValidationEngine,
        catalog: ToppingCatalog,
        transport: Arc<dyn OrderTransport>,
    ) -> Self {
        Self {
            engine,
            transport,
            catalog,
            state: RwLock::new(FormState::default()),
            submitting: AtomicBool::new(false),
        }
    }

    /// Build a form that posts orders over HTTP as configured
    pub fn from_config(config: &OrderFormConfig) -> anyhow::Result<Self> {
        let schema = Arc::new(Schema::new(config.catalog()));
        let transport = HttpTransport::from_config(&config.transport)
            .context("Failed to build order transport")?;

        info!(
            endpoint = %transport.endpoint(),
            toppings = schema.catalog().len(),
            "order form ready"
        );
        Ok(Self::new(schema, Arc::new(transport)))
    }

    pub fn catalog(&self) -> &ToppingCatalog {
        &self.catalog
    }

    pub async fn values(&self) -> FormValues {
        self.state.read().await.values.clone()
    }

    pub async fn errors(&self) -> FieldErrors {
        self.state.read().await.errors.clone()
    }

    pub async fn submit_enabled(&self) -> bool {
        self.state.read().await.submit_enabled
    }

    pub async fn snapshot(&self) -> FormSnapshot {
        let state = self.state.read().await;
        FormSnapshot {
            values: state.values.clone(),
            errors: state.errors.clone(),
            submit_enabled: state.submit_enabled,
            phase: self.phase(),
            success_message: state.success_message.clone(),
            failure_message: state.failure_message.clone(),
            catalog: self.catalog.clone(),
        }
    }

    fn phase(&self) -> FormPhase {
        if self.submitting.load(Ordering::Acquire) {
            FormPhase::Submitting
        } else {
            FormPhase::Editing
        }
    }

    /// Route one page event; returns the outcome for submit requests
    pub async fn dispatch(&self, event: FormEvent) -> Option<SubmitStatus> {
        match event {
            FormEvent::FieldChanged { name, value } => {
                self.on_field_change(name, FieldInput::Value(value)).await;
                None
            }
            FormEvent::CheckboxToggled { name, value, checked } => {
                self.on_field_change(name, FieldInput::Toggle { id: value, checked }).await;
                None
            }
            FormEvent::SubmitRequested => Some(self.on_submit().await),
        }
    }

    /// Apply one input, then re-validate that field and the whole value set
    ///
    /// Checking a topping id outside the catalog is refused: values stay as
    /// they are and the stored toppings are re-validated.
    pub async fn on_field_change(&self, field: FieldName, input: FieldInput) {
        let (ticket, value, values) = {
            let mut state = self.state.write().await;

            let candidate = match (field, input) {
                (FieldName::Toppings, FieldInput::Toggle { id, checked }) => {
                    if checked && !self.catalog.contains(&id) {
                        warn!(topping = %id, "topping not in catalog, ignored");
                        None
                    } else {
                        Some(state.values.with_topping(&id, checked))
                    }
                }
                (FieldName::FullName | FieldName::Size, FieldInput::Value(value)) => {
                    match state.values.with_text(field, value) {
                        Some(values) => Some(values),
                        None => return,
                    }
                }
                (field, input) => {
                    warn!(field = %field, input = ?input, "input kind does not fit field, ignored");
                    return;
                }
            };

            let ticket = state.commit(field, candidate);
            (ticket, state.values.field_value(field), state.values.clone())
        };

        let message = self.engine.validate_one(field, value).await;
        self.apply_field_result(ticket, message).await;

        self.refresh_submittable(&values, ticket.revision).await;
    }

    /// Send the order if submit is enabled
    pub async fn on_submit(&self) -> SubmitStatus {
        let (values, in_flight) = {
            let state = self.state.read().await;
            if !state.submit_enabled || self.submitting.swap(true, Ordering::AcqRel) {
                debug!(
                    submit_enabled = state.submit_enabled,
                    phase = ?self.phase(),
                    "submit ignored"
                );
                return SubmitStatus::Skipped;
            }
            (state.values.clone(), InFlight(&self.submitting))
        };

        info!(
            size = %values.size,
            toppings = values.toppings.len(),
            "submitting order"
        );

        match self.transport.submit_order(&values).await {
            Ok(receipt) => {
                let revision = {
                    let mut state = self.state.write().await;
                    drop(in_flight);
                    state.success_message = receipt.message.clone();
                    state.failure_message.clear();
                    state.reset()
                };
                self.refresh_submittable(&FormValues::default(), revision).await;

                SubmitStatus::Succeeded(receipt.message)
            }
            Err(err) => {
                let message = err
                    .reported_message()
                    .unwrap_or(GENERIC_FAILURE_MESSAGE)
                    .to_string();
                warn!(error = %err, "order submission failed");

                let mut state = self.state.write().await;
                drop(in_flight);
                state.success_message.clear();
                state.failure_message = message.clone();

                SubmitStatus::Failed(message)
            }
        }
    }

    /// Merge a field result into the current errors unless a newer input superseded it
    async fn apply_field_result(&self, ticket: Ticket, message: String) {
        let mut state = self.state.write().await;
        if state.seq(ticket.field) != ticket.seq {
            debug!(field = %ticket.field, seq = ticket.seq, "stale validation result dropped");
            return;
        }
        state.errors = state.errors.with_result(ticket.field, message);
    }

    async fn refresh_submittable(&self, values: &FormValues, revision: u64) {
        let enabled = self.engine.validate_submittable(values).await;

        let mut state = self.state.write().await;
        if state.revision == revision {
            state.submit_enabled = enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmissionError;
    use crate::transport::OrderReceipt;
    use async_trait::async_trait;

    struct Unreachable;

    #[async_trait]
    impl OrderTransport for Unreachable {
        async fn submit_order(&self, _values: &FormValues) -> Result<OrderReceipt, SubmissionError> {
            Err(SubmissionError::InvalidResponse("not expected".to_string()))
        }
    }

    fn controller() -> FormController {
        FormController::new(Arc::new(Schema::default()), Arc::new(Unreachable))
    }

    #[test]
    fn test_commit_tracks_fields_independently() {
        let mut state = FormState::default();
        let first = state.commit(FieldName::FullName, Some(FormValues::default().with_full_name("A")));
        let other = state.commit(FieldName::Size, None);
        let second = state.commit(FieldName::FullName, Some(FormValues::default().with_full_name("Al")));

        assert_eq!((first.seq, first.revision), (1, 1));
        assert_eq!((other.seq, other.revision), (1, 1));
        assert_eq!((second.seq, second.revision), (2, 2));
        assert_eq!(state.values.full_name, "Al");
    }

    #[test]
    fn test_new_value_set_starts_unsubmittable() {
        let mut state = FormState {
            submit_enabled: true,
            ..FormState::default()
        };
        state.commit(FieldName::Size, None);
        assert!(state.submit_enabled);

        state.commit(FieldName::Size, Some(FormValues::default().with_size("L")));
        assert!(!state.submit_enabled);
    }

    #[test]
    fn test_in_flight_guard_clears_on_drop() {
        let submitting = AtomicBool::new(true);
        drop(InFlight(&submitting));
        assert!(!submitting.load(Ordering::Acquire));
    }

    #[test]
    fn test_reset_invalidates_every_field() {
        let mut state = FormState::default();
        state.commit(FieldName::Size, Some(FormValues::default().with_size("M")));
        let revision = state.reset();

        assert_eq!(revision, 2);
        assert_eq!(state.values, FormValues::default());
        for field in FieldName::ALL {
            assert_eq!(state.seq(field), if field == FieldName::Size { 2 } else { 1 });
        }
    }

    #[tokio::test]
    async fn test_starts_editing_with_submit_disabled() {
        let form = controller();
        let snapshot = form.snapshot().await;

        assert_eq!(snapshot.phase, FormPhase::Editing);
        assert!(!snapshot.submit_enabled);
        assert_eq!(snapshot.values, FormValues::default());
        assert!(!snapshot.errors.has_errors());
        assert_eq!(snapshot.catalog.len(), 5);
    }

    #[tokio::test]
    async fn test_mismatched_input_is_ignored() {
        let form = controller();
        form.on_field_change(FieldName::FullName, FieldInput::check("1")).await;
        form.on_field_change(FieldName::Toppings, FieldInput::value("1")).await;

        assert_eq!(form.values().await, FormValues::default());
        assert!(!form.errors().await.has_errors());
    }
}
