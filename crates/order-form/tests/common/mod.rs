// Shared fixtures for order-form integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use order_form::{
    FieldName, FieldValidator, FieldValue, FormController, FormValues, OrderReceipt,
    OrderTransport, Schema, SubmissionError, ValidationEngine, ValidationError,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// What the scripted endpoint answers
#[derive(Debug, Clone)]
pub enum Reply {
    Accept(String),
    Reject(Option<String>),
    /// Never answers
    Stall,
}

/// Order transport that answers from a script and records what it was sent
///
/// Replies are used in order; the last one repeats.
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    sent: Mutex<Vec<FormValues>>,
}

impl ScriptedTransport {
    pub fn new(reply: Reply) -> Arc<Self> {
        Self::sequence(vec![reply])
    }

    pub fn sequence(replies: Vec<Reply>) -> Arc<Self> {
        assert!(!replies.is_empty());
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            sent: Mutex::new(Vec::new()),
        })
    }

    fn next_reply(&self) -> Reply {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies[0].clone()
        }
    }

    pub fn sent(&self) -> Vec<FormValues> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderTransport for ScriptedTransport {
    async fn submit_order(&self, values: &FormValues) -> Result<OrderReceipt, SubmissionError> {
        self.sent.lock().unwrap().push(values.clone());
        match self.next_reply() {
            Reply::Accept(message) => Ok(OrderReceipt { message }),
            Reply::Reject(message) => Err(SubmissionError::Rejected {
                status: 422,
                message,
            }),
            Reply::Stall => std::future::pending::<Result<OrderReceipt, SubmissionError>>().await,
        }
    }
}

/// Schema checks that hold back one specific text value until released
pub struct GatedValidator {
    schema: Schema,
    held_value: String,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl GatedValidator {
    /// Returns the validator and the sender that releases the held check
    pub fn new(held_value: &str) -> (Arc<Self>, oneshot::Sender<()>) {
        let (release, gate) = oneshot::channel();
        let validator = Arc::new(Self {
            schema: Schema::default(),
            held_value: held_value.to_string(),
            gate: Mutex::new(Some(gate)),
        });
        (validator, release)
    }
}

#[async_trait]
impl FieldValidator for GatedValidator {
    async fn validate_field(&self, field: FieldName, value: &FieldValue) -> Result<(), ValidationError> {
        if matches!(value, FieldValue::Text(text) if *text == self.held_value) {
            let gate = self.gate.lock().unwrap().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
        }
        self.schema.validate_field(field, value)
    }

    async fn validate_all(&self, values: &FormValues) -> bool {
        self.schema.validate_all(values)
    }
}

pub fn form_with(transport: Arc<ScriptedTransport>) -> FormController {
    FormController::new(Arc::new(Schema::default()), transport)
}

pub fn gated_form(validator: Arc<GatedValidator>) -> FormController {
    gated_form_with(validator, ScriptedTransport::new(Reply::Accept("ok".to_string())))
}

pub fn gated_form_with(validator: Arc<GatedValidator>, transport: Arc<ScriptedTransport>) -> FormController {
    FormController::with_engine(
        ValidationEngine::with_validator(validator),
        Default::default(),
        transport,
    )
}
