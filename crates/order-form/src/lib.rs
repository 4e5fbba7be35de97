//! # Order Form
//!
//! Headless pizza order form: field rules, submit gating and order submission.
//! The page that draws the form sends [`FormEvent`]s in and reads [`FormSnapshot`]s out.
//!
//! ## Example
//!
//! ```rust,no_run
//! use order_form::{FieldInput, FieldName, FormController, OrderFormConfig, SubmitStatus};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = OrderFormConfig::load_default()?;
//!     let form = FormController::from_config(&config)?;
//!
//!     form.on_field_change(FieldName::FullName, FieldInput::value("Alice Smith")).await;
//!     form.on_field_change(FieldName::Size, FieldInput::value("M")).await;
//!     form.on_field_change(FieldName::Toppings, FieldInput::check("3")).await;
//!
//!     if let SubmitStatus::Succeeded(message) = form.on_submit().await {
//!         println!("{message}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod event;
pub mod schema;
pub mod transport;
pub mod values;

pub use catalog::{Topping, ToppingCatalog};
pub use config::{OrderFormConfig, TransportConfig};
pub use controller::{FormController, GENERIC_FAILURE_MESSAGE};
pub use engine::{FieldValidator, ValidationEngine};
pub use error::{SubmissionError, ValidationError};
pub use event::{FieldInput, FormEvent, FormPhase, FormSnapshot, SubmitStatus};
pub use schema::{messages, Schema};
pub use transport::{HttpTransport, OrderReceipt, OrderTransport};
pub use values::{FieldErrors, FieldName, FieldValue, FormValues, Size};
