// File: src/transport.rs
// Purpose: Order submission collaborator and its HTTP implementation

use crate::config::TransportConfig;
use crate::error::SubmissionError;
use crate::values::FormValues;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Successful answer from the order endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub message: String,
}

/// Sends a finished order somewhere
#[async_trait]
pub trait OrderTransport: Send + Sync {
    async fn submit_order(&self, values: &FormValues) -> Result<OrderReceipt, SubmissionError>;
}

/// Error body the endpoint may send along with a failure status
#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    message: Option<String>,
}

/// Posts orders as JSON to an HTTP endpoint
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool)
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &TransportConfig) -> Result<Self, SubmissionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(builder.build()?, config.endpoint.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Turn a failure status into [`SubmissionError::Rejected`], keeping the
    /// endpoint's `message` when the body carries one.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, SubmissionError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<FailureBody>(&body)
            .ok()
            .and_then(|body| body.message);

        warn!(status = status.as_u16(), message = ?message, "order endpoint rejected order");
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_receipt(response: reqwest::Response) -> Result<OrderReceipt, SubmissionError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|err| SubmissionError::InvalidResponse(err.to_string()))
    }
}

#[async_trait]
impl OrderTransport for HttpTransport {
    async fn submit_order(&self, values: &FormValues) -> Result<OrderReceipt, SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(values)
            .send()
            .await?;

        let receipt = Self::parse_receipt(response).await?;
        info!(endpoint = %self.endpoint, "order accepted");

        Ok(receipt)
    }
}
