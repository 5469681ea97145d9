//! Posting inquiries to the configured endpoint.

use crate::config::ClientConfig;
use crate::inquiry::InquiryPayload;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum InquiryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Inquiry rejected: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// One POST per inquiry. No retry and no queue.
#[derive(Clone)]
pub struct InquirySubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl InquirySubmitter {
    pub fn new(config: &ClientConfig) -> Result<Self, InquiryError> {
        Self::with_endpoint(
            config.inquiry_endpoint.trim(),
            Duration::from_millis(config.request_timeout_ms),
        )
    }

    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, InquiryError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Any 2xx is success; everything else is an error.
    pub async fn submit(&self, payload: &InquiryPayload) -> Result<(), InquiryError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            items = payload.selected_items.len(),
            "Submitting inquiry"
        );
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Inquiry request failed"))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "Inquiry accepted");
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "Inquiry rejected");
        Err(InquiryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
