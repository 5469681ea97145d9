//! Error types for the client.

use crate::config::ConfigError;
use crate::notifications::Notification;
use crate::submit::InquiryError;
use storefront_core::{StorefrontError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storefront(#[from] StorefrontError),
    #[error(transparent)]
    Inquiry(#[from] InquiryError),
    #[error("Failed to initialize logging: {0}")]
    Telemetry(String),
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        Self::Storefront(err.into())
    }
}

impl ClientError {
    /// The toast a failed command should raise.
    pub fn notification(&self) -> Notification {
        match self {
            Self::Storefront(StorefrontError::Validation(ValidationError::ConsentRequired)) => {
                Notification::consent_required()
            }
            Self::Inquiry(_) => Notification::inquiry_failed(),
            other => Notification::error(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{CONSENT_REQUIRED, INQUIRY_FAILED};

    #[test]
    fn test_consent_error_maps_to_consent_toast() {
        let err = ClientError::from(ValidationError::ConsentRequired);
        assert_eq!(err.notification().message, CONSENT_REQUIRED);
    }

    #[test]
    fn test_rejected_inquiry_maps_to_failure_toast() {
        let err = ClientError::Inquiry(InquiryError::Rejected {
            status: 502,
            body: String::new(),
        });
        assert_eq!(err.notification().message, INQUIRY_FAILED);
    }
}
