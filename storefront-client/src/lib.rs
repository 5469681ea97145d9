//! Storefront Client
//!
//! The `storefront` binary and the pieces behind it: TOML configuration,
//! fixture loading, the inquiry form and its HTTP submission, toast
//! notifications, and command execution over a file-backed session.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod inquiry;
pub mod notifications;
pub mod submit;
pub mod telemetry;

pub use app::{Report, Storefront};
pub use config::{ClientConfig, ConfigError};
pub use error::ClientError;
pub use inquiry::{ContactModal, InquiryForm, InquiryMeta, InquiryPayload};
pub use notifications::{Notification, NotificationLevel};
pub use submit::{InquiryError, InquirySubmitter};
