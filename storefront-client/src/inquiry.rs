//! Inquiry form, payload, and the contact modal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::{Cart, LineItem, Service, ValidationError};

/// Subject shown when the contact modal opens without a service.
pub const GENERAL_INQUIRY: &str = "General Inquiry";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: String,
    pub inquiry_type: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<String>,
}

impl InquiryForm {
    /// Consent is checked first, then each required field in form order.
    pub fn validate(&self, consent: bool) -> Result<(), ValidationError> {
        if !consent {
            return Err(ValidationError::ConsentRequired);
        }
        let required = [
            ("fullName", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("inquiryType", &self.inquiry_type),
            ("message", &self.message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::RequiredFieldMissing {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryMeta {
    pub page: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Body POSTed to the inquiry endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPayload {
    pub selected_items: Vec<LineItem>,
    pub form: InquiryForm,
    pub meta: InquiryMeta,
}

impl InquiryPayload {
    /// Validate the form and snapshot the selected cart lines.
    pub fn build<S: AsRef<str>>(
        cart: &Cart,
        selected_ids: &[S],
        form: InquiryForm,
        consent: bool,
        page: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        form.validate(consent)?;
        let selected_items = cart.selected_subset(selected_ids);
        if selected_items.is_empty() {
            return Err(ValidationError::EmptySelection);
        }
        Ok(Self {
            selected_items,
            form,
            meta: InquiryMeta {
                page: page.into(),
                timestamp: now.timestamp_millis(),
            },
        })
    }
}

/// The read-only "selected products" box above the form, one `name × qty`
/// per line.
pub fn selected_products_text(items: &[LineItem]) -> String {
    items
        .iter()
        .map(LineItem::selection_label)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactModal {
    pub subject: String,
}

impl Default for ContactModal {
    fn default() -> Self {
        Self::general()
    }
}

impl ContactModal {
    pub fn general() -> Self {
        Self {
            subject: GENERAL_INQUIRY.to_string(),
        }
    }

    pub fn for_service(service: &Service) -> Self {
        Self {
            subject: service.title.clone(),
        }
    }
}
