use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::model::submission::{ContactMethod, QuoteSubmission};

/// Untrusted supply-quote payload. Same absent-equals-empty convention as
/// the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFormPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Phone number is required"))]
    pub phone: String,

    /// Kept as a string so that out-of-enumeration values (including case
    /// variants like "Phone") surface as a field violation rather than a
    /// deserialization failure.
    #[serde(default)]
    #[validate(custom(function = validate_contact_method))]
    pub contact_method: String,

    pub notes: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<QuoteItemPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItemPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Product reference is required"))]
    pub slug: String,

    /// Defaults to 1 downstream when absent.
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: Option<u32>,
}

fn validate_contact_method(value: &str) -> Result<(), ValidationError> {
    if ContactMethod::parse(value).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("contact_method");
        err.message = Some("Please select a preferred contact method".into());
        Err(err)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteAck {
    pub name: String,
    pub email: String,
    pub item_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteFormResponse {
    pub success: bool,
    pub message: String,
    pub data: QuoteAck,
}

impl QuoteFormResponse {
    pub fn accepted(submission: &QuoteSubmission) -> Self {
        QuoteFormResponse {
            success: true,
            message: "Your quote request has been received. We'll contact you soon!".to_string(),
            data: QuoteAck {
                name: submission.name.clone(),
                email: submission.email.clone(),
                item_count: submission.items.len(),
            },
        }
    }
}
