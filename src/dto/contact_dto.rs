use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::submission::ContactSubmission;

/// Untrusted contact-form payload as it arrives over the wire. Required
/// string fields use `serde(default)` so that an absent field and an empty
/// field fail the same non-empty check with the same violation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,

    pub phone: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please select a service"))]
    pub service: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactAck {
    pub name: String,
    pub email: String,
    pub service: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactFormResponse {
    pub success: bool,
    pub message: String,
    pub data: ContactAck,
}

impl ContactFormResponse {
    pub fn accepted(submission: &ContactSubmission) -> Self {
        ContactFormResponse {
            success: true,
            message: "Your message has been received. We'll contact you soon!".to_string(),
            data: ContactAck {
                name: submission.name.clone(),
                email: submission.email.clone(),
                service: submission.service.clone(),
            },
        }
    }
}
