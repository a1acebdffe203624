use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use validator::{ValidationErrors, ValidationErrorsKind};

/// A single field-level validation failure: the offending field and a
/// human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Flattens a `validator` error tree into a per-field violation list.
/// Nested list entries are reported as `items[2].quantity`. Every violation
/// found is kept; validation is aggregate, not fail-fast.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    push_violations(&mut out, "", errors);
    out
}

// Violations name fields the way the wire payload spells them.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn push_violations(out: &mut Vec<FieldViolation>, prefix: &str, errors: &ValidationErrors) {
    for (field, kind) in errors.errors() {
        let segment = camel_case(field.as_ref());
        let path = if prefix.is_empty() {
            segment
        } else {
            format!("{prefix}.{segment}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for e in field_errors {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {path}"));
                    out.push(FieldViolation {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => push_violations(out, &path, nested),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    push_violations(out, &format!("{path}[{index}]"), nested);
                }
            }
        }
    }
}

/// Service-level failure taxonomy. Validation is the only recoverable kind;
/// the full violation list is carried so the caller can report every problem
/// at once.
#[derive(Debug, Clone)]
pub enum ServiceError {
    ValidationFailed(Vec<FieldViolation>),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::ValidationFailed(details) => {
                write!(f, "Validation failed: {} field violation(s)", details.len())
            }
        }
    }
}

impl std::error::Error for ServiceError {}

/// Request-boundary errors, rendered as the JSON bodies the site's form UI
/// expects.
#[derive(Debug)]
pub enum HandlerError {
    /// 400 with the full aggregated violation list.
    Validation(Vec<FieldViolation>),
    /// 500, generic to the caller; the cause is logged internally.
    Internal,
    /// 405 for anything other than POST on a submission endpoint.
    MethodNotAllowed,
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerError::Validation(details) => {
                write!(f, "Validation: {} violation(s)", details.len())
            }
            HandlerError::Internal => write!(f, "Internal"),
            HandlerError::MethodNotAllowed => write!(f, "MethodNotAllowed"),
        }
    }
}

impl std::error::Error for HandlerError {}

impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::ValidationFailed(details) => HandlerError::Validation(details),
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match self {
            HandlerError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "error": "Validation failed",
                    "details": details,
                })),
            )
                .into_response(),
            HandlerError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": "An error occurred while processing your request",
                    "message": "Please try again later or contact us directly.",
                })),
            )
                .into_response(),
            HandlerError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({
                    "error": "Method not allowed",
                    "message": "This endpoint only accepts POST requests",
                })),
            )
                .into_response(),
        }
    }
}
