use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use tracing::error;

use crate::dto::contact_dto::{ContactFormPayload, ContactFormResponse};
use crate::service::contact_service::{ContactService, ContactServiceImpl};
use crate::util::error::{FieldViolation, HandlerError};

/// POST /api/contact
///
/// The body is parsed in two steps so the failure modes stay distinct: a
/// body that is not JSON at all is an internal failure (500, generic
/// message), while valid JSON with a wrong shape is a validation failure
/// (400) like any other.
pub async fn submit_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    body: Bytes,
) -> Result<impl IntoResponse, HandlerError> {
    let value: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        error!("Error processing contact form: invalid JSON body: {}", e);
        HandlerError::Internal
    })?;

    let payload: ContactFormPayload = serde_json::from_value(value).map_err(|e| {
        HandlerError::Validation(vec![FieldViolation {
            field: "body".to_string(),
            message: format!("Invalid request shape: {e}"),
        }])
    })?;

    let submission = service.submit_contact(payload).await?;
    Ok(Json(ContactFormResponse::accepted(&submission)))
}
