use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use tracing::error;

use crate::dto::quote_dto::{QuoteFormPayload, QuoteFormResponse};
use crate::service::quote_service::{QuoteService, QuoteServiceImpl};
use crate::util::error::{FieldViolation, HandlerError};

/// POST /api/quote — same two-step body handling as the contact endpoint.
pub async fn submit_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    body: Bytes,
) -> Result<impl IntoResponse, HandlerError> {
    let value: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        error!("Error processing quote request: invalid JSON body: {}", e);
        HandlerError::Internal
    })?;

    let payload: QuoteFormPayload = serde_json::from_value(value).map_err(|e| {
        HandlerError::Validation(vec![FieldViolation {
            field: "body".to_string(),
            message: format!("Invalid request shape: {e}"),
        }])
    })?;

    let submission = service.submit_quote(payload).await?;
    Ok(Json(QuoteFormResponse::accepted(&submission)))
}
