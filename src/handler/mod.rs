pub mod contact_handler;
pub mod quote_handler;

use crate::util::error::HandlerError;

/// Fallback for the submission endpoints: they only accept POST.
pub async fn method_not_allowed() -> HandlerError {
    HandlerError::MethodNotAllowed
}
