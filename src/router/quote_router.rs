use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handler::method_not_allowed;
use crate::handler::quote_handler::submit_quote_handler;
use crate::service::quote_service::QuoteServiceImpl;

pub fn quote_router(service: Arc<QuoteServiceImpl>) -> Router {
    Router::new()
        .route(
            "/api/quote",
            post(submit_quote_handler).fallback(method_not_allowed),
        )
        .with_state(service)
}
