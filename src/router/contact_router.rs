use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handler::contact_handler::submit_contact_handler;
use crate::handler::method_not_allowed;
use crate::service::contact_service::ContactServiceImpl;

pub fn contact_router(service: Arc<ContactServiceImpl>) -> Router {
    Router::new()
        .route(
            "/api/contact",
            post(submit_contact_handler).fallback(method_not_allowed),
        )
        .with_state(service)
}
