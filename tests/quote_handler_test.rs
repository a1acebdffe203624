use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for .oneshot()

use happyhome_backend::catalog::Catalog;
use happyhome_backend::router::quote_router::quote_router;
use happyhome_backend::service::quote_service::QuoteServiceImpl;
use happyhome_backend::util::sink::TracingSink;

fn app() -> axum::Router {
    let service = Arc::new(QuoteServiceImpl::new(
        Arc::new(Catalog::new()),
        Arc::new(TracingSink),
    ));
    quote_router(service)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/quote")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn post_valid_quote_returns_200_with_item_count() {
    let payload = json!({
        "name": "John Smith",
        "email": "john@example.com",
        "phone": "6195550100",
        "contactMethod": "phone",
        "items": [
            { "slug": "deluxe-rollator-padded-seat", "quantity": 1 },
            { "slug": "grab-bar-installation-kit" }
        ]
    });

    let resp = app().oneshot(post(&payload)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["name"], json!("John Smith"));
    assert_eq!(body["data"]["itemCount"], json!(2));
}

#[tokio::test]
async fn post_quote_with_wrong_case_contact_method_returns_400() {
    let payload = json!({
        "name": "John Smith",
        "email": "john@example.com",
        "phone": "6195550100",
        "contactMethod": "Phone",
        "items": []
    });

    let resp = app().oneshot(post(&payload)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], json!("Validation failed"));
    let details = body["details"].as_array().unwrap();
    assert!(details
        .iter()
        .any(|d| d["field"] == json!("contactMethod")));
}

#[tokio::test]
async fn put_returns_405_with_json_body() {
    let req = Request::builder()
        .method("PUT")
        .uri("/api/quote")
        .body(Body::empty())
        .unwrap();

    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(resp).await;
    assert_eq!(body["error"], json!("Method not allowed"));
}
