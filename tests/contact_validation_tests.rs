use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use happyhome_backend::dto::contact_dto::ContactFormPayload;
use happyhome_backend::model::submission::{ContactSubmission, QuoteSubmission};
use happyhome_backend::service::contact_service::{ContactService, ContactServiceImpl};
use happyhome_backend::util::error::{FieldViolation, ServiceError};
use happyhome_backend::util::sink::SubmissionSink;

#[derive(Default)]
struct RecordingSink {
    contacts: Mutex<Vec<ContactSubmission>>,
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn record_contact(&self, submission: &ContactSubmission) {
        self.contacts.lock().unwrap().push(submission.clone());
    }

    async fn record_quote(&self, _submission: &QuoteSubmission) {}
}

fn service_with_sink() -> (ContactServiceImpl, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    (ContactServiceImpl::new(sink.clone()), sink)
}

fn payload(value: serde_json::Value) -> ContactFormPayload {
    serde_json::from_value(value).expect("payload should deserialize")
}

fn violations(err: ServiceError) -> Vec<FieldViolation> {
    let ServiceError::ValidationFailed(details) = err;
    details
}

fn fields(details: &[FieldViolation]) -> Vec<&str> {
    details.iter().map(|v| v.field.as_str()).collect()
}

#[tokio::test]
async fn accepts_valid_payload_and_records_to_sink() {
    let (service, sink) = service_with_sink();
    let submission = service
        .submit_contact(payload(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "(619) 555-0100",
            "service": "respite-care",
            "message": "Looking for weekend respite care for my mother."
        })))
        .await
        .expect("valid payload should be accepted");

    assert_eq!(submission.name, "Jane Doe");
    assert_eq!(submission.email, "jane@example.com");
    assert_eq!(submission.phone.as_deref(), Some("(619) 555-0100"));
    assert_eq!(submission.service, "respite-care");
    assert!(!submission.submitted_at.is_empty());
    assert_eq!(sink.contacts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn phone_is_optional() {
    let (service, _sink) = service_with_sink();
    let submission = service
        .submit_contact(payload(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "service": "home-care",
            "message": "Please call me back about in-home assessments."
        })))
        .await
        .expect("payload without phone should be accepted");
    assert_eq!(submission.phone, None);
}

#[tokio::test]
async fn reports_every_violation_not_just_the_first() {
    let (service, sink) = service_with_sink();
    let err = service
        .submit_contact(payload(json!({
            "name": "",
            "email": "",
            "service": "home-care",
            "message": "This message is long enough to pass."
        })))
        .await
        .expect_err("empty name and email should be rejected");

    let details = violations(err);
    let fields = fields(&details);
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"email"));
    assert!(!fields.contains(&"service"));
    assert!(!fields.contains(&"message"));
    // Nothing reaches the sink on the failure path.
    assert!(sink.contacts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn rejects_short_message() {
    let (service, _sink) = service_with_sink();
    let err = service
        .submit_contact(payload(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "service": "home-care",
            "message": "too short"
        })))
        .await
        .expect_err("nine character message should be rejected");

    let details = violations(err);
    assert_eq!(fields(&details), vec!["message"]);
    assert_eq!(details[0].message, "Message must be at least 10 characters");
}

#[tokio::test]
async fn rejects_malformed_email() {
    let (service, _sink) = service_with_sink();
    let err = service
        .submit_contact(payload(json!({
            "name": "Jane Doe",
            "email": "not-an-email",
            "service": "home-care",
            "message": "A perfectly reasonable message."
        })))
        .await
        .expect_err("malformed email should be rejected");

    let details = violations(err);
    assert!(details
        .iter()
        .any(|v| v.field == "email" && v.message == "Invalid email address"));
}

#[tokio::test]
async fn absent_field_is_treated_like_empty_field() {
    let (service, _sink) = service_with_sink();

    let absent = violations(
        service
            .submit_contact(payload(json!({
                "email": "jane@example.com",
                "service": "home-care",
                "message": "A perfectly reasonable message."
            })))
            .await
            .expect_err("absent name should be rejected"),
    );
    let empty = violations(
        service
            .submit_contact(payload(json!({
                "name": "",
                "email": "jane@example.com",
                "service": "home-care",
                "message": "A perfectly reasonable message."
            })))
            .await
            .expect_err("empty name should be rejected"),
    );

    assert_eq!(absent, empty);
    assert_eq!(absent[0].field, "name");
    assert_eq!(absent[0].message, "Name is required");
}

#[tokio::test]
async fn validation_is_idempotent() {
    let (service, _sink) = service_with_sink();
    let bad = json!({
        "name": "",
        "email": "bad",
        "service": "",
        "message": "short"
    });

    let first = violations(
        service
            .submit_contact(payload(bad.clone()))
            .await
            .expect_err("invalid payload"),
    );
    let second = violations(
        service
            .submit_contact(payload(bad))
            .await
            .expect_err("invalid payload"),
    );
    let mut first = first;
    let mut second = second;
    first.sort_by(|a, b| (&a.field, &a.message).cmp(&(&b.field, &b.message)));
    second.sort_by(|a, b| (&a.field, &a.message).cmp(&(&b.field, &b.message)));
    assert_eq!(first, second);
}
