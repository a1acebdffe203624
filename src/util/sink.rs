use async_trait::async_trait;
use tracing::info;

use crate::model::submission::{ContactSubmission, QuoteSubmission};

/// Destination for accepted submissions. In production this would be an
/// email or database collaborator; durability and retry policy belong to the
/// implementation, not to the validation core.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn record_contact(&self, submission: &ContactSubmission);
    async fn record_quote(&self, submission: &QuoteSubmission);
}

/// Default sink: structured log lines stand in for the email/storage
/// collaborator.
pub struct TracingSink;

#[async_trait]
impl SubmissionSink for TracingSink {
    async fn record_contact(&self, submission: &ContactSubmission) {
        info!(
            name = %submission.name,
            email = %submission.email,
            phone = %submission.phone.as_deref().unwrap_or("Not provided"),
            service = %submission.service,
            message = %submission.message,
            timestamp = %submission.submitted_at,
            "Contact form submission received"
        );
    }

    async fn record_quote(&self, submission: &QuoteSubmission) {
        let items = submission
            .items
            .iter()
            .map(|i| format!("{}x {}", i.quantity, i.slug))
            .collect::<Vec<_>>()
            .join(", ");
        info!(
            name = %submission.name,
            email = %submission.email,
            phone = %submission.phone,
            contact_method = %submission.contact_method.as_str(),
            notes = %submission.notes.as_deref().unwrap_or("Not provided"),
            items = %items,
            timestamp = %submission.submitted_at,
            "Supply quote request received"
        );
    }
}
