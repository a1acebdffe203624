use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use validator::Validate;

use crate::dto::contact_dto::ContactFormPayload;
use crate::model::submission::ContactSubmission;
use crate::util::error::{collect_violations, ServiceError};
use crate::util::sink::SubmissionSink;

#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validates the payload, aggregating every field violation, and on
    /// success records the normalized submission to the sink.
    async fn submit_contact(
        &self,
        payload: ContactFormPayload,
    ) -> Result<ContactSubmission, ServiceError>;
}

pub struct ContactServiceImpl {
    sink: Arc<dyn SubmissionSink>,
}

impl ContactServiceImpl {
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        ContactServiceImpl { sink }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn submit_contact(
        &self,
        payload: ContactFormPayload,
    ) -> Result<ContactSubmission, ServiceError> {
        if let Err(errors) = payload.validate() {
            let violations = collect_violations(&errors);
            debug!(
                "Contact form rejected with {} field violation(s)",
                violations.len()
            );
            return Err(ServiceError::ValidationFailed(violations));
        }

        let submission = ContactSubmission {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            service: payload.service,
            message: payload.message,
            submitted_at: Utc::now().to_rfc3339(),
        };

        self.sink.record_contact(&submission).await;
        info!("Contact form submission accepted for {}", submission.email);
        Ok(submission)
    }
}
