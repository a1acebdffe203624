use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::catalog::Catalog;
use crate::dto::quote_dto::QuoteFormPayload;
use crate::model::submission::{ContactMethod, QuoteItem, QuoteSubmission};
use crate::util::error::{collect_violations, FieldViolation, ServiceError};
use crate::util::sink::SubmissionSink;

#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn submit_quote(
        &self,
        payload: QuoteFormPayload,
    ) -> Result<QuoteSubmission, ServiceError>;
}

pub struct QuoteServiceImpl {
    catalog: Arc<Catalog>,
    sink: Arc<dyn SubmissionSink>,
}

impl QuoteServiceImpl {
    pub fn new(catalog: Arc<Catalog>, sink: Arc<dyn SubmissionSink>) -> Self {
        QuoteServiceImpl { catalog, sink }
    }
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
    async fn submit_quote(
        &self,
        payload: QuoteFormPayload,
    ) -> Result<QuoteSubmission, ServiceError> {
        if let Err(errors) = payload.validate() {
            let violations = collect_violations(&errors);
            debug!(
                "Quote request rejected with {} field violation(s)",
                violations.len()
            );
            return Err(ServiceError::ValidationFailed(violations));
        }

        // The item list is assembled client-side from the catalog; unknown
        // slugs are tolerated, not rejected.
        for item in &payload.items {
            if self.catalog.product_by_slug(&item.slug).is_none() {
                warn!("Quote request references unknown product slug: {}", item.slug);
            }
        }

        let items = payload
            .items
            .into_iter()
            .map(|item| QuoteItem {
                slug: item.slug,
                quantity: item.quantity.unwrap_or(1),
            })
            .collect();

        // Already validated, so the parse only fails if the validator and
        // ContactMethod::parse ever diverge; report that as a violation
        // rather than coercing to a default.
        let contact_method = match ContactMethod::parse(&payload.contact_method) {
            Some(method) => method,
            None => {
                warn!(
                    "Contact method {:?} passed validation but did not parse",
                    payload.contact_method
                );
                return Err(ServiceError::ValidationFailed(vec![FieldViolation {
                    field: "contactMethod".to_string(),
                    message: "Please select a preferred contact method".to_string(),
                }]));
            }
        };

        let submission = QuoteSubmission {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            contact_method,
            notes: payload.notes,
            items,
            submitted_at: Utc::now().to_rfc3339(),
        };

        self.sink.record_quote(&submission).await;
        info!("Quote request accepted for {}", submission.email);
        Ok(submission)
    }
}
