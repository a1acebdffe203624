use serde::{Deserialize, Serialize};

/// Preferred way to reach back to a quote requester. The wire values are
/// lowercase and case-sensitive: "Phone" is rejected, "phone" is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Phone,
    Email,
    Either,
}

impl ContactMethod {
    /// Exact-match parse; anything outside the enumeration (including case
    /// variants) is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "phone" => Some(ContactMethod::Phone),
            "email" => Some(ContactMethod::Email),
            "either" => Some(ContactMethod::Either),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Phone => "phone",
            ContactMethod::Email => "email",
            ContactMethod::Either => "either",
        }
    }
}

/// A contact-form submission that passed validation. Fields are carried
/// verbatim from the payload; `submitted_at` is generated at validation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
    pub submitted_at: String,
}

/// A product reference inside a quote. Quantity defaults to 1 when the
/// payload omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItem {
    pub slug: String,
    pub quantity: u32,
}

/// A supply-quote submission that passed validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub contact_method: ContactMethod,
    pub notes: Option<String>,
    pub items: Vec<QuoteItem>,
    pub submitted_at: String,
}
