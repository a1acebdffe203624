use serde::{Deserialize, Serialize};

/// A care offering (home care, skilled nursing, ...) in the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareService {
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub icon: String,
    pub features: Vec<String>,
}
