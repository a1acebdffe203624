use serde::{Deserialize, Serialize};

/// A medical supply item in the static catalog. Products are defined once at
/// process start and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub category_slug: String,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
    /// Free-form display text, occasionally non-numeric ("Call for pricing").
    pub price_range: String,
    pub popular: bool,
}

/// Derived, never stored: computed by grouping products on `category_slug`.
/// `product_count` is always the live group size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub product_count: usize,
}
