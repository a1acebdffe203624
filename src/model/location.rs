use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A service-area entry in the static catalog, grouped by `region` for
/// display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub slug: String,
    pub name: String,
    pub region: String,
    pub description: String,
    pub zip_codes: Vec<String>,
    pub neighborhoods: Vec<String>,
    pub coordinates: Coordinates,
}
