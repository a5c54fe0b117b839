//! Location Import Type Definitions

use serde::{Deserialize, Serialize};

/// One row of the locations CSV (columns: `name,lat,long,type`)
///
/// Numeric coercion happens at deserialization; a row with a malformed
/// lat/long/type fails on its own and the driver records it.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRow {
    /// Location name, unique within the input and the remote system
    pub name: String,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub long: f64,
    /// Small integer location type code
    #[serde(rename = "type")]
    pub location_type: i64,
}

/// Location creation payload for the NMS API
#[derive(Debug, Clone, Serialize)]
pub struct LocationCreateRequest {
    /// Area label for this deployment
    pub area: String,
    pub lat: f64,
    pub lng: f64,
    /// Location name
    pub location: String,
    pub location_type_id: i64,
}

impl LocationCreateRequest {
    /// Build the outbound payload for one CSV row.
    pub fn from_row(row: &LocationRow, area: &str) -> Self {
        Self {
            area: area.to_string(),
            lat: row.lat,
            lng: row.long,
            location: row.name.clone(),
            location_type_id: row.location_type,
        }
    }
}
