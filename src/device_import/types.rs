//! Device Import Type Definitions

use crate::config::defaults;
use serde::{Deserialize, Serialize};

/// One row of the cameras CSV
/// (columns: `name,type,location,username,password,rtsp,manufacturer,ip`)
#[derive(Debug, Clone, Deserialize)]
pub struct CameraRow {
    /// Display name
    pub name: String,
    /// Raw category tag; validated against [`DeviceCategory`]
    #[serde(rename = "type")]
    pub category: String,
    /// Location name this camera belongs to
    pub location: String,
    pub username: String,
    pub password: String,
    /// Streaming URL
    pub rtsp: String,
    pub manufacturer: String,
    pub ip: String,
}

/// Recognized camera hardware classes
///
/// Rows with a tag outside this set are skipped, never submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCategory {
    Bullet,
    Dome,
    Ptz,
}

impl DeviceCategory {
    /// Parse a raw category tag. Exact, case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "BULLET" => Some(Self::Bullet),
            "DOME" => Some(Self::Dome),
            "PTZ" => Some(Self::Ptz),
            _ => None,
        }
    }

    /// NMS device_type_id for this category.
    ///
    /// Deployment default mapping; a pure function of the tag.
    pub fn device_type_id(self) -> i64 {
        match self {
            Self::Bullet => 1,
            Self::Dome => 2,
            Self::Ptz => 3,
        }
    }
}

/// Credential and stream attributes nested in the device payload
#[derive(Debug, Clone, Serialize)]
pub struct DeviceAttributes {
    pub username: String,
    pub password: String,
    pub rtsp_url: String,
    /// Hardware class label, always `CAMERA` for this importer
    pub hardware: String,
    pub manufacturer: String,
    /// Station/worker tag, set only in deployments that use one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_id: Option<String>,
}

/// Device creation payload for the NMS API
#[derive(Debug, Clone, Serialize)]
pub struct DeviceCreateRequest {
    pub attributes: DeviceAttributes,
    /// Availability-check interval (seconds)
    pub check_interval: u32,
    pub device_type_id: i64,
    /// Display name
    pub display: String,
    pub hostname: String,
    pub ip: String,
    /// Resolved remote location id
    pub location_id: i64,
    /// Availability-check protocol
    pub protocol: String,
}

impl DeviceCreateRequest {
    /// Build the outbound payload for one eligible camera row.
    ///
    /// The NMS addresses cameras by IP, so both `hostname` and `ip`
    /// carry the row's IP address.
    pub fn from_row(
        row: &CameraRow,
        category: DeviceCategory,
        location_id: i64,
        station_id: Option<&str>,
    ) -> Self {
        Self {
            attributes: DeviceAttributes {
                username: row.username.clone(),
                password: row.password.clone(),
                rtsp_url: row.rtsp.clone(),
                hardware: defaults::HARDWARE.to_string(),
                manufacturer: row.manufacturer.clone(),
                station_id: station_id.map(String::from),
            },
            check_interval: defaults::CHECK_INTERVAL_SECS,
            device_type_id: category.device_type_id(),
            display: row.name.clone(),
            hostname: row.ip.clone(),
            ip: row.ip.clone(),
            location_id,
            protocol: defaults::PROTOCOL.to_string(),
        }
    }
}
