//! Seeder configuration
//!
//! Environment-driven, loaded once at startup. `.env` is honored when
//! present (loaded in `main`).

use crate::{Error, Result};

/// Constant fields injected into every outbound payload
pub mod defaults {
    /// Availability-check interval assigned to new devices (seconds)
    pub const CHECK_INTERVAL_SECS: u32 = 300;
    /// Availability-check protocol assigned to new devices
    pub const PROTOCOL: &str = "ICMP";
    /// Hardware class reported for camera devices
    pub const HARDWARE: &str = "CAMERA";
    /// Area label attached to new locations when NMS_AREA is unset
    pub const AREA: &str = "BLOCK II";
}

/// Seeder configuration
#[derive(Debug, Clone)]
pub struct SeederConfig {
    /// NMS API base URL
    pub api_url: String,
    /// Bearer token for the NMS API
    pub api_token: String,
    /// Area label for created locations
    pub area: String,
    /// Optional station/worker tag attached to created devices
    pub station_id: Option<String>,
}

impl SeederConfig {
    /// Load configuration from the environment.
    ///
    /// `NMS_API_TOKEN` has no default: the token is a secret and must be
    /// supplied per run.
    pub fn from_env() -> Result<Self> {
        let api_token = std::env::var("NMS_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Config("NMS_API_TOKEN not set".to_string()))?;

        Ok(Self {
            api_url: std::env::var("NMS_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            api_token,
            area: std::env::var("NMS_AREA").unwrap_or_else(|_| defaults::AREA.to_string()),
            station_id: std::env::var("NMS_STATION_ID").ok().filter(|s| !s.is_empty()),
        })
    }

    /// Location creation endpoint
    pub fn locations_endpoint(&self) -> String {
        format!("{}/api/v1/locations", self.api_url.trim_end_matches('/'))
    }

    /// Device creation endpoint
    pub fn devices_endpoint(&self) -> String {
        format!("{}/api/v1/devices", self.api_url.trim_end_matches('/'))
    }
}
