//! reqwest implementation of the inventory gate

use super::InventoryGate;
use crate::config::SeederConfig;
use crate::device_import::DeviceCreateRequest;
use crate::location_import::LocationCreateRequest;
use crate::{Error, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Response-body length kept in an Api error
const ERROR_BODY_LIMIT: usize = 512;

/// NMS REST API client
pub struct NmsClient {
    http: Client,
    token: String,
    locations_url: String,
    devices_url: String,
}

impl NmsClient {
    /// Create a client for the configured NMS deployment.
    pub fn new(config: &SeederConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            token: config.api_token.clone(),
            locations_url: config.locations_endpoint(),
            devices_url: config.devices_endpoint(),
        }
    }

    async fn post_json<T: Serialize + ?Sized>(&self, url: &str, payload: &T) -> Result<()> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(url = %url, status = %status, "Record created");
            return Ok(());
        }

        let body: String = response
            .text()
            .await
            .unwrap_or_default()
            .chars()
            .take(ERROR_BODY_LIMIT)
            .collect();

        Err(Error::Api { status, body })
    }
}

#[async_trait::async_trait]
impl InventoryGate for NmsClient {
    async fn create_location(&self, request: &LocationCreateRequest) -> Result<()> {
        self.post_json(&self.locations_url, request).await
    }

    async fn create_device(&self, request: &DeviceCreateRequest) -> Result<()> {
        self.post_json(&self.devices_url, request).await
    }
}
