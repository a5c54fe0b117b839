//! NMS API Client
//!
//! Outbound HTTP surface of the seeder: one POST per record with
//! bearer-token auth; any 2xx status is success, everything else is a
//! per-record failure surfaced to the driver.

mod client;

pub use client::NmsClient;

use crate::device_import::DeviceCreateRequest;
use crate::location_import::LocationCreateRequest;
use crate::Result;

/// Submission seam between the import drivers and the wire.
#[async_trait::async_trait]
pub trait InventoryGate: Send + Sync {
    /// Create one location record.
    async fn create_location(&self, request: &LocationCreateRequest) -> Result<()>;

    /// Create one device record.
    async fn create_device(&self, request: &DeviceCreateRequest) -> Result<()>;
}
