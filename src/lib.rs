//! NMS Inventory Seeder
//!
//! Seeds a network-monitoring system's inventory from flat files: a
//! locations CSV, a cameras CSV, and a pre-fetched location lookup.
//!
//! ## Pipelines
//!
//! 1. Location Importer - locations CSV -> POST /api/v1/locations
//! 2. Device Importer - cameras CSV + lookup JSON -> POST /api/v1/devices
//!
//! Both pipelines run strictly sequentially, one request per input row,
//! best-effort: a skipped or failed row is recorded in the run summary
//! and the remaining rows proceed.

pub mod config;
pub mod device_import;
pub mod error;
pub mod location_import;
pub mod nms_client;
pub mod report;

pub use error::{Error, Result};
