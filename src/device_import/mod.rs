//! Device Import Pipeline
//!
//! Reads a row-oriented cameras table plus a pre-fetched location
//! lookup, resolves each camera's location by exact name, and creates
//! one NMS device record per eligible row.

mod directory;
mod service;
mod types;

pub use directory::{LocationDirectory, LocationEntry};
pub use service::DeviceImporter;
pub use types::{CameraRow, DeviceAttributes, DeviceCategory, DeviceCreateRequest};
