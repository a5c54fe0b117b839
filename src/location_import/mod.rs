//! Location Import Pipeline
//!
//! Reads a row-oriented locations table and creates one NMS location
//! record per row.

mod service;
mod types;

pub use service::LocationImporter;
pub use types::{LocationCreateRequest, LocationRow};
