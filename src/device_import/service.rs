//! Device Import Driver

use super::directory::LocationDirectory;
use super::types::{CameraRow, DeviceCategory, DeviceCreateRequest};
use crate::nms_client::InventoryGate;
use crate::report::ImportSummary;
use crate::Result;
use std::path::Path;
use tracing::{debug, info, warn};

/// Device Importer
///
/// Reads the cameras CSV, resolves each row's location against the
/// pre-fetched lookup, and creates one NMS device per eligible row.
/// Rows are processed sequentially; a skipped or failed row never stops
/// the rows after it.
pub struct DeviceImporter<'a> {
    gate: &'a dyn InventoryGate,
    directory: LocationDirectory,
    station_id: Option<String>,
}

impl<'a> DeviceImporter<'a> {
    /// Create an importer submitting through `gate`.
    pub fn new(
        gate: &'a dyn InventoryGate,
        directory: LocationDirectory,
        station_id: Option<String>,
    ) -> Self {
        Self {
            gate,
            directory,
            station_id,
        }
    }

    /// Import every eligible row of the cameras CSV.
    ///
    /// Row policy:
    /// - unrecognized category tag: skipped, never submitted
    /// - location name with no exact lookup match: skipped with an
    ///   "unable to add" diagnostic for the row's display name
    /// - unparseable row or submission failure: recorded, run continues
    pub async fn run(&self, csv_path: &Path) -> Result<ImportSummary> {
        info!(
            file = %csv_path.display(),
            locations = self.directory.len(),
            "Starting device import"
        );

        let mut reader = csv::Reader::from_path(csv_path)?;
        let mut summary = ImportSummary::new();

        for (index, record) in reader.deserialize::<CameraRow>().enumerate() {
            let row = match record {
                Ok(row) => row,
                Err(e) => {
                    warn!(row = index + 1, error = %e, "Unparseable camera row");
                    summary.record_failed(format!("row {}", index + 1), e.to_string());
                    continue;
                }
            };

            let Some(category) = DeviceCategory::from_tag(&row.category) else {
                debug!(
                    device = %row.name,
                    category = %row.category,
                    "Skipping camera with unrecognized category"
                );
                summary.record_skipped(
                    row.name,
                    format!("unrecognized category {:?}", row.category),
                );
                continue;
            };

            let Some(location_id) = self.directory.resolve(&row.location) else {
                warn!(
                    device = %row.name,
                    location = %row.location,
                    "Unable to add device: location not found"
                );
                summary.record_skipped(
                    row.name,
                    format!("unable to add: no location named {:?}", row.location),
                );
                continue;
            };

            let payload =
                DeviceCreateRequest::from_row(&row, category, location_id, self.station_id.as_deref());

            match self.gate.create_device(&payload).await {
                Ok(()) => {
                    info!(device = %row.name, location_id = location_id, "Added device");
                    summary.record_created(row.name);
                }
                Err(e) => {
                    warn!(device = %row.name, error = %e, "Failed to add device");
                    summary.record_failed(row.name, e.to_string());
                }
            }
        }

        summary.finish();
        info!(
            created = summary.created_count,
            skipped = summary.skipped_count,
            failed = summary.failed_count,
            "Device import completed"
        );

        Ok(summary)
    }
}
