//! Location Import Driver

use super::types::{LocationCreateRequest, LocationRow};
use crate::nms_client::InventoryGate;
use crate::report::ImportSummary;
use crate::Result;
use std::path::Path;
use tracing::{info, warn};

/// Location Importer
///
/// Reads the locations CSV and creates one NMS location per row,
/// sequentially, continuing past row failures.
pub struct LocationImporter<'a> {
    gate: &'a dyn InventoryGate,
    area: String,
}

impl<'a> LocationImporter<'a> {
    /// Create an importer submitting through `gate`.
    pub fn new(gate: &'a dyn InventoryGate, area: impl Into<String>) -> Self {
        Self {
            gate,
            area: area.into(),
        }
    }

    /// Import every row of the locations CSV.
    ///
    /// An unreadable file fails before any row is submitted; after that,
    /// each row succeeds or fails on its own.
    pub async fn run(&self, csv_path: &Path) -> Result<ImportSummary> {
        info!(file = %csv_path.display(), "Starting location import");

        let mut reader = csv::Reader::from_path(csv_path)?;
        let mut summary = ImportSummary::new();

        for (index, record) in reader.deserialize::<LocationRow>().enumerate() {
            let row = match record {
                Ok(row) => row,
                Err(e) => {
                    warn!(row = index + 1, error = %e, "Unparseable location row");
                    summary.record_failed(format!("row {}", index + 1), e.to_string());
                    continue;
                }
            };

            let payload = LocationCreateRequest::from_row(&row, &self.area);

            match self.gate.create_location(&payload).await {
                Ok(()) => {
                    info!(location = %row.name, "Added location");
                    summary.record_created(row.name);
                }
                Err(e) => {
                    warn!(location = %row.name, error = %e, "Failed to add location");
                    summary.record_failed(row.name, e.to_string());
                }
            }
        }

        summary.finish();
        info!(
            created = summary.created_count,
            failed = summary.failed_count,
            "Location import completed"
        );

        Ok(summary)
    }
}
