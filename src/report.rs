//! Per-row outcomes and the run summary
//!
//! Every input row ends up here exactly once: created, skipped before
//! submission, or failed. A failed row never aborts the run; the driver
//! reports the aggregate when the input is exhausted.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Terminal state of one input row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    /// Submitted and accepted by the NMS
    Created,
    /// Filtered out before submission (unrecognized category, lookup miss)
    Skipped,
    /// Parse or submission failure
    Failed,
}

/// Outcome of a single input row
#[derive(Debug, Clone, Serialize)]
pub struct RowOutcome {
    /// Row display name
    pub name: String,
    /// Terminal state
    pub status: RowStatus,
    /// Skip or failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Aggregated result of one import run
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    /// Rows accepted by the NMS
    pub created_count: usize,
    /// Rows filtered out before submission
    pub skipped_count: usize,
    /// Rows that failed to parse or submit
    pub failed_count: usize,
    /// Per-row details, in input order
    pub details: Vec<RowOutcome>,
    /// Run start time
    pub started_at: DateTime<Utc>,
    /// Run end time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl ImportSummary {
    /// Create an empty summary stamped with the current time.
    pub fn new() -> Self {
        Self {
            created_count: 0,
            skipped_count: 0,
            failed_count: 0,
            details: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// True when no row failed. Skipped rows do not count against success.
    pub fn success(&self) -> bool {
        self.failed_count == 0
    }

    /// Record a row accepted by the NMS.
    pub fn record_created(&mut self, name: impl Into<String>) {
        self.created_count += 1;
        self.details.push(RowOutcome {
            name: name.into(),
            status: RowStatus::Created,
            reason: None,
        });
    }

    /// Record a row filtered out before submission.
    pub fn record_skipped(&mut self, name: impl Into<String>, reason: impl Into<String>) {
        self.skipped_count += 1;
        self.details.push(RowOutcome {
            name: name.into(),
            status: RowStatus::Skipped,
            reason: Some(reason.into()),
        });
    }

    /// Record a parse or submission failure.
    pub fn record_failed(&mut self, name: impl Into<String>, reason: impl Into<String>) {
        self.failed_count += 1;
        self.details.push(RowOutcome {
            name: name.into(),
            status: RowStatus::Failed,
            reason: Some(reason.into()),
        });
    }

    /// Stamp the end of the run.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }
}

impl Default for ImportSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_track_details() {
        let mut summary = ImportSummary::new();
        summary.record_created("Gate A Cam");
        summary.record_skipped("Lobby Cam", "unrecognized category FISHEYE");
        summary.record_failed("Dock Cam", "API error (500): boom");
        summary.record_created("Yard Cam");

        assert_eq!(summary.created_count, 2);
        assert_eq!(summary.skipped_count, 1);
        assert_eq!(summary.failed_count, 1);
        assert_eq!(summary.details.len(), 4);
        assert!(!summary.success());

        // Details keep input order
        assert_eq!(summary.details[0].name, "Gate A Cam");
        assert_eq!(summary.details[0].status, RowStatus::Created);
        assert_eq!(summary.details[1].status, RowStatus::Skipped);
        assert_eq!(summary.details[2].status, RowStatus::Failed);
    }

    #[test]
    fn test_skips_do_not_fail_the_run() {
        let mut summary = ImportSummary::new();
        summary.record_skipped("Lobby Cam", "no location named \"Lobby\"");
        assert!(summary.success());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&RowStatus::Skipped).unwrap();
        assert_eq!(json, "\"skipped\"");
    }
}
