//! End-to-end import flow over temp files with a recording gate.

use nms_seeder::device_import::{DeviceCreateRequest, DeviceImporter, LocationDirectory};
use nms_seeder::location_import::{LocationCreateRequest, LocationImporter};
use nms_seeder::nms_client::InventoryGate;
use nms_seeder::report::RowStatus;
use nms_seeder::{Error, Result};
use std::io::Write;
use std::sync::Mutex;

/// Records every accepted submission; fails rows whose display name is
/// listed, like an NMS returning 5xx for those records.
#[derive(Default)]
struct RecordingGate {
    locations: Mutex<Vec<LocationCreateRequest>>,
    devices: Mutex<Vec<DeviceCreateRequest>>,
    fail_names: Vec<String>,
}

impl RecordingGate {
    fn failing(names: &[&str]) -> Self {
        Self {
            fail_names: names.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl InventoryGate for RecordingGate {
    async fn create_location(&self, request: &LocationCreateRequest) -> Result<()> {
        if self.fail_names.contains(&request.location) {
            return Err(Error::Api {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "simulated outage".to_string(),
            });
        }
        self.locations.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn create_device(&self, request: &DeviceCreateRequest) -> Result<()> {
        if self.fail_names.contains(&request.display) {
            return Err(Error::Api {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "simulated outage".to_string(),
            });
        }
        self.devices.lock().unwrap().push(request.clone());
        Ok(())
    }
}

fn write_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn location_run_posts_every_row_and_survives_failures() {
    let gate = RecordingGate::failing(&["North Yard"]);
    let csv = write_file(
        "name,lat,long,type\n\
         Gate A,12.5,77.6,1\n\
         North Yard,12.52,77.61,2\n\
         Dock,12.53,77.62,1\n",
    );

    let summary = LocationImporter::new(&gate, "BLOCK II")
        .run(csv.path())
        .await
        .unwrap();

    assert_eq!(summary.created_count, 2);
    assert_eq!(summary.failed_count, 1);
    assert!(!summary.success());
    assert!(summary.finished_at.is_some());

    let locations = gate.locations.lock().unwrap();
    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].location, "Gate A");
    assert_eq!(locations[0].lat, 12.5);
    assert_eq!(locations[0].lng, 77.6);
    assert_eq!(locations[0].location_type_id, 1);
    assert_eq!(locations[1].location, "Dock");
}

#[tokio::test]
async fn device_run_filters_resolves_and_continues() {
    let gate = RecordingGate::failing(&["Dock Cam"]);
    let lookup = write_file(r#"[{"location": "Gate A", "id": 7}, {"location": "Dock", "id": 12}]"#);
    let csv = write_file(
        "name,type,location,username,password,rtsp,manufacturer,ip\n\
         Gate A Cam,PTZ,Gate A,admin,pw1,rtsp://10.1.1.20/s1,HIKVISION,10.1.1.20\n\
         Lobby Cam,FISHEYE,Gate A,admin,pw2,rtsp://10.1.1.21/s1,DAHUA,10.1.1.21\n\
         Orphan Cam,DOME,North Yard,admin,pw3,rtsp://10.1.1.22/s1,DAHUA,10.1.1.22\n\
         Dock Cam,BULLET,Dock,admin,pw4,rtsp://10.1.1.23/s1,HIKVISION,10.1.1.23\n\
         Dock Cam 2,BULLET,Dock,admin,pw5,rtsp://10.1.1.24/s1,HIKVISION,10.1.1.24\n",
    );

    let directory = LocationDirectory::from_json_file(lookup.path()).unwrap();
    let summary = DeviceImporter::new(&gate, directory, Some("WS-04".to_string()))
        .run(csv.path())
        .await
        .unwrap();

    // 1 created, 2 skipped (category + lookup miss), 1 failed, 1 created after the failure
    assert_eq!(summary.created_count, 2);
    assert_eq!(summary.skipped_count, 2);
    assert_eq!(summary.failed_count, 1);

    let devices = gate.devices.lock().unwrap();
    assert_eq!(devices.len(), 2);

    // Resolved ids and category mapping flow into the payloads
    assert_eq!(devices[0].display, "Gate A Cam");
    assert_eq!(devices[0].location_id, 7);
    assert_eq!(devices[0].device_type_id, 3);
    assert_eq!(devices[0].attributes.station_id.as_deref(), Some("WS-04"));

    // The row after the failed submission still went through
    assert_eq!(devices[1].display, "Dock Cam 2");
    assert_eq!(devices[1].location_id, 12);
    assert_eq!(devices[1].device_type_id, 1);

    // Lookup miss recorded an "unable to add" diagnostic under the display name
    let orphan = summary
        .details
        .iter()
        .find(|o| o.name == "Orphan Cam")
        .unwrap();
    assert_eq!(orphan.status, RowStatus::Skipped);
    assert!(orphan.reason.as_deref().unwrap().contains("unable to add"));
}

#[tokio::test]
async fn malformed_camera_row_fails_alone() {
    let gate = RecordingGate::default();
    let lookup = write_file(r#"[{"location": "Gate A", "id": 7}]"#);
    // Second row is truncated (missing columns)
    let csv = write_file(
        "name,type,location,username,password,rtsp,manufacturer,ip\n\
         Broken Cam,PTZ,Gate A\n\
         Gate A Cam,PTZ,Gate A,admin,pw,rtsp://10.1.1.20/s1,HIKVISION,10.1.1.20\n",
    );

    let directory = LocationDirectory::from_json_file(lookup.path()).unwrap();
    let summary = DeviceImporter::new(&gate, directory, None)
        .run(csv.path())
        .await
        .unwrap();

    assert_eq!(summary.failed_count, 1);
    assert_eq!(summary.created_count, 1);
    assert_eq!(gate.devices.lock().unwrap()[0].display, "Gate A Cam");
}
