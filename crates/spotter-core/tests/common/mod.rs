use std::fs;

use spotter_core::{Caseload, CaseloadBuilder};
use tempfile::TempDir;

/// Helper function to create a test caseload from snapshot JSON
pub async fn create_test_caseload(snapshot_json: &str) -> (TempDir, Caseload) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let snapshot_path = temp_dir.path().join("purchases.json");
    fs::write(&snapshot_path, snapshot_json).expect("Failed to write snapshot");
    let caseload = CaseloadBuilder::new()
        .with_snapshot_path(Some(&snapshot_path))
        .build()
        .await
        .expect("Failed to create caseload");
    (temp_dir, caseload)
}
