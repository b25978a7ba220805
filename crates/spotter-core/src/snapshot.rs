//! Snapshot loading for the purchases collection.
//!
//! The marketplace backend owns purchases; this crate reads them from a
//! local JSON snapshot. Decoding is tolerant per record: a purchase that
//! fails to decode is skipped and counted instead of failing the whole
//! load, so one malformed record never hides the rest of the caseload.
//! Two top-level shapes are accepted: a bare array of purchases, or an
//! object `{"fetchedAt": ..., "purchases": [...]}` as exported by the
//! backend.

use std::fs;
use std::io;
use std::path::Path;

use jiff::Timestamp;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{CaseloadError, Result},
    models::Purchase,
};

/// A decoded purchases snapshot.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// When the backend exported the snapshot, if recorded
    pub fetched_at: Option<Timestamp>,

    /// Successfully decoded purchases, in file order
    pub purchases: Vec<Purchase>,

    /// Records dropped because they failed to decode
    pub skipped: usize,
}

/// Object form of the snapshot file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotEnvelope {
    #[serde(default)]
    fetched_at: Option<Timestamp>,
    purchases: Vec<Value>,
}

impl Snapshot {
    /// Decode a snapshot from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CaseloadError::Serialization` if the top level is not
    /// valid JSON or the envelope is missing its `purchases` array, and
    /// `CaseloadError::InvalidInput` if the top level is neither an array
    /// nor an object. Individual records that fail to decode are counted
    /// in [`Snapshot::skipped`], never returned as errors.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let (fetched_at, records) = match value {
            Value::Array(records) => (None, records),
            Value::Object(_) => {
                let envelope: SnapshotEnvelope = serde_json::from_value(value)?;
                (envelope.fetched_at, envelope.purchases)
            }
            _ => {
                return Err(CaseloadError::invalid_input("snapshot").with_reason(
                    "Expected a JSON array of purchases or an object with a 'purchases' field",
                ))
            }
        };

        let mut purchases = Vec::with_capacity(records.len());
        let mut skipped = 0;
        for record in records {
            match serde_json::from_value::<Purchase>(record) {
                Ok(purchase) => purchases.push(purchase),
                Err(_) => skipped += 1,
            }
        }

        Ok(Self {
            fetched_at,
            purchases,
            skipped,
        })
    }

    /// Load a snapshot from a file path.
    ///
    /// A missing file is an empty caseload, not an error: the tool stays
    /// usable before the first export lands on disk.
    ///
    /// # Errors
    ///
    /// Returns `CaseloadError::Snapshot` if the file exists but cannot be
    /// read, plus the decode errors described on [`Snapshot::from_json`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(CaseloadError::snapshot(path).with_source(e)),
        };
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PurchaseStatus;

    const VALID_RECORD: &str = r#"{
        "id": "pur_1",
        "status": "ACTIVE",
        "createdAt": "2024-03-01T12:00:00Z",
        "plan": {"id": "plan_1", "name": "Starter", "features": []},
        "buyer": {"id": "u_1", "name": "Ana"},
        "professional": {"id": "u_2", "name": "Dr. Silva"}
    }"#;

    #[test]
    fn test_from_json_bare_array() {
        let snapshot = Snapshot::from_json(&format!("[{VALID_RECORD}]")).unwrap();

        assert_eq!(snapshot.fetched_at, None);
        assert_eq!(snapshot.purchases.len(), 1);
        assert_eq!(snapshot.skipped, 0);
        assert_eq!(snapshot.purchases[0].status, PurchaseStatus::Active);
    }

    #[test]
    fn test_from_json_envelope() {
        let text = format!(
            r#"{{"fetchedAt": "2024-03-02T08:00:00Z", "purchases": [{VALID_RECORD}]}}"#
        );
        let snapshot = Snapshot::from_json(&text).unwrap();

        assert!(snapshot.fetched_at.is_some());
        assert_eq!(snapshot.purchases.len(), 1);
    }

    #[test]
    fn test_from_json_envelope_without_fetched_at() {
        let text = format!(r#"{{"purchases": [{VALID_RECORD}]}}"#);
        let snapshot = Snapshot::from_json(&text).unwrap();

        assert_eq!(snapshot.fetched_at, None);
        assert_eq!(snapshot.purchases.len(), 1);
    }

    #[test]
    fn test_from_json_skips_malformed_records() {
        let text = format!(r#"[{VALID_RECORD}, {{"id": "pur_2"}}, 42]"#);
        let snapshot = Snapshot::from_json(&text).unwrap();

        assert_eq!(snapshot.purchases.len(), 1);
        assert_eq!(snapshot.skipped, 2);
        assert_eq!(snapshot.purchases[0].id, "pur_1");
    }

    #[test]
    fn test_from_json_rejects_scalar_top_level() {
        let result = Snapshot::from_json("42");
        assert!(matches!(
            result.unwrap_err(),
            CaseloadError::InvalidInput { .. }
        ));
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        let result = Snapshot::from_json("{not json");
        assert!(matches!(
            result.unwrap_err(),
            CaseloadError::Serialization { .. }
        ));
    }

    #[test]
    fn test_from_json_rejects_envelope_without_purchases() {
        let result = Snapshot::from_json(r#"{"fetchedAt": "2024-03-02T08:00:00Z"}"#);
        assert!(matches!(
            result.unwrap_err(),
            CaseloadError::Serialization { .. }
        ));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let snapshot = Snapshot::load(dir.path().join("purchases.json")).unwrap();

        assert!(snapshot.purchases.is_empty());
        assert_eq!(snapshot.skipped, 0);
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("purchases.json");
        std::fs::write(&path, format!("[{VALID_RECORD}]")).unwrap();

        let snapshot = Snapshot::load(&path).unwrap();
        assert_eq!(snapshot.purchases.len(), 1);
    }
}
