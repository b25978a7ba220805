//! Builder for creating and configuring Caseload instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Caseload;
use crate::{
    error::{CaseloadError, Result},
    snapshot::Snapshot,
};

/// Builder for creating and configuring Caseload instances.
#[derive(Debug, Clone)]
pub struct CaseloadBuilder {
    snapshot_path: Option<PathBuf>,
}

impl CaseloadBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            snapshot_path: None,
        }
    }

    /// Sets a custom snapshot file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/spotter/purchases.json` or
    /// `~/.local/share/spotter/purchases.json`
    pub fn with_snapshot_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.snapshot_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured caseload instance.
    ///
    /// The snapshot file is read on a blocking task. A missing file yields
    /// an empty caseload; see [`Snapshot::load`].
    ///
    /// # Errors
    ///
    /// Returns `CaseloadError::XdgDirectory` if the default path cannot be
    /// resolved, `CaseloadError::Snapshot` if the file exists but cannot be
    /// read, and `CaseloadError::Serialization` if its top level is
    /// malformed
    pub async fn build(self) -> Result<Caseload> {
        let snapshot_path = if let Some(path) = self.snapshot_path {
            path
        } else {
            Self::default_snapshot_path()?
        };

        let load_path = snapshot_path.clone();
        let snapshot = task::spawn_blocking(move || Snapshot::load(&load_path))
            .await
            .map_err(|e| CaseloadError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Caseload::new(snapshot, snapshot_path))
    }

    /// Returns the default snapshot path following XDG Base Directory
    /// specification.
    fn default_snapshot_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("spotter")
            .place_data_file("purchases.json")
            .map_err(|e| CaseloadError::XdgDirectory(e.to_string()))
    }
}

impl Default for CaseloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}
