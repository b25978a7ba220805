//! High-level caseload API over a loaded purchases snapshot.
//!
//! This module provides the main [`Caseload`] interface for querying the
//! purchases a professional or client currently has on the books. The
//! caseload holds one decoded snapshot in memory and answers every query
//! from it; nothing here writes anywhere.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │     Engine      │    │    Snapshot     │
//! │ (handle_list_*, │───▶│ (derive_tasks + │───▶│ (purchases.json │
//! │  handle_show_*) │    │  policy rules)  │    │    on disk)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      Business Logic          Data Source
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Caseload`] instances with
//!   configuration
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use jiff::Timestamp;
//! use spotter_core::{models::UserRole, CaseloadBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create with the default XDG snapshot path
//! let caseload = CaseloadBuilder::new().build().await?;
//!
//! // Or point at a specific snapshot file
//! let caseload = CaseloadBuilder::new()
//!     .with_snapshot_path(Some("/custom/path/purchases.json"))
//!     .build()
//!     .await?;
//!
//! let tasks = caseload.derive_tasks(UserRole::Professional, Timestamp::now());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use jiff::Timestamp;

use crate::{
    engine,
    models::{Purchase, PurchaseFilter, RequiredTask, UserRole},
    snapshot::Snapshot,
};

// Module declarations
pub mod builder;


// Re-export the main types
pub use builder::CaseloadBuilder;

/// Main caseload interface for querying purchases and deriving tasks.
pub struct Caseload {
    snapshot: Snapshot,
    snapshot_path: PathBuf,
}

impl Caseload {
    /// Creates a new caseload over a decoded snapshot.
    pub(crate) fn new(snapshot: Snapshot, snapshot_path: PathBuf) -> Self {
        Self {
            snapshot,
            snapshot_path,
        }
    }

    /// The path the snapshot was loaded from.
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// When the backend exported the snapshot, if recorded.
    pub fn fetched_at(&self) -> Option<Timestamp> {
        self.snapshot.fetched_at
    }

    /// Number of snapshot records dropped during decoding.
    pub fn skipped_records(&self) -> usize {
        self.snapshot.skipped
    }

    /// All purchases in the caseload, in snapshot order.
    pub fn purchases(&self) -> &[Purchase] {
        &self.snapshot.purchases
    }

    /// Look up a purchase by id.
    pub fn find_purchase(&self, id: &str) -> Option<&Purchase> {
        self.purchases().iter().find(|purchase| purchase.id == id)
    }

    /// Purchases passing the given filter, in snapshot order.
    pub fn filtered_purchases(&self, filter: &PurchaseFilter) -> Vec<&Purchase> {
        self.purchases()
            .iter()
            .filter(|purchase| filter.matches(purchase))
            .collect()
    }

    /// Derive the pending worklist for a viewing role.
    ///
    /// Thin wrapper over [`engine::derive_tasks`] using this caseload's
    /// purchases.
    pub fn derive_tasks(&self, role: UserRole, now: Timestamp) -> Vec<RequiredTask> {
        engine::derive_tasks(self.purchases(), role, now)
    }
}
