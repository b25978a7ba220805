//! Core library for the Spotter coaching worklist application.
//!
//! This crate provides the core business logic for deriving pending-task
//! worklists from marketplace purchase snapshots, including the feature
//! catalog, priority policy, data models, and error handling.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! This separation allows the same data to be formatted differently depending
//! on context (sorted worklists vs. individual purchases, filtered listings,
//! etc.) while maintaining consistency across all output.
//!
//! # Quick Start
//!
//! ```rust
//! use spotter_core::{handle_list_tasks, params::ListTasks, CaseloadBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load a purchase snapshot into a caseload
//! let caseload = CaseloadBuilder::new()
//!     .with_snapshot_path(Some("purchases.json"))
//!     .build()
//!     .await?;
//!
//! // Derive the professional's worklist
//! let params = ListTasks::default();
//! let tasks = handle_list_tasks(&caseload, &params)?;
//! for task in &tasks {
//!     println!("Task: {}", task.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod caseload;
pub mod catalog;
pub mod display;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod models;
pub mod operations;
pub mod params;
pub mod policy;
pub mod snapshot;

// Re-export commonly used types
pub use caseload::{Caseload, CaseloadBuilder};
pub use catalog::CatalogEntry;
pub use display::{CatalogEntries, LocalDate, LocalDateTime, PurchaseSummaries, RequiredTasks};
pub use error::{CaseloadError, Result};
pub use handlers::{
    handle_list_catalog, handle_list_purchases, handle_list_tasks, handle_show_purchase,
};
pub use models::{
    Feature, Plan, ProfessionalRole, Purchase, PurchaseFilter, PurchaseStatus, PurchaseSummary,
    RequiredTask, TaskPriority, UserRef, UserRole,
};
pub use params::{Id, ListCatalog, ListPurchases, ListTasks};
pub use snapshot::Snapshot;
