//! Display formatting for worklists, purchases, and the catalog.
//!
//! This module provides wrapper types for formatting collections and Display
//! implementations for the domain models, enabling consistent formatting
//! across different output contexts (terminal, MCP).
//!
//! # Architecture: Display Wrappers
//!
//! The Display architecture combines direct Display implementations on domain
//! models with newtype wrappers for collections. Presentation concerns such as
//! priority ordering and empty-state messages live here, so derivation output
//! stays untouched for programmatic consumers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │   Collection    │    │   Formatted     │
//! │ (RequiredTask,  │───▶│    Wrappers     │───▶│    Output       │
//! │  Purchase)      │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Benefits
//!
//! 1. **Idiomatic Rust**: Newtype wrappers provide Display implementations for
//!    collections
//! 2. **Separation of Concerns**: Business logic in the engine, presentation in
//!    wrappers
//! 3. **Type Safety**: Newtype wrappers ensure proper formatting without runtime
//!    errors
//! 4. **Consistency**: All output goes through standardized display logic
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (RequiredTasks,
//!   PurchaseSummaries, CatalogEntries)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ### Worklist Output
//!
//! ```rust
//! use jiff::Timestamp;
//! use spotter_core::{
//!     display::RequiredTasks,
//!     models::{RequiredTask, TaskPriority},
//! };
//!
//! let task = RequiredTask {
//!     kind: "initial_consultation".to_string(),
//!     title: "Consulta inicial para Ana".to_string(),
//!     description: "Realizar a consulta inicial com o cliente".to_string(),
//!     priority: TaskPriority::Medium,
//!     due_date: Timestamp::now(),
//!     action_link: "/client/usr_1/plan/plan_1".to_string(),
//! };
//!
//! // Presentation order: high tier first, stable within a tier
//! let tasks = RequiredTasks::sorted(vec![task]);
//! let output = format!("{}", tasks);
//! assert!(output.contains("Consulta inicial para Ana"));
//!
//! // Empty worklists render a friendly message instead of nothing
//! let empty = RequiredTasks(vec![]);
//! assert_eq!(format!("{}", empty), "No pending tasks.\n");
//! ```
//!
//! ## Design Principles
//!
//! 1. **Unsorted Core**: Derivation output keeps purchase order; only the
//!    wrappers reorder for presentation
//! 2. **Markdown Output**: All formatters produce markdown for rich terminal
//!    display
//! 3. **Consistent Structure**: Headers, metadata, content follow standard
//!    patterns

pub mod collections;
pub mod datetime;
pub mod models;

// Re-export commonly used types for convenience
pub use collections::{CatalogEntries, PurchaseSummaries, RequiredTasks};
pub use datetime::{LocalDate, LocalDateTime};
