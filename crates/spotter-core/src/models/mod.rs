//! Data models for purchases and derived tasks.
//!
//! This module contains the core domain models that represent marketplace
//! purchases and the worklist tasks derived from them. Display
//! implementations for these models are located in [`crate::display::models`]
//! to maintain clean separation of concerns between data structures and
//! presentation logic.
//!
//! # Model Groups
//!
//! 1. **Wire models**: [`Purchase`], [`Plan`], [`Feature`], [`UserRef`] mirror
//!    the marketplace API's camelCase JSON records and are read-only here
//! 2. **Derived models**: [`RequiredTask`] and [`PurchaseSummary`] are computed
//!    projections, never persisted
//! 3. **Enumerations**: [`PurchaseStatus`], [`TaskPriority`], [`UserRole`],
//!    and [`ProfessionalRole`] with `FromStr` parsing for CLI input
//!
//! ## Display Features
//!
//! All Display implementations (in [`crate::display::models`]) provide:
//!
//! - **Markdown Output**: All models format as readable markdown
//! - **Rich Information**: Includes metadata, timestamps, and structured
//!   content
//! - **Priority Icons**: Visual indicators for task urgency (▲ High,
//!   ● Medium, ○ Low)
//!
//! # Examples
//!
//! ```rust
//! use spotter_core::models::{Feature, Plan, Purchase, PurchaseStatus, UserRef};
//! use jiff::Timestamp;
//!
//! let purchase = Purchase {
//!     id: "pur_1".to_string(),
//!     status: PurchaseStatus::Active,
//!     created_at: Timestamp::now(),
//!     plan: Plan {
//!         id: "plan_1".to_string(),
//!         name: "Starter".to_string(),
//!         description: None,
//!         features: vec![Feature {
//!             id: "diet_plan".to_string(),
//!             is_completed: false,
//!         }],
//!     },
//!     buyer: UserRef {
//!         id: "u_1".to_string(),
//!         name: Some("Ana".to_string()),
//!     },
//!     professional: UserRef {
//!         id: "u_2".to_string(),
//!         name: Some("Dr. Silva".to_string()),
//!     },
//! };
//! println!("{}", purchase); // Formats with markdown headers and metadata
//! ```

pub mod filters;
pub mod purchase;
pub mod role;
pub mod status;
pub mod summary;
pub mod task;


// Re-export all public types at the models level
pub use filters::PurchaseFilter;
pub use purchase::{Feature, Plan, Purchase, UserRef};
pub use role::{ProfessionalRole, UserRole};
pub use status::{PurchaseStatus, TaskPriority};
pub use summary::PurchaseSummary;
pub use task::RequiredTask;
