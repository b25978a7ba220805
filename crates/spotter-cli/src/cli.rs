//! Command-line interface definitions and command runner
//!
//! This module defines the CLI argument structures using clap's derive API
//! and the [`Cli`] runner that executes parsed commands against a loaded
//! caseload. The argument structures implement the parameter wrapper
//! pattern for clean separation between CLI framework concerns and core
//! domain logic.
//!
//! ## Parameter Wrapper Pattern Implementation
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Handlers → Display Wrappers
//! ```
//!
//! ### Design Benefits
//!
//! 1. **Framework Isolation**: Core parameter types remain free of
//!    clap-specific attributes and derives, enabling reuse across different
//!    interfaces.
//!
//! 2. **Validation Separation**: CLI-specific validation (argument parsing,
//!    help generation) is handled by clap derives, while business logic
//!    validation remains in the core domain.
//!
//! 3. **Interface Evolution**: The CLI can evolve its argument structure
//!    (aliases, help text, value enums) without affecting core parameter
//!    definitions.
//!
//! ### Implementation Pattern
//!
//! Each command follows this structure:
//!
//! ```text
//! // CLI-specific argument structure with clap derives
//! #[derive(Args)]
//! pub struct OperationArgs {
//!     #[arg(short, long)] // CLI-specific attributes
//!     pub field: Option<String>,
//! }
//!
//! // Conversion to the core parameter structure
//! impl From<OperationArgs> for CoreOperationParams { ... }
//! ```
//!
//! This pattern ensures that:
//! - CLI concerns (help text, argument validation) stay in the CLI layer
//! - Core types remain interface-agnostic
//! - Type conversion is explicit and verifiable at compile time

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use spotter_core::{
    handle_list_catalog, handle_list_purchases, handle_list_tasks, handle_show_purchase,
    params::{Id, ListCatalog, ListPurchases, ListTasks},
    Caseload, CatalogEntries, PurchaseSummaries, RequiredTasks,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================
//
// These structures implement the CLI side of the parameter wrapper pattern.
// Each wrapper:
// 1. Defines CLI-specific argument parsing with clap derives
// 2. Provides a From conversion to its core parameter type
// 3. Isolates clap framework concerns from core domain logic

/// List pending tasks derived from the snapshot
///
/// Derives the outstanding coaching tasks for every active purchase, as
/// seen by one side of the marketplace. Tasks are rendered sorted by
/// priority so overdue first contacts and plan deliveries surface at the
/// top of the worklist.
#[derive(Args)]
pub struct ListTasksArgs {
    /// Viewer role the worklist is built for
    #[arg(
        short,
        long,
        default_value_t = RoleArg::Professional,
        help = "Build the worklist for 'professional' (coach outreach) or 'client' (what to expect)"
    )]
    pub role: RoleArg,
    /// Reference instant for urgency checks
    #[arg(
        long,
        help = "Reference instant in RFC 3339 format (e.g. 2024-03-01T12:00:00Z); defaults to now"
    )]
    pub as_of: Option<String>,
}

impl From<ListTasksArgs> for ListTasks {
    /// Convert CLI arguments to the core parameter structure
    ///
    /// This explicit conversion ensures type safety and makes the boundary
    /// between CLI concerns and core logic clear and verifiable.
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            role: Some(val.role.to_string()),
            as_of: val.as_of,
        }
    }
}

/// List purchases from the snapshot
///
/// Displays a summary per purchase with its lifecycle status, buyer,
/// professional, and feature progress. Use --status to narrow the listing
/// to one lifecycle stage.
#[derive(Args)]
pub struct ListPurchasesArgs {
    /// Filter by lifecycle status
    #[arg(short, long, help = "Only show purchases with this lifecycle status")]
    pub status: Option<StatusArg>,
}

impl From<ListPurchasesArgs> for ListPurchases {
    fn from(val: ListPurchasesArgs) -> Self {
        ListPurchases {
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Show details of a specific purchase
///
/// Displays the full purchase record including its service plan, buyer and
/// professional references, and a checklist of plan features with their
/// completion state.
#[derive(Args)]
pub struct ShowPurchaseArgs {
    /// ID of the purchase to display
    #[arg(help = "Unique identifier of the purchase to show details for")]
    pub id: String,
}

impl From<ShowPurchaseArgs> for Id {
    fn from(val: ShowPurchaseArgs) -> Self {
        Id { id: val.id }
    }
}

/// List the feature catalog
///
/// Shows every service feature this tool knows how to derive tasks for.
/// Use --role to narrow the listing to the nutritionist or trainer side of
/// the catalog.
#[derive(Args)]
pub struct ListCatalogArgs {
    /// Filter by professional role
    #[arg(
        short,
        long,
        help = "Only show features offered by this professional role"
    )]
    pub role: Option<CatalogRoleArg>,
}

impl From<ListCatalogArgs> for ListCatalog {
    fn from(val: ListCatalogArgs) -> Self {
        ListCatalog {
            role: val.role.map(|r| r.to_string()),
        }
    }
}

#[derive(Subcommand)]
pub enum PurchaseCommands {
    /// List purchases from the snapshot
    #[command(aliases = ["l", "ls"])]
    List(ListPurchasesArgs),
    /// Show details of a specific purchase
    #[command(alias = "s")]
    Show(ShowPurchaseArgs),
}

/// Command-line argument representation of worklist viewer roles
///
/// Converts between user-friendly command arguments and the role strings
/// the core derivation accepts. Used with the `--role` flag on the tasks
/// command.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Worklist for the coach: who to contact, what to deliver
    Professional,
    /// Worklist for the client: what to expect next
    Client,
}

impl std::fmt::Display for RoleArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleArg::Professional => write!(f, "professional"),
            RoleArg::Client => write!(f, "client"),
        }
    }
}

/// Command-line argument representation of catalog role filters
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CatalogRoleArg {
    /// Nutrition side of the catalog
    Nutritionist,
    /// Training side of the catalog
    Trainer,
}

impl std::fmt::Display for CatalogRoleArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogRoleArg::Nutritionist => write!(f, "nutritionist"),
            CatalogRoleArg::Trainer => write!(f, "trainer"),
        }
    }
}

/// Command-line argument representation of purchase lifecycle statuses
///
/// Used with the `--status` flag on the purchase list command. Display
/// writes the lowercase tokens the core status parser accepts.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Payment has not cleared yet
    AwaitingPayment,
    /// Paid, waiting for the first session to be scheduled
    AwaitingScheduling,
    /// Service is in progress
    Active,
    /// Service concluded normally
    Finalized,
    /// Purchase was cancelled or refunded
    Cancelled,
}

impl std::fmt::Display for StatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusArg::AwaitingPayment => write!(f, "awaiting_payment"),
            StatusArg::AwaitingScheduling => write!(f, "awaiting_scheduling"),
            StatusArg::Active => write!(f, "active"),
            StatusArg::Finalized => write!(f, "finalized"),
            StatusArg::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ============================================================================
// Command Runner
// ============================================================================

/// Command runner that executes parsed CLI commands against a caseload
///
/// Owns the loaded caseload and a terminal renderer. Each method maps one
/// CLI command onto a core handler, wraps the result in its display type,
/// and renders the markdown to the terminal. All methods are synchronous;
/// the snapshot was already loaded when the caseload was built.
pub struct Cli {
    caseload: Caseload,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new command runner
    pub fn new(caseload: Caseload, renderer: TerminalRenderer) -> Self {
        Self { caseload, renderer }
    }

    /// Dispatch a purchase subcommand
    pub fn handle_purchase_command(&self, command: PurchaseCommands) -> Result<()> {
        match command {
            PurchaseCommands::List(args) => self.list_purchases(&args.into()),
            PurchaseCommands::Show(args) => self.show_purchase(&args.into()),
        }
    }

    /// List pending tasks for a viewer role
    pub fn list_tasks(&self, params: &ListTasks) -> Result<()> {
        debug!("list_tasks: {:?}", params);

        let tasks = handle_list_tasks(&self.caseload, params)?;
        let worklist = RequiredTasks::sorted(tasks);

        self.renderer
            .render(&format!("# Pending Tasks\n\n{worklist}"))
    }

    /// List purchases, optionally filtered by status
    pub fn list_purchases(&self, params: &ListPurchases) -> Result<()> {
        debug!("list_purchases: {:?}", params);

        let summaries = PurchaseSummaries(handle_list_purchases(&self.caseload, params)?);

        self.renderer.render(&format!("# Purchases\n\n{summaries}"))
    }

    /// Show one purchase in full
    pub fn show_purchase(&self, params: &Id) -> Result<()> {
        debug!("show_purchase: {:?}", params);

        let purchase = handle_show_purchase(&self.caseload, params)?;

        self.renderer.render(&purchase.to_string())
    }

    /// List the feature catalog, optionally filtered by role
    pub fn list_catalog(&self, params: &ListCatalog) -> Result<()> {
        debug!("list_catalog: {:?}", params);

        let entries = CatalogEntries(handle_list_catalog(params)?);

        self.renderer
            .render(&format!("# Feature Catalog\n\n{entries}"))
    }
}
