use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ListCatalogArgs, ListTasksArgs, PurchaseCommands};

/// Main command-line interface for the Spotter coaching worklist tool
///
/// Spotter reads a snapshot of marketplace purchases and derives the pending
/// coaching tasks each purchase still needs. It provides a command-line
/// interface for reviewing worklists, purchases, and the feature catalog,
/// with an MCP (Model Context Protocol) server mode for integration with
/// AI assistants.
#[derive(Parser)]
#[command(version, about, name = "spot")]
pub struct Args {
    /// Path to the purchases snapshot JSON file. Defaults to
    /// $XDG_DATA_HOME/spotter/purchases.json
    #[arg(long, global = true)]
    pub snapshot_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Spotter CLI
///
/// The CLI is organized into four main command categories:
/// - `tasks`: Derive and list the pending tasks for a viewer role
/// - `purchase`: Inspect purchases from the snapshot
/// - `catalog`: Browse the feature catalog
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// List pending tasks derived from the snapshot
    #[command(alias = "t")]
    Tasks(ListTasksArgs),
    /// Inspect purchases
    #[command(alias = "p")]
    Purchase {
        #[command(subcommand)]
        command: PurchaseCommands,
    },
    /// Browse the feature catalog
    #[command(alias = "c")]
    Catalog(ListCatalogArgs),
    /// Start the MCP server
    Serve,
}
