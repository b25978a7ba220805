//! Spotter CLI Application
//!
//! Command-line interface for the spotter coaching worklist tool. Loads the
//! purchases snapshot once at startup, then runs a single command against
//! the in-memory caseload.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::{info, warn};
use mcp::{run_stdio_server, SpotterMcpServer};
use renderer::TerminalRenderer;
use spotter_core::{params::ListTasks, CaseloadBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        snapshot_file,
        no_color,
        command,
    } = Args::parse();

    let caseload = CaseloadBuilder::new()
        .with_snapshot_path(snapshot_file)
        .build()
        .await
        .context("Failed to load caseload")?;

    if caseload.skipped_records() > 0 {
        warn!(
            "Skipped {} malformed purchase records in snapshot",
            caseload.skipped_records()
        );
    }

    let renderer = TerminalRenderer::new(!no_color);

    info!("Spotter started");

    match command {
        Some(Tasks(args)) => Cli::new(caseload, renderer).list_tasks(&args.into()),
        Some(Purchase { command }) => Cli::new(caseload, renderer).handle_purchase_command(command),
        Some(Catalog(args)) => Cli::new(caseload, renderer).list_catalog(&args.into()),
        Some(Serve) => {
            info!("Starting Spotter MCP server");
            run_stdio_server(SpotterMcpServer::new(caseload))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(caseload, renderer).list_tasks(&ListTasks::default()),
    }
}
