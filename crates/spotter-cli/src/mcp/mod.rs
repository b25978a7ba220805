//! MCP server implementation for Spotter
//!
//! This module implements the Model Context Protocol server for Spotter,
//! giving AI models a read-only view of the coaching caseload: the derived
//! worklist, the purchases behind it, and the feature catalog.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use spotter_core::Caseload;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;
pub mod prompts;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{Id, ListCatalog, ListPurchases, ListTasks, McpResult};

/// MCP server for Spotter
#[derive(Clone)]
pub struct SpotterMcpServer {
    caseload: Arc<Caseload>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SpotterMcpServer {
    /// Create a new Spotter MCP server
    pub fn new(caseload: Caseload) -> Self {
        Self {
            caseload: Arc::new(caseload),
            tool_router: Self::tool_router(),
        }
    }

    // Tool methods that delegate to handlers::McpHandlers methods
    #[tool(
        name = "list_tasks",
        description = "Derive the pending coaching worklist from the purchases snapshot. Use role='professional' (default) for the coach's outreach list or role='client' for what a client should expect next. Optionally pass as_of (RFC 3339) to evaluate urgency against a fixed instant. Returns tasks sorted by priority with titles, due dates, and action links."
    )]
    async fn list_tasks(&self, params: Parameters<ListTasks>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.caseload.clone());
        handlers.list_tasks(params).await
    }

    #[tool(
        name = "list_purchases",
        description = "List purchase summaries from the snapshot. Optionally pass status ('awaiting_payment', 'awaiting_scheduling', 'active', 'finalized', or 'cancelled') to narrow the listing. Returns one summary per purchase with plan name, lifecycle status, buyer, professional, and feature progress."
    )]
    async fn list_purchases(&self, params: Parameters<ListPurchases>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.caseload.clone());
        handlers.list_purchases(params).await
    }

    #[tool(
        name = "show_purchase",
        description = "Display complete details of a specific purchase including its service plan, buyer and professional, lifecycle status, and a checklist of plan features with their completion state. Use a purchase ID from list_purchases."
    )]
    async fn show_purchase(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.caseload.clone());
        handlers.show_purchase(params).await
    }

    #[tool(
        name = "list_catalog",
        description = "List the feature catalog this tool derives tasks from. Optionally pass role ('nutritionist' or 'trainer') to narrow the listing. Returns each feature's ID, role, label, and description."
    )]
    async fn list_catalog(&self, params: Parameters<ListCatalog>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.caseload.clone());
        handlers.list_catalog(params).await
    }

    /// List all available prompts
    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.caseload.clone());
        handlers.list_prompts(request, context).await
    }

    /// Get a specific prompt by name and apply arguments
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.caseload.clone());
        handlers.get_prompt(request, context).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SpotterMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "spotter".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Spotter is a coaching worklist tool that reads a snapshot of marketplace purchases and derives the pending tasks each purchase still needs.

## Core Concepts
- **Purchases**: Marketplace records pairing a buyer with a professional and a service plan
- **Features**: The individual services a plan includes (consultations, diet plans, training plans, follow-ups)
- **Tasks**: Derived work items for features not yet completed on active purchases, each with a priority and due date

## Workflow Examples

### Triaging a Caseload
1. Call `list_tasks` (role defaults to 'professional') to get the prioritized worklist
2. Call `list_purchases` with status='active' to see the purchases behind the tasks
3. Call `show_purchase` for full context on any purchase, including which features are done

### Explaining Progress to a Client
1. Call `list_tasks` with role='client' to see upcoming deliverables phrased for the client
2. Call `show_purchase` to walk through the plan's feature checklist

## Reading the Worklist
- ▲ High: past the urgency threshold for first contacts and plan deliveries
- ● Medium: inside the normal service window
- ○ Low: routine follow-ups
- Due dates are computed from the purchase date, not from today

## Tool Categories
- **Worklist**: list_tasks
- **Purchases**: list_purchases, show_purchase
- **Reference**: list_catalog

All tools are read-only; the snapshot is loaded once at server start."#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: SpotterMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Spotter MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
