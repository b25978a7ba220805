//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};
use schemars::JsonSchema;
use serde::Deserialize;
use spotter_core::{
    handle_list_catalog, handle_list_purchases, handle_list_tasks, handle_show_purchase,
    params as core, Caseload, CatalogEntries, PurchaseSummaries, RequiredTasks,
};

use super::{errors::to_mcp_error, prompts::PROMPT_TEMPLATES};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// This generic wrapper struct implements the parameter wrapper pattern by:
// 1. Wrapping any core parameter type in a transparent serde container
// 2. Adding MCP-specific derives (Deserialize, JsonSchema) for JSON handling
// 3. Keeping the core types clean of framework dependencies
//
// The #[serde(transparent)] attribute ensures that deserialization passes
// through directly to the wrapped core type, so the wire format matches the
// core parameter structure exactly.

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Provides JSON deserialization and schema generation for any parameter
/// type, eliminating the need for individual wrapper structs while keeping
/// the same functionality and type safety.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type ListTasks = McpParams<core::ListTasks>;
pub type ListPurchases = McpParams<core::ListPurchases>;
pub type ListCatalog = McpParams<core::ListCatalog>;

pub type McpResult = Result<CallToolResult, McpError>;

/// Handler implementations for the MCP server
///
/// All tools are read-only views over the caseload loaded at server start,
/// so the caseload is shared without locking.
pub struct McpHandlers {
    caseload: Arc<Caseload>,
}

impl McpHandlers {
    pub fn new(caseload: Arc<Caseload>) -> Self {
        Self { caseload }
    }

    /// Derive and render the pending worklist for a viewer role
    pub async fn list_tasks(&self, Parameters(params): Parameters<ListTasks>) -> McpResult {
        debug!("list_tasks: {:?}", params);

        let inner_params = params.as_ref();
        let (role, _) = inner_params
            .validate()
            .map_err(|e| to_mcp_error("Failed to list tasks", &e))?;
        let tasks = handle_list_tasks(&self.caseload, inner_params)
            .map_err(|e| to_mcp_error("Failed to list tasks", &e))?;

        let worklist = RequiredTasks::sorted(tasks);
        let result = format!("# Pending Tasks ({role} view)\n\n{worklist}");
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    /// List purchase summaries, optionally narrowed to one status
    pub async fn list_purchases(
        &self,
        Parameters(params): Parameters<ListPurchases>,
    ) -> McpResult {
        debug!("list_purchases: {:?}", params);

        let inner_params = params.as_ref();
        let summaries = PurchaseSummaries(
            handle_list_purchases(&self.caseload, inner_params)
                .map_err(|e| to_mcp_error("Failed to list purchases", &e))?,
        );

        let title = match inner_params.status.as_deref() {
            Some(status) => format!("{} Purchases", status.to_uppercase()),
            None => "Purchases".to_string(),
        };
        let result = format!("# {}\n\n{}", title, summaries);
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    /// Render one purchase in full, including its feature checklist
    pub async fn show_purchase(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_purchase: {:?}", params);

        let purchase = handle_show_purchase(&self.caseload, params.as_ref())
            .map_err(|e| to_mcp_error("Failed to get purchase", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            purchase.to_string(),
        )]))
    }

    /// List the feature catalog, optionally narrowed to one role
    pub async fn list_catalog(&self, Parameters(params): Parameters<ListCatalog>) -> McpResult {
        debug!("list_catalog: {:?}", params);

        let inner_params = params.as_ref();
        let entries = CatalogEntries(
            handle_list_catalog(inner_params)
                .map_err(|e| to_mcp_error("Failed to list catalog", &e))?,
        );

        let title = match inner_params.role.as_deref() {
            Some(role) => format!("Feature Catalog ({role})"),
            None => "Feature Catalog".to_string(),
        };
        let result = format!("# {}\n\n{}", title, entries);
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let prompts = PROMPT_TEMPLATES
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let template = PROMPT_TEMPLATES
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let mut prompt_text = template.template.clone();

        // Apply argument substitution if arguments are provided
        if let Some(args) = &request.arguments {
            for arg_def in &template.arguments {
                if let Some(arg_value) = args.get(&arg_def.name) {
                    if let Some(arg_str) = arg_value.as_str() {
                        let placeholder = format!("{{{}}}", arg_def.name);
                        prompt_text = prompt_text.replace(&placeholder, arg_str);
                    } else if arg_def.required {
                        return Err(McpError::invalid_params(
                            format!("Argument '{}' must be a string", arg_def.name),
                            None,
                        ));
                    }
                } else if arg_def.required {
                    return Err(McpError::invalid_params(
                        format!("Required argument '{}' is missing", arg_def.name),
                        None,
                    ));
                }
            }
        } else {
            // Check if any required arguments are missing
            let required_args: Vec<_> = template
                .arguments
                .iter()
                .filter(|arg| arg.required)
                .map(|arg| arg.name.as_str())
                .collect();
            if !required_args.is_empty() {
                return Err(McpError::invalid_params(
                    format!("Required arguments missing: {}", required_args.join(", ")),
                    None,
                ));
            }
        }

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
