//! MCP server implementation for dart-mcp.
//!
//! This crate wires the OpenDART API modules into rmcp tool handlers, keeps
//! the tool metadata registry, and exposes stdio and streamable HTTP runners.

pub mod catalog;
mod helpers;
pub mod registry;
pub mod server;
mod tools;

use std::sync::Arc;

use dart_core::services::DartContext;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, ServerCapabilities, ServerInfo};

pub use crate::registry::{ToolMetadata, ToolRegistry};

const SERVER_INSTRUCTIONS: &str = r"dart-mcp exposes the OpenDART disclosure API of the Korean Financial Supervisory Service.

Workflow:
1. Resolve the 8-digit `corp_code` of a company with `search_corporation_code` (by name) or
   `get_corp_code_by_stock_code` (by 6-digit stock code). If the local listing is missing, call
   `get_corporation_code_file` once to download it.
2. Find filings with `get_disclosure_list` and download originals with `get_original_document`.
3. Query structured data:
   - DS002 periodic report items: `bsns_year` (YYYY) and `reprt_code`
     (11013 Q1, 11012 half-year, 11014 Q3, 11011 annual).
   - DS003 financial statements: `get_single_acc`, `get_single_acc_all`, `get_single_index`, XBRL files.
   - DS004 ownership: `get_major_stock`, `get_executive_stock`.
   - DS005 major events and DS006 registration statements: `bgn_de` and `end_de` (YYYYMMDD).

Notes:
- Every result starts with `status` and `message`. `000` is success, `013` means no data,
  `900` is a local or network failure.
- Downloads report the extraction directory as `saved_path`.
- Use `help` for the full tool guide, `get_tool_info` for one tool, `list_tool_names` to filter by tag.
- `health` returns status `000` with content `ok`.";

/// MCP server wrapper around the OpenDART context and tool registry.
#[derive(Clone)]
pub struct DartMcp {
    tool_router: ToolRouter<Self>,
    context: Arc<DartContext>,
    registry: Arc<ToolRegistry>,
}

impl DartMcp {
    /// Creates a server with the built-in tool catalogue.
    #[must_use]
    pub fn new(context: Arc<DartContext>) -> Self {
        Self::with_registry(context, Arc::new(catalog::build_registry()))
    }

    /// Creates a server sharing an existing registry.
    #[must_use]
    pub fn with_registry(context: Arc<DartContext>, registry: Arc<ToolRegistry>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_context()
            + Self::tool_router_corp_code()
            + Self::tool_router_disclosure()
            + Self::tool_router_periodic()
            + Self::tool_router_financial()
            + Self::tool_router_ownership()
            + Self::tool_router_major_event()
            + Self::tool_router_registration();
        Self {
            tool_router,
            context,
            registry,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Names of the tools routed by this server.
    #[must_use]
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl DartMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        helpers::render_local(&"ok")
    }
}

#[tool_handler]
impl ServerHandler for DartMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "{SERVER_INSTRUCTIONS}\n- {} tools are registered.",
                self.registry.len()
            )),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
