use dart_model::schema::STATUS_NO_DATA;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::DartMcp;
use crate::helpers;

/// Parameters for fetching one tool's metadata.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ToolInfoParams {
    #[schemars(description = "Tool name, e.g. get_single_acc")]
    pub name: String,
}

/// Parameters for listing tool names.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ListToolNamesParams {
    #[schemars(description = "Only list tools carrying this tag, e.g. DS003 or financial")]
    pub tag: Option<String>,
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl DartMcp {
    #[tool(description = "Markdown guide to every tool: parameters, required fields, and tools commonly used next.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        helpers::render_local(&self.registry.render_prompt())
    }

    #[tool(description = "Metadata for one tool: Korean name, description, parameter schema, linked tools, and tags.")]
    async fn get_tool_info(
        &self,
        Parameters(params): Parameters<ToolInfoParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.registry.get(&params.name) {
            Some(metadata) => helpers::render_local(metadata),
            None => Ok(helpers::render_local_failure(
                STATUS_NO_DATA,
                "unknown tool",
                format!(
                    "unknown tool: {}; call list_tool_names for the available tools",
                    params.name
                ),
            )),
        }
    }

    #[tool(description = "List registered tool names, optionally filtered by tag.")]
    async fn list_tool_names(
        &self,
        Parameters(params): Parameters<ListToolNamesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let names: Vec<&str> = self
            .registry
            .list()
            .iter()
            .filter(|tool| params.tag.as_deref().is_none_or(|tag| tool.has_tag(tag)))
            .map(|tool| tool.name.as_str())
            .collect();
        helpers::render_local(&names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use dart_core::client::DartClientConfig;
    use dart_core::services::{DartContext, DartContextConfig};

    use crate::helpers::result_text;

    fn server() -> DartMcp {
        let config = DartContextConfig::new(
            DartClientConfig::new("test-key").with_base_url("http://127.0.0.1:9"),
            "data",
        );
        DartMcp::new(Arc::new(DartContext::new(config).expect("context should build")))
    }

    #[tokio::test]
    async fn help_tools_report_status() {
        let server = server();

        let guide = result_text(&server.help().await.expect("help"));
        assert!(guide.starts_with("status: 000\n"), "{guide}");
        assert!(guide.contains("## get_single_acc (단일회사 주요계정)"));

        let info = server
            .get_tool_info(Parameters(ToolInfoParams {
                name: "get_corp_info_by_corp_code".to_string(),
            }))
            .await
            .expect("tool info");
        let text = result_text(&info);
        assert!(text.starts_with("status: 000\n"), "{text}");
        assert!(text.contains("고유번호 조회"));

        let listed = server
            .list_tool_names(Parameters(ListToolNamesParams {
                tag: Some("ds004".to_string()),
            }))
            .await
            .expect("list");
        let text = result_text(&listed);
        assert!(text.starts_with("status: 000\n"), "{text}");
        assert!(text.contains("get_major_stock") && !text.contains("get_single_acc"));
    }

    #[tokio::test]
    async fn unknown_tool_is_a_no_data_result() {
        let result = server()
            .get_tool_info(Parameters(ToolInfoParams {
                name: "get_everything".to_string(),
            }))
            .await
            .expect("not a protocol error");

        let text = result_text(&result);
        assert!(text.starts_with("status: 013\n"), "{text}");
        assert!(text.contains("list_tool_names"));
        assert_eq!(result.is_error, Some(true));
    }
}
