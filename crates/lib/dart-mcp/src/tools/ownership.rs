use dart_model::requests::CorpCodeParams;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    tool,
    tool_router,
};

use crate::DartMcp;
use crate::helpers::render;

#[tool_router(router = tool_router_ownership, vis = "pub")]
impl DartMcp {
    #[tool(description = "대량보유 상황보고: Large holding (5% rule) reports filed for a company.")]
    async fn get_major_stock(
        &self,
        Parameters(params): Parameters<CorpCodeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.ownership.major_stock_reports(&params).await))
    }

    #[tool(description = "임원ㆍ주요주주 소유보고: Ownership reports of executives and major shareholders.")]
    async fn get_executive_stock(
        &self,
        Parameters(params): Parameters<CorpCodeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.ownership.executive_stock_reports(&params).await))
    }
}
