use dart_model::requests::EventPeriodParams;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    tool,
    tool_router,
};

use crate::DartMcp;
use crate::helpers::render;

#[tool_router(router = tool_router_registration, vis = "pub")]
impl DartMcp {
    #[tool(description = "증권신고서(지분증권): Registration statements for equity securities.")]
    async fn get_equity_securities_registration(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.registration.equity_securities(&params).await))
    }

    #[tool(description = "증권신고서(채무증권): Registration statements for debt securities.")]
    async fn get_debt_securities_registration(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.registration.debt_securities(&params).await))
    }

    #[tool(description = "증권신고서(증권예탁증권): Registration statements for depositary receipts.")]
    async fn get_depositary_receipt_registration(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.registration.depositary_receipts(&params).await))
    }

    #[tool(description = "증권신고서(합병): Registration statements for mergers.")]
    async fn get_merger_registration(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.registration.merger(&params).await))
    }

    #[tool(description = "증권신고서(주식의포괄적교환·이전): Registration statements for comprehensive share exchanges and transfers.")]
    async fn get_stock_exchange_registration(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.registration.stock_exchange_transfer(&params).await))
    }

    #[tool(description = "증권신고서(분할): Registration statements for divisions.")]
    async fn get_division_registration(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.registration.division(&params).await))
    }
}
