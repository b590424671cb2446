//! DS003 financial statement tools.

use dart_model::requests::{
    FullStatementParams,
    IndicatorParams,
    PeriodicReportParams,
    TaxonomyParams,
    XbrlParams,
};
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    tool,
    tool_router,
};

use crate::DartMcp;
use crate::helpers::render;

#[tool_router(router = tool_router_financial, vis = "pub")]
impl DartMcp {
    #[tool(description = "단일회사 주요계정: Key account items (assets, liabilities, equity, revenue, operating income, net income) for one company.")]
    async fn get_single_acc(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.financial.single_accounts(&params).await))
    }

    #[tool(description = "다중회사 주요계정: Key account items for several companies; corp_code accepts a comma separated list.")]
    async fn get_multi_acc(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.financial.multi_accounts(&params).await))
    }

    #[tool(description = "재무제표 원본파일(XBRL): Download the XBRL archive of a periodic report and extract it locally.")]
    async fn get_xbrl_file(
        &self,
        Parameters(params): Parameters<XbrlParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.financial.download_xbrl(&params).await))
    }

    #[tool(description = "단일회사 전체 재무제표: Every account of the full financial statements for one company. fs_div selects consolidated (CFS) or separate (OFS).")]
    async fn get_single_acc_all(
        &self,
        Parameters(params): Parameters<FullStatementParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.financial.single_full_statements(&params).await))
    }

    #[tool(description = "XBRL택사노미재무제표양식: Standard account templates of the XBRL taxonomy for a statement type.")]
    async fn get_xbrl_taxonomy(
        &self,
        Parameters(params): Parameters<TaxonomyParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.financial.xbrl_taxonomy(&params).await))
    }

    #[tool(description = "단일회사 주요 재무지표: Profitability, stability, growth, or activity indicators for one company.")]
    async fn get_single_index(
        &self,
        Parameters(params): Parameters<IndicatorParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.financial.single_indicators(&params).await))
    }

    #[tool(description = "다중회사 주요 재무지표: Financial indicators for several companies; corp_code accepts a comma separated list.")]
    async fn get_multi_index(
        &self,
        Parameters(params): Parameters<IndicatorParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.financial.multi_indicators(&params).await))
    }
}
