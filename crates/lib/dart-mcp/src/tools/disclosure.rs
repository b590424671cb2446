//! DS001 disclosure tools.

use dart_model::requests::{CorpCodeParams, DisclosureSearchParams, ReceiptParams};
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    tool,
    tool_router,
};

use crate::DartMcp;
use crate::helpers::render;

#[tool_router(router = tool_router_disclosure, vis = "pub")]
impl DartMcp {
    #[tool(description = "공시검색: Search disclosures by company, date range, and disclosure type. All filters are optional.")]
    async fn get_disclosure_list(
        &self,
        Parameters(params): Parameters<DisclosureSearchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.disclosure.search_disclosures(&params).await))
    }

    #[tool(description = "기업개황: Company overview (name, CEO, market, address, industry, fiscal month).")]
    async fn get_corporation_info(
        &self,
        Parameters(params): Parameters<CorpCodeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.disclosure.company_overview(&params).await))
    }

    #[tool(description = "공시서류원본파일: Download the original filing archive for a receipt number and extract it locally. Returns the extraction directory.")]
    async fn get_original_document(
        &self,
        Parameters(params): Parameters<ReceiptParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.disclosure.download_document(&params).await))
    }

    #[tool(description = "고유번호: Download the full corporation code listing and refresh the local corporation code index.")]
    async fn get_corporation_code_file(&self) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.disclosure.download_corp_codes().await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use dart_core::client::DartClientConfig;
    use dart_core::services::{DartContext, DartContextConfig};

    use crate::helpers::result_text;

    #[tokio::test]
    async fn unreachable_host_still_reports_status() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = DartContextConfig::new(
            DartClientConfig::new("test-key").with_base_url("http://127.0.0.1:9"),
            dir.path(),
        );
        let context = DartContext::new(config).expect("context should build");
        let server = DartMcp::new(Arc::new(context));
        let corp = CorpCodeParams {
            corp_code: "00126380".to_string(),
        };
        let receipt = ReceiptParams {
            rcept_no: "20240312000736".to_string(),
        };

        let results = [
            server
                .get_disclosure_list(Parameters(DisclosureSearchParams::default()))
                .await,
            server.get_corporation_info(Parameters(corp)).await,
            server.get_original_document(Parameters(receipt)).await,
            server.get_corporation_code_file().await,
        ];
        for result in results {
            let result = result.expect("not a protocol error");
            let text = result_text(&result);
            assert!(text.starts_with("status: 900\n"), "{text}");
            assert_eq!(result.is_error, Some(true));
        }
        assert!(!dir.path().join("documents").exists());
    }
}
