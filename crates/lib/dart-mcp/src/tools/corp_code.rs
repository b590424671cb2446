//! Local corporation code lookups.
//!
//! These tools never call OpenDART; they read the listing saved by
//! `get_corporation_code_file`. Results still use the OpenDART envelope:
//! `000` for a hit, `013` for a miss, `014` when the listing is missing.

use dart_core::corp_code::CorpCodeError;
use dart_model::models::CorpRecord;
use dart_model::requests::CorpCodeParams;
use dart_model::schema::{STATUS_NO_DATA, STATUS_NO_FILE, STATUS_UNDEFINED_ERROR};
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::DartMcp;
use crate::helpers;

pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Parameters for searching the local corporation code listing.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CorpSearchParams {
    #[schemars(description = "Company name or part of it; matching ignores case")]
    pub corp_name: String,
    #[schemars(description = "Maximum number of matches to return, default 50")]
    pub limit: Option<usize>,
}

/// Parameters for resolving a listed company by its stock code.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct StockCodeParams {
    #[schemars(description = "6-digit KRX stock code, e.g. 005930")]
    pub stock_code: String,
}

/// Search result payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpSearchResult {
    pub query: String,
    pub total: usize,
    pub results: Vec<CorpRecord>,
}

#[tool_router(router = tool_router_corp_code, vis = "pub")]
impl DartMcp {
    #[tool(description = "고유번호 검색: Find 8-digit corporation codes by company name in the local listing. Call get_corporation_code_file first if the listing is missing.")]
    async fn search_corporation_code(
        &self,
        Parameters(params): Parameters<CorpSearchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let matches = match self.context.corp_codes.search(&params.corp_name).await {
            Ok(matches) => matches,
            Err(err) => return Ok(lookup_failure(&err)),
        };
        helpers::render_local(&CorpSearchResult {
            query: params.corp_name,
            total: matches.len(),
            results: matches.into_iter().take(limit).collect(),
        })
    }

    #[tool(description = "종목코드 조회: Resolve a listed company's corporation code from its 6-digit stock code using the local listing.")]
    async fn get_corp_code_by_stock_code(
        &self,
        Parameters(params): Parameters<StockCodeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let stock_code = params.stock_code.trim();
        match self.context.corp_codes.find_by_stock_code(stock_code).await {
            Ok(Some(record)) => helpers::render_local(&record),
            Ok(None) => Ok(lookup_miss(format!(
                "no listed corporation with stock code {stock_code}"
            ))),
            Err(err) => Ok(lookup_failure(&err)),
        }
    }

    #[tool(description = "고유번호 조회: Look up the name, stock code, and last modification date of an 8-digit corporation code in the local listing.")]
    async fn get_corp_info_by_corp_code(
        &self,
        Parameters(params): Parameters<CorpCodeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let corp_code = params.corp_code.trim();
        match self.context.corp_codes.find_by_corp_code(corp_code).await {
            Ok(Some(record)) => helpers::render_local(&record),
            Ok(None) => Ok(lookup_miss(format!("no corporation with corp code {corp_code}"))),
            Err(err) => Ok(lookup_failure(&err)),
        }
    }
}

fn lookup_miss(error: String) -> CallToolResult {
    helpers::render_local_failure(STATUS_NO_DATA, "no matching corporation", error)
}

fn lookup_failure(err: &CorpCodeError) -> CallToolResult {
    match err {
        CorpCodeError::NotFound(path) => helpers::render_local_failure(
            STATUS_NO_FILE,
            "corp code listing is missing",
            format!(
                "corp code file not found at {}; call get_corporation_code_file to download it",
                path.display()
            ),
        ),
        other => {
            warn!(error = %other, "corp code lookup failed");
            helpers::render_local_failure(
                STATUS_UNDEFINED_ERROR,
                "corp code listing could not be read",
                other.to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use dart_core::client::DartClientConfig;
    use dart_core::services::{DartContext, DartContextConfig};

    use crate::helpers::result_text as text;

    const LISTING: &str = "<result>\
        <list><corp_code>00126380</corp_code><corp_name>삼성전자</corp_name><stock_code>005930</stock_code><modify_date>20230110</modify_date></list>\
        <list><corp_code>00126371</corp_code><corp_name>삼성전기</corp_name><stock_code>009150</stock_code><modify_date>20230110</modify_date></list>\
        <list><corp_code>00149655</corp_code><corp_name>삼성물산</corp_name><stock_code>028260</stock_code><modify_date>20230110</modify_date></list>\
        </result>";

    fn server(data_dir: &std::path::Path) -> DartMcp {
        let config = DartContextConfig::new(
            DartClientConfig::new("test-key").with_base_url("http://127.0.0.1:9"),
            data_dir,
        );
        DartMcp::new(Arc::new(DartContext::new(config).expect("context should build")))
    }

    fn payload(result: &CallToolResult) -> String {
        let text = text(result);
        let (_, content) = text.split_once("content:\n").expect("content section");
        content.to_string()
    }

    async fn call_all(server: &DartMcp, stock_code: &str, corp_code: &str) -> Vec<CallToolResult> {
        let search = server
            .search_corporation_code(Parameters(CorpSearchParams {
                corp_name: "삼성".to_string(),
                limit: None,
            }))
            .await
            .expect("search");
        let by_stock = server
            .get_corp_code_by_stock_code(Parameters(StockCodeParams {
                stock_code: stock_code.to_string(),
            }))
            .await
            .expect("stock code lookup");
        let by_corp = server
            .get_corp_info_by_corp_code(Parameters(CorpCodeParams {
                corp_code: corp_code.to_string(),
            }))
            .await
            .expect("corp code lookup");
        vec![search, by_stock, by_corp]
    }

    #[tokio::test]
    async fn local_lookups_always_report_status() {
        let dir = tempfile::tempdir().expect("tempdir");
        let server = server(dir.path());

        for result in call_all(&server, "005930", "00126380").await {
            let text = text(&result);
            assert!(text.starts_with("status: 014\n"), "{text}");
            assert!(text.contains("get_corporation_code_file"), "{text}");
            assert_eq!(result.is_error, Some(true));
        }

        std::fs::write(dir.path().join("CORPCODE.xml"), LISTING).expect("write listing");
        for result in call_all(&server, "005930", "00126380").await {
            let text = text(&result);
            assert!(text.starts_with("status: 000\n"), "{text}");
            assert_eq!(result.is_error, Some(false));
        }

        let misses = call_all(&server, "999999", "99999999").await;
        for result in &misses[1..] {
            let text = text(result);
            assert!(text.starts_with("status: 013\n"), "{text}");
            assert!(text.contains("error: no "), "{text}");
            assert_eq!(result.is_error, Some(true));
        }
    }

    #[tokio::test]
    async fn search_applies_limit_and_reports_total() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("CORPCODE.xml"), LISTING).expect("write listing");
        let server = server(dir.path());

        let result = server
            .search_corporation_code(Parameters(CorpSearchParams {
                corp_name: "삼성".to_string(),
                limit: Some(2),
            }))
            .await
            .expect("search");
        let payload: CorpSearchResult =
            serde_json::from_str(&payload(&result)).expect("json payload");

        assert_eq!(payload.total, 3);
        assert_eq!(payload.results.len(), 2);
        assert_eq!(payload.results[0].corp_code, "00126380");
    }

    #[tokio::test]
    async fn code_lookups_resolve_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("CORPCODE.xml"), LISTING).expect("write listing");
        let server = server(dir.path());

        let by_stock = server
            .get_corp_code_by_stock_code(Parameters(StockCodeParams {
                stock_code: " 009150 ".to_string(),
            }))
            .await
            .expect("lookup");
        let record: CorpRecord = serde_json::from_str(&payload(&by_stock)).expect("record");
        assert_eq!(record.corp_code, "00126371");

        let by_corp = server
            .get_corp_info_by_corp_code(Parameters(CorpCodeParams {
                corp_code: "00149655".to_string(),
            }))
            .await
            .expect("lookup");
        let record: CorpRecord = serde_json::from_str(&payload(&by_corp)).expect("record");
        assert_eq!(record.corp_name, "삼성물산");
        assert_eq!(record.stock_code, "028260");
    }
}
