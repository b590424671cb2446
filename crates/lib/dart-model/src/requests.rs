//! Request parameters for OpenDART endpoints.
//!
//! Each struct doubles as the query string of an endpoint and as the MCP tool
//! input schema. Optional fields are skipped when unset so they never reach
//! the wire. Nothing is validated locally; the remote service reports bad
//! input through its status codes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for endpoints keyed by a single corporation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CorpCodeParams {
    #[schemars(description = "8-digit OpenDART corporation code (고유번호)")]
    pub corp_code: String,
}

/// Parameters for the disclosure search (`list.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DisclosureSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "8-digit corporation code; omit to search all companies")]
    pub corp_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Search start date, YYYYMMDD")]
    pub bgn_de: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Search end date, YYYYMMDD")]
    pub end_de: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Only the latest amended report: Y or N")]
    pub last_reprt_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Disclosure type: A periodic, B major event, C issuance, D ownership, E other, F audit, G fund, H ABS, I exchange, J FTC")]
    pub pblntf_ty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Detailed disclosure type, e.g. A001 annual report")]
    pub pblntf_detail_ty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Corporation class: Y KOSPI, K KOSDAQ, N KONEX, E other")]
    pub corp_cls: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Sort key: date, crp (company), rpt (report name)")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Sort order: asc or desc")]
    pub sort_mth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Page number, default 1")]
    pub page_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Items per page, 1-100, default 10")]
    pub page_count: Option<String>,
}

/// Parameters for endpoints keyed by a receipt number.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ReceiptParams {
    #[schemars(description = "14-digit receipt number (접수번호)")]
    pub rcept_no: String,
}

/// Parameters shared by the periodic report endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PeriodicReportParams {
    #[schemars(description = "8-digit corporation code; multi-company endpoints accept a comma separated list")]
    pub corp_code: String,
    #[schemars(description = "Business year, YYYY (2015 or later)")]
    pub bsns_year: String,
    #[schemars(description = "Report code: 11013 Q1, 11012 half-year, 11014 Q3, 11011 annual")]
    pub reprt_code: String,
}

/// Parameters for the XBRL original file download.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct XbrlParams {
    #[schemars(description = "14-digit receipt number of the periodic report")]
    pub rcept_no: String,
    #[schemars(description = "Report code: 11013 Q1, 11012 half-year, 11014 Q3, 11011 annual")]
    pub reprt_code: String,
}

/// Parameters for the full single-company financial statements.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FullStatementParams {
    #[schemars(description = "8-digit corporation code")]
    pub corp_code: String,
    #[schemars(description = "Business year, YYYY")]
    pub bsns_year: String,
    #[schemars(description = "Report code: 11013 Q1, 11012 half-year, 11014 Q3, 11011 annual")]
    pub reprt_code: String,
    #[schemars(description = "Statement scope: CFS consolidated, OFS separate")]
    pub fs_div: String,
}

/// Parameters for the XBRL taxonomy statement templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TaxonomyParams {
    #[schemars(description = "Statement template code, e.g. BS1 balance sheet, IS1 income statement, CF1 cash flow")]
    pub sj_div: String,
}

/// Parameters for the financial indicator endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct IndicatorParams {
    #[schemars(description = "8-digit corporation code; the multi-company endpoint accepts a comma separated list")]
    pub corp_code: String,
    #[schemars(description = "Business year, YYYY")]
    pub bsns_year: String,
    #[schemars(description = "Report code: 11013 Q1, 11012 half-year, 11014 Q3, 11011 annual")]
    pub reprt_code: String,
    #[schemars(description = "Indicator class: M210000 profitability, M220000 stability, M230000 growth, M240000 activity")]
    pub idx_cl_code: String,
}

/// Parameters shared by the major event and registration statement endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EventPeriodParams {
    #[schemars(description = "8-digit corporation code")]
    pub corp_code: String,
    #[schemars(description = "Search start date, YYYYMMDD")]
    pub bgn_de: String,
    #[schemars(description = "Search end date, YYYYMMDD")]
    pub end_de: String,
}
