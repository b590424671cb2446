//! Startup catalogue of every tool the server exposes.

use dart_model::requests::{
    CorpCodeParams,
    DisclosureSearchParams,
    EventPeriodParams,
    FullStatementParams,
    IndicatorParams,
    PeriodicReportParams,
    ReceiptParams,
    TaxonomyParams,
    XbrlParams,
};
use schemars::JsonSchema;
use serde_json::{Value, json};

use crate::registry::{ToolMetadata, ToolRegistry};
use crate::tools::context::{ListToolNamesParams, ToolInfoParams};
use crate::tools::corp_code::{CorpSearchParams, StockCodeParams};

/// `(tool name, Korean name, description)`.
type CatalogRow = (&'static str, &'static str, &'static str);

const PERIODIC_LINKS: &[&str] =
    &["search_corporation_code", "get_disclosure_list", "get_single_acc"];
const EVENT_LINKS: &[&str] =
    &["search_corporation_code", "get_disclosure_list", "get_original_document"];

const PERIODIC_TOOLS: &[CatalogRow] = &[
    ("get_capital_changes", "증자(감자) 현황", "Capital increase and reduction history."),
    ("get_dividend_info", "배당에 관한 사항", "Dividend details: payout ratio, dividend per share, yield."),
    ("get_treasury_stock_status", "자기주식 취득 및 처분 현황", "Treasury stock acquisitions and disposals."),
    ("get_largest_shareholders", "최대주주 현황", "Largest shareholder and related parties holdings."),
    ("get_largest_shareholder_changes", "최대주주 변동현황", "Changes of the largest shareholder."),
    ("get_minority_shareholders", "소액주주 현황", "Minority shareholder counts and holdings."),
    ("get_executives", "임원 현황", "Registered executives and their careers."),
    ("get_employees", "직원 현황", "Employee headcount, tenure, and average pay."),
    ("get_director_individual_pay", "이사·감사의 개인별 보수현황", "Individual pay of directors and auditors."),
    ("get_director_total_pay", "이사·감사 전체의 보수현황", "Total pay of all directors and auditors."),
    ("get_top_individual_pay", "개인별 보수지급 금액(5억이상 상위5인)", "Top five individual pay amounts of 500 million KRW or more."),
    ("get_other_corp_investments", "타법인 출자현황", "Investments in other corporations."),
    ("get_stock_totals", "주식의 총수 현황", "Total number of authorized, issued, and outstanding shares."),
    ("get_debt_securities_issuance", "채무증권 발행실적", "Debt securities issuance record."),
    ("get_commercial_paper_balance", "기업어음증권 미상환 잔액", "Outstanding commercial paper balance."),
    ("get_short_term_bond_balance", "단기사채 미상환 잔액", "Outstanding short-term bond balance."),
    ("get_corporate_bond_balance", "회사채 미상환 잔액", "Outstanding corporate bond balance."),
    ("get_hybrid_securities_balance", "신종자본증권 미상환 잔액", "Outstanding hybrid capital securities balance."),
    ("get_contingent_capital_balance", "조건부 자본증권 미상환 잔액", "Outstanding contingent convertible capital securities balance."),
    ("get_auditor_opinion", "회계감사인의 명칭 및 감사의견", "External auditor name and audit opinion."),
    ("get_audit_service_contracts", "감사용역체결현황", "Audit service contracts."),
    ("get_non_audit_service_contracts", "회계감사인과의 비감사용역 계약체결 현황", "Non-audit service contracts with the external auditor."),
    ("get_outside_directors", "사외이사 및 그 변동현황", "Outside directors and their changes."),
    ("get_unregistered_executive_pay", "미등기임원 보수현황", "Pay of unregistered executives."),
    ("get_director_pay_approved", "이사·감사 전체의 보수현황(주주총회 승인금액)", "Director and auditor pay limits approved by the shareholders meeting."),
    ("get_director_pay_by_type", "이사·감사 전체의 보수현황(보수지급금액 - 유형별)", "Director and auditor pay paid, by type."),
    ("get_public_offering_fund_usage", "공모자금의 사용내역", "Use of publicly offered funds."),
    ("get_private_placement_fund_usage", "사모자금의 사용내역", "Use of privately placed funds."),
];

const MAJOR_EVENT_TOOLS: &[CatalogRow] = &[
    ("get_default_occurrence", "부도발생", "Default occurrences."),
    ("get_business_suspension", "영업정지", "Business suspensions."),
    ("get_rehabilitation_filing", "회생절차 개시신청", "Filings to open rehabilitation proceedings."),
    ("get_dissolution_cause", "해산사유 발생", "Occurrence of dissolution causes."),
    ("get_paid_in_capital_increase", "유상증자 결정", "Paid-in capital increase decisions."),
    ("get_bonus_issue", "무상증자 결정", "Bonus issue decisions."),
    ("get_paid_and_bonus_issue", "유무상증자 결정", "Combined paid-in and bonus issue decisions."),
    ("get_capital_reduction", "감자 결정", "Capital reduction decisions."),
    ("get_creditor_management_start", "채권은행 등의 관리절차 개시", "Start of creditor bank management procedures."),
    ("get_lawsuits", "소송 등의 제기", "Lawsuits filed."),
    ("get_overseas_listing_decision", "해외 증권시장 주권등 상장 결정", "Decisions to list on overseas exchanges."),
    ("get_overseas_delisting_decision", "해외 증권시장 주권등 상장폐지 결정", "Decisions to delist from overseas exchanges."),
    ("get_overseas_listing", "해외 증권시장 주권등 상장", "Completed overseas listings."),
    ("get_overseas_delisting", "해외 증권시장 주권등 상장폐지", "Completed overseas delistings."),
    ("get_convertible_bond_issue", "전환사채권 발행결정", "Convertible bond issuance decisions."),
    ("get_bond_with_warrant_issue", "신주인수권부사채권 발행결정", "Bond with warrant issuance decisions."),
    ("get_exchangeable_bond_issue", "교환사채권 발행결정", "Exchangeable bond issuance decisions."),
    ("get_creditor_management_stop", "채권은행 등의 관리절차 중단", "Suspension of creditor bank management procedures."),
    ("get_write_down_contingent_bond_issue", "상각형 조건부자본증권 발행결정", "Write-down contingent capital securities issuance decisions."),
    ("get_asset_transfer_put_back", "자산양수도(기타), 풋백옵션", "Other asset transfers and put-back options."),
    ("get_tangible_asset_acquisition", "유형자산 양수 결정", "Tangible asset acquisition decisions."),
    ("get_tangible_asset_disposal", "유형자산 양도 결정", "Tangible asset disposal decisions."),
    ("get_equity_investment_acquisition", "타법인 주식 및 출자증권 양수결정", "Decisions to acquire shares of other corporations."),
    ("get_equity_investment_disposal", "타법인 주식 및 출자증권 양도결정", "Decisions to dispose of shares of other corporations."),
    ("get_equity_linked_bond_acquisition", "주권 관련 사채권 양수 결정", "Equity-linked bond acquisition decisions."),
    ("get_equity_linked_bond_disposal", "주권 관련 사채권 양도 결정", "Equity-linked bond disposal decisions."),
    ("get_business_acquisition", "영업양수 결정", "Business acquisition decisions."),
    ("get_business_transfer", "영업양도 결정", "Business transfer decisions."),
    ("get_merger_decision", "회사합병 결정", "Merger decisions."),
    ("get_split_decision", "회사분할 결정", "Corporate split decisions."),
    ("get_split_merger_decision", "회사분할합병 결정", "Split-merger decisions."),
    ("get_stock_exchange_decision", "주식교환·이전 결정", "Share exchange and transfer decisions."),
    ("get_treasury_acquisition_decision", "자기주식 취득 결정", "Treasury stock acquisition decisions."),
    ("get_treasury_disposal_decision", "자기주식 처분 결정", "Treasury stock disposal decisions."),
    ("get_treasury_trust_contract", "자기주식취득 신탁계약 체결 결정", "Treasury stock trust contract decisions."),
    ("get_treasury_trust_termination", "자기주식취득 신탁계약 해지 결정", "Treasury stock trust termination decisions."),
];

const REGISTRATION_TOOLS: &[CatalogRow] = &[
    ("get_equity_securities_registration", "증권신고서(지분증권)", "Registration statements for equity securities."),
    ("get_debt_securities_registration", "증권신고서(채무증권)", "Registration statements for debt securities."),
    ("get_depositary_receipt_registration", "증권신고서(증권예탁증권)", "Registration statements for depositary receipts."),
    ("get_merger_registration", "증권신고서(합병)", "Registration statements for mergers."),
    ("get_stock_exchange_registration", "증권신고서(주식의포괄적교환·이전)", "Registration statements for comprehensive share exchanges and transfers."),
    ("get_division_registration", "증권신고서(분할)", "Registration statements for divisions."),
];

/// Builds the registry by registering every tool in turn.
#[must_use]
pub fn build_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_context(&mut registry);
    register_disclosure(&mut registry);
    register_rows::<PeriodicReportParams>(
        &mut registry,
        PERIODIC_TOOLS,
        &["DS002", "periodic"],
        PERIODIC_LINKS,
    );
    register_financial(&mut registry);
    register_ownership(&mut registry);
    register_rows::<EventPeriodParams>(
        &mut registry,
        MAJOR_EVENT_TOOLS,
        &["DS005", "major_event"],
        EVENT_LINKS,
    );
    register_rows::<EventPeriodParams>(
        &mut registry,
        REGISTRATION_TOOLS,
        &["DS006", "registration"],
        EVENT_LINKS,
    );
    registry
}

fn no_params() -> Value {
    json!({ "type": "object", "properties": {} })
}

fn register_rows<P: JsonSchema>(
    registry: &mut ToolRegistry,
    rows: &[CatalogRow],
    tags: &[&str],
    linked_tools: &[&str],
) {
    for (name, korean_name, description) in rows {
        registry.register(
            ToolMetadata::with_params::<P>(*name, *description)
                .with_korean_name(*korean_name)
                .with_linked_tools(linked_tools)
                .with_tags(tags),
        );
    }
}

fn register_context(registry: &mut ToolRegistry) {
    registry.register(
        ToolMetadata::new("health", "Health check. Returns 'ok'.", no_params())
            .with_tags(&["meta"]),
    );
    registry.register(
        ToolMetadata::new(
            "help",
            "Markdown guide to every tool: parameters, required fields, and tools commonly used next.",
            no_params(),
        )
        .with_linked_tools(&["get_tool_info", "list_tool_names"])
        .with_tags(&["meta"]),
    );
    registry.register(
        ToolMetadata::with_params::<ToolInfoParams>(
            "get_tool_info",
            "Metadata for one tool: Korean name, description, parameter schema, linked tools, and tags.",
        )
        .with_linked_tools(&["list_tool_names"])
        .with_tags(&["meta"]),
    );
    registry.register(
        ToolMetadata::with_params::<ListToolNamesParams>(
            "list_tool_names",
            "List registered tool names, optionally filtered by tag.",
        )
        .with_linked_tools(&["get_tool_info"])
        .with_tags(&["meta"]),
    );
    registry.register(
        ToolMetadata::with_params::<CorpSearchParams>(
            "search_corporation_code",
            "Find 8-digit corporation codes by company name in the local listing. Call get_corporation_code_file first if the listing is missing.",
        )
        .with_korean_name("고유번호 검색")
        .with_linked_tools(&[
            "get_corporation_code_file",
            "get_corporation_info",
            "get_disclosure_list",
        ])
        .with_tags(&["DS001", "corp_code", "local"]),
    );
    registry.register(
        ToolMetadata::with_params::<StockCodeParams>(
            "get_corp_code_by_stock_code",
            "Resolve a listed company's corporation code from its 6-digit stock code using the local listing.",
        )
        .with_korean_name("종목코드 조회")
        .with_linked_tools(&["search_corporation_code", "get_corporation_info"])
        .with_tags(&["DS001", "corp_code", "local"]),
    );
    registry.register(
        ToolMetadata::with_params::<CorpCodeParams>(
            "get_corp_info_by_corp_code",
            "Look up the name, stock code, and last modification date of an 8-digit corporation code in the local listing.",
        )
        .with_korean_name("고유번호 조회")
        .with_linked_tools(&["get_corporation_info", "get_disclosure_list"])
        .with_tags(&["DS001", "corp_code", "local"]),
    );
}

fn register_disclosure(registry: &mut ToolRegistry) {
    let tags = &["DS001", "disclosure"];
    registry.register(
        ToolMetadata::with_params::<DisclosureSearchParams>(
            "get_disclosure_list",
            "Search disclosures by company, date range, and disclosure type. All filters are optional.",
        )
        .with_korean_name("공시검색")
        .with_linked_tools(&["search_corporation_code", "get_original_document"])
        .with_tags(tags),
    );
    registry.register(
        ToolMetadata::with_params::<CorpCodeParams>(
            "get_corporation_info",
            "Company overview (name, CEO, market, address, industry, fiscal month).",
        )
        .with_korean_name("기업개황")
        .with_linked_tools(&["search_corporation_code", "get_disclosure_list"])
        .with_tags(tags),
    );
    registry.register(
        ToolMetadata::with_params::<ReceiptParams>(
            "get_original_document",
            "Download the original filing archive for a receipt number and extract it locally. Returns the extraction directory.",
        )
        .with_korean_name("공시서류원본파일")
        .with_linked_tools(&["get_disclosure_list"])
        .with_tags(tags),
    );
    registry.register(
        ToolMetadata::new(
            "get_corporation_code_file",
            "Download the full corporation code listing and refresh the local corporation code index.",
            no_params(),
        )
        .with_korean_name("고유번호")
        .with_linked_tools(&["search_corporation_code", "get_corp_code_by_stock_code"])
        .with_tags(tags),
    );
}

fn register_financial(registry: &mut ToolRegistry) {
    let tags = &["DS003", "financial"];
    let links = &["search_corporation_code", "get_single_acc_all", "get_single_index"];
    registry.register(
        ToolMetadata::with_params::<PeriodicReportParams>(
            "get_single_acc",
            "Major accounts from the balance sheet and income statement of one company for a business year and report code (2015 onwards).",
        )
        .with_korean_name("단일회사 주요계정")
        .with_linked_tools(links)
        .with_tags(tags),
    );
    registry.register(
        ToolMetadata::with_params::<PeriodicReportParams>(
            "get_multi_acc",
            "Key account items for several companies; corp_code accepts a comma separated list.",
        )
        .with_korean_name("다중회사 주요계정")
        .with_linked_tools(links)
        .with_tags(tags),
    );
    registry.register(
        ToolMetadata::with_params::<XbrlParams>(
            "get_xbrl_file",
            "Download the XBRL archive of a periodic report and extract it locally.",
        )
        .with_korean_name("재무제표 원본파일(XBRL)")
        .with_linked_tools(&["get_disclosure_list", "get_xbrl_taxonomy"])
        .with_tags(tags),
    );
    registry.register(
        ToolMetadata::with_params::<FullStatementParams>(
            "get_single_acc_all",
            "Every account of the full financial statements for one company. fs_div selects consolidated (CFS) or separate (OFS).",
        )
        .with_korean_name("단일회사 전체 재무제표")
        .with_linked_tools(&["search_corporation_code", "get_xbrl_taxonomy"])
        .with_tags(tags),
    );
    registry.register(
        ToolMetadata::with_params::<TaxonomyParams>(
            "get_xbrl_taxonomy",
            "Standard account templates of the XBRL taxonomy for a statement type.",
        )
        .with_korean_name("XBRL택사노미재무제표양식")
        .with_linked_tools(&["get_single_acc_all"])
        .with_tags(tags),
    );
    registry.register(
        ToolMetadata::with_params::<IndicatorParams>(
            "get_single_index",
            "Profitability, stability, growth, or activity indicators for one company.",
        )
        .with_korean_name("단일회사 주요 재무지표")
        .with_linked_tools(&["search_corporation_code", "get_multi_index"])
        .with_tags(tags),
    );
    registry.register(
        ToolMetadata::with_params::<IndicatorParams>(
            "get_multi_index",
            "Financial indicators for several companies; corp_code accepts a comma separated list.",
        )
        .with_korean_name("다중회사 주요 재무지표")
        .with_linked_tools(&["search_corporation_code", "get_single_index"])
        .with_tags(tags),
    );
    // get_single_acc appears twice in the catalogue; this later entry is the one kept.
    registry.register(
        ToolMetadata::with_params::<PeriodicReportParams>(
            "get_single_acc",
            "Key account items (assets, liabilities, equity, revenue, operating income, net income) for one company.",
        )
        .with_korean_name("단일회사 주요계정")
        .with_linked_tools(links)
        .with_tags(tags),
    );
}

fn register_ownership(registry: &mut ToolRegistry) {
    let tags = &["DS004", "ownership"];
    registry.register(
        ToolMetadata::with_params::<CorpCodeParams>(
            "get_major_stock",
            "Large holding (5% rule) reports filed for a company.",
        )
        .with_korean_name("대량보유 상황보고")
        .with_linked_tools(&[
            "search_corporation_code",
            "get_executive_stock",
            "get_largest_shareholders",
        ])
        .with_tags(tags),
    );
    registry.register(
        ToolMetadata::with_params::<CorpCodeParams>(
            "get_executive_stock",
            "Ownership reports of executives and major shareholders.",
        )
        .with_korean_name("임원ㆍ주요주주 소유보고")
        .with_linked_tools(&["search_corporation_code", "get_major_stock"])
        .with_tags(tags),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn duplicate_catalogue_entry_keeps_the_later_description() {
        let registry = build_registry();

        let matching = registry
            .list()
            .iter()
            .filter(|tool| tool.name == "get_single_acc")
            .count();
        assert_eq!(matching, 1);
        let tool = registry.get("get_single_acc").expect("registered");
        assert!(tool.description.starts_with("Key account items"));
    }

    #[test]
    fn every_group_is_tagged() {
        let registry = build_registry();
        for tag in ["DS001", "DS002", "DS003", "DS004", "DS005", "DS006", "meta"] {
            assert!(
                registry.list().iter().any(|tool| tool.has_tag(tag)),
                "no tool tagged {tag}"
            );
        }
        assert_eq!(registry.list().iter().filter(|tool| tool.has_tag("DS002")).count(), 28);
        assert_eq!(registry.list().iter().filter(|tool| tool.has_tag("DS005")).count(), 36);
        assert_eq!(registry.list().iter().filter(|tool| tool.has_tag("DS006")).count(), 6);
    }

    #[test]
    fn linked_tools_reference_registered_names() {
        let registry = build_registry();
        let names: HashSet<&str> = registry.names().into_iter().collect();
        for tool in registry.list() {
            for linked in &tool.linked_tools {
                assert!(names.contains(linked.as_str()), "{} links unknown {linked}", tool.name);
            }
        }
    }
}
