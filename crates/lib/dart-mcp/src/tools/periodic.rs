//! DS002 tools. All take `corp_code`, `bsns_year`, and `reprt_code`.

use dart_model::requests::PeriodicReportParams;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    tool,
    tool_router,
};

use crate::DartMcp;
use crate::helpers::render;

#[tool_router(router = tool_router_periodic, vis = "pub")]
impl DartMcp {
    #[tool(description = "증자(감자) 현황: Capital increase and reduction history.")]
    async fn get_capital_changes(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.capital_changes(&params).await))
    }

    #[tool(description = "배당에 관한 사항: Dividend details: payout ratio, dividend per share, yield.")]
    async fn get_dividend_info(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.dividends(&params).await))
    }

    #[tool(description = "자기주식 취득 및 처분 현황: Treasury stock acquisitions and disposals.")]
    async fn get_treasury_stock_status(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.treasury_stock(&params).await))
    }

    #[tool(description = "최대주주 현황: Largest shareholder and related parties holdings.")]
    async fn get_largest_shareholders(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.largest_shareholders(&params).await))
    }

    #[tool(description = "최대주주 변동현황: Changes of the largest shareholder.")]
    async fn get_largest_shareholder_changes(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.largest_shareholder_changes(&params).await))
    }

    #[tool(description = "소액주주 현황: Minority shareholder counts and holdings.")]
    async fn get_minority_shareholders(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.minority_shareholders(&params).await))
    }

    #[tool(description = "임원 현황: Registered executives and their careers.")]
    async fn get_executives(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.executives(&params).await))
    }

    #[tool(description = "직원 현황: Employee headcount, tenure, and average pay.")]
    async fn get_employees(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.employees(&params).await))
    }

    #[tool(description = "이사·감사의 개인별 보수현황: Individual pay of directors and auditors.")]
    async fn get_director_individual_pay(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.director_individual_pay(&params).await))
    }

    #[tool(description = "이사·감사 전체의 보수현황: Total pay of all directors and auditors.")]
    async fn get_director_total_pay(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.director_total_pay(&params).await))
    }

    #[tool(description = "개인별 보수지급 금액(5억이상 상위5인): Top five individual pay amounts of 500 million KRW or more.")]
    async fn get_top_individual_pay(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.top_individual_pay(&params).await))
    }

    #[tool(description = "타법인 출자현황: Investments in other corporations.")]
    async fn get_other_corp_investments(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.other_corp_investments(&params).await))
    }

    #[tool(description = "주식의 총수 현황: Total number of authorized, issued, and outstanding shares.")]
    async fn get_stock_totals(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.stock_totals(&params).await))
    }

    #[tool(description = "채무증권 발행실적: Debt securities issuance record.")]
    async fn get_debt_securities_issuance(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.debt_securities_issuance(&params).await))
    }

    #[tool(description = "기업어음증권 미상환 잔액: Outstanding commercial paper balance.")]
    async fn get_commercial_paper_balance(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.commercial_paper_balance(&params).await))
    }

    #[tool(description = "단기사채 미상환 잔액: Outstanding short-term bond balance.")]
    async fn get_short_term_bond_balance(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.short_term_bond_balance(&params).await))
    }

    #[tool(description = "회사채 미상환 잔액: Outstanding corporate bond balance.")]
    async fn get_corporate_bond_balance(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.corporate_bond_balance(&params).await))
    }

    #[tool(description = "신종자본증권 미상환 잔액: Outstanding hybrid capital securities balance.")]
    async fn get_hybrid_securities_balance(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.hybrid_securities_balance(&params).await))
    }

    #[tool(description = "조건부 자본증권 미상환 잔액: Outstanding contingent convertible capital securities balance.")]
    async fn get_contingent_capital_balance(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.contingent_capital_balance(&params).await))
    }

    #[tool(description = "회계감사인의 명칭 및 감사의견: External auditor name and audit opinion.")]
    async fn get_auditor_opinion(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.auditor_opinion(&params).await))
    }

    #[tool(description = "감사용역체결현황: Audit service contracts.")]
    async fn get_audit_service_contracts(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.audit_service_contracts(&params).await))
    }

    #[tool(description = "회계감사인과의 비감사용역 계약체결 현황: Non-audit service contracts with the external auditor.")]
    async fn get_non_audit_service_contracts(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.non_audit_service_contracts(&params).await))
    }

    #[tool(description = "사외이사 및 그 변동현황: Outside directors and their changes.")]
    async fn get_outside_directors(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.outside_directors(&params).await))
    }

    #[tool(description = "미등기임원 보수현황: Pay of unregistered executives.")]
    async fn get_unregistered_executive_pay(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.unregistered_executive_pay(&params).await))
    }

    #[tool(description = "이사·감사 전체의 보수현황(주주총회 승인금액): Director and auditor pay limits approved by the shareholders meeting.")]
    async fn get_director_pay_approved(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.director_pay_approved(&params).await))
    }

    #[tool(description = "이사·감사 전체의 보수현황(보수지급금액 - 유형별): Director and auditor pay paid, by type.")]
    async fn get_director_pay_by_type(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.director_pay_by_type(&params).await))
    }

    #[tool(description = "공모자금의 사용내역: Use of publicly offered funds.")]
    async fn get_public_offering_fund_usage(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.public_offering_fund_usage(&params).await))
    }

    #[tool(description = "사모자금의 사용내역: Use of privately placed funds.")]
    async fn get_private_placement_fund_usage(
        &self,
        Parameters(params): Parameters<PeriodicReportParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.periodic.private_placement_fund_usage(&params).await))
    }
}
