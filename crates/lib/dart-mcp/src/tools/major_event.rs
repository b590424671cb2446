//! DS005 major event report tools.

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

#[tool_router(router = tool_router_major_event, vis = "pub")]
impl DartMcp {
    #[tool(description = "부도발생: Default occurrences.")]
    async fn get_default_occurrence(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.default_occurrence(&params).await))
    }

    #[tool(description = "영업정지: Business suspensions.")]
    async fn get_business_suspension(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.business_suspension(&params).await))
    }

    #[tool(description = "회생절차 개시신청: Filings to open rehabilitation proceedings.")]
    async fn get_rehabilitation_filing(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.rehabilitation_filing(&params).await))
    }

    #[tool(description = "해산사유 발생: Occurrence of dissolution causes.")]
    async fn get_dissolution_cause(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.dissolution_cause(&params).await))
    }

    #[tool(description = "유상증자 결정: Paid-in capital increase decisions.")]
    async fn get_paid_in_capital_increase(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.paid_in_capital_increase(&params).await))
    }

    #[tool(description = "무상증자 결정: Bonus issue decisions.")]
    async fn get_bonus_issue(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.bonus_issue(&params).await))
    }

    #[tool(description = "유무상증자 결정: Combined paid-in and bonus issue decisions.")]
    async fn get_paid_and_bonus_issue(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.paid_and_bonus_issue(&params).await))
    }

    #[tool(description = "감자 결정: Capital reduction decisions.")]
    async fn get_capital_reduction(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.capital_reduction(&params).await))
    }

    #[tool(description = "채권은행 등의 관리절차 개시: Start of creditor bank management procedures.")]
    async fn get_creditor_management_start(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.creditor_management_start(&params).await))
    }

    #[tool(description = "소송 등의 제기: Lawsuits filed.")]
    async fn get_lawsuits(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.lawsuits(&params).await))
    }

    #[tool(description = "해외 증권시장 주권등 상장 결정: Decisions to list on overseas exchanges.")]
    async fn get_overseas_listing_decision(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.overseas_listing_decision(&params).await))
    }

    #[tool(description = "해외 증권시장 주권등 상장폐지 결정: Decisions to delist from overseas exchanges.")]
    async fn get_overseas_delisting_decision(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.overseas_delisting_decision(&params).await))
    }

    #[tool(description = "해외 증권시장 주권등 상장: Completed overseas listings.")]
    async fn get_overseas_listing(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.overseas_listing(&params).await))
    }

    #[tool(description = "해외 증권시장 주권등 상장폐지: Completed overseas delistings.")]
    async fn get_overseas_delisting(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.overseas_delisting(&params).await))
    }

    #[tool(description = "전환사채권 발행결정: Convertible bond issuance decisions.")]
    async fn get_convertible_bond_issue(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.convertible_bond_issue(&params).await))
    }

    #[tool(description = "신주인수권부사채권 발행결정: Bond with warrant issuance decisions.")]
    async fn get_bond_with_warrant_issue(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.bond_with_warrant_issue(&params).await))
    }

    #[tool(description = "교환사채권 발행결정: Exchangeable bond issuance decisions.")]
    async fn get_exchangeable_bond_issue(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.exchangeable_bond_issue(&params).await))
    }

    #[tool(description = "채권은행 등의 관리절차 중단: Suspension of creditor bank management procedures.")]
    async fn get_creditor_management_stop(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.creditor_management_stop(&params).await))
    }

    #[tool(description = "상각형 조건부자본증권 발행결정: Write-down contingent capital securities issuance decisions.")]
    async fn get_write_down_contingent_bond_issue(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.write_down_contingent_bond_issue(&params).await))
    }

    #[tool(description = "자산양수도(기타), 풋백옵션: Other asset transfers and put-back options.")]
    async fn get_asset_transfer_put_back(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.asset_transfer_put_back(&params).await))
    }

    #[tool(description = "유형자산 양수 결정: Tangible asset acquisition decisions.")]
    async fn get_tangible_asset_acquisition(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.tangible_asset_acquisition(&params).await))
    }

    #[tool(description = "유형자산 양도 결정: Tangible asset disposal decisions.")]
    async fn get_tangible_asset_disposal(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.tangible_asset_disposal(&params).await))
    }

    #[tool(description = "타법인 주식 및 출자증권 양수결정: Decisions to acquire shares of other corporations.")]
    async fn get_equity_investment_acquisition(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.equity_investment_acquisition(&params).await))
    }

    #[tool(description = "타법인 주식 및 출자증권 양도결정: Decisions to dispose of shares of other corporations.")]
    async fn get_equity_investment_disposal(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.equity_investment_disposal(&params).await))
    }

    #[tool(description = "주권 관련 사채권 양수 결정: Equity-linked bond acquisition decisions.")]
    async fn get_equity_linked_bond_acquisition(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.equity_linked_bond_acquisition(&params).await))
    }

    #[tool(description = "주권 관련 사채권 양도 결정: Equity-linked bond disposal decisions.")]
    async fn get_equity_linked_bond_disposal(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.equity_linked_bond_disposal(&params).await))
    }

    #[tool(description = "영업양수 결정: Business acquisition decisions.")]
    async fn get_business_acquisition(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.business_acquisition(&params).await))
    }

    #[tool(description = "영업양도 결정: Business transfer decisions.")]
    async fn get_business_transfer(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.business_transfer(&params).await))
    }

    #[tool(description = "회사합병 결정: Merger decisions.")]
    async fn get_merger_decision(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.merger_decision(&params).await))
    }

    #[tool(description = "회사분할 결정: Corporate split decisions.")]
    async fn get_split_decision(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.split_decision(&params).await))
    }

    #[tool(description = "회사분할합병 결정: Split-merger decisions.")]
    async fn get_split_merger_decision(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.split_merger_decision(&params).await))
    }

    #[tool(description = "주식교환·이전 결정: Share exchange and transfer decisions.")]
    async fn get_stock_exchange_decision(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.stock_exchange_decision(&params).await))
    }

    #[tool(description = "자기주식 취득 결정: Treasury stock acquisition decisions.")]
    async fn get_treasury_acquisition_decision(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.treasury_acquisition_decision(&params).await))
    }

    #[tool(description = "자기주식 처분 결정: Treasury stock disposal decisions.")]
    async fn get_treasury_disposal_decision(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.treasury_disposal_decision(&params).await))
    }

    #[tool(description = "자기주식취득 신탁계약 체결 결정: Treasury stock trust contract decisions.")]
    async fn get_treasury_trust_contract(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.treasury_trust_contract(&params).await))
    }

    #[tool(description = "자기주식취득 신탁계약 해지 결정: Treasury stock trust termination decisions.")]
    async fn get_treasury_trust_termination(
        &self,
        Parameters(params): Parameters<EventPeriodParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(render(&self.context.major_events.treasury_trust_termination(&params).await))
    }
}
