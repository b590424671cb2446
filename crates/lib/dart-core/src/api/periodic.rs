//! Periodic report key items (정기보고서 주요정보).

use std::sync::Arc;

use dart_model::models::Envelope;
use dart_model::requests::PeriodicReportParams;
use dart_model::schema::{
    EP_AUDITOR_OPINION,
    EP_AUDIT_SERVICE_CONTRACTS,
    EP_CAPITAL_CHANGES,
    EP_COMMERCIAL_PAPER_BALANCE,
    EP_CONTINGENT_CAPITAL_BALANCE,
    EP_CORPORATE_BOND_BALANCE,
    EP_DEBT_SECURITIES_ISSUANCE,
    EP_DIRECTOR_INDIVIDUAL_PAY,
    EP_DIRECTOR_PAY_APPROVED,
    EP_DIRECTOR_PAY_BY_TYPE,
    EP_DIRECTOR_TOTAL_PAY,
    EP_DIVIDENDS,
    EP_EMPLOYEES,
    EP_EXECUTIVES,
    EP_HYBRID_SECURITIES_BALANCE,
    EP_LARGEST_SHAREHOLDERS,
    EP_LARGEST_SHAREHOLDER_CHANGES,
    EP_MINORITY_SHAREHOLDERS,
    EP_NON_AUDIT_SERVICE_CONTRACTS,
    EP_OTHER_CORP_INVESTMENTS,
    EP_OUTSIDE_DIRECTORS,
    EP_PRIVATE_PLACEMENT_FUND_USAGE,
    EP_PUBLIC_OFFERING_FUND_USAGE,
    EP_SHORT_TERM_BOND_BALANCE,
    EP_STOCK_TOTALS,
    EP_TOP_INDIVIDUAL_PAY,
    EP_TREASURY_STOCK,
    EP_UNREGISTERED_EXECUTIVE_PAY,
};

use crate::client::DartClient;

/// DS002: key items extracted from periodic (quarterly, half-year, annual) reports.
///
/// Every endpoint takes `corp_code`, `bsns_year`, and `reprt_code`.
#[derive(Clone)]
pub struct PeriodicReportApi {
    client: Arc<DartClient>,
}

impl PeriodicReportApi {
    #[must_use]
    pub const fn new(client: Arc<DartClient>) -> Self {
        Self { client }
    }

    /// 증자(감자) 현황.
    pub async fn capital_changes(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_CAPITAL_CHANGES, params).await
    }

    /// 배당에 관한 사항.
    pub async fn dividends(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_DIVIDENDS, params).await
    }

    /// 자기주식 취득 및 처분 현황.
    pub async fn treasury_stock(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_TREASURY_STOCK, params).await
    }

    /// 최대주주 현황.
    pub async fn largest_shareholders(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_LARGEST_SHAREHOLDERS, params).await
    }

    /// 최대주주 변동현황.
    pub async fn largest_shareholder_changes(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_LARGEST_SHAREHOLDER_CHANGES, params).await
    }

    /// 소액주주 현황.
    pub async fn minority_shareholders(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_MINORITY_SHAREHOLDERS, params).await
    }

    /// 임원 현황.
    pub async fn executives(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_EXECUTIVES, params).await
    }

    /// 직원 현황.
    pub async fn employees(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_EMPLOYEES, params).await
    }

    /// 이사·감사의 개인별 보수현황.
    pub async fn director_individual_pay(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_DIRECTOR_INDIVIDUAL_PAY, params).await
    }

    /// 이사·감사 전체의 보수현황.
    pub async fn director_total_pay(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_DIRECTOR_TOTAL_PAY, params).await
    }

    /// 개인별 보수지급 금액(5억이상 상위5인).
    pub async fn top_individual_pay(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_TOP_INDIVIDUAL_PAY, params).await
    }

    /// 타법인 출자현황.
    pub async fn other_corp_investments(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_OTHER_CORP_INVESTMENTS, params).await
    }

    /// 주식의 총수 현황.
    pub async fn stock_totals(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_STOCK_TOTALS, params).await
    }

    /// 채무증권 발행실적.
    pub async fn debt_securities_issuance(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_DEBT_SECURITIES_ISSUANCE, params).await
    }

    /// 기업어음증권 미상환 잔액.
    pub async fn commercial_paper_balance(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_COMMERCIAL_PAPER_BALANCE, params).await
    }

    /// 단기사채 미상환 잔액.
    pub async fn short_term_bond_balance(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_SHORT_TERM_BOND_BALANCE, params).await
    }

    /// 회사채 미상환 잔액.
    pub async fn corporate_bond_balance(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_CORPORATE_BOND_BALANCE, params).await
    }

    /// 신종자본증권 미상환 잔액.
    pub async fn hybrid_securities_balance(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_HYBRID_SECURITIES_BALANCE, params).await
    }

    /// 조건부 자본증권 미상환 잔액.
    pub async fn contingent_capital_balance(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_CONTINGENT_CAPITAL_BALANCE, params).await
    }

    /// 회계감사인의 명칭 및 감사의견.
    pub async fn auditor_opinion(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_AUDITOR_OPINION, params).await
    }

    /// 감사용역체결현황.
    pub async fn audit_service_contracts(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_AUDIT_SERVICE_CONTRACTS, params).await
    }

    /// 회계감사인과의 비감사용역 계약체결 현황.
    pub async fn non_audit_service_contracts(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_NON_AUDIT_SERVICE_CONTRACTS, params).await
    }

    /// 사외이사 및 그 변동현황.
    pub async fn outside_directors(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_OUTSIDE_DIRECTORS, params).await
    }

    /// 미등기임원 보수현황.
    pub async fn unregistered_executive_pay(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_UNREGISTERED_EXECUTIVE_PAY, params).await
    }

    /// 이사·감사 전체의 보수현황(주주총회 승인금액).
    pub async fn director_pay_approved(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_DIRECTOR_PAY_APPROVED, params).await
    }

    /// 이사·감사 전체의 보수현황(보수지급금액 - 유형별).
    pub async fn director_pay_by_type(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_DIRECTOR_PAY_BY_TYPE, params).await
    }

    /// 공모자금의 사용내역.
    pub async fn public_offering_fund_usage(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_PUBLIC_OFFERING_FUND_USAGE, params).await
    }

    /// 사모자금의 사용내역.
    pub async fn private_placement_fund_usage(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_PRIVATE_PLACEMENT_FUND_USAGE, params).await
    }
}
