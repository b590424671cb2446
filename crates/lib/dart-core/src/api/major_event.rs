use std::sync::Arc;

use dart_model::models::Envelope;
use dart_model::requests::EventPeriodParams;
use dart_model::schema::{
    EP_ASSET_TRANSFER_PUT_BACK,
    EP_BOND_WITH_WARRANT_ISSUE,
    EP_BONUS_ISSUE,
    EP_BUSINESS_ACQUISITION,
    EP_BUSINESS_SUSPENSION,
    EP_BUSINESS_TRANSFER,
    EP_CAPITAL_REDUCTION,
    EP_CONVERTIBLE_BOND_ISSUE,
    EP_CREDITOR_MANAGEMENT_START,
    EP_CREDITOR_MANAGEMENT_STOP,
    EP_DEFAULT_OCCURRENCE,
    EP_DISSOLUTION_CAUSE,
    EP_EQUITY_INVESTMENT_ACQUISITION,
    EP_EQUITY_INVESTMENT_DISPOSAL,
    EP_EQUITY_LINKED_BOND_ACQUISITION,
    EP_EQUITY_LINKED_BOND_DISPOSAL,
    EP_EXCHANGEABLE_BOND_ISSUE,
    EP_LAWSUITS,
    EP_MERGER_DECISION,
    EP_OVERSEAS_DELISTING,
    EP_OVERSEAS_DELISTING_DECISION,
    EP_OVERSEAS_LISTING,
    EP_OVERSEAS_LISTING_DECISION,
    EP_PAID_AND_BONUS_ISSUE,
    EP_PAID_IN_CAPITAL_INCREASE,
    EP_REHABILITATION_FILING,
    EP_SPLIT_DECISION,
    EP_SPLIT_MERGER_DECISION,
    EP_STOCK_EXCHANGE_DECISION,
    EP_TANGIBLE_ASSET_ACQUISITION,
    EP_TANGIBLE_ASSET_DISPOSAL,
    EP_TREASURY_ACQUISITION_DECISION,
    EP_TREASURY_DISPOSAL_DECISION,
    EP_TREASURY_TRUST_CONTRACT,
    EP_TREASURY_TRUST_TERMINATION,
    EP_WRITE_DOWN_CONTINGENT_BOND_ISSUE,
};

use crate::client::DartClient;

/// DS005: structured data from major event reports (주요사항보고서).
#[derive(Clone)]
pub struct MajorEventApi {
    client: Arc<DartClient>,
}

impl MajorEventApi {
    #[must_use]
    pub const fn new(client: Arc<DartClient>) -> Self {
        Self { client }
    }

    /// 부도발생.
    pub async fn default_occurrence(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_DEFAULT_OCCURRENCE, params).await
    }

    /// 영업정지.
    pub async fn business_suspension(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_BUSINESS_SUSPENSION, params).await
    }

    /// 회생절차 개시신청.
    pub async fn rehabilitation_filing(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_REHABILITATION_FILING, params).await
    }

    /// 해산사유 발생.
    pub async fn dissolution_cause(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_DISSOLUTION_CAUSE, params).await
    }

    /// 유상증자 결정.
    pub async fn paid_in_capital_increase(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_PAID_IN_CAPITAL_INCREASE, params).await
    }

    /// 무상증자 결정.
    pub async fn bonus_issue(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_BONUS_ISSUE, params).await
    }

    /// 유무상증자 결정.
    pub async fn paid_and_bonus_issue(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_PAID_AND_BONUS_ISSUE, params).await
    }

    /// 감자 결정.
    pub async fn capital_reduction(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_CAPITAL_REDUCTION, params).await
    }

    /// 채권은행 등의 관리절차 개시.
    pub async fn creditor_management_start(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_CREDITOR_MANAGEMENT_START, params).await
    }

    /// 소송 등의 제기.
    pub async fn lawsuits(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_LAWSUITS, params).await
    }

    /// 해외 증권시장 주권등 상장 결정.
    pub async fn overseas_listing_decision(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_OVERSEAS_LISTING_DECISION, params).await
    }

    /// 해외 증권시장 주권등 상장폐지 결정.
    pub async fn overseas_delisting_decision(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_OVERSEAS_DELISTING_DECISION, params).await
    }

    /// 해외 증권시장 주권등 상장.
    pub async fn overseas_listing(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_OVERSEAS_LISTING, params).await
    }

    /// 해외 증권시장 주권등 상장폐지.
    pub async fn overseas_delisting(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_OVERSEAS_DELISTING, params).await
    }

    /// 전환사채권 발행결정.
    pub async fn convertible_bond_issue(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_CONVERTIBLE_BOND_ISSUE, params).await
    }

    /// 신주인수권부사채권 발행결정.
    pub async fn bond_with_warrant_issue(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_BOND_WITH_WARRANT_ISSUE, params).await
    }

    /// 교환사채권 발행결정.
    pub async fn exchangeable_bond_issue(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_EXCHANGEABLE_BOND_ISSUE, params).await
    }

    /// 채권은행 등의 관리절차 중단.
    pub async fn creditor_management_stop(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_CREDITOR_MANAGEMENT_STOP, params).await
    }

    /// 상각형 조건부자본증권 발행결정.
    pub async fn write_down_contingent_bond_issue(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_WRITE_DOWN_CONTINGENT_BOND_ISSUE, params).await
    }

    /// 자산양수도(기타), 풋백옵션.
    pub async fn asset_transfer_put_back(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_ASSET_TRANSFER_PUT_BACK, params).await
    }

    /// 유형자산 양수 결정.
    pub async fn tangible_asset_acquisition(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_TANGIBLE_ASSET_ACQUISITION, params).await
    }

    /// 유형자산 양도 결정.
    pub async fn tangible_asset_disposal(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_TANGIBLE_ASSET_DISPOSAL, params).await
    }

    /// 타법인 주식 및 출자증권 양수결정.
    pub async fn equity_investment_acquisition(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_EQUITY_INVESTMENT_ACQUISITION, params).await
    }

    /// 타법인 주식 및 출자증권 양도결정.
    pub async fn equity_investment_disposal(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_EQUITY_INVESTMENT_DISPOSAL, params).await
    }

    /// 주권 관련 사채권 양수 결정.
    pub async fn equity_linked_bond_acquisition(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_EQUITY_LINKED_BOND_ACQUISITION, params).await
    }

    /// 주권 관련 사채권 양도 결정.
    pub async fn equity_linked_bond_disposal(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_EQUITY_LINKED_BOND_DISPOSAL, params).await
    }

    /// 영업양수 결정.
    pub async fn business_acquisition(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_BUSINESS_ACQUISITION, params).await
    }

    /// 영업양도 결정.
    pub async fn business_transfer(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_BUSINESS_TRANSFER, params).await
    }

    /// 회사합병 결정.
    pub async fn merger_decision(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_MERGER_DECISION, params).await
    }

    /// 회사분할 결정.
    pub async fn split_decision(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_SPLIT_DECISION, params).await
    }

    /// 회사분할합병 결정.
    pub async fn split_merger_decision(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_SPLIT_MERGER_DECISION, params).await
    }

    /// 주식교환·이전 결정.
    pub async fn stock_exchange_decision(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_STOCK_EXCHANGE_DECISION, params).await
    }

    /// 자기주식 취득 결정.
    pub async fn treasury_acquisition_decision(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_TREASURY_ACQUISITION_DECISION, params).await
    }

    /// 자기주식 처분 결정.
    pub async fn treasury_disposal_decision(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_TREASURY_DISPOSAL_DECISION, params).await
    }

    /// 자기주식취득 신탁계약 체결 결정.
    pub async fn treasury_trust_contract(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_TREASURY_TRUST_CONTRACT, params).await
    }

    /// 자기주식취득 신탁계약 해지 결정.
    pub async fn treasury_trust_termination(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_TREASURY_TRUST_TERMINATION, params).await
    }
}
