use std::sync::Arc;

use dart_model::models::Envelope;
use dart_model::requests::EventPeriodParams;
use dart_model::schema::{
    EP_DEBT_REGISTRATION,
    EP_DEPOSITARY_RECEIPT_REGISTRATION,
    EP_DIVISION_REGISTRATION,
    EP_EQUITY_REGISTRATION,
    EP_MERGER_REGISTRATION,
    EP_STOCK_EXCHANGE_REGISTRATION,
};

use crate::client::DartClient;

/// DS006: securities registration statements (증권신고서 주요정보).
#[derive(Clone)]
pub struct RegistrationStatementApi {
    client: Arc<DartClient>,
}

impl RegistrationStatementApi {
    #[must_use]
    pub const fn new(client: Arc<DartClient>) -> Self {
        Self { client }
    }

    /// 증권신고서(지분증권).
    pub async fn equity_securities(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_EQUITY_REGISTRATION, params).await
    }

    /// 증권신고서(채무증권).
    pub async fn debt_securities(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_DEBT_REGISTRATION, params).await
    }

    /// 증권신고서(증권예탁증권).
    pub async fn depositary_receipts(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_DEPOSITARY_RECEIPT_REGISTRATION, params).await
    }

    /// 증권신고서(합병).
    pub async fn merger(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_MERGER_REGISTRATION, params).await
    }

    /// 증권신고서(주식의포괄적교환·이전).
    pub async fn stock_exchange_transfer(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_STOCK_EXCHANGE_REGISTRATION, params).await
    }

    /// 증권신고서(분할).
    pub async fn division(&self, params: &EventPeriodParams) -> Envelope {
        self.client.get(EP_DIVISION_REGISTRATION, params).await
    }
}
