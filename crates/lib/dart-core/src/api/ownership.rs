use std::sync::Arc;

use dart_model::models::Envelope;
use dart_model::requests::CorpCodeParams;
use dart_model::schema::{EP_EXECUTIVE_STOCK, EP_MAJOR_STOCK};

use crate::client::DartClient;

/// DS004: ownership disclosures (지분공시 종합정보).
#[derive(Clone)]
pub struct OwnershipApi {
    client: Arc<DartClient>,
}

impl OwnershipApi {
    #[must_use]
    pub const fn new(client: Arc<DartClient>) -> Self {
        Self { client }
    }

    /// 대량보유 상황보고: holders of 5% or more.
    pub async fn major_stock_reports(&self, params: &CorpCodeParams) -> Envelope {
        self.client.get(EP_MAJOR_STOCK, params).await
    }

    /// 임원ㆍ주요주주 소유보고.
    pub async fn executive_stock_reports(&self, params: &CorpCodeParams) -> Envelope {
        self.client.get(EP_EXECUTIVE_STOCK, params).await
    }
}
