use std::path::PathBuf;
use std::sync::Arc;

use dart_model::models::Envelope;
use dart_model::requests::{
    FullStatementParams,
    IndicatorParams,
    PeriodicReportParams,
    TaxonomyParams,
    XbrlParams,
};
use dart_model::schema::{
    EP_MULTI_ACCOUNTS,
    EP_MULTI_INDICATORS,
    EP_SINGLE_ACCOUNTS,
    EP_SINGLE_FULL_STATEMENTS,
    EP_SINGLE_INDICATORS,
    EP_XBRL,
    EP_XBRL_TAXONOMY,
    XBRL_DIR,
};

use crate::archive::{ArchiveTarget, materialize};
use crate::client::DartClient;

/// DS003: financial statements from periodic reports.
#[derive(Clone)]
pub struct FinancialStatementApi {
    client: Arc<DartClient>,
    data_dir: PathBuf,
}

impl FinancialStatementApi {
    #[must_use]
    pub const fn new(client: Arc<DartClient>, data_dir: PathBuf) -> Self {
        Self { client, data_dir }
    }

    /// 단일회사 주요계정: key accounts of one company.
    pub async fn single_accounts(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_SINGLE_ACCOUNTS, params).await
    }

    /// 다중회사 주요계정: key accounts of several companies.
    ///
    /// `corp_code` carries a comma separated list of up to 100 codes.
    pub async fn multi_accounts(&self, params: &PeriodicReportParams) -> Envelope {
        self.client.get(EP_MULTI_ACCOUNTS, params).await
    }

    /// 재무제표 원본파일(XBRL): downloads the XBRL package and extracts it
    /// under `<data_dir>/xbrl/<rcept_no>/`.
    pub async fn download_xbrl(&self, params: &XbrlParams) -> Envelope {
        let envelope = self.client.download(EP_XBRL, params).await;
        let target = ArchiveTarget::named(&self.data_dir.join(XBRL_DIR), &params.rcept_no);
        materialize(envelope, target).await
    }

    /// 단일회사 전체 재무제표.
    pub async fn single_full_statements(&self, params: &FullStatementParams) -> Envelope {
        self.client.get(EP_SINGLE_FULL_STATEMENTS, params).await
    }

    /// XBRL택사노미재무제표양식.
    pub async fn xbrl_taxonomy(&self, params: &TaxonomyParams) -> Envelope {
        self.client.get(EP_XBRL_TAXONOMY, params).await
    }

    /// 단일회사 주요 재무지표.
    pub async fn single_indicators(&self, params: &IndicatorParams) -> Envelope {
        self.client.get(EP_SINGLE_INDICATORS, params).await
    }

    /// 다중회사 주요 재무지표.
    pub async fn multi_indicators(&self, params: &IndicatorParams) -> Envelope {
        self.client.get(EP_MULTI_INDICATORS, params).await
    }
}
