use std::path::PathBuf;
use std::sync::Arc;

use dart_model::models::Envelope;
use dart_model::requests::{CorpCodeParams, DisclosureSearchParams, ReceiptParams};
use dart_model::schema::{
    CORP_CODE_FILE_NAME,
    DOCUMENTS_DIR,
    EP_COMPANY,
    EP_CORP_CODE,
    EP_DISCLOSURE_LIST,
    EP_DOCUMENT,
};
use tracing::{info, warn};

use crate::archive::{ArchiveTarget, materialize};
use crate::client::DartClient;
use crate::corp_code::CorpCodeIndex;

/// DS001: disclosure search, company overview, and original filings.
#[derive(Clone)]
pub struct DisclosureApi {
    client: Arc<DartClient>,
    data_dir: PathBuf,
    corp_codes: Arc<CorpCodeIndex>,
}

impl DisclosureApi {
    #[must_use]
    pub const fn new(
        client: Arc<DartClient>,
        data_dir: PathBuf,
        corp_codes: Arc<CorpCodeIndex>,
    ) -> Self {
        Self {
            client,
            data_dir,
            corp_codes,
        }
    }

    /// 공시검색: searches filings by company, period, and type.
    pub async fn search_disclosures(&self, params: &DisclosureSearchParams) -> Envelope {
        self.client.get(EP_DISCLOSURE_LIST, params).await
    }

    /// 기업개황: company overview.
    pub async fn company_overview(&self, params: &CorpCodeParams) -> Envelope {
        self.client.get(EP_COMPANY, params).await
    }

    /// 공시서류원본파일: downloads the original filing and extracts it under
    /// `<data_dir>/documents/<rcept_no>/`.
    pub async fn download_document(&self, params: &ReceiptParams) -> Envelope {
        let envelope = self.client.download(EP_DOCUMENT, params).await;
        let target = ArchiveTarget::named(&self.data_dir.join(DOCUMENTS_DIR), &params.rcept_no);
        materialize(envelope, target).await
    }

    /// 고유번호: downloads the corp-code listing into the data directory and
    /// refreshes the local index from it.
    pub async fn download_corp_codes(&self) -> Envelope {
        let envelope = self.client.download(EP_CORP_CODE, &()).await;
        let target = ArchiveTarget::into_dir(&self.data_dir, "corpCode.zip");
        let mut envelope = materialize(envelope, target).await;
        if envelope.saved_path.is_none() {
            return envelope;
        }

        let listing = self.data_dir.join(CORP_CODE_FILE_NAME);
        if listing.as_path() != self.corp_codes.path()
            && let Err(err) = tokio::fs::copy(&listing, self.corp_codes.path()).await
        {
            warn!(error = %err, "failed to copy corp code listing to the configured path");
            envelope.extract_error = Some(format!("failed to install corp code listing: {err}"));
            return envelope;
        }

        match self.corp_codes.reload().await {
            Ok(count) => {
                info!(count, "corp code index refreshed");
                envelope.saved_path = Some(self.corp_codes.path().display().to_string());
            }
            Err(err) => {
                warn!(error = %err, "failed to refresh corp code index");
                envelope.extract_error = Some(err.to_string());
            }
        }
        envelope
    }
}
