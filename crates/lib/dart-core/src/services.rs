use std::path::PathBuf;
use std::sync::Arc;

use dart_model::schema::CORP_CODE_FILE_NAME;

use crate::api::{
    DisclosureApi,
    FinancialStatementApi,
    MajorEventApi,
    OwnershipApi,
    PeriodicReportApi,
    RegistrationStatementApi,
};
use crate::client::{ClientError, DartClient, DartClientConfig};
use crate::corp_code::CorpCodeIndex;

/// Configuration for building a [`DartContext`].
#[derive(Debug, Clone)]
pub struct DartContextConfig {
    pub client: DartClientConfig,
    pub data_dir: PathBuf,
    pub corp_code_path: Option<PathBuf>,
}

impl DartContextConfig {
    #[must_use]
    pub fn new(client: DartClientConfig, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            data_dir: data_dir.into(),
            corp_code_path: None,
        }
    }

    #[must_use]
    pub fn with_corp_code_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corp_code_path = Some(path.into());
        self
    }

    /// Resolves the corp-code listing path, defaulting into the data directory.
    #[must_use]
    pub fn corp_code_path(&self) -> PathBuf {
        self.corp_code_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join(CORP_CODE_FILE_NAME))
    }
}

/// Shared handle to every API module, bound to one client instance.
///
/// Built once at startup and passed explicitly to the MCP surface.
pub struct DartContext {
    client: Arc<DartClient>,
    pub disclosure: DisclosureApi,
    pub periodic: PeriodicReportApi,
    pub financial: FinancialStatementApi,
    pub ownership: OwnershipApi,
    pub major_events: MajorEventApi,
    pub registration: RegistrationStatementApi,
    pub corp_codes: Arc<CorpCodeIndex>,
}

impl DartContext {
    /// Builds the client and every API module.
    ///
    /// # Errors
    /// Returns `ClientError` if the HTTP client cannot be created.
    pub fn new(config: DartContextConfig) -> Result<Self, ClientError> {
        let corp_codes = Arc::new(CorpCodeIndex::new(config.corp_code_path()));
        let client = Arc::new(DartClient::new(config.client)?);
        Ok(Self::with_parts(client, config.data_dir, corp_codes))
    }

    /// Assembles a context from an existing client and corp-code index.
    #[must_use]
    pub fn with_parts(
        client: Arc<DartClient>,
        data_dir: PathBuf,
        corp_codes: Arc<CorpCodeIndex>,
    ) -> Self {
        Self {
            disclosure: DisclosureApi::new(client.clone(), data_dir.clone(), corp_codes.clone()),
            periodic: PeriodicReportApi::new(client.clone()),
            financial: FinancialStatementApi::new(client.clone(), data_dir),
            ownership: OwnershipApi::new(client.clone()),
            major_events: MajorEventApi::new(client.clone()),
            registration: RegistrationStatementApi::new(client.clone()),
            client,
            corp_codes,
        }
    }

    #[must_use]
    pub fn client(&self) -> Arc<DartClient> {
        self.client.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corp_code_path_defaults_into_data_dir() {
        let config = DartContextConfig::new(DartClientConfig::new("key"), "/var/lib/dart");
        assert_eq!(config.corp_code_path(), PathBuf::from("/var/lib/dart/CORPCODE.xml"));

        let config = config.with_corp_code_path("/tmp/corp.xml");
        assert_eq!(config.corp_code_path(), PathBuf::from("/tmp/corp.xml"));
    }

    #[test]
    fn context_binds_modules_to_one_client() {
        let config = DartContextConfig::new(
            DartClientConfig::new("key").with_base_url("http://127.0.0.1:9"),
            "data",
        );
        let context = DartContext::new(config).expect("context should build");

        assert_eq!(context.client().base_url(), "http://127.0.0.1:9");
        assert_eq!(context.corp_codes.path(), PathBuf::from("data").join("CORPCODE.xml"));
    }
}
