//! HTTP client wrapper for the OpenDART REST API.

use std::{error::Error, fmt, time::Duration};

use dart_model::models::Envelope;
use dart_model::schema::{API_KEY_PARAM, DEFAULT_BASE_URL, endpoint_url};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::response::{classify, snippet};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`DartClient`].
#[derive(Clone)]
pub struct DartClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl DartClientConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for DartClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DartClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug)]
pub enum ClientError {
    Build(reqwest::Error),
    Params(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Params(message) => write!(f, "invalid request parameters: {message}"),
        }
    }
}

impl Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Build(err)
    }
}

/// Thin OpenDART client that always answers with an [`Envelope`].
///
/// Every request carries the API key. Transport and HTTP failures are folded
/// into failed envelopes instead of being returned as errors.
#[derive(Clone)]
pub struct DartClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl DartClient {
    /// Builds a client from its configuration.
    ///
    /// # Errors
    /// Returns `ClientError::Build` if the underlying HTTP client cannot be created.
    pub fn new(config: DartClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET request and classifies the response.
    pub async fn get<P: Serialize + ?Sized>(&self, endpoint: &str, params: &P) -> Envelope {
        let pairs = match self.request_pairs(params) {
            Ok(pairs) => pairs,
            Err(err) => return Envelope::failure("invalid request parameters", err.to_string()),
        };
        let url = endpoint_url(&self.base_url, endpoint);
        debug!(endpoint, "GET OpenDART endpoint");
        self.execute(endpoint, self.http.get(url).query(&pairs), false)
            .await
    }

    /// Issues a form-encoded POST request and classifies the response.
    pub async fn post<P: Serialize + ?Sized>(&self, endpoint: &str, params: &P) -> Envelope {
        let pairs = match self.request_pairs(params) {
            Ok(pairs) => pairs,
            Err(err) => return Envelope::failure("invalid request parameters", err.to_string()),
        };
        let url = endpoint_url(&self.base_url, endpoint);
        debug!(endpoint, "POST OpenDART endpoint");
        self.execute(endpoint, self.http.post(url).form(&pairs), false)
            .await
    }

    /// Issues a GET request for an archive endpoint.
    ///
    /// ZIP bodies are kept in the envelope whatever content type the server
    /// declares; error bodies are classified as usual.
    pub async fn download<P: Serialize + ?Sized>(&self, endpoint: &str, params: &P) -> Envelope {
        let pairs = match self.request_pairs(params) {
            Ok(pairs) => pairs,
            Err(err) => return Envelope::failure("invalid request parameters", err.to_string()),
        };
        let url = endpoint_url(&self.base_url, endpoint);
        debug!(endpoint, "downloading OpenDART archive");
        self.execute(endpoint, self.http.get(url).query(&pairs), true)
            .await
    }

    /// Flattens the parameters into key/value pairs with the API key first.
    ///
    /// Unset optional parameters serialize as absent or null and are omitted.
    fn request_pairs<P: Serialize + ?Sized>(
        &self,
        params: &P,
    ) -> Result<Vec<(String, String)>, ClientError> {
        let mut pairs = vec![(API_KEY_PARAM.to_string(), self.api_key.clone())];
        let value =
            serde_json::to_value(params).map_err(|err| ClientError::Params(err.to_string()))?;
        match value {
            Value::Object(map) => {
                for (key, value) in map {
                    match value {
                        Value::Null => {}
                        Value::String(text) => pairs.push((key, text)),
                        Value::Bool(_) | Value::Number(_) => pairs.push((key, value.to_string())),
                        Value::Array(_) | Value::Object(_) => {
                            return Err(ClientError::Params(format!(
                                "parameter {key} must be a scalar"
                            )));
                        }
                    }
                }
            }
            Value::Null => {}
            _ => {
                return Err(ClientError::Params(
                    "parameters must serialize to an object".to_string(),
                ));
            }
        }
        Ok(pairs)
    }

    async fn execute(
        &self,
        endpoint: &str,
        request: RequestBuilder,
        expect_archive: bool,
    ) -> Envelope {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(endpoint, error = %err, "OpenDART request failed");
                return Envelope::failure(transport_message(&err), err.to_string());
            }
        };

        let http_status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => {
                warn!(endpoint, error = %err, "failed to read OpenDART response body");
                return Envelope::failure("failed to read response body", err.to_string());
            }
        };

        if !http_status.is_success() {
            warn!(endpoint, status = %http_status, "OpenDART returned an HTTP error");
            return Envelope::failure(format!("HTTP {http_status}"), snippet(&body));
        }

        let envelope = classify(&content_type, &body, expect_archive);
        if !envelope.is_success() {
            debug!(
                endpoint,
                status = %envelope.status,
                message = %envelope.message,
                "OpenDART reported a non-success status"
            );
        }
        envelope
    }
}

fn transport_message(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "connection failed"
    } else {
        "transport error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dart_model::requests::{DisclosureSearchParams, PeriodicReportParams};

    fn client() -> DartClient {
        DartClient::new(DartClientConfig::new("test-key")).expect("client should build")
    }

    #[test]
    fn api_key_is_injected_first() {
        let params = PeriodicReportParams {
            corp_code: "00126380".to_string(),
            bsns_year: "2023".to_string(),
            reprt_code: "11011".to_string(),
        };
        let pairs = client().request_pairs(&params).expect("pairs");

        assert_eq!(pairs[0], ("crtfc_key".to_string(), "test-key".to_string()));
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn unset_optional_params_are_omitted() {
        let params = DisclosureSearchParams {
            corp_code: Some("00126380".to_string()),
            page_count: Some("100".to_string()),
            ..Default::default()
        };
        let pairs = client().request_pairs(&params).expect("pairs");
        let keys: Vec<&str> = pairs.iter().map(|(key, _)| key.as_str()).collect();

        assert_eq!(keys, vec!["crtfc_key", "corp_code", "page_count"]);
    }

    #[test]
    fn unit_params_carry_only_the_key() {
        let pairs = client().request_pairs(&()).expect("pairs");
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn debug_redacts_api_key() {
        let rendered = format!("{:?}", DartClientConfig::new("secret"));
        assert!(!rendered.contains("secret"));
    }
}
