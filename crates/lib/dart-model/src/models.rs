use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{STATUS_OK, STATUS_UNDEFINED_ERROR};

/// How an upstream response body was classified.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Json,
    Xml,
    Zip,
    Other,
}

/// Uniform result of a single OpenDART call.
///
/// `status == "000"` marks a successful remote call. Local side effects of
/// archive endpoints are reported separately through `saved_path` and
/// `extract_error`, so a successful fetch whose extraction failed keeps its
/// remote status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_kind: Option<ContentKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    /// Raw archive bytes for ZIP responses. Never serialized.
    #[serde(skip)]
    pub archive: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract_error: Option<String>,
}

impl Envelope {
    /// Builds an envelope from a classified upstream response.
    #[must_use]
    pub fn new(
        status: impl Into<String>,
        message: impl Into<String>,
        content_kind: ContentKind,
        content: Option<Value>,
    ) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
            content_kind: Some(content_kind),
            content,
            archive: None,
            error: None,
            saved_path: None,
            extract_error: None,
        }
    }

    /// Builds a successful envelope carrying a ZIP archive.
    #[must_use]
    pub fn archive(bytes: Vec<u8>) -> Self {
        let message = format!("archive received ({} bytes)", bytes.len());
        Self {
            archive: Some(bytes),
            ..Self::new(STATUS_OK, message, ContentKind::Zip, None)
        }
    }

    /// Builds a failed envelope with the generic undefined-error status.
    #[must_use]
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status: STATUS_UNDEFINED_ERROR.to_string(),
            message: message.into(),
            content_kind: None,
            content: None,
            archive: None,
            error: Some(error.into()),
            saved_path: None,
            extract_error: None,
        }
    }

    /// Returns true when the remote call succeeded and no error was recorded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK && self.error.is_none()
    }

    /// Returns the size of the carried archive, if any.
    #[must_use]
    pub fn archive_len(&self) -> Option<usize> {
        self.archive.as_ref().map(Vec::len)
    }
}

/// Corporation entry from the OpenDART corp-code listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpRecord {
    pub corp_code: String,
    pub corp_name: String,
    #[serde(default)]
    pub stock_code: String,
    #[serde(default)]
    pub modify_date: String,
}

impl CorpRecord {
    /// Listed companies carry a six-digit stock code; unlisted ones are blank.
    #[must_use]
    pub fn is_listed(&self) -> bool {
        !self.stock_code.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_envelope_skips_bytes_when_serialized() {
        let envelope = Envelope::archive(vec![1, 2, 3]);
        let value = serde_json::to_value(&envelope).expect("serialize envelope");

        assert_eq!(value["status"], "000");
        assert_eq!(value["content_kind"], "zip");
        assert!(value.get("archive").is_none());
        assert_eq!(envelope.archive_len(), Some(3));
    }

    #[test]
    fn failure_is_never_success() {
        let envelope = Envelope::failure("transport error", "connection refused");
        assert!(!envelope.is_success());
        assert_eq!(envelope.status, STATUS_UNDEFINED_ERROR);
    }

    #[test]
    fn ok_status_with_error_is_not_success() {
        let mut envelope = Envelope::new(STATUS_OK, "ok", ContentKind::Json, None);
        assert!(envelope.is_success());
        envelope.error = Some("late failure".to_string());
        assert!(!envelope.is_success());
    }
}
