//! Classification of OpenDART response bodies into envelopes.

use dart_model::models::{ContentKind, Envelope};
use dart_model::schema::{STATUS_OK, describe_status};
use roxmltree::Document;
use serde_json::{Map, Value};

const ZIP_SIGNATURE: &[u8] = b"PK\x03\x04";
const ERROR_SNIPPET_CHARS: usize = 200;

/// Returns true when the body starts with a local ZIP file header.
#[must_use]
pub fn looks_like_zip(body: &[u8]) -> bool {
    body.starts_with(ZIP_SIGNATURE)
}

/// Classifies a response body by its content type.
///
/// When `expect_archive` is set the ZIP signature is checked first, since the
/// download endpoints are inconsistent about the content type they send with
/// archives. Unrecognized content types fall back to sniffing the body.
#[must_use]
pub fn classify(content_type: &str, body: &[u8], expect_archive: bool) -> Envelope {
    if expect_archive && looks_like_zip(body) {
        return Envelope::archive(body.to_vec());
    }

    let content_type = content_type.to_ascii_lowercase();
    if content_type.contains("json") {
        from_json(body)
    } else if content_type.contains("xml") {
        from_xml(body)
    } else if is_archive_type(&content_type) && looks_like_zip(body) {
        Envelope::archive(body.to_vec())
    } else {
        sniff(&content_type, body)
    }
}

fn is_archive_type(content_type: &str) -> bool {
    content_type.contains("zip")
        || content_type.contains("octet-stream")
        || content_type.contains("x-msdownload")
}

fn sniff(content_type: &str, body: &[u8]) -> Envelope {
    if looks_like_zip(body) {
        return Envelope::archive(body.to_vec());
    }
    if serde_json::from_slice::<Value>(body).is_ok() {
        return from_json(body);
    }
    if body.trim_ascii_start().starts_with(b"<") {
        return from_xml(body);
    }
    let shown = if content_type.is_empty() {
        "<none>"
    } else {
        content_type
    };
    let mut envelope = Envelope::failure(
        format!("unsupported content type: {shown}"),
        snippet(body),
    );
    envelope.content_kind = Some(ContentKind::Other);
    envelope
}

/// Builds an envelope from a JSON body, lifting `status` and `message`.
#[must_use]
pub fn from_json(body: &[u8]) -> Envelope {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(mut map)) => {
            let status = take_string(&mut map, "status").unwrap_or_else(|| STATUS_OK.to_string());
            let message = take_string(&mut map, "message")
                .unwrap_or_else(|| default_message(&status));
            let content = if map.is_empty() {
                None
            } else {
                Some(Value::Object(map))
            };
            Envelope::new(status, message, ContentKind::Json, content)
        }
        Ok(other) => Envelope::new(
            STATUS_OK,
            default_message(STATUS_OK),
            ContentKind::Json,
            Some(other),
        ),
        Err(err) => {
            let mut envelope = Envelope::failure("invalid JSON response", err.to_string());
            envelope.content_kind = Some(ContentKind::Json);
            envelope
        }
    }
}

/// Builds an envelope from an XML body.
///
/// OpenDART reports errors for XML and archive endpoints as
/// `<result><status/><message/></result>`; those children are lifted when
/// present and the document text is kept as content.
#[must_use]
pub fn from_xml(body: &[u8]) -> Envelope {
    let text = String::from_utf8_lossy(body).into_owned();
    let parsed = match Document::parse(&text) {
        Ok(doc) => {
            let root = doc.root_element();
            let child_text = |name: &str| {
                root.children()
                    .find(|node| node.has_tag_name(name))
                    .and_then(|node| node.text())
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            };
            Ok((child_text("status"), child_text("message")))
        }
        Err(err) => Err(err.to_string()),
    };

    match parsed {
        Ok((status, message)) => {
            let status = status.unwrap_or_else(|| STATUS_OK.to_string());
            let message = message.unwrap_or_else(|| default_message(&status));
            Envelope::new(status, message, ContentKind::Xml, Some(Value::String(text)))
        }
        Err(err) => {
            let mut envelope = Envelope::failure("invalid XML response", err);
            envelope.content_kind = Some(ContentKind::Xml);
            envelope.content = Some(Value::String(text));
            envelope
        }
    }
}

/// Truncated, lossy rendering of a body for error messages.
#[must_use]
pub fn snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let mut shortened: String = text.chars().take(ERROR_SNIPPET_CHARS).collect();
    if text.chars().count() > ERROR_SNIPPET_CHARS {
        shortened.push_str("...");
    }
    shortened
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key)? {
        Value::String(value) => Some(value),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn default_message(status: &str) -> String {
    describe_status(status).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_status_and_message_are_lifted() {
        let body = br#"{"status":"000","message":"ok","corp_name":"Samsung"}"#;
        let envelope = classify("application/json;charset=UTF-8", body, false);

        assert_eq!(envelope.status, "000");
        assert_eq!(envelope.message, "ok");
        assert_eq!(envelope.content_kind, Some(ContentKind::Json));
        let content = envelope.content.expect("content should remain");
        assert_eq!(content["corp_name"], "Samsung");
        assert!(content.get("status").is_none());
    }

    #[test]
    fn json_error_status_is_preserved() {
        let body = br#"{"status":"013","message":"no data"}"#;
        let envelope = classify("application/json", body, false);

        assert_eq!(envelope.status, "013");
        assert!(envelope.content.is_none());
        assert!(!envelope.is_success());
    }

    #[test]
    fn xml_result_status_is_read() {
        let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><result><status>014</status><message>file missing</message></result>";
        let envelope = classify("application/xml", body.as_bytes(), true);

        assert_eq!(envelope.status, "014");
        assert_eq!(envelope.message, "file missing");
        assert_eq!(envelope.content_kind, Some(ContentKind::Xml));
    }

    #[test]
    fn archive_detected_by_signature_for_unknown_type() {
        let mut body = ZIP_SIGNATURE.to_vec();
        body.extend_from_slice(&[0, 1, 2]);
        let envelope = classify("application/x-unknown", &body, false);

        assert_eq!(envelope.status, "000");
        assert_eq!(envelope.content_kind, Some(ContentKind::Zip));
        assert_eq!(envelope.archive_len(), Some(body.len()));
    }

    #[test]
    fn download_prefers_signature_over_content_type() {
        let body = b"PK\x03\x04rest";
        let envelope = classify("text/html", body, true);
        assert_eq!(envelope.content_kind, Some(ContentKind::Zip));
    }

    #[test]
    fn unknown_text_becomes_failure() {
        let envelope = classify("text/plain", b"maintenance window", false);

        assert_eq!(envelope.status, "900");
        assert_eq!(envelope.content_kind, Some(ContentKind::Other));
        assert_eq!(envelope.error.as_deref(), Some("maintenance window"));
    }

    #[test]
    fn unlabeled_json_is_sniffed() {
        let envelope = classify("", br#"{"status":"020","message":"limit"}"#, false);
        assert_eq!(envelope.status, "020");
        assert_eq!(envelope.content_kind, Some(ContentKind::Json));
    }

    #[test]
    fn snippet_truncates_long_bodies() {
        let body = "x".repeat(ERROR_SNIPPET_CHARS + 10);
        let shortened = snippet(body.as_bytes());
        assert!(shortened.ends_with("..."));
        assert_eq!(shortened.chars().count(), ERROR_SNIPPET_CHARS + 3);
    }
}
