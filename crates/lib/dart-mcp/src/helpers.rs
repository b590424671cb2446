use std::borrow::Cow;
use std::fmt::Write as _;

use dart_model::models::{ContentKind, Envelope};
use dart_model::schema::{STATUS_OK, describe_status};
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content, ErrorCode};
use serde::Serialize;
use serde_json::Value;

#[must_use]
pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

/// Renders an envelope as a tool result.
///
/// Remote statuses other than `000` are still data for the caller; only
/// transport and local failures (an `error` is set) mark the result as an error.
#[must_use]
pub fn render(envelope: &Envelope) -> CallToolResult {
    let content = vec![Content::text(render_text(envelope))];
    if envelope.error.is_some() {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

/// Renders data answered without calling OpenDART as a `000` envelope.
///
/// # Errors
/// Returns an internal MCP error if `content` cannot be serialized.
pub fn render_local(content: &impl Serialize) -> Result<CallToolResult, ErrorData> {
    let value = serde_json::to_value(content)
        .map_err(|err| mcp_err(ErrorCode::INTERNAL_ERROR, err.to_string()))?;
    Ok(render(&Envelope::new(STATUS_OK, "ok", ContentKind::Json, Some(value))))
}

/// Renders a local lookup failure under the given OpenDART status.
#[must_use]
pub fn render_local_failure(
    status: &str,
    message: impl Into<String>,
    error: impl Into<String>,
) -> CallToolResult {
    let mut envelope = Envelope::new(status, message, ContentKind::Json, None);
    envelope.error = Some(error.into());
    render(&envelope)
}

/// Flattens an envelope into `key: value` lines followed by the payload.
#[must_use]
pub fn render_text(envelope: &Envelope) -> String {
    let mut out = format!("status: {}\nmessage: {}\n", envelope.status, envelope.message);
    if !envelope.is_success()
        && let Some(meaning) = describe_status(&envelope.status)
    {
        let _ = writeln!(out, "status_meaning: {meaning}");
    }
    if let Some(path) = &envelope.saved_path {
        let _ = writeln!(out, "saved_path: {path}");
    }
    if let Some(err) = &envelope.extract_error {
        let _ = writeln!(out, "extract_error: {err}");
    }
    if let Some(err) = &envelope.error {
        let _ = writeln!(out, "error: {err}");
    }
    if let Some(size) = envelope.archive_len() {
        let _ = writeln!(out, "archive: {size} bytes (not saved)");
    }
    match &envelope.content {
        Some(Value::String(text)) => {
            let _ = write!(out, "content:\n{text}");
        }
        Some(value) => {
            let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            let _ = write!(out, "content:\n{pretty}");
        }
        None => {}
    }
    out.trim_end().to_string()
}

/// Text of the first content block of a tool result.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_rendering_starts_with_status() {
        let envelopes = [
            Envelope::new("000", "정상", ContentKind::Json, Some(json!({"list": []}))),
            Envelope::new("013", "조회된 데이타가 없습니다.", ContentKind::Json, None),
            Envelope::failure("connection failed", "refused"),
            Envelope::archive(vec![1, 2, 3]),
        ];
        for envelope in &envelopes {
            let text = render_text(envelope);
            assert!(text.starts_with(&format!("status: {}\n", envelope.status)), "{text}");
        }
    }

    #[test]
    fn transport_failures_are_error_results() {
        let failed = render(&Envelope::failure("request timed out", "deadline"));
        assert_eq!(failed.is_error, Some(true));

        let no_data = render(&Envelope::new("013", "no data", ContentKind::Json, None));
        assert_eq!(no_data.is_error, Some(false));
    }

    #[test]
    fn local_results_carry_status() {
        let found = render_local(&json!({"corp_code": "00126380"})).expect("serializable");
        assert_eq!(found.is_error, Some(false));

        let missing = render_local_failure("013", "not found", "no listed corporation");
        assert_eq!(missing.is_error, Some(true));
    }

    #[test]
    fn local_paths_and_xml_content_are_rendered() {
        let content = Some(Value::String("<a/>".into()));
        let mut envelope = Envelope::new("000", "ok", ContentKind::Xml, content);
        envelope.saved_path = Some("data/documents/1".to_string());

        let text = render_text(&envelope);

        assert!(text.contains("saved_path: data/documents/1"));
        assert!(text.ends_with("content:\n<a/>"));
    }
}
