//! Tool metadata registry.
//!
//! The registry is filled once at startup (see [`crate::catalog`]) and read by
//! the help tools and the server instructions. It is a plain ordered map with
//! last-write-wins semantics.

use std::collections::HashMap;
use std::fmt::Write as _;

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Metadata describing one callable tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub korean_name: Option<String>,
    pub description: String,
    /// JSON schema object describing the tool's input.
    pub parameters: Value,
    #[serde(default)]
    pub linked_tools: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ToolMetadata {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            korean_name: None,
            description: description.into(),
            parameters,
            linked_tools: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Builds metadata whose parameters are the JSON schema of `P`.
    #[must_use]
    pub fn with_params<P: JsonSchema>(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(name, description, schema_for!(P).to_value())
    }

    #[must_use]
    pub fn with_korean_name(mut self, korean_name: impl Into<String>) -> Self {
        self.korean_name = Some(korean_name.into());
        self
    }

    #[must_use]
    pub fn with_linked_tools(mut self, linked_tools: &[&str]) -> Self {
        self.linked_tools = linked_tools.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate.eq_ignore_ascii_case(tag))
    }

    /// Parameter names paired with whether they are required, in schema order.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<(String, bool)> {
        let required: Vec<&str> = self
            .parameters
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        self.parameters
            .get("properties")
            .and_then(Value::as_object)
            .map(|properties| {
                properties
                    .keys()
                    .map(|name| (name.clone(), required.contains(&name.as_str())))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn parameter_description(&self, name: &str) -> Option<&str> {
        self.parameters
            .get("properties")?
            .get(name)?
            .get("description")?
            .as_str()
    }
}

/// Ordered name -> metadata map.
#[derive(Debug, Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolMetadata>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts metadata under its name.
    ///
    /// A second registration under the same name replaces the first in place
    /// and logs a warning.
    pub fn register(&mut self, metadata: ToolMetadata) {
        if let Some(&position) = self.index.get(&metadata.name) {
            warn!(
                tool = %metadata.name,
                "tool registered twice; the later registration replaces the earlier one"
            );
            self.tools[position] = metadata;
            return;
        }
        self.index.insert(metadata.name.clone(), self.tools.len());
        self.tools.push(metadata);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ToolMetadata> {
        self.index.get(name).map(|&position| &self.tools[position])
    }

    /// All records in first-registration order.
    #[must_use]
    pub fn list(&self) -> &[ToolMetadata] {
        &self.tools
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Renders a Markdown guide to every registered tool.
    #[must_use]
    pub fn render_prompt(&self) -> String {
        let mut out = String::from("# OpenDART tools\n");
        for tool in &self.tools {
            out.push('\n');
            match &tool.korean_name {
                Some(korean) => {
                    let _ = writeln!(out, "## {} ({korean})", tool.name);
                }
                None => {
                    let _ = writeln!(out, "## {}", tool.name);
                }
            }
            let _ = writeln!(out, "{}", tool.description);

            let parameters = tool.parameter_names();
            if !parameters.is_empty() {
                out.push_str("Parameters:\n");
                for (name, required) in parameters {
                    let marker = if required { "required" } else { "optional" };
                    match tool.parameter_description(&name) {
                        Some(description) => {
                            let _ = writeln!(out, "- `{name}` ({marker}): {description}");
                        }
                        None => {
                            let _ = writeln!(out, "- `{name}` ({marker})");
                        }
                    }
                }
            }
            if !tool.linked_tools.is_empty() {
                let _ = writeln!(out, "Linked tools: {}", tool.linked_tools.join(", "));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dart_model::requests::{DisclosureSearchParams, PeriodicReportParams};
    use serde_json::json;

    #[test]
    fn duplicate_registration_keeps_one_entry_with_later_metadata() {
        let mut registry = ToolRegistry::new();
        registry.register(ToolMetadata::new("get_single_acc", "first", json!({})));
        registry.register(ToolMetadata::new("other", "other", json!({})));
        registry.register(
            ToolMetadata::new("get_single_acc", "second", json!({}))
                .with_korean_name("단일회사 주요계정"),
        );

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["get_single_acc", "other"]);
        let tool = registry.get("get_single_acc").expect("registered");
        assert_eq!(tool.description, "second");
        assert_eq!(tool.korean_name.as_deref(), Some("단일회사 주요계정"));
    }

    #[test]
    fn unknown_names_are_absent() {
        let registry = ToolRegistry::new();
        assert!(registry.get("missing").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn parameters_come_from_request_schema() {
        let tool =
            ToolMetadata::with_params::<PeriodicReportParams>("get_dividend_info", "dividends");
        let mut names = tool.parameter_names();
        names.sort();

        assert_eq!(
            names,
            vec![
                ("bsns_year".to_string(), true),
                ("corp_code".to_string(), true),
                ("reprt_code".to_string(), true),
            ]
        );
    }

    #[test]
    fn prompt_lists_parameters_and_links() {
        let mut registry = ToolRegistry::new();
        registry.register(
            ToolMetadata::with_params::<DisclosureSearchParams>(
                "get_disclosure_list",
                "Search filings.",
            )
            .with_korean_name("공시검색")
            .with_linked_tools(&["get_original_document"]),
        );

        let prompt = registry.render_prompt();

        assert!(prompt.contains("## get_disclosure_list (공시검색)"));
        assert!(prompt.contains("- `bgn_de` (optional): Search start date, YYYYMMDD"));
        assert!(prompt.contains("Linked tools: get_original_document"));
    }

    #[test]
    fn tags_match_case_insensitively() {
        let tool = ToolMetadata::new("x", "x", json!({})).with_tags(&["DS003", "financial"]);
        assert!(tool.has_tag("ds003"));
        assert!(!tool.has_tag("periodic"));
    }
}
