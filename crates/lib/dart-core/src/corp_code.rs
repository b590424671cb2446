//! Local corp-code listing and name search.
//!
//! OpenDART publishes the mapping from company names to 8-digit corp codes as
//! a flat XML file (`CORPCODE.xml`) inside the `corpCode.xml` archive. The
//! index reads that file lazily and answers lookups from memory.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{error::Error, fmt, io};

use dart_model::models::CorpRecord;
use roxmltree::{Document, Node};
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug)]
pub enum CorpCodeError {
    NotFound(PathBuf),
    Io(io::Error),
    Parse(roxmltree::Error),
    Join(tokio::task::JoinError),
}

impl fmt::Display for CorpCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "corp code file not found at {}", path.display()),
            Self::Io(err) => write!(f, "failed to read corp code file: {err}"),
            Self::Parse(err) => write!(f, "corp code XML parse error: {err}"),
            Self::Join(err) => write!(f, "corp code load task failed: {err}"),
        }
    }
}

impl Error for CorpCodeError {}

impl From<io::Error> for CorpCodeError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<roxmltree::Error> for CorpCodeError {
    fn from(err: roxmltree::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<tokio::task::JoinError> for CorpCodeError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err)
    }
}

/// Parses the corp-code listing into records.
///
/// Every `<list>` element becomes one record; missing children are read as
/// empty strings.
///
/// # Errors
/// Returns `CorpCodeError::Parse` if the document is not well-formed XML.
pub fn parse_corp_codes(xml: &str) -> Result<Vec<CorpRecord>, CorpCodeError> {
    let doc = Document::parse(xml)?;
    let records = doc
        .descendants()
        .filter(|node| node.has_tag_name("list"))
        .map(|node| CorpRecord {
            corp_code: child_text(node, "corp_code"),
            corp_name: child_text(node, "corp_name"),
            stock_code: child_text(node, "stock_code"),
            modify_date: child_text(node, "modify_date"),
        })
        .collect();
    Ok(records)
}

fn child_text(node: Node<'_, '_>, name: &str) -> String {
    node.children()
        .find(|child| child.has_tag_name(name))
        .and_then(|child| child.text())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Returns every record whose name contains `query`, ignoring case.
///
/// An empty query matches every record.
#[must_use]
pub fn search_records<'a>(records: &'a [CorpRecord], query: &str) -> Vec<&'a CorpRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.corp_name.to_lowercase().contains(&needle))
        .collect()
}

/// Lazily loaded, reloadable corp-code index.
pub struct CorpCodeIndex {
    path: PathBuf,
    records: RwLock<Option<Arc<Vec<CorpRecord>>>>,
}

impl CorpCodeIndex {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the loaded records, reading the file on first use.
    ///
    /// # Errors
    /// Returns `CorpCodeError` if the file is missing, unreadable, or malformed.
    pub async fn records(&self) -> Result<Arc<Vec<CorpRecord>>, CorpCodeError> {
        if let Some(records) = self.records.read().await.as_ref() {
            return Ok(records.clone());
        }

        let mut guard = self.records.write().await;
        if let Some(records) = guard.as_ref() {
            return Ok(records.clone());
        }
        let records = Arc::new(load_file(self.path.clone()).await?);
        *guard = Some(records.clone());
        Ok(records)
    }

    /// Re-reads the file, replacing the cached records.
    ///
    /// # Errors
    /// Returns `CorpCodeError` if the file is missing, unreadable, or malformed.
    /// The previous records stay cached on failure.
    pub async fn reload(&self) -> Result<usize, CorpCodeError> {
        let records = load_file(self.path.clone()).await?;
        let count = records.len();
        *self.records.write().await = Some(Arc::new(records));
        Ok(count)
    }

    /// Case-insensitive substring search over company names.
    ///
    /// # Errors
    /// Returns `CorpCodeError` if the index cannot be loaded.
    pub async fn search(&self, name: &str) -> Result<Vec<CorpRecord>, CorpCodeError> {
        let records = self.records().await?;
        Ok(search_records(&records, name).into_iter().cloned().collect())
    }

    /// Exact lookup by 6-digit stock code.
    ///
    /// # Errors
    /// Returns `CorpCodeError` if the index cannot be loaded.
    pub async fn find_by_stock_code(
        &self,
        stock_code: &str,
    ) -> Result<Option<CorpRecord>, CorpCodeError> {
        let stock_code = stock_code.trim();
        let records = self.records().await?;
        Ok(records
            .iter()
            .find(|record| record.is_listed() && record.stock_code == stock_code)
            .cloned())
    }

    /// Exact lookup by 8-digit corp code.
    ///
    /// # Errors
    /// Returns `CorpCodeError` if the index cannot be loaded.
    pub async fn find_by_corp_code(
        &self,
        corp_code: &str,
    ) -> Result<Option<CorpRecord>, CorpCodeError> {
        let corp_code = corp_code.trim();
        let records = self.records().await?;
        Ok(records
            .iter()
            .find(|record| record.corp_code == corp_code)
            .cloned())
    }
}

async fn load_file(path: PathBuf) -> Result<Vec<CorpRecord>, CorpCodeError> {
    if !path.exists() {
        return Err(CorpCodeError::NotFound(path));
    }
    let records = tokio::task::spawn_blocking(move || {
        let xml = std::fs::read_to_string(&path)?;
        let records = parse_corp_codes(&xml)?;
        info!(path = %path.display(), count = records.len(), "corp code listing loaded");
        Ok::<_, CorpCodeError>(records)
    })
    .await??;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r"<?xml version='1.0' encoding='UTF-8'?>
<result>
    <list>
        <corp_code>00126380</corp_code>
        <corp_name>삼성전자</corp_name>
        <stock_code>005930</stock_code>
        <modify_date>20230110</modify_date>
    </list>
    <list>
        <corp_code>00164779</corp_code>
        <corp_name>SK하이닉스</corp_name>
        <stock_code>000660</stock_code>
        <modify_date>20230301</modify_date>
    </list>
    <list>
        <corp_code>00434003</corp_code>
        <corp_name>sk Networks Service</corp_name>
        <stock_code> </stock_code>
        <modify_date>20170630</modify_date>
    </list>
</result>";

    #[test]
    fn parses_every_list_entry() {
        let records = parse_corp_codes(SAMPLE).expect("parse sample");

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].corp_code, "00126380");
        assert_eq!(records[0].corp_name, "삼성전자");
        assert_eq!(records[0].stock_code, "005930");
        assert!(!records[2].is_listed());
    }

    #[test]
    fn missing_children_become_empty() {
        let records = parse_corp_codes("<result><list><corp_code>1</corp_code></list></result>")
            .expect("parse");
        assert_eq!(records[0].corp_name, "");
        assert_eq!(records[0].modify_date, "");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = parse_corp_codes(SAMPLE).expect("parse sample");

        let names: Vec<&str> = search_records(&records, "SK")
            .into_iter()
            .map(|record| record.corp_name.as_str())
            .collect();
        assert_eq!(names, vec!["SK하이닉스", "sk Networks Service"]);

        assert_eq!(search_records(&records, "전자").len(), 1);
        assert!(search_records(&records, "LG").is_empty());
    }

    #[test]
    fn empty_query_returns_all() {
        let records = parse_corp_codes(SAMPLE).expect("parse sample");
        assert_eq!(search_records(&records, "").len(), records.len());
    }

    #[tokio::test]
    async fn missing_file_reports_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let index = CorpCodeIndex::new(dir.path().join("CORPCODE.xml"));

        let err = index.search("삼성").await.expect_err("file is missing");
        assert!(matches!(err, CorpCodeError::NotFound(_)));
    }

    #[tokio::test]
    async fn loads_lazily_and_reloads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("CORPCODE.xml");
        std::fs::write(&path, SAMPLE).expect("write sample");
        let index = CorpCodeIndex::new(&path);

        let found = index.find_by_stock_code("005930").await.expect("lookup");
        assert_eq!(found.map(|record| record.corp_code), Some("00126380".to_string()));
        assert!(index.find_by_stock_code("").await.expect("lookup").is_none());

        std::fs::write(&path, "<result><list><corp_code>1</corp_code><corp_name>Only</corp_name></list></result>")
            .expect("rewrite");
        assert_eq!(index.records().await.expect("cached").len(), 3);
        assert_eq!(index.reload().await.expect("reload"), 1);
        assert_eq!(
            index.find_by_corp_code("1").await.expect("lookup").map(|record| record.corp_name),
            Some("Only".to_string())
        );
    }
}
