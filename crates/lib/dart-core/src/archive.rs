//! Materialization of downloaded ZIP archives on the local filesystem.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::{error::Error, fmt, io};

use dart_model::models::Envelope;
use tracing::{info, warn};
use zip::ZipArchive;
use zip::result::ZipError;

#[derive(Debug)]
pub enum ArchiveError {
    Io(io::Error),
    Zip(ZipError),
    Join(tokio::task::JoinError),
    MissingArchive,
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "archive I/O error: {err}"),
            Self::Zip(err) => write!(f, "invalid ZIP archive: {err}"),
            Self::Join(err) => write!(f, "extraction task failed: {err}"),
            Self::MissingArchive => write!(f, "response did not contain an archive"),
        }
    }
}

impl Error for ArchiveError {}

impl From<io::Error> for ArchiveError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ZipError> for ArchiveError {
    fn from(err: ZipError) -> Self {
        Self::Zip(err)
    }
}

impl From<tokio::task::JoinError> for ArchiveError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err)
    }
}

/// Where an archive is written and where its contents are extracted.
#[derive(Debug, Clone)]
pub struct ArchiveTarget {
    pub archive_path: PathBuf,
    pub extract_dir: PathBuf,
}

impl ArchiveTarget {
    /// Targets `<dir>/<name>.zip`, extracted into `<dir>/<name>/`.
    #[must_use]
    pub fn named(dir: &Path, name: &str) -> Self {
        let stem = file_stem(name);
        Self {
            archive_path: dir.join(format!("{stem}.zip")),
            extract_dir: dir.join(stem),
        }
    }

    /// Targets `<dir>/<archive_name>`, extracted directly into `dir`.
    #[must_use]
    pub fn into_dir(dir: &Path, archive_name: &str) -> Self {
        Self {
            archive_path: dir.join(file_stem(archive_name)),
            extract_dir: dir.to_path_buf(),
        }
    }
}

/// Restricts caller-provided names to a single safe path component.
#[must_use]
pub fn file_stem(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
        .collect();
    let cleaned = cleaned.trim_matches('.');
    if cleaned.is_empty() {
        "unnamed".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Writes an archive, extracts it, and removes the archive file.
///
/// The archive file is removed whether or not extraction succeeds.
///
/// # Errors
/// Returns `ArchiveError` if the archive cannot be written, read, or extracted.
pub fn extract_archive(bytes: &[u8], target: &ArchiveTarget) -> Result<PathBuf, ArchiveError> {
    if let Some(parent) = target.archive_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target.archive_path, bytes)?;

    let result = unpack(&target.archive_path, &target.extract_dir);
    if let Err(err) = fs::remove_file(&target.archive_path)
        && err.kind() != io::ErrorKind::NotFound
    {
        warn!(path = %target.archive_path.display(), error = %err, "failed to remove archive");
    }
    result.map(|()| target.extract_dir.clone())
}

fn unpack(archive_path: &Path, extract_dir: &Path) -> Result<(), ArchiveError> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;
    fs::create_dir_all(extract_dir)?;
    archive.extract(extract_dir)?;
    Ok(())
}

/// Extracts the archive carried by a successful envelope.
///
/// Failed envelopes are returned untouched. Extraction failures leave the
/// remote status as it was and are reported through `extract_error`.
pub async fn materialize(mut envelope: Envelope, target: ArchiveTarget) -> Envelope {
    if !envelope.is_success() {
        return envelope;
    }
    let Some(bytes) = envelope.archive.take() else {
        let err = ArchiveError::MissingArchive;
        warn!(path = %target.extract_dir.display(), error = %err, "archive extraction skipped");
        envelope.extract_error = Some(err.to_string());
        return envelope;
    };

    let job_target = target.clone();
    let outcome = tokio::task::spawn_blocking(move || extract_archive(&bytes, &job_target))
        .await
        .map_err(ArchiveError::from)
        .and_then(|result| result);

    match outcome {
        Ok(path) => {
            info!(path = %path.display(), "archive extracted");
            envelope.saved_path = Some(path.display().to_string());
        }
        Err(err) => {
            warn!(path = %target.extract_dir.display(), error = %err, "archive extraction failed");
            envelope.extract_error = Some(err.to_string());
        }
    }
    envelope
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use zip::write::SimpleFileOptions;

    fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(io::Cursor::new(Vec::new()));
        for (name, body) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .expect("start zip entry");
            writer.write_all(body.as_bytes()).expect("write zip entry");
        }
        writer.finish().expect("finish zip").into_inner()
    }

    #[test]
    fn file_stem_strips_path_components() {
        assert_eq!(file_stem("20240312000736"), "20240312000736");
        assert_eq!(file_stem("../../etc/passwd"), "etcpasswd");
        assert_eq!(file_stem("  "), "unnamed");
    }

    #[test]
    fn extract_archive_removes_zip_and_returns_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = ArchiveTarget::named(dir.path(), "20240312000736");
        let bytes = zip_bytes(&[("20240312000736.xml", "<DOCUMENT/>")]);

        let path = extract_archive(&bytes, &target).expect("extract");

        assert_eq!(path, dir.path().join("20240312000736"));
        assert!(path.join("20240312000736.xml").exists());
        assert!(!target.archive_path.exists());
    }

    #[test]
    fn corrupt_archive_is_cleaned_up() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = ArchiveTarget::named(dir.path(), "broken");

        let result = extract_archive(b"PK\x03\x04not a real archive", &target);

        assert!(matches!(result, Err(ArchiveError::Zip(_))));
        assert!(!target.archive_path.exists());
    }

    #[tokio::test]
    async fn materialize_keeps_remote_status_on_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let envelope = Envelope::archive(b"PK\x03\x04garbage".to_vec());

        let result = materialize(envelope, ArchiveTarget::named(dir.path(), "x")).await;

        assert_eq!(result.status, "000");
        assert!(result.saved_path.is_none());
        assert!(result.extract_error.is_some());
        assert!(!dir.path().join("x.zip").exists());
    }

    #[tokio::test]
    async fn materialize_sets_saved_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let envelope = Envelope::archive(zip_bytes(&[("CORPCODE.xml", "<result/>")]));

        let target = ArchiveTarget::into_dir(dir.path(), "corpCode.zip");
        let result = materialize(envelope, target).await;

        assert_eq!(result.saved_path, Some(dir.path().display().to_string()));
        assert!(dir.path().join("CORPCODE.xml").exists());
        assert!(!dir.path().join("corpCode.zip").exists());
        assert!(result.archive.is_none());
    }

    #[tokio::test]
    async fn failed_envelope_has_no_side_effects() {
        let dir = tempfile::tempdir().expect("tempdir");
        let envelope = Envelope::failure("connection failed", "refused");

        let result = materialize(envelope.clone(), ArchiveTarget::named(dir.path(), "x")).await;

        assert_eq!(result, envelope);
        assert!(!dir.path().join("x").exists());
    }
}
