//! Ruleset document loading and atomic saving
//!
//! A document is read once before a batch of in-memory operations and written
//! once after it. Writes go to a temporary file in the destination directory
//! that is then renamed over the target, so readers never see a partial file.
//! There is no protection against two concurrent writers.

use crate::io::error::{Result, RulesError, WithPath};
use crate::ruleset::document::RulesetDocument;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Load and validate a ruleset document
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails schema validation
pub fn load_document(path: &Path) -> Result<RulesetDocument> {
    let text = std::fs::read_to_string(path).with_path(path, "read ruleset")?;
    let document = RulesetDocument::from_json_str(&text).with_path(path, "parse ruleset")?;
    debug!(
        path = %path.display(),
        subjects = document.adjacency.subject_count(),
        "loaded ruleset"
    );
    Ok(document)
}

/// Load a ruleset document, starting empty when the file does not exist
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or validated
pub fn load_document_or_default(path: &Path) -> Result<RulesetDocument> {
    if path.exists() {
        load_document(path)
    } else {
        info!(path = %path.display(), "no existing ruleset, starting empty");
        Ok(RulesetDocument::default())
    }
}

/// Atomically replace the document at `path`
///
/// # Errors
///
/// Returns an error if serialization, writing or the final rename fails
pub fn save_document(path: &Path, document: &RulesetDocument) -> Result<()> {
    let text = document.to_json_string().map_err(|err| match err {
        RulesError::Serialization { source, .. } => RulesError::Serialization {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(directory).with_path(directory, "create temporary file")?;
    staged
        .write_all(text.as_bytes())
        .with_path(staged.path().to_path_buf(), "write ruleset")?;
    staged
        .as_file()
        .sync_all()
        .with_path(staged.path().to_path_buf(), "sync ruleset")?;
    staged
        .persist(path)
        .map_err(|err| err.error)
        .with_path(path, "replace ruleset")?;

    info!(
        path = %path.display(),
        bytes = text.len(),
        "saved ruleset"
    );
    Ok(())
}
