use crate::canonical::canonical_json;
use crate::error::StoreError;
use crate::migrate::migrate_document;
use progforge_model::Programme;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads, migrates, and decodes a programme document, then checks the model
/// invariants the decode alone cannot express.
pub fn load_programme(path: &Path) -> Result<Programme, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut document: Value = serde_json::from_str(&raw)?;
    migrate_document(&mut document)?;
    let programme: Programme = serde_json::from_value(document)?;
    programme
        .check_invariants()
        .map_err(StoreError::Invariant)?;
    debug!(
        path = %path.display(),
        modules = programme.modules.len(),
        versions = programme.versions.len(),
        "loaded programme"
    );
    Ok(programme)
}

/// Writes canonical pretty JSON via a sibling temp file and rename, so a
/// crash mid-write never leaves a torn document behind.
pub fn save_programme(path: &Path, programme: &Programme) -> Result<(), StoreError> {
    let value = canonical_json(serde_json::to_value(programme)?);
    let mut encoded = serde_json::to_string_pretty(&value)?;
    encoded.push('\n');
    write_atomic(path, &encoded)?;
    debug!(path = %path.display(), bytes = encoded.len(), "saved programme");
    Ok(())
}

/// Temp-file-and-rename write shared by every document the store emits.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents).map_err(|source| StoreError::Io {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
