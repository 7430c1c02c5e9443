use crate::canonical::canonical_json;
use crate::error::StoreError;
use crate::persist::write_atomic;
use progforge_model::Programme;
use progforge_validate::{
    completion_percent, default_pattern_for, validate_programme, Flag,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Export bundle: the programme (with delivery patterns resolved), the full
/// flag list, and the completion score at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct Snapshot {
    pub programme: Programme,
    pub flags: Vec<Flag>,
    pub completion_percent: u8,
}

/// Builds the export bundle. Versions with a selected modality but no stored
/// pattern get the canonical default for that modality, so the snapshot is
/// always self-contained.
#[must_use]
pub fn build_snapshot(programme: &Programme) -> Snapshot {
    let mut resolved = programme.clone();
    for version in &mut resolved.versions {
        if let Some(modality) = version.delivery_modality {
            version
                .delivery_patterns
                .entry(modality)
                .or_insert_with(|| default_pattern_for(modality));
        }
    }
    Snapshot {
        flags: validate_programme(&resolved),
        completion_percent: completion_percent(&resolved),
        programme: resolved,
    }
}

/// Writes the snapshot as canonical JSON. Refuses while the programme is
/// below 100% completion unless `force` is set; flags do not gate the export
/// (completion and flags are independent signals).
pub fn export_snapshot(
    path: &Path,
    programme: &Programme,
    force: bool,
) -> Result<Snapshot, StoreError> {
    let snapshot = build_snapshot(programme);
    if snapshot.completion_percent != 100 && !force {
        return Err(StoreError::ExportGate {
            completion: snapshot.completion_percent,
        });
    }

    let value = canonical_json(serde_json::to_value(&snapshot)?);
    let mut encoded = serde_json::to_string_pretty(&value)?;
    encoded.push('\n');
    write_atomic(path, &encoded)?;
    info!(
        path = %path.display(),
        completion = snapshot.completion_percent,
        flags = snapshot.flags.len(),
        "exported programme snapshot"
    );
    Ok(snapshot)
}
