use crate::error::StoreError;
use progforge_model::CURRENT_SCHEMA_VERSION;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

/// Documents with no `schemaVersion` field are treated as this version.
pub const EARLIEST_SCHEMA_VERSION: u32 = 1;

/// Upgrades a raw programme document, in place, to the current schema:
///
/// - v1 -> v2: legacy string-shaped PLOs and MIMLOs become `{id, text}`
///   objects with deterministic sequential ids.
/// - v2 -> v3: the per-version flat `deliveryPattern` object moves under
///   `deliveryPatterns`, keyed by the version's selected modality.
///
/// Also repairs the award-standard parallel arrays so the typed decode's
/// length invariant holds.
pub fn migrate_document(document: &mut Value) -> Result<(), StoreError> {
    let root = document
        .as_object_mut()
        .ok_or_else(|| StoreError::Migration("document root must be a JSON object".to_string()))?;

    let mut version = match root.get("schemaVersion").and_then(Value::as_u64) {
        None => EARLIEST_SCHEMA_VERSION,
        Some(raw) => u32::try_from(raw).map_err(|_| {
            StoreError::Migration(format!("schema version {raw} is out of range"))
        })?,
    };
    if version > CURRENT_SCHEMA_VERSION {
        return Err(StoreError::SchemaVersion {
            found: version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }

    while version < CURRENT_SCHEMA_VERSION {
        debug!(from = version, to = version + 1, "migrating programme document");
        match version {
            1 => migrate_v1_to_v2(root),
            2 => migrate_v2_to_v3(root),
            other => {
                return Err(StoreError::Migration(format!(
                    "no migration step defined from schema version {other}"
                )));
            }
        }
        version += 1;
    }

    root.insert(
        "schemaVersion".to_string(),
        Value::from(CURRENT_SCHEMA_VERSION),
    );
    repair_award_standard_arrays(root);
    Ok(())
}

/// Legacy documents stored PLO and MIMLO text as bare strings.
fn migrate_v1_to_v2(root: &mut Map<String, Value>) {
    if let Some(Value::Array(plos)) = root.get_mut("plos") {
        for (index, plo) in plos.iter_mut().enumerate() {
            if let Value::String(text) = plo {
                *plo = json!({
                    "id": format!("plo-{}", index + 1),
                    "text": text,
                    "standardMappings": [],
                });
            }
        }
    }

    if let Some(Value::Array(modules)) = root.get_mut("modules") {
        for (module_index, module) in modules.iter_mut().enumerate() {
            let Some(module) = module.as_object_mut() else {
                continue;
            };
            let module_id = module
                .get("id")
                .and_then(Value::as_str)
                .map_or_else(|| format!("module-{}", module_index + 1), str::to_string);
            if let Some(Value::Array(mimlos)) = module.get_mut("mimlos") {
                for (index, mimlo) in mimlos.iter_mut().enumerate() {
                    if let Value::String(text) = mimlo {
                        *mimlo = json!({
                            "id": format!("{module_id}-mimlo-{}", index + 1),
                            "text": text,
                        });
                    }
                }
            }
        }
    }
}

/// Legacy documents stored one flat `deliveryPattern` per version instead of
/// the modality-keyed `deliveryPatterns` map.
fn migrate_v2_to_v3(root: &mut Map<String, Value>) {
    let Some(Value::Array(versions)) = root.get_mut("versions") else {
        return;
    };
    for version in versions.iter_mut() {
        let Some(version) = version.as_object_mut() else {
            continue;
        };
        let Some(pattern) = version.remove("deliveryPattern") else {
            continue;
        };
        let modality = version
            .get("deliveryModality")
            .and_then(Value::as_str)
            .unwrap_or("f2f")
            .to_string();
        let patterns = version
            .entry("deliveryPatterns".to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(patterns) = patterns.as_object_mut() {
            patterns.entry(modality).or_insert(pattern);
        }
    }
}

/// `awardStandardIds` and `awardStandardNames` must stay index-aligned; older
/// builds could leave them skewed. Pads names with empty strings or drops
/// the surplus.
fn repair_award_standard_arrays(root: &mut Map<String, Value>) {
    let id_count = root
        .get("awardStandardIds")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    if !matches!(root.get("awardStandardNames"), Some(Value::Array(_))) {
        if id_count > 0 {
            warn!(id_count, "award standard names missing, padding with blanks");
            root.insert(
                "awardStandardNames".to_string(),
                Value::Array(vec![Value::String(String::new()); id_count]),
            );
        }
        return;
    }
    if let Some(Value::Array(names)) = root.get_mut("awardStandardNames") {
        if names.len() != id_count {
            warn!(
                id_count,
                name_count = names.len(),
                "award standard arrays skewed, repairing"
            );
            names.resize(id_count, Value::String(String::new()));
        }
    }
}
