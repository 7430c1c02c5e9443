use progforge_model::{Modality, Programme, CURRENT_SCHEMA_VERSION};
use progforge_store::{migrate_document, StoreError};
use serde_json::json;

#[test]
fn v1_string_outcomes_become_objects_with_stable_ids() {
    let mut document = json!({
        "title": "BSc Computing",
        "schemaVersion": 1,
        "plos": ["Apply fundamentals", "Design systems"],
        "modules": [{
            "id": "m1",
            "mimlos": ["Write programs", "Debug programs"]
        }]
    });

    migrate_document(&mut document).expect("migrate");

    assert_eq!(document["schemaVersion"], CURRENT_SCHEMA_VERSION);
    assert_eq!(document["plos"][0]["id"], "plo-1");
    assert_eq!(document["plos"][0]["text"], "Apply fundamentals");
    assert_eq!(document["plos"][1]["id"], "plo-2");
    assert_eq!(document["modules"][0]["mimlos"][0]["id"], "m1-mimlo-1");
    assert_eq!(document["modules"][0]["mimlos"][1]["text"], "Debug programs");

    let programme: Programme = serde_json::from_value(document).expect("decode");
    assert_eq!(programme.plos.len(), 2);
    assert_eq!(programme.modules[0].mimlos.len(), 2);
}

#[test]
fn missing_schema_version_is_treated_as_v1() {
    let mut document = json!({
        "title": "BSc Computing",
        "plos": ["Apply fundamentals"]
    });
    migrate_document(&mut document).expect("migrate");
    assert_eq!(document["schemaVersion"], CURRENT_SCHEMA_VERSION);
    assert_eq!(document["plos"][0]["id"], "plo-1");
}

#[test]
fn v2_flat_delivery_pattern_moves_under_the_modality_key() {
    let mut document = json!({
        "title": "BSc Computing",
        "schemaVersion": 2,
        "versions": [{
            "id": "v1",
            "label": "Online",
            "deliveryModality": "online",
            "deliveryPattern": {"syncOnlinePct": 40, "asyncDirectedPct": 60, "onCampusPct": 0}
        }, {
            "id": "v2",
            "label": "Unset",
            "deliveryPattern": {"syncOnlinePct": 0, "asyncDirectedPct": 0, "onCampusPct": 100}
        }]
    });

    migrate_document(&mut document).expect("migrate");

    assert!(document["versions"][0].get("deliveryPattern").is_none());
    assert_eq!(
        document["versions"][0]["deliveryPatterns"]["online"]["syncOnlinePct"],
        40
    );
    // No modality selected: the legacy pattern is filed under f2f.
    assert_eq!(
        document["versions"][1]["deliveryPatterns"]["f2f"]["onCampusPct"],
        100
    );

    let programme: Programme = serde_json::from_value(document).expect("decode");
    assert!(programme.versions[0]
        .delivery_patterns
        .contains_key(&Modality::Online));
}

#[test]
fn migration_is_stable_across_repeated_runs() {
    let mut once = json!({
        "title": "BSc Computing",
        "plos": ["Apply fundamentals"]
    });
    migrate_document(&mut once).expect("first run");
    let mut twice = once.clone();
    migrate_document(&mut twice).expect("second run");
    assert_eq!(once, twice);
}

#[test]
fn future_schema_versions_are_rejected() {
    let mut document = json!({"title": "X", "schemaVersion": 99});
    match migrate_document(&mut document) {
        Err(StoreError::SchemaVersion { found, supported }) => {
            assert_eq!(found, 99);
            assert_eq!(supported, CURRENT_SCHEMA_VERSION);
        }
        other => panic!("expected schema version error, got {other:?}"),
    }
}

#[test]
fn schema_versions_beyond_u32_do_not_wrap_into_the_migration_chain() {
    let mut document = json!({"title": "X", "schemaVersion": 4_294_967_297_u64});
    match migrate_document(&mut document) {
        Err(StoreError::Migration(message)) => {
            assert!(message.contains("out of range"), "got: {message}");
        }
        other => panic!("expected out-of-range rejection, got {other:?}"),
    }
}

#[test]
fn non_object_documents_are_rejected() {
    let mut document = json!([1, 2, 3]);
    assert!(matches!(
        migrate_document(&mut document),
        Err(StoreError::Migration(_))
    ));
}

#[test]
fn skewed_award_standard_arrays_are_repaired() {
    let mut document = json!({
        "title": "BSc Computing",
        "schemaVersion": 3,
        "awardStandardIds": ["std-1", "std-2"],
        "awardStandardNames": ["Computing"]
    });
    migrate_document(&mut document).expect("migrate");
    let programme: Programme = serde_json::from_value(document).expect("decode");
    assert!(programme.check_invariants().is_ok());
    assert_eq!(programme.award_standard_names, vec!["Computing", ""]);
}
