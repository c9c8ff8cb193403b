//! Rules document export/import against the filesystem.

use solidname_rs::{
    export_naming_rules, import_naming_rules, BodyMeasurement, NamingEngine, VERSION,
};
use tempfile::TempDir;

fn sample_batch() -> Vec<BodyMeasurement> {
    vec![
        BodyMeasurement::new("Plate")
            .with_bounding_box([0.0; 3], [80.0, 60.0, 2.0])
            .with_volume(9600.0)
            .with_surface_area(10160.0)
            .with_face_count(6),
        BodyMeasurement::new("Block")
            .with_bounding_box([0.0; 3], [40.0, 40.0, 40.0])
            .with_volume(64000.0)
            .with_surface_area(9600.0)
            .with_face_count(26),
        BodyMeasurement::new("Broken"),
    ]
}

#[test]
fn exported_document_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("naming_rules.json");

    let engine = NamingEngine::with_defaults();
    let results = engine.analyze(&sample_batch());
    export_naming_rules(&path, &results.descriptors).unwrap();

    let document = import_naming_rules(&path).unwrap();
    assert_eq!(document.version, VERSION);
    assert_eq!(document.bodies_count, results.descriptors.len());
    assert_eq!(document.naming_rules.len(), results.descriptors.len());
    for (rule, descriptor) in document.naming_rules.iter().zip(&results.descriptors) {
        assert_eq!(rule.original_name, descriptor.name);
        assert_eq!(&rule.properties, descriptor);
        assert_eq!(rule.suggested_category, "auto-detected");
    }
}

#[test]
fn exported_timestamp_parses_as_rfc3339() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("naming_rules.json");

    let engine = NamingEngine::with_defaults();
    let results = engine.analyze(&sample_batch());
    export_naming_rules(&path, &results.descriptors).unwrap();

    let document = import_naming_rules(&path).unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(&document.timestamp).is_ok());
}

#[test]
fn empty_batch_exports_empty_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");

    export_naming_rules(&path, &[]).unwrap();
    let document = import_naming_rules(&path).unwrap();
    assert_eq!(document.bodies_count, 0);
    assert!(document.naming_rules.is_empty());
}
