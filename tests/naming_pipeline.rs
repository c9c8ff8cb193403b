//! End-to-end pipeline tests over the public engine API.

use solidname_rs::{BodyMeasurement, DesignContext, NameCategory, NamingEngine};

fn boxed(name: &str, max: [f64; 3], faces: usize) -> BodyMeasurement {
    BodyMeasurement::new(name)
        .with_bounding_box([0.0; 3], max)
        .with_volume((max[0] * max[1] * max[2]).max(1.0))
        .with_surface_area(2.0 * (max[0] * max[1] + max[1] * max[2] + max[0] * max[2]))
        .with_face_count(faces)
}

#[test]
fn large_beam_batch_classifies_architecture() {
    let engine = NamingEngine::with_defaults();
    let batch = vec![boxed("Beam", [5.0, 60.0, 1200.0], 6)];
    let results = engine.analyze(&batch);
    assert_eq!(results.context, DesignContext::Architecture);
    assert_eq!(results.summary.bodies_analyzed, 1);
    assert_eq!(results.summary.extraction_failures, 0);
}

#[test]
fn tiny_parts_classify_electronics() {
    let engine = NamingEngine::with_defaults();
    let batch = vec![
        boxed("Chip", [4.0, 4.0, 1.0], 6),
        boxed("Connector", [8.0, 3.0, 3.0], 8),
    ];
    let results = engine.analyze(&batch);
    assert_eq!(results.context, DesignContext::Electronics);
}

#[test]
fn hint_overrides_classified_context() {
    let engine = NamingEngine::with_defaults();
    let batch = vec![boxed("Beam", [5.0, 60.0, 1200.0], 6)];
    let results = engine.suggest(&batch, Some("main circuit board stack"));
    assert_eq!(results.context, DesignContext::Architecture);
    assert_eq!(results.category, Some(NameCategory::Electronics));
}

#[test]
fn every_body_gets_exactly_one_suggestion_in_input_order() {
    let engine = NamingEngine::with_defaults();
    let batch = vec![
        boxed("A", [100.0, 20.0, 20.0], 3),
        boxed("B", [80.0, 60.0, 2.0], 6),
        boxed("C", [30.0, 29.0, 28.0], 25),
        BodyMeasurement::new("Broken"),
    ];
    let results = engine.suggest(&batch, None);
    assert_eq!(results.suggestions.len(), batch.len());
    for (i, suggestion) in results.suggestions.iter().enumerate() {
        assert_eq!(suggestion.index, i);
        assert!(!suggestion.display_name.trim().is_empty());
    }
    assert_eq!(results.summary.extraction_failures, 1);
}

#[test]
fn display_names_are_unique_within_a_batch() {
    let engine = NamingEngine::with_defaults();
    // Four near-identical plates force base-name collisions.
    let batch: Vec<BodyMeasurement> = (0..4)
        .map(|i| boxed(&format!("Plate{i}"), [80.0 + i as f64, 60.0, 2.0], 6))
        .collect();
    let results = engine.suggest(&batch, None);
    let mut names: Vec<&str> = results
        .suggestions
        .iter()
        .map(|s| s.display_name.as_str())
        .collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), batch.len());
}

#[test]
fn suggestions_are_deterministic_across_runs() {
    let engine = NamingEngine::with_defaults();
    let batch = vec![
        boxed("A", [100.0, 20.0, 20.0], 3),
        boxed("B", [80.0, 60.0, 2.0], 6),
        boxed("C", [30.0, 29.0, 28.0], 25),
    ];
    let first = engine.suggest(&batch, None);
    let second = engine.suggest(&batch, None);
    assert_eq!(first.suggestions, second.suggestions);
    assert_eq!(first.context, second.context);
}

#[test]
fn collision_suffixes_read_small_to_large() {
    let engine = NamingEngine::with_defaults();
    // Two long/thin rods of different lengths pick the same base name.
    let batch = vec![
        boxed("LongRod", [200.0, 10.0, 10.0], 3),
        boxed("ShortRod", [100.0, 10.0, 10.0], 3),
    ];
    let results = engine.suggest(&batch, None);
    assert_eq!(
        results.suggestions[0].base_name,
        results.suggestions[1].base_name
    );
    // The shorter rod is processed first and takes the lower suffix.
    assert!(results.suggestions[1].display_name.ends_with(" 1"));
    assert!(results.suggestions[0].display_name.ends_with(" 2"));
}

#[test]
fn empty_batch_is_general_with_no_suggestions() {
    let engine = NamingEngine::with_defaults();
    let results = engine.suggest(&[], None);
    assert_eq!(results.context, DesignContext::General);
    assert!(results.category.is_none());
    assert!(results.suggestions.is_empty());
}
