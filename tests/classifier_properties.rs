//! Property tests for the classifier and extractor.

use proptest::prelude::*;

use solidname_rs::core::context::ContextClassifier;
use solidname_rs::{
    BodyMeasurement, ClassifierConfig, ExtractionConfig, FeatureExtractor, NamingEngine,
};

fn measurement_strategy() -> impl Strategy<Value = BodyMeasurement> {
    (
        0.0f64..2000.0,
        0.0f64..2000.0,
        0.0f64..2000.0,
        0usize..200,
    )
        .prop_map(|(w, h, d, faces)| {
            BodyMeasurement::new("Body")
                .with_bounding_box([0.0; 3], [w, h, d])
                .with_volume(w * h * d)
                .with_surface_area(2.0 * (w * h + h * d + w * d))
                .with_face_count(faces)
        })
}

proptest! {
    #[test]
    fn classification_is_order_independent(
        batch in prop::collection::vec(measurement_strategy(), 1..12)
    ) {
        let extractor = FeatureExtractor::new(ExtractionConfig::default());
        let classifier = ContextClassifier::new(ClassifierConfig::default());

        let forward = classifier.classify(&extractor.extract_batch(&batch));
        let mut reversed = batch.clone();
        reversed.reverse();
        let backward = classifier.classify(&extractor.extract_batch(&reversed));

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn descriptors_are_always_finite(
        batch in prop::collection::vec(measurement_strategy(), 1..12)
    ) {
        let extractor = FeatureExtractor::new(ExtractionConfig::default());
        for descriptor in extractor.extract_batch(&batch) {
            prop_assert!(descriptor.aspect_ratio.is_finite());
            prop_assert!(descriptor.max_dimension.is_finite());
            prop_assert!(descriptor.min_dimension.is_finite());
            prop_assert!(descriptor.centroid.iter().all(|c| c.is_finite()));
        }
    }

    #[test]
    fn one_suggestion_per_body(
        batch in prop::collection::vec(measurement_strategy(), 0..12)
    ) {
        let engine = NamingEngine::with_defaults();
        let results = engine.suggest(&batch, None);
        prop_assert_eq!(results.suggestions.len(), batch.len());
        for (i, suggestion) in results.suggestions.iter().enumerate() {
            prop_assert_eq!(suggestion.index, i);
            prop_assert!(!suggestion.display_name.trim().is_empty());
        }
    }

    #[test]
    fn colliding_display_names_never_repeat(
        batch in prop::collection::vec(measurement_strategy(), 2..12)
    ) {
        let engine = NamingEngine::with_defaults();
        let results = engine.suggest(&batch, None);
        let mut names: Vec<&str> = results
            .suggestions
            .iter()
            .map(|s| s.display_name.as_str())
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), total);
    }
}
