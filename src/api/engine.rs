//! Main naming engine implementation.
//!
//! The engine wires the extractor, classifier and selector behind one
//! stateless facade. The host application stays behind the [`RenameTarget`]
//! seam: the engine consumes measurement records and writes names back only
//! through that trait.

use tracing::{info, warn};

use crate::api::results::{AnalysisSummary, NamingResults};
use crate::core::config::NamingConfig;
use crate::core::context::ContextClassifier;
use crate::core::descriptor::FeatureExtractor;
use crate::core::errors::{Result, SolidnameError};
use crate::core::measurement::BodyMeasurement;
use crate::core::naming::{NameCategory, NameSelector, Suggestion};

/// Writable host body handle.
///
/// The host collaborator exposes bodies with a readable current name and a
/// writable display name; this trait is the only channel through which the
/// engine touches them.
pub trait RenameTarget {
    /// Current display name of the body
    fn current_name(&self) -> &str;

    /// Write a new display name to the body
    fn rename(&mut self, name: &str) -> Result<()>;
}

/// Heuristic naming engine over measurement batches.
pub struct NamingEngine {
    config: NamingConfig,
    extractor: FeatureExtractor,
    classifier: ContextClassifier,
    selector: NameSelector,
}

impl NamingEngine {
    /// Create an engine after validating the rule tables once
    pub fn new(config: NamingConfig) -> Result<Self> {
        config.validate()?;
        info!("initializing naming engine");
        Ok(Self {
            extractor: FeatureExtractor::new(config.extraction.clone()),
            classifier: ContextClassifier::new(config.classifier.clone()),
            selector: NameSelector::new(config.scoring.clone()),
            config,
        })
    }

    /// Engine with the canonical default rule tables
    pub fn with_defaults() -> Self {
        // The default configuration is validated by construction.
        Self {
            config: NamingConfig::default(),
            extractor: FeatureExtractor::new(Default::default()),
            classifier: ContextClassifier::new(Default::default()),
            selector: NameSelector::new(Default::default()),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Derive descriptors and classify the design context without naming
    pub fn analyze(&self, measurements: &[BodyMeasurement]) -> NamingResults {
        if measurements.is_empty() {
            return NamingResults::empty();
        }

        let descriptors = self.extractor.extract_batch(measurements);
        let context = self.classifier.classify(&descriptors);
        let summary = AnalysisSummary::from_descriptors(&descriptors);
        info!(
            context = %context,
            bodies = summary.bodies_analyzed,
            failures = summary.extraction_failures,
            "analyzed measurement batch"
        );

        NamingResults {
            context,
            category: None,
            descriptors,
            suggestions: Vec::new(),
            summary,
        }
    }

    /// Full naming pass: analyze, resolve a vocabulary from the optional
    /// free-text hint, and produce per-body suggestions in input order
    pub fn suggest(&self, measurements: &[BodyMeasurement], hint: Option<&str>) -> NamingResults {
        let mut results = self.analyze(measurements);
        if results.descriptors.is_empty() {
            return results;
        }

        let category = NameCategory::resolve(results.context, hint);
        results.suggestions = self.selector.suggest(&results.descriptors, category);
        results.category = Some(category);
        info!(
            category = ?category,
            suggestions = results.suggestions.len(),
            "generated name suggestions"
        );
        results
    }

    /// Apply suggestions to host bodies through the [`RenameTarget`] seam.
    ///
    /// `include` toggles bodies by original index; `None` applies every
    /// suggestion. Failures are accumulated per body and never abort the
    /// batch; bodies renamed before a failure stay renamed.
    pub fn apply_suggestions<T: RenameTarget>(
        &self,
        targets: &mut [T],
        suggestions: &[Suggestion],
        include: Option<&[bool]>,
    ) -> ApplyReport {
        let mut report = ApplyReport::default();

        for suggestion in suggestions {
            let index = suggestion.index;
            if let Some(flags) = include {
                if !flags.get(index).copied().unwrap_or(false) {
                    continue;
                }
            }

            let new_name = suggestion.display_name.trim();
            if new_name.is_empty() {
                continue;
            }

            let Some(target) = targets.get_mut(index) else {
                report
                    .errors
                    .push(SolidnameError::rename(index, "no such body in batch").to_string());
                continue;
            };

            if target.current_name() == new_name {
                continue;
            }

            match target.rename(new_name) {
                Ok(()) => report.renamed += 1,
                Err(err) => {
                    warn!(index, error = %err, "rename write-back failed");
                    report.errors.push(err.to_string());
                }
            }
        }

        info!(
            renamed = report.renamed,
            failed = report.errors.len(),
            "applied name suggestions"
        );
        report
    }
}

/// Outcome of a write-back pass. There is no rollback: the report only
/// records what succeeded and what failed.
#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
    /// Bodies successfully renamed
    pub renamed: usize,

    /// One message per failed body
    pub errors: Vec<String>,
}

impl ApplyReport {
    /// True when no body failed to rename
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error count plus the first `limit` messages, for user display
    pub fn error_digest(&self, limit: usize) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        let shown = self.errors.iter().take(limit).cloned().collect::<Vec<_>>();
        format!("{} errors:\n{}", self.errors.len(), shown.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::DesignContext;

    struct FakeBody {
        name: String,
        locked: bool,
    }

    impl FakeBody {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                locked: false,
            }
        }

        fn locked(name: &str) -> Self {
            Self {
                name: name.to_string(),
                locked: true,
            }
        }
    }

    impl RenameTarget for FakeBody {
        fn current_name(&self) -> &str {
            &self.name
        }

        fn rename(&mut self, name: &str) -> Result<()> {
            if self.locked {
                return Err(SolidnameError::rename(0, "body is locked"));
            }
            self.name = name.to_string();
            Ok(())
        }
    }

    fn cube(name: &str, side: f64, faces: usize) -> BodyMeasurement {
        BodyMeasurement::new(name)
            .with_bounding_box([0.0; 3], [side, side, side])
            .with_volume(side.powi(3))
            .with_surface_area(6.0 * side * side)
            .with_face_count(faces)
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let mut config = NamingConfig::default();
        config.extraction.dimension_epsilon = -1.0;
        assert!(NamingEngine::new(config).is_err());
    }

    #[test]
    fn test_analyze_empty_batch() {
        let engine = NamingEngine::with_defaults();
        let results = engine.analyze(&[]);
        assert_eq!(results.context, DesignContext::General);
        assert!(results.suggestions.is_empty());
    }

    #[test]
    fn test_analyze_reports_failures_without_aborting() {
        let engine = NamingEngine::with_defaults();
        let batch = vec![cube("Good", 20.0, 6), BodyMeasurement::new("Bad")];
        let results = engine.analyze(&batch);
        assert_eq!(results.summary.bodies_analyzed, 2);
        assert_eq!(results.summary.extraction_failures, 1);
    }

    #[test]
    fn test_suggest_produces_one_name_per_body() {
        let engine = NamingEngine::with_defaults();
        let batch = vec![cube("A", 20.0, 6), cube("B", 40.0, 6), cube("C", 60.0, 6)];
        let results = engine.suggest(&batch, None);
        assert_eq!(results.suggestions.len(), 3);
        assert_eq!(results.category, Some(NameCategory::MechanicalBasic));
        for (i, s) in results.suggestions.iter().enumerate() {
            assert_eq!(s.index, i);
            assert!(!s.display_name.is_empty());
        }
    }

    #[test]
    fn test_suggest_honors_hint_over_context() {
        let engine = NamingEngine::with_defaults();
        let batch = vec![cube("A", 2.0, 4)];
        let results = engine.suggest(&batch, Some("brake system"));
        assert_eq!(results.category, Some(NameCategory::Automotive));
    }

    #[test]
    fn test_apply_renames_selected_bodies() {
        let engine = NamingEngine::with_defaults();
        let mut bodies = vec![FakeBody::new("Body1"), FakeBody::new("Body2")];
        let suggestions = vec![
            Suggestion {
                index: 0,
                base_name: "Housing".into(),
                display_name: "Housing 1".into(),
            },
            Suggestion {
                index: 1,
                base_name: "Housing".into(),
                display_name: "Housing 2".into(),
            },
        ];
        let report =
            engine.apply_suggestions(&mut bodies, &suggestions, Some(&[true, false]));
        assert_eq!(report.renamed, 1);
        assert!(report.is_clean());
        assert_eq!(bodies[0].name, "Housing 1");
        assert_eq!(bodies[1].name, "Body2");
    }

    #[test]
    fn test_apply_accumulates_errors_without_rollback() {
        let engine = NamingEngine::with_defaults();
        let mut bodies = vec![FakeBody::new("Body1"), FakeBody::locked("Body2")];
        let suggestions = vec![
            Suggestion {
                index: 0,
                base_name: "Cover".into(),
                display_name: "Cover 1".into(),
            },
            Suggestion {
                index: 1,
                base_name: "Cover".into(),
                display_name: "Cover 2".into(),
            },
        ];
        let report = engine.apply_suggestions(&mut bodies, &suggestions, None);
        assert_eq!(report.renamed, 1);
        assert_eq!(report.errors.len(), 1);
        // The successful rename is kept.
        assert_eq!(bodies[0].name, "Cover 1");
        assert!(report.error_digest(5).starts_with("1 errors:"));
    }

    #[test]
    fn test_apply_skips_unchanged_and_empty_names() {
        let engine = NamingEngine::with_defaults();
        let mut bodies = vec![FakeBody::new("Cover"), FakeBody::new("Body2")];
        let suggestions = vec![
            Suggestion {
                index: 0,
                base_name: "Cover".into(),
                display_name: "Cover".into(),
            },
            Suggestion {
                index: 1,
                base_name: "".into(),
                display_name: "  ".into(),
            },
        ];
        let report = engine.apply_suggestions(&mut bodies, &suggestions, None);
        assert_eq!(report.renamed, 0);
        assert!(report.is_clean());
    }

    #[test]
    fn test_apply_reports_out_of_range_index() {
        let engine = NamingEngine::with_defaults();
        let mut bodies = vec![FakeBody::new("Body1")];
        let suggestions = vec![Suggestion {
            index: 5,
            base_name: "Cover".into(),
            display_name: "Cover".into(),
        }];
        let report = engine.apply_suggestions(&mut bodies, &suggestions, None);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("no such body"));
    }
}
