//! Design context classification.
//!
//! A batch of descriptors votes, through fixed additive weights, for one of
//! five domain contexts. Classification is a pure function of the input
//! slice: identical descriptors always produce the same label, and because
//! the accumulation is commutative the label is independent of input order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::ClassifierConfig;
use crate::core::descriptor::BodyDescriptor;

/// Coarse domain label for a whole design.
///
/// The variant declaration order is the canonical tie-break order: when two
/// contexts end a batch with equal scores the first-declared one wins. The
/// order is alphabetical and is a fixed policy of this implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignContext {
    /// Large structural work (beams, columns, slabs)
    Architecture,
    /// Vehicle parts and panels
    Automotive,
    /// Small precision parts, boards and enclosures
    Electronics,
    /// Panels, tops, drawers and fittings
    Furniture,
    /// General machine elements
    Mechanical,
    /// Fallback when no bodies are available to vote
    General,
}

impl DesignContext {
    /// The five contexts that participate in scoring, in tie-break order
    pub const SCORED: [DesignContext; 5] = [
        DesignContext::Architecture,
        DesignContext::Automotive,
        DesignContext::Electronics,
        DesignContext::Furniture,
        DesignContext::Mechanical,
    ];

    /// Lowercase label used in reports and hint fallbacks
    pub fn label(&self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::Automotive => "automotive",
            Self::Electronics => "electronics",
            Self::Furniture => "furniture",
            Self::Mechanical => "mechanical",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for DesignContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a descriptor batch into a [`DesignContext`].
#[derive(Debug, Clone)]
pub struct ContextClassifier {
    config: ClassifierConfig,
}

impl ContextClassifier {
    /// Create a classifier with the given thresholds
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Accumulate votes for every scored context.
    ///
    /// The returned map iterates in tie-break order. Error-marked
    /// descriptors participate with their default (zeroed) features, which
    /// keeps a partially failed batch classifiable.
    pub fn score_table(&self, descriptors: &[BodyDescriptor]) -> IndexMap<DesignContext, u32> {
        let mut scores: IndexMap<DesignContext, u32> =
            DesignContext::SCORED.iter().map(|&c| (c, 0)).collect();

        let (medium_low, medium_high) = self.config.medium_part_range;
        for descriptor in descriptors {
            let max_dim = descriptor.max_dimension;

            if max_dim > self.config.large_structure_threshold {
                scores[&DesignContext::Architecture] += 2;
            } else if max_dim < self.config.precision_part_threshold {
                scores[&DesignContext::Electronics] += 2;
                scores[&DesignContext::Mechanical] += 1;
            } else if max_dim > medium_low && max_dim < medium_high {
                scores[&DesignContext::Automotive] += 1;
                scores[&DesignContext::Mechanical] += 1;
                scores[&DesignContext::Furniture] += 1;
            }

            if descriptor.is_long_thin {
                scores[&DesignContext::Mechanical] += 1;
            }
            if descriptor.face_count > self.config.detailed_face_threshold {
                scores[&DesignContext::Automotive] += 1;
            }
            if descriptor.is_flat {
                scores[&DesignContext::Furniture] += 1;
                scores[&DesignContext::Electronics] += 1;
            }
        }

        scores
    }

    /// Classify a batch of descriptors.
    ///
    /// Empty input yields [`DesignContext::General`]. Ties go to the
    /// first-declared context in the score table.
    pub fn classify(&self, descriptors: &[BodyDescriptor]) -> DesignContext {
        if descriptors.is_empty() {
            return DesignContext::General;
        }

        let scores = self.score_table(descriptors);
        let mut best = DesignContext::Mechanical;
        let mut best_score = 0;
        let mut first = true;
        for (&context, &score) in &scores {
            if first || score > best_score {
                best = context;
                best_score = score;
                first = false;
            }
        }

        debug!(context = %best, score = best_score, bodies = descriptors.len(), "classified design context");
        best
    }
}
