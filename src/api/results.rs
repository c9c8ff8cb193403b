//! Public result types returned by the naming engine.

use serde::{Deserialize, Serialize};

use crate::core::context::DesignContext;
use crate::core::descriptor::{BodyDescriptor, Complexity};
use crate::core::naming::{NameCategory, Suggestion};

/// Output of one analysis or naming pass over a measurement batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingResults {
    /// Classified design context for the batch
    pub context: DesignContext,

    /// Vocabulary the suggestions were drawn from, when names were generated
    pub category: Option<NameCategory>,

    /// Derived descriptor per body, in input order
    pub descriptors: Vec<BodyDescriptor>,

    /// Per-body name suggestions, in input order; empty for analysis-only passes
    pub suggestions: Vec<Suggestion>,

    /// Aggregate statistics for the batch
    pub summary: AnalysisSummary,
}

impl NamingResults {
    /// Results for an empty batch
    pub fn empty() -> Self {
        Self {
            context: DesignContext::General,
            category: None,
            descriptors: Vec::new(),
            suggestions: Vec::new(),
            summary: AnalysisSummary::default(),
        }
    }

    /// Number of bodies analyzed
    pub fn bodies_analyzed(&self) -> usize {
        self.descriptors.len()
    }
}

/// Aggregate statistics over one descriptor batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Bodies in the batch
    pub bodies_analyzed: usize,

    /// Bodies whose measurement could not be analyzed
    pub extraction_failures: usize,

    /// Sum of measured volumes, cubic units
    pub total_volume: f64,

    /// Fraction of bodies in the complex bucket
    pub complex_fraction: f64,
}

impl AnalysisSummary {
    /// Compute summary statistics for a descriptor batch
    pub fn from_descriptors(descriptors: &[BodyDescriptor]) -> Self {
        if descriptors.is_empty() {
            return Self::default();
        }
        let complex = descriptors
            .iter()
            .filter(|d| d.complexity == Complexity::Complex)
            .count();
        Self {
            bodies_analyzed: descriptors.len(),
            extraction_failures: descriptors.iter().filter(|d| d.extraction_failed()).count(),
            total_volume: descriptors.iter().map(|d| d.volume).sum(),
            complex_fraction: complex as f64 / descriptors.len() as f64,
        }
    }
}
