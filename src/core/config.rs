//! Configuration for the naming engine.
//!
//! Every heuristic threshold and scoring weight lives here so the rule
//! tables are loaded once, validated once, and treated as immutable for the
//! lifetime of the engine. Defaults reproduce the canonical rule set.

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SolidnameError};

/// Top-level configuration for the naming engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Feature extraction thresholds
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Design context classification weights and thresholds
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Candidate name scoring weights
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl NamingConfig {
    /// Validate the full configuration
    pub fn validate(&self) -> Result<()> {
        self.extraction.validate()?;
        self.classifier.validate()?;
        self.scoring.validate()?;
        Ok(())
    }
}

/// Thresholds used when deriving descriptors from raw measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Floor applied to ratio denominators so degenerate boxes never divide by zero
    pub dimension_epsilon: f64,

    /// A body is long/thin when its max dimension exceeds this multiple of its min
    pub long_thin_ratio: f64,

    /// Relative tolerance for treating all three dimensions as equal
    pub cubic_tolerance: f64,

    /// A body is flat when its min dimension is below this fraction of its max
    pub flat_ratio: f64,

    /// Bodies with fewer faces than this are simple
    pub simple_face_limit: usize,

    /// Bodies with fewer faces than this (but at least the simple limit) are complex
    pub complex_face_limit: usize,

    /// A body is centered when |centroid x| and |centroid y| are both below this
    pub centered_tolerance: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            dimension_epsilon: 1e-3,
            long_thin_ratio: 3.0,
            cubic_tolerance: 0.1,
            flat_ratio: 0.1,
            simple_face_limit: 10,
            complex_face_limit: 50,
            centered_tolerance: 1.0,
        }
    }
}

impl ExtractionConfig {
    /// Validate extraction thresholds
    pub fn validate(&self) -> Result<()> {
        if self.dimension_epsilon <= 0.0 {
            return Err(SolidnameError::config_field(
                "dimension epsilon must be positive",
                "extraction.dimension_epsilon",
            ));
        }
        if self.long_thin_ratio <= 1.0 {
            return Err(SolidnameError::config_field(
                "long/thin ratio must be greater than 1",
                "extraction.long_thin_ratio",
            ));
        }
        if !(0.0..1.0).contains(&self.cubic_tolerance) {
            return Err(SolidnameError::config_field(
                "cubic tolerance must be in [0, 1)",
                "extraction.cubic_tolerance",
            ));
        }
        if !(0.0..1.0).contains(&self.flat_ratio) {
            return Err(SolidnameError::config_field(
                "flat ratio must be in [0, 1)",
                "extraction.flat_ratio",
            ));
        }
        if self.simple_face_limit >= self.complex_face_limit {
            return Err(SolidnameError::config_field(
                "simple face limit must be below complex face limit",
                "extraction.simple_face_limit",
            ));
        }
        if self.centered_tolerance <= 0.0 {
            return Err(SolidnameError::config_field(
                "centered tolerance must be positive",
                "extraction.centered_tolerance",
            ));
        }
        Ok(())
    }
}

/// Size thresholds feeding the additive context accumulators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Bodies larger than this vote for architecture (+2)
    pub large_structure_threshold: f64,

    /// Bodies smaller than this vote for electronics (+2) and mechanical (+1)
    pub precision_part_threshold: f64,

    /// Exclusive range of medium parts voting automotive/mechanical/furniture (+1 each)
    pub medium_part_range: (f64, f64),

    /// Face count above which a body votes automotive (+1)
    pub detailed_face_threshold: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            large_structure_threshold: 1000.0,
            precision_part_threshold: 10.0,
            medium_part_range: (50.0, 500.0),
            detailed_face_threshold: 20,
        }
    }
}

impl ClassifierConfig {
    /// Validate classifier thresholds
    pub fn validate(&self) -> Result<()> {
        if self.precision_part_threshold >= self.large_structure_threshold {
            return Err(SolidnameError::config_field(
                "precision threshold must be below large structure threshold",
                "classifier.precision_part_threshold",
            ));
        }
        let (low, high) = self.medium_part_range;
        if low >= high {
            return Err(SolidnameError::config_field(
                "medium part range must be non-empty",
                "classifier.medium_part_range",
            ));
        }
        Ok(())
    }
}

/// Weights for scoring candidate names against a body's descriptors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// A "large"/"main" name matches bodies above this max dimension
    pub large_name_threshold: f64,

    /// A "small"/"mini" name matches bodies below this max dimension
    pub small_name_threshold: f64,

    /// Score added when a size word matches the body
    pub size_match_reward: i32,

    /// Score subtracted when a size word contradicts the body
    pub size_mismatch_penalty: i32,

    /// Score added when a shape word matches a descriptor flag
    pub shape_match_bonus: i32,

    /// Score added when a complexity word matches a complex body
    pub complexity_match_bonus: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            large_name_threshold: 100.0,
            small_name_threshold: 50.0,
            size_match_reward: 10,
            size_mismatch_penalty: 5,
            shape_match_bonus: 15,
            complexity_match_bonus: 10,
        }
    }
}

impl ScoringConfig {
    /// Validate scoring weights
    pub fn validate(&self) -> Result<()> {
        if self.small_name_threshold > self.large_name_threshold {
            return Err(SolidnameError::config_field(
                "small name threshold must not exceed large name threshold",
                "scoring.small_name_threshold",
            ));
        }
        if self.size_match_reward < 0
            || self.size_mismatch_penalty < 0
            || self.shape_match_bonus < 0
            || self.complexity_match_bonus < 0
        {
            return Err(SolidnameError::config(
                "scoring weights must be non-negative",
            ));
        }
        Ok(())
    }
}
