//! Derivation of heuristic descriptors from raw body measurements.
//!
//! Extraction is infallible by design: a measurement missing required fields
//! produces a descriptor carrying only an error marker, and downstream
//! stages treat it as a default/simple body instead of aborting the batch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::ExtractionConfig;
use crate::core::measurement::BodyMeasurement;

/// Face-count complexity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    /// Fewer than the simple face limit
    Simple,
    /// Between the simple and complex face limits
    Complex,
    /// At or above the complex face limit
    VeryComplex,
}

impl Default for Complexity {
    fn default() -> Self {
        Self::Simple
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Complex => write!(f, "complex"),
            Self::VeryComplex => write!(f, "very_complex"),
        }
    }
}

/// Coarse XY placement of a body's centroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Centroid has positive x and positive y
    Positive,
    /// Every other placement
    Negative,
}

impl Default for Quadrant {
    fn default() -> Self {
        Self::Negative
    }
}

/// Derived per-body feature record.
///
/// Computed once per analysis pass and never mutated afterwards. Every
/// ratio is guarded against degenerate (zero-dimension) boxes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Original index of the body in the input batch
    pub index: usize,

    /// Display name the body carried when measured
    pub name: String,

    /// Extent along x
    pub width: f64,

    /// Extent along y
    pub height: f64,

    /// Extent along z
    pub depth: f64,

    /// Largest extent
    pub max_dimension: f64,

    /// Smallest extent
    pub min_dimension: f64,

    /// Max over min extent, denominator floored at the configured epsilon
    pub aspect_ratio: f64,

    /// Max extent exceeds the long/thin multiple of the min extent
    pub is_long_thin: bool,

    /// All three extents agree within the cubic tolerance
    pub is_cubic: bool,

    /// Min extent is below the flat fraction of the max extent
    pub is_flat: bool,

    /// Number of faces on the body
    pub face_count: usize,

    /// Face-count bucket
    pub complexity: Complexity,

    /// Bounding-box midpoint
    pub centroid: [f64; 3],

    /// Centroid lies within the centered tolerance of the origin on x and y
    pub is_centered: bool,

    /// Coarse XY quadrant of the centroid
    pub quadrant: Quadrant,

    /// Measured volume
    pub volume: f64,

    /// Measured surface area
    pub surface_area: f64,

    /// Measured mass, when available
    pub mass: Option<f64>,

    /// Set when extraction could not derive features for this body
    pub error: Option<String>,
}

impl BodyDescriptor {
    /// Descriptor for a body whose measurement could not be analyzed
    fn failed(index: usize, name: &str, message: impl Into<String>) -> Self {
        Self {
            index,
            name: name.to_string(),
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// True when this descriptor only carries an error marker
    pub fn extraction_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Converts raw measurements into derived descriptors.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    config: ExtractionConfig,
}

impl FeatureExtractor {
    /// Create an extractor with the given thresholds
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Derive a descriptor for one body.
    ///
    /// Missing or non-finite required fields yield an error-marked
    /// descriptor rather than an `Err`; partial failure is isolated per body.
    pub fn extract(&self, index: usize, measurement: &BodyMeasurement) -> BodyDescriptor {
        let bbox = match measurement.bounding_box {
            Some(bbox) if bbox.is_finite() => bbox,
            Some(_) => {
                debug!(index, name = %measurement.name, "bounding box has non-finite coordinates");
                return BodyDescriptor::failed(index, &measurement.name, "non-finite bounding box");
            }
            None => {
                debug!(index, name = %measurement.name, "measurement carries no bounding box");
                return BodyDescriptor::failed(index, &measurement.name, "missing bounding box");
            }
        };

        let volume = match measurement.volume {
            Some(v) if v.is_finite() && v >= 0.0 => v,
            _ => {
                return BodyDescriptor::failed(index, &measurement.name, "missing or invalid volume")
            }
        };
        let surface_area = match measurement.surface_area {
            Some(a) if a.is_finite() && a >= 0.0 => a,
            _ => {
                return BodyDescriptor::failed(
                    index,
                    &measurement.name,
                    "missing or invalid surface area",
                )
            }
        };
        let face_count = match measurement.face_count {
            Some(n) => n,
            None => {
                return BodyDescriptor::failed(index, &measurement.name, "missing face count")
            }
        };

        let [width, height, depth] = bbox.extents();
        let max_dimension = width.max(height).max(depth);
        let min_dimension = width.min(height).min(depth);
        // Denominator floored so a zero-thickness box still yields a finite ratio.
        let aspect_ratio = max_dimension / min_dimension.max(self.config.dimension_epsilon);

        let is_long_thin = max_dimension > self.config.long_thin_ratio * min_dimension;
        let is_cubic = (width - height).abs() < self.config.cubic_tolerance * width
            && (width - depth).abs() < self.config.cubic_tolerance * width;
        let is_flat = min_dimension < self.config.flat_ratio * max_dimension;

        let complexity = if face_count < self.config.simple_face_limit {
            Complexity::Simple
        } else if face_count < self.config.complex_face_limit {
            Complexity::Complex
        } else {
            Complexity::VeryComplex
        };

        let centroid = bbox.centroid();
        let is_centered = centroid[0].abs() < self.config.centered_tolerance
            && centroid[1].abs() < self.config.centered_tolerance;
        let quadrant = if centroid[0] > 0.0 && centroid[1] > 0.0 {
            Quadrant::Positive
        } else {
            Quadrant::Negative
        };

        BodyDescriptor {
            index,
            name: measurement.name.clone(),
            width,
            height,
            depth,
            max_dimension,
            min_dimension,
            aspect_ratio,
            is_long_thin,
            is_cubic,
            is_flat,
            face_count,
            complexity,
            centroid,
            is_centered,
            quadrant,
            volume,
            surface_area,
            mass: measurement.mass,
            error: None,
        }
    }

    /// Derive descriptors for a whole batch, preserving input order
    pub fn extract_batch(&self, measurements: &[BodyMeasurement]) -> Vec<BodyDescriptor> {
        measurements
            .iter()
            .enumerate()
            .map(|(index, m)| self.extract(index, m))
            .collect()
    }
}
