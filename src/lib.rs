//! # Solidname
//!
//! Heuristic naming engine for CAD solid bodies.
//!
//! Solidname takes per-body measurement records (bounding box, volume,
//! surface area, face count), derives geometric descriptors, classifies the
//! overall design context of the batch, and proposes deterministic,
//! collision-free display names from context-specific vocabularies. Hosts
//! integrate through the [`RenameTarget`] seam and can export the derived
//! rules as a JSON document.
//!
//! ## Quick start
//!
//! ```rust
//! use solidname_rs::{BodyMeasurement, NamingEngine};
//!
//! let engine = NamingEngine::with_defaults();
//! let batch = vec![BodyMeasurement::new("Body1")
//!     .with_bounding_box([0.0; 3], [40.0, 40.0, 40.0])
//!     .with_volume(64000.0)
//!     .with_surface_area(9600.0)
//!     .with_face_count(6)];
//! let results = engine.suggest(&batch, None);
//! assert_eq!(results.suggestions.len(), 1);
//! ```

/// Core analysis pipeline: configuration, measurements, descriptors,
/// context classification and name selection.
pub mod core {
    pub mod config;
    pub mod context;
    pub mod descriptor;
    pub mod errors;
    pub mod measurement;
    pub mod naming;
    pub mod sketch;
}

/// Public engine facade and result types.
pub mod api {
    pub mod engine;
    pub mod results;
}

/// Persistence of naming-rule documents.
pub mod io {
    pub mod rules;
}

pub use api::engine::{ApplyReport, NamingEngine, RenameTarget};
pub use api::results::{AnalysisSummary, NamingResults};
pub use core::config::{ClassifierConfig, ExtractionConfig, NamingConfig, ScoringConfig};
pub use core::context::DesignContext;
pub use core::descriptor::{BodyDescriptor, Complexity, FeatureExtractor, Quadrant};
pub use core::errors::{Result, SolidnameError};
pub use core::measurement::{BodyMeasurement, BoundingBox};
pub use core::naming::{NameCategory, NameSelector, Suggestion};
pub use io::rules::{export_naming_rules, import_naming_rules, RulesDocument};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
