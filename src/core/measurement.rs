//! Raw body measurements handed over by the host collaborator.
//!
//! The host application owns geometry queries; this crate only consumes the
//! measurement record it is given. Absent fields are explicit `Option`s
//! rather than runtime attribute probing, so a partially measured body is a
//! first-class input and never a panic.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box given by its two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner (x, y, z)
    pub min: [f64; 3],

    /// Maximum corner (x, y, z)
    pub max: [f64; 3],
}

impl BoundingBox {
    /// Create a bounding box from its two corners
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    /// Absolute extent along each axis
    pub fn extents(&self) -> [f64; 3] {
        [
            (self.max[0] - self.min[0]).abs(),
            (self.max[1] - self.min[1]).abs(),
            (self.max[2] - self.min[2]).abs(),
        ]
    }

    /// Midpoint of the box
    pub fn centroid(&self) -> [f64; 3] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }

    /// True when every coordinate is a finite number
    pub fn is_finite(&self) -> bool {
        self.min.iter().chain(self.max.iter()).all(|v| v.is_finite())
    }
}

/// Raw per-body measurement record produced by the host collaborator.
///
/// Read-only to the core: extraction derives a descriptor from it and never
/// mutates or re-queries the source body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurement {
    /// Current display name of the body in the host design
    pub name: String,

    /// Volume in host units cubed
    pub volume: Option<f64>,

    /// Surface area in host units squared
    pub surface_area: Option<f64>,

    /// Mass, when the host has material data
    pub mass: Option<f64>,

    /// Axis-aligned bounding box
    pub bounding_box: Option<BoundingBox>,

    /// Number of faces on the body
    pub face_count: Option<usize>,
}

impl BodyMeasurement {
    /// Create an empty measurement for a named body
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            volume: None,
            surface_area: None,
            mass: None,
            bounding_box: None,
            face_count: None,
        }
    }

    /// Set the volume
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Set the surface area
    pub fn with_surface_area(mut self, area: f64) -> Self {
        self.surface_area = Some(area);
        self
    }

    /// Set the mass
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Set the bounding box
    pub fn with_bounding_box(mut self, min: [f64; 3], max: [f64; 3]) -> Self {
        self.bounding_box = Some(BoundingBox::new(min, max));
        self
    }

    /// Set the face count
    pub fn with_face_count(mut self, faces: usize) -> Self {
        self.face_count = Some(faces);
        self
    }
}
