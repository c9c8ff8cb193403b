//! Candidate vocabularies, hint resolution and name selection.
//!
//! The vocabulary tables are fixed, hand-authored lists resolved once at
//! startup and never mutated. Selection is a pure, stateless batch
//! transform: descriptors in, suggestions out, with deterministic collision
//! suffixing across the batch.

use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::ScoringConfig;
use crate::core::context::DesignContext;
use crate::core::descriptor::{BodyDescriptor, Complexity};

/// Shape words rewarded on long/thin bodies
const LONG_THIN_WORDS: [&str; 4] = ["shaft", "rod", "bar", "beam"];

/// Shape words rewarded on cubic bodies
const CUBIC_WORDS: [&str; 3] = ["block", "cube", "housing"];

/// Shape words rewarded on flat bodies
const FLAT_WORDS: [&str; 4] = ["plate", "panel", "cover", "top"];

/// Words rewarded on complex bodies
const COMPLEX_WORDS: [&str; 2] = ["housing", "assembly"];

/// Size words implying a large or primary part
const LARGE_WORDS: [&str; 2] = ["large", "main"];

/// Size words implying a small part
const SMALL_WORDS: [&str; 2] = ["small", "mini"];

/// Fallback when a vocabulary is somehow empty
const FALLBACK_NAME: &str = "Component";

/// Naming vocabulary. Each variant owns a fixed keyword set (for hint
/// matching) and a fixed ordered candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCategory {
    /// Vehicle components and body panels
    Automotive,
    /// Boards, enclosures and mounts
    Electronics,
    /// Tables, drawers and fittings
    Furniture,
    /// Structural members
    Architecture,
    /// Named machine elements (drive shafts, timing pulleys)
    MechanicalAdvanced,
    /// Bolts, nuts and pins
    Fasteners,
    /// Generic machine elements; also the fallback vocabulary
    MechanicalBasic,
}

/// Hint keyword sets in first-declared precedence order. The basic
/// mechanical vocabulary is not hint-reachable, only a fallback.
static HINT_KEYWORDS: Lazy<IndexMap<NameCategory, &'static [&'static str]>> = Lazy::new(|| {
    IndexMap::from([
        (
            NameCategory::Automotive,
            &["car", "auto", "engine", "brake", "wheel"][..],
        ),
        (
            NameCategory::Electronics,
            &["circuit", "pcb", "electronic", "connector"][..],
        ),
        (
            NameCategory::Furniture,
            &["table", "chair", "drawer", "furniture"][..],
        ),
        (
            NameCategory::Architecture,
            &["building", "beam", "column", "wall"][..],
        ),
        (
            NameCategory::MechanicalAdvanced,
            &["gear", "shaft", "bearing", "machine"][..],
        ),
        (
            NameCategory::Fasteners,
            &["bolt", "screw", "nut", "fastener"][..],
        ),
    ])
});

/// Candidate display names per vocabulary, in declared tie-break order.
static CANDIDATES: Lazy<IndexMap<NameCategory, &'static [&'static str]>> = Lazy::new(|| {
    IndexMap::from([
        (
            NameCategory::MechanicalBasic,
            &[
                "Shaft", "Gear", "Bearing", "Pulley", "Sprocket", "Coupling", "Bushing", "Washer",
                "Housing", "Cover", "Base", "Frame", "Bracket", "Mount", "Support", "Clamp",
            ][..],
        ),
        (
            NameCategory::MechanicalAdvanced,
            &[
                "Drive Shaft",
                "Input Gear",
                "Output Gear",
                "Bearing Race",
                "Timing Pulley",
                "Chain Sprocket",
                "Flexible Coupling",
                "Linear Bushing",
                "Spring Washer",
                "Motor Housing",
                "Access Cover",
                "Mounting Base",
                "Main Frame",
            ][..],
        ),
        (
            NameCategory::Fasteners,
            &[
                "Hex Bolt",
                "Cap Screw",
                "Socket Head",
                "Flat Head",
                "Pan Head",
                "Button Head",
                "Hex Nut",
                "Lock Nut",
                "Wing Nut",
                "Threaded Rod",
                "Dowel Pin",
                "Spring Pin",
            ][..],
        ),
        (
            NameCategory::Automotive,
            &[
                "Engine Block",
                "Cylinder Head",
                "Piston",
                "Connecting Rod",
                "Crankshaft",
                "Brake Disc",
                "Brake Caliper",
                "Suspension Arm",
                "Control Arm",
                "Steering Knuckle",
                "Body Panel",
                "Door Frame",
                "Window Frame",
                "Bumper",
                "Fender",
                "Hood",
            ][..],
        ),
        (
            NameCategory::Electronics,
            &[
                "PCB Main",
                "PCB Control",
                "Connector Housing",
                "Terminal Block",
                "Heat Sink",
                "Enclosure",
                "Front Panel",
                "Back Panel",
                "Display Mount",
                "Button Cap",
                "LED Holder",
                "Switch Housing",
                "Cable Clamp",
                "Strain Relief",
            ][..],
        ),
        (
            NameCategory::Furniture,
            &[
                "Table Top",
                "Table Leg",
                "Drawer Front",
                "Drawer Side",
                "Drawer Back",
                "Handle",
                "Knob",
                "Hinge",
                "Shelf",
                "Side Panel",
                "Back Panel",
                "Cushion Base",
                "Armrest",
                "Headrest",
                "Caster",
                "Support Bar",
            ][..],
        ),
        (
            NameCategory::Architecture,
            &[
                "Main Beam",
                "Support Beam",
                "Column",
                "Wall Panel",
                "Floor Slab",
                "Roof Beam",
                "Rafter",
                "Joist",
                "Stud",
                "Header",
                "Sill Plate",
                "Foundation",
                "Footing",
                "Window Frame",
                "Door Frame",
            ][..],
        ),
    ])
});

impl NameCategory {
    /// Ordered candidate list for this vocabulary
    pub fn candidates(&self) -> &'static [&'static str] {
        CANDIDATES.get(self).copied().unwrap_or(&[])
    }

    /// Resolve a free-text hint to a vocabulary by lower-cased substring
    /// match. The first keyword set containing a match wins.
    pub fn from_hint(hint: &str) -> Option<Self> {
        let hint_lower = hint.to_lowercase();
        if hint_lower.trim().is_empty() {
            return None;
        }
        for (&category, keywords) in HINT_KEYWORDS.iter() {
            if keywords.iter().any(|word| hint_lower.contains(word)) {
                return Some(category);
            }
        }
        None
    }

    /// Basic vocabulary for a design context. Only the mechanical vocabulary
    /// has a basic tier, so every other context falls back to it.
    pub fn basic_for(_context: DesignContext) -> Self {
        Self::MechanicalBasic
    }

    /// Resolve the vocabulary for a batch: hint first, context fallback
    pub fn resolve(context: DesignContext, hint: Option<&str>) -> Self {
        hint.and_then(Self::from_hint)
            .unwrap_or_else(|| Self::basic_for(context))
    }
}

/// Per-body naming output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Original index of the body in the input batch
    pub index: usize,

    /// Highest-scoring candidate before collision suffixing
    pub base_name: String,

    /// Final name, possibly carrying a numeric collision suffix
    pub display_name: String,
}

/// Scores candidate names against descriptors and resolves collisions.
#[derive(Debug, Clone)]
pub struct NameSelector {
    config: ScoringConfig,
}

impl NameSelector {
    /// Create a selector with the given weights
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score one candidate name against one body's descriptors
    pub fn score_candidate(&self, descriptor: &BodyDescriptor, candidate: &str) -> i32 {
        let name_lower = candidate.to_lowercase();
        let mut score = 0;

        let contains_any = |words: &[&str]| words.iter().any(|w| name_lower.contains(w));

        if contains_any(&LARGE_WORDS) {
            score += if descriptor.max_dimension > self.config.large_name_threshold {
                self.config.size_match_reward
            } else {
                -self.config.size_mismatch_penalty
            };
        } else if contains_any(&SMALL_WORDS) {
            score += if descriptor.max_dimension < self.config.small_name_threshold {
                self.config.size_match_reward
            } else {
                -self.config.size_mismatch_penalty
            };
        }

        if descriptor.is_long_thin && contains_any(&LONG_THIN_WORDS) {
            score += self.config.shape_match_bonus;
        }
        if descriptor.is_cubic && contains_any(&CUBIC_WORDS) {
            score += self.config.shape_match_bonus;
        }
        if descriptor.is_flat && contains_any(&FLAT_WORDS) {
            score += self.config.shape_match_bonus;
        }
        if descriptor.complexity == Complexity::Complex && contains_any(&COMPLEX_WORDS) {
            score += self.config.complexity_match_bonus;
        }

        score
    }

    /// Pick the highest-scoring candidate, ties to the first-declared one
    pub fn select_base<'a>(
        &self,
        descriptor: &BodyDescriptor,
        candidates: &[&'a str],
    ) -> &'a str {
        let mut best = FALLBACK_NAME;
        let mut best_score = i32::MIN;
        for &candidate in candidates {
            let score = self.score_candidate(descriptor, candidate);
            if score > best_score {
                best = candidate;
                best_score = score;
            }
        }
        best
    }

    /// Name a whole batch against one vocabulary.
    ///
    /// Bodies are processed sorted by (max dimension ascending, centroid x
    /// ascending) so collision suffix numbering is deterministic and reads
    /// small-to-large; the result is permuted back to input order. Base
    /// names chosen by more than one body all receive a 1-based " N"
    /// suffix; uniquely chosen names stay bare.
    pub fn suggest(
        &self,
        descriptors: &[BodyDescriptor],
        category: NameCategory,
    ) -> Vec<Suggestion> {
        let candidates = category.candidates();
        debug!(
            category = ?category,
            bodies = descriptors.len(),
            "selecting names"
        );

        let mut order: Vec<usize> = (0..descriptors.len()).collect();
        order.sort_by(|&a, &b| {
            let da = &descriptors[a];
            let db = &descriptors[b];
            da.max_dimension
                .total_cmp(&db.max_dimension)
                .then(da.centroid[0].total_cmp(&db.centroid[0]))
        });

        let chosen: Vec<&str> = order
            .iter()
            .map(|&i| self.select_base(&descriptors[i], candidates))
            .collect();

        let mut totals: HashMap<&str, usize> = HashMap::new();
        for &name in &chosen {
            *totals.entry(name).or_insert(0) += 1;
        }

        let mut counters: HashMap<&str, usize> = HashMap::new();
        let mut suggestions: Vec<Suggestion> = Vec::with_capacity(descriptors.len());
        for (&original_index, &base) in order.iter().zip(chosen.iter()) {
            let display_name = if totals[base] > 1 {
                let counter = counters.entry(base).or_insert(0);
                *counter += 1;
                format!("{base} {counter}")
            } else {
                base.to_string()
            };
            suggestions.push(Suggestion {
                index: original_index,
                base_name: base.to_string(),
                display_name,
            });
        }

        suggestions.sort_by_key(|s| s.index);
        suggestions
    }
}
