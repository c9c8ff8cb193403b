//! Export and import of naming-rule documents.
//!
//! The document captures, per body, the original name, the derived
//! descriptor record and a placeholder category tag, under the top-level
//! keys `version`, `timestamp`, `bodies_count` and `naming_rules`. It is a
//! best-effort interchange format for reusing an analysis across sessions.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::core::descriptor::BodyDescriptor;

/// Category tag recorded until a rule is bound to a vocabulary
const AUTO_DETECTED: &str = "auto-detected";

/// Errors raised while reading or writing rule documents.
#[derive(Error, Debug)]
pub enum RulesError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be serialized or parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One exported rule: the body it was derived from plus its descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingRule {
    /// Display name the body carried when analyzed
    pub original_name: String,

    /// Derived descriptor record
    pub properties: BodyDescriptor,

    /// Category tag; currently always a placeholder
    pub suggested_category: String,
}

/// Top-level rules document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesDocument {
    /// Crate version that produced the document
    pub version: String,

    /// RFC 3339 creation time
    pub timestamp: String,

    /// Number of bodies in the analyzed batch
    pub bodies_count: usize,

    /// One rule per body
    pub naming_rules: Vec<NamingRule>,
}

impl RulesDocument {
    /// Build a document from a descriptor batch
    pub fn from_descriptors(descriptors: &[BodyDescriptor]) -> Self {
        let naming_rules = descriptors
            .iter()
            .map(|descriptor| NamingRule {
                original_name: descriptor.name.clone(),
                properties: descriptor.clone(),
                suggested_category: AUTO_DETECTED.to_string(),
            })
            .collect();

        Self {
            version: crate::VERSION.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            bodies_count: descriptors.len(),
            naming_rules,
        }
    }
}

/// Export a descriptor batch as a pretty-printed JSON rules document
pub fn export_naming_rules<P: AsRef<Path>>(
    path: P,
    descriptors: &[BodyDescriptor],
) -> Result<(), RulesError> {
    let document = RulesDocument::from_descriptors(descriptors);
    let json = serde_json::to_string_pretty(&document)?;
    fs::write(&path, json)?;
    info!(
        path = %path.as_ref().display(),
        rules = document.naming_rules.len(),
        "exported naming rules"
    );
    Ok(())
}

/// Import a rules document from a JSON file
pub fn import_naming_rules<P: AsRef<Path>>(path: P) -> Result<RulesDocument, RulesError> {
    let content = fs::read_to_string(&path)?;
    let document: RulesDocument = serde_json::from_str(&content)?;
    info!(
        path = %path.as_ref().display(),
        rules = document.naming_rules.len(),
        "imported naming rules"
    );
    Ok(document)
}
