//! Serde models for the remote tag-translation dataset document

use serde::Deserialize;
use std::collections::HashMap;

/// Top-level shape of the dataset document
///
/// ```json
/// { "data": [ { "namespace": "...", "data": { "<tag>": { "name": "..." } } } ],
///   "head": { "committer": { "when": "..." } } }
/// ```
///
/// Only the fields the store needs are modeled; everything else in the
/// document is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    /// One record per namespace; a namespace may appear more than once
    pub data: Vec<NamespaceRecord>,
    /// Commit metadata carrying the dataset version
    pub head: Head,
}

/// A single namespace record and its tag entries
#[derive(Debug, Clone, Deserialize)]
pub struct NamespaceRecord {
    /// Tag category (e.g., artist, character, language)
    pub namespace: String,
    /// Tag → entry mapping for this namespace
    pub data: HashMap<String, TagEntry>,
}

/// One tag entry; only the display name is used
#[derive(Debug, Clone, Deserialize)]
pub struct TagEntry {
    /// Human-readable text for the tag
    pub name: String,
}

/// Commit header of the dataset document
#[derive(Debug, Clone, Deserialize)]
pub struct Head {
    pub committer: Committer,
}

/// Committer metadata
#[derive(Debug, Clone, Deserialize)]
pub struct Committer {
    /// Commit timestamp string; doubles as the dataset version marker
    pub when: String,
}
