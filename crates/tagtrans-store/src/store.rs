//! Immutable translation store built from a dataset document

use crate::document::Document;
use crate::error::{StoreError, StoreResult};
use std::collections::HashMap;
use tracing::debug;

/// Version string reported when no dataset has ever been loaded
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Immutable snapshot of the namespace → tag → display-text mapping
/// plus the dataset version marker.
///
/// Constructed in one pass from a dataset document and never mutated
/// afterwards; a newer dataset replaces the whole store.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    /// Dataset version, taken from `head.committer.when`
    version: String,
    /// namespace → (tag → display text)
    translations: HashMap<String, HashMap<String, String>>,
}

impl TranslationStore {
    /// Parse a dataset document from its JSON text.
    ///
    /// Fails if the required `data` array or `head.committer.when` field
    /// is absent or malformed; the caller's prior state is untouched.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let document: Document = serde_json::from_str(json).map_err(StoreError::from)?;
        Ok(Self::from_document(document))
    }

    /// Build a store from an already-deserialized document
    pub fn from_document(document: Document) -> Self {
        let mut translations: HashMap<String, HashMap<String, String>> = HashMap::new();

        for record in document.data {
            // A namespace may appear in more than one record; merge them
            let entries = translations.entry(record.namespace).or_default();
            for (tag, entry) in record.data {
                entries.insert(tag, strip_emoji(&entry.name));
            }
        }

        let version = document.head.committer.when;
        debug!(
            version = %version,
            namespaces = translations.len(),
            "Built translation store"
        );

        Self {
            version,
            translations,
        }
    }

    /// Look up the display text for a tag.
    ///
    /// Returns the tag itself when the namespace or the tag is unknown;
    /// never fails for any input.
    pub fn lookup<'a>(&'a self, namespace: &str, tag: &'a str) -> &'a str {
        self.translations
            .get(namespace)
            .and_then(|entries| entries.get(tag))
            .map_or(tag, String::as_str)
    }

    /// The dataset version marker.
    ///
    /// A timestamp string compared lexicographically by the updater; lexical
    /// order matching chronological order relies on the producing format
    /// being fixed-width and zero-padded.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of namespaces in the store
    pub fn namespace_count(&self) -> usize {
        self.translations.len()
    }

    /// Total number of tag entries across all namespaces
    pub fn entry_count(&self) -> usize {
        self.translations.values().map(HashMap::len).sum()
    }

    /// True when the store holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

/// Strip emoji code points (U+1F300–U+1F64F and U+1F680–U+1F6FF) from
/// display text. Same ranges the upstream dataset tooling decorates
/// names with.
fn strip_emoji(text: &str) -> String {
    if text
        .chars()
        .any(|c| matches!(c, '\u{1F300}'..='\u{1F64F}' | '\u{1F680}'..='\u{1F6FF}'))
    {
        text.chars()
            .filter(|c| !matches!(c, '\u{1F300}'..='\u{1F64F}' | '\u{1F680}'..='\u{1F6FF}'))
            .collect()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> TranslationStore {
        let json = r#"{
            "data": [
                {
                    "namespace": "artist",
                    "data": {
                        "alpha": { "name": "translated alpha" },
                        "beta": { "name": "translated beta" }
                    }
                },
                {
                    "namespace": "language",
                    "data": {
                        "japanese": { "name": "日本語" }
                    }
                }
            ],
            "head": { "committer": { "when": "2023-06-01T12:00:00Z" } }
        }"#;
        TranslationStore::from_json(json).unwrap()
    }

    #[test]
    fn test_lookup_known_tag() {
        let store = sample_store();
        assert_eq!(store.lookup("artist", "alpha"), "translated alpha");
        assert_eq!(store.lookup("language", "japanese"), "日本語");
    }

    #[test]
    fn test_lookup_unknown_tag_returns_input() {
        let store = sample_store();
        assert_eq!(store.lookup("artist", "gamma"), "gamma");
    }

    #[test]
    fn test_lookup_unknown_namespace_returns_input() {
        let store = sample_store();
        assert_eq!(store.lookup("parody", "alpha"), "alpha");
    }

    #[test]
    fn test_version() {
        let store = sample_store();
        assert_eq!(store.version(), "2023-06-01T12:00:00Z");
    }

    #[test]
    fn test_counts() {
        let store = sample_store();
        assert_eq!(store.namespace_count(), 2);
        assert_eq!(store.entry_count(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_duplicate_namespace_records_merge() {
        let json = r#"{
            "data": [
                { "namespace": "misc", "data": { "a": { "name": "first" } } },
                { "namespace": "misc", "data": { "b": { "name": "second" }, "a": { "name": "override" } } }
            ],
            "head": { "committer": { "when": "2023-01-01T00:00:00Z" } }
        }"#;
        let store = TranslationStore::from_json(json).unwrap();
        assert_eq!(store.namespace_count(), 1);
        assert_eq!(store.lookup("misc", "a"), "override");
        assert_eq!(store.lookup("misc", "b"), "second");
    }

    #[test]
    fn test_emoji_stripped_from_names() {
        let json = r#"{
            "data": [
                { "namespace": "misc", "data": { "rocket": { "name": "launch 🚀 now" } } }
            ],
            "head": { "committer": { "when": "2023-01-01T00:00:00Z" } }
        }"#;
        let store = TranslationStore::from_json(json).unwrap();
        assert_eq!(store.lookup("misc", "rocket"), "launch  now");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = TranslationStore::from_json("{ not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_version_is_parse_error() {
        let json = r#"{ "data": [], "head": { "committer": {} } }"#;
        assert!(TranslationStore::from_json(json).is_err());
    }

    #[test]
    fn test_strip_emoji_leaves_plain_text_alone() {
        assert_eq!(strip_emoji("plain text"), "plain text");
        assert_eq!(strip_emoji("日本語"), "日本語");
    }

    #[test]
    fn test_strip_emoji_removes_both_ranges() {
        assert_eq!(strip_emoji("a\u{1F300}b\u{1F64F}c\u{1F6FF}d"), "abcd");
    }
}
