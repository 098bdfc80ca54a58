//! Immutable tag-translation store for tagtrans
//!
//! Parses the remote dataset document (a JSON object with a `data` array of
//! namespace records and a `head.committer.when` version marker) into an
//! in-memory namespace → tag → display-text mapping and serves infallible
//! lookups.
//!
//! # Example
//!
//! ```rust
//! use tagtrans_store::TranslationStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r#"{
//!     "data": [
//!         { "namespace": "language", "data": { "japanese": { "name": "日本語" } } }
//!     ],
//!     "head": { "committer": { "when": "2023-06-01T00:00:00Z" } }
//! }"#;
//!
//! let store = TranslationStore::from_json(json)?;
//! assert_eq!(store.lookup("language", "japanese"), "日本語");
//! assert_eq!(store.lookup("language", "klingon"), "klingon");
//! assert_eq!(store.version(), "2023-06-01T00:00:00Z");
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod namespaces;
pub mod store;

pub use document::{Committer, Document, Head, NamespaceRecord, TagEntry};
pub use error::{StoreError, StoreResult};
pub use namespaces::*;
pub use store::{TranslationStore, UNKNOWN_VERSION};
