//! Dataset updater for tagtrans
//!
//! Coordinates the fetch-parse-compare-adopt cycle for the tag-translation
//! dataset: downloads the remote document, caches it on disk, and swaps the
//! active [`TranslationStore`](tagtrans_store::TranslationStore) when the
//! downloaded version sorts newer. Concurrent refresh requests collapse
//! into one; readers are lock-free.
//!
//! # Example
//!
//! ```rust,no_run
//! use tagtrans_updater::{ConfigLoader, TranslationUpdater};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::load()?;
//! let updater = TranslationUpdater::new(config)?;
//!
//! let outcome = updater.refresh().await;
//! println!("dataset version: {} ({outcome:?})", updater.current_version());
//! println!("{}", updater.translate("language", "japanese"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod source;
pub mod updater;

pub use config::{ConfigError, ConfigLoader, DatasetConfig, UpdaterConfig};
pub use source::{HttpSource, TranslationSource};
pub use updater::{RefreshOutcome, TranslationUpdater, TMP_FILE_SUFFIX};
