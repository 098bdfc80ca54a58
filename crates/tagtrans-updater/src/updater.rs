//! Refresh coordination for the tag-translation dataset
//!
//! One [`TranslationUpdater`] owns the current [`TranslationStore`], the
//! on-disk cache file and the refresh lock. Readers go through an
//! [`ArcSwapOption`] and never block; a refresh builds the candidate store
//! completely before swapping it in, so readers observe either the old or
//! the new store, never a partial one.

use crate::config::{DatasetConfig, UpdaterConfig};
use crate::source::{HttpSource, TranslationSource};
use arc_swap::ArcSwapOption;
use std::path::PathBuf;
use std::sync::Arc;
use tagtrans_common::{Result, TagTransError};
use tagtrans_store::{TranslationStore, UNKNOWN_VERSION};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Suffix of the temporary download file next to the cache file
pub const TMP_FILE_SUFFIX: &str = ".tmp";

/// What a refresh attempt amounted to.
///
/// Failures are reported here rather than as errors: every transport and
/// parse problem is absorbed inside [`TranslationUpdater::refresh`], and the
/// caller only decides whether to try again later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A newer dataset was adopted and cached
    Updated { version: String },
    /// The remote dataset was not newer than the current one
    Unchanged { version: String },
    /// Another refresh already holds the lock; this call was a no-op
    InFlight,
    /// No dataset is configured; any stale store was cleared
    Unavailable,
    /// Download or parse failed; see the log for the cause
    Failed,
}

/// Coordinates fetching, caching and swapping the active translation store
pub struct TranslationUpdater {
    /// Configured dataset; `None` disables the feature
    dataset: Option<DatasetConfig>,
    /// Directory holding the cache file and its `.tmp` sibling
    data_dir: PathBuf,
    /// Where dataset documents come from
    source: Arc<dyn TranslationSource>,
    /// The active store; swapped wholesale, read lock-free
    current: ArcSwapOption<TranslationStore>,
    /// Serializes refreshes; only ever acquired with `try_lock`
    refresh_lock: Mutex<()>,
}

impl std::fmt::Debug for TranslationUpdater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationUpdater")
            .field("dataset", &self.dataset)
            .field("data_dir", &self.data_dir)
            .field("version", &self.current_version())
            .finish()
    }
}

impl TranslationUpdater {
    /// Create an updater backed by an HTTP source built from the config
    pub fn new(config: UpdaterConfig) -> Result<Self> {
        let source = Arc::new(HttpSource::new(config.timeout_secs)?);
        Ok(Self::with_source(config, source))
    }

    /// Create an updater with an explicit source (used by tests)
    pub fn with_source(config: UpdaterConfig, source: Arc<dyn TranslationSource>) -> Self {
        Self {
            dataset: config.dataset,
            data_dir: config.data_dir,
            source,
            current: ArcSwapOption::const_empty(),
            refresh_lock: Mutex::new(()),
        }
    }

    /// True iff a dataset pair is configured
    pub fn is_available(&self) -> bool {
        self.dataset.is_some()
    }

    /// The active store, if any.
    ///
    /// When no dataset is configured this also clears any stale store left
    /// over from a previous configuration.
    pub fn current(&self) -> Option<Arc<TranslationStore>> {
        if !self.is_available() {
            self.current.store(None);
            return None;
        }
        self.current.load_full()
    }

    /// Version string of the active store, for display
    pub fn current_version(&self) -> String {
        self.current()
            .map(|store| store.version().to_string())
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string())
    }

    /// Translate a tag through the active store.
    ///
    /// Returns the tag verbatim when no store is loaded or the pair is
    /// unknown; never fails.
    pub fn translate(&self, namespace: &str, tag: &str) -> String {
        match self.current() {
            Some(store) => store.lookup(namespace, tag).to_string(),
            None => tag.to_string(),
        }
    }

    /// Path of the permanent cache file for the configured dataset
    fn cache_path(&self, dataset: &DatasetConfig) -> PathBuf {
        self.data_dir.join(&dataset.file_name)
    }

    /// Path of the temporary download file
    fn tmp_path(&self, dataset: &DatasetConfig) -> PathBuf {
        self.data_dir
            .join(format!("{}{}", dataset.file_name, TMP_FILE_SUFFIX))
    }

    /// Load the cached dataset file into the current store without
    /// touching the network.
    ///
    /// No-op when a store is already loaded, no dataset is configured, or
    /// a refresh holds the lock. A corrupt cache file is deleted, same as
    /// during a refresh.
    pub async fn warm_up(&self) {
        let Some(dataset) = self.dataset.clone() else {
            self.current.store(None);
            return;
        };
        let Ok(_guard) = self.refresh_lock.try_lock() else {
            return;
        };

        self.load_cache_if_empty(&dataset).await;
    }

    /// Parse the cached file into the current store when nothing is loaded
    /// yet. Caller must hold the refresh lock.
    async fn load_cache_if_empty(&self, dataset: &DatasetConfig) {
        let cache_path = self.cache_path(dataset);
        if self.current.load().is_none() && cache_path.exists() {
            match Self::parse_file(&cache_path).await {
                Ok(store) => {
                    info!(version = store.version(), "Loaded cached dataset");
                    self.current.store(Some(Arc::new(store)));
                }
                Err(e) => {
                    warn!(error = %e, "Cached dataset unreadable, deleting it");
                    let _ = tokio::fs::remove_file(&cache_path).await;
                    self.current.store(None);
                }
            }
        }
    }

    /// Fetch the remote dataset and adopt it if it is newer.
    ///
    /// At most one refresh runs at a time; a call that finds another in
    /// flight returns [`RefreshOutcome::InFlight`] immediately, treating the
    /// in-flight refresh as its own. All transport and parse failures are
    /// absorbed here and reported through the outcome.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(dataset) = self.dataset.clone() else {
            self.current.store(None);
            debug!("No dataset configured, refresh skipped");
            return RefreshOutcome::Unavailable;
        };

        // Acquire-or-skip: losing the race counts as success-by-proxy.
        // The guard releases the lock on every return path below.
        let Ok(_guard) = self.refresh_lock.try_lock() else {
            debug!("Refresh already in flight, skipping");
            return RefreshOutcome::InFlight;
        };

        if let Err(e) = tokio::fs::create_dir_all(&self.data_dir).await {
            warn!(dir = %self.data_dir.display(), error = %e, "Cannot create data directory");
            return RefreshOutcome::Failed;
        }

        let cache_path = self.cache_path(&dataset);
        let tmp_path = self.tmp_path(&dataset);

        // Warm up from the cached file when nothing is loaded yet
        self.load_cache_if_empty(&dataset).await;

        // Download to the tmp sibling; the cache file is untouched until
        // the candidate has parsed successfully
        let _ = tokio::fs::remove_file(&tmp_path).await;
        if let Err(e) = self.source.fetch_to(&dataset.remote_url, &tmp_path).await {
            warn!(url = %dataset.remote_url, error = %e, "Dataset download failed");
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return RefreshOutcome::Failed;
        }

        let candidate = match Self::parse_file(&tmp_path).await {
            Ok(candidate) => candidate,
            Err(e) => {
                // A document the remote serves but we cannot parse also
                // invalidates whatever we cached from it earlier
                warn!(error = %e, "Downloaded dataset unparseable, purging cache");
                let _ = tokio::fs::remove_file(&cache_path).await;
                self.current.store(None);
                let _ = tokio::fs::remove_file(&tmp_path).await;
                return RefreshOutcome::Failed;
            }
        };

        // Lexicographic comparison of the version strings; the producing
        // format is fixed-width, so string order matches time order
        let adopt = match self.current.load_full() {
            None => true,
            Some(current) => candidate.version() > current.version(),
        };

        let outcome = if adopt {
            let version = candidate.version().to_string();
            self.current.store(Some(Arc::new(candidate)));
            if let Err(e) = tokio::fs::rename(&tmp_path, &cache_path).await {
                warn!(error = %e, "Failed to move dataset into cache");
            }
            info!(version = %version, "Adopted new dataset");
            RefreshOutcome::Updated { version }
        } else {
            debug!(
                candidate = candidate.version(),
                current = %self.current_version(),
                "Remote dataset is not newer, keeping current"
            );
            RefreshOutcome::Unchanged {
                version: self.current_version(),
            }
        };

        if tmp_path.exists() {
            let _ = tokio::fs::remove_file(&tmp_path).await;
        }

        outcome
    }

    /// Trigger a refresh in the background.
    ///
    /// The caller may await the handle for the outcome or drop it; the
    /// refresh itself runs to completion either way.
    pub fn spawn_refresh(self: &Arc<Self>) -> tokio::task::JoinHandle<RefreshOutcome> {
        let updater = Arc::clone(self);
        tokio::spawn(async move { updater.refresh().await })
    }

    /// Read and parse a dataset file
    async fn parse_file(path: &std::path::Path) -> Result<TranslationStore> {
        let json = tokio::fs::read_to_string(path).await?;
        TranslationStore::from_json(&json).map_err(TagTransError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;
    use url::Url;

    /// Source that always fails, for paths that must not download
    struct RefusingSource;

    #[async_trait]
    impl TranslationSource for RefusingSource {
        async fn fetch_to(&self, _url: &Url, _dest: &Path) -> Result<()> {
            Err(TagTransError::transport("refused"))
        }
    }

    fn unavailable_updater() -> TranslationUpdater {
        TranslationUpdater::with_source(UpdaterConfig::default(), Arc::new(RefusingSource))
    }

    #[test]
    fn test_unavailable_reports_unknown_version() {
        let updater = unavailable_updater();
        assert!(!updater.is_available());
        assert!(updater.current().is_none());
        assert_eq!(updater.current_version(), UNKNOWN_VERSION);
    }

    #[test]
    fn test_translate_without_store_returns_tag() {
        let updater = unavailable_updater();
        assert_eq!(updater.translate("artist", "asanagi"), "asanagi");
    }

    #[tokio::test]
    async fn test_refresh_unavailable() {
        let updater = unavailable_updater();
        assert_eq!(updater.refresh().await, RefreshOutcome::Unavailable);
    }

    #[tokio::test]
    async fn test_refresh_failed_download_leaves_state_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let config = UpdaterConfig {
            dataset: Some(DatasetConfig {
                file_name: "translations.json".to_string(),
                remote_url: "https://example.com/translations.json".parse().unwrap(),
            }),
            data_dir: dir.path().to_path_buf(),
            timeout_secs: 1,
        };
        let updater = TranslationUpdater::with_source(config, Arc::new(RefusingSource));

        assert_eq!(updater.refresh().await, RefreshOutcome::Failed);
        assert!(updater.current().is_none());
        assert!(!dir.path().join("translations.json").exists());
        assert!(!dir.path().join("translations.json.tmp").exists());
    }

    #[test]
    fn test_cache_and_tmp_paths() {
        let dataset = DatasetConfig {
            file_name: "translations.json".to_string(),
            remote_url: "https://example.com/translations.json".parse().unwrap(),
        };
        let config = UpdaterConfig {
            dataset: Some(dataset.clone()),
            data_dir: PathBuf::from("/tmp/tagtrans"),
            timeout_secs: 1,
        };
        let updater = TranslationUpdater::with_source(config, Arc::new(RefusingSource));
        assert_eq!(
            updater.cache_path(&dataset),
            PathBuf::from("/tmp/tagtrans/translations.json")
        );
        assert_eq!(
            updater.tmp_path(&dataset),
            PathBuf::from("/tmp/tagtrans/translations.json.tmp")
        );
    }
}
