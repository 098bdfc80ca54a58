//! Fetching the remote dataset document
//!
//! The updater talks to the network through the [`TranslationSource`] trait
//! so refresh logic can be exercised without a live server.

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tagtrans_common::{Result, TagTransError};
use tracing::debug;
use url::Url;

/// Supplies dataset documents by URL
#[async_trait]
pub trait TranslationSource: Send + Sync {
    /// Fetch the document at `url` and write its bytes to `dest`.
    ///
    /// Any transport or I/O failure surfaces as an error; the caller owns
    /// cleanup of a partially written `dest`.
    async fn fetch_to(&self, url: &Url, dest: &Path) -> Result<()>;
}

/// HTTP-backed source using a pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source with the given request timeout
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TagTransError::transport_with_source("Failed to create HTTP client", e))?;
        Ok(Self { client })
    }

    /// Create a source wrapping an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranslationSource for HttpSource {
    async fn fetch_to(&self, url: &Url, dest: &Path) -> Result<()> {
        debug!(%url, "Downloading dataset document");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TagTransError::transport_with_source("Request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TagTransError::transport_with_status(
                format!("Remote returned {status}"),
                status.as_u16(),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TagTransError::transport_with_source("Failed to read response body", e))?;

        tokio::fs::write(dest, &body).await?;
        debug!(bytes = body.len(), dest = %dest.display(), "Dataset document written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_creation() {
        assert!(HttpSource::new(30).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let source = HttpSource::new(1).unwrap();
        let url: Url = "http://127.0.0.1:1/translations.json".parse().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("translations.json.tmp");

        let err = source.fetch_to(&url, &dest).await.unwrap_err();
        assert!(err.is_transport());
    }
}
