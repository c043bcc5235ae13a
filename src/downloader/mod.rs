//! Pack download orchestration split into focused submodules.
//!
//! The `PackDownloader` struct and its methods are organized by phase:
//! - [`metadata`] - Metadata resolution (blocking first phase)
//! - [`tasks`] - Save directory setup and the per-sticker fan-out
//!
//! Manifest writing and the end-to-end [`PackDownloader::run`] live here.

mod metadata;
mod tasks;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::AssetFetcher;
use crate::manifest::{self, NARRATIVE_MANIFEST, STRUCTURED_MANIFEST};
use crate::types::{Event, PackMetadata, PackageId};

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Main downloader instance (cloneable - all fields are cheap to share)
#[derive(Clone)]
pub struct PackDownloader {
    /// Configuration (wrapped in Arc for sharing across tasks)
    pub(crate) config: Arc<Config>,
    /// HTTP client used for metadata and every sticker
    pub(crate) fetcher: AssetFetcher,
    /// Event broadcast channel sender (multiple subscribers supported)
    pub(crate) event_tx: broadcast::Sender<Event>,
}

impl PackDownloader {
    /// Create a downloader, validating the configuration and building the HTTP client
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let fetcher = AssetFetcher::new(&config.http)?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Create a downloader around an existing fetcher
    pub fn with_fetcher(config: Config, fetcher: AssetFetcher) -> Self {
        let (event_tx, _rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            config: Arc::new(config),
            fetcher,
            event_tx,
        }
    }

    /// Subscribe to pipeline events.
    ///
    /// Events only report what happened; nothing in the pipeline waits for them.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.event_tx.subscribe()
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the whole pipeline for one pack and return its save directory.
    ///
    /// Resolves metadata, downloads every sticker, then writes both manifests.
    /// Only metadata, directory and manifest failures are errors; a run where
    /// every sticker failed still completes.
    pub async fn run(&self, package_id: PackageId) -> Result<PathBuf> {
        let metadata = self.resolve_metadata(package_id).await?;
        let options = &self.config.download;

        self.download_all(&metadata, options).await?;

        let save_dir = options.save_dir(metadata.package_id);
        self.write_manifests(&metadata, &save_dir).await?;

        tracing::info!(package_id = %metadata.package_id, save_dir = %save_dir.display(), "DONE!");
        self.emit(Event::Complete {
            package_id: metadata.package_id,
            save_dir: save_dir.clone(),
        });

        Ok(save_dir)
    }

    /// Write `info.json` and `info.txt` into `save_dir`
    pub async fn write_manifests(&self, metadata: &PackMetadata, save_dir: &Path) -> Result<()> {
        tracing::info!("Writing json file...");
        let json_path = save_dir.join(STRUCTURED_MANIFEST);
        manifest::write_structured(metadata, &json_path).await?;
        self.emit(Event::ManifestWritten { path: json_path });

        tracing::info!("Writing info file...");
        let txt_path = save_dir.join(NARRATIVE_MANIFEST);
        manifest::write_narrative(metadata, &self.config.endpoints, &txt_path).await?;
        self.emit(Event::ManifestWritten { path: txt_path });

        Ok(())
    }

    pub(crate) fn emit(&self, event: Event) {
        // No subscribers is fine
        self.event_tx.send(event).ok();
    }
}
