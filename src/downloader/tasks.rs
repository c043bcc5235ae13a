//! Sticker fan-out — one independent task per sticker, joined before returning.
//!
//! Tasks share nothing mutable. Each one turns every error into a
//! [`DownloadOutcome`] that is logged and broadcast, so a failing sticker can never
//! abort its siblings or the run.

use std::path::PathBuf;

use futures::future::join_all;
use tokio::sync::broadcast;

use crate::config::DownloadOptions;
use crate::error::{Error, Result};
use crate::fetcher::AssetFetcher;
use crate::types::{
    AssetVariant, DownloadOutcome, Event, FailureKind, PackMetadata, PackageId, SkipReason,
    StickerId,
};

use super::PackDownloader;

/// Everything one sticker task needs, owned
#[derive(Debug, Clone)]
struct StickerJob {
    package_id: PackageId,
    sticker_id: StickerId,
    variant: AssetVariant,
    url: String,
    dest: PathBuf,
    overwrite_existing: bool,
}

impl PackDownloader {
    /// Download every sticker of `metadata` into the pack's save directory.
    ///
    /// The directory is created first; failing that is the only error. Per-sticker
    /// results are reported through logs and [`Event::StickerFinished`] only.
    /// Returns once every task has finished.
    pub async fn download_all(
        &self,
        metadata: &PackMetadata,
        options: &DownloadOptions,
    ) -> Result<()> {
        let save_dir = options.save_dir(metadata.package_id);
        tokio::fs::create_dir_all(&save_dir)
            .await
            .map_err(|source| {
                tracing::error!(path = %save_dir.display(), error = %source, "Could not create directory");
                Error::Directory {
                    path: save_dir.clone(),
                    source,
                }
            })?;

        let variant = AssetVariant::select(metadata.has_animation, options.prefer_static);
        tracing::info!(
            package_id = %metadata.package_id,
            ?variant,
            "=> Downloading {} stickers...",
            metadata.stickers.len()
        );

        let handles: Vec<_> = metadata
            .stickers
            .iter()
            .map(|sticker| {
                let job = StickerJob {
                    package_id: metadata.package_id,
                    sticker_id: sticker.id,
                    variant,
                    url: self
                        .config
                        .endpoints
                        .image_url(variant, metadata.package_id, sticker.id),
                    dest: save_dir.join(sticker.file_name()),
                    overwrite_existing: options.overwrite_existing,
                };
                let fetcher = self.fetcher.clone();
                let event_tx = self.event_tx.clone();

                tokio::spawn(async move {
                    let outcome = fetch_sticker(&fetcher, &job).await;
                    record_outcome(&event_tx, &job, outcome);
                })
            })
            .collect();

        for result in join_all(handles).await {
            if let Err(e) = result {
                tracing::error!(package_id = %metadata.package_id, error = %e, "Sticker task panicked");
            }
        }

        Ok(())
    }
}

/// Run one sticker: skip check, fetch, save.
///
/// The skip check runs before any request so re-runs make no network calls for
/// stickers already on disk.
async fn fetch_sticker(fetcher: &AssetFetcher, job: &StickerJob) -> DownloadOutcome {
    if !job.overwrite_existing && matches!(tokio::fs::try_exists(&job.dest).await, Ok(true)) {
        return DownloadOutcome::Skipped {
            reason: SkipReason::AlreadyExists,
        };
    }

    let stream = match fetcher.fetch(&job.url).await {
        Ok(stream) => stream,
        Err(e) => {
            tracing::warn!(sticker_id = %job.sticker_id, error = %e, "Could not download sticker");
            return DownloadOutcome::Failed {
                reason: FailureKind::from(&e),
            };
        }
    };

    match stream.save_to(&job.dest).await {
        Ok(bytes) => DownloadOutcome::Saved { bytes },
        Err(e) => {
            tracing::warn!(sticker_id = %job.sticker_id, error = %e, "Could not save sticker");
            DownloadOutcome::Failed {
                reason: FailureKind::from(&e),
            }
        }
    }
}

fn record_outcome(event_tx: &broadcast::Sender<Event>, job: &StickerJob, outcome: DownloadOutcome) {
    match outcome {
        DownloadOutcome::Saved { bytes } => {
            tracing::debug!(
                package_id = %job.package_id,
                sticker_id = %job.sticker_id,
                variant = ?job.variant,
                bytes,
                "Sticker saved"
            );
        }
        DownloadOutcome::Skipped { .. } => {
            tracing::info!(
                sticker_id = %job.sticker_id,
                "=> Skipping {} (already exists)",
                job.dest.display()
            );
        }
        DownloadOutcome::Failed { reason } => {
            tracing::warn!(
                package_id = %job.package_id,
                sticker_id = %job.sticker_id,
                url = %job.url,
                %reason,
                "Sticker failed"
            );
        }
    }

    event_tx
        .send(Event::StickerFinished {
            package_id: job.package_id,
            sticker_id: job.sticker_id,
            outcome,
        })
        .ok();
}
