//! Pack metadata resolution.

use crate::error::{MetadataError, Result};
use crate::types::{Event, PackMetadata, PackageId};

use super::PackDownloader;

impl PackDownloader {
    /// Fetch and decode the metadata of a pack.
    ///
    /// Must finish before any sticker download starts: every asset URL depends on
    /// the pack ID and the animation flag found here. Any status other than 200
    /// means the pack does not exist.
    pub async fn resolve_metadata(&self, package_id: PackageId) -> Result<PackMetadata> {
        let url = self.config.endpoints.metadata_url(package_id);
        tracing::info!(package_id = %package_id, url = %url, "Getting LINE sticker pack...");

        let request_error = |source: reqwest::Error| MetadataError::Request {
            url: url.clone(),
            source,
        };

        let response = self
            .fetcher
            .client()
            .get(&url)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::error!(package_id = %package_id, status = status.as_u16(), "Sticker pack not found");
            return Err(MetadataError::NotFound {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(request_error)?;
        let metadata: PackMetadata = serde_json::from_slice(&body)
            .map_err(|e| MetadataError::Decode(e.to_string()))?;

        if metadata.package_id != package_id {
            tracing::warn!(
                requested = %package_id,
                received = %metadata.package_id,
                "Metadata describes a different pack ID"
            );
        }

        tracing::info!(
            package_id = %metadata.package_id,
            stickers = metadata.stickers.len(),
            animated = metadata.has_animation,
            "=> Found pack '{}' by '{}'!",
            metadata.localized_title(),
            metadata.localized_author()
        );

        self.emit(Event::MetadataResolved {
            package_id: metadata.package_id,
            title: metadata.localized_title().to_string(),
            author: metadata.localized_author().to_string(),
            sticker_count: metadata.stickers.len(),
        });

        Ok(metadata)
    }
}
