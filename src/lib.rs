//! # line-sticker-dl
//!
//! Downloads every image of a LINE sticker pack, plus two manifests, into a local
//! directory.
//!
//! ## Pipeline
//!
//! 1. Resolve the pack metadata (`productInfo.meta`)
//! 2. Create `{output_root}/LINE_{package_id}` and download all stickers
//!    concurrently, one task per sticker. Existing files are skipped unless
//!    overwriting is enabled; a failing sticker never stops the others.
//! 3. Write `info.json` and `info.txt`
//!
//! ## Quick Start
//!
//! ```no_run
//! use line_sticker_dl::{Config, PackDownloader, PackageId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let downloader = PackDownloader::new(Config::default())?;
//!
//!     // Subscribe to events
//!     let mut events = downloader.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("Event: {:?}", event);
//!         }
//!     });
//!
//!     let save_dir = downloader.run(PackageId::new(5737)).await?;
//!     println!("Saved to {}", save_dir.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Pack download orchestration
pub mod downloader;
/// Error types
pub mod error;
/// Single-asset fetching
pub mod fetcher;
/// Manifest writers
pub mod manifest;
/// Metadata model and events
pub mod types;
/// URL and file name derivation
pub mod urls;

// Re-export commonly used types
pub use config::{Config, DownloadOptions, Endpoints, HttpConfig};
pub use downloader::PackDownloader;
pub use error::{Error, FetchError, ManifestError, MetadataError, Result, SaveError};
pub use fetcher::{AssetFetcher, AssetStream};
pub use types::{
    AssetVariant, DownloadOutcome, Event, FailureKind, LocalizedText, PackMetadata, PackageId,
    Price, SkipReason, Sticker, StickerId,
};
