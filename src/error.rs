//! Error types for line-sticker-dl
//!
//! Errors are split by how far they reach:
//! - [`Error`] is fatal and aborts the whole run (metadata, output directory, manifests)
//! - [`FetchError`] and [`SaveError`] stay inside a single sticker task and are only
//!   ever surfaced as a [`FailureKind`] in logs and events

use crate::types::FailureKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for line-sticker-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for line-sticker-dl
///
/// Every variant terminates the run. Per-sticker failures never reach this type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "endpoints.metadata")
        key: Option<String>,
    },

    /// Pack metadata could not be resolved
    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// The pack's save directory could not be created
    #[error("could not create directory {path}: {source}")]
    Directory {
        /// The directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A manifest could not be written
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(#[source] reqwest::Error),
}

/// Failures while resolving pack metadata
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Transport-level failure (DNS, connection, timeout)
    #[error("request to {url} failed: {source}")]
    Request {
        /// The metadata URL
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The metadata endpoint answered with something other than 200
    #[error("sticker pack not found (got HTTP code {status})")]
    NotFound {
        /// Observed HTTP status code
        status: u16,
    },

    /// The response body was not valid pack metadata
    #[error("could not decode pack metadata: {0}")]
    Decode(String),
}

/// Failures while requesting a single asset
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection, timeout)
    #[error("could not download {url}: {source}")]
    Network {
        /// The asset URL
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The asset endpoint answered with something other than 200
    #[error("status code for {url} is not 200, but {status}")]
    Status {
        /// The asset URL
        url: String,
        /// Observed HTTP status code
        status: u16,
    },
}

/// Failures while persisting a fetched asset
#[derive(Debug, Error)]
pub enum SaveError {
    /// The destination file could not be created
    #[error("could not create file {path}: {source}")]
    Create {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Copying the body failed part way; a partial file may remain on disk
    #[error("could not write to file {path}: {source}")]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Failures while writing `info.json` or `info.txt`
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Metadata could not be serialized
    #[error("could not serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The manifest file could not be written
    #[error("could not write manifest {path}: {source}")]
    Io {
        /// Manifest path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl From<&FetchError> for FailureKind {
    fn from(error: &FetchError) -> Self {
        match error {
            FetchError::Network { .. } => FailureKind::Network,
            FetchError::Status { status, .. } => FailureKind::Status(*status),
        }
    }
}

impl From<&SaveError> for FailureKind {
    fn from(error: &SaveError) -> Self {
        match error {
            SaveError::Create { .. } => FailureKind::Create,
            SaveError::Write { .. } => FailureKind::Write,
        }
    }
}
