//! Single-asset HTTP fetch and streaming save
//!
//! A fetch only checks the status line; the body stays on the connection until
//! [`AssetStream::save_to`] drains it chunk by chunk into the destination file, so
//! memory use does not depend on image size.

use std::path::Path;

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::config::HttpConfig;
use crate::error::{Error, FetchError, Result, SaveError};

/// HTTP GET client for pack metadata and sticker images (cheap to clone)
#[derive(Clone, Debug)]
pub struct AssetFetcher {
    client: reqwest::Client,
}

impl AssetFetcher {
    /// Build a fetcher from HTTP settings
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::Http)?;
        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Underlying client, shared with metadata resolution
    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Issue a GET and require status 200.
    ///
    /// No retry: any other status is a permanent failure for this asset.
    pub async fn fetch(&self, url: &str) -> std::result::Result<AssetStream, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(AssetStream { response })
    }
}

/// Body of a successful fetch, not yet read
#[derive(Debug)]
pub struct AssetStream {
    response: reqwest::Response,
}

impl AssetStream {
    /// Declared body size, when the server sent one
    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// Stream the body into `dest`, returning the number of bytes written.
    ///
    /// The file is created (or truncated) by this call. A failure part way leaves
    /// the partial file in place.
    pub async fn save_to(mut self, dest: &Path) -> std::result::Result<u64, SaveError> {
        let file = tokio::fs::File::create(dest)
            .await
            .map_err(|source| SaveError::Create {
                path: dest.to_path_buf(),
                source,
            })?;
        let mut writer = BufWriter::new(file);

        let write_error = |source: std::io::Error| SaveError::Write {
            path: dest.to_path_buf(),
            source,
        };

        let mut written = 0u64;
        while let Some(chunk) = self
            .response
            .chunk()
            .await
            .map_err(|e| write_error(std::io::Error::other(e)))?
        {
            writer.write_all(&chunk).await.map_err(write_error)?;
            written += chunk.len() as u64;
        }
        writer.flush().await.map_err(write_error)?;

        Ok(written)
    }
}
