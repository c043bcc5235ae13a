//! Configuration types for line-sticker-dl

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use crate::urls::Endpoints;
use crate::types::PackageId;

/// Per-run download behavior
///
/// Supplied by the command line layer and passed explicitly through the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadOptions {
    /// Root directory packs are saved under (default: "output")
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Always download static PNGs, even for animated packs
    #[serde(default)]
    pub prefer_static: bool,

    /// Re-download stickers whose file already exists
    #[serde(default)]
    pub overwrite_existing: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            prefer_static: false,
            overwrite_existing: false,
        }
    }
}

impl DownloadOptions {
    /// Save directory of a pack: `{output_root}/LINE_{package_id}`
    pub fn save_dir(&self, package_id: PackageId) -> PathBuf {
        pack_dir(&self.output_root, package_id)
    }
}

/// Save directory of a pack below `output_root`
pub fn pack_dir(output_root: &Path, package_id: PackageId) -> PathBuf {
    output_root.join(format!("LINE_{}", package_id))
}

/// HTTP client settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout (None = wait indefinitely)
    ///
    /// Without a timeout a hung request stalls its sticker task and the final join.
    #[serde(default, with = "optional_duration_serde")]
    pub timeout: Option<Duration>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

/// Main configuration for PackDownloader
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Download behavior (output root, variant preference, overwrite)
    #[serde(flatten)]
    pub download: DownloadOptions,

    /// Remote endpoint templates
    #[serde(default)]
    pub endpoints: Endpoints,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Check the settings that can be wrong before any request is made
    pub fn validate(&self) -> crate::Result<()> {
        if self.download.output_root.as_os_str().is_empty() {
            return Err(crate::Error::Config {
                message: "output root must not be empty".to_string(),
                key: Some("output_root".to_string()),
            });
        }

        let templates = [
            ("endpoints.metadata", &self.endpoints.metadata, "{package_id}"),
            ("endpoints.static_image", &self.endpoints.static_image, "{sticker_id}"),
            ("endpoints.animated_image", &self.endpoints.animated_image, "{sticker_id}"),
        ];
        for (key, template, placeholder) in templates {
            if !template.contains(placeholder) {
                return Err(crate::Error::Config {
                    message: format!("URL template must contain {placeholder}: {template}"),
                    key: Some(key.to_string()),
                });
            }
        }

        if self.http.timeout == Some(Duration::ZERO) {
            return Err(crate::Error::Config {
                message: "timeout must be greater than zero".to_string(),
                key: Some("http.timeout".to_string()),
            });
        }

        Ok(())
    }
}

fn default_output_root() -> PathBuf {
    PathBuf::from("output")
}

fn default_user_agent() -> String {
    format!("line-sticker-dl/{}", env!("CARGO_PKG_VERSION"))
}

mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
