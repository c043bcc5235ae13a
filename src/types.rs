//! Core types for line-sticker-dl
//!
//! The metadata model mirrors the JSON document served by the sticker shop
//! (`productInfo.meta`). Field names are kept in the remote camelCase form so the
//! structured manifest can be written back with the same shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::urls;

/// Locale tried first when picking a title or author
pub const PRIMARY_LOCALE: &str = "en";

/// Locale used when the primary one is missing or empty
pub const FALLBACK_LOCALE: &str = "ja";

/// Numeric identifier of a sticker pack in the store
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub u64);

impl PackageId {
    /// Create a new PackageId
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner u64 value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PackageId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PackageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Numeric identifier of a sticker, unique within its pack but not contiguous
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StickerId(pub u64);

impl From<u64> for StickerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StickerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locale code to string mapping (`{"en": "...", "ja": "..."}`)
///
/// Unknown locales are kept so they survive into `info.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(pub BTreeMap<String, String>);

impl LocalizedText {
    /// Value stored for `locale`, if any
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// First non-empty value among the primary and fallback locale.
    ///
    /// Returns an empty string when neither has content.
    pub fn localized(&self) -> &str {
        [PRIMARY_LOCALE, FALLBACK_LOCALE]
            .into_iter()
            .filter_map(|locale| self.get(locale))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }
}

impl<K, V> FromIterator<(K, V)> for LocalizedText
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Price of the pack in one country
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the local currency
    #[serde(default)]
    pub price: f64,
    /// Currency symbol (e.g. "$")
    #[serde(default)]
    pub symbol: String,
    /// ISO currency code (e.g. "USD")
    #[serde(default)]
    pub currency: String,
    /// Country code (e.g. "US")
    #[serde(default)]
    pub country: String,
}

/// A single sticker in a pack
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    /// Sticker ID assigned by the store
    pub id: StickerId,
    /// Height in pixels (informational)
    #[serde(default)]
    pub height: u32,
    /// Width in pixels (informational)
    #[serde(default)]
    pub width: u32,
}

impl Sticker {
    /// URL of the static PNG
    pub fn download_url(&self) -> String {
        urls::static_image_url(self.id)
    }

    /// URL of the animated PNG. Only meaningful when the pack has animation.
    pub fn animated_download_url(&self, package_id: PackageId) -> String {
        urls::animated_image_url(package_id, self.id)
    }

    /// Local file name, always `{id}.png` (animated stickers are APNGs)
    pub fn file_name(&self) -> String {
        urls::local_file_name(self.id)
    }
}

/// Metadata of a sticker pack as served by the store
///
/// Built once per run and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackMetadata {
    /// Pack ID
    pub package_id: PackageId,
    /// Whether the pack is currently sold
    #[serde(default)]
    pub on_sale: bool,
    /// Validity period in days (0 = unlimited)
    #[serde(default)]
    pub valid_days: i64,
    /// Every sticker in the pack has an animated variant
    #[serde(default)]
    pub has_animation: bool,
    /// The pack ships sound clips
    #[serde(default)]
    pub has_sound: bool,
    /// Localized pack title
    #[serde(default)]
    pub title: LocalizedText,
    /// Localized author name
    #[serde(default)]
    pub author: LocalizedText,
    /// Per-country pricing
    #[serde(default)]
    pub price: Vec<Price>,
    /// Stickers in store order. Empty for unknown or asset-less packs.
    #[serde(default)]
    pub stickers: Vec<Sticker>,
}

impl PackMetadata {
    /// Title in the preferred locale, or an empty string
    pub fn localized_title(&self) -> &str {
        self.title.localized()
    }

    /// Author in the preferred locale, or an empty string
    pub fn localized_author(&self) -> &str {
        self.author.localized()
    }
}

/// Which remote rendition of a sticker is fetched
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetVariant {
    /// Static PNG, always available
    Static,
    /// Animated PNG, only for packs with animation
    Animated,
}

impl AssetVariant {
    /// Animated iff the pack has animation and static was not requested
    pub fn select(has_animation: bool, prefer_static: bool) -> Self {
        if has_animation && !prefer_static {
            AssetVariant::Animated
        } else {
            AssetVariant::Static
        }
    }
}

/// Why a sticker was not downloaded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The destination file exists and overwriting is disabled
    AlreadyExists,
}

/// Why a sticker download failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The destination file could not be created
    Create,
    /// Transport-level failure
    Network,
    /// Non-200 response
    Status(u16),
    /// Copying the body to disk failed
    Write,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Create => write!(f, "create error"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Status(status) => write!(f, "status error ({status})"),
            FailureKind::Write => write!(f, "write error"),
        }
    }
}

/// Result of one sticker task. Logged and broadcast, never aggregated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DownloadOutcome {
    /// The asset was written to disk
    Saved {
        /// Number of bytes written
        bytes: u64,
    },
    /// No request was made
    Skipped {
        /// Why the sticker was skipped
        reason: SkipReason,
    },
    /// The task gave up on this sticker
    Failed {
        /// Failure classification
        reason: FailureKind,
    },
}

/// Event emitted while a pack is processed
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Metadata was fetched and decoded
    MetadataResolved {
        /// Pack ID
        package_id: PackageId,
        /// Localized title
        title: String,
        /// Localized author
        author: String,
        /// Number of stickers in the pack
        sticker_count: usize,
    },

    /// One sticker task finished
    StickerFinished {
        /// Pack ID
        package_id: PackageId,
        /// Sticker ID
        sticker_id: StickerId,
        /// What happened
        outcome: DownloadOutcome,
    },

    /// A manifest file was written
    ManifestWritten {
        /// Manifest path
        path: PathBuf,
    },

    /// The whole pipeline finished
    Complete {
        /// Pack ID
        package_id: PackageId,
        /// Save directory of the pack
        save_dir: PathBuf,
    },
}
