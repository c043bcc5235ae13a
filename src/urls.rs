//! Remote URL and local file name derivation
//!
//! Templates use `{package_id}` and `{sticker_id}` placeholders. The free functions
//! use the store's default templates; [`Endpoints`] carries configurable ones so the
//! downloader can be pointed at another host.

use serde::{Deserialize, Serialize};

use crate::types::{AssetVariant, PackageId, StickerId};

/// Default template of the pack metadata document
pub const METADATA_URL_TEMPLATE: &str =
    "https://sdl-stickershop.line.naver.jp/stickershop/v1/product/{package_id}/android/productInfo.meta";

/// Default template of a static sticker image
pub const STATIC_IMAGE_URL_TEMPLATE: &str =
    "https://stickershop.line-scdn.net/stickershop/v1/sticker/{sticker_id}/android/sticker.png;compress=true";

/// Default template of an animated sticker image
pub const ANIMATED_IMAGE_URL_TEMPLATE: &str =
    "https://sdl-stickershop.line.naver.jp/products/0/0/1/{package_id}/android/animation/{sticker_id}.png";

const PACKAGE_ID: &str = "{package_id}";
const STICKER_ID: &str = "{sticker_id}";

/// URL of the pack metadata document
pub fn metadata_url(package_id: PackageId) -> String {
    fill(METADATA_URL_TEMPLATE, Some(package_id), None)
}

/// URL of the static image of a sticker
pub fn static_image_url(sticker_id: StickerId) -> String {
    fill(STATIC_IMAGE_URL_TEMPLATE, None, Some(sticker_id))
}

/// URL of the animated image of a sticker.
///
/// Callers must check the pack's `has_animation` flag first; no validation happens here.
pub fn animated_image_url(package_id: PackageId, sticker_id: StickerId) -> String {
    fill(ANIMATED_IMAGE_URL_TEMPLATE, Some(package_id), Some(sticker_id))
}

/// File name a sticker is saved under.
///
/// Always `.png`, also for animated stickers (they are APNGs). Re-runs rely on this
/// name for the skip-if-exists check.
pub fn local_file_name(sticker_id: StickerId) -> String {
    format!("{}.png", sticker_id)
}

fn fill(template: &str, package_id: Option<PackageId>, sticker_id: Option<StickerId>) -> String {
    let mut url = template.to_string();
    if let Some(id) = package_id {
        url = url.replace(PACKAGE_ID, &id.to_string());
    }
    if let Some(id) = sticker_id {
        url = url.replace(STICKER_ID, &id.to_string());
    }
    url
}

/// Remote endpoint templates
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Metadata document template (default: LINE store)
    #[serde(default = "default_metadata")]
    pub metadata: String,

    /// Static image template (default: LINE CDN)
    #[serde(default = "default_static_image")]
    pub static_image: String,

    /// Animated image template (default: LINE store)
    #[serde(default = "default_animated_image")]
    pub animated_image: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            metadata: default_metadata(),
            static_image: default_static_image(),
            animated_image: default_animated_image(),
        }
    }
}

impl Endpoints {
    /// Templates rooted at `base` with the store's path layout.
    ///
    /// Mainly useful for mirrors and local test servers.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            metadata: format!(
                "{base}/stickershop/v1/product/{PACKAGE_ID}/android/productInfo.meta"
            ),
            static_image: format!("{base}/stickershop/v1/sticker/{STICKER_ID}/android/sticker.png"),
            animated_image: format!(
                "{base}/products/0/0/1/{PACKAGE_ID}/android/animation/{STICKER_ID}.png"
            ),
        }
    }

    /// Metadata URL for a pack
    pub fn metadata_url(&self, package_id: PackageId) -> String {
        fill(&self.metadata, Some(package_id), None)
    }

    /// Static image URL for a sticker
    pub fn static_image_url(&self, sticker_id: StickerId) -> String {
        fill(&self.static_image, None, Some(sticker_id))
    }

    /// Animated image URL for a sticker
    pub fn animated_image_url(&self, package_id: PackageId, sticker_id: StickerId) -> String {
        fill(&self.animated_image, Some(package_id), Some(sticker_id))
    }

    /// URL of the chosen variant
    pub fn image_url(
        &self,
        variant: AssetVariant,
        package_id: PackageId,
        sticker_id: StickerId,
    ) -> String {
        match variant {
            AssetVariant::Static => self.static_image_url(sticker_id),
            AssetVariant::Animated => self.animated_image_url(package_id, sticker_id),
        }
    }
}

fn default_metadata() -> String {
    METADATA_URL_TEMPLATE.to_string()
}

fn default_static_image() -> String {
    STATIC_IMAGE_URL_TEMPLATE.to_string()
}

fn default_animated_image() -> String {
    ANIMATED_IMAGE_URL_TEMPLATE.to_string()
}
