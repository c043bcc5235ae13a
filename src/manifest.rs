//! Manifest generation (`info.json` and `info.txt`)
//!
//! Both manifests follow metadata order, never download completion order.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::ManifestError;
use crate::types::PackMetadata;
use crate::urls::Endpoints;

/// File name of the structured manifest
pub const STRUCTURED_MANIFEST: &str = "info.json";

/// File name of the narrative manifest
pub const NARRATIVE_MANIFEST: &str = "info.txt";

/// Write the full metadata as pretty-printed JSON
pub async fn write_structured(metadata: &PackMetadata, dest: &Path) -> Result<(), ManifestError> {
    let json = serde_json::to_vec_pretty(metadata)?;
    write_file(dest, &json).await
}

/// Write the plain-text report
pub async fn write_narrative(
    metadata: &PackMetadata,
    endpoints: &Endpoints,
    dest: &Path,
) -> Result<(), ManifestError> {
    let text = render_narrative(metadata, endpoints);
    write_file(dest, text.as_bytes()).await
}

/// Compose the plain-text report.
///
/// Lists the static URL of every sticker, and the animated URLs only when the
/// pack has animation.
pub fn render_narrative(metadata: &PackMetadata, endpoints: &Endpoints) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "LINE Sticker Pack ID {} - '{}' by '{}'",
        metadata.package_id,
        metadata.localized_title(),
        metadata.localized_author(),
    );
    let _ = writeln!(
        out,
        "JSON URL: {}\n",
        endpoints.metadata_url(metadata.package_id)
    );

    let _ = writeln!(out, "{} stickers:", metadata.stickers.len());
    for sticker in &metadata.stickers {
        let _ = writeln!(out, "{}", endpoints.static_image_url(sticker.id));
    }

    if metadata.has_animation {
        out.push_str("\nAnimated stickers:\n");
        for sticker in &metadata.stickers {
            let _ = writeln!(
                out,
                "{}",
                endpoints.animated_image_url(metadata.package_id, sticker.id)
            );
        }
    }

    out
}

async fn write_file(dest: &Path, contents: &[u8]) -> Result<(), ManifestError> {
    tokio::fs::write(dest, contents)
        .await
        .map_err(|source| ManifestError::Io {
            path: dest.to_path_buf(),
            source,
        })
}
