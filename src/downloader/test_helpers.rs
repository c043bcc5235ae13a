//! Shared test helpers for creating PackDownloader instances against a mock store.

use crate::config::{Config, DownloadOptions, Endpoints};
use crate::downloader::PackDownloader;
use crate::types::{Event, PackMetadata, PackageId, Sticker, StickerId};
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Pack ID used by most tests
pub(crate) const TEST_PACK: PackageId = PackageId(5737);

/// Helper to create a test PackDownloader pointed at `mock_server`, saving below a tempdir.
/// Returns the downloader and the tempdir (which must be kept alive).
pub(crate) fn create_test_downloader(
    mock_server: &MockServer,
) -> (PackDownloader, tempfile::TempDir) {
    create_test_downloader_with(mock_server, |_| {})
}

/// Same as [`create_test_downloader`] with a hook to adjust download options.
pub(crate) fn create_test_downloader_with(
    mock_server: &MockServer,
    adjust: impl FnOnce(&mut DownloadOptions),
) -> (PackDownloader, tempfile::TempDir) {
    let temp_dir = tempdir().unwrap();

    let mut config = Config {
        download: DownloadOptions {
            output_root: temp_dir.path().join("output"),
            ..Default::default()
        },
        endpoints: Endpoints::with_base(&mock_server.uri()),
        ..Default::default()
    };
    adjust(&mut config.download);

    let downloader = PackDownloader::new(config).unwrap();
    (downloader, temp_dir)
}

/// Metadata document as the store serves it
pub(crate) fn metadata_json(
    package_id: PackageId,
    sticker_ids: &[u64],
    has_animation: bool,
) -> serde_json::Value {
    let stickers: Vec<_> = sticker_ids
        .iter()
        .map(|id| json!({"id": id, "height": 296, "width": 320}))
        .collect();

    json!({
        "packageId": package_id.get(),
        "onSale": true,
        "validDays": 0,
        "hasAnimation": has_animation,
        "title": {"en": "Test Pack", "ja": "テストパック"},
        "author": {"en": "Test Author"},
        "price": [{"price": 0.99, "symbol": "$", "currency": "USD", "country": "US"}],
        "stickers": stickers,
    })
}

/// In-memory metadata matching [`metadata_json`]
pub(crate) fn metadata(
    package_id: PackageId,
    sticker_ids: &[u64],
    has_animation: bool,
) -> PackMetadata {
    serde_json::from_value(metadata_json(package_id, sticker_ids, has_animation)).unwrap()
}

/// Mount the metadata endpoint of `package_id`
pub(crate) async fn mount_metadata(mock_server: &MockServer, body: serde_json::Value) {
    let package_id = body["packageId"].as_u64().unwrap();
    Mock::given(method("GET"))
        .and(path(format!(
            "/stickershop/v1/product/{package_id}/android/productInfo.meta"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Mount the static image endpoint of one sticker, expecting `hits` requests
pub(crate) async fn mount_static(mock_server: &MockServer, sticker_id: u64, hits: u64) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/stickershop/v1/sticker/{sticker_id}/android/sticker.png"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(static_bytes(sticker_id)))
        .expect(hits)
        .mount(mock_server)
        .await;
}

/// Mount the animated image endpoint of one sticker, expecting `hits` requests
pub(crate) async fn mount_animated(
    mock_server: &MockServer,
    package_id: PackageId,
    sticker_id: u64,
    hits: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/products/0/0/1/{package_id}/android/animation/{sticker_id}.png"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(animated_bytes(sticker_id)))
        .expect(hits)
        .mount(mock_server)
        .await;
}

/// Body served for a static sticker
pub(crate) fn static_bytes(sticker_id: u64) -> Vec<u8> {
    format!("\u{89}PNG static {sticker_id}").into_bytes()
}

/// Body served for an animated sticker
pub(crate) fn animated_bytes(sticker_id: u64) -> Vec<u8> {
    format!("\u{89}PNG acTL animated {sticker_id}").into_bytes()
}

/// A sticker with the given ID
pub(crate) fn sticker(id: u64) -> Sticker {
    Sticker {
        id: StickerId(id),
        height: 296,
        width: 320,
    }
}

/// Drain every event already sent to `rx`
pub(crate) fn drain_events(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
