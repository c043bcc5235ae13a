//! Mock sticker store serving one pack

use line_sticker_dl::{Config, DownloadOptions, Endpoints, PackageId};
use serde_json::json;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A pack served by [`start_store`]
pub struct StorePack {
    pub package_id: PackageId,
    pub sticker_ids: Vec<u64>,
    pub has_animation: bool,
}

/// PNG signature followed by a marker, enough to tell variants apart
pub fn png_body(variant: &str, sticker_id: u64) -> Vec<u8> {
    let mut body = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    body.extend_from_slice(format!("{variant}-{sticker_id}").as_bytes());
    body
}

/// Start a mock store serving metadata plus both variants of every sticker
pub async fn start_store(pack: &StorePack) -> MockServer {
    let server = MockServer::start().await;

    let stickers: Vec<_> = pack
        .sticker_ids
        .iter()
        .map(|id| json!({"id": id, "height": 160, "width": 180}))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!(
            "/stickershop/v1/product/{}/android/productInfo.meta",
            pack.package_id
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "packageId": pack.package_id.get(),
            "onSale": false,
            "validDays": 180,
            "hasAnimation": pack.has_animation,
            "title": {"en": "", "ja": "しろくま"},
            "author": {"ja": "作者", "ko": "작가"},
            "price": [],
            "stickers": stickers,
        })))
        .mount(&server)
        .await;

    for &id in &pack.sticker_ids {
        Mock::given(method("GET"))
            .and(path(format!("/stickershop/v1/sticker/{id}/android/sticker.png")))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(png_body("static", id)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!(
                "/products/0/0/1/{}/android/animation/{id}.png",
                pack.package_id
            )))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(png_body("animated", id)))
            .mount(&server)
            .await;
    }

    server
}

/// Config pointing at `server`, saving below `output_root`
pub fn store_config(server: &MockServer, output_root: &Path) -> Config {
    Config {
        download: DownloadOptions {
            output_root: output_root.to_path_buf(),
            ..Default::default()
        },
        endpoints: Endpoints::with_base(&server.uri()),
        ..Default::default()
    }
}

/// Number of requests the server received whose path starts with `prefix`
pub async fn requests_under(server: &MockServer, prefix: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path().starts_with(prefix))
        .count()
}
