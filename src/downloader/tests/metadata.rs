use super::*;

#[tokio::test]
async fn test_resolve_metadata_decodes_pack() {
    let mock_server = MockServer::start().await;
    mount_metadata(&mock_server, metadata_json(TEST_PACK, &[10, 20, 30], true)).await;
    let (downloader, _temp_dir) = create_test_downloader(&mock_server);

    let metadata = downloader.resolve_metadata(TEST_PACK).await.unwrap();

    assert_eq!(metadata.package_id, TEST_PACK);
    assert!(metadata.has_animation);
    assert_eq!(metadata.localized_title(), "Test Pack");
    assert_eq!(metadata.localized_author(), "Test Author");
    let ids: Vec<u64> = metadata.stickers.iter().map(|s| s.id.0).collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[tokio::test]
async fn test_resolve_metadata_emits_event() {
    let mock_server = MockServer::start().await;
    mount_metadata(&mock_server, metadata_json(TEST_PACK, &[1, 2], false)).await;
    let (downloader, _temp_dir) = create_test_downloader(&mock_server);
    let mut events = downloader.subscribe();

    downloader.resolve_metadata(TEST_PACK).await.unwrap();

    match events.try_recv().unwrap() {
        Event::MetadataResolved {
            package_id,
            title,
            author,
            sticker_count,
        } => {
            assert_eq!(package_id, TEST_PACK);
            assert_eq!(title, "Test Pack");
            assert_eq!(author, "Test Author");
            assert_eq!(sticker_count, 2);
        }
        other => panic!("Expected MetadataResolved, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_metadata_http_404() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    let (downloader, _temp_dir) = create_test_downloader(&mock_server);

    let result = downloader.resolve_metadata(PackageId(999_999_999)).await;

    match result {
        Err(Error::Metadata(MetadataError::NotFound { status })) => assert_eq!(status, 404),
        other => panic!("Expected NotFound for HTTP 404, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_metadata_malformed_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;
    let (downloader, _temp_dir) = create_test_downloader(&mock_server);

    let result = downloader.resolve_metadata(TEST_PACK).await;

    assert!(matches!(
        result,
        Err(Error::Metadata(MetadataError::Decode(_)))
    ));
}

#[tokio::test]
async fn test_resolve_metadata_unreachable_host() {
    let mock_server = MockServer::start().await;
    let (downloader, _temp_dir) = create_test_downloader(&mock_server);
    drop(mock_server);

    let result = downloader.resolve_metadata(TEST_PACK).await;

    assert!(matches!(
        result,
        Err(Error::Metadata(MetadataError::Request { .. }))
    ));
}

#[tokio::test]
async fn test_resolve_metadata_empty_pack_is_not_an_error() {
    let mock_server = MockServer::start().await;
    mount_metadata(&mock_server, metadata_json(TEST_PACK, &[], false)).await;
    let (downloader, _temp_dir) = create_test_downloader(&mock_server);

    let metadata = downloader.resolve_metadata(TEST_PACK).await.unwrap();

    assert!(metadata.stickers.is_empty());
}
