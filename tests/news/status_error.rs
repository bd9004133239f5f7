use std::time::Duration;

use guardian_feed::{FeedClient, FeedError, NewsBuilder};
use httpmock::Method::GET;
use url::Url;

use crate::common::{builder_for, mock_search, setup_server};

#[tokio::test]
async fn search_returns_status_error_on_non_200() {
    let server = setup_server();
    let mock = mock_search(&server, "apple", 500, "oops");

    let err = builder_for(&server, "apple").fetch().await.unwrap_err();
    mock.assert();
    assert!(!err.is_network(), "a status error is not a connectivity failure");

    match err {
        FeedError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/search"));
            assert!(!url.contains("api-key"), "key leaked into error: {url}");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_ok_success_code_is_still_an_error() {
    let server = setup_server();
    let _mock = mock_search(&server, "apple", 204, "");

    let err = builder_for(&server, "apple").fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::Status { status: 204, .. }));
}

#[tokio::test]
async fn repeated_failures_are_empty_every_time() {
    let server = setup_server();
    let mock = mock_search(&server, "apple", 401, r#"{"message":"Unauthorized"}"#);
    let builder = builder_for(&server, "apple");

    for _ in 0..3 {
        assert!(builder.fetch_or_empty().await.is_empty());
    }
    mock.assert_calls(3);
}

#[tokio::test]
async fn malformed_body_is_payload_error_or_empty() {
    let server = setup_server();
    let _mock = mock_search(&server, "apple", 200, "<html>maintenance</html>");
    let builder = builder_for(&server, "apple");

    let err = builder.fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::MalformedPayload(_)));
    assert!(!err.is_network());
    assert!(builder.fetch_or_empty().await.is_empty());
}

#[tokio::test]
async fn missing_results_is_payload_error() {
    let server = setup_server();
    let _mock = mock_search(&server, "apple", 200, r#"{"response":{"status":"ok"}}"#);

    let err = builder_for(&server, "apple").fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::MalformedPayload(_)));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .delay(Duration::from_secs(2))
            .body(r#"{"response":{"results":[]}}"#);
    });

    let client = FeedClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let builder = NewsBuilder::new(&client);

    let err = builder.fetch().await.unwrap_err();
    assert!(err.is_network(), "expected timeout, got {err:?}");
    assert!(builder.fetch_or_empty().await.is_empty());
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    // Port 9 (discard) is closed on loopback in test environments.
    let client = FeedClient::builder()
        .base_url(Url::parse("http://127.0.0.1:9/").unwrap())
        .connect_timeout(Duration::from_millis(500))
        .build()
        .unwrap();
    let builder = NewsBuilder::new(&client);

    let err = builder.fetch_raw().await.unwrap_err();
    assert!(matches!(err, FeedError::Http(_)));
    assert!(err.is_network(), "expected connect failure, got {err:?}");
    assert!(builder.fetch_or_empty().await.is_empty());
}
