#![allow(dead_code)]

use guardian_feed::{FeedClient, NewsBuilder};
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path, time::Duration};
use url::Url;

pub const API_KEY: &str = "unit-test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{key}.{ext}");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> FeedClient {
    FeedClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .api_key(API_KEY)
        .connect_timeout(Duration::from_secs(2))
        .read_timeout(Duration::from_secs(2))
        .build()
        .unwrap()
}

pub fn builder_for(server: &MockServer, term: &str) -> NewsBuilder {
    NewsBuilder::new(&client_for(server)).term(term)
}

/// Mocks `GET /search` for `term` with the full expected query string.
pub fn mock_search<'a>(server: &'a MockServer, term: &str, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("order-by", "newest")
            .query_param("show-references", "author")
            .query_param("show-tags", "contributor")
            .query_param("q", term)
            .query_param("api-key", API_KEY);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("GF_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    std::env::var("GF_RECORD").ok().as_deref() == Some("1")
}
