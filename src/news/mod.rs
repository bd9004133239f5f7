mod api;
mod model;
mod parse;
mod wire;

pub use model::News;
pub use parse::{parse, try_parse};

use serde::Deserialize;

use crate::{FeedClient, FeedError, core::log::feed_warn};

/// Fallback strings substituted for fields the feed did not provide.
pub mod placeholder {
    /// Missing or non-string `webTitle`.
    pub const HEADLINE: &str = "News Headline Unknown";
    /// Missing, empty, or malformed `tags`.
    pub const AUTHOR: &str = "Author Unknown";
    /// Missing or non-string `webPublicationDate`.
    pub const DATE: &str = "News Date Unknown";
    /// Missing or non-string `sectionName`.
    pub const GENRE: &str = "News Genre Unknown";
    /// Missing or non-string `webUrl`.
    pub const LINK: &str = "News Link Unknown";
}

/// Query parameters of a search request.
///
/// Deserializable so it can live in an application's own config file;
/// absent keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchQuery {
    /// Free-text search term (`q`). Default: `apple`.
    pub term: String,
    /// `order-by`. Default: `newest`.
    pub order_by: String,
    /// `show-references`. Default: `author`.
    pub show_references: String,
    /// `show-tags`. Default: `contributor`, which is where author names come from.
    pub show_tags: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            term: "apple".into(),
            order_by: "newest".into(),
            show_references: "author".into(),
            show_tags: "contributor".into(),
        }
    }
}

/// A builder for fetching one page of the search feed.
#[derive(Debug, Clone)]
pub struct NewsBuilder {
    client: FeedClient,
    query: SearchQuery,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` with the default query.
    #[must_use]
    pub fn new(client: &FeedClient) -> Self {
        Self {
            client: client.clone(),
            query: SearchQuery::default(),
        }
    }

    /// Replaces the whole query.
    #[must_use]
    pub fn query(mut self, query: SearchQuery) -> Self {
        self.query = query;
        self
    }

    /// Sets the search term.
    #[must_use]
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.query.term = term.into();
        self
    }

    /// Sets the `order-by` value (`newest`, `oldest`, `relevance`).
    #[must_use]
    pub fn order_by(mut self, order: impl Into<String>) -> Self {
        self.query.order_by = order.into();
        self
    }

    /// The query this builder will send.
    #[must_use]
    pub const fn search_query(&self) -> &SearchQuery {
        &self.query
    }

    /// Fetches the raw response body.
    ///
    /// # Errors
    ///
    /// `FeedError::Url` for an unusable endpoint, `FeedError::Http` for
    /// connect/timeout/read failures, `FeedError::Status` for any non-200.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(term = %self.query.term)))]
    pub async fn fetch_raw(&self) -> Result<String, FeedError> {
        api::fetch_raw(&self.client, &self.query).await
    }

    /// Fetches and parses the feed, reporting transport and payload errors.
    ///
    /// # Errors
    ///
    /// Everything [`fetch_raw`](Self::fetch_raw) returns, plus
    /// `FeedError::MalformedPayload` when the body has no `response.results`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(term = %self.query.term)))]
    pub async fn fetch(&self) -> Result<Vec<News>, FeedError> {
        let body = self.fetch_raw().await?;
        try_parse(&body)
    }

    /// Fetches and parses the feed; any failure is logged and becomes an
    /// empty list. This is what a display layer should call.
    pub async fn fetch_or_empty(&self) -> Vec<News> {
        match self.fetch_raw().await {
            Ok(body) => parse(&body),
            Err(_e) => {
                feed_warn!(error = %_e, network = _e.is_network(), "search fetch failed; showing no results");
                Vec::new()
            }
        }
    }
}
