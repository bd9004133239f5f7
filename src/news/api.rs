use crate::{
    core::{FeedClient, FeedError, log::feed_debug},
    news::SearchQuery,
};

/// Issues the search `GET` and returns the body of a `200 OK`.
pub(super) async fn fetch_raw(client: &FeedClient, query: &SearchQuery) -> Result<String, FeedError> {
    let mut url = client.search_url()?;
    url.query_pairs_mut()
        .append_pair("order-by", &query.order_by)
        .append_pair("show-references", &query.show_references)
        .append_pair("show-tags", &query.show_tags)
        .append_pair("q", &query.term)
        .append_pair("api-key", client.api_key());

    feed_debug!(path = url.path(), term = %query.term, "requesting search feed");

    let resp = client.http().get(url).send().await?;

    // Anything but 200 is a failure, including other 2xx codes.
    if resp.status() != reqwest::StatusCode::OK {
        let status = resp.status().as_u16();
        // Drop the query so the api key never ends up in logs.
        let mut url = resp.url().clone();
        url.set_query(None);
        return Err(FeedError::Status {
            status,
            url: url.to_string(),
        });
    }

    // `text` consumes the response, returning the connection to the pool.
    let body = resp.text().await?;

    #[cfg(feature = "test-mode")]
    crate::core::fixtures::maybe_record(query, &body);

    Ok(body)
}
