//! Best-effort decoding of a search response into [`News`] records.

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::{
    core::{FeedError, log::feed_warn},
    news::{
        model::News,
        placeholder,
        wire::{SearchEnvelope, keys},
    },
};

/// Source timestamp pattern, UTC with a literal `Z`.
const SOURCE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Display pattern, e.g. `Jan 5, 2021`.
const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Parses a raw search response body.
///
/// Never fails: an empty body, invalid JSON, or a missing `response.results`
/// array is logged and yields an empty list. Within the array every entry
/// produces exactly one record, in source order.
#[must_use]
pub fn parse(raw: &str) -> Vec<News> {
    try_parse(raw).unwrap_or_else(|e| {
        feed_warn!(error = %e, "discarding unreadable search payload");
        Vec::new()
    })
}

/// Same as [`parse`] but reports structural problems instead of hiding them.
///
/// Field-level problems are still substituted silently.
///
/// # Errors
///
/// `FeedError::MalformedPayload` if the body is empty, is not JSON, or lacks
/// a `response.results` array.
pub fn try_parse(raw: &str) -> Result<Vec<News>, FeedError> {
    if raw.trim().is_empty() {
        return Err(FeedError::MalformedPayload("empty body".into()));
    }
    let envelope: SearchEnvelope = serde_json::from_str(raw)
        .map_err(|e| FeedError::MalformedPayload(e.to_string()))?;

    Ok(envelope
        .response
        .results
        .iter()
        .enumerate()
        .map(|(i, item)| news_from_item(item, i))
        .collect())
}

fn news_from_item(item: &Value, index: usize) -> News {
    News {
        headline: string_or(item, keys::TITLE, placeholder::HEADLINE),
        author: authors(item),
        date: date(item),
        genre: string_or(item, keys::SECTION, placeholder::GENRE),
        url: string_or(item, keys::URL, placeholder::LINK),
        sequence_number: u32::try_from(index + 1).unwrap_or(u32::MAX),
    }
}

fn string_or(item: &Value, key: &str, fallback: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

fn authors(item: &Value) -> String {
    item.get(keys::TAGS)
        .and_then(Value::as_array)
        .and_then(|tags| join_contributors(tags))
        .unwrap_or_else(|| placeholder::AUTHOR.to_string())
}

/// `None` for an empty list or when any tag lacks a string name.
fn join_contributors(tags: &[Value]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    let names = tags
        .iter()
        .map(|t| t.get(keys::TAG_NAME).and_then(Value::as_str))
        .collect::<Option<Vec<_>>>()?;
    Some(names.join(","))
}

fn date(item: &Value) -> String {
    match item.get(keys::PUBLICATION_DATE).and_then(Value::as_str) {
        Some(raw) => format_date(raw),
        None => placeholder::DATE.to_string(),
    }
}

/// Present-but-unparsable dates become `""`, not the placeholder.
fn format_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, SOURCE_DATE_FORMAT) {
        Ok(dt) => dt.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_e) => {
            feed_warn!(date = raw, error = %_e, "unparsable publication date");
            String::new()
        }
    }
}
