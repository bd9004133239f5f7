use serde::Deserialize;
use serde_json::Value;

// Only the envelope is typed. Result entries stay as raw `Value`s so one
// odd field can never reject the whole batch.

#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    pub(crate) response: SearchResponse,
}

#[derive(Deserialize)]
pub(crate) struct SearchResponse {
    pub(crate) results: Vec<Value>,
}

/// Keys of a single `results[]` entry.
pub(crate) mod keys {
    pub(crate) const TITLE: &str = "webTitle";
    pub(crate) const TAGS: &str = "tags";
    pub(crate) const TAG_NAME: &str = "webTitle";
    pub(crate) const PUBLICATION_DATE: &str = "webPublicationDate";
    pub(crate) const SECTION: &str = "sectionName";
    pub(crate) const URL: &str = "webUrl";
}
