use serde::Serialize;

/// One display-ready news item.
///
/// Every field is always populated: anything the feed left out is replaced
/// by a fixed placeholder (see [`placeholder`](super::placeholder)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct News {
    /// The article headline (`webTitle`).
    pub headline: String,
    /// Contributor names joined with `,` (`tags[].webTitle`).
    pub author: String,
    /// Publication date formatted like `Jan 5, 2021`. Empty when the feed
    /// sent a timestamp that could not be parsed.
    pub date: String,
    /// Section name, e.g. "Technology" (`sectionName`).
    pub genre: String,
    /// Canonical link to the full article (`webUrl`).
    pub url: String,
    /// 1-based position within the fetched batch. Display order only,
    /// not a stable identity.
    pub sequence_number: u32,
}
