//! guardian-feed: best-effort client for the Guardian content search feed.
//!
//! Fetches one page of `/search`, parses it into display-ready [`News`]
//! records, and optionally drives refreshes in the background with
//! last-writer-wins semantics ([`FeedHandle`]).
//!
//! Every failure on the best-effort paths (transport, status, payload) is
//! logged and degrades to an empty list; field-level gaps are filled with
//! fixed placeholders.
//!
//! ```no_run
//! # async fn run() -> Result<(), guardian_feed::FeedError> {
//! use guardian_feed::{FeedClient, NewsBuilder};
//!
//! let client = FeedClient::builder().api_key("my-key").build()?;
//! let news = NewsBuilder::new(&client).term("apple").fetch_or_empty().await;
//! for n in &news {
//!     println!("{}. {} ({})", n.sequence_number, n.headline, n.date);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod feed;
pub mod news;

pub use crate::core::{FeedClient, FeedClientBuilder, FeedError};
pub use feed::{FeedHandle, FeedSnapshot};
pub use news::{News, NewsBuilder, SearchQuery, parse, placeholder, try_parse};

#[cfg(feature = "tracing-subscriber")]
/// Installs a `fmt` subscriber driven by `RUST_LOG` (default `info`).
/// Dev convenience for demos and tests; ignores a subscriber already set.
pub fn init_tracing_for_tests() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
