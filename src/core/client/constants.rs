//! Centralized constants for default endpoint, query and timeouts.

use std::time::Duration;

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("guardian-feed/", env!("CARGO_PKG_VERSION"));

/// Guardian content API base (`search` is joined onto it).
pub(crate) const DEFAULT_BASE_URL: &str = "https://content.guardianapis.com/";

/// Path segment of the search endpoint.
pub(crate) const SEARCH_PATH: &str = "search";

/// The public developer key; fine for smoke tests, heavily rate limited.
pub(crate) const DEFAULT_API_KEY: &str = "test";

pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
pub(crate) const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment overrides picked up by `FeedClientBuilder::from_env`.
pub(crate) const ENV_API_KEY: &str = "GUARDIAN_API_KEY";
pub(crate) const ENV_BASE_URL: &str = "GUARDIAN_BASE_URL";
