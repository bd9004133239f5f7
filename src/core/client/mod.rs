//! Public client surface + builder.
//! Defaults (endpoint, key, timeouts, UA) live in `constants`.

mod constants;

use crate::core::FeedError;
use constants::{
    DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, ENV_API_KEY,
    ENV_BASE_URL, SEARCH_PATH, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Handle to the search API. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FeedClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> FeedClientBuilder {
        FeedClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The full search endpoint (`<base>/search`), without a query string.
    pub(crate) fn search_url(&self) -> Result<Url, FeedError> {
        Ok(self.base_url.join(SEARCH_PATH)?)
    }

    /// The configured API base.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Debug, Default)]
pub struct FeedClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    api_key: Option<String>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    timeout: Option<Duration>,
}

impl FeedClientBuilder {
    /// Start from defaults and apply `GUARDIAN_API_KEY` / `GUARDIAN_BASE_URL`
    /// when they are set.
    ///
    /// # Errors
    ///
    /// `FeedError::Url` if the base URL override does not parse,
    /// `FeedError::Config` if the key override is blank.
    pub fn from_env() -> Result<Self, FeedError> {
        Self::default().with_overrides(|k| std::env::var(k).ok())
    }

    pub(crate) fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, FeedError> {
        if let Some(key) = lookup(ENV_API_KEY) {
            if key.trim().is_empty() {
                return Err(FeedError::Config(format!("{ENV_API_KEY} is set but empty")));
            }
            self.api_key = Some(key);
        }
        if let Some(base) = lookup(ENV_BASE_URL) {
            self.base_url = Some(Url::parse(&base)?);
        }
        Ok(self)
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g., `https://content.guardianapis.com/`).
    /// Point this at a mock server in tests.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Static API key sent as `api-key`. Default: the public `test` key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a connect timeout. Default: 15s.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set a per-read timeout on the response body. Default: 10s.
    #[must_use]
    pub const fn read_timeout(mut self, dur: Duration) -> Self {
        self.read_timeout = Some(dur);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// # Errors
    ///
    /// `FeedError::Url` if the default base fails to parse, `FeedError::Config`
    /// for a blank key, `FeedError::Http` if the TLS backend cannot initialise.
    pub fn build(self) -> Result<FeedClient, FeedError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let api_key = self.api_key.unwrap_or_else(|| DEFAULT_API_KEY.to_string());
        if api_key.trim().is_empty() {
            return Err(FeedError::Config("api key must not be empty".into()));
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
            .read_timeout(self.read_timeout.unwrap_or(DEFAULT_READ_TIMEOUT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }

        let http = httpb.build()?;

        Ok(FeedClient {
            http,
            base_url,
            api_key,
        })
    }
}
