use std::env;
use std::time::Duration;

use crate::breaker::BreakerConfig;

/// Published CSV export of the reference price sheet.
const DEFAULT_FEED_URL: &str =
    "https://docs.google.com/spreadsheets/d/1S7W0G6jZf9nQ4yQ0cUu6mPZ6cC0XK4VY/export?format=csv";

/// CORS relay the browser-era deployment fetched the sheet through. The
/// relay expects the target URL percent-encoded in its query string.
const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/raw?url=";

/// Tuning knobs for the reference data service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Upstream feed document.
    pub feed_url: String,
    /// Optional relay prefix; `None` fetches the feed URL directly.
    pub relay_url: Option<String>,
    /// Budget for a single feed fetch.
    pub fetch_timeout: Duration,
    /// Window after a completed load during which `ensure_loaded` is a no-op.
    pub staleness_window: Duration,
    /// Queries shorter than this return an empty result set.
    pub min_query_len: usize,
    pub breaker: BreakerConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            feed_url: String::from(DEFAULT_FEED_URL),
            relay_url: Some(String::from(DEFAULT_RELAY_URL)),
            fetch_timeout: Duration::from_secs(10),
            staleness_window: Duration::from_secs(300),
            min_query_len: 2,
            breaker: BreakerConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Default configuration with environment overrides applied.
    ///
    /// | Variable | Effect |
    /// |----------|--------|
    /// | `QUOTEDESK_FEED_URL` | Replaces the feed document URL |
    /// | `QUOTEDESK_FEED_RELAY` | Replaces the relay prefix; empty disables the relay |
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("QUOTEDESK_FEED_URL") {
            if !url.trim().is_empty() {
                config.feed_url = url;
            }
        }
        if let Ok(relay) = env::var("QUOTEDESK_FEED_RELAY") {
            let relay = relay.trim().to_owned();
            config.relay_url = if relay.is_empty() { None } else { Some(relay) };
        }
        config
    }

    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    pub fn with_relay_url(mut self, relay: Option<String>) -> Self {
        self.relay_url = relay;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_staleness_window(mut self, window: Duration) -> Self {
        self.staleness_window = window;
        self
    }

    pub fn with_breaker(mut self, breaker: BreakerConfig) -> Self {
        self.breaker = breaker;
        self
    }

    /// URL the transport actually requests: the feed itself, or the relay
    /// with the feed URL encoded into its query string.
    pub fn request_url(&self) -> String {
        match &self.relay_url {
            Some(relay) => format!("{relay}{}", urlencoding::encode(&self.feed_url)),
            None => self.feed_url.clone(),
        }
    }
}
