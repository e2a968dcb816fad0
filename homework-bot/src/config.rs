//! Bot configuration
//!
//! Credentials, endpoints and timing for the poller. Loaded once at startup
//! and passed explicitly to the clients.

use anyhow::bail;
use homework_client::{DEFAULT_PRACTICUM_ENDPOINT, DEFAULT_TELEGRAM_API_URL};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Default delay between poll cycles
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Default timeout for a single HTTP request
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound for the HTTP request timeout
pub const MAX_FETCH_TIMEOUT: Duration = Duration::from_secs(300);

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives notifications
    pub telegram_chat_id: String,

    /// Homework statuses endpoint
    pub practicum_endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// How often to poll the review API
    pub poll_interval: Duration,

    /// Timeout applied to every HTTP request
    pub fetch_timeout: Duration,
}

impl Config {
    /// Creates a configuration with default endpoints and timing
    pub fn new(
        practicum_token: String,
        telegram_token: String,
        telegram_chat_id: String,
    ) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint: DEFAULT_PRACTICUM_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Variables from a `.env` file in the working directory (or a parent)
    /// are used when the process environment does not set them.
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN or TOKEN (required)
    /// - TELEGRAM_CHAT_ID or CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    /// - FETCH_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let dotenv = match dotenvy::dotenv_iter() {
            Ok(iter) => dotenv_vars(iter),
            Err(e) => {
                debug!("No .env file loaded: {}", e);
                HashMap::new()
            }
        };

        Self::from_lookup(layered(|key| std::env::var(key).ok(), dotenv))
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Empty values count as missing. If any credential is missing the error
    /// names all of them.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| lookup(*key))
                .find(|value| !value.trim().is_empty())
        };

        let practicum_token = var(&["PRACTICUM_TOKEN"]);
        let telegram_token = var(&["TELEGRAM_TOKEN", "TOKEN"]);
        let telegram_chat_id = var(&["TELEGRAM_CHAT_ID", "CHAT_ID"]);

        let (practicum_token, telegram_token, telegram_chat_id) =
            match (practicum_token, telegram_token, telegram_chat_id) {
                (Some(p), Some(t), Some(c)) => (p, t, c),
                (p, t, c) => {
                    let missing: Vec<&str> = [
                        ("PRACTICUM_TOKEN", p.is_none()),
                        ("TELEGRAM_TOKEN", t.is_none()),
                        ("TELEGRAM_CHAT_ID", c.is_none()),
                    ]
                    .into_iter()
                    .filter_map(|(name, missing)| missing.then_some(name))
                    .collect();
                    bail!(
                        "Missing required environment variables: {}",
                        missing.join(", ")
                    );
                }
            };

        let mut config = Self::new(practicum_token, telegram_token, telegram_chat_id);

        if let Some(endpoint) = var(&["PRACTICUM_ENDPOINT"]) {
            config.practicum_endpoint = endpoint;
        }

        if let Some(api_url) = var(&["TELEGRAM_API_URL"]) {
            config.telegram_api_url = api_url;
        }

        config.poll_interval = seconds(&lookup, "POLL_INTERVAL", DEFAULT_POLL_INTERVAL);
        config.fetch_timeout = seconds(&lookup, "FETCH_TIMEOUT", DEFAULT_FETCH_TIMEOUT);

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.practicum_token.is_empty() {
            bail!("practicum_token cannot be empty");
        }

        if self.telegram_token.is_empty() {
            bail!("telegram_token cannot be empty");
        }

        if self.telegram_chat_id.is_empty() {
            bail!("telegram_chat_id cannot be empty");
        }

        for (name, url) in [
            ("practicum_endpoint", &self.practicum_endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!("{} must start with http:// or https://", name);
            }
        }

        if self.poll_interval.is_zero() {
            bail!("poll_interval must be greater than 0");
        }

        if self.fetch_timeout.is_zero() {
            bail!("fetch_timeout must be greater than 0");
        }

        if self.fetch_timeout > MAX_FETCH_TIMEOUT {
            bail!(
                "fetch_timeout must not exceed {} seconds",
                MAX_FETCH_TIMEOUT.as_secs()
            );
        }

        if self.fetch_timeout > self.poll_interval {
            bail!("fetch_timeout must not exceed poll_interval");
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval", &self.poll_interval)
            .field("fetch_timeout", &self.fetch_timeout)
            .finish()
    }
}

/// Collects `.env` entries, skipping lines that fail to parse
fn dotenv_vars<I>(iter: I) -> HashMap<String, String>
where
    I: Iterator<Item = dotenvy::Result<(String, String)>>,
{
    iter.filter_map(|entry| match entry {
        Ok(pair) => Some(pair),
        Err(e) => {
            warn!("Skipping invalid .env entry: {}", e);
            None
        }
    })
    .collect()
}

/// Lookup that prefers `primary` and falls back to `fallback`
fn layered<F>(primary: F, fallback: HashMap<String, String>) -> impl Fn(&str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    move |key| primary(key).or_else(|| fallback.get(key).cloned())
}

/// Reads a duration in whole seconds, falling back to `default`
fn seconds<F>(lookup: &F, key: &str, default: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!("Ignoring invalid {}={:?}, using {:?}", key, raw, default);
                default
            }
        },
    }
}
