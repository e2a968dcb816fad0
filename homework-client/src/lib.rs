//! Homework HTTP Client
//!
//! Typed HTTP clients for the two remote services the bot talks to:
//! - [`PracticumClient`]: the homework-review API (status polling)
//! - [`TelegramClient`]: the Telegram Bot API (message delivery)
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), homework_client::ClientError> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "practicum-token",
//!     );
//!
//!     let response = client.homework_statuses(0).await?;
//!     println!("{}", response);
//!     Ok(())
//! }
//! ```

pub mod error;
mod homeworks;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use telegram::{DEFAULT_TELEGRAM_API_URL, TelegramClient};

use reqwest::Client;
use reqwest::redirect::Policy;
use std::fmt;
use std::time::Duration;

/// Default homework-review API endpoint
pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Builds the HTTP client shared by the review and chat clients
///
/// Requests time out after `timeout`, and redirects are not followed so that
/// a 3xx from the review API surfaces as a non-success status.
pub fn http_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .redirect(Policy::none())
        .build()?;
    Ok(client)
}

/// HTTP client for the homework-review API
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the homework statuses endpoint
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework statuses endpoint
    /// * `token` - OAuth token of the student
    ///
    /// # Example
    /// ```
    /// use homework_client::{DEFAULT_PRACTICUM_ENDPOINT, PracticumClient};
    ///
    /// let client = PracticumClient::new(DEFAULT_PRACTICUM_ENDPOINT, "token");
    /// ```
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// Use [`http_client`] to get one with a bounded timeout.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PracticumClient::new(DEFAULT_PRACTICUM_ENDPOINT, "secret");
        assert_eq!(client.endpoint(), DEFAULT_PRACTICUM_ENDPOINT);
    }

    #[test]
    fn test_debug_hides_token() {
        let client = PracticumClient::new(DEFAULT_PRACTICUM_ENDPOINT, "secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_http_client_builds() {
        assert!(http_client(Duration::from_secs(5)).is_ok());
    }
}
