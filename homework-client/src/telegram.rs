//! Telegram Bot API client

use crate::error::{ClientError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token
    token: String,
    /// HTTP client instance
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new Bot API client
    ///
    /// # Arguments
    /// * `api_url` - Base URL of the Bot API
    /// * `token` - Bot token issued by BotFather
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(api_url, token, Client::new())
    }

    /// Create a new Bot API client with a custom HTTP client
    pub fn with_client(api_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Send a plain-text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Target chat identifier (numeric id or `@channel`)
    /// * `text` - Message text
    ///
    /// # Errors
    /// [`ClientError::SendMessage`] when the API answers with a non-2xx
    /// status or `"ok": false`; [`ClientError::RequestFailed`] when no
    /// response was received. The request URL embeds the bot token, so it is
    /// stripped from transport errors.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<BotApiResponse>(&body).ok();

        match parsed {
            Some(reply) if status.is_success() && reply.ok => Ok(()),
            Some(reply) => Err(ClientError::SendMessage(format!(
                "status {}: {}",
                status.as_u16(),
                reply.description.unwrap_or_else(|| "Unknown error".to_string())
            ))),
            None => Err(ClientError::SendMessage(format!(
                "status {}: {}",
                status.as_u16(),
                body
            ))),
        }
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = TelegramClient::new("https://api.telegram.org/", "123:abc");
        assert!(format!("{:?}", client).contains("\"https://api.telegram.org\""));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = TelegramClient::new(DEFAULT_TELEGRAM_API_URL, "123:abc");
        assert!(!format!("{:?}", client).contains("123:abc"));
    }
}
