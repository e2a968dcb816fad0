//! Notification service
//!
//! Delivers messages to the configured chat. Delivery failures stop here:
//! they are logged and never reach the poller.

use async_trait::async_trait;
use homework_client::TelegramClient;
use tracing::{error, info};

/// Service trait for delivering notification messages
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers a message, logging and discarding any failure
    async fn deliver(&self, message: &str);
}

/// Telegram implementation of Notifier
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier that posts to `chat_id`
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn deliver(&self, message: &str) {
        match self.client.send_message(&self.chat_id, message).await {
            Ok(()) => info!("Message sent: {}", message),
            Err(e) => error!("Message not sent: {}", e),
        }
    }
}
