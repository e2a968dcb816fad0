//! Homework statuses repository

use async_trait::async_trait;
use homework_client::PracticumClient;
use serde_json::Value as JsonValue;

/// Source of raw homework status payloads
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches the statuses updated since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp, lower bound of the update window
    async fn fetch_statuses(&self, from_date: i64) -> homework_client::Result<JsonValue>;
}

/// HTTP implementation of HomeworkRepository
pub struct HttpHomeworkRepository {
    client: PracticumClient,
}

impl HttpHomeworkRepository {
    /// Creates a new HTTP homework repository
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn fetch_statuses(&self, from_date: i64) -> homework_client::Result<JsonValue> {
        self.client.homework_statuses(from_date).await
    }
}
