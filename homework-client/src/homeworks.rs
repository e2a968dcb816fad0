//! Homework status endpoint

use crate::PracticumClient;
use crate::error::{ClientError, Result};
use serde_json::Value as JsonValue;
use tracing::debug;

impl PracticumClient {
    /// Fetch homework statuses updated since a timestamp
    ///
    /// Sends `GET <endpoint>?from_date=<from_date>` with an OAuth header. A
    /// `from_date` of zero is replaced with the current time.
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp, lower bound of the update window
    ///
    /// # Returns
    /// The decoded JSON payload, unvalidated
    ///
    /// # Errors
    /// * [`ClientError::NoResponse`] for any non-2xx status
    /// * [`ClientError::RequestFailed`] when no response was received
    /// * [`ClientError::ParseError`] when the body is not JSON
    pub async fn homework_statuses(&self, from_date: i64) -> Result<JsonValue> {
        let from_date = if from_date == 0 {
            chrono::Utc::now().timestamp()
        } else {
            from_date
        };

        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("API returned {}: {}", status, body);
            return Err(ClientError::NoResponse {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let payload: JsonValue = serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))?;

        debug!("API response: {}", payload);

        Ok(payload)
    }
}
