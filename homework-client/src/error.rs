//! Error types for the homework client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review API or the chat API
///
/// Display strings are user-facing: the bot forwards them to the chat when a
/// poll cycle fails.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("Ошибка запроса к API: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("Статус код ответа != 200 (получен {status})")]
    NoResponse {
        /// HTTP status code
        status: u16,
    },

    /// Failed to parse response
    #[error("Не удалось разобрать ответ API: {0}")]
    ParseError(String),

    /// The chat API rejected a message
    #[error("Ошибка при отправке сообщения: {0}")]
    SendMessage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_response_message() {
        let err = ClientError::NoResponse { status: 500 };
        assert_eq!(err.to_string(), "Статус код ответа != 200 (получен 500)");
    }
}
