//! Error types for response checks and formatting

use thiserror::Error;

/// Errors raised while validating an API payload or formatting a record
///
/// Display strings are user-facing: the bot embeds them in the failure
/// notification it sends to the chat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The payload has no `homeworks` key
    #[error("Неверный ключ словаря для API")]
    ListKey,

    /// The `homeworks` value is not a list
    #[error("Должен быть передан список.")]
    NotaList,

    /// A list element is not a valid homework record
    #[error("Некорректная запись о домашней работе: {0}")]
    MalformedRecord(String),

    /// A record carries a status outside the catalog
    #[error("Недокументированный статус работы: {status}")]
    ParseMissStatus {
        /// The unrecognized status code
        status: String,
    },
}
