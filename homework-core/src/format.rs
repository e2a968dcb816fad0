//! Status formatting
//!
//! Converts a homework record into the notification text sent to the chat.

use tracing::debug;

use crate::domain::homework::HomeworkRecord;
use crate::domain::status::HomeworkStatus;
use crate::error::CheckError;

/// Formats a status-change notification for a record
///
/// Fails with [`CheckError::ParseMissStatus`] when the record's status is not
/// in the catalog.
pub fn parse_status(homework: &HomeworkRecord) -> Result<String, CheckError> {
    let status =
        HomeworkStatus::from_code(&homework.status).ok_or_else(|| CheckError::ParseMissStatus {
            status: homework.status.clone(),
        })?;

    let verdict = status.verdict();
    debug!("{}", verdict);

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.homework_name, verdict
    ))
}
