//! Response validation
//!
//! Checks the shape of a decoded API payload and extracts the homework list.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::domain::homework::HomeworkRecord;
use crate::error::CheckError;

/// Key holding the homework list in the API payload
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Validates an API payload and returns its homework records
///
/// A payload without the `homeworks` key (or one that is not an object at
/// all) fails with [`CheckError::ListKey`]. A key holding anything other than
/// a list, `null` included, fails with [`CheckError::NotaList`]. Record order
/// is preserved and an empty list is valid.
pub fn check_response(response: &JsonValue) -> Result<Vec<HomeworkRecord>, CheckError> {
    let homeworks = response.get(HOMEWORKS_KEY).ok_or(CheckError::ListKey)?;

    let items = homeworks.as_array().ok_or(CheckError::NotaList)?;

    let records = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            HomeworkRecord::deserialize(item)
                .map_err(|e| CheckError::MalformedRecord(format!("#{}: {}", index, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Homeworks in response: {:?}", records);

    Ok(records)
}
