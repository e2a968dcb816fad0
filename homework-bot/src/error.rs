//! Poll cycle errors

use homework_client::ClientError;
use homework_core::CheckError;
use thiserror::Error;

/// Any failure that aborts a single poll cycle
///
/// Every variant is handled the same way by the poller: logged, reported to
/// the chat, and retried on the next tick.
#[derive(Debug, Error)]
pub enum CycleError {
    /// The review API could not be queried
    #[error(transparent)]
    Fetch(#[from] ClientError),

    /// The payload or a record failed validation
    #[error(transparent)]
    Check(#[from] CheckError),
}
