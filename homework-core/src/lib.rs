//! Homework Core
//!
//! Core types and checks shared by the homework status bot.
//!
//! This crate contains:
//! - Domain types: homework records and the status catalog
//! - Response validation: extracting records from a raw API payload
//! - Formatting: turning a record into a notification message

pub mod check;
pub mod domain;
pub mod error;
pub mod format;

pub use check::check_response;
pub use domain::homework::HomeworkRecord;
pub use domain::status::HomeworkStatus;
pub use error::CheckError;
pub use format::parse_status;
