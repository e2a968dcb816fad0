//! Domain types
//!
//! Entities received from the review API. Records are immutable once
//! decoded; the bot only compares and formats them.

pub mod homework;
pub mod status;
