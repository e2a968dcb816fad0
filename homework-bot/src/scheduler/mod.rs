//! Scheduler layer for the bot
//!
//! Drives the poll-diff-notify cycle on a fixed interval and owns the state
//! carried between cycles.

pub mod poller;
pub mod state;

pub use poller::HomeworkPoller;
