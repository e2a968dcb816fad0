//! Repository layer
//!
//! Repositories abstract communication with the review API behind a trait so
//! the poller can be driven by fakes in tests.

mod homeworks;

pub use homeworks::{HomeworkRepository, HttpHomeworkRepository};
