//! State carried between poll cycles
//!
//! Both values live only in memory and are owned by the poller.

use homework_core::HomeworkRecord;

/// Lower bound of the next fetch, as a unix timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollWindow {
    since: i64,
}

impl PollWindow {
    pub fn new(since: i64) -> Self {
        Self { since }
    }

    pub fn since(&self) -> i64 {
        self.since
    }

    /// Moves the window forward to `now`; an earlier `now` is ignored
    pub fn advance(&mut self, now: i64) {
        self.since = self.since.max(now);
    }
}

/// Homework list observed in the most recent cycle
#[derive(Debug, Default)]
pub struct Snapshot {
    homeworks: Option<Vec<HomeworkRecord>>,
}

impl Snapshot {
    /// Replaces the snapshot if `homeworks` differs from it
    ///
    /// Returns `true` when the snapshot changed. The first observation always
    /// counts as a change, even for an empty list.
    pub fn update(&mut self, homeworks: Vec<HomeworkRecord>) -> bool {
        if self.homeworks.as_ref() == Some(&homeworks) {
            return false;
        }
        self.homeworks = Some(homeworks);
        true
    }

    /// Most recently observed homework list, if any
    #[allow(dead_code)]
    pub fn homeworks(&self) -> Option<&[HomeworkRecord]> {
        self.homeworks.as_deref()
    }

    /// First record of the snapshot
    pub fn latest(&self) -> Option<&HomeworkRecord> {
        self.homeworks.as_ref().and_then(|h| h.first())
    }
}
