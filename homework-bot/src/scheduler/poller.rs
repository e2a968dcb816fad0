//! Homework poller
//!
//! Polls the review API on a fixed interval, compares the homework list with
//! the one seen last, and notifies the chat about the newest change.
//!
//! Every tick runs one cycle: fetch, validate, diff, optionally notify, then
//! advance the poll window. A failed cycle is logged and reported to the chat,
//! and the next tick starts over with the same window.

use std::future::Future;
use std::sync::Arc;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, error, info};

use homework_core::{check_response, parse_status};

use crate::error::CycleError;
use crate::repository::HomeworkRepository;
use crate::scheduler::state::{PollWindow, Snapshot};
use crate::service::Notifier;

/// Result of a cycle that completed without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The homework list matches the previous one
    Unchanged,
    /// The homework list changed and is now empty
    Cleared,
    /// The homework list changed and this message was delivered
    Notified(String),
}

/// Poller that drives the poll-diff-notify cycle
pub struct HomeworkPoller {
    repository: Arc<dyn HomeworkRepository>,
    notifier: Arc<dyn Notifier>,
    poll_interval: Duration,
    window: PollWindow,
    snapshot: Snapshot,
}

impl HomeworkPoller {
    /// Creates a new poller
    ///
    /// # Arguments
    /// * `repository` - Source of homework status payloads
    /// * `notifier` - Where status changes and failures are reported
    /// * `poll_interval` - Delay between cycles
    /// * `since` - Initial lower bound of the poll window
    pub fn new(
        repository: Arc<dyn HomeworkRepository>,
        notifier: Arc<dyn Notifier>,
        poll_interval: Duration,
        since: i64,
    ) -> Self {
        Self {
            repository,
            notifier,
            poll_interval,
            window: PollWindow::new(since),
            snapshot: Snapshot::default(),
        }
    }

    #[allow(dead_code)]
    pub fn window(&self) -> PollWindow {
        self.window
    }

    #[allow(dead_code)]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Starts the polling loop
    ///
    /// The first cycle runs immediately. Returns once `shutdown` resolves;
    /// shutdown is only observed between cycles.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!("Starting homework poller (interval: {:?})", self.poll_interval);

        let mut interval = time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping poller");
                    return;
                }
                _ = interval.tick() => {
                    // Failures are already logged and reported by tick()
                    if let Ok(CycleOutcome::Notified(message)) = self.tick().await {
                        debug!("Cycle reported a status change: {}", message);
                    }
                }
            }
        }
    }

    /// Runs one cycle and applies the failure policy
    ///
    /// On error the message is logged and a failure notification is
    /// delivered; the error is returned for inspection only.
    pub async fn tick(&mut self) -> Result<CycleOutcome, CycleError> {
        let result = self.run_cycle().await;

        if let Err(e) = &result {
            error!("Poll cycle failed: {}", e);
            self.notifier
                .deliver(&format!("Сбой в работе программы: {}", e))
                .await;
        }

        result
    }

    /// Performs a single poll cycle
    ///
    /// The snapshot is replaced before the newest record is formatted, so a
    /// record with an unknown status fails once rather than on every cycle.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, CycleError> {
        let response = self
            .repository
            .fetch_statuses(self.window.since())
            .await?;

        let homeworks = check_response(&response)?;

        let outcome = if !self.snapshot.update(homeworks) {
            debug!("No new statuses in API response");
            CycleOutcome::Unchanged
        } else {
            match self.snapshot.latest() {
                Some(homework) => {
                    let message = parse_status(homework)?;
                    self.notifier.deliver(&message).await;
                    CycleOutcome::Notified(message)
                }
                None => {
                    debug!("Homework list is empty");
                    CycleOutcome::Cleared
                }
            }
        };

        self.window.advance(chrono::Utc::now().timestamp());

        Ok(outcome)
    }
}
