use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// A single re-armable timer owned by the orchestrator.
///
/// Arming always replaces the previous deadline, so at most one instance of
/// a given timer is ever live. The timer is awaited from the orchestrator's
/// own `select!`, which keeps firing on the orchestrator task.
#[derive(Debug)]
pub struct TimerSlot {
    name: &'static str,
    period: Duration,
    deadline: Option<Instant>,
}

impl TimerSlot {
    pub fn new(name: &'static str, period: Duration) -> Self {
        Self {
            name,
            period,
            deadline: None,
        }
    }

    /// Cancel any pending deadline and start a fresh one.
    ///
    /// A period too large to represent leaves the slot disarmed.
    pub fn arm(&mut self) {
        self.deadline = Instant::now().checked_add(self.period);
        match self.deadline {
            Some(_) => tracing::trace!(
                timer = self.name,
                period_ms = self.period.as_millis() as u64,
                "Timer armed"
            ),
            None => tracing::warn!(
                timer = self.name,
                period_secs = self.period.as_secs(),
                "Timer period out of range, not arming"
            ),
        }
    }

    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            tracing::trace!(timer = self.name, "Timer cancelled");
        }
    }

    /// Resolves when the deadline passes; never resolves while disarmed.
    ///
    /// Does not disarm the slot: the caller cancels or re-arms on firing.
    pub async fn fired(&self) {
        match self.deadline {
            Some(deadline) => sleep_until(deadline).await,
            None => std::future::pending::<()>().await,
        }
    }
}
