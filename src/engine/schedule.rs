//! Cancellable repeating tasks.
//!
//! Every periodic callback (clock render, countdown decrement, expiry blink)
//! is a tokio task that posts [`Tick`] events into the application channel.
//! The handle returned by [`Scheduler::every`] aborts the task on `cancel()`
//! or drop, and each tick carries the id of the task that produced it so
//! ticks already queued by a canceled task can be recognised and discarded.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::debug;

use super::event::AppEvent;

// ============================================================================
// Task identification
// ============================================================================

/// Which periodic callback a task drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Clock re-render, 1 Hz
    ClockRender,
    /// Countdown decrement, 1 Hz
    Countdown,
    /// Expiry highlight toggle, 10 Hz
    Blink,
}

/// Unique id of one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// One firing of a repeating task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub kind: TaskKind,
    pub id: TaskId,
}

// ============================================================================
// ScheduledTask
// ============================================================================

/// Handle to a running repeating task.
#[derive(Debug)]
pub struct ScheduledTask {
    id: TaskId,
    kind: TaskKind,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns true if the tick was produced by this task.
    pub fn owns(&self, tick: &Tick) -> bool {
        self.id == tick.id
    }

    /// Stops the task. No further ticks are produced.
    pub fn cancel(self) {
        debug!(kind = ?self.kind, "Canceling scheduled task");
        // Drop aborts the task.
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ============================================================================
// Scheduler
// ============================================================================

/// Spawns repeating tasks that feed the application event channel.
#[derive(Debug)]
pub struct Scheduler {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    next_id: u64,
}

impl Scheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            next_id: 0,
        }
    }

    /// Starts a task that ticks every `period`.
    ///
    /// The first tick fires one full period after the call.
    ///
    /// # Panics
    ///
    /// Must be called from within a tokio runtime.
    pub fn every(&mut self, kind: TaskKind, period: Duration) -> ScheduledTask {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        let event_tx = self.event_tx.clone();
        let first = Instant::now() + period;

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(first, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                if event_tx.send(AppEvent::Tick(Tick { kind, id })).is_err() {
                    // Event loop is gone
                    break;
                }
            }
        });

        debug!(?kind, ?period, "Scheduled repeating task");
        ScheduledTask { id, kind, handle }
    }
}
