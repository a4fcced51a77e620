//! Expiry blink: toggles the highlight every 100ms, 20 times.

use tokio::time::Duration;
use tracing::debug;

use crate::surface::Surface;
use crate::types::BlinkState;

use super::schedule::{ScheduledTask, TaskKind, Tick};
use super::Context;

/// Highlight toggle cadence.
pub const BLINK_PERIOD: Duration = Duration::from_millis(100);

/// A running blink sequence and its toggle task.
#[derive(Debug)]
pub struct Blink {
    state: BlinkState,
    task: ScheduledTask,
}

impl Blink {
    /// Starts toggling. The first toggle happens one period from now.
    pub fn start(ctx: &mut Context<'_>) -> Self {
        debug!("Blink started");
        Self {
            state: BlinkState::default(),
            task: ctx.scheduler.every(TaskKind::Blink, BLINK_PERIOD),
        }
    }

    pub fn state(&self) -> BlinkState {
        self.state
    }

    pub fn owns(&self, tick: &Tick) -> bool {
        self.task.owns(tick)
    }

    /// Performs one toggle. Returns true when the sequence is complete, in
    /// which case the highlight has been forced off.
    pub fn step(&mut self, surface: &mut dyn Surface) -> bool {
        let finished = self.state.toggle();
        surface.set_highlight(self.state.active);
        if finished {
            surface.set_highlight(false);
            debug!(toggles = self.state.tick_count, "Blink finished");
        }
        finished
    }

    /// Stops early and clears the highlight.
    pub fn cancel(self, surface: &mut dyn Surface) {
        self.task.cancel();
        surface.set_highlight(false);
    }
}
