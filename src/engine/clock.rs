//! Clock engine: renders wall-clock time once per second.

use std::sync::Mutex;

use chrono::{Local, NaiveTime};
use tokio::time::Duration;
use tracing::debug;

use crate::types::{ClockSettings, HourCycle};

use super::format::format_clock;
use super::schedule::{ScheduledTask, TaskKind, Tick};
use super::Context;

/// Clock re-render cadence.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// WallClock
// ============================================================================

/// Source of the current local time of day.
pub trait WallClock {
    fn now(&self) -> NaiveTime;
}

/// Reads the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Wall clock pinned to a settable time, for tests.
#[derive(Debug)]
pub struct FixedClock {
    time: Mutex<NaiveTime>,
}

impl FixedClock {
    #[must_use]
    pub fn new(time: NaiveTime) -> Self {
        Self {
            time: Mutex::new(time),
        }
    }

    pub fn set(&self, time: NaiveTime) {
        if let Ok(mut current) = self.time.lock() {
            *current = time;
        }
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.time
            .lock()
            .map(|time| *time)
            .unwrap_or(NaiveTime::MIN)
    }
}

// ============================================================================
// ClockEngine
// ============================================================================

/// Renders the clock view and owns its 1 Hz re-render task.
#[derive(Debug, Default)]
pub struct ClockEngine {
    settings: ClockSettings,
    task: Option<ScheduledTask>,
}

impl ClockEngine {
    pub fn new(settings: ClockSettings) -> Self {
        Self {
            settings,
            task: None,
        }
    }

    pub fn settings(&self) -> ClockSettings {
        self.settings
    }

    /// Returns true while the re-render task is scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.task.is_some()
    }

    /// Renders immediately and (re)starts the 1 Hz re-render.
    pub fn activate(&mut self, ctx: &mut Context<'_>) {
        self.render(ctx);
        // Replacing a previous handle drops and aborts it.
        self.task = Some(ctx.scheduler.every(TaskKind::ClockRender, CLOCK_PERIOD));
        debug!("Clock activated");
    }

    /// Stops the re-render task.
    pub fn deactivate(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
            debug!("Clock deactivated");
        }
    }

    /// Writes the current time to the clock display.
    pub fn render(&self, ctx: &mut Context<'_>) {
        let text = format_clock(ctx.wall_clock.now(), self.settings.hour_cycle);
        ctx.surface.set_clock_text(&text);
    }

    /// Switches between 12-hour and 24-hour display and re-renders.
    pub fn set_hour_cycle(&mut self, ctx: &mut Context<'_>, cycle: HourCycle) {
        self.settings.hour_cycle = cycle;
        ctx.surface.set_hour_cycle(cycle);
        self.render(ctx);
        debug!(cycle = cycle.as_str(), "Hour cycle changed");
    }

    /// Handles a tick if it belongs to this engine's task.
    pub fn on_tick(&mut self, ctx: &mut Context<'_>, tick: &Tick) -> bool {
        match &self.task {
            Some(task) if task.owns(tick) => {
                self.render(ctx);
                true
            }
            _ => false,
        }
    }
}
