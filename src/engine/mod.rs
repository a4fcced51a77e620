//! Engine module for the clock and countdown timer.
//!
//! This module contains the core functionality:
//! - `controller`: mode switching and event dispatch
//! - `clock`: wall-clock rendering
//! - `timer`: countdown state machine and expiry effects
//! - `blink`: expiry highlight sequence
//! - `schedule`: cancellable repeating tasks
//! - `format`: time formatting and input parsing

pub mod blink;
pub mod clock;
pub mod controller;
pub mod event;
pub mod format;
pub mod schedule;
pub mod timer;

pub use clock::{ClockEngine, FixedClock, SystemClock, WallClock};
pub use controller::App;
pub use event::AppEvent;
pub use format::{format_clock, format_countdown, parse_timer_input, TimerInput};
pub use schedule::{ScheduledTask, Scheduler, TaskId, TaskKind, Tick};
pub use timer::{TimerEngine, TimerError};

use crate::sound::SoundPlayer;
use crate::surface::Surface;

/// Everything an engine may touch while handling an event.
pub struct Context<'a> {
    pub surface: &'a mut dyn Surface,
    pub scheduler: &'a mut Scheduler,
    /// `None` when audio is disabled or unavailable
    pub sound: Option<&'a dyn SoundPlayer>,
    pub wall_clock: &'a dyn WallClock,
}
