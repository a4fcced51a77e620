//! Timer engine for the countdown view.
//!
//! This module provides the countdown state machine:
//! - Phase transitions (Idle → Running ⇄ Paused → Expired → Idle)
//! - 1 Hz decrement via a cancellable scheduled task
//! - Expiry side effects: alarm tone and highlight blink
//! - Reset and re-arming from the duration input

use thiserror::Error;
use tokio::time::Duration;
use tracing::{debug, info, warn};

use crate::sound::Tone;
use crate::types::{TickOutcome, TimerPhase, TimerState};

use super::blink::Blink;
use super::format::{format_countdown, input_seconds};
use super::schedule::{ScheduledTask, TaskKind, Tick};
use super::Context;

/// Countdown decrement cadence.
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// TimerError
// ============================================================================

/// Errors surfaced to the user by timer actions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The input does not describe a positive duration.
    #[error("Please set a timer duration (HH:MM) longer than 00:00")]
    NonPositiveDuration {
        /// Raw input text that was rejected
        input: String,
    },
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Countdown timer that owns its state, decrement task and blink.
#[derive(Debug)]
pub struct TimerEngine {
    state: TimerState,
    /// Last committed value of the duration input
    input: String,
    countdown: Option<ScheduledTask>,
    blink: Option<Blink>,
}

impl TimerEngine {
    /// Creates an idle engine armed from `input`.
    pub fn new(input: impl Into<String>) -> Self {
        let input = input.into();
        Self {
            state: TimerState::new(input_seconds(&input)),
            input,
            countdown: None,
            blink: None,
        }
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn phase(&self) -> TimerPhase {
        self.state.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns true while the decrement task is scheduled.
    pub fn is_counting_down(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn is_blinking(&self) -> bool {
        self.blink.is_some()
    }

    /// Handles the start/stop/resume control.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::NonPositiveDuration` if a fresh start is
    /// requested while the input parses to zero. State is left unchanged.
    pub fn toggle(&mut self, ctx: &mut Context<'_>) -> Result<(), TimerError> {
        match self.state.phase {
            TimerPhase::Idle | TimerPhase::Expired => self.start(ctx)?,
            TimerPhase::Running => self.stop(ctx),
            TimerPhase::Paused => self.resume(ctx),
        }
        Ok(())
    }

    /// Arms from the input and starts counting down.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::NonPositiveDuration` if the input is zero or
    /// malformed.
    pub fn start(&mut self, ctx: &mut Context<'_>) -> Result<(), TimerError> {
        let seconds = input_seconds(&self.input);
        if seconds == 0 {
            return Err(TimerError::NonPositiveDuration {
                input: self.input.clone(),
            });
        }

        self.state.start(seconds);
        self.schedule_countdown(ctx);
        self.project(ctx);

        info!(seconds, "Timer started");
        Ok(())
    }

    /// Freezes a running countdown.
    pub fn stop(&mut self, ctx: &mut Context<'_>) {
        if !self.state.is_running() {
            return;
        }

        self.cancel_countdown();
        self.state.pause();
        self.project(ctx);

        debug!(remaining = self.state.remaining_seconds, "Timer paused");
    }

    /// Continues a paused countdown without re-reading the input.
    pub fn resume(&mut self, ctx: &mut Context<'_>) {
        if !self.state.is_paused() {
            return;
        }

        self.state.resume();
        self.schedule_countdown(ctx);
        self.project(ctx);

        debug!(remaining = self.state.remaining_seconds, "Timer resumed");
    }

    /// Cancels countdown and blink, re-arms from the input and returns to Idle.
    pub fn reset(&mut self, ctx: &mut Context<'_>) {
        self.cancel_countdown();
        if let Some(blink) = self.blink.take() {
            blink.cancel(ctx.surface);
        }
        ctx.surface.set_highlight(false);

        self.state.reset(input_seconds(&self.input));
        self.project(ctx);

        debug!(armed = self.state.initial_seconds, "Timer reset");
    }

    /// Stops the decrement when the timer view is left.
    ///
    /// A running countdown is frozen as Paused; the blink keeps going.
    pub fn suspend(&mut self) {
        if self.countdown.is_some() {
            self.cancel_countdown();
            self.state.pause();
            debug!("Timer suspended");
        }
    }

    /// Commits a new duration input value.
    ///
    /// Outside of Running this resets the timer from the new value. While
    /// running the input is locked and the change is ignored. Returns true
    /// if the value was taken.
    pub fn set_input(&mut self, ctx: &mut Context<'_>, value: impl Into<String>) -> bool {
        if self.state.is_running() {
            debug!("Input change ignored while running");
            ctx.surface.set_input(&self.input, false);
            return false;
        }

        self.input = value.into();
        self.reset(ctx);
        true
    }

    /// Handles a tick if it belongs to the countdown or the blink.
    pub fn on_tick(&mut self, ctx: &mut Context<'_>, tick: &Tick) -> bool {
        if self.countdown.as_ref().is_some_and(|task| task.owns(tick)) {
            self.countdown_tick(ctx);
            return true;
        }

        if let Some(blink) = self.blink.as_mut().filter(|blink| blink.owns(tick)) {
            if blink.step(ctx.surface) {
                self.blink = None;
            }
            return true;
        }

        false
    }

    fn countdown_tick(&mut self, ctx: &mut Context<'_>) {
        match self.state.tick() {
            TickOutcome::Counting(remaining) => {
                ctx.surface.set_timer_text(&format_countdown(remaining));
            }
            TickOutcome::Expired => self.expire(ctx),
        }
    }

    fn expire(&mut self, ctx: &mut Context<'_>) {
        self.cancel_countdown();
        self.project(ctx);
        info!(armed = self.state.initial_seconds, "Timer expired");

        match ctx.sound {
            Some(player) => {
                if let Err(e) = player.play(&Tone::alarm()) {
                    warn!("Failed to play alarm: {} ({})", e, e.suggestion());
                }
            }
            None => debug!("No audio player, alarm is silent"),
        }

        // A blink left over from a previous expiry is replaced.
        if let Some(previous) = self.blink.take() {
            previous.cancel(ctx.surface);
        }
        self.blink = Some(Blink::start(ctx));
    }

    fn schedule_countdown(&mut self, ctx: &mut Context<'_>) {
        self.countdown = Some(ctx.scheduler.every(TaskKind::Countdown, COUNTDOWN_PERIOD));
    }

    fn cancel_countdown(&mut self) {
        if let Some(task) = self.countdown.take() {
            task.cancel();
        }
    }

    /// Pushes phase-derived state to the surface.
    fn project(&self, ctx: &mut Context<'_>) {
        let phase = self.state.phase;
        ctx.surface.set_control_label(phase.control_label());
        ctx.surface.set_input(&self.input, phase.input_enabled());
        ctx.surface
            .set_timer_text(&format_countdown(self.state.remaining_seconds));
    }
}

// ============================================================================
// Tests
// ============================================================================
