//! Mode controller and application state.
//!
//! [`App`] owns the display mode, both engines and the services they share.
//! It is driven by [`App::handle`], one event at a time.

use std::ops::ControlFlow;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::sound::SoundPlayer;
use crate::surface::Surface;
use crate::types::{ClockSettings, DisplayMode};

use super::clock::{ClockEngine, WallClock};
use super::event::AppEvent;
use super::schedule::Scheduler;
use super::timer::TimerEngine;
use super::Context;

/// Services lent to the engines through a [`Context`].
struct Services {
    scheduler: Scheduler,
    sound: Option<Arc<dyn SoundPlayer>>,
    wall_clock: Arc<dyn WallClock>,
}

impl Services {
    fn context<'a>(&'a mut self, surface: &'a mut dyn Surface) -> Context<'a> {
        Context {
            surface,
            scheduler: &mut self.scheduler,
            sound: self.sound.as_deref(),
            wall_clock: self.wall_clock.as_ref(),
        }
    }
}

/// Application state: display mode plus the clock and timer engines.
pub struct App {
    mode: DisplayMode,
    clock: ClockEngine,
    timer: TimerEngine,
    services: Services,
}

impl App {
    /// Creates the application and the receiving end of its event channel.
    ///
    /// Scheduled ticks arrive on the returned receiver; user events can be
    /// fed straight into [`App::handle`].
    pub fn new(
        config: &AppConfig,
        sound: Option<Arc<dyn SoundPlayer>>,
        wall_clock: Arc<dyn WallClock>,
    ) -> (Self, mpsc::UnboundedReceiver<AppEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let app = Self {
            mode: config.start_mode,
            clock: ClockEngine::new(ClockSettings {
                hour_cycle: config.hour_cycle,
            }),
            timer: TimerEngine::new(config.timer_input.clone()),
            services: Services {
                scheduler: Scheduler::new(event_tx),
                sound,
                wall_clock,
            },
        };

        (app, event_rx)
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn clock(&self) -> &ClockEngine {
        &self.clock
    }

    pub fn timer(&self) -> &TimerEngine {
        &self.timer
    }

    /// Paints the initial state and activates the starting mode.
    pub fn start(&mut self, surface: &mut dyn Surface) {
        surface.set_hour_cycle(self.clock.settings().hour_cycle);
        surface.set_input(self.timer.input(), true);
        self.switch_mode(surface, self.mode);
        info!(mode = self.mode.as_str(), "Application started");
    }

    /// Shows `target`, cancels the other mode's periodic callback and starts
    /// the target's.
    pub fn switch_mode(&mut self, surface: &mut dyn Surface, target: DisplayMode) {
        let mut ctx = self.services.context(surface);
        ctx.surface.show_mode(target);

        match target {
            DisplayMode::Clock => {
                self.timer.suspend();
                self.clock.activate(&mut ctx);
            }
            DisplayMode::Timer => {
                self.clock.deactivate();
                self.timer.reset(&mut ctx);
            }
        }

        self.mode = target;
        debug!(mode = target.as_str(), "Mode switched");
    }

    /// Processes one event. Returns `Break` when the application should exit.
    pub fn handle(&mut self, surface: &mut dyn Surface, event: AppEvent) -> ControlFlow<()> {
        if event.is_user_action() {
            debug!(%event, "Handling user action");
        }

        match event {
            AppEvent::SelectMode(target) => self.switch_mode(surface, target),
            AppEvent::SelectHourCycle(cycle) => {
                let mut ctx = self.services.context(surface);
                self.clock.set_hour_cycle(&mut ctx, cycle);
            }
            AppEvent::ToggleStartStop if self.mode == DisplayMode::Timer => {
                let mut ctx = self.services.context(surface);
                if let Err(e) = self.timer.toggle(&mut ctx) {
                    info!("Start rejected: {}", e);
                    ctx.surface.show_notice(&e.to_string());
                }
            }
            AppEvent::Reset if self.mode == DisplayMode::Timer => {
                let mut ctx = self.services.context(surface);
                self.timer.reset(&mut ctx);
            }
            AppEvent::InputChanged(value) if self.mode == DisplayMode::Timer => {
                let mut ctx = self.services.context(surface);
                self.timer.set_input(&mut ctx, value);
            }
            AppEvent::ToggleStartStop | AppEvent::Reset | AppEvent::InputChanged(_) => {
                debug!("Timer control ignored outside timer mode");
            }
            AppEvent::Tick(tick) => {
                let mut ctx = self.services.context(surface);
                if !self.clock.on_tick(&mut ctx, &tick) && !self.timer.on_tick(&mut ctx, &tick) {
                    debug!(kind = ?tick.kind, "Discarding stale tick");
                }
            }
            AppEvent::Quit => {
                info!("Quit requested");
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.mode)
            .field("clock", &self.clock)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::FixedClock;
    use crate::surface::MockSurface;
    use crate::types::{ControlLabel, HourCycle, TimerPhase};
    use chrono::NaiveTime;

    fn create_app(config: AppConfig) -> (App, mpsc::UnboundedReceiver<AppEvent>, MockSurface) {
        let wall_clock = Arc::new(FixedClock::new(NaiveTime::from_hms_opt(0, 0, 0).unwrap()));
        let (mut app, rx) = App::new(&config, None, wall_clock);
        let mut surface = MockSurface::new();
        app.start(&mut surface);
        (app, rx, surface)
    }

    async fn pump(
        app: &mut App,
        rx: &mut mpsc::UnboundedReceiver<AppEvent>,
        surface: &mut MockSurface,
    ) {
        let event = rx.recv().await.expect("channel open");
        assert!(app.handle(surface, event).is_continue());
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_in_clock_mode() {
        let (app, _rx, surface) = create_app(AppConfig::default());

        assert_eq!(app.mode(), DisplayMode::Clock);
        assert_eq!(surface.mode, Some(DisplayMode::Clock));
        assert_eq!(surface.hour_cycle, Some(HourCycle::TwelveHour));
        assert_eq!(surface.clock_text, "12:00:00 AM");
        assert_eq!(surface.input, "00:05");
        assert!(app.clock().is_scheduled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_in_timer_mode_when_configured() {
        let config = AppConfig::default().with_start_mode(DisplayMode::Timer);
        let (app, _rx, surface) = create_app(config);

        assert_eq!(surface.mode, Some(DisplayMode::Timer));
        assert_eq!(surface.timer_text, "05:00");
        assert!(!app.clock().is_scheduled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_to_timer_cancels_clock() {
        let (mut app, _rx, mut surface) = create_app(AppConfig::default());

        let flow = app.handle(&mut surface, AppEvent::SelectMode(DisplayMode::Timer));

        assert!(flow.is_continue());
        assert_eq!(app.mode(), DisplayMode::Timer);
        assert!(!app.clock().is_scheduled());
        assert_eq!(app.timer().phase(), TimerPhase::Idle);
        assert_eq!(surface.control_label, Some(ControlLabel::Start));
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_mode_is_idempotent() {
        let (mut app, _rx, mut surface) = create_app(AppConfig::default());

        app.switch_mode(&mut surface, DisplayMode::Clock);
        app.switch_mode(&mut surface, DisplayMode::Clock);

        assert_eq!(app.mode(), DisplayMode::Clock);
        assert!(app.clock().is_scheduled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_controls_ignored_in_clock_mode() {
        let (mut app, _rx, mut surface) = create_app(AppConfig::default());

        app.handle(&mut surface, AppEvent::ToggleStartStop);
        app.handle(&mut surface, AppEvent::InputChanged("00:10".to_string()));

        assert_eq!(app.timer().phase(), TimerPhase::Idle);
        assert_eq!(app.timer().input(), "00:05");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_start_shows_notice() {
        let config = AppConfig::default().with_timer_input("00:00");
        let (mut app, _rx, mut surface) = create_app(config);

        app.handle(&mut surface, AppEvent::SelectMode(DisplayMode::Timer));
        app.handle(&mut surface, AppEvent::ToggleStartStop);

        assert_eq!(app.timer().phase(), TimerPhase::Idle);
        assert!(!app.timer().is_counting_down());
        assert_eq!(surface.notices.len(), 1);
        assert!(surface.notices[0].contains("timer duration"));
        assert!(surface.input_enabled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_timer_mode_stops_countdown_and_return_resets() {
        let (mut app, mut rx, mut surface) = create_app(AppConfig::default());

        app.handle(&mut surface, AppEvent::SelectMode(DisplayMode::Timer));
        app.handle(&mut surface, AppEvent::ToggleStartStop);
        pump(&mut app, &mut rx, &mut surface).await;
        assert_eq!(app.timer().state().remaining_seconds, 299);

        app.handle(&mut surface, AppEvent::SelectMode(DisplayMode::Clock));
        assert!(!app.timer().is_counting_down());
        assert!(app.clock().is_scheduled());

        // Only clock renders arrive now
        let renders = surface.clock_renders;
        pump(&mut app, &mut rx, &mut surface).await;
        assert_eq!(surface.clock_renders, renders + 1);
        assert_eq!(app.timer().state().remaining_seconds, 299);

        app.handle(&mut surface, AppEvent::SelectMode(DisplayMode::Timer));
        assert_eq!(app.timer().phase(), TimerPhase::Idle);
        assert_eq!(app.timer().state().remaining_seconds, 300);
        assert_eq!(surface.timer_text, "05:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_hour_cycle_selection() {
        let wall_clock = Arc::new(FixedClock::new(NaiveTime::from_hms_opt(13, 5, 0).unwrap()));
        let (mut app, _rx) = App::new(&AppConfig::default(), None, wall_clock);
        let mut surface = MockSurface::new();
        app.start(&mut surface);
        assert_eq!(surface.clock_text, "01:05:00 PM");

        app.handle(
            &mut surface,
            AppEvent::SelectHourCycle(HourCycle::TwentyFourHour),
        );

        assert_eq!(surface.clock_text, "13:05:00");
        assert_eq!(surface.hour_cycle, Some(HourCycle::TwentyFourHour));
        assert_eq!(app.clock().settings().hour_cycle, HourCycle::TwentyFourHour);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_breaks() {
        let (mut app, _rx, mut surface) = create_app(AppConfig::default());
        assert!(app.handle(&mut surface, AppEvent::Quit).is_break());
    }
}
