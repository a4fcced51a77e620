//! Interactive terminal frontend.
//!
//! Key presses from crossterm's `EventStream` and ticks from the scheduler
//! are multiplexed in a single `tokio::select!` loop; the screen is redrawn
//! after every handled event.

mod render;
mod terminal;
mod view;

use std::io;
use std::sync::Arc;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::engine::{App, SystemClock};
use crate::sound::{try_create_player, SoundPlayer};

pub use render::draw;
pub use terminal::TerminalGuard;
pub use view::{View, INPUT_MAX_LEN};

/// Opens the alarm output when sound is enabled.
///
/// Returns `None` when sound is turned off, without touching the audio
/// device, or when no device is available.
pub fn alarm_player(config: &AppConfig) -> Option<Arc<dyn SoundPlayer>> {
    if !config.sound {
        debug!("Sound disabled, alarm will be silent");
        return None;
    }
    try_create_player().map(|player| player as Arc<dyn SoundPlayer>)
}

/// Runs the widget until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, read or written.
pub async fn run(config: &AppConfig) -> io::Result<()> {
    let (mut app, mut ticks) = App::new(config, alarm_player(config), Arc::new(SystemClock));

    let _guard = TerminalGuard::enter()?;
    let mut out = io::stdout();
    let mut keys = EventStream::new();
    let mut view = View::new();

    app.start(&mut view);
    draw(&mut out, &view)?;

    loop {
        let event = tokio::select! {
            Some(event) = ticks.recv() => event,
            input = keys.next() => match input {
                Some(Ok(Event::Key(key))) => match view.on_key(key) {
                    Some(event) => event,
                    None => {
                        draw(&mut out, &view)?;
                        continue;
                    }
                },
                Some(Ok(Event::Resize(..))) => {
                    draw(&mut out, &view)?;
                    continue;
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e),
                None => {
                    debug!("Terminal input closed");
                    break;
                }
            },
        };

        if app.handle(&mut view, event).is_break() {
            break;
        }
        draw(&mut out, &view)?;
    }

    info!("Exiting");
    Ok(())
}
