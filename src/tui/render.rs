//! Screen drawing.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use crate::types::{DisplayMode, HourCycle};

use super::view::View;

const LEFT: u16 = 2;

/// Repaints the whole screen from `view`.
pub fn draw<W: Write>(out: &mut W, view: &View) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    draw_tabs(out, view.mode)?;
    match view.mode {
        DisplayMode::Clock => draw_clock(out, view)?,
        DisplayMode::Timer => draw_timer(out, view)?,
    }

    if let Some(notice) = &view.notice {
        queue!(
            out,
            MoveTo(LEFT, 9),
            PrintStyledContent(format!(" {} ", notice).black().on_yellow()),
            MoveTo(LEFT, 10),
            PrintStyledContent("press any key".dim())
        )?;
    }

    queue!(out, MoveTo(LEFT, 12), PrintStyledContent(help_line(view).dim()))?;
    out.flush()
}

fn draw_tabs<W: Write>(out: &mut W, mode: DisplayMode) -> io::Result<()> {
    queue!(out, MoveTo(LEFT, 1))?;
    for (tab, title) in [(DisplayMode::Clock, " Clock "), (DisplayMode::Timer, " Timer ")] {
        if tab == mode {
            queue!(out, PrintStyledContent(title.bold().reverse()))?;
        } else {
            queue!(out, Print(title))?;
        }
        queue!(out, Print(" "))?;
    }
    Ok(())
}

fn draw_clock<W: Write>(out: &mut W, view: &View) -> io::Result<()> {
    queue!(
        out,
        MoveTo(LEFT, 3),
        PrintStyledContent(view.clock_text.as_str().bold()),
        MoveTo(LEFT, 5)
    )?;
    for cycle in [HourCycle::TwelveHour, HourCycle::TwentyFourHour] {
        let label = format!(" {} ", cycle.label());
        if cycle == view.hour_cycle {
            queue!(out, PrintStyledContent(label.reverse()))?;
        } else {
            queue!(out, Print(label))?;
        }
        queue!(out, Print(" "))?;
    }
    Ok(())
}

fn draw_timer<W: Write>(out: &mut W, view: &View) -> io::Result<()> {
    let text = view.timer_text.as_str().bold();
    let text = if view.highlight { text.red().reverse() } else { text };
    queue!(out, MoveTo(LEFT, 3), PrintStyledContent(text), MoveTo(LEFT, 5))?;

    let field = match &view.editing {
        Some(buffer) => format!("[{:<5}_]", buffer).underlined(),
        None if view.input_enabled => format!("[{}]", view.input).stylize(),
        None => format!("[{}]", view.input).dim(),
    };
    queue!(
        out,
        Print("Duration "),
        PrintStyledContent(field),
        MoveTo(LEFT, 7),
        PrintStyledContent(format!(" {} ", view.control_label).reverse()),
        Print("  "),
        Print(" reset ")
    )?;
    Ok(())
}

fn help_line(view: &View) -> &'static str {
    if view.is_editing() {
        return "0-9 : type   enter commit   esc cancel";
    }
    match view.mode {
        DisplayMode::Clock => "c/t/tab switch   a 12h   h 24h   q quit",
        DisplayMode::Timer => "c/t/tab switch   space start/stop   r reset   e edit   q quit",
    }
}
