//! Command definitions for the Tab Clock CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::AppConfig;
use crate::engine::parse_timer_input;
use crate::types::{DisplayMode, HourCycle};

// ============================================================================
// CLI Structure
// ============================================================================

/// Tab Clock - a terminal clock and countdown timer
#[derive(Parser, Debug)]
#[command(
    name = "tabclock",
    version,
    about = "Terminal clock and countdown timer",
    long_about = "A two-tab terminal widget: a live 12/24-hour clock and an HH:MM countdown \
                  timer that beeps and blinks when it runs out.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (JSON)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive clock/timer
    Run(RunArgs),

    /// Print the current time once
    Now(NowArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// View selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Clock,
    Timer,
}

impl From<ModeArg> for DisplayMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Clock => DisplayMode::Clock,
            ModeArg::Timer => DisplayMode::Timer,
        }
    }
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command. Each flag overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// View to open with
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Use the 24-hour clock
    #[arg(long = "24h")]
    pub twenty_four_hour: bool,

    /// Initial timer duration (HH:MM)
    #[arg(short, long, value_parser = validate_timer_input)]
    pub timer: Option<String>,

    /// Disable the alarm sound
    #[arg(long)]
    pub no_sound: bool,
}

impl RunArgs {
    /// Layers these flags over a loaded configuration.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(mode) = self.mode {
            config.start_mode = mode.into();
        }
        if self.twenty_four_hour {
            config.hour_cycle = HourCycle::TwentyFourHour;
        }
        if let Some(timer) = &self.timer {
            config.timer_input = timer.clone();
        }
        if self.no_sound {
            config.sound = false;
        }
        config
    }
}

/// Arguments for the now command
#[derive(Args, Debug, Clone, Default)]
pub struct NowArgs {
    /// Use the 24-hour clock
    #[arg(long = "24h")]
    pub twenty_four_hour: bool,
}

impl NowArgs {
    pub fn hour_cycle(&self, config: &AppConfig) -> HourCycle {
        if self.twenty_four_hour {
            HourCycle::TwentyFourHour
        } else {
            config.hour_cycle
        }
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validates an `HH:MM` duration argument.
fn validate_timer_input(s: &str) -> Result<String, String> {
    parse_timer_input(s)
        .map(|_| s.trim().to_string())
        .ok_or_else(|| format!("expected HH:MM (00:00-23:59), got {:?}", s))
}

// ============================================================================
// Tests
// ============================================================================
