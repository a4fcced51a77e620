//! Tab Clock - a terminal clock and countdown timer
//!
//! Two views share one screen:
//! - a live clock in 12-hour or 24-hour format
//! - an HH:MM countdown that beeps and blinks when it runs out

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{CommandFactory, Parser};

use tabclock::cli::{Cli, Commands, Display, RunArgs};
use tabclock::config::AppConfig;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = init_tracing(cli.verbose, cli.log_file.as_deref()) {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` wins over `--verbose`. With `--log-file` output goes to the
/// file without ANSI colours, keeping the terminal screen clean.
fn init_tracing(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        Some(Commands::Now(args)) => {
            let config = load_config(cli.config.as_deref())?;
            Display::show_clock(Local::now().time(), args.hour_cycle(&config));
        }
        Some(Commands::Run(args)) => {
            run(cli.config.as_deref(), &args).await?;
        }
        None => {
            run(cli.config.as_deref(), &RunArgs::default()).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    AppConfig::load(path).context("could not load configuration")
}

async fn run(config_path: Option<&Path>, args: &RunArgs) -> Result<()> {
    let config = args.apply(load_config(config_path)?);
    tracing::debug!(?config, "Starting widget");
    tabclock::tui::run(&config)
        .await
        .context("terminal session failed")
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
