use std::sync::Arc;
use std::time::Duration;

use clap::ArgMatches;
use tracing::warn;

use vitabar_core::config::loading::validate_config;
use vitabar_core::config::{self, VitabarConfig};
use vitabar_core::events;
use vitabar_core::indicator::surfaces::{DesktopNotifier, StdoutSurface};
use vitabar_core::indicator::traits::StatusSurface;
use vitabar_core::{PollController, schedule};

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("run", sub_matches)) => handle_run_command(sub_matches).await,
        Some(("status", sub_matches)) => handle_status_command(sub_matches),
        Some(("schedule", sub_matches)) => handle_schedule_command(sub_matches).await,
        _ => Err("Unknown command".into()),
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> VitabarConfig {
    match config::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.vitabar/config.toml and ./.vitabar/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            VitabarConfig::default()
        }
    }
}

/// Merge CLI flags over the loaded config (flags are the highest-priority
/// source) and validate the result.
fn effective_config(sub_matches: &ArgMatches) -> Result<VitabarConfig, Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();

    if let Some(command) = sub_matches.get_one::<String>("command") {
        config.poll.command = Some(command.clone());
    }
    // Only the `run` subcommand defines --interval
    if let Ok(Some(interval)) = sub_matches.try_get_one::<u64>("interval") {
        config.poll.interval_secs = Some(*interval);
    }

    validate_config(&config)?;
    Ok(config)
}

async fn handle_run_command(sub_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = effective_config(sub_matches)?;
    let json = sub_matches.get_flag("json");

    events::log_indicator_session(config.poll.command(), config.poll.interval_secs());

    let surface = Arc::new(StdoutSurface::new(json));
    let notifier = Arc::new(DesktopNotifier::new(
        config.notify.title(),
        config.notify.enabled,
    ));
    let mut controller = PollController::new(
        config.poll.command(),
        Duration::from_secs(config.poll.interval_secs()),
        surface,
        notifier,
    );

    controller.start();
    tokio::signal::ctrl_c().await?;
    controller.stop();

    events::log_app_shutdown();
    Ok(())
}

fn handle_status_command(sub_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = effective_config(sub_matches)?;
    let json = sub_matches.get_flag("json");

    let raw = schedule::poll_ongoing(config.poll.command());
    let text = schedule::format_for_display(&raw);

    StdoutSurface::new(json).set_status(&text);
    Ok(())
}

async fn handle_schedule_command(
    sub_matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = effective_config(sub_matches)?;

    let surface = Arc::new(StdoutSurface::new(false));
    let notifier = Arc::new(DesktopNotifier::new(
        config.notify.title(),
        config.notify.enabled,
    ));
    let controller = PollController::new(
        config.poll.command(),
        Duration::from_secs(config.poll.interval_secs()),
        surface,
        notifier,
    );

    // One-shot: fetch failures are soft (logged, no notification)
    controller.fetch_full_report().await;
    Ok(())
}
