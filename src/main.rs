// ABOUTME: Main entry point for teapot: logging, terminal setup and the wizard event loop
//
// Binary: teapot
// Usage: teapot [--debug] [--output-dir DIR] [--config FILE]

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    fs::OpenOptions,
    io::{self, IsTerminal},
    path::PathBuf,
    time::{Duration, Instant},
};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use teapot::app::{EventHandler, WizardController, WizardEvent};
use teapot::cache::RenderCache;
use teapot::cli::Cli;
use teapot::components::LayoutComponent;
use teapot::generator::YamlGenerator;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn cleanup_terminal_with_instance<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Restores the terminal when dropped, including while unwinding
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if std::thread::panicking() {
            cleanup_terminal();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let log_file = setup_logging(args.log_filter())?;
    setup_panic_handler();

    let config = args.resolve_config()?;
    info!(
        log_file = %log_file.display(),
        output_dir = %config.output.directory.display(),
        "Starting teapot"
    );

    let cache = RenderCache::new(config.cache.max_entries, config.cache.ttl());
    let cleanup_task = spawn_cache_cleanup(cache.clone(), config.cache.cleanup_interval());

    let generator = YamlGenerator::new(config.output.file_name.clone());
    let mut controller =
        WizardController::new(cache, Box::new(generator), config.output.directory.clone());
    let mut layout = LayoutComponent::new();

    let result = run_tui(&mut controller, &mut layout, config.ui.tick_rate()).await;
    cleanup_task.abort();

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    info!(screen = %controller.current_screen(), "teapot exited");
    result
}

/// Periodically drops expired render cache entries
fn spawn_cache_cleanup(cache: RenderCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval.max(Duration::from_secs(1)));
        // first tick fires immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = cache.cleanup_expired();
            if removed > 0 {
                debug!(removed, "Cleaned up expired render cache entries");
            }
        }
    })
}

async fn run_tui(
    controller: &mut WizardController,
    layout: &mut LayoutComponent,
    tick_rate: Duration,
) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let _guard = TerminalGuard;

    let result = run_tui_loop(controller, layout, &mut terminal, tick_rate).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    controller: &mut WizardController,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    tick_rate: Duration,
) -> Result<()> {
    let size = terminal.size()?;
    EventHandler::process_event(EventHandler::handle_resize(size.width, size.height), controller);

    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| layout.render(frame, controller))?;

        if controller.is_quitting() {
            break;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if let Some(wizard_event) = EventHandler::handle_key_event(key_event, controller) {
                        EventHandler::process_event(wizard_event, controller);
                    }
                }
                Event::Resize(width, height) => {
                    EventHandler::process_event(EventHandler::handle_resize(width, height), controller);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            EventHandler::process_event(WizardEvent::Tick, controller);
            last_tick = Instant::now();
        }

        // Let the cache cleanup task run
        tokio::task::yield_now().await;
    }

    Ok(())
}

/// JSON Lines log file under ~/.teapot/logs. Nothing goes to the terminal.
fn setup_logging(default_filter: &str) -> Result<PathBuf> {
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".teapot").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".teapot/logs"));

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let log_file = log_dir.join(format!(
        "teapot-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    Ok(log_file)
}

/// Panics only get logged here; the preview panic boundary keeps the TUI
/// alive and `TerminalGuard` restores the terminal for anything uncaught.
fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Application panicked: {}", panic_info);
    }));
}
