//! EduAI - a terminal client for the EduAI tutoring service.
//!
//! This application provides a keyboard-driven interface for registering,
//! picking an exam, filling in the learning questionnaire, taking mini
//! tests, managing weekly study plans and chatting with the AI tutor.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use eduai_core::session::Session;
use eduai_core::{Config, Route};

use app::{App, AppState};
use ui::input::handle_input;
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Log file name inside the cache directory
const LOG_FILE: &str = "eduai.log";

#[derive(Parser, Debug)]
#[command(name = "eduai", version, about = "Terminal client for the EduAI tutoring service")]
struct Cli {
    /// Backend base URL (overrides config and EDUAI_API_BASE_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Keep the credential in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Clear the stored credential and exit
    #[arg(long)]
    logout: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    write_config: bool,

    /// Route to open first, e.g. /weekly-plan
    #[arg(long, default_value = "/", value_parser = parse_route)]
    path: Route,
}

fn parse_route(path: &str) -> Result<Route, String> {
    Route::from_path(path).ok_or_else(|| {
        let known: Vec<&str> = Route::ALL.iter().map(Route::path).collect();
        format!("unknown route '{}' (known: {})", path, known.join(", "))
    })
}

/// Initialize the tracing subscriber, writing to a file.
///
/// The terminal is in raw mode while the app runs, so nothing may be
/// logged to stdout/stderr. Use RUST_LOG to control the level.
fn init_tracing(config: &Config) -> Result<WorkerGuard> {
    let path = match config.log_file.clone() {
        Some(path) => path,
        None => config.cache_dir()?.join(LOG_FILE),
    };
    let dir = path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(LOG_FILE));

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config, using defaults: {:#}", e);
            Config::default()
        }
    };

    if cli.write_config {
        if let Some(url) = &cli.api_url {
            config.api_base_url = Some(url.clone());
        }
        config.save()?;
        println!("Yapılandırma yazıldı: {}", Config::config_path()?.display());
        return Ok(());
    }

    // Initialize logging
    let _guard = init_tracing(&config)?;
    info!("EduAI starting");

    let session = if cli.ephemeral {
        Session::in_memory()
    } else {
        config.open_session()?
    };

    if cli.logout {
        session.clear_credential();
        println!("Oturum kapatıldı.");
        return Ok(());
    }

    let base_url = cli.api_url.clone().unwrap_or_else(|| config.resolve_base_url());
    info!(%base_url, "Using backend");

    let mut app = App::new(config, session, &base_url, cli.path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        warn!(error = %e, "Main loop failed");
        eprintln!("Error: {}", e);
    }

    info!("EduAI shutting down");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| render(f, app))?;

        // Poll for events with timeout to allow background updates
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Ctrl+C to quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                // Handle input
                if handle_input(app, key) {
                    return Ok(());
                }
            }
        }

        // Apply finished page loads
        app.check_background_tasks();

        // Check if we should quit
        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
