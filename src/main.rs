//! Sentinel Pass terminal client.
//!
//! ## Usage
//!
//! ```bash
//! # Service on localhost (default)
//! sentinel
//!
//! # Remote service
//! sentinel --api-url https://sentinel.example.com
//! SENTINEL_API_URL=https://sentinel.example.com sentinel
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use sentinel_pass::api::ApiClient;
use sentinel_pass::app::{ApiEvent, App, AppConfig, Dispatch, Dispatcher, DEFAULT_API_URL};
use sentinel_pass::logging;

/// Sentinel Pass terminal client
#[derive(Parser, Debug)]
#[command(name = "sentinel")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the scoring/generation service
    #[arg(long, env = "SENTINEL_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Log file (defaults to the platform data directory)
    #[arg(long, env = "SENTINEL_LOG")]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Request timeout in seconds (transport default when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// UI tick interval in milliseconds
    #[arg(long, default_value = "100")]
    tick_ms: u64,
}

impl Args {
    fn into_config(self) -> Result<AppConfig> {
        let mut config = AppConfig::default()
            .with_api_url(&self.api_url)
            .context("invalid --api-url")?;
        config.request_timeout = self.timeout_secs.map(Duration::from_secs);
        if let Some(path) = self.log_file {
            config.log_path = path;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let tick = Duration::from_millis(args.tick_ms.max(1));
    let log_level = args.log_level.clone();
    let config = args.into_config()?;

    logging::init(&config.log_path, &log_level)?;
    tracing::info!(api_url = %config.api_url, "starting sentinel");

    let client = Arc::new(ApiClient::new(config.api_url.clone(), config.request_timeout)?);
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(client, events_tx);
    dispatcher.dispatch(Dispatch::Health);

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app, &dispatcher, events_rx, tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = ?e, "event loop failed");
    }
    tracing::info!("shutting down");
    result
}

/// Main application loop.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    dispatcher: &Dispatcher,
    mut events: mpsc::UnboundedReceiver<ApiEvent>,
    tick: Duration,
) -> Result<()> {
    loop {
        let now = Instant::now();

        while let Ok(event) = events.try_recv() {
            app.apply_api_event(event, now);
        }
        app.tick(now);

        terminal.draw(|frame| app.render(frame, now))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if let Some(request) = app.handle_key_event(key, Instant::now()) {
                    dispatcher.dispatch(request);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
