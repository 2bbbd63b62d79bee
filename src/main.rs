//! Contact TUI - terminal contact form
//!
//! A Ratatui-based form that validates a contact message as it is typed and,
//! once sent, offers PDF export, printing and clipboard copy of the summary.

mod app;
mod config;
mod export;
mod platform;
mod services;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Env var naming the log file; logging stays off when unset
const LOG_ENV: &str = "CONTACT_TUI_LOG";

fn main() -> Result<()> {
    init_tracing();

    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("failed to load config, using defaults: {err:#}");
        TuiConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Write tracing output to the file named by `CONTACT_TUI_LOG`.
///
/// The terminal belongs to the UI, so nothing is logged when the variable is
/// unset or the file cannot be created.
fn init_tracing() {
    let Some(log_path) = std::env::var_os(LOG_ENV) else {
        return;
    };

    let file = match std::fs::File::create(&log_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to create log file {log_path:?}: {err}");
            return;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contact_tui=info"));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    tracing::info!("contact form started");

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Resize(_width, _height) => {
                    // Redrawn on the next iteration
                }
                _ => {}
            }
        }

        if app.should_quit() {
            tracing::info!("contact form closed");
            return Ok(());
        }
    }
}
