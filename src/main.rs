//! tileboard - Tile Groups Demo Board
//!
//! A terminal board of tiles arranged into collapsible groups:
//! - Three densities (compact, standard, roomy)
//! - Optional group outlines
//! - One highlighted tile at a time
//!
//! Usage: tileboard [--help] [--version] [--export-html]

mod app;
mod catalog;
mod config;
mod export;
mod layout;
mod presentation;
mod state;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{stdout, Write};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("tileboard {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Err(e) = init_logging() {
        // Logging is optional; the board works without it
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let result = if args.iter().any(|a| a == "--export-html") {
        export_html()
    } else {
        run_app()
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file so tracing output never lands on the alternate screen
fn init_logging() -> Result<()> {
    let dir = dirs::cache_dir()
        .context("Could not find cache directory")?
        .join("tileboard");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let path = dir.join("tileboard.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install log subscriber")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tileboard starting");
    Ok(())
}

fn print_help() {
    println!(
        r#"tileboard - Tile Groups Demo Board

Arrange tiles into groups, switch density, collapse sections.

USAGE:
    tileboard [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -v, --version    Print version information
    --export-html    Write the board as an HTML page to stdout

KEYBINDINGS:
    1/2/3, d         Compact / standard / roomy density
    o                Toggle group outlines
    Tab, h/l         Move focus between tiles
    j/k              Jump between groups
    Enter, Space     Activate tile / toggle group
    c                Collapse or expand the focused group
    PgUp/PgDn        Scroll
    ?                Help
    q                Quit

CONFIG:
    ~/.config/tileboard/config.toml
"#
    );
}

fn export_html() -> Result<()> {
    let page = export::render_page(&state::ViewState::new())?;
    let mut out = stdout().lock();
    out.write_all(page.as_bytes())
        .context("Failed to write HTML to stdout")?;
    out.flush().context("Failed to flush stdout")?;
    tracing::info!(bytes = page.len(), "exported board as HTML");
    Ok(())
}

fn run_app() -> Result<()> {
    // Load configuration
    let config = config::Config::load().context("Failed to load configuration")?;

    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Restore the terminal on panic, otherwise it stays in raw mode + alternate screen
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = execute!(std::io::stdout(), crossterm::cursor::Show);
        original_hook(info);
    }));

    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    tracing::info!("tileboard exiting");
    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Flash message expiry
        app.update_timers();

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
