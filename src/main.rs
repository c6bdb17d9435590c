//! Burrow - Entry Point
//!
//! Loads the configuration, generates a level, then runs the terminal loop.

use std::io;
use std::fs::OpenOptions;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use burrow::data::GameConfig;
use burrow::game::LevelState;
use burrow::ui::App;

fn main() -> Result<()> {
    // Log to a file so output does not tear the terminal UI
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("burrow.log")
        .context("failed to open burrow.log")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .target(env_logger::Target::Pipe(Box::new(log_file)))
    .init();

    log::info!("Starting Burrow v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::load();
    let seed = config.dungeon.seed.unwrap_or_else(rand::random);
    log::info!("Level seed: {}", seed);

    // Bad generation parameters are fatal before the terminal is touched
    let mut level = LevelState::new(&config.level_config(seed))
        .context("failed to generate level")?;

    // Setup terminal, undoing raw mode if any later step fails
    enable_raw_mode()?;
    let mut terminal = restore_on_err(setup_terminal(&config.window.title), abandon_terminal)?;

    let mut app = App::new(config.palette.clone(), config.window.title.clone());

    let result = run_game_loop(&mut terminal, &mut app, &mut level);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Burrow shut down cleanly");
    result
}

/// Enter the alternate screen and build the ratatui terminal
fn setup_terminal(title: &str) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(title))?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Best-effort restore when setup fails halfway
fn abandon_terminal() {
    if let Err(e) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {}", e);
    }
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
        log::warn!("Failed to leave alternate screen: {}", e);
    }
}

/// Run `restore` when `result` is an error, then hand the result back
fn restore_on_err<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

/// Render, wait for a key, handle it
fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    level: &mut LevelState,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            app.render(frame, level);
        })?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events, not releases
            if key.kind == KeyEventKind::Press && app.handle_input(key, level)? {
                break;
            }
        }
    }

    Ok(())
}
