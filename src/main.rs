//! Unit Converter
//!
//! A terminal length converter. Type a value, pick the units to convert
//! from and to, and the rounded result updates as you go.

use std::io;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use unit_converter::application::App;
use unit_converter::infrastructure::env_filter;
use unit_converter::presentation::{render_ui, InputHandler};

/// Entry point for the unit converter.
///
/// Installs logging, sets up the terminal, and runs the event loop until the
/// user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so a redirect captures it without touching the screen
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Redraws after every key press and stops once the app is flagged to quit.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
        }
    }
    Ok(())
}
