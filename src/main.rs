//! barge - pick a source and destination remote and stage a transfer
//!
//! A terminal front-end for an rclone-style listing daemon: choose two
//! distinct remotes, peek at their top-level contents, and see when the
//! pair is ready for a transfer.

use std::io::{self, stdout};
use std::panic;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};

mod config;
mod errors;
mod fetch;
mod input;
mod remote;
mod state;
mod ui;

use config::Config;
use errors::AppResult;
use state::Slot;
use state::app::App;
use ui::{SlotPanel, StatusBar};

/// Set up panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Initialize the terminal for TUI mode
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore terminal to normal mode
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Main event loop
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    app.request_catalog();

    loop {
        app.poll_fetches();

        terminal.draw(|frame| {
            let size = frame.area();

            let main_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(5),    // Panels (takes remaining space)
                    Constraint::Length(1), // Status bar
                ])
                .split(size);

            let panel_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(main_chunks[0]);

            frame.render_widget(SlotPanel::new(app, Slot::Source), panel_chunks[0]);
            frame.render_widget(SlotPanel::new(app, Slot::Destination), panel_chunks[1]);
            frame.render_widget(StatusBar::new(app), main_chunks[1]);
        })?;

        // Shorter poll timeout while fetches are live (smoother spinner)
        let poll_timeout = if app.fetch_in_flight() {
            app.tick_spinner();
            Duration::from_millis(50)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn main() -> AppResult<()> {
    env_logger::init();
    setup_panic_hook();

    let config = Config::load();
    let mut app = App::new(config)?;

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal()?;

    result?;
    Ok(())
}
