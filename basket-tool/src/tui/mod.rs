mod app;
mod input;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use app::BasketApp;

use crate::config::Settings;
use crate::error::BskError;

/// How often the loop wakes up without input, so alerts expire on time.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run(settings: &Settings) -> Result<(), BskError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = BasketApp::new(settings);
    info!(currency = %settings.currency, "started");

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut BasketApp,
) -> Result<(), BskError> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            input::handle_event(app, event);
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
