//! Terminal UI rendering a waste collection duty calendar for one schedule year.

mod app;
mod input;
mod ui;

use std::{io, time::Duration as StdDuration};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use kubelek_core::{builtin, calendar::DutyCalendar};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::input::Action;

fn main() -> Result<()> {
    // The schedule is compiled-in configuration; a failure here is a defect
    // in the data, reported before touching the terminal.
    let calendar = DutyCalendar::new(
        builtin::SCHEDULE_YEAR,
        &builtin::collection_days(),
        &builtin::family_rotation(),
    )?;

    // App state
    let app = App::new(calendar);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            match input::handle_key_event(key, &mut app) {
                Action::Quit => break,
                Action::None => {}
            }
        }
    }

    Ok(())
}
