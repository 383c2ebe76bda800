//! classgrid-tui - interactive timetable grid using Ratatui

pub mod app;
pub mod components;
pub mod keybindings;
pub mod theme;
pub mod ui;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use tracing::{debug, info};

/// Run the TUI application until the user quits
pub fn run(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut ui = ui::Ui::new();
    info!(sessions = app.schedule.len(), mode = %app.state.mode, "Starting TUI");

    let result = run_loop(&mut terminal, &mut app, &mut ui);

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

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, ui: &mut ui::Ui) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui.render(f, app))?;

        // Nothing changes between events, so block until the next one
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.status_message = None;
                if !app.handle_key(key.code, key.modifiers) {
                    debug!(code = ?key.code, modifiers = ?key.modifiers, "Unbound key");
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    ui.handle_click(mouse.column, mouse.row, app);
                }
                MouseEventKind::ScrollUp => app.scroll = app.scroll.saturating_sub(1),
                MouseEventKind::ScrollDown => app.scroll = app.scroll.saturating_add(1),
                _ => {}
            },
            _ => {}
        }

        if app.should_quit {
            info!("Quitting TUI");
            break;
        }
    }

    Ok(())
}
