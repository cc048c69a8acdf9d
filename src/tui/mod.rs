//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps until an event arrives, drains
//! every pending event, and then draws once. Each event runs to
//! completion (update state, mark dirty) before the next is looked at.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::form::BookingForm;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{SeatMap, SeatMapEvent, SeatMapState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long the loop sleeps when idle.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub seat_map: SeatMapState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            seat_map: SeatMapState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the loop should do after an event.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
    Submit(BookingForm),
}

fn flow_from(effect: Effect) -> Flow {
    match effect {
        Effect::None => Flow::Continue,
        Effect::Quit => Flow::Quit,
        Effect::Submit(form) => Flow::Submit(form),
    }
}

/// Route one event to the core or the seat map.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Flow {
    match event {
        TuiEvent::Resize => Flow::Continue,
        TuiEvent::Quit | TuiEvent::ForceQuit => flow_from(update(app, Action::Quit)),
        TuiEvent::Book => flow_from(update(app, Action::Book)),
        _ => {
            let mut map = SeatMap::new(&mut tui.seat_map, app.selector.grid());
            match map.handle_event(&event) {
                Some(SeatMapEvent::Toggle(id)) => flow_from(update(app, Action::ToggleSeat(id))),
                Some(SeatMapEvent::Unavailable(id)) => {
                    // No toggle for booked seats, just the tooltip.
                    if let Some(seat) = app.selector.grid().seat(&id)
                        && let Some(tip) = seat.tooltip()
                    {
                        app.status_message = format!("{}: {}", seat.label, tip);
                    }
                    Flow::Continue
                }
                None => Flow::Continue,
            }
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Run the widget until the user books or quits.
///
/// Returns the booking form if the user booked, `None` if they quit.
pub fn run(mut app: App) -> std::io::Result<Option<BookingForm>> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = (|| {
        let _terminal_mode_guard = TerminalModeGuard::new()?;
        let mut needs_redraw = true; // Force first frame

        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
                needs_redraw = false;
            }

            let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
                continue;
            };
            needs_redraw = true;

            // Process first event + drain ALL pending events before next draw
            let mut pending = Some(first_event);
            while let Some(event) = pending {
                match handle_event(&mut app, &mut tui, event) {
                    Flow::Continue => {}
                    Flow::Quit => {
                        info!("User quit without booking");
                        return Ok(None);
                    }
                    Flow::Submit(form) => return Ok(Some(form)),
                }
                pending = poll_event_immediate()?;
            }
            debug!("Selection now: {}", app.selector.render().hidden_value);
        }
    })();

    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_keyboard_session_books() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        // A1, then down + right twice → B3
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Toggle), Flow::Continue);
        for event in [TuiEvent::CursorDown, TuiEvent::CursorRight, TuiEvent::CursorRight] {
            handle_event(&mut app, &mut tui, event);
        }
        handle_event(&mut app, &mut tui, TuiEvent::Toggle);

        match handle_event(&mut app, &mut tui, TuiEvent::Book) {
            Flow::Submit(form) => assert_eq!(form.value(), "A1,B3"),
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn test_book_disabled_when_empty() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Book), Flow::Continue);
    }

    #[test]
    fn test_booked_seat_shows_tooltip_only() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        handle_event(&mut app, &mut tui, TuiEvent::CursorRight);
        handle_event(&mut app, &mut tui, TuiEvent::Toggle);
        assert!(app.selector.selection().is_empty());
        assert_eq!(app.status_message, "A2: Already booked");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Quit), Flow::Quit);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit), Flow::Quit);
    }
}
