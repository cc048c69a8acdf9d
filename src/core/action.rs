//! # Actions
//!
//! Everything that can happen to the widget becomes an `Action`.
//! User hits Space on a seat? That's `Action::ToggleSeat(id)`.
//! User presses `b`? That's `Action::Book`.
//!
//! `update()` applies an action to the state and returns an `Effect` for
//! the adapter to carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::form::BookingForm;
use crate::core::selector::Toggle;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleSeat(String),
    Book,
    Quit,
}

/// Side effects the adapter must perform after `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Hand the form off for submission; the session is over.
    Submit(BookingForm),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::ToggleSeat(id) => {
            let outcome = app.selector.toggle_seat(&id);
            let seat = app.selector.grid().seat(&id);
            app.status_message = match (outcome, seat) {
                (Toggle::Selected, Some(seat)) => format!("Selected {}", seat.label),
                (Toggle::Deselected, Some(seat)) => format!("Released {}", seat.label),
                (Toggle::Ignored, Some(seat)) => match seat.tooltip() {
                    Some(tip) => format!("{}: {}", seat.label, tip),
                    None => app.status_message.clone(),
                },
                (_, None) => format!("No seat {id}"),
            };
            Effect::None
        }
        Action::Book => match app.selector.render().book_enabled {
            Some(true) => {
                let form = BookingForm::from_selector(&app.selector, &app.field_name);
                info!(
                    "Booking {} seat(s): {} for {}",
                    form.quantity,
                    form.value(),
                    form.total
                );
                app.status_message = format!("Booking {}", form.value());
                Effect::Submit(form)
            }
            Some(false) => {
                app.status_message = String::from("Select at least one seat to book");
                Effect::None
            }
            None => {
                debug!("No book control; ignoring Book");
                Effect::None
            }
        },
        Action::Quit => Effect::Quit,
    }
}
