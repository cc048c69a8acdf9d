//! # Application State
//!
//! Core state for seatpick. Domain logic only: no TUI-specific types.
//! Presentation state (cursor, scroll offset) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── selector: SeatSelector   // grid, selection, unit price
//! ├── title: String            // event title shown in the title bar
//! ├── field_name: String       // form field the selection is posted under
//! └── status_message: String   // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::form::DEFAULT_FIELD_NAME;
use crate::core::selector::SeatSelector;

pub const WELCOME_MESSAGE: &str = "Pick your seats";

pub struct App {
    pub selector: SeatSelector,
    pub title: String,
    pub field_name: String,
    pub status_message: String,
}

impl App {
    pub fn new(selector: SeatSelector, title: String) -> Self {
        Self {
            selector,
            title,
            field_name: DEFAULT_FIELD_NAME.to_string(),
            status_message: String::from(WELCOME_MESSAGE),
        }
    }

    pub fn from_config(selector: SeatSelector, config: &ResolvedConfig) -> Self {
        Self {
            field_name: config.field_name.clone(),
            ..Self::new(selector, config.title.clone())
        }
    }
}
