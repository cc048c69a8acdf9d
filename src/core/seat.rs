//! # Seats
//!
//! A seat is one selectable cell of the venue grid. Its `booked` flag is
//! fixed once the selector is initialized; only `selected` changes
//! afterwards, and only through `SeatSelector::toggle_seat`.
//!
//! ```text
//!   available ──toggle──▶ selected
//!       ▲                    │
//!       └──────toggle────────┘
//!
//!   booked   (entered at initialization, never left)
//! ```

/// Highest row number that has a letter (`26` → `Z`).
pub const MAX_ROWS: u16 = 26;

/// Tooltip shown for seats that cannot be selected.
pub const BOOKED_TOOLTIP: &str = "Already booked";

/// Visual/semantic state of a seat, derived from its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatState {
    Available,
    Selected,
    Booked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub id: String,
    pub label: String,
    booked: bool,
    selected: bool,
}

impl Seat {
    /// An available seat whose label is its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            booked: false,
            selected: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn booked(mut self) -> Self {
        self.booked = true;
        self
    }

    pub fn is_booked(&self) -> bool {
        self.booked
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn state(&self) -> SeatState {
        if self.booked {
            SeatState::Booked
        } else if self.selected {
            SeatState::Selected
        } else {
            SeatState::Available
        }
    }

    /// Hover text; only booked seats have one.
    pub fn tooltip(&self) -> Option<&'static str> {
        self.booked.then_some(BOOKED_TOOLTIP)
    }

    /// Booking clears any selection marker: a booked seat is never selected.
    pub(crate) fn mark_booked(&mut self) {
        self.booked = true;
        self.selected = false;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        debug_assert!(!self.booked || !selected, "booked seat {} selected", self.id);
        self.selected = selected;
    }
}

/// Letter for a 1-based row number: 1 → `A`, 26 → `Z`, anything else → None.
pub fn row_letter(row: u16) -> Option<char> {
    if (1..=MAX_ROWS).contains(&row) {
        Some((b'A' + (row - 1) as u8) as char)
    } else {
        None
    }
}

/// Seat identifier for a 1-based row/column, e.g. `(2, 3)` → `"B3"`.
pub fn seat_id(row: u16, col: u16) -> Option<String> {
    row_letter(row).map(|letter| format!("{letter}{col}"))
}
