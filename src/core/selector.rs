//! # Seat Selector
//!
//! Owns the seat grid, the running selection, and the unit price. The
//! only mutation after [`SeatSelector::initialize`] is
//! [`SeatSelector::toggle_seat`]; [`SeatSelector::render`] derives the
//! label list, cost, form value, and book control state from scratch on
//! every call.
//!
//! ```text
//! SeatSelector
//! ├── grid: SeatGrid          // seats + booked / selected markers
//! ├── selection: Selection    // ids + labels in click order
//! ├── unit_price: Price       // fixed for the session
//! └── options: SelectorOptions
//! ```

use log::{debug, info, warn};

use crate::core::grid::SeatGrid;
use crate::core::price::Price;
use crate::core::selection::Selection;
use crate::core::summary::{EMPTY_LABELS, Summary};

/// Behaviour switches for the two ways the widget is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorOptions {
    /// Show seat labels in the summary; when false, ids are shown instead.
    pub use_labels: bool,
    /// Whether the host has a book control at all.
    pub book_control: bool,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            use_labels: true,
            book_control: true,
        }
    }
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
    /// Booked or unknown seat; nothing changed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct SeatSelector {
    grid: SeatGrid,
    selection: Selection,
    unit_price: Price,
    options: SelectorOptions,
}

impl SeatSelector {
    /// Bind the selector to a grid. Every id in `booked` is marked booked in
    /// addition to seats the grid already marks; ids that name no seat are
    /// logged and skipped.
    pub fn initialize(
        mut grid: SeatGrid,
        booked: &[String],
        unit_price: Price,
        options: SelectorOptions,
    ) -> Self {
        let unknown = grid.mark_booked(booked);
        if !unknown.is_empty() {
            warn!("Ignoring booked ids not present in the grid: {}", unknown.join(","));
        }

        let occupancy = grid.occupancy();
        info!(
            "Seat selector ready: {} seats ({} booked), unit price {}",
            occupancy.capacity, occupancy.booked, unit_price
        );

        Self {
            grid,
            selection: Selection::new(),
            unit_price,
            options,
        }
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    pub fn options(&self) -> SelectorOptions {
        self.options
    }

    /// Flip a seat between available and selected.
    pub fn toggle_seat(&mut self, id: &str) -> Toggle {
        let Some(seat) = self.grid.seat_mut(id) else {
            debug!("Toggle on unknown seat {id}");
            return Toggle::Ignored;
        };
        if seat.is_booked() {
            debug!("Toggle on booked seat {id} ignored");
            return Toggle::Ignored;
        }

        if self.selection.remove(id).is_some() {
            seat.set_selected(false);
            debug!("Deselected {id} ({} selected)", self.selection.len());
            Toggle::Deselected
        } else {
            self.selection.push(&seat.id, &seat.label);
            seat.set_selected(true);
            debug!("Selected {id} ({} selected)", self.selection.len());
            Toggle::Selected
        }
    }

    /// Current total: selected count × unit price.
    pub fn total(&self) -> Price {
        self.unit_price.times(self.selection.len())
    }

    /// Derive every synchronized output from the current selection.
    pub fn render(&self) -> Summary {
        let labels = if self.selection.is_empty() {
            EMPTY_LABELS.to_string()
        } else if self.options.use_labels {
            self.selection.labels().join(", ")
        } else {
            self.selection.ids().join(", ")
        };

        Summary {
            labels,
            cost: self.total().to_string(),
            hidden_value: self.selection.ids().join(","),
            book_enabled: self
                .options
                .book_control
                .then(|| !self.selection.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seat::Seat;
    use crate::test_support::{ids, test_selector};

    #[test]
    fn test_two_seats_scenario() {
        let mut selector = test_selector();
        assert_eq!(selector.toggle_seat("A1"), Toggle::Selected);
        assert_eq!(selector.toggle_seat("B3"), Toggle::Selected);

        let summary = selector.render();
        assert_eq!(summary.labels, "A1, B3");
        assert_eq!(summary.cost, "$25.00");
        assert_eq!(summary.hidden_value, "A1,B3");
        assert_eq!(summary.book_enabled, Some(true));
    }

    #[test]
    fn test_double_toggle_restores_empty_state() {
        let mut selector = test_selector();
        let before = selector.render();

        assert_eq!(selector.toggle_seat("A1"), Toggle::Selected);
        assert_eq!(selector.toggle_seat("A1"), Toggle::Deselected);

        let after = selector.render();
        assert_eq!(after, before);
        assert_eq!(after.labels, "-");
        assert_eq!(after.cost, "$0.00");
        assert_eq!(after.hidden_value, "");
        assert_eq!(after.book_enabled, Some(false));
        assert!(!selector.grid().seat("A1").unwrap().is_selected());
    }

    #[test]
    fn test_booked_seat_is_never_toggled() {
        let mut selector = test_selector();
        selector.toggle_seat("B1");
        let before = selector.render();

        assert_eq!(selector.toggle_seat("A2"), Toggle::Ignored);
        assert_eq!(selector.render(), before);
        assert!(!selector.grid().seat("A2").unwrap().is_selected());
    }

    #[test]
    fn test_unknown_seat_is_ignored() {
        let mut selector = test_selector();
        assert_eq!(selector.toggle_seat("Q7"), Toggle::Ignored);
        assert!(selector.selection().is_empty());
    }

    #[test]
    fn test_selected_marker_follows_selection() {
        let mut selector = test_selector();
        selector.toggle_seat("B2");
        assert!(selector.grid().seat("B2").unwrap().is_selected());
        selector.toggle_seat("B2");
        assert!(!selector.grid().seat("B2").unwrap().is_selected());
    }

    #[test]
    fn test_initialize_marks_extra_booked_ids() {
        let grid = SeatGrid::generate(1, 3, &[]).unwrap();
        let selector = SeatSelector::initialize(
            grid,
            &ids(&["A3", "not-a-seat"]),
            Price::from_cents(500),
            SelectorOptions::default(),
        );
        assert!(selector.grid().seat("A3").unwrap().is_booked());
        assert_eq!(selector.grid().occupancy().booked, 1);
    }

    #[test]
    fn test_labels_vs_ids() {
        let rows = vec![vec![
            Seat::new("A1").with_label("Front A1"),
            Seat::new("A2").with_label("Front A2"),
        ]];
        let grid = SeatGrid::from_rows(rows).unwrap();

        let mut labelled = SeatSelector::initialize(
            grid.clone(),
            &[],
            Price::from_cents(1000),
            SelectorOptions::default(),
        );
        labelled.toggle_seat("A2");
        labelled.toggle_seat("A1");
        let summary = labelled.render();
        assert_eq!(summary.labels, "Front A2, Front A1");
        assert_eq!(summary.hidden_value, "A2,A1");

        let mut plain = SeatSelector::initialize(
            grid,
            &[],
            Price::from_cents(1000),
            SelectorOptions {
                use_labels: false,
                ..Default::default()
            },
        );
        plain.toggle_seat("A2");
        plain.toggle_seat("A1");
        assert_eq!(plain.render().labels, "A2, A1");
    }

    #[test]
    fn test_without_book_control() {
        let grid = SeatGrid::generate(1, 2, &[]).unwrap();
        let mut selector = SeatSelector::initialize(
            grid,
            &[],
            Price::from_cents(100),
            SelectorOptions {
                book_control: false,
                ..Default::default()
            },
        );
        assert_eq!(selector.render().book_enabled, None);
        selector.toggle_seat("A1");
        let summary = selector.render();
        assert_eq!(summary.book_enabled, None);
        assert!(!summary.book_enabled());
        assert_eq!(summary.cost, "$1.00");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut selector = test_selector();
        selector.toggle_seat("B1");
        assert_eq!(selector.render(), selector.render());
    }
}
