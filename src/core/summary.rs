//! # Summary
//!
//! The outputs the selector keeps in sync with its selection. Everything
//! here is derived on demand by `SeatSelector::render()`; nothing is cached.

/// Shown in place of the label list when nothing is selected.
pub const EMPTY_LABELS: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Selected labels joined with `", "`, or `"-"`.
    pub labels: String,
    /// Total cost with currency sign and two decimals.
    pub cost: String,
    /// Selected ids joined with `","`; the form field value.
    pub hidden_value: String,
    /// Book control state. `None` when the host has no book control.
    pub book_enabled: Option<bool>,
}

impl Summary {
    pub fn book_enabled(&self) -> bool {
        self.book_enabled.unwrap_or(false)
    }
}
