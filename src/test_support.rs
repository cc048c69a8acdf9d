//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::grid::SeatGrid;
use crate::core::price::Price;
use crate::core::selector::{SeatSelector, SelectorOptions};
use crate::core::state::App;

pub fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// 3×3 grid (A1..C3), A2 booked, $12.50 a seat.
pub fn test_selector() -> SeatSelector {
    let booked = ids(&["A2"]);
    let grid = SeatGrid::generate(3, 3, &booked).expect("3x3 grid");
    SeatSelector::initialize(grid, &booked, Price::from_cents(1250), SelectorOptions::default())
}

/// Creates a test App around `test_selector()`.
pub fn test_app() -> App {
    App::new(test_selector(), "Test Night".to_string())
}
