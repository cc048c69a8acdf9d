//! # Seat Grid
//!
//! The venue as rows of seats. A grid comes from one of two places:
//!
//! - [`SeatGrid::generate`]: synthesized from row/column counts, ids `A1`, `A2`, ...
//! - [`SeatGrid::from_layout`]: bound to a venue layout file listing every seat
//!
//! Either way the result is validated up front (unique, non-blank ids), so a
//! broken layout fails at start-up instead of halfway through a toggle.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::core::seat::{MAX_ROWS, Seat, seat_id};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row letters stop at `Z`.
    TooManyRows(u16),
    /// No seats at all (zero rows, zero columns, or an empty layout).
    Empty,
    BlankSeatId { row: usize },
    DuplicateSeat(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::TooManyRows(rows) => write!(
                f,
                "{rows} rows requested but row letters only go up to {MAX_ROWS} (A-Z)"
            ),
            GridError::Empty => write!(f, "seat grid has no seats"),
            GridError::BlankSeatId { row } => write!(f, "blank seat id in row {}", row + 1),
            GridError::DuplicateSeat(id) => write!(f, "seat id {id:?} appears more than once"),
        }
    }
}

impl std::error::Error for GridError {}

// ============================================================================
// Venue layout file
// ============================================================================

/// On-disk venue layout (TOML), one `[[rows]]` table per row.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct VenueLayout {
    #[serde(default)]
    pub rows: Vec<LayoutRow>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct LayoutRow {
    #[serde(default)]
    pub seats: Vec<LayoutSeat>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutSeat {
    pub id: String,
    pub label: Option<String>,
    #[serde(default)]
    pub booked: bool,
}

// ============================================================================
// Grid
// ============================================================================

/// Seat counts for the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    pub capacity: usize,
    pub booked: usize,
    pub available: usize,
}

#[derive(Debug, Clone)]
pub struct SeatGrid {
    rows: Vec<Vec<Seat>>,
    /// id → (row, col) position in `rows`
    index: HashMap<String, (usize, usize)>,
}

impl SeatGrid {
    /// Build a grid from explicit rows, validating ids.
    pub fn from_rows(rows: Vec<Vec<Seat>>) -> Result<Self, GridError> {
        let mut index = HashMap::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, seat) in row.iter().enumerate() {
                if seat.id.trim().is_empty() {
                    return Err(GridError::BlankSeatId { row: r });
                }
                if index.insert(seat.id.clone(), (r, c)).is_some() {
                    return Err(GridError::DuplicateSeat(seat.id.clone()));
                }
            }
        }
        if index.is_empty() {
            return Err(GridError::Empty);
        }
        Ok(Self { rows, index })
    }

    /// Generate `rows × cols` seats named `<row-letter><col>`; ids listed in
    /// `booked` start out booked.
    pub fn generate(rows: u16, cols: u16, booked: &[String]) -> Result<Self, GridError> {
        if rows > MAX_ROWS {
            return Err(GridError::TooManyRows(rows));
        }
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let grid_rows = (1..=rows)
            .map(|r| {
                (1..=cols)
                    .filter_map(|c| seat_id(r, c))
                    .map(|id| {
                        if booked.contains(&id) {
                            Seat::new(id).booked()
                        } else {
                            Seat::new(id)
                        }
                    })
                    .collect()
            })
            .collect();

        debug!("Generated {rows}x{cols} seat grid ({} pre-booked ids)", booked.len());
        Self::from_rows(grid_rows)
    }

    /// Bind to a venue layout. Seats without a label use their id.
    pub fn from_layout(layout: VenueLayout) -> Result<Self, GridError> {
        let rows = layout
            .rows
            .into_iter()
            .map(|row| {
                row.seats
                    .into_iter()
                    .map(|entry| {
                        let id = entry.id.trim().to_string();
                        let mut seat = Seat::new(id);
                        if let Some(label) = entry.label {
                            seat = seat.with_label(label);
                        }
                        if entry.booked {
                            seat = seat.booked();
                        }
                        seat
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> &[Vec<Seat>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn seat(&self, id: &str) -> Option<&Seat> {
        let &(r, c) = self.index.get(id)?;
        self.rows.get(r)?.get(c)
    }

    pub(crate) fn seat_mut(&mut self, id: &str) -> Option<&mut Seat> {
        let &(r, c) = self.index.get(id)?;
        self.rows.get_mut(r)?.get_mut(c)
    }

    /// Seat at a 0-based grid position (rows may be ragged).
    pub fn seat_at(&self, row: usize, col: usize) -> Option<&Seat> {
        self.rows.get(row)?.get(col)
    }

    /// 0-based position of a seat id.
    pub fn position(&self, id: &str) -> Option<(usize, usize)> {
        self.index.get(id).copied()
    }

    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flatten()
    }

    /// Mark the given ids booked. Returns the ids that name no seat.
    pub(crate) fn mark_booked<'a>(&mut self, ids: &'a [String]) -> Vec<&'a str> {
        let mut unknown = Vec::new();
        for id in ids {
            match self.seat_mut(id) {
                Some(seat) => seat.mark_booked(),
                None => unknown.push(id.as_str()),
            }
        }
        unknown
    }

    pub fn occupancy(&self) -> Occupancy {
        let capacity = self.len();
        let booked = self.seats().filter(|s| s.is_booked()).count();
        Occupancy {
            capacity,
            booked,
            available: capacity - booked,
        }
    }
}

/// Split a stored booking list such as `"A1, A2,,B3"` into ids.
pub fn parse_booked_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
