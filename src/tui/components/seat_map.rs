//! # Seat Map Component
//!
//! Draws the seat grid, tracks the keyboard cursor, and turns key presses
//! and mouse clicks into seat toggles.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SeatMapState` lives in `TuiState`
//! - `SeatMap` is created each frame with borrowed state and the grid
//!
//! Booked seats never emit `Toggle`; activating one yields `Unavailable`
//! so the caller can show the tooltip instead.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use crate::core::grid::SeatGrid;
use crate::core::seat::{Seat, SeatState};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Blank columns between two seat cells.
const CELL_GAP: u16 = 1;

/// Persistent state for the seat map.
pub struct SeatMapState {
    /// 0-based (row, col) of the highlighted seat.
    pub cursor: (usize, usize),
    pub scroll_state: ScrollViewState,
    /// Inner area of the last render, for hit testing.
    pub viewport: Rect,
    /// Cell width of the last render, brackets included.
    pub cell_width: u16,
}

impl SeatMapState {
    pub fn new() -> Self {
        Self {
            cursor: (0, 0),
            scroll_state: ScrollViewState::default(),
            viewport: Rect::default(),
            cell_width: 0,
        }
    }

    /// Map a screen position to a grid position, using the last render's geometry.
    pub fn hit_test(&self, column: u16, row: u16, grid: &SeatGrid) -> Option<(usize, usize)> {
        if !self.viewport.contains(Position { x: column, y: row }) || self.cell_width == 0 {
            return None;
        }
        let offset = self.scroll_state.offset();
        let content_x = usize::from(column - self.viewport.x) + usize::from(offset.x);
        let content_y = usize::from(row - self.viewport.y) + usize::from(offset.y);

        let stride = usize::from(self.stride());
        if content_x % stride >= usize::from(self.cell_width) {
            return None; // gap between cells
        }
        let pos = (content_y, content_x / stride);
        grid.seat_at(pos.0, pos.1).map(|_| pos)
    }

    fn stride(&self) -> u16 {
        self.cell_width.saturating_add(CELL_GAP)
    }

    /// Scroll so the cursor cell is inside the viewport.
    fn keep_cursor_visible(&mut self, viewport: Rect) {
        let cell_x = self.cursor.1.saturating_mul(usize::from(self.stride()));
        let cell_end = cell_x.saturating_add(usize::from(self.cell_width));
        let cell_y = self.cursor.0;
        let offset = self.scroll_state.offset();
        let (mut x, mut y) = (usize::from(offset.x), usize::from(offset.y));

        if cell_x < x {
            x = cell_x;
        } else if cell_end > x + usize::from(viewport.width) {
            x = cell_end.saturating_sub(usize::from(viewport.width));
        }
        if cell_y < y {
            y = cell_y;
        } else if cell_y >= y + usize::from(viewport.height) {
            y = (cell_y + 1).saturating_sub(usize::from(viewport.height));
        }
        self.scroll_state.set_offset(Position {
            x: clamp_u16(x),
            y: clamp_u16(y),
        });
    }
}

impl Default for SeatMapState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the seat map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatMapEvent {
    Toggle(String),
    /// A booked seat was activated.
    Unavailable(String),
}

/// Transient render wrapper for the seat map.
pub struct SeatMap<'a> {
    state: &'a mut SeatMapState,
    grid: &'a SeatGrid,
}

impl<'a> SeatMap<'a> {
    pub fn new(state: &'a mut SeatMapState, grid: &'a SeatGrid) -> Self {
        Self { state, grid }
    }

    fn row_len(&self, row: usize) -> usize {
        self.grid.rows().get(row).map_or(0, Vec::len)
    }

    fn clamp_col(&mut self) {
        let len = self.row_len(self.state.cursor.0);
        self.state.cursor.1 = self.state.cursor.1.min(len.saturating_sub(1));
    }

    fn activate(&self, row: usize, col: usize) -> Option<SeatMapEvent> {
        let seat = self.grid.seat_at(row, col)?;
        if seat.is_booked() {
            Some(SeatMapEvent::Unavailable(seat.id.clone()))
        } else {
            Some(SeatMapEvent::Toggle(seat.id.clone()))
        }
    }

    /// Seat under the cursor, if the cursor is on one.
    pub fn cursor_seat(&self) -> Option<&'a Seat> {
        let (row, col) = self.state.cursor;
        self.grid.seat_at(row, col)
    }
}

impl EventHandler for SeatMap<'_> {
    type Event = SeatMapEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SeatMapEvent> {
        let rows = self.grid.row_count();
        match *event {
            TuiEvent::CursorUp => {
                self.state.cursor.0 = self.state.cursor.0.saturating_sub(1);
                self.clamp_col();
                None
            }
            TuiEvent::CursorDown => {
                self.state.cursor.0 = (self.state.cursor.0 + 1).min(rows.saturating_sub(1));
                self.clamp_col();
                None
            }
            TuiEvent::CursorLeft => {
                self.state.cursor.1 = self.state.cursor.1.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                self.state.cursor.1 += 1;
                self.clamp_col();
                None
            }
            TuiEvent::CursorHome => {
                self.state.cursor.1 = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.state.cursor.1 = self.row_len(self.state.cursor.0).saturating_sub(1);
                None
            }
            TuiEvent::Toggle => {
                let (row, col) = self.state.cursor;
                self.activate(row, col)
            }
            TuiEvent::MouseClick(column, row) => {
                let (r, c) = self.state.hit_test(column, row, self.grid)?;
                self.state.cursor = (r, c);
                self.activate(r, c)
            }
            _ => None,
        }
    }
}

impl Component for SeatMap<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::bordered()
            .title(" Seats ")
            .border_style(Style::default().fg(Color::DarkGray));
        if let Some(seat) = self.cursor_seat()
            && let Some(tip) = seat.tooltip()
        {
            block = block.title_bottom(Line::from(format!(" {}: {} ", seat.label, tip)).centered());
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cell_width = cell_width(self.grid);
        self.state.viewport = inner;
        self.state.cell_width = cell_width;
        self.state.keep_cursor_visible(inner);

        // Content past u16::MAX columns or rows is clipped.
        let stride = usize::from(self.state.stride());
        let content_width =
            clamp_u16(self.grid.col_count().saturating_mul(stride)).max(inner.width);
        let content_height = clamp_u16(self.grid.row_count()).max(inner.height);
        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Never)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (r, row) in self.grid.rows().iter().enumerate() {
            let Ok(y) = u16::try_from(r) else { break };
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (c, seat) in row.iter().enumerate() {
                let mut style = seat_style(seat.state());
                if (r, c) == self.state.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(cell_text(&seat.id, cell_width), style));
                spans.push(Span::raw(" ".repeat(CELL_GAP as usize)));
            }
            let line_area = Rect::new(0, y, content_width, 1);
            scroll_view.render_widget(Line::from(spans), line_area);
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// Widest seat id plus two brackets.
fn cell_width(grid: &SeatGrid) -> u16 {
    let widest = grid.seats().map(|s| s.id.width()).max().unwrap_or(1);
    clamp_u16(widest.saturating_add(2))
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// `[A1 ]`: id centred between brackets, padded to `width` columns.
fn cell_text(id: &str, width: u16) -> String {
    let inner = (width as usize).saturating_sub(2);
    let pad = inner.saturating_sub(id.width());
    let left = pad / 2;
    format!("[{}{}{}]", " ".repeat(left), id, " ".repeat(pad - left))
}

fn seat_style(state: SeatState) -> Style {
    match state {
        SeatState::Available => Style::default().fg(Color::Gray),
        SeatState::Selected => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        SeatState::Booked => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
    }
}
