//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: event title and status message
//! - `SummaryPanel`: selected labels, total, form value, book button
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SeatMap`: the seat grid with cursor, scrolling, and mouse hit testing
//!
//! Components receive external data as "props" (struct fields or
//! constructor arguments), never by reaching into global state:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! SeatMap::new(&mut tui.seat_map, app.selector.grid()).render(frame, area);
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod seat_map;
pub mod summary_panel;
pub use seat_map::{SeatMap, SeatMapEvent, SeatMapState};
pub use summary_panel::SummaryPanel;
