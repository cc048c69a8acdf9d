//! # Core Application Logic
//!
//! This module contains the seat selector itself.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • SeatSelector         │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Web      │
//!           │  Adapter   │              │  Adapter   │
//!           │ (ratatui)  │              │  (future)  │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`seat`]: `Seat` and row-letter naming
//! - [`grid`]: `SeatGrid`, generated or bound to a venue layout
//! - [`selection`]: ordered ids + labels
//! - [`price`]: unit price in cents
//! - [`selector`]: `SeatSelector`: initialize / toggle / render
//! - [`summary`]: the rendered outputs
//! - [`form`]: the booking form payload
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file, env, and CLI resolution

pub mod action;
pub mod config;
pub mod form;
pub mod grid;
pub mod price;
pub mod seat;
pub mod selection;
pub mod selector;
pub mod state;
pub mod summary;
