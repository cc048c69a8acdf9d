//! # Booking Form
//!
//! Snapshot of the selection at the moment the user books. The actual
//! booking request happens outside this program; we only produce the
//! payload that a form post would carry.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io;

use crate::OutputFormat;
use crate::core::price::Price;
use crate::core::selector::SeatSelector;

pub const DEFAULT_FIELD_NAME: &str = "selected_seats";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingForm {
    pub field_name: String,
    pub seats: Vec<String>,
    pub labels: Vec<String>,
    pub quantity: usize,
    pub unit_price: Price,
    pub total: Price,
}

#[derive(Serialize)]
struct JsonSubmission<'a> {
    #[serde(flatten)]
    form: &'a BookingForm,
    /// Same comma-joined value the form field carries.
    value: String,
    submitted_at: DateTime<Utc>,
}

impl BookingForm {
    pub fn from_selector(selector: &SeatSelector, field_name: &str) -> Self {
        let selection = selector.selection();
        Self {
            field_name: field_name.to_string(),
            seats: selection.ids().to_vec(),
            labels: selection.labels().to_vec(),
            quantity: selection.len(),
            unit_price: selector.unit_price(),
            total: selector.total(),
        }
    }

    /// The hidden field value: ids joined with `","`.
    pub fn value(&self) -> String {
        self.seats.join(",")
    }

    /// `selected_seats=A1%2CB3`
    pub fn to_urlencoded(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&[(self.field_name.as_str(), self.value())])
    }

    pub fn to_json(&self, submitted_at: DateTime<Utc>) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonSubmission {
            form: self,
            value: self.value(),
            submitted_at,
        })
    }

    /// Render the payload in the requested format, stamped with the current time.
    pub fn encode(&self, format: OutputFormat) -> io::Result<String> {
        match format {
            OutputFormat::Urlencoded => self.to_urlencoded().map_err(io::Error::other),
            OutputFormat::Json => self.to_json(Utc::now()).map_err(io::Error::other),
        }
    }
}
