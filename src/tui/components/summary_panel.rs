//! # Summary Panel Component
//!
//! Side panel mirroring the selector's rendered outputs: the selected
//! labels, the total cost, the form field value, and the book button.
//! Also shows the unit price, venue occupancy, and a colour legend.
//!
//! Stateless: everything comes in as props, built fresh each frame from
//! `SeatSelector::render()`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::grid::Occupancy;
use crate::core::price::Price;
use crate::core::summary::Summary;
use crate::tui::component::Component;

pub struct SummaryPanel {
    pub summary: Summary,
    pub unit_price: Price,
    pub occupancy: Occupancy,
    pub field_name: String,
}

impl SummaryPanel {
    pub fn new(summary: Summary, unit_price: Price, occupancy: Occupancy, field_name: String) -> Self {
        Self {
            summary,
            unit_price,
            occupancy,
            field_name,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let heading = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::styled("Selected", heading),
            Line::from(self.summary.labels.clone()),
            Line::default(),
            Line::styled("Total", heading),
            Line::from(Span::styled(
                self.summary.cost.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::styled(format!("{} per seat", self.unit_price), heading),
            Line::default(),
            Line::styled("Form", heading),
            Line::from(format!("{}={}", self.field_name, self.summary.hidden_value)),
            Line::default(),
            Line::styled(
                format!(
                    "{} seats · {} booked · {} free",
                    self.occupancy.capacity, self.occupancy.booked, self.occupancy.available
                ),
                heading,
            ),
            legend(),
        ];

        if let Some(enabled) = self.summary.book_enabled {
            let style = if enabled {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
            };
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(" Book (b) ", style)).centered());
        }
        lines
    }
}

fn legend() -> Line<'static> {
    Line::from(vec![
        Span::styled("[ ]", Style::default().fg(Color::Gray)),
        Span::raw(" free  "),
        Span::styled("[ ]", Style::default().bg(Color::Green)),
        Span::raw(" yours  "),
        Span::styled("[ ]", Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)),
        Span::raw(" booked"),
    ])
}

impl Component for SummaryPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Booking ")
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
