//! # TitleBar Component
//!
//! Top status bar: event title plus the latest status message.
//!
//! Purely presentational. It receives all data as props and has no
//! internal state:
//!
//! 1. **Status message**: `"Seatpick | Rock Concert | Selected A1"`
//! 2. **Default**: `"Seatpick | Rock Concert"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Event title (e.g. "Rock Concert")
    pub title: String,
    /// Status message (e.g. "Selected A1")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: String, status_message: String) -> Self {
        Self {
            title,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Seatpick | {}", self.title)
        } else {
            format!("Seatpick | {} | {}", self.title, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("Rock Concert".to_string(), "Selected A1".to_string());
        let text = render_text(&mut title_bar);
        assert!(text.contains("Seatpick | Rock Concert | Selected A1"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Rock Concert".to_string(), String::new());
        let text = render_text(&mut title_bar);
        assert!(text.contains("Seatpick | Rock Concert"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
