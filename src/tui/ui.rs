use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{SeatMap, SummaryPanel, TitleBar};

/// Width of the booking panel on the right.
const PANEL_WIDTH: u16 = 38;

const HELP_TEXT: &str = " ←↑↓→/hjkl move  Space/Enter/click toggle  b book  q quit ";

/// Split the frame into title, seat map, booking panel, and help line.
pub fn layout(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(area);
    let [map_area, panel_area] =
        Layout::horizontal([Min(0), Length(PANEL_WIDTH)]).areas(main_area);
    [title_area, map_area, panel_area, help_area]
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, map_area, panel_area, help_area] = layout(frame.area());

    TitleBar::new(app.title.clone(), app.status_message.clone()).render(frame, title_area);

    SeatMap::new(&mut tui.seat_map, app.selector.grid()).render(frame, map_area);

    SummaryPanel::new(
        app.selector.render(),
        app.selector.unit_price(),
        app.selector.grid().occupancy(),
        app.field_name.clone(),
    )
    .render(frame, panel_area);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
