/*
[INPUT]:  Controller session state
[OUTPUT]: Session panel rendered into Ratatui frame
[POS]:    TUI UI session panel rendering
[UPDATE]: When session display changes
*/

use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::AppState;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_session(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let text = match app.controller.session_display() {
        Some(display) => Span::styled(display, Style::default().fg(Color::LightGreen)),
        None => Span::styled(
            "Сессия не начата — [s]",
            Style::default().fg(Color::DarkGray),
        ),
    };

    let widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Session"),
    );
    frame.render_widget(widget, area);
}
