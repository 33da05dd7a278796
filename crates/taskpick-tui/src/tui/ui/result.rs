/*
[INPUT]:  Controller custom-task result message
[OUTPUT]: Result panel rendered into Ratatui frame
[POS]:    TUI UI result panel rendering
[UPDATE]: When result presentation changes
*/

use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::app::AppState;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_result(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let text = match app.controller.result_message() {
        Some(message) => Span::raw(message.to_string()),
        None => Span::styled(
            "Submit a custom task — [c]",
            Style::default().fg(Color::DarkGray),
        ),
    };

    let widget = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Result"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
