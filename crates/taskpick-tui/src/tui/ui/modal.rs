/*
[INPUT]:  Active modal state (error dialog or text entry)
[OUTPUT]: Modal overlay rendered into Ratatui frame
[POS]:    TUI UI modal rendering
[UPDATE]: When modal kinds or their layout change
*/

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::{ActiveModal, AppState};

pub(in crate::tui) fn draw_modal(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let Some(modal) = app.active_modal.as_ref() else {
        return;
    };

    let rect = centered_rect(area, 50, 20);
    frame.render_widget(Clear, rect);

    let (title, border_color, lines) = match modal {
        ActiveModal::Error(message) => (
            "Ошибка",
            Color::LightRed,
            vec![
                Line::from(Span::raw(message.clone())),
                Line::from(""),
                Line::from(Span::styled(
                    "[Enter] Close",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        ),
        ActiveModal::ManualType { value } => (
            "Manual Task Type",
            Color::Yellow,
            input_lines(value),
        ),
        ActiveModal::CustomTask { value } => ("Custom Task", Color::Yellow, input_lines(value)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);
    let widget = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, rect);
}

fn input_lines(value: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::raw(format!("{value}_"))),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Submit  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
