/*
[INPUT]:  Controller subtask list and list selection state
[OUTPUT]: Subtask list rendered into Ratatui frame
[POS]:    TUI UI subtask list rendering
[UPDATE]: When subtask presentation changes
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::tui::app::{AppState, Focus};
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_subtasks(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let items: Vec<ListItem> = if app.controller.subtasks().is_empty() {
        vec![ListItem::new("Select a task type first")]
    } else {
        app.controller
            .subtasks()
            .iter()
            .map(|subtask| ListItem::new(subtask.clone()))
            .collect()
    };

    let title = if app.focus == Focus::Subtasks {
        "Подзадачи [focused]"
    } else {
        "Подзадачи"
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(title),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.subtask_list_state);
}
