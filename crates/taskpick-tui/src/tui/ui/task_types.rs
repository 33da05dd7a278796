/*
[INPUT]:  Fixed task-type palette and list selection state
[OUTPUT]: Task type list rendered into Ratatui frame
[POS]:    TUI UI task type list rendering
[UPDATE]: When palette presentation changes
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::tui::app::{AppState, Focus};
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_task_types(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let items: Vec<ListItem> = app
        .task_types
        .iter()
        .map(|task_type| {
            let marker = if app.controller.selection().task_type() == Some(task_type.as_str()) {
                "* "
            } else {
                "  "
            };
            ListItem::new(format!("{marker}{task_type}"))
        })
        .collect();

    let title = if app.focus == Focus::TaskTypes {
        "Task Types [focused]"
    } else {
        "Task Types"
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
    frame.render_stateful_widget(list, area, &mut app.type_list_state);
}
