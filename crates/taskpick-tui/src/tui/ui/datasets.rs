/*
[INPUT]:  Controller dataset list
[OUTPUT]: Dataset panel rendered into Ratatui frame
[POS]:    TUI UI dataset list rendering (display-only, no selection)
[UPDATE]: When dataset presentation changes
*/

use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::tui::app::AppState;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_datasets(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let items: Vec<ListItem> = if app.controller.datasets().is_empty() {
        vec![ListItem::new("Select a subtask first")]
    } else {
        app.controller
            .datasets()
            .iter()
            .map(|dataset| ListItem::new(format!("- {dataset}")))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Датасеты"),
    );
    frame.render_widget(list, area);
}
