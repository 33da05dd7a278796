/*
[INPUT]:  TUI app state for UI components
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding or renaming panels
*/

mod datasets;
mod layout;
mod logs;
mod modal;
mod result;
mod session;
mod subtasks;
mod task_types;

pub(super) use datasets::draw_datasets;
pub(super) use layout::draw_tabs;
pub(super) use logs::draw_logs;
pub(super) use modal::draw_modal;
pub(super) use result::draw_result;
pub(super) use session::draw_session;
pub(super) use subtasks::draw_subtasks;
pub(super) use task_types::draw_task_types;
