/*
[INPUT]:  Controller state and log buffer
[OUTPUT]: Ratatui-based TUI for the task-selection workflow
[POS]:    TUI module for taskpick binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};
