/*
[INPUT]:  Controller, log buffer, list selection state
[OUTPUT]: AppState helpers for TUI rendering and workflow control
[POS]:    TUI app state and operation dispatch
[UPDATE]: When panels, tabs, or workflow operations change
*/

use ratatui::widgets::ListState;

use taskpick_tui::Controller;

use super::LogBufferHandle;

/// Fixed task-type palette offered by the original page, alongside the
/// free-text input
fn default_task_types() -> Vec<String> {
    vec![
        String::from("Tabular"),
        String::from("LLM"),
        String::from("CV"),
        String::from("Audio"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Workflow,
    Logs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    TaskTypes,
    Subtasks,
}

pub(super) enum ActiveModal {
    /// Blocking error dialog carrying the server's rejection text
    Error(String),
    /// Free-text task type entry
    ManualType { value: String },
    /// Free-text custom task entry
    CustomTask { value: String },
}

pub(super) struct AppState {
    pub(super) controller: Controller,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) task_types: Vec<String>,
    pub(super) type_list_state: ListState,
    pub(super) subtask_list_state: ListState,
    pub(super) focus: Focus,
    pub(super) current_tab: Tab,
    pub(super) status_message: String,
    pub(super) active_modal: Option<ActiveModal>,
}

impl AppState {
    pub(super) fn new(controller: Controller, log_buffer: LogBufferHandle) -> Self {
        let mut type_list_state = ListState::default();
        type_list_state.select(Some(0));
        Self {
            controller,
            log_buffer,
            task_types: default_task_types(),
            type_list_state,
            subtask_list_state: ListState::default(),
            focus: Focus::TaskTypes,
            current_tab: Tab::Workflow,
            status_message: "Ready".to_string(),
            active_modal: None,
        }
    }

    pub(super) fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Workflow => Tab::Logs,
            Tab::Logs => Tab::Workflow,
        };
    }

    pub(super) fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub(super) fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::TaskTypes => Focus::Subtasks,
            Focus::Subtasks => Focus::TaskTypes,
        };
    }

    pub(super) fn open_manual_type(&mut self) {
        self.active_modal = Some(ActiveModal::ManualType {
            value: String::new(),
        });
    }

    pub(super) fn open_custom_task(&mut self) {
        self.active_modal = Some(ActiveModal::CustomTask {
            value: String::new(),
        });
    }

    pub(super) fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let (state, len) = match self.focus {
            Focus::TaskTypes => (&mut self.type_list_state, self.task_types.len()),
            Focus::Subtasks => (
                &mut self.subtask_list_state,
                self.controller.subtasks().len(),
            ),
        };
        if len == 0 {
            state.select(None);
            return;
        }
        let current = state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        state.select(Some(next));
    }

    pub(super) async fn start_session(&mut self) {
        match self.controller.start_session().await {
            Ok(()) => {
                self.status_message = self
                    .controller
                    .session_display()
                    .unwrap_or_else(|| "session started".to_string());
            }
            Err(err) => self.status_message = format!("start session failed: {err}"),
        }
    }

    /// Activate the entry the focused list currently highlights
    pub(super) async fn activate_selected(&mut self) {
        match self.focus {
            Focus::TaskTypes => {
                let Some(task_type) = self
                    .type_list_state
                    .selected()
                    .and_then(|idx| self.task_types.get(idx))
                    .cloned()
                else {
                    self.status_message = "no task type highlighted".to_string();
                    return;
                };
                self.select_task_type(task_type).await;
            }
            Focus::Subtasks => {
                let Some(subtask) = self
                    .subtask_list_state
                    .selected()
                    .and_then(|idx| self.controller.subtasks().get(idx))
                    .cloned()
                else {
                    self.status_message = "no subtask highlighted".to_string();
                    return;
                };
                self.select_subtask(subtask).await;
            }
        }
    }

    pub(super) async fn select_task_type(&mut self, task_type: String) {
        match self.controller.select_task_type(&task_type).await {
            Ok(()) => {
                let selected = if self.controller.subtasks().is_empty() {
                    None
                } else {
                    Some(0)
                };
                self.subtask_list_state.select(selected);
                self.focus = Focus::Subtasks;
                self.status_message = format!("task type selected: {task_type}");
            }
            Err(err) => match err.rejection_message() {
                // Server rejection halts the flow behind a blocking dialog;
                // the subtask panel keeps its previous content.
                Some(message) => self.active_modal = Some(ActiveModal::Error(message.to_string())),
                None => self.status_message = format!("select task type failed: {err}"),
            },
        }
    }

    pub(super) async fn select_subtask(&mut self, subtask: String) {
        match self.controller.select_subtask(&subtask).await {
            Ok(()) => {
                self.status_message = format!("subtask selected: {subtask}");
            }
            Err(err) => match err.rejection_message() {
                Some(message) => self.active_modal = Some(ActiveModal::Error(message.to_string())),
                None => self.status_message = format!("select subtask failed: {err}"),
            },
        }
    }

    pub(super) async fn submit_custom_task(&mut self, task: String) {
        match self.controller.submit_custom_task(&task).await {
            Ok(()) => {
                self.status_message = "custom task submitted".to_string();
            }
            Err(err) => self.status_message = format!("submit custom task failed: {err}"),
        }
    }
}
