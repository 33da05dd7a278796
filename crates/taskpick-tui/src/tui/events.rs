/*
[INPUT]:  Crossterm key events and modal state
[OUTPUT]: TUI event routing into AppState operations
[POS]:    TUI event handling
[UPDATE]: When hotkeys or modal flows change
*/

use crossterm::event::KeyCode;

use super::app::{ActiveModal, AppState, Tab};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) async fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    if app.active_modal.is_some() {
        handle_modal_key_event(app, key).await;
        return false;
    }

    match key {
        KeyCode::Char('q') => true,
        KeyCode::Char('s') => {
            app.start_session().await;
            false
        }
        KeyCode::Char('m') => {
            app.open_manual_type();
            false
        }
        KeyCode::Char('c') => {
            app.open_custom_task();
            false
        }
        KeyCode::Tab => {
            app.next_tab();
            false
        }
        KeyCode::Char('1') => {
            app.set_tab(Tab::Workflow);
            false
        }
        KeyCode::Char('2') => {
            app.set_tab(Tab::Logs);
            false
        }
        KeyCode::Left | KeyCode::Right => {
            app.switch_focus();
            false
        }
        KeyCode::Up => {
            app.move_selection(-1);
            false
        }
        KeyCode::Down => {
            app.move_selection(1);
            false
        }
        KeyCode::Enter => {
            app.activate_selected().await;
            false
        }
        _ => false,
    }
}

enum ModalSubmit {
    ManualType(String),
    CustomTask(String),
}

enum TextEdit {
    Handled,
    Cancel,
    Submit(String),
}

fn edit_text(value: &mut String, key: KeyCode) -> TextEdit {
    match key {
        KeyCode::Esc => TextEdit::Cancel,
        KeyCode::Backspace => {
            value.pop();
            TextEdit::Handled
        }
        KeyCode::Char(ch) => {
            value.push(ch);
            TextEdit::Handled
        }
        KeyCode::Enter => TextEdit::Submit(value.clone()),
        _ => TextEdit::Handled,
    }
}

async fn handle_modal_key_event(app: &mut AppState, key: KeyCode) {
    let submit = match app.active_modal.as_mut() {
        Some(ActiveModal::Error(_)) => {
            // Blocking dialog: only a dismiss key closes it, nothing else reacts
            if matches!(key, KeyCode::Enter | KeyCode::Esc) {
                app.close_modal();
            }
            return;
        }
        Some(ActiveModal::ManualType { value }) => match edit_text(value, key) {
            TextEdit::Handled => return,
            TextEdit::Cancel => {
                app.close_modal();
                return;
            }
            TextEdit::Submit(text) => ModalSubmit::ManualType(text),
        },
        Some(ActiveModal::CustomTask { value }) => match edit_text(value, key) {
            TextEdit::Handled => return,
            TextEdit::Cancel => {
                app.close_modal();
                return;
            }
            TextEdit::Submit(text) => ModalSubmit::CustomTask(text),
        },
        None => return,
    };

    app.close_modal();
    match submit {
        ModalSubmit::ManualType(task_type) => app.select_task_type(task_type).await,
        ModalSubmit::CustomTask(task) => app.submit_custom_task(task).await,
    }
}
