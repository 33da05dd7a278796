/*
[INPUT]:  User-triggered operations and adapter responses
[OUTPUT]: Controller state driving panel rendering
[POS]:    UI controller core - selection state machine and operations
[UPDATE]: When workflow operations or selection rules change
*/

use taskpick_adapter::{TaskpickClient, TaskpickError};
use thiserror::Error;
use tracing::{debug, info};

/// Progression through the selection workflow.
///
/// Requesting a subtask in `NoSelection` is rejected locally; the server
/// never sees out-of-order requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    NoSelection,
    TypeSelected(String),
    SubtaskSelected { task_type: String, subtask: String },
}

impl Selection {
    /// The remembered task type, if any
    pub fn task_type(&self) -> Option<&str> {
        match self {
            Selection::NoSelection => None,
            Selection::TypeSelected(task_type)
            | Selection::SubtaskSelected { task_type, .. } => Some(task_type.as_str()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Client(#[from] TaskpickError),

    #[error("no task type selected")]
    NoTaskTypeSelected,
}

impl ControllerError {
    /// The server's rejection text, when the failure should be shown as a
    /// blocking dialog rather than a status-line note
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            ControllerError::Client(err) => err.rejection_message(),
            _ => None,
        }
    }
}

/// Translates user interactions into HTTP requests and holds the rendered
/// server responses. One instance per UI session; nothing is shared.
#[derive(Debug)]
pub struct Controller {
    client: TaskpickClient,
    selection: Selection,
    session_id: Option<String>,
    subtasks: Vec<String>,
    datasets: Vec<String>,
    result_message: Option<String>,
}

impl Controller {
    pub fn new(client: TaskpickClient) -> Self {
        Self {
            client,
            selection: Selection::NoSelection,
            session_id: None,
            subtasks: Vec::new(),
            datasets: Vec::new(),
            result_message: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Session panel text, matching the original page's label
    pub fn session_display(&self) -> Option<String> {
        self.session_id.as_ref().map(|id| format!("Сессия: {id}"))
    }

    pub fn subtasks(&self) -> &[String] {
        &self.subtasks
    }

    pub fn datasets(&self) -> &[String] {
        &self.datasets
    }

    pub fn result_message(&self) -> Option<&str> {
        self.result_message.as_deref()
    }

    /// Start a session and remember its identifier
    pub async fn start_session(&mut self) -> Result<(), ControllerError> {
        let response = self.client.start_session().await?;
        info!(session_id = %response.session_id, "session started");
        self.session_id = Some(response.session_id);
        Ok(())
    }

    /// Select a task type and fetch its subtasks.
    ///
    /// Any string is forwarded unvalidated, manual entry included; the
    /// server decides what it accepts. The type is remembered before the
    /// request goes out, so a later subtask request uses it even if this
    /// one was rejected. On rejection the previously rendered subtask list
    /// is left untouched.
    pub async fn select_task_type(&mut self, task_type: &str) -> Result<(), ControllerError> {
        debug!(task_type, "selecting task type");
        self.selection = Selection::TypeSelected(task_type.to_string());

        let response = self.client.select_task_type(task_type).await?;
        info!(task_type, count = response.subtasks.len(), "subtasks received");
        self.subtasks = response.subtasks;
        Ok(())
    }

    /// Select a subtask under the remembered task type and fetch datasets
    pub async fn select_subtask(&mut self, subtask: &str) -> Result<(), ControllerError> {
        let task_type = self
            .selection
            .task_type()
            .ok_or(ControllerError::NoTaskTypeSelected)?
            .to_string();

        debug!(%task_type, subtask, "selecting subtask");
        let response = self.client.select_subtask(&task_type, subtask).await?;
        info!(%task_type, subtask, count = response.datasets.len(), "datasets received");
        self.datasets = response.datasets;
        self.selection = Selection::SubtaskSelected {
            task_type,
            subtask: subtask.to_string(),
        };
        Ok(())
    }

    /// Submit a free-text custom task and remember the server's reply.
    /// The text goes out as-is, empty included; no client-side validation.
    pub async fn submit_custom_task(&mut self, task: &str) -> Result<(), ControllerError> {
        debug!(task, "submitting custom task");
        let response = self.client.submit_custom_task(task).await?;
        self.result_message = Some(response.message);
        Ok(())
    }
}
