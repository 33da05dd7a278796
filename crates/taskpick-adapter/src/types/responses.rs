/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectTaskTypeResponse {
    pub subtasks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectSubtaskResponse {
    pub datasets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitCustomTaskResponse {
    pub message: String,
}

/// Application-level rejection body, paired with HTTP 400 by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorReply {
    pub error: String,
}

/// Either shape the selection endpoints may answer with on 2xx.
///
/// The observed server always pairs `{"error"}` with HTTP 400, but the
/// contract allows it alongside a success status as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectTaskTypeReply {
    Subtasks(SelectTaskTypeResponse),
    Rejected(ApiErrorReply),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectSubtaskReply {
    Datasets(SelectSubtaskResponse),
    Rejected(ApiErrorReply),
}
