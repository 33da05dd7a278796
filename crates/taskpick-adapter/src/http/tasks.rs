/*
[INPUT]:  Task type, subtask, and custom task selections
[OUTPUT]: Subtask lists, dataset lists, and submission status messages
[POS]:    HTTP layer - task-selection workflow endpoints
[UPDATE]: When adding new workflow endpoints or changing request bodies
*/

use crate::http::{Result, TaskpickClient, TaskpickError};
use crate::types::{
    SelectSubtaskReply, SelectSubtaskRequest, SelectSubtaskResponse, SelectTaskTypeReply,
    SelectTaskTypeRequest, SelectTaskTypeResponse, SubmitCustomTaskRequest,
    SubmitCustomTaskResponse,
};
use reqwest::{Method, StatusCode};

impl TaskpickClient {
    /// Request the subtasks available for a task type
    ///
    /// POST /select_task_type
    pub async fn select_task_type(&self, task_type: &str) -> Result<SelectTaskTypeResponse> {
        let req = SelectTaskTypeRequest {
            task_type: task_type.to_string(),
        };
        let builder = self.request(Method::POST, "/select_task_type")?.json(&req);
        match self.send_json(builder).await? {
            SelectTaskTypeReply::Subtasks(response) => Ok(response),
            SelectTaskTypeReply::Rejected(reply) => {
                Err(TaskpickError::api_error(StatusCode::OK, reply.error))
            }
        }
    }

    /// Request the datasets for a task type / subtask pair
    ///
    /// POST /select_subtask
    pub async fn select_subtask(
        &self,
        task_type: &str,
        subtask: &str,
    ) -> Result<SelectSubtaskResponse> {
        let req = SelectSubtaskRequest {
            task_type: task_type.to_string(),
            subtask: subtask.to_string(),
        };
        let builder = self.request(Method::POST, "/select_subtask")?.json(&req);
        match self.send_json(builder).await? {
            SelectSubtaskReply::Datasets(response) => Ok(response),
            SelectSubtaskReply::Rejected(reply) => {
                Err(TaskpickError::api_error(StatusCode::OK, reply.error))
            }
        }
    }

    /// Submit a free-text custom task description
    ///
    /// POST /submit_custom_task
    pub async fn submit_custom_task(&self, task: &str) -> Result<SubmitCustomTaskResponse> {
        let req = SubmitCustomTaskRequest {
            task: task.to_string(),
        };
        let builder = self.request(Method::POST, "/submit_custom_task")?.json(&req);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, TaskpickClient, TaskpickError};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> TaskpickClient {
        TaskpickClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_select_task_type() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/select_task_type"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({ "task_type": "Tabular" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "subtasks": ["classification", "regression"],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = test_client(&server)
            .select_task_type("Tabular")
            .await
            .expect("select_task_type failed");

        assert_eq!(response.subtasks, vec!["classification", "regression"]);
    }

    #[tokio::test]
    async fn test_select_task_type_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/select_task_type"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "error": "Unknown task type" })),
            )
            .mount(&server)
            .await;

        let err = test_client(&server)
            .select_task_type("Quantum")
            .await
            .expect_err("unknown task type should be rejected");

        match err {
            TaskpickError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Unknown task type");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_select_task_type_error_body_with_ok_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/select_task_type"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "error": "bad type" })),
            )
            .mount(&server)
            .await;

        let err = test_client(&server)
            .select_task_type("bogus")
            .await
            .expect_err("error body should be a rejection even on 200");

        assert_eq!(err.rejection_message(), Some("bad type"));
    }

    #[tokio::test]
    async fn test_select_subtask() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/select_subtask"))
            .and(body_json(serde_json::json!({
                "task_type": "Tabular",
                "subtask": "classification",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "datasets": ["load_iris", "load_wine"],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = test_client(&server)
            .select_subtask("Tabular", "classification")
            .await
            .expect("select_subtask failed");

        assert_eq!(response.datasets, vec!["load_iris", "load_wine"]);
    }

    #[tokio::test]
    async fn test_submit_custom_task() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/submit_custom_task"))
            .and(body_json(serde_json::json!({ "task": "predict housing prices" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Заглушка: LLM-фильтрация находится в разработке.",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = test_client(&server)
            .submit_custom_task("predict housing prices")
            .await
            .expect("submit_custom_task failed");

        assert_eq!(
            response.message,
            "Заглушка: LLM-фильтрация находится в разработке."
        );
    }
}
