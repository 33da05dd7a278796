/*
[INPUT]:  Mock HTTP responses for the task-selection service
[OUTPUT]: Test results for the UI controller wiring
[POS]:    Integration tests - controller request/render behavior
[UPDATE]: When controller operations or workflow rules change
*/

use taskpick_adapter::{ClientConfig, TaskpickClient};
use taskpick_tui::{Controller, ControllerError, Selection};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller_for(server: &MockServer) -> Controller {
    let client = TaskpickClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init");
    Controller::new(client)
}

#[tokio::test]
async fn start_session_issues_one_request_and_sets_display() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/start_session"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "session_id": "abc" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    assert_ok!(controller.start_session().await);

    assert_eq!(controller.session_display().as_deref(), Some("Сессия: abc"));
}

#[tokio::test]
async fn select_task_type_sends_body_and_renders_subtasks() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/select_task_type"))
        .and(body_json(serde_json::json!({ "task_type": "classification" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "subtasks": ["a", "b"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller
        .select_task_type("classification")
        .await
        .expect("select task type");

    assert_eq!(controller.subtasks(), ["a", "b"]);
    assert_eq!(
        controller.selection(),
        &Selection::TypeSelected("classification".to_string())
    );
}

#[tokio::test]
async fn rejected_task_type_leaves_subtasks_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/select_task_type"))
        .and(body_json(serde_json::json!({ "task_type": "classification" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "subtasks": ["a", "b"] })),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/select_task_type"))
        .and(body_json(serde_json::json!({ "task_type": "bogus" })))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "error": "bad type" })),
        )
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller
        .select_task_type("classification")
        .await
        .expect("first selection");

    let err = controller
        .select_task_type("bogus")
        .await
        .expect_err("bogus type should be rejected");

    // The rejection text feeds the blocking dialog; the rendered list stays.
    assert_eq!(err.rejection_message(), Some("bad type"));
    assert_eq!(controller.subtasks(), ["a", "b"]);
    // The type was stored before the request went out, so even the
    // rejected one replaces the remembered selection.
    assert_eq!(
        controller.selection(),
        &Selection::TypeSelected("bogus".to_string())
    );
}

#[tokio::test]
async fn rejected_task_type_on_empty_panel_keeps_it_empty() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/select_task_type"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "error": "bad type" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    let err = controller
        .select_task_type("bogus")
        .await
        .expect_err("should be rejected");

    assert_eq!(err.rejection_message(), Some("bad type"));
    assert!(controller.subtasks().is_empty());
}

#[tokio::test]
async fn select_subtask_sends_remembered_type_and_renders_datasets() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/select_task_type"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "subtasks": ["a", "b"] })),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/select_subtask"))
        .and(body_json(serde_json::json!({
            "task_type": "classification",
            "subtask": "a",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "datasets": ["d1", "d2"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller
        .select_task_type("classification")
        .await
        .expect("select task type");
    controller.select_subtask("a").await.expect("select subtask");

    assert_eq!(controller.datasets(), ["d1", "d2"]);
    assert_eq!(
        controller.selection(),
        &Selection::SubtaskSelected {
            task_type: "classification".to_string(),
            subtask: "a".to_string(),
        }
    );
}

#[tokio::test]
async fn submit_custom_task_sends_text_and_renders_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit_custom_task"))
        .and(body_json(serde_json::json!({ "task": "hello" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": "ok" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    assert_ok!(controller.submit_custom_task("hello").await);

    assert_eq!(controller.result_message(), Some("ok"));
}

#[tokio::test]
async fn second_task_type_overwrites_remembered_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/select_task_type"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "subtasks": ["x"] })),
        )
        .expect(2)
        .mount(&server)
        .await;

    // Only the second type may appear in the subtask request body.
    Mock::given(method("POST"))
        .and(path("/select_subtask"))
        .and(body_json(serde_json::json!({
            "task_type": "regression",
            "subtask": "x",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "datasets": ["d"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller
        .select_task_type("classification")
        .await
        .expect("first type");
    controller
        .select_task_type("regression")
        .await
        .expect("second type");
    controller.select_subtask("x").await.expect("select subtask");

    assert_eq!(controller.datasets(), ["d"]);
}

#[tokio::test]
async fn subtask_without_task_type_is_rejected_locally() {
    // No mocks mounted: any request would fail the mock server's
    // verification, proving nothing went over the wire.
    let server = MockServer::start().await;

    let mut controller = controller_for(&server);
    let err = controller
        .select_subtask("a")
        .await
        .expect_err("out-of-order selection must fail");

    assert!(matches!(err, ControllerError::NoTaskTypeSelected));
    assert!(controller.datasets().is_empty());
}

#[tokio::test]
async fn empty_task_type_is_forwarded_and_server_rejects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/select_task_type"))
        .and(body_json(serde_json::json!({"task_type": ""})))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Unknown task type"
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    // No client-side filtering: even an empty type goes over the wire
    // and comes back through the dialog path.
    let mut controller = controller_for(&server);
    let err = controller
        .select_task_type("")
        .await
        .expect_err("server rejects the empty type");

    assert_eq!(err.rejection_message(), Some("Unknown task type"));
    assert_eq!(
        controller.selection(),
        &Selection::TypeSelected(String::new())
    );
}

#[tokio::test]
async fn empty_custom_task_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit_custom_task"))
        .and(body_json(serde_json::json!({"task": ""})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "ok"
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    assert_ok!(controller.submit_custom_task("").await);
    assert_eq!(controller.result_message(), Some("ok"));
}
