/*
[INPUT]:  Session start requests (no body)
[OUTPUT]: Server-assigned session identifiers
[POS]:    HTTP layer - session endpoint
[UPDATE]: When session handling on the server side changes
*/

use crate::http::{Result, TaskpickClient};
use crate::types::StartSessionResponse;
use reqwest::Method;

impl TaskpickClient {
    /// Start a new session
    ///
    /// POST /start_session
    pub async fn start_session(&self) -> Result<StartSessionResponse> {
        let builder = self.request(Method::POST, "/start_session")?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, TaskpickClient, TaskpickError};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> TaskpickClient {
        TaskpickClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_start_session() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/start_session"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "session_id": "4f1c9a2b" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = test_client(&server)
            .start_session()
            .await
            .expect("start_session failed");

        assert_eq!(response.session_id, "4f1c9a2b");
    }

    #[tokio::test]
    async fn test_start_session_malformed_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/start_session"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "session": "abc" })),
            )
            .mount(&server)
            .await;

        let err = test_client(&server)
            .start_session()
            .await
            .expect_err("schema mismatch should fail");

        assert!(matches!(err, TaskpickError::Decode(_)));
    }
}
