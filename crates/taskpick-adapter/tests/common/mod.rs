/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskpick-adapter tests

use taskpick_adapter::{ClientConfig, TaskpickClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at a mock server
pub fn client_for(server: &MockServer) -> TaskpickClient {
    TaskpickClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}
