/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for plivo-adapter tests

use plivo_adapter::{ClientConfig, PlivoClient};
use wiremock::MockServer;

pub const TEST_AUTH_ID: &str = "MAXXXXXXXXXXXXXXXXXX";
pub const TEST_AUTH_TOKEN: &str = "test-auth-token";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with test credentials
pub fn client_for(server: &MockServer) -> PlivoClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    PlivoClient::with_config(TEST_AUTH_ID, TEST_AUTH_TOKEN, config).expect("client init")
}

/// Account-scoped path as the mock server sees it
pub fn account_path(suffix: &str) -> String {
    format!("/v1/Account/{TEST_AUTH_ID}{suffix}")
}
