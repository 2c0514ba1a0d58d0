/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for labarchives-client tests

use labarchives_client::{ClientConfig, Credential, FixedClock, LabArchivesClient};
use std::sync::Arc;
use wiremock::MockServer;

#[allow(dead_code)]
pub const TEST_EXPIRES: u64 = 1_700_000_000_000;

#[allow(dead_code)]
/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

#[allow(dead_code)]
/// Credential routed at the mock server
pub fn test_credential(server: &MockServer) -> Credential {
    Credential::new("AKID123", "test-secret", server.uri(), "/api")
}

/// Client whose signatures always use [`TEST_EXPIRES`]
#[allow(dead_code)]
pub fn fixed_clock_client() -> LabArchivesClient {
    LabArchivesClient::with_clock(ClientConfig::default(), Arc::new(FixedClock(TEST_EXPIRES)))
        .expect("client init")
}

/// Wrap `body` in an XML response
#[allow(dead_code)]
pub fn xml(body: &str) -> String {
    format!(r#"<?xml version="1.0" encoding="UTF-8"?>{body}"#)
}
