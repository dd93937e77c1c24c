//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Hudu client against a `wiremock` server that replays
//! recorded responses from `fixtures/`.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every mock server is addressed through the `/api/v1` prefix
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

// Re-export test utilities from hudu-client
#[allow(unused_imports)]
pub use hudu_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use hudu_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use secrecy::SecretString;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use hudu_client::HuduClient;

/// API key used by every mocked request.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";

/// Base URL of the mock server, including the API prefix.
#[allow(dead_code)]
pub fn base_url(server: &MockServer) -> String {
    format!("{}/api/v1", server.uri())
}

/// The test API key as a secret.
#[allow(dead_code)]
pub fn test_key() -> SecretString {
    SecretString::new(TEST_API_KEY.to_string().into())
}

/// A client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> HuduClient {
    HuduClient::builder()
        .api_key(TEST_API_KEY.to_string())
        .base_url(base_url(server))
        .build()
        .expect("Failed to build test client")
}

/// The single request the mock server received.
#[allow(dead_code)]
pub async fn single_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("Request recording is enabled");
    assert_eq!(requests.len(), 1, "Expected exactly one request");
    requests.remove(0)
}

/// Install a test subscriber so `RUST_LOG=debug` shows request logs.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
