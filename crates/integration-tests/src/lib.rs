//! Integration tests for the Anvaya CRM client.
//!
//! Tests run the real `ApiClient` and screen loaders against a `wiremock`
//! HTTP server standing in for the backend - no live deployment needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p anvaya-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `api_client` - Request shapes, auth propagation, error mapping
//! - `screens` - Screen loaders: joins, aggregation, partial-failure policy

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use wiremock::MockServer;

use anvaya_client::{ApiClient, AuthSession, ClientConfig};

/// Test harness: a mock backend plus a config and session pointed at it.
pub struct TestContext {
    pub server: MockServer,
    pub config: ClientConfig,
    pub session: AuthSession,
    /// Keeps the state dir alive for the config's token slot.
    _state_dir: tempfile::TempDir,
}

impl TestContext {
    /// Start a mock backend and an anonymous session against it.
    ///
    /// # Panics
    ///
    /// Panics if the temp state dir cannot be created.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let state_dir = tempfile::tempdir().expect("create temp state dir");
        let config = ClientConfig {
            api_url: server.uri(),
            token_slot: "anvaya_auth_token".to_string(),
            state_dir: state_dir.path().to_path_buf(),
            http_timeout: Duration::from_secs(5),
        };
        let session = AuthSession::anonymous(&config);
        Self { server, config, session, _state_dir: state_dir }
    }

    /// An `ApiClient` bound to the current session.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client fails to build.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config, &self.session).expect("build api client")
    }
}

/// An unsigned JWT whose payload is the given claim JSON, as the backend
/// would mint (signature not verified client-side).
#[must_use]
pub fn make_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload =
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).expect("serialize claims"));
    format!("{header}.{payload}.sig")
}
