//! `/auth/login`.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ApiError, Result};

use super::ApiClient;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

impl ApiClient {
    /// Log in with email and password, returning the bearer token.
    ///
    /// The caller is responsible for persisting the token via
    /// [`crate::session::AuthSession::store_token`].
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with the backend's message on bad
    /// credentials.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let response: LoginResponse = self
            .post_json("/auth/login", &LoginRequest { email, password })
            .await
            .map_err(|e| match e {
                ApiError::Api { status: 401 | 403, message } => ApiError::Auth(message),
                other => other,
            })?;
        Ok(response.token)
    }
}
