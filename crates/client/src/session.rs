//! Auth session lifecycle.
//!
//! The session is an explicit context object rather than ambient global
//! state: [`AuthSession::init`] reads the persisted token slot and decodes
//! the identity claims, [`AuthSession::teardown`] clears both. Handlers
//! receive the session by reference; nothing is process-global.
//!
//! The JWT payload is decoded locally for identity display only - the
//! client never verifies signatures, the backend does that on every
//! request.

use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ClientConfig;

/// Errors from session persistence and token decoding.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Token slot could not be read or written.
    #[error("Token slot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Token is not a decodable JWT.
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// Identity claims decoded from the bearer token payload.
///
/// Field presence depends on what the backend signs in; everything is
/// optional so a sparse token still yields a usable session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    /// Subject id of the logged-in user.
    #[serde(default, alias = "_id", alias = "sub")]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Issued-at, seconds since epoch.
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiry, seconds since epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl UserClaims {
    /// Decode claims from a JWT without verifying the signature.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidToken` if the token is not three
    /// dot-separated segments with a base64url JSON payload.
    pub fn decode(token: &str) -> Result<Self, SessionError> {
        let payload = token
            .split('.')
            .nth(1)
            .ok_or_else(|| SessionError::InvalidToken("missing payload segment".to_string()))?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| SessionError::InvalidToken(format!("payload is not base64url: {e}")))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| SessionError::InvalidToken(format!("payload is not claim JSON: {e}")))
    }

    /// True when the token carries an `exp` claim in the past.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp.is_some_and(|exp| exp <= now.timestamp())
    }

    /// Best display name for the user: name, then email, then id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .or(self.id.as_deref())
            .unwrap_or("(unknown user)")
    }
}

/// The current auth context: persisted bearer token plus decoded claims.
#[derive(Debug)]
pub struct AuthSession {
    token_path: PathBuf,
    token: Option<SecretString>,
    claims: Option<UserClaims>,
}

impl AuthSession {
    /// Initialize the session from the persisted token slot.
    ///
    /// A missing slot yields an anonymous session. A slot holding an
    /// undecodable token is treated as stale and cleared.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the slot exists but cannot be read.
    pub fn init(config: &ClientConfig) -> Result<Self, SessionError> {
        let token_path = config.token_path();
        let mut session = Self {
            token_path,
            token: None,
            claims: None,
        };

        let raw = match std::fs::read_to_string(&session.token_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(session),
            Err(e) => return Err(SessionError::Io(e)),
        };

        let token = raw.trim();
        match UserClaims::decode(token) {
            Ok(claims) => {
                session.token = Some(SecretString::from(token.to_string()));
                session.claims = Some(claims);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored token is not decodable; clearing slot");
                session.teardown()?;
            }
        }
        Ok(session)
    }

    /// An anonymous in-memory session that never touches the slot on init.
    /// Login and logout still persist through `token_path`.
    #[must_use]
    pub fn anonymous(config: &ClientConfig) -> Self {
        Self {
            token_path: config.token_path(),
            token: None,
            claims: None,
        }
    }

    /// Persist a freshly obtained token and decode its claims.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidToken` if the token cannot be decoded,
    /// or `SessionError::Io` if the slot cannot be written. An undecodable
    /// token is never persisted.
    pub fn store_token(&mut self, token: &str) -> Result<(), SessionError> {
        let claims = UserClaims::decode(token)?;
        if let Some(parent) = self.token_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.token_path, token)?;
        self.token = Some(SecretString::from(token.to_string()));
        self.claims = Some(claims);
        Ok(())
    }

    /// Clear the persisted slot and drop the in-memory token and claims.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the slot exists but cannot be removed.
    pub fn teardown(&mut self) -> Result<(), SessionError> {
        if let Err(e) = std::fs::remove_file(&self.token_path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            return Err(SessionError::Io(e));
        }
        self.token = None;
        self.claims = None;
        Ok(())
    }

    /// The bearer token, if logged in.
    #[must_use]
    pub const fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    /// The decoded identity claims, if logged in.
    #[must_use]
    pub const fn claims(&self) -> Option<&UserClaims> {
        self.claims.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Expose the raw token for request headers.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_ref().map(ExposeSecret::expose_secret)
    }
}
