//! Anvaya Client - HTTP boundary for the Anvaya CRM backend.
//!
//! # Architecture
//!
//! - The backend is the source of truth - no local sync, direct REST calls
//! - [`api::ApiClient`] wraps `reqwest` with bearer-token auth and maps
//!   the backend's error payloads into [`error::ApiError`]
//! - [`session::AuthSession`] is an explicit auth context with `init` /
//!   `teardown` lifecycle, replacing ambient global state
//! - [`screens`] packages the per-page fetch orchestration: concurrent
//!   fetches joined before aggregation, all-or-nothing on partial failure
//! - Tag catalog responses are cached in-memory via `moka` (5 minute TTL)
//!
//! # Example
//!
//! ```rust,ignore
//! use anvaya_client::{api::ApiClient, config::ClientConfig, session::AuthSession};
//!
//! let config = ClientConfig::from_env()?;
//! let mut session = AuthSession::init(&config)?;
//!
//! let client = ApiClient::new(&config, &session)?;
//! let token = client.login("agent@example.com", "password").await?;
//! session.store_token(&token)?;
//!
//! let client = ApiClient::new(&config, &session)?;
//! let dashboard = anvaya_client::screens::DashboardScreen::load(&client).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod screens;
pub mod session;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use session::AuthSession;
