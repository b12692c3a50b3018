//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ANVAYA_API_URL` - Base URL of the Anvaya REST backend
//!   (default: the hosted backend)
//! - `ANVAYA_TOKEN_SLOT` - Name of the persisted token slot
//!   (default: `anvaya_auth_token`)
//! - `ANVAYA_STATE_DIR` - Directory holding the token slot
//!   (default: `<user data dir>/anvaya`)
//! - `ANVAYA_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default backend, matching the hosted deployment.
const DEFAULT_API_URL: &str = "https://anvaya-crm-backend-coral.vercel.app/api";

/// Default name of the persisted token slot.
const DEFAULT_TOKEN_SLOT: &str = "anvaya_auth_token";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("No state directory available; set ANVAYA_STATE_DIR")]
    NoStateDir,
}

/// Anvaya client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub api_url: String,
    /// Name of the persisted token slot.
    pub token_slot: String,
    /// Directory the token slot lives in.
    pub state_dir: PathBuf,
    /// HTTP request timeout.
    pub http_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails to parse or no state
    /// directory can be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = trim_trailing_slash(&get_env_or_default("ANVAYA_API_URL", DEFAULT_API_URL));
        let token_slot = get_env_or_default("ANVAYA_TOKEN_SLOT", DEFAULT_TOKEN_SLOT);
        let state_dir = match std::env::var("ANVAYA_STATE_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_state_dir().ok_or(ConfigError::NoStateDir)?,
        };
        let timeout_secs = get_env_or_default(
            "ANVAYA_HTTP_TIMEOUT_SECS",
            &DEFAULT_HTTP_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("ANVAYA_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            api_url,
            token_slot,
            state_dir,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Path of the persisted token slot.
    #[must_use]
    pub fn token_path(&self) -> PathBuf {
        self.state_dir.join(&self.token_slot)
    }

    /// Full URL for an API path (`path` starts with `/`).
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn trim_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn default_state_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("anvaya"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config_with(api_url: &str) -> ClientConfig {
        ClientConfig {
            api_url: trim_trailing_slash(api_url),
            token_slot: DEFAULT_TOKEN_SLOT.to_string(),
            state_dir: PathBuf::from("/tmp/anvaya-test"),
            http_timeout: Duration::from_secs(30),
        }
    }

    #[test]
    fn test_endpoint_joins_path() {
        let config = config_with("https://api.example.com/api");
        assert_eq!(
            config.endpoint("/report/pipeline"),
            "https://api.example.com/api/report/pipeline"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = config_with("https://api.example.com/api/");
        assert_eq!(config.endpoint("/leads"), "https://api.example.com/api/leads");
    }

    #[test]
    fn test_token_path_uses_slot_name() {
        let config = config_with("https://api.example.com/api");
        assert_eq!(
            config.token_path(),
            PathBuf::from("/tmp/anvaya-test/anvaya_auth_token")
        );
    }
}
