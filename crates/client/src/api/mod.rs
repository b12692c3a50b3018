//! REST client for the Anvaya backend.
//!
//! One `ApiClient` per session. The client is cheap to clone (shared inner
//! state behind an `Arc`) and attaches the session's bearer token to every
//! request. Resource methods live in per-resource modules:
//!
//! - [`auth`] - `/auth/login`
//! - [`leads`] - `/leads`, `/leads/:id`, `/leads/:id/comments`
//! - [`agents`] - `/agents`, `/agents/:id`
//! - [`tags`] - `/tags`, `/tags/:id`, catalog caching and tag resolution
//! - [`reports`] - `/report/pipeline`, `/report/last-week`,
//!   `/report/closed-by-agent`

mod agents;
mod auth;
mod leads;
mod reports;
mod tags;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use anvaya_core::Tag;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::session::AuthSession;

/// How long a fetched tag catalog stays valid.
const TAG_CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Client for the Anvaya REST API.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    bearer: Option<String>,
    /// Single-entry cache of the tag catalog.
    tag_catalog: Cache<(), Arc<Vec<Tag>>>,
}

impl ApiClient {
    /// Create a new API client bound to the session's credentials.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig, session: &AuthSession) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        let tag_catalog = Cache::builder()
            .max_capacity(1)
            .time_to_live(TAG_CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_url.clone(),
                bearer: session.bearer().map(String::from),
                tag_catalog,
            }),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.inner.bearer.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode the JSON response, mapping failures into
    /// the client's error taxonomy.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<T> {
        let response = self.apply_auth(request).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(context.to_string()));
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                context,
                body = %body.chars().take(500).collect::<String>(),
                "Anvaya API returned non-success status"
            );
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                context,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse Anvaya API response"
            );
            ApiError::Parse(format!("{context}: {e}"))
        })
    }

    /// GET a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        self.execute(self.inner.client.get(self.url(path)), path).await
    }

    /// GET a JSON resource with query parameters.
    pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        debug!(path, ?query, "GET");
        self.execute(self.inner.client.get(self.url(path)).query(query), path)
            .await
    }

    /// POST a JSON body and decode the JSON response.
    pub(crate) async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "POST");
        self.execute(self.inner.client.post(self.url(path)).json(body), path)
            .await
    }

    /// PUT a JSON body and decode the JSON response.
    pub(crate) async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "PUT");
        self.execute(self.inner.client.put(self.url(path)).json(body), path)
            .await
    }

    /// DELETE a resource, ignoring the response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        debug!(path, "DELETE");
        let response = self
            .apply_auth(self.inner.client.delete(self.url(path)))
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, path, "Delete failed");
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        Ok(())
    }

    pub(crate) fn tag_catalog_cache(&self) -> &Cache<(), Arc<Vec<Tag>>> {
        &self.inner.tag_catalog
    }
}
