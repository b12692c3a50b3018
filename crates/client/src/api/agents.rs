//! `/agents` and `/agents/:id`.

use tracing::instrument;

use anvaya_core::{AgentId, NewAgent, SalesAgent};

use crate::error::Result;

use super::ApiClient;

impl ApiClient {
    /// List all sales agents.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payload is malformed.
    #[instrument(skip(self))]
    pub async fn list_agents(&self) -> Result<Vec<SalesAgent>> {
        self.get_json("/agents").await
    }

    /// Fetch one agent.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the agent does not exist.
    #[instrument(skip(self), fields(agent = %id))]
    pub async fn get_agent(&self, id: &AgentId) -> Result<SalesAgent> {
        self.get_json(&format!("/agents/{id}")).await
    }

    /// Create an agent.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with the backend's validation message on
    /// rejected input (e.g. duplicate email).
    #[instrument(skip(self, agent), fields(email = %agent.email))]
    pub async fn create_agent(&self, agent: &NewAgent) -> Result<SalesAgent> {
        self.post_json("/agents", agent).await
    }

    /// Delete an agent.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the agent does not exist.
    #[instrument(skip(self), fields(agent = %id))]
    pub async fn delete_agent(&self, id: &AgentId) -> Result<()> {
        self.delete(&format!("/agents/{id}")).await
    }
}
