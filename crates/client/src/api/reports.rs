//! `/report/pipeline`, `/report/last-week`, and `/report/closed-by-agent`.

use tracing::instrument;

use anvaya_core::{AgentClosedCount, ClosedLead, StatusCount};

use crate::error::Result;

use super::ApiClient;

impl ApiClient {
    /// Per-status lead counts, pre-aggregated by the backend.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payload is malformed.
    #[instrument(skip(self))]
    pub async fn report_pipeline(&self) -> Result<Vec<StatusCount>> {
        self.get_json("/report/pipeline").await
    }

    /// Leads closed in the last seven days.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payload is malformed.
    #[instrument(skip(self))]
    pub async fn report_last_week(&self) -> Result<Vec<ClosedLead>> {
        self.get_json("/report/last-week").await
    }

    /// Closed-deal counts per agent.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payload is malformed.
    #[instrument(skip(self))]
    pub async fn report_closed_by_agent(&self) -> Result<Vec<AgentClosedCount>> {
        self.get_json("/report/closed-by-agent").await
    }
}
