//! Rows returned by the report endpoints.
//!
//! These arrive pre-aggregated from the backend; the reporting module turns
//! them into displayable summaries.

use serde::{Deserialize, Serialize};

use crate::types::LeadStatus;

/// One row of `/report/pipeline`: how many leads sit in a status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: LeadStatus,
    pub count: u64,
}

/// One row of `/report/closed-by-agent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentClosedCount {
    pub agent_name: String,
    pub total_closed: u64,
}

/// One row of `/report/last-week`: a lead closed in the last seven days.
///
/// Unlike `/leads`, this endpoint flattens the agent to a display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedLead {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sales_agent: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_row_with_unknown_status() {
        let rows: Vec<StatusCount> = serde_json::from_str(
            r#"[{"status": "New", "count": 3}, {"status": "Stalled", "count": 1}]"#,
        )
        .unwrap();
        assert_eq!(rows[0].status, LeadStatus::New);
        assert!(!rows[1].status.is_known());
    }

    #[test]
    fn test_closed_by_agent_row() {
        let row: AgentClosedCount =
            serde_json::from_str(r#"{"agentName": "Priya", "totalClosed": 5}"#).unwrap();
        assert_eq!(row.agent_name, "Priya");
        assert_eq!(row.total_closed, 5);
    }
}
