//! Sales agent records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::AgentId;

/// A sales agent as returned by `/agents` and `/agents/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAgent {
    #[serde(alias = "_id")]
    pub id: AgentId,
    pub name: String,
    pub email: String,
    /// Number of leads currently assigned, derived by the backend.
    /// Older records omit it.
    #[serde(default)]
    pub total_leads: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /agents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAgent {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_deserializes_with_missing_total() {
        let json = r#"{
            "_id": "64b1f9ab12cd34ef56ab78ce",
            "name": "Priya",
            "email": "priya@example.com"
        }"#;
        let agent: SalesAgent = serde_json::from_str(json).unwrap();
        assert_eq!(agent.total_leads, 0);
        assert!(agent.created_at.is_none());
    }

    #[test]
    fn test_agent_total_leads_read() {
        let json = r#"{
            "id": "64b1f9ab12cd34ef56ab78ce",
            "name": "Priya",
            "email": "priya@example.com",
            "totalLeads": 12,
            "createdAt": "2024-05-01T00:00:00Z"
        }"#;
        let agent: SalesAgent = serde_json::from_str(json).unwrap();
        assert_eq!(agent.total_leads, 12);
    }
}
