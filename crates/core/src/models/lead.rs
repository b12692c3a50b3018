//! Lead records and the payloads used to create, update, and filter them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AgentId, LeadId, LeadPriority, LeadSource, LeadStatus, TagRef};

/// A lead as returned by `/leads` and `/leads/:id`.
///
/// The backend populates `salesAgent` with a summary of the assigned agent;
/// `None` means the lead is unassigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(alias = "_id")]
    pub id: LeadId,
    pub name: String,
    pub source: LeadSource,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub priority: LeadPriority,
    /// Assigned agent, populated by the backend. `None` = unassigned.
    #[serde(default)]
    pub sales_agent: Option<AgentSummary>,
    /// Tag references, by id or legacy raw name.
    #[serde(default)]
    pub tags: Vec<TagRef>,
    /// Estimated days until the lead closes.
    pub time_to_close: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Lead {
    /// Display name of the assigned agent, or `"Unassigned"`.
    #[must_use]
    pub fn agent_name(&self) -> &str {
        self.sales_agent
            .as_ref()
            .map_or("Unassigned", |agent| agent.name.as_str())
    }
}

/// Populated agent summary embedded in a lead record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSummary {
    #[serde(alias = "_id")]
    pub id: AgentId,
    pub name: String,
}

/// Payload for creating (`POST /leads`) or replacing (`PUT /leads/:id`)
/// a lead. Tags are sent as raw strings, the same shape the backend stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadUpsert {
    pub name: String,
    pub source: LeadSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_agent: Option<AgentId>,
    pub status: LeadStatus,
    pub tags: Vec<TagRef>,
    pub time_to_close: u32,
    pub priority: LeadPriority,
}

/// Server-side filters for `GET /leads`.
///
/// Empty fields are omitted from the query string entirely; the backend
/// treats a missing key and an absent filter the same way.
#[derive(Debug, Clone, Default)]
pub struct LeadQuery {
    pub status: Option<String>,
    pub sales_agent: Option<String>,
    pub source: Option<String>,
    pub priority: Option<String>,
}

impl LeadQuery {
    /// Query pairs for the request, skipping unset filters.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status.as_deref() {
            pairs.push(("status", status));
        }
        if let Some(agent) = self.sales_agent.as_deref() {
            pairs.push(("salesAgent", agent));
        }
        if let Some(source) = self.source.as_deref() {
            pairs.push(("source", source));
        }
        if let Some(priority) = self.priority.as_deref() {
            pairs.push(("priority", priority));
        }
        pairs
    }

    /// True when no filter is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.sales_agent.is_none()
            && self.source.is_none()
            && self.priority.is_none()
    }
}
