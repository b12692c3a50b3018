//! Comments attached to a lead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AgentId, CommentId, LeadId};

/// A comment as returned by `/leads/:id/comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(alias = "_id")]
    pub id: CommentId,
    #[serde(default)]
    pub lead: Option<LeadId>,
    pub author: CommentAuthor,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}

/// Populated author summary embedded in a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentAuthor {
    #[serde(alias = "_id")]
    pub id: AgentId,
    #[serde(default)]
    pub name: Option<String>,
}

impl CommentAuthor {
    /// Display name of the author, or `"Unknown"`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// Payload for `POST /leads/:id/comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    /// Agent id of the comment author.
    pub author: AgentId,
    pub comment_text: String,
}
