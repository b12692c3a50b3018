//! Wire-format records consumed from the Anvaya REST backend.
//!
//! These are read models: every entity is owned by the backend and the
//! client only holds a transient in-memory copy per screen. Field names use
//! serde renames to match the backend's camelCase JSON.

pub mod agent;
pub mod comment;
pub mod lead;
pub mod report;
pub mod tag;

pub use agent::{NewAgent, SalesAgent};
pub use comment::{Comment, CommentAuthor, NewComment};
pub use lead::{AgentSummary, Lead, LeadQuery, LeadUpsert};
pub use report::{AgentClosedCount, ClosedLead, StatusCount};
pub use tag::{NewTag, Tag};
