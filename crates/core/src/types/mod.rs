//! Core type definitions for the Anvaya client.
//!
//! All types are serde-compatible and match the backend's wire format.

pub mod id;
pub mod status;
pub mod tag;

pub use id::{AgentId, CommentId, LeadId, TagId, UserId, is_object_id};
pub use status::{LeadPriority, LeadSource, LeadStatus};
pub use tag::TagRef;
