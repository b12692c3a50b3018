//! Tag catalog records.

use serde::{Deserialize, Serialize};

use crate::types::TagId;

/// A tag as returned by `/tags` and `/tags/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    #[serde(alias = "_id")]
    pub id: TagId,
    pub name: String,
}

/// Payload for `POST /tags`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTag {
    pub name: String,
}

/// The stock tags the client seeds into a fresh backend.
pub const INITIAL_TAGS: [&str; 5] = ["High Value", "Tech", "Finance", "Healthcare", "Follow-up"];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_accepts_both_id_fields() {
        let tag: Tag = serde_json::from_str(
            r#"{"_id": "64b1f9ab12cd34ef56ab78cf", "name": "Finance"}"#,
        )
        .unwrap();
        assert_eq!(tag.name, "Finance");
        let tag: Tag =
            serde_json::from_str(r#"{"id": "64b1f9ab12cd34ef56ab78cf", "name": "Finance"}"#)
                .unwrap();
        assert_eq!(tag.id.as_str(), "64b1f9ab12cd34ef56ab78cf");
    }
}
