//! Tag references as stored on lead records.
//!
//! Leads reference tags either by object id or, in legacy records, by the
//! raw display name. The wire format is a plain string either way; the
//! variant is discriminated on the object-id shape at deserialization time.

use serde::{Deserialize, Serialize};

use super::id::{TagId, is_object_id};

/// A tag reference on a lead record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TagRef {
    /// Reference by object id, resolvable against the tag catalog.
    Id(TagId),
    /// Legacy reference by raw display name.
    Name(String),
}

impl TagRef {
    /// The stored string, whichever variant this is.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Id(id) => id.as_str(),
            Self::Name(name) => name,
        }
    }

    /// The tag id, if this is an id reference.
    #[must_use]
    pub const fn id(&self) -> Option<&TagId> {
        match self {
            Self::Id(id) => Some(id),
            Self::Name(_) => None,
        }
    }
}

impl From<String> for TagRef {
    fn from(s: String) -> Self {
        if is_object_id(&s) {
            Self::Id(TagId::new(s))
        } else {
            Self::Name(s)
        }
    }
}

impl From<TagRef> for String {
    fn from(tag: TagRef) -> Self {
        tag.raw().to_string()
    }
}

impl std::fmt::Display for TagRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw())
    }
}
