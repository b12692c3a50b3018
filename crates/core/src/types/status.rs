//! Status, source, and priority enums for leads.
//!
//! The backend stores these as free-form strings. Each enum keeps an
//! `Unrecognized` variant so an unexpected wire value stays representable
//! and displays under a fallback category instead of failing
//! deserialization.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pipeline status of a lead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    ProposalSent,
    Closed,
    /// Any status string the client does not know about.
    Unrecognized(String),
}

impl LeadStatus {
    /// The five statuses the backend is expected to use, in pipeline order.
    pub const KNOWN: [Self; 5] = [
        Self::New,
        Self::Contacted,
        Self::Qualified,
        Self::ProposalSent,
        Self::Closed,
    ];

    /// Wire form of the status (e.g. `"Proposal Sent"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Qualified => "Qualified",
            Self::ProposalSent => "Proposal Sent",
            Self::Closed => "Closed",
            Self::Unrecognized(s) => s,
        }
    }

    /// True for statuses the client knows how to categorize.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for LeadStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "New" => Self::New,
            "Contacted" => Self::Contacted,
            "Qualified" => Self::Qualified,
            "Proposal Sent" => Self::ProposalSent,
            "Closed" => Self::Closed,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<LeadStatus> for String {
    fn from(status: LeadStatus) -> Self {
        status.as_str().to_string()
    }
}

impl FromStr for LeadStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

/// Where a lead came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeadSource {
    Website,
    Referral,
    ColdCall,
    Advertisement,
    Email,
    Other,
    /// Any source string the client does not know about.
    Unrecognized(String),
}

impl LeadSource {
    /// Wire form of the source (e.g. `"Cold Call"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Website => "Website",
            Self::Referral => "Referral",
            Self::ColdCall => "Cold Call",
            Self::Advertisement => "Advertisement",
            Self::Email => "Email",
            Self::Other => "Other",
            Self::Unrecognized(s) => s,
        }
    }
}

impl std::fmt::Display for LeadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for LeadSource {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Website" => Self::Website,
            "Referral" => Self::Referral,
            "Cold Call" => Self::ColdCall,
            "Advertisement" => Self::Advertisement,
            "Email" => Self::Email,
            "Other" => Self::Other,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<LeadSource> for String {
    fn from(source: LeadSource) -> Self {
        source.as_str().to_string()
    }
}

/// Priority assigned to a lead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum LeadPriority {
    High,
    #[default]
    Medium,
    Low,
    /// Any priority string the client does not know about.
    Unrecognized(String),
}

impl LeadPriority {
    /// Wire form of the priority.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unrecognized(s) => s,
        }
    }
}

impl std::fmt::Display for LeadPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for LeadPriority {
    fn from(s: String) -> Self {
        match s.as_str() {
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<LeadPriority> for String {
    fn from(priority: LeadPriority) -> Self {
        priority.as_str().to_string()
    }
}
