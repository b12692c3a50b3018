//! The shared reporting aggregator.
//!
//! Every screen derives its summary numbers through this module instead of
//! re-deriving them inline. All operations are pure and total: malformed or
//! unrecognized records are defaulted or bucketed, never errors. Network
//! failures happen before data reaches this module and are handled at the
//! request boundary.

use crate::models::{AgentClosedCount, Lead, SalesAgent, StatusCount, Tag};
use crate::types::{LeadStatus, TagRef};

/// Per-status lead counts plus a grand total.
///
/// `total` always equals the sum of the five known buckets plus
/// `uncategorized`; unrecognized statuses count toward the total but not
/// toward any named bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineSummary {
    pub new: u64,
    pub contacted: u64,
    pub qualified: u64,
    pub proposal_sent: u64,
    pub closed: u64,
    pub uncategorized: u64,
    pub total: u64,
}

impl PipelineSummary {
    /// Build a summary from pre-aggregated `/report/pipeline` rows.
    #[must_use]
    pub fn from_counts(counts: &[StatusCount]) -> Self {
        let mut summary = Self::default();
        for row in counts {
            summary.add(&row.status, row.count);
        }
        summary
    }

    /// Tally raw lead records client-side.
    #[must_use]
    pub fn tally(leads: &[Lead]) -> Self {
        let mut summary = Self::default();
        for lead in leads {
            summary.add(&lead.status, 1);
        }
        summary
    }

    fn add(&mut self, status: &LeadStatus, count: u64) {
        match status {
            LeadStatus::New => self.new += count,
            LeadStatus::Contacted => self.contacted += count,
            LeadStatus::Qualified => self.qualified += count,
            LeadStatus::ProposalSent => self.proposal_sent += count,
            LeadStatus::Closed => self.closed += count,
            LeadStatus::Unrecognized(_) => self.uncategorized += count,
        }
        self.total += count;
    }

    /// Count for one of the known statuses. Unrecognized statuses all share
    /// the `uncategorized` bucket.
    #[must_use]
    pub const fn count_for(&self, status: &LeadStatus) -> u64 {
        match status {
            LeadStatus::New => self.new,
            LeadStatus::Contacted => self.contacted,
            LeadStatus::Qualified => self.qualified,
            LeadStatus::ProposalSent => self.proposal_sent,
            LeadStatus::Closed => self.closed,
            LeadStatus::Unrecognized(_) => self.uncategorized,
        }
    }

    /// Share of the total held by one status, to one decimal place.
    #[must_use]
    pub fn percentage_for(&self, status: &LeadStatus) -> f64 {
        percentage_of(self.count_for(status), self.total)
    }
}

/// `count / total` as a percentage rounded to one decimal place.
///
/// An empty set is defined as 0, never a division error.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Lead counts never exceed f64 precision
pub fn percentage_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((count as f64 / total as f64) * 1000.0).round() / 10.0
}

/// Whole-number conversion rate: closed deals as a share of all leads.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn conversion_rate(closed: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    ((closed as f64 / total as f64) * 100.0).round() as u64
}

/// A client-side status filter, as driven by the dashboard quick-filter row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Pass everything through.
    #[default]
    All,
    /// Case-insensitive match on the wire form of the status.
    Only(String),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(&self, lead: &Lead) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => lead.status.as_str().eq_ignore_ascii_case(wanted),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(s) => write!(f, "{s}"),
        }
    }
}

/// Filter leads by status, preserving order. `StatusFilter::All` is the
/// identity; filtering twice by the same criterion is a no-op.
#[must_use]
pub fn filter_by_status(leads: &[Lead], filter: &StatusFilter) -> Vec<Lead> {
    leads
        .iter()
        .filter(|lead| filter.matches(lead))
        .cloned()
        .collect()
}

/// The agent with the most closed deals.
///
/// Left-to-right reduction with a strictly-greater comparison, so on a tie
/// the earliest-seen agent wins. Empty input yields `None`.
#[must_use]
pub fn top_performer(agents: &[AgentClosedCount]) -> Option<&AgentClosedCount> {
    agents.iter().fold(None, |best: Option<&AgentClosedCount>, candidate| {
        match best {
            Some(current) if candidate.total_closed > current.total_closed => Some(candidate),
            Some(current) => Some(current),
            None => Some(candidate),
        }
    })
}

/// The agent with the most assigned leads, same tie rule as
/// [`top_performer`].
#[must_use]
pub fn top_agent_by_leads(agents: &[SalesAgent]) -> Option<&SalesAgent> {
    agents.iter().fold(None, |best: Option<&SalesAgent>, candidate| match best {
        Some(current) if candidate.total_leads > current.total_leads => Some(candidate),
        Some(current) => Some(current),
        None => Some(candidate),
    })
}

/// Sum of closed deals across all agents.
#[must_use]
pub fn total_closed(agents: &[AgentClosedCount]) -> u64 {
    agents.iter().map(|row| row.total_closed).sum()
}

/// Mean assigned-lead count per agent, rounded to the nearest whole lead.
#[must_use]
pub fn average_leads_per_agent(agents: &[SalesAgent]) -> u64 {
    if agents.is_empty() {
        return 0;
    }
    let total: u64 = agents.iter().map(|agent| agent.total_leads).sum();
    let count = agents.len() as u64;
    // Integer round-half-up; counts are small enough not to overflow
    (total + count / 2) / count
}

/// Resolve tag references to display names against a fetched catalog.
///
/// Same length and order as the input. Id references found in the catalog
/// substitute the catalog name; unknown ids and legacy raw names pass
/// through unchanged, so no tag is ever dropped.
#[must_use]
pub fn resolve_tag_names(tags: &[TagRef], catalog: &[Tag]) -> Vec<String> {
    tags.iter()
        .map(|tag| match tag {
            TagRef::Id(id) => catalog
                .iter()
                .find(|entry| &entry.id == id)
                .map_or_else(|| id.as_str().to_string(), |entry| entry.name.clone()),
            TagRef::Name(name) => name.clone(),
        })
        .collect()
}

/// Sort leads newest-first. Stable: leads created at the same instant keep
/// their original relative order.
#[must_use]
pub fn sort_by_recency(mut leads: Vec<Lead>) -> Vec<Lead> {
    leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    leads
}
