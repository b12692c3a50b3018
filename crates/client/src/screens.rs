//! Per-screen data loading and aggregation.
//!
//! Each screen fans its fetches out concurrently and joins before any
//! derived value is computed. Partial failure is all-or-nothing: if any
//! fetch in the join fails, the whole load returns that error and no
//! aggregation runs with half the data. Loaders hold no shared state, so
//! dropping an in-flight load (navigation away) applies nothing.

use tokio::try_join;

use anvaya_core::{
    AgentClosedCount, ClosedLead, Comment, Lead, LeadId, LeadQuery, SalesAgent, StatusCount,
    reporting::{self, PipelineSummary, StatusFilter},
};

use crate::api::ApiClient;
use crate::error::Result;

/// How many leads the dashboard's recent list shows.
const RECENT_LEAD_LIMIT: usize = 6;

/// Data behind the dashboard: pipeline totals plus the newest leads.
#[derive(Debug)]
pub struct DashboardScreen {
    pub summary: PipelineSummary,
    /// The newest leads, capped at [`RECENT_LEAD_LIMIT`].
    pub recent_leads: Vec<Lead>,
}

impl DashboardScreen {
    /// Fetch the pipeline report and lead list concurrently, then derive
    /// the dashboard values.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; nothing is aggregated on failure.
    pub async fn load(client: &ApiClient) -> Result<Self> {
        let query = LeadQuery::default();
        let (pipeline, leads) = try_join!(
            client.report_pipeline(),
            client.list_leads(&query),
        )?;

        let summary = PipelineSummary::from_counts(&pipeline);
        let mut recent_leads = reporting::sort_by_recency(leads);
        recent_leads.truncate(RECENT_LEAD_LIMIT);

        Ok(Self { summary, recent_leads })
    }

    /// The recent leads passing a quick filter, order preserved.
    #[must_use]
    pub fn filtered_leads(&self, filter: &StatusFilter) -> Vec<Lead> {
        reporting::filter_by_status(&self.recent_leads, filter)
    }
}

/// Data behind the reports screen: all three report feeds plus derived
/// metrics.
#[derive(Debug)]
pub struct ReportsScreen {
    pub last_week: Vec<ClosedLead>,
    pub pipeline: Vec<StatusCount>,
    pub closed_by_agent: Vec<AgentClosedCount>,
}

impl ReportsScreen {
    /// Fetch all three report feeds concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; nothing is aggregated on failure.
    pub async fn load(client: &ApiClient) -> Result<Self> {
        let (last_week, pipeline, closed_by_agent) = try_join!(
            client.report_last_week(),
            client.report_pipeline(),
            client.report_closed_by_agent(),
        )?;
        Ok(Self { last_week, pipeline, closed_by_agent })
    }

    #[must_use]
    pub fn summary(&self) -> PipelineSummary {
        PipelineSummary::from_counts(&self.pipeline)
    }

    /// Total leads across the whole pipeline.
    #[must_use]
    pub fn total_leads(&self) -> u64 {
        self.summary().total
    }

    /// Total closed deals across all agents.
    #[must_use]
    pub fn total_closed(&self) -> u64 {
        reporting::total_closed(&self.closed_by_agent)
    }

    /// Closed deals as a whole-number share of all leads.
    #[must_use]
    pub fn conversion_rate(&self) -> u64 {
        reporting::conversion_rate(self.total_closed(), self.total_leads())
    }

    /// The agent with the most closed deals, earliest on ties.
    #[must_use]
    pub fn top_performer(&self) -> Option<&AgentClosedCount> {
        reporting::top_performer(&self.closed_by_agent)
    }

    /// Each pipeline row with its share of the total, one decimal place.
    #[must_use]
    pub fn status_breakdown(&self) -> Vec<(&StatusCount, f64)> {
        let total = self.total_leads();
        self.pipeline
            .iter()
            .map(|row| (row, reporting::percentage_of(row.count, total)))
            .collect()
    }
}

/// Data behind the lead detail screen: the lead, its comments, and its
/// tags resolved to display names.
#[derive(Debug)]
pub struct LeadDetailScreen {
    pub lead: Lead,
    pub comments: Vec<Comment>,
    pub tag_names: Vec<String>,
}

impl LeadDetailScreen {
    /// Fetch the lead and its comments concurrently, then resolve tags.
    ///
    /// Tag resolution is best-effort: a failed catalog fetch falls back to
    /// raw stored values rather than failing the screen.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error from the lead/comments join.
    pub async fn load(client: &ApiClient, id: &LeadId) -> Result<Self> {
        let (lead, comments) = try_join!(client.get_lead(id), client.lead_comments(id))?;
        let tag_names = client.resolve_tags(&lead.tags).await;
        Ok(Self { lead, comments, tag_names })
    }
}

/// Data behind the agent management screen.
#[derive(Debug)]
pub struct AgentsScreen {
    pub agents: Vec<SalesAgent>,
}

impl AgentsScreen {
    /// Fetch the agent list.
    ///
    /// # Errors
    ///
    /// Returns error if the fetch fails.
    pub async fn load(client: &ApiClient) -> Result<Self> {
        let agents = client.list_agents().await?;
        Ok(Self { agents })
    }

    /// Leads assigned across all agents.
    #[must_use]
    pub fn total_leads(&self) -> u64 {
        self.agents.iter().map(|agent| agent.total_leads).sum()
    }

    /// Mean assigned-lead count, rounded to the nearest whole lead.
    #[must_use]
    pub fn average_leads(&self) -> u64 {
        reporting::average_leads_per_agent(&self.agents)
    }

    /// The agent with the most assigned leads, earliest on ties.
    #[must_use]
    pub fn top_agent(&self) -> Option<&SalesAgent> {
        reporting::top_agent_by_leads(&self.agents)
    }
}
