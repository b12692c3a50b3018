//! Lead management: list, show, add, delete, comment.

use clap::Subcommand;

use anvaya_client::ApiClient;
use anvaya_client::screens::LeadDetailScreen;
use anvaya_core::{
    AgentId, LeadId, LeadPriority, LeadQuery, LeadSource, LeadStatus, LeadUpsert, NewComment,
    TagRef,
};

use crate::render;

#[derive(Subcommand)]
pub enum LeadAction {
    /// List leads with optional server-side filters
    List {
        /// Filter by status (e.g. "New", "Proposal Sent")
        #[arg(long)]
        status: Option<String>,

        /// Filter by assigned agent id
        #[arg(long)]
        agent: Option<String>,

        /// Filter by source (e.g. "Referral", "Cold Call")
        #[arg(long)]
        source: Option<String>,

        /// Filter by priority (High, Medium, Low)
        #[arg(long)]
        priority: Option<String>,
    },
    /// Show one lead with comments and resolved tags
    Show {
        /// Lead id
        id: String,
    },
    /// Create a lead
    Add {
        #[arg(long)]
        name: String,

        /// Lead source (default: Website)
        #[arg(long, default_value = "Website")]
        source: String,

        /// Assigned agent id; omit for unassigned
        #[arg(long)]
        agent: Option<String>,

        /// Initial status (default: New)
        #[arg(long, default_value = "New")]
        status: String,

        /// Tags, by id or name; repeatable
        #[arg(long)]
        tag: Vec<String>,

        /// Estimated days to close (default: 30)
        #[arg(long, default_value_t = 30)]
        time_to_close: u32,

        /// Priority (default: Medium)
        #[arg(long, default_value = "Medium")]
        priority: String,
    },
    /// Replace a lead's fields
    Update {
        /// Lead id
        id: String,

        #[arg(long)]
        name: String,

        /// Lead source (default: Website)
        #[arg(long, default_value = "Website")]
        source: String,

        /// Assigned agent id; omit for unassigned
        #[arg(long)]
        agent: Option<String>,

        /// Pipeline status (default: New)
        #[arg(long, default_value = "New")]
        status: String,

        /// Tags, by id or name; repeatable
        #[arg(long)]
        tag: Vec<String>,

        /// Estimated days to close (default: 30)
        #[arg(long, default_value_t = 30)]
        time_to_close: u32,

        /// Priority (default: Medium)
        #[arg(long, default_value = "Medium")]
        priority: String,
    },
    /// Delete a lead
    Delete {
        /// Lead id
        id: String,
    },
    /// Comment on a lead
    Comment {
        /// Lead id
        id: String,

        /// Comment text
        text: String,

        /// Author agent id
        #[arg(long)]
        author: String,
    },
}

pub async fn run(client: &ApiClient, action: LeadAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LeadAction::List { status, agent, source, priority } => {
            let query = LeadQuery { status, sales_agent: agent, source, priority };
            let leads = client.list_leads(&query).await?;
            if leads.is_empty() {
                println!("No leads found");
            } else {
                for lead in &leads {
                    println!("{}", render::lead_line(lead));
                }
                println!("({} leads)", leads.len());
            }
        }
        LeadAction::Show { id } => {
            let screen = LeadDetailScreen::load(client, &LeadId::new(id)).await?;
            let lead = &screen.lead;
            println!("{}", render::heading(&lead.name));
            println!("  status:        {}", lead.status);
            println!("  priority:      {}", lead.priority);
            println!("  source:        {}", lead.source);
            println!("  agent:         {}", lead.agent_name());
            println!("  time to close: {} days", lead.time_to_close);
            println!("  created:       {}", render::short_date(lead.created_at));
            if screen.tag_names.is_empty() {
                println!("  tags:          (none)");
            } else {
                println!("  tags:          {}", screen.tag_names.join(", "));
            }
            println!();
            println!("{}", render::heading("Comments"));
            if screen.comments.is_empty() {
                println!("  No comments yet");
            } else {
                for comment in &screen.comments {
                    println!(
                        "  [{}] {}: {}",
                        render::short_date(comment.created_at),
                        comment.author.display_name(),
                        comment.comment_text,
                    );
                }
            }
        }
        LeadAction::Add { name, source, agent, status, tag, time_to_close, priority } => {
            let payload = LeadUpsert {
                name,
                source: LeadSource::from(source),
                sales_agent: agent.map(AgentId::new),
                status: LeadStatus::from(status),
                tags: tag.into_iter().map(TagRef::from).collect(),
                time_to_close,
                priority: LeadPriority::from(priority),
            };
            let lead = client.create_lead(&payload).await?;
            println!("Created lead {} ({})", lead.name, lead.id);
        }
        LeadAction::Update { id, name, source, agent, status, tag, time_to_close, priority } => {
            let payload = LeadUpsert {
                name,
                source: LeadSource::from(source),
                sales_agent: agent.map(AgentId::new),
                status: LeadStatus::from(status),
                tags: tag.into_iter().map(TagRef::from).collect(),
                time_to_close,
                priority: LeadPriority::from(priority),
            };
            let lead = client.update_lead(&LeadId::new(id), &payload).await?;
            println!("Updated lead {} ({})", lead.name, lead.id);
        }
        LeadAction::Delete { id } => {
            let id = LeadId::new(id);
            client.delete_lead(&id).await?;
            println!("Deleted lead {id}");
        }
        LeadAction::Comment { id, text, author } => {
            let comment = client
                .add_comment(
                    &LeadId::new(id),
                    &NewComment { author: AgentId::new(author), comment_text: text },
                )
                .await?;
            println!(
                "Comment added by {} at {}",
                comment.author.display_name(),
                render::short_date(comment.created_at),
            );
        }
    }
    Ok(())
}
