//! Sales agent management.

use clap::Subcommand;

use anvaya_client::ApiClient;
use anvaya_client::screens::AgentsScreen;
use anvaya_core::{AgentId, NewAgent};

use crate::render;

#[derive(Subcommand)]
pub enum AgentAction {
    /// List agents with workload summary
    List,
    /// Create an agent
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,
    },
    /// Delete an agent
    Delete {
        /// Agent id
        id: String,
    },
}

pub async fn run(
    client: &ApiClient,
    action: AgentAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AgentAction::List => {
            let screen = AgentsScreen::load(client).await?;
            println!("{}", render::heading("Sales Agents"));
            if screen.agents.is_empty() {
                println!("  No agents yet");
                return Ok(());
            }
            for agent in &screen.agents {
                println!(
                    "  {}  {:<20} {:<30} {} leads",
                    agent.id, agent.name, agent.email, agent.total_leads,
                );
            }
            println!();
            println!("  Total assigned leads: {}", screen.total_leads());
            println!("  Average per agent:    {}", screen.average_leads());
            if let Some(top) = screen.top_agent() {
                println!("  Top agent:            {} ({} leads)", top.name, top.total_leads);
            }
        }
        AgentAction::Add { name, email } => {
            let agent = client.create_agent(&NewAgent { name, email }).await?;
            println!("Created agent {} ({})", agent.name, agent.id);
        }
        AgentAction::Delete { id } => {
            let id = AgentId::new(id);
            client.delete_agent(&id).await?;
            println!("Deleted agent {id}");
        }
    }
    Ok(())
}
