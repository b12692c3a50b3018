//! Tag catalog management.

use clap::Subcommand;
use tracing::warn;

use anvaya_client::ApiClient;
use anvaya_core::NewTag;
use anvaya_core::models::tag::INITIAL_TAGS;

use crate::render;

#[derive(Subcommand)]
pub enum TagAction {
    /// List the tag catalog
    List,
    /// Create a tag
    Add {
        #[arg(short, long)]
        name: String,
    },
    /// Create the stock tag set on a fresh backend
    Seed,
}

pub async fn run(client: &ApiClient, action: TagAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TagAction::List => {
            let tags = client.list_tags().await?;
            println!("{}", render::heading("Tags"));
            if tags.is_empty() {
                println!("  No tags yet");
            }
            for tag in &tags {
                println!("  {}  {}", tag.id, tag.name);
            }
        }
        TagAction::Add { name } => {
            let tag = client.create_tag(&NewTag { name }).await?;
            println!("Created tag {} ({})", tag.name, tag.id);
        }
        TagAction::Seed => {
            for name in INITIAL_TAGS {
                match client.create_tag(&NewTag { name: name.to_string() }).await {
                    Ok(tag) => println!("Created tag {}", tag.name),
                    // A duplicate on re-seed is expected; keep going
                    Err(e) => warn!(tag = name, error = %e, "Skipping tag"),
                }
            }
        }
    }
    Ok(())
}
