//! Anvaya CLI - Headless front end for the Anvaya CRM backend.
//!
//! # Usage
//!
//! ```bash
//! # Log in and persist the bearer token
//! anvaya login -e agent@example.com -p secret
//!
//! # Dashboard: pipeline overview and recent leads
//! anvaya dashboard --filter qualified
//!
//! # Lead management
//! anvaya leads list --status "Proposal Sent" --priority High
//! anvaya leads show 64b1f9ab12cd34ef56ab78cd
//! anvaya leads add --name "Acme Corp" --source Referral --agent <ID>
//!
//! # Reports
//! anvaya reports
//! ```
//!
//! # Commands
//!
//! - `login` / `logout` / `whoami` - Session management
//! - `dashboard` - Pipeline overview and recent leads
//! - `leads` - List, inspect, create, update, delete, and comment on leads
//! - `agents` - Manage sales agents
//! - `tags` - Manage the tag catalog
//! - `reports` - Full reporting screen

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)] // Rendering to stdout is this crate's job

use clap::{Parser, Subcommand};

use anvaya_client::{ApiClient, AuthSession, ClientConfig};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "anvaya")]
#[command(author, version, about = "Anvaya CRM command-line client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the bearer token
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the persisted token
    Logout,
    /// Show the logged-in identity
    Whoami,
    /// Pipeline overview and recent leads
    Dashboard {
        /// Quick filter: "all" or a status name (case-insensitive)
        #[arg(short, long, default_value = "all")]
        filter: String,
    },
    /// Manage leads
    Leads {
        #[command(subcommand)]
        action: commands::leads::LeadAction,
    },
    /// Manage sales agents
    Agents {
        #[command(subcommand)]
        action: commands::agents::AgentAction,
    },
    /// Manage the tag catalog
    Tags {
        #[command(subcommand)]
        action: commands::tags::TagAction,
    },
    /// Full reporting screen
    Reports,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let session = AuthSession::init(&config)?;
    let client = ApiClient::new(&config, &session)?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&client, &config, &email, &password).await?;
        }
        Commands::Logout => commands::auth::logout(session)?,
        Commands::Whoami => commands::auth::whoami(&session),
        Commands::Dashboard { filter } => {
            commands::dashboard::show(&client, &filter).await?;
        }
        Commands::Leads { action } => commands::leads::run(&client, action).await?,
        Commands::Agents { action } => commands::agents::run(&client, action).await?,
        Commands::Tags { action } => commands::tags::run(&client, action).await?,
        Commands::Reports => commands::reports::show(&client).await?,
    }

    Ok(())
}
