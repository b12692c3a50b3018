//! The dashboard: pipeline overview plus recent leads with a quick filter.

use anvaya_client::ApiClient;
use anvaya_client::screens::DashboardScreen;
use anvaya_core::reporting::StatusFilter;

use crate::render;

pub async fn show(client: &ApiClient, filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    // Infallible: unknown filter text just matches nothing
    let filter: StatusFilter = filter.parse()?;
    let screen = DashboardScreen::load(client).await?;
    let summary = &screen.summary;

    println!("{}", render::heading("Lead Status Overview"));
    println!("  New leads:     {}", summary.new);
    println!("  Contacted:     {}", summary.contacted);
    println!("  Qualified:     {}", summary.qualified);
    println!("  Proposal sent: {}", summary.proposal_sent);
    println!("  Closed:        {}", summary.closed);
    if summary.uncategorized > 0 {
        println!("  Uncategorized: {}", summary.uncategorized);
    }
    println!("  Total leads:   {}", summary.total);

    println!();
    println!("{}", render::heading("Recent Leads"));
    let leads = screen.filtered_leads(&filter);
    if leads.is_empty() {
        match &filter {
            StatusFilter::All => println!("  No leads found"),
            StatusFilter::Only(status) => println!("  No {status} leads found"),
        }
    } else {
        for lead in &leads {
            println!("  {}", render::lead_line(lead));
        }
    }
    Ok(())
}
