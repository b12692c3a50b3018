//! The reports screen: key metrics, status breakdown, agent performance,
//! recent closed leads.

use anvaya_client::ApiClient;
use anvaya_client::screens::ReportsScreen;
use anvaya_core::reporting;

use crate::render;

pub async fn show(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    let screen = ReportsScreen::load(client).await?;

    println!("{}", render::heading("Key Performance Metrics"));
    println!("  Total leads:     {}", screen.total_leads());
    println!("  Closed deals:    {}", screen.total_closed());
    println!("  Conversion rate: {}%", screen.conversion_rate());
    println!("  Active agents:   {}", screen.closed_by_agent.len());

    println!();
    println!("{}", render::heading("Lead Status Distribution"));
    if screen.pipeline.is_empty() {
        println!("  No pipeline data available");
    } else {
        for (row, percentage) in screen.status_breakdown() {
            println!("  {:<14} {:>4} leads ({percentage}%)", row.status.to_string(), row.count);
        }
    }

    println!();
    println!("{}", render::heading("Agent Performance"));
    if screen.closed_by_agent.is_empty() {
        println!("  No agent performance data available");
    } else {
        let total_closed = screen.total_closed();
        for row in &screen.closed_by_agent {
            println!(
                "  {:<20} {:>3} closed ({}%)",
                row.agent_name,
                row.total_closed,
                reporting::percentage_of(row.total_closed, total_closed),
            );
        }
        if let Some(top) = screen.top_performer() {
            println!();
            println!(
                "  Top performer: {} with {} closed deals ({}% of total)",
                top.agent_name,
                top.total_closed,
                reporting::percentage_of(top.total_closed, total_closed),
            );
        }
    }

    println!();
    println!("{}", render::heading("Recent Closed Leads"));
    if screen.last_week.is_empty() {
        println!("  No leads closed recently");
    } else {
        for lead in &screen.last_week {
            println!(
                "  {:<24} {}",
                lead.name,
                lead.sales_agent.as_deref().unwrap_or("Unassigned"),
            );
        }
        println!("  ({} closed in the last week)", screen.last_week.len());
    }
    Ok(())
}
