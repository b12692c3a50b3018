//! Small text-rendering helpers shared by the command modules.

use chrono::{DateTime, Utc};

use anvaya_core::Lead;

/// Date in the short form the listings use.
pub fn short_date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// One-line lead summary for list views.
pub fn lead_line(lead: &Lead) -> String {
    format!(
        "{}  {:<24} {:<14} {:<8} {:<14} {}",
        lead.id,
        truncate(&lead.name, 24),
        lead.status,
        lead.priority,
        truncate(lead.agent_name(), 14),
        short_date(lead.created_at),
    )
}

/// Section header with an underline.
pub fn heading(title: &str) -> String {
    format!("{title}\n{}", "-".repeat(title.len()))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
