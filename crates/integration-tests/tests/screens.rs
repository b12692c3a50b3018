//! Screen loader tests: concurrent fetches joined before aggregation,
//! derived values, and the all-or-nothing partial-failure policy.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use anvaya_client::ApiError;
use anvaya_client::screens::{AgentsScreen, DashboardScreen, LeadDetailScreen, ReportsScreen};
use anvaya_core::LeadId;
use anvaya_core::reporting::StatusFilter;

use anvaya_integration_tests::TestContext;

fn lead_json(id: &str, name: &str, status: &str, created_at: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "name": name,
        "source": "Website",
        "status": status,
        "priority": "Medium",
        "salesAgent": {"_id": "64b1f9ab12cd34ef56ab78ce", "name": "Priya"},
        "tags": [],
        "timeToClose": 30,
        "createdAt": created_at
    })
}

#[tokio::test]
async fn dashboard_aggregates_pipeline_and_recent_leads() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/report/pipeline"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"status": "New", "count": 3},
            {"status": "Closed", "count": 2}
        ])))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/leads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            lead_json("64b1f9ab12cd34ef56ab78c1", "oldest", "New", "2024-06-01T08:00:00Z"),
            lead_json("64b1f9ab12cd34ef56ab78c2", "newest", "Closed", "2024-06-03T08:00:00Z"),
            lead_json("64b1f9ab12cd34ef56ab78c3", "middle", "New", "2024-06-02T08:00:00Z"),
        ])))
        .mount(&ctx.server)
        .await;

    let screen = DashboardScreen::load(&ctx.client()).await.unwrap();

    // Pipeline scenario: total 5, New=60%, Closed=40%
    assert_eq!(screen.summary.total, 5);
    assert_eq!(screen.summary.new, 3);
    assert_eq!(screen.summary.closed, 2);

    // Recent leads sorted newest-first
    let names: Vec<&str> = screen.recent_leads.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["newest", "middle", "oldest"]);

    // Quick filter is case-insensitive and preserves order
    let filtered = screen.filtered_leads(&"new".parse::<StatusFilter>().unwrap());
    let names: Vec<&str> = filtered.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["middle", "oldest"]);
}

#[tokio::test]
async fn dashboard_fails_whole_screen_when_one_fetch_fails() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/report/pipeline"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "Aggregation failed"})),
        )
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/leads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&ctx.server)
        .await;

    // One failed fetch fails the load; no partial dashboard is produced
    let err = DashboardScreen::load(&ctx.client()).await.unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 500, .. }));
}

#[tokio::test]
async fn reports_screen_derives_metrics_from_all_three_feeds() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/report/last-week"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "64b1f9ab12cd34ef56ab78c1", "name": "Acme Corp", "salesAgent": "Priya"}
        ])))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/report/pipeline"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"status": "New", "count": 4},
            {"status": "Closed", "count": 4},
            {"status": "Qualified", "count": 4}
        ])))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/report/closed-by-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"agentName": "A", "totalClosed": 2},
            {"agentName": "B", "totalClosed": 5},
            {"agentName": "C", "totalClosed": 5}
        ])))
        .mount(&ctx.server)
        .await;

    let screen = ReportsScreen::load(&ctx.client()).await.unwrap();

    assert_eq!(screen.total_leads(), 12);
    assert_eq!(screen.total_closed(), 12);
    assert_eq!(screen.conversion_rate(), 100);
    // Tie on 5 closed: earliest wins
    assert_eq!(screen.top_performer().unwrap().agent_name, "B");

    let breakdown = screen.status_breakdown();
    assert_eq!(breakdown.len(), 3);
    assert!((breakdown[0].1 - 33.3).abs() < f64::EPSILON);

    assert_eq!(screen.last_week.len(), 1);
    assert_eq!(screen.last_week[0].sales_agent.as_deref(), Some("Priya"));
}

#[tokio::test]
async fn reports_screen_is_all_or_nothing_on_partial_failure() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/report/last-week"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/report/pipeline"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/report/closed-by-agent"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"error": "Service unavailable"})),
        )
        .mount(&ctx.server)
        .await;

    let err = ReportsScreen::load(&ctx.client()).await.unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 503, .. }));
}

#[tokio::test]
async fn lead_detail_joins_comments_and_resolves_tags() {
    let ctx = TestContext::new().await;
    let lead_id = "64b1f9ab12cd34ef56ab78cd";

    let mut lead = lead_json(lead_id, "Acme Corp", "Qualified", "2024-06-01T10:00:00Z");
    lead["tags"] = json!(["Tech", "64b1f9ab12cd34ef56ab78cf"]);

    Mock::given(method("GET"))
        .and(path(format!("/leads/{lead_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(lead))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/leads/{lead_id}/comments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "_id": "64b1f9ab12cd34ef56ab78d0",
            "lead": lead_id,
            "author": {"_id": "64b1f9ab12cd34ef56ab78ce", "name": "Priya"},
            "commentText": "Sent proposal",
            "createdAt": "2024-06-02T09:30:00Z"
        }])))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "64b1f9ab12cd34ef56ab78cf", "name": "Finance"}
        ])))
        .mount(&ctx.server)
        .await;

    let screen = LeadDetailScreen::load(&ctx.client(), &LeadId::new(lead_id))
        .await
        .unwrap();

    assert_eq!(screen.lead.name, "Acme Corp");
    assert_eq!(screen.comments.len(), 1);
    // Legacy raw name passes through; id resolves to catalog name
    assert_eq!(screen.tag_names, ["Tech", "Finance"]);
}

#[tokio::test]
async fn lead_detail_tag_resolution_survives_catalog_failure() {
    let ctx = TestContext::new().await;
    let lead_id = "64b1f9ab12cd34ef56ab78cd";

    let mut lead = lead_json(lead_id, "Acme Corp", "New", "2024-06-01T10:00:00Z");
    lead["tags"] = json!(["Tech", "64b1f9ab12cd34ef56ab78cf"]);

    Mock::given(method("GET"))
        .and(path(format!("/leads/{lead_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(lead))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/leads/{lead_id}/comments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&ctx.server)
        .await;

    let screen = LeadDetailScreen::load(&ctx.client(), &LeadId::new(lead_id))
        .await
        .unwrap();

    // No tag is dropped: raw stored values are displayed instead
    assert_eq!(screen.tag_names, ["Tech", "64b1f9ab12cd34ef56ab78cf"]);
}

#[tokio::test]
async fn agents_screen_derives_workload_summary() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "64b1f9ab12cd34ef56ab78c1", "name": "Priya", "email": "priya@example.com", "totalLeads": 7},
            {"_id": "64b1f9ab12cd34ef56ab78c2", "name": "Ravi", "email": "ravi@example.com", "totalLeads": 4}
        ])))
        .mount(&ctx.server)
        .await;

    let screen = AgentsScreen::load(&ctx.client()).await.unwrap();
    assert_eq!(screen.total_leads(), 11);
    assert_eq!(screen.average_leads(), 6); // 11/2 rounded
    assert_eq!(screen.top_agent().unwrap().name, "Priya");
}
