//! End-to-end tests of `ApiClient` against a mocked backend: request
//! shapes, bearer propagation, and error mapping.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use anvaya_client::ApiError;
use anvaya_core::{
    AgentId, LeadId, LeadPriority, LeadQuery, LeadSource, LeadStatus, LeadUpsert, NewAgent,
    NewComment, NewTag, TagId, TagRef,
};

use anvaya_integration_tests::{TestContext, make_token};

#[tokio::test]
async fn login_returns_token_and_session_persists_it() {
    let mut ctx = TestContext::new().await;
    let token = make_token(&json!({"id": "u1", "name": "Priya", "email": "priya@example.com"}));

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "priya@example.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": token})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let got = ctx.client().login("priya@example.com", "secret").await.unwrap();
    assert_eq!(got, token);

    ctx.session.store_token(&got).unwrap();
    assert!(ctx.session.is_authenticated());
    assert_eq!(ctx.session.claims().unwrap().display_name(), "Priya");
}

#[tokio::test]
async fn login_failure_maps_to_auth_error() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .mount(&ctx.server)
        .await;

    let err = ctx.client().login("x@example.com", "wrong").await.unwrap_err();
    assert!(matches!(err, ApiError::Auth(ref msg) if msg == "Invalid credentials"));
}

#[tokio::test]
async fn bearer_token_is_attached_after_login() {
    let mut ctx = TestContext::new().await;
    let token = make_token(&json!({"id": "u1"}));
    ctx.session.store_token(&token).unwrap();

    Mock::given(method("GET"))
        .and(path("/leads"))
        .and(header("authorization", format!("Bearer {token}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let leads = ctx.client().list_leads(&LeadQuery::default()).await.unwrap();
    assert!(leads.is_empty());
}

#[tokio::test]
async fn lead_filters_become_query_params() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/leads"))
        .and(query_param("status", "Proposal Sent"))
        .and(query_param("priority", "High"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "_id": "64b1f9ab12cd34ef56ab78cd",
            "name": "Acme Corp",
            "source": "Referral",
            "status": "Proposal Sent",
            "priority": "High",
            "salesAgent": {"_id": "64b1f9ab12cd34ef56ab78ce", "name": "Priya"},
            "tags": [],
            "timeToClose": 14,
            "createdAt": "2024-06-01T10:00:00Z"
        }])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let query = LeadQuery {
        status: Some("Proposal Sent".to_string()),
        priority: Some("High".to_string()),
        ..LeadQuery::default()
    };
    let leads = ctx.client().list_leads(&query).await.unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].agent_name(), "Priya");
}

#[tokio::test]
async fn missing_lead_maps_to_not_found() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/leads/ffffffffffffffffffffffff"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Lead not found"})))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client()
        .get_lead(&LeadId::new("ffffffffffffffffffffffff"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn validation_error_payload_is_surfaced() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/agents"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "Agent with this email already exists"})),
        )
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client()
        .create_agent(&NewAgent {
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "API error: 400 - Agent with this email already exists"
    );
}

#[tokio::test]
async fn malformed_payload_maps_to_parse_error() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&ctx.server)
        .await;

    let err = ctx.client().list_agents().await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn add_comment_posts_wire_shape() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/leads/64b1f9ab12cd34ef56ab78cd/comments"))
        .and(body_json(json!({
            "author": "64b1f9ab12cd34ef56ab78ce",
            "commentText": "Followed up by phone"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "64b1f9ab12cd34ef56ab78d0",
            "lead": "64b1f9ab12cd34ef56ab78cd",
            "author": {"_id": "64b1f9ab12cd34ef56ab78ce", "name": "Priya"},
            "commentText": "Followed up by phone",
            "createdAt": "2024-06-02T09:30:00Z"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let comment = ctx
        .client()
        .add_comment(
            &LeadId::new("64b1f9ab12cd34ef56ab78cd"),
            &NewComment {
                author: AgentId::new("64b1f9ab12cd34ef56ab78ce"),
                comment_text: "Followed up by phone".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(comment.author.display_name(), "Priya");
}

#[tokio::test]
async fn update_lead_puts_full_replacement() {
    let ctx = TestContext::new().await;

    Mock::given(method("PUT"))
        .and(path("/leads/64b1f9ab12cd34ef56ab78cd"))
        .and(body_json(json!({
            "name": "Acme Corp",
            "source": "Referral",
            "salesAgent": "64b1f9ab12cd34ef56ab78ce",
            "status": "Qualified",
            "tags": ["Tech"],
            "timeToClose": 21,
            "priority": "High"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "64b1f9ab12cd34ef56ab78cd",
            "name": "Acme Corp",
            "source": "Referral",
            "status": "Qualified",
            "priority": "High",
            "salesAgent": {"_id": "64b1f9ab12cd34ef56ab78ce", "name": "Priya"},
            "tags": ["Tech"],
            "timeToClose": 21,
            "createdAt": "2024-06-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let payload = LeadUpsert {
        name: "Acme Corp".to_string(),
        source: LeadSource::Referral,
        sales_agent: Some(AgentId::new("64b1f9ab12cd34ef56ab78ce")),
        status: LeadStatus::Qualified,
        tags: vec![TagRef::Name("Tech".to_string())],
        time_to_close: 21,
        priority: LeadPriority::High,
    };
    let lead = ctx
        .client()
        .update_lead(&LeadId::new("64b1f9ab12cd34ef56ab78cd"), &payload)
        .await
        .unwrap();
    assert_eq!(lead.status, LeadStatus::Qualified);
    assert_eq!(lead.agent_name(), "Priya");
}

#[tokio::test]
async fn delete_lead_succeeds_on_200() {
    let ctx = TestContext::new().await;

    Mock::given(method("DELETE"))
        .and(path("/leads/64b1f9ab12cd34ef56ab78cd"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Lead deleted"})),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client()
        .delete_lead(&LeadId::new("64b1f9ab12cd34ef56ab78cd"))
        .await
        .unwrap();
}

#[tokio::test]
async fn tag_catalog_is_cached_across_calls() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "64b1f9ab12cd34ef56ab78cf", "name": "Finance"}
        ])))
        .expect(1) // second call must be served from cache
        .mount(&ctx.server)
        .await;

    let client = ctx.client();
    let first = client.tag_catalog().await.unwrap();
    let second = client.tag_catalog().await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second[0].name, "Finance");
}

#[tokio::test]
async fn get_tag_fetches_by_id() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/tags/64b1f9ab12cd34ef56ab78cf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "64b1f9ab12cd34ef56ab78cf",
            "name": "Finance"
        })))
        .mount(&ctx.server)
        .await;

    let tag = ctx
        .client()
        .get_tag(&TagId::new("64b1f9ab12cd34ef56ab78cf"))
        .await
        .unwrap();
    assert_eq!(tag.name, "Finance");
}

#[tokio::test]
async fn create_tag_posts_name() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/tags"))
        .and(body_json(json!({"name": "High Value"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "64b1f9ab12cd34ef56ab78d1",
            "name": "High Value"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let tag = ctx
        .client()
        .create_tag(&NewTag { name: "High Value".to_string() })
        .await
        .unwrap();
    assert_eq!(tag.name, "High Value");
}
