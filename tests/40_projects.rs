mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{call, get, portal, session_cookie, token, MockBackend};

fn donation_project() -> Value {
    json!({
        "id": "dp1",
        "title": "Clean water",
        "description": null,
        "location": "Batam",
        "targetFund": "10000",
        "currentFund": 2500,
        "startDate": "2024-01-01T00:00:00Z",
        "endDate": null,
        "approvalStatus": "approved",
        "projectStatus": "ongoing"
    })
}

fn volunteer_project(approval: &str) -> Value {
    json!({
        "id": "vp1",
        "title": "Teach English",
        "description": "Weekend classes",
        "location": "Bintan",
        "startDate": "2024-06-01T00:00:00Z",
        "endDate": "2024-06-30T00:00:00Z",
        "capacity": 12,
        "approvalStatus": approval,
        "projectStatus": "upcoming"
    })
}

#[tokio::test]
async fn optional_routes_attach_bearer_only_with_session() -> Result<()> {
    let backend = MockBackend::start().await?;
    backend.on(Method::GET, "/donation-projects", StatusCode::OK, json!([donation_project()]));

    let reply = get(portal(&backend), "/api/donation-projects", None).await?;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body[0]["title"], "Clean water");
    assert!(backend.last().authorization.is_none());

    let issued = token("p1", "partner", 600);
    let reply = get(portal(&backend), "/api/donation-projects", Some(&session_cookie(&issued))).await?;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(backend.last().authorization, Some(format!("Bearer {}", issued)));

    assert_eq!(backend.hits(), 2);
    Ok(())
}

#[tokio::test]
async fn optional_routes_still_reject_malformed_cookie() -> Result<()> {
    let backend = MockBackend::start().await?;
    let reply = get(portal(&backend), "/api/volunteer-projects/vp1", Some("token=garbage")).await?;

    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    assert_eq!(backend.hits(), 0);
    Ok(())
}

#[tokio::test]
async fn project_writes_require_session() -> Result<()> {
    let backend = MockBackend::start().await?;
    let app = || portal(&backend);

    for (method, uri) in [
        (Method::POST, "/api/donation-projects"),
        (Method::PUT, "/api/donation-projects/dp1"),
        (Method::DELETE, "/api/donation-projects/dp1"),
        (Method::POST, "/api/volunteer-projects"),
        (Method::PATCH, "/api/volunteer-projects/vp1/status"),
        (Method::GET, "/api/volunteer-projects/vp1/applications"),
        (Method::PATCH, "/api/applications/a1/status"),
    ] {
        let reply = call(app(), method.clone(), uri, None, Some(json!({}))).await?;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }

    assert_eq!(backend.hits(), 0);
    Ok(())
}

#[tokio::test]
async fn volunteer_status_update_is_validated() -> Result<()> {
    let backend = MockBackend::start().await?;
    let cookie = session_cookie(&token("pm1", "projectManager", 600));
    backend.on(Method::PATCH, "/volunteer-projects/vp1/status", StatusCode::OK, volunteer_project("approved"));

    let change = json!({ "approvalStatus": "approved" });
    let reply = call(
        portal(&backend),
        Method::PATCH,
        "/api/volunteer-projects/vp1/status",
        Some(&cookie),
        Some(change.clone()),
    )
    .await?;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["approvalStatus"], "approved");
    assert_eq!(reply.body["capacity"], 12);
    assert!(reply.body.get("hasApplied").is_none());

    let seen = backend.last();
    assert_eq!(seen.method, Method::PATCH);
    assert_eq!(seen.json(), change);

    backend.on(Method::PATCH, "/volunteer-projects/vp1/status", StatusCode::OK, volunteer_project("archived"));
    let reply = call(
        portal(&backend),
        Method::PATCH,
        "/api/volunteer-projects/vp1/status",
        Some(&cookie),
        Some(change),
    )
    .await?;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body["issues"][0]["path"], json!(["approvalStatus"]));
    assert_eq!(reply.body["issues"][0]["code"], "invalid_enum_value");
    Ok(())
}

#[tokio::test]
async fn delete_relays_empty_backend_answer() -> Result<()> {
    let backend = MockBackend::start().await?;
    backend.on_raw(Method::DELETE, "/donation-projects/dp1", StatusCode::NO_CONTENT, "");

    let cookie = session_cookie(&token("gm1", "generalManager", 600));
    let reply = call(portal(&backend), Method::DELETE, "/api/donation-projects/dp1", Some(&cookie), None).await?;

    assert_eq!(reply.status, StatusCode::NO_CONTENT);
    assert!(reply.raw.is_empty());
    assert!(backend.last().body.is_empty());
    Ok(())
}

#[tokio::test]
async fn create_relays_backend_status_and_body() -> Result<()> {
    let backend = MockBackend::start().await?;
    backend.on(Method::POST, "/volunteer-projects", StatusCode::CREATED, json!({ "id": "vp9", "draft": true }));

    let cookie = session_cookie(&token("p1", "partner", 600));
    let reply = call(
        portal(&backend),
        Method::POST,
        "/api/volunteer-projects",
        Some(&cookie),
        Some(json!({ "title": "New" })),
    )
    .await?;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body, json!({ "id": "vp9", "draft": true }));
    Ok(())
}

#[tokio::test]
async fn applications_are_validated() -> Result<()> {
    let backend = MockBackend::start().await?;
    backend.on(
        Method::GET,
        "/volunteer-projects/vp1/applications",
        StatusCode::OK,
        json!([{
            "id": "a1",
            "projectId": "vp1",
            "volunteerId": "p1",
            "status": "pending",
            "createdAt": "2024-06-02T08:30:00Z"
        }]),
    );

    let cookie = session_cookie(&token("pm1", "projectManager", 600));
    let reply = get(portal(&backend), "/api/volunteer-projects/vp1/applications?status=pending", Some(&cookie)).await?;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body[0]["status"], "pending");
    assert_eq!(backend.last().query.as_deref(), Some("status=pending"));
    Ok(())
}

#[tokio::test]
async fn partner_profile_is_not_treated_as_an_id() -> Result<()> {
    let backend = MockBackend::start().await?;
    let partner = json!({
        "id": "p1",
        "firstName": "Ana",
        "lastName": "Lim",
        "email": "ana@example.org",
        "contactNumber": null,
        "organisation": "Hope"
    });
    backend.on(Method::GET, "/partners/profile", StatusCode::OK, partner.clone());
    backend.on(Method::GET, "/partners/p1", StatusCode::OK, partner.clone());

    let cookie = session_cookie(&token("p1", "partner", 600));

    let reply = get(portal(&backend), "/api/partners/profile", Some(&cookie)).await?;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(backend.last().path, "/partners/profile");

    let reply = get(portal(&backend), "/api/partners/p1", Some(&cookie)).await?;
    assert_eq!(reply.body, partner);
    assert_eq!(backend.last().path, "/partners/p1");
    Ok(())
}

#[tokio::test]
async fn unknown_manager_roles_are_tolerated() -> Result<()> {
    let backend = MockBackend::start().await?;
    let manager = |role: Value| {
        json!([{
            "id": "m1",
            "firstName": "Wei",
            "lastName": "Ng",
            "email": "wei@example.org",
            "role": role,
            "contactNumber": null
        }])
    };
    let cookie = session_cookie(&token("sa1", "superAdmin", 600));

    backend.on(Method::GET, "/managers", StatusCode::OK, manager(json!("financeManager")));
    let reply = get(portal(&backend), "/api/managers", Some(&cookie)).await?;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body[0]["role"], "financeManager");

    backend.on(Method::GET, "/managers", StatusCode::OK, manager(json!("janitor")));
    let reply = get(portal(&backend), "/api/managers", Some(&cookie)).await?;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body[0]["role"], "unknown");

    backend.on(Method::GET, "/managers", StatusCode::OK, manager(json!(3)));
    let reply = get(portal(&backend), "/api/managers", Some(&cookie)).await?;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body["issues"][0]["path"], json!([0, "role"]));
    assert_eq!(reply.body["issues"][0]["code"], "invalid_type");
    Ok(())
}

#[tokio::test]
async fn negative_capacity_is_reported_at_its_field() -> Result<()> {
    let backend = MockBackend::start().await?;
    let mut project = volunteer_project("approved");
    project["capacity"] = json!(-1);
    backend.on(Method::GET, "/volunteer-projects/vp1", StatusCode::OK, project);

    let reply = get(portal(&backend), "/api/volunteer-projects/vp1", None).await?;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body["code"], "CONTRACT_VIOLATION");
    let issues = reply.body["issues"].as_array().expect("issues array");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["path"], json!(["capacity"]));
    assert_eq!(issues[0]["code"], "too_small");
    Ok(())
}

#[tokio::test]
async fn padded_fund_string_is_reported_not_dropped() -> Result<()> {
    let backend = MockBackend::start().await?;
    let mut project = donation_project();
    project["currentFund"] = json!(" 2500 ");
    backend.on(Method::GET, "/donation-projects/dp1", StatusCode::OK, project);

    let reply = get(portal(&backend), "/api/donation-projects/dp1", None).await?;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body["issues"][0]["path"], json!(["currentFund"]));
    assert_eq!(reply.body["issues"][0]["code"], "invalid_format");
    Ok(())
}

#[tokio::test]
async fn donation_project_detail_drift_is_a_contract_violation() -> Result<()> {
    let backend = MockBackend::start().await?;
    let mut project = donation_project();
    project["currentFund"] = json!(true);
    project["approvalStatus"] = json!("maybe");
    backend.on(Method::GET, "/donation-projects/dp1", StatusCode::OK, project);

    let reply = get(portal(&backend), "/api/donation-projects/dp1", None).await?;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body["code"], "CONTRACT_VIOLATION");
    let issues = reply.body["issues"].as_array().expect("issues array");
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["path"], json!(["approvalStatus"]));
    assert_eq!(issues[0]["code"], "invalid_enum_value");
    assert_eq!(issues[1]["path"], json!(["currentFund"]));
    assert_eq!(issues[1]["code"], "invalid_type");
    Ok(())
}

fn campaign(status: &str) -> Value {
    json!({
        "id": "c1",
        "name": "Year end",
        "subject": "Thank you",
        "status": status,
        "scheduledAt": null
    })
}

#[tokio::test]
async fn email_campaign_drift_is_a_contract_violation() -> Result<()> {
    let backend = MockBackend::start().await?;
    let cookie = session_cookie(&token("gm1", "generalManager", 600));

    backend.on(Method::GET, "/email-campaigns", StatusCode::OK, json!([campaign("draft"), campaign("paused")]));
    let reply = get(portal(&backend), "/api/email-campaigns", Some(&cookie)).await?;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body["code"], "CONTRACT_VIOLATION");
    assert_eq!(reply.body["issues"][0]["path"], json!([1, "status"]));
    assert_eq!(reply.body["issues"][0]["code"], "invalid_enum_value");

    let mut single = campaign("sent");
    single["scheduledAt"] = json!("next week");
    backend.on(Method::GET, "/email-campaigns/c1", StatusCode::OK, single);
    let reply = get(portal(&backend), "/api/email-campaigns/c1", Some(&cookie)).await?;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body["issues"][0]["path"], json!(["scheduledAt"]));
    assert_eq!(reply.body["issues"][0]["code"], "invalid_format");

    backend.on(Method::GET, "/email-campaigns/c1", StatusCode::OK, campaign("scheduled"));
    let reply = get(portal(&backend), "/api/email-campaigns/c1", Some(&cookie)).await?;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["status"], "scheduled");
    Ok(())
}

#[tokio::test]
async fn feedback_list_drift_is_a_contract_violation() -> Result<()> {
    let backend = MockBackend::start().await?;
    backend.on(
        Method::GET,
        "/feedback",
        StatusCode::OK,
        json!([{
            "id": "f1",
            "partnerId": "p1",
            "rating": "five",
            "comments": null,
            "createdAt": "2024-07-01T12:00:00Z"
        }]),
    );

    let cookie = session_cookie(&token("gm1", "generalManager", 600));
    let reply = get(portal(&backend), "/api/feedback", Some(&cookie)).await?;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body["code"], "CONTRACT_VIOLATION");
    assert_eq!(reply.body["issues"][0]["path"], json!([0, "rating"]));
    assert_eq!(reply.body["issues"][0]["code"], "invalid_type");
    Ok(())
}

#[tokio::test]
async fn campaign_send_and_feedback_delete_are_forwarded() -> Result<()> {
    let backend = MockBackend::start().await?;
    backend.on(Method::POST, "/email-campaigns/c1/send", StatusCode::ACCEPTED, json!({ "queued": 40 }));
    backend.on(Method::DELETE, "/feedback/f1", StatusCode::OK, json!({ "deleted": true }));

    let cookie = session_cookie(&token("gm1", "generalManager", 600));

    let reply = call(portal(&backend), Method::POST, "/api/email-campaigns/c1/send", Some(&cookie), None).await?;
    assert_eq!(reply.status, StatusCode::ACCEPTED);
    assert_eq!(reply.body["queued"], 40);

    let reply = call(portal(&backend), Method::DELETE, "/api/feedback/f1", Some(&cookie), None).await?;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(backend.last().method, Method::DELETE);
    assert_eq!(backend.last().path, "/feedback/f1");
    Ok(())
}
