//! HTTP-level integration tests for `/api/v1/dashboard`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_empty_app, build_test_app, get, post_json, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: the view derives counts and critical roles from the demo data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_view_from_demo_data() {
    let response = get(build_test_app(), "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let view = body_json(response).await["data"].clone();
    assert_eq!(view["activeRoles"], 5);
    assert_eq!(view["interviewsScheduled"], 3);
    assert_eq!(
        view["notice"],
        "Using demo data. Connect a database to save changes permanently."
    );
    assert_eq!(
        view["activeRolesByFunction"],
        json!({ "Business Ops": 1, "Engineering": 2, "People Ops": 1, "Product": 1 })
    );

    let critical: Vec<&str> = view["criticalRoles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["role"]["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        critical,
        vec!["Sr. PM – AI/ML", "Exec Asst. to CEO", "Process Eng – US"]
    );
    assert_eq!(
        view["criticalRoles"][0]["bottlenecks"][0]["description"],
        "Feedback delay from hiring managers"
    );
    assert!(view["remainingBottlenecks"].as_array().unwrap().is_empty());

    assert_eq!(view["roleFilterOptions"][0], "All Roles");
    assert_eq!(
        view["stageFilterOptions"],
        json!(["All Stages", "L1 Screen", "L2 Tech", "Final", "Offer Released"])
    );
    assert_eq!(view["candidates"].as_array().unwrap().len(), 4);
    assert!(view["headcountChart"]["bars"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: an empty store still renders, without a notice
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_dashboard_renders() {
    let view = body_json(get(build_empty_app(), "/api/v1/dashboard").await).await["data"].clone();
    assert_eq!(view["activeRoles"], 0);
    assert!(view["notice"].is_null());
    assert_eq!(view["roleFilterOptions"], json!(["All Roles"]));
    assert_eq!(view["headcountChart"]["maxTotal"], 0);
}

// ---------------------------------------------------------------------------
// Test: exits dated this month show up in the monthly metrics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn monthly_attrition_counts_current_month() {
    let app = build_test_app();
    let today = chrono::Local::now().date_naive();

    let response = post_json(
        app.clone(),
        "/api/v1/attrition",
        json!({
            "employeeName": "Kiran Rao",
            "role": "Process Eng – US",
            "exitDate": today.to_string(),
            "reason": "Relocation"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let view = body_json(get(app, "/api/v1/dashboard").await).await["data"].clone();
    assert_eq!(view["monthly"]["attritionThisMonth"], 1);
    assert_eq!(view["monthly"]["newJoiners"], 0);
}

// ---------------------------------------------------------------------------
// Test: UI state round-trips and filters the dashboard candidates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn state_filter_applies_to_view() {
    let app = build_test_app();

    let response = put_json(
        app.clone(),
        "/api/v1/dashboard/state",
        json!({
            "filter": { "role": "App Engineer – East", "stage": null },
            "modal": { "kind": "candidate", "editing": null }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let state = body_json(get(app.clone(), "/api/v1/dashboard/state").await).await;
    assert_eq!(state["data"]["modal"]["kind"], "candidate");

    let view = body_json(get(app, "/api/v1/dashboard").await).await["data"].clone();
    let names: Vec<&str> = view["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Raj Patel", "Arjun Mehta"]);
}

// ---------------------------------------------------------------------------
// Test: the TA owner modal cannot carry a record id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ta_owner_modal_rejects_editing_id() {
    let response = put_json(
        build_test_app(),
        "/api/v1/dashboard/state",
        json!({
            "filter": { "role": null, "stage": null },
            "modal": { "kind": "taOwners", "editing": "00000000-0000-0000-0000-000000000001" }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: selecting a critical role filters candidates and resets the stage
// ---------------------------------------------------------------------------

#[tokio::test]
async fn select_critical_role() {
    let app = build_test_app();
    put_json(
        app.clone(),
        "/api/v1/dashboard/state",
        json!({ "filter": { "role": null, "stage": "Final" }, "modal": null }),
    )
    .await;

    let response = post_json(
        app.clone(),
        "/api/v1/dashboard/critical-roles/select",
        json!({ "title": "Sr. PM – AI/ML" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["scrollTo"], "candidate-pipeline");
    assert_eq!(json["data"]["state"]["filter"]["role"], "Sr. PM – AI/ML");
    assert!(json["data"]["state"]["filter"]["stage"].is_null());

    let view = body_json(get(app, "/api/v1/dashboard").await).await["data"].clone();
    assert_eq!(view["candidates"].as_array().unwrap().len(), 1);
    assert_eq!(view["candidates"][0]["name"], "Priya Sharma");
}

// ---------------------------------------------------------------------------
// Test: only critical roles can be selected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn select_non_critical_role_is_rejected() {
    let response = post_json(
        build_test_app(),
        "/api/v1/dashboard/critical-roles/select",
        json!({ "title": "Corp Acc. Mgr – West" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: modals open for create or edit and close again
// ---------------------------------------------------------------------------

#[tokio::test]
async fn modal_open_and_close() {
    let app = build_test_app();

    let response = post_json(
        app.clone(),
        "/api/v1/dashboard/modal/open",
        json!({ "kind": "headcount" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["modal"]["kind"], "headcount");
    assert!(json["data"]["modal"]["editing"].is_null());

    let response = post_json(
        app.clone(),
        "/api/v1/dashboard/modal/open",
        json!({ "kind": "role", "editing": "00000000-0000-0000-0000-000000000004" }),
    )
    .await;
    assert_eq!(
        body_json(response).await["data"]["modal"]["editing"],
        "00000000-0000-0000-0000-000000000004"
    );

    let response = post_json(app.clone(), "/api/v1/dashboard/modal/close", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"]["modal"].is_null());

    let state = body_json(get(app, "/api/v1/dashboard/state").await).await;
    assert!(state["data"]["modal"].is_null());
}

#[tokio::test]
async fn ta_owner_modal_cannot_open_for_edit() {
    let app = build_test_app();
    let response = post_json(
        app.clone(),
        "/api/v1/dashboard/modal/open",
        json!({ "kind": "taOwners", "editing": "00000000-0000-0000-0000-000000000001" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let state = body_json(get(app, "/api/v1/dashboard/state").await).await;
    assert!(state["data"]["modal"].is_null());
}

// ---------------------------------------------------------------------------
// Test: clearing the role filter keeps the stage filter
// ---------------------------------------------------------------------------

#[tokio::test]
async fn clear_role_filter_keeps_stage() {
    let app = build_test_app();
    put_json(
        app.clone(),
        "/api/v1/dashboard/state",
        json!({ "filter": { "role": "Exec Asst. to CEO", "stage": "Final" }, "modal": null }),
    )
    .await;

    let response = post_json(app.clone(), "/api/v1/dashboard/role-filter/clear", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["filter"]["role"].is_null());
    assert_eq!(json["data"]["filter"]["stage"], "Final");

    let view = body_json(get(app, "/api/v1/dashboard").await).await["data"].clone();
    let names: Vec<&str> = view["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Priya Sharma", "Sneha Gupta"]);
}
