//! HTTP-level integration tests for `/api/v1/headcount`, including the
//! month uniqueness rule and the chart endpoint.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_empty_app, delete, get, post_json, put_json};
use serde_json::{json, Value};

fn approx(value: &Value, expected: f64) -> bool {
    value
        .as_f64()
        .is_some_and(|v| (v - expected).abs() < 1e-9)
}

async fn create(app: &Router, body: Value) -> Value {
    let response = post_json(app.clone(), "/api/v1/headcount", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Test: create fills defaults for omitted counts and names
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_defaults_missing_fields() {
    let app = build_empty_app();
    let record = create(&app, json!({ "month": " Mar'25 ", "existingHeadcount": 38 })).await;

    assert_eq!(record["month"], "Mar'25");
    assert_eq!(record["existingHeadcount"], 38);
    assert_eq!(record["newJoinees"], 0);
    assert_eq!(record["joinerNames"], "");
    assert_eq!(record["expectedJoinerRoles"], "");
}

// ---------------------------------------------------------------------------
// Test: a second record for the same month is rejected, even spelled out
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_month_is_rejected() {
    let app = build_empty_app();
    create(&app, json!({ "month": "Mar'25", "existingHeadcount": 38 })).await;

    let response = post_json(
        app.clone(),
        "/api/v1/headcount",
        json!({ "month": "March'25", "existingHeadcount": 40 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("Mar'25"));

    let list = body_json(get(app, "/api/v1/headcount").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: negative counts fail validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn negative_counts_are_rejected() {
    let response = post_json(
        build_empty_app(),
        "/api/v1/headcount",
        json!({ "month": "Mar'25", "exits": -1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: an edit may keep its own month but not take another record's
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_month_rules() {
    let app = build_empty_app();
    let march = create(&app, json!({ "month": "Mar'25", "existingHeadcount": 38 })).await;
    create(&app, json!({ "month": "Apr'25", "existingHeadcount": 40 })).await;
    let uri = format!("/api/v1/headcount/{}", march["id"].as_str().unwrap());

    let response = put_json(app.clone(), &uri, json!({ "month": "March'25", "exits": 1 })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["month"], "March'25");
    assert_eq!(json["data"]["exits"], 1);

    let response = put_json(app, &uri, json!({ "month": "Apr'25" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: chart orders months chronologically and scales segments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn chart_layout() {
    let app = build_empty_app();
    create(
        &app,
        json!({
            "month": "Apr'25",
            "existingHeadcount": 40,
            "newJoinees": 5,
            "exits": 2,
            "expectedJoiners": 10
        }),
    )
    .await;
    create(&app, json!({ "month": "Mar'25", "existingHeadcount": 30 })).await;

    let response = get(app, "/api/v1/headcount/chart").await;
    assert_eq!(response.status(), StatusCode::OK);

    let chart = body_json(response).await["data"].clone();
    assert_eq!(chart["maxTotal"], 50);
    assert!(approx(&chart["chartHeight"], 180.0));

    let bars = chart["bars"].as_array().unwrap();
    assert_eq!(bars[0]["month"], "Mar'25");
    assert_eq!(bars[1]["month"], "Apr'25");

    let april = &bars[1]["segments"];
    assert_eq!(april[0]["kind"], "existing");
    assert!(approx(&april[0]["height"], 144.0));
    // 5 of 50 would be 18px; small nonzero segments are floored at 25px.
    assert_eq!(april[1]["kind"], "newJoiners");
    assert!(approx(&april[1]["height"], 25.0));
    assert!(approx(&april[1]["bottom"], 144.0));

    // March has no events: zero-height segments and no labels.
    assert!(approx(&bars[0]["segments"][1]["height"], 0.0));
    assert!(bars[0]["labels"].as_array().unwrap().is_empty());
    assert_eq!(bars[1]["labels"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Test: empty chart has no bars and a zero scale
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_chart() {
    let json = body_json(get(build_empty_app(), "/api/v1/headcount/chart").await).await;
    assert_eq!(json["data"]["maxTotal"], 0);
    assert!(json["data"]["bars"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: delete frees the month for a new record
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_frees_month() {
    let app = build_empty_app();
    let record = create(&app, json!({ "month": "May'25" })).await;
    let uri = format!("/api/v1/headcount/{}", record["id"].as_str().unwrap());

    let response = delete(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    create(&app, json!({ "month": "May'25" })).await;
}
