mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_create_promo() {
    let app = TestApp::new().await;

    let res = app.post("/promo", json!({
        "code": "SUMMER10",
        "type": "percentage",
        "value": 10
    })).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = parse_body(res).await;
    assert_eq!(body["message"], "Promo code created successfully");
    assert_eq!(body["data"]["code"], "SUMMER10");
    assert_eq!(body["data"]["type"], "percentage");
    assert_eq!(body["data"]["value"], 10);
    assert!(body["data"]["expiresAt"].is_null());
}

#[tokio::test]
async fn test_create_promo_missing_fields() {
    let app = TestApp::new().await;

    let res = app.post("/promo", json!({ "code": "NOVALUE", "type": "fixed" })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(res).await;
    assert_eq!(body["message"], "Missing required fields");
}

#[tokio::test]
async fn test_create_promo_rejects_unknown_type() {
    let app = TestApp::new().await;

    let res = app.post("/promo", json!({
        "code": "FLAT50",
        "type": "flat",
        "value": 50
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(res).await;
    assert_eq!(body["message"], "Type must be 'percentage' or 'fixed'");
}

#[tokio::test]
async fn test_create_promo_duplicate_code_conflicts() {
    let app = TestApp::new().await;

    let payload = json!({ "code": "ONCE", "type": "fixed", "value": 5 });
    let first = app.post("/promo", payload.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.post("/promo", payload).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_validate_promo_ok() {
    let app = TestApp::new().await;

    app.post("/promo", json!({
        "code": "VALID20",
        "type": "percentage",
        "value": 20,
        "expiresAt": (Utc::now() + Duration::days(7)).to_rfc3339()
    })).await;

    let res = app.post("/promo/validate", json!({ "code": "VALID20" })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["message"], "Promo code is valid");
    assert_eq!(body["data"]["code"], "VALID20");
}

#[tokio::test]
async fn test_validate_promo_unknown() {
    let app = TestApp::new().await;

    let res = app.post("/promo/validate", json!({ "code": "GHOST" })).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = parse_body(res).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["message"], "Invalid promo code");
}

#[tokio::test]
async fn test_validate_promo_expired() {
    let app = TestApp::new().await;

    app.post("/promo", json!({
        "code": "OLD",
        "type": "fixed",
        "value": 5,
        "expiresAt": (Utc::now() - Duration::days(1)).to_rfc3339()
    })).await;

    let res = app.post("/promo/validate", json!({ "code": "OLD" })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(res).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["message"], "Promo code has expired");
}

#[tokio::test]
async fn test_validate_promo_missing_code() {
    let app = TestApp::new().await;

    let res = app.post("/promo/validate", json!({})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(res).await;
    assert_eq!(body["message"], "Promo code is required");
}
