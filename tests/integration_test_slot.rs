mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

async fn create_experience(app: &TestApp, title: &str) -> String {
    let body = parse_body(app.post("/experience", json!({
        "imageUrl": "https://img.example/x.jpg",
        "title": title,
        "city": "Porto",
        "description": "d",
        "about": "a",
        "price": 100
    })).await).await;
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_slot() {
    let app = TestApp::new().await;
    let experience_id = create_experience(&app, "Wine Tour").await;

    let res = app.post("/slot", json!({
        "experienceId": experience_id,
        "date": "2030-07-15",
        "time": "2030-07-15T10:00:00Z",
        "capacity": 12
    })).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = parse_body(res).await;
    assert_eq!(body["message"], "Slot created successfully");
    assert_eq!(body["data"]["experienceId"], experience_id.as_str());
    assert_eq!(body["data"]["capacity"], 12);
    assert_eq!(body["data"]["bookedCount"], 0);
}

#[tokio::test]
async fn test_create_slot_missing_fields() {
    let app = TestApp::new().await;

    let res = app.post("/slot", json!({ "date": "2030-07-15" })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(res).await;
    assert_eq!(body["message"], "Missing required fields");
}

#[tokio::test]
async fn test_create_slot_with_initial_booked_count() {
    let app = TestApp::new().await;
    let experience_id = create_experience(&app, "Wine Tour").await;

    let res = app.post("/slot", json!({
        "experienceId": experience_id,
        "date": "2030-07-15",
        "time": "2030-07-15T10:00:00Z",
        "capacity": "5",
        "bookedCount": "5"
    })).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = parse_body(res).await;
    assert_eq!(body["data"]["capacity"], 5);
    assert_eq!(body["data"]["bookedCount"], 5);
}

#[tokio::test]
async fn test_create_slot_invalid_date() {
    let app = TestApp::new().await;
    let experience_id = create_experience(&app, "Wine Tour").await;

    let res = app.post("/slot", json!({
        "experienceId": experience_id,
        "date": "not-a-date",
        "time": "2030-07-15T10:00:00Z",
        "capacity": 12
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_slots_attaches_experience() {
    let app = TestApp::new().await;
    let first = create_experience(&app, "Wine Tour").await;
    let second = create_experience(&app, "Surf Lesson").await;

    for experience_id in [&first, &second] {
        app.post("/slot", json!({
            "experienceId": experience_id,
            "date": "2030-07-15",
            "time": "2030-07-15T10:00:00Z",
            "capacity": 4
        })).await;
    }

    let res = app.get("/slot").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let res = app.get(&format!("/slot?experienceId={}", second)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["experienceId"], second.as_str());
    assert_eq!(data[0]["experience"]["title"], "Surf Lesson");
}
