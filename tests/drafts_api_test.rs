mod common;

use axum::http::StatusCode;
use common::setup_app;
use serde_json::{json, Value as JsonValue};

fn form_body() -> JsonValue {
    json!({
        "CompanyName": "Tech Corp",
        "Jobtitle": "Platform Engineer",
        "experience": "",
        "location": "bangalore",
        "salaryMin": "8",
        "salaryMax": "18",
        "JobDescription": "Own the deploy pipeline\nMentor juniors",
        "JobType": "parttime",
        "ApplicationDate": "2026-12-01"
    })
}

#[tokio::test]
async fn draft_round_trip_through_the_slot() {
    let app = setup_app();

    let (status, body) = app.send("GET", "/jobs/draft", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());

    let (status, body) = app.send("PUT", "/jobs/draft", Some(form_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isDraft"], true);
    assert!(body["data"]["savedAt"].is_string());

    let mut newer = form_body();
    newer["Jobtitle"] = "Staff Engineer".into();
    app.send("PUT", "/jobs/draft", Some(newer)).await;

    let (_, body) = app.send("GET", "/jobs/draft", None).await;
    assert_eq!(body["data"]["Jobtitle"], "Staff Engineer");
    assert_eq!(body["data"]["salaryMin"], "8");

    let (status, body) = app.send("DELETE", "/jobs/draft", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Draft cleared");

    let (_, body) = app.send("GET", "/jobs/draft", None).await;
    assert!(body["data"].is_null());

    let (status, _) = app.send("DELETE", "/jobs/draft", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn publishing_the_form_creates_a_job_and_clears_the_draft() {
    let app = setup_app();
    app.send("PUT", "/jobs/draft", Some(form_body())).await;

    let (status, body) = app.send("POST", "/jobs/form", Some(form_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    let job = &body["data"];
    assert_eq!(job["salary"], "8-18 LPA");
    assert_eq!(job["salaryValue"], 18);
    assert_eq!(job["JobType"], "parttime");
    assert_eq!(job["location"], "bangalore");
    assert_eq!(job["experience"], "1-3 years");
    assert_eq!(job["Jobicon"], "TC");

    let (_, list) = app.send("GET", "/jobs", None).await;
    assert_eq!(list["count"], 1);

    let (_, draft) = app.send("GET", "/jobs/draft", None).await;
    assert!(draft["data"].is_null());
}

#[tokio::test]
async fn incomplete_form_keeps_the_draft() {
    let app = setup_app();
    app.send("PUT", "/jobs/draft", Some(form_body())).await;

    let mut no_location = form_body();
    no_location["location"] = "".into();
    let (status, body) = app.send("POST", "/jobs/form", Some(no_location)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please select a location");

    let mut inverted = form_body();
    inverted["salaryMin"] = "20".into();
    let (status, _) = app.send("POST", "/jobs/form", Some(inverted)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = app.send("GET", "/jobs", None).await;
    assert_eq!(list["count"], 0);

    let (_, draft) = app.send("GET", "/jobs/draft", None).await;
    assert_eq!(draft["data"]["CompanyName"], "Tech Corp");
}
