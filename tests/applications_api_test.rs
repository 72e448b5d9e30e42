mod common;

use axum::http::StatusCode;
use common::{application_body, job_body, setup_app, TestApp};

async fn create_job(app: &TestApp) -> String {
    let (status, body) = app
        .send("POST", "/jobs", Some(job_body("Amazon", "Backend Developer", 12)))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn submit_application_defaults_status() {
    let app = setup_app();
    let job_id = create_job(&app).await;

    let mut body = application_body(&job_id);
    body["applicantEmail"] = "Meera@Example.COM".into();
    let (status, resp) = app.send("POST", "/applications", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["status"], "pending");
    assert_eq!(resp["data"]["applicantEmail"], "meera@example.com");
    assert_eq!(resp["data"]["jobId"], job_id.as_str());
    assert!(resp["data"]["appliedAt"].is_string());

    let (status, list) = app.send("GET", "/applications", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_applications_are_rejected() {
    let app = setup_app();
    let job_id = create_job(&app).await;

    let mut bad_email = application_body(&job_id);
    bad_email["applicantEmail"] = "not-an-email".into();
    let (status, resp) = app.send("POST", "/applications", Some(bad_email)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["success"], false);

    let mut missing = application_body(&job_id);
    missing.as_object_mut().unwrap().remove("applicantName");
    let (status, _) = app.send("POST", "/applications", Some(missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_status = application_body(&job_id);
    bad_status["status"] = "hired".into();
    let (status, _) = app.send("POST", "/applications", Some(bad_status)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = app.send("GET", "/applications", None).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_application_removes_it_from_listing() {
    let app = setup_app();
    let job_id = create_job(&app).await;

    let (_, first) = app
        .send("POST", "/applications", Some(application_body(&job_id)))
        .await;
    let (_, second) = app
        .send("POST", "/applications", Some(application_body(&job_id)))
        .await;
    let first_id = first["data"]["_id"].as_str().unwrap().to_string();
    let second_id = second["data"]["_id"].as_str().unwrap().to_string();

    let (status, body) = app
        .send("DELETE", &format!("/applications?id={}", first_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Application deleted successfully");

    let (_, list) = app.send("GET", "/applications", None).await;
    let remaining = list["data"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["_id"], second_id.as_str());

    let (status, _) = app
        .send("DELETE", &format!("/applications?id={}", first_id), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_application_unknown_or_missing_id() {
    let app = setup_app();

    let (status, body) = app
        .send("DELETE", "/applications?id=5b0c1b7e-8f5e-4c1e-9d8a-2f3b4c5d6e7f", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, body) = app.send("DELETE", "/applications?id=", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Application ID is required");
}

#[tokio::test]
async fn deleting_a_job_keeps_its_applications() {
    let app = setup_app();
    let job_id = create_job(&app).await;
    app.send("POST", "/applications", Some(application_body(&job_id)))
        .await;

    let (status, _) = app.send("DELETE", &format!("/jobs?id={}", job_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = app.send("GET", "/applications", None).await;
    let remaining = list["data"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["jobId"], job_id.as_str());
}
