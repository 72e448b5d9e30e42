#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use job_board_backend::{database::memory_store::MemoryStore, routes, AppState};
use serde_json::{json, Value as JsonValue};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    _draft_dir: TempDir,
}

pub fn setup_app() -> TestApp {
    let draft_dir = tempfile::tempdir().expect("temp dir");
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        draft_dir.path().join("job_draft.json"),
    );
    TestApp {
        router: routes::router(state),
        _draft_dir: draft_dir,
    }
}

impl TestApp {
    pub async fn send(&self, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.dispatch(req).await
    }

    pub async fn send_raw_json(&self, method: &str, uri: &str, raw: &str) -> (StatusCode, JsonValue) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();
        self.dispatch(req).await
    }

    async fn dispatch(&self, req: Request<Body>) -> (StatusCode, JsonValue) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let body = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}

pub fn job_body(company: &str, title: &str, salary_value: i64) -> JsonValue {
    json!({
        "CompanyName": company,
        "Jobtitle": title,
        "experience": "1-3 years",
        "location": "chennai",
        "salary": format!("0-{} LPA", salary_value),
        "salaryValue": salary_value,
        "JobType": "fulltime",
        "JobDescription": "Design APIs\nReview code",
        "Jobicon": "A",
    })
}

pub fn application_body(job_id: &str) -> JsonValue {
    json!({
        "jobId": job_id,
        "jobTitle": "Backend Developer",
        "companyName": "Amazon",
        "applicantName": "Meera Nair",
        "applicantEmail": "meera@example.com",
        "applicantPhone": "+91 98765 43210",
        "coverLetter": "I would like to apply.",
    })
}
