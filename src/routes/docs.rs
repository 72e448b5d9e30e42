use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::routes::{applications, drafts, health, jobs};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        jobs::list_jobs,
        jobs::list_job_cards,
        jobs::job_options,
        jobs::create_job,
        jobs::create_job_from_form,
        jobs::delete_job,
        applications::list_applications,
        applications::create_application,
        applications::delete_application,
        drafts::get_draft,
        drafts::save_draft,
        drafts::clear_draft,
    ),
    info(title = "Job Board API")
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
