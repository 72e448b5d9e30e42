use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        envelope::ApiResponse,
        form_dto::JobForm,
        job_dto::{CreateJobPayload, DeleteByIdQuery, JobListQuery, JobOptionsResponse},
    },
    error::{Error, Result},
    middleware::json::{ApiJson, ApiQuery},
    utils::filter::JobFilters,
    AppState,
};

fn filters_from(query: JobListQuery) -> Result<Option<JobFilters>> {
    if query.is_empty() {
        return Ok(None);
    }
    query.into_filters().map(Some)
}

#[utoipa::path(
    get,
    path = "/jobs",
    params(
        ("search" = Option<String>, Query, description = "Substring of job title or company name"),
        ("location" = Option<String>, Query, description = "Substring of location"),
        ("jobType" = Option<String>, Query, description = "fulltime, parttime, internship or contract"),
        ("salaryMin" = Option<i32>, Query, description = "Lowest salary ceiling in LPA (default 0)"),
        ("salaryMax" = Option<i32>, Query, description = "Highest salary ceiling in LPA (default 60)")
    ),
    responses(
        (status = 200, description = "Jobs, newest first, with a count"),
        (status = 400, description = "Malformed filter"),
        (status = 500, description = "Store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<JobListQuery>,
) -> Result<impl IntoResponse> {
    let filters = filters_from(query)?;
    let jobs = state.job_service.list(filters.as_ref()).await?;
    let count = jobs.len();
    Ok(Json(ApiResponse::ok(jobs).with_count(count)))
}

#[utoipa::path(
    get,
    path = "/jobs/cards",
    params(
        ("search" = Option<String>, Query, description = "Substring of job title or company name"),
        ("location" = Option<String>, Query, description = "Substring of location"),
        ("jobType" = Option<String>, Query, description = "fulltime, parttime, internship or contract"),
        ("salaryMin" = Option<i32>, Query, description = "Lowest salary ceiling in LPA (default 0)"),
        ("salaryMax" = Option<i32>, Query, description = "Highest salary ceiling in LPA (default 60)")
    ),
    responses(
        (status = 200, description = "Jobs rendered for listing cards"),
        (status = 500, description = "Store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn list_job_cards(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<JobListQuery>,
) -> Result<impl IntoResponse> {
    let filters = filters_from(query)?;
    let cards = state.job_service.list_cards(filters.as_ref()).await?;
    let count = cards.len();
    Ok(Json(ApiResponse::ok(cards).with_count(count)))
}

#[utoipa::path(
    get,
    path = "/jobs/options",
    responses(
        (status = 200, description = "Locations, job types, experience levels and salary ranges")
    )
)]
#[axum::debug_handler]
pub async fn job_options() -> Result<impl IntoResponse> {
    Ok(Json(ApiResponse::ok(JobOptionsResponse::current())))
}

#[utoipa::path(
    post,
    path = "/jobs",
    responses(
        (status = 201, description = "Job created"),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(job))))
}

#[utoipa::path(
    post,
    path = "/jobs/form",
    responses(
        (status = 201, description = "Job created from the creation form; draft cleared"),
        (status = 400, description = "Form incomplete or inconsistent"),
        (status = 500, description = "Store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn create_job_from_form(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<JobForm>,
) -> Result<impl IntoResponse> {
    let payload = form.into_payload()?;
    payload.validate()?;
    let job = state.job_service.create(payload).await?;

    if let Err(e) = state.draft_service.clear().await {
        tracing::warn!(error = ?e, "Job published but the draft could not be cleared");
    }
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(job))))
}

#[utoipa::path(
    delete,
    path = "/jobs",
    params(
        ("id" = String, Query, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job deleted; body carries the removed job"),
        (status = 400, description = "Missing id"),
        (status = 404, description = "Job not found"),
        (status = 500, description = "Store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DeleteByIdQuery>,
) -> Result<impl IntoResponse> {
    let id = query
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| Error::BadRequest("Job ID is required".into()))?;
    let job = state.job_service.delete(&id).await?;
    Ok(Json(
        ApiResponse::ok(job).with_message("Job deleted successfully"),
    ))
}
