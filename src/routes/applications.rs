use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        application_dto::CreateApplicationPayload, envelope::ApiResponse,
        job_dto::DeleteByIdQuery,
    },
    error::{Error, Result},
    middleware::json::{ApiJson, ApiQuery},
    AppState,
};

#[utoipa::path(
    get,
    path = "/applications",
    responses(
        (status = 200, description = "Applications, newest first"),
        (status = 500, description = "Store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn list_applications(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let applications = state.application_service.list().await?;
    Ok(Json(ApiResponse::ok(applications)))
}

#[utoipa::path(
    post,
    path = "/applications",
    responses(
        (status = 201, description = "Application submitted"),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn create_application(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateApplicationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let application = state.application_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(application))))
}

#[utoipa::path(
    delete,
    path = "/applications",
    params(
        ("id" = String, Query, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application deleted"),
        (status = 400, description = "Missing id"),
        (status = 404, description = "Application not found"),
        (status = 500, description = "Store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn delete_application(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DeleteByIdQuery>,
) -> Result<impl IntoResponse> {
    let id = query
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| Error::BadRequest("Application ID is required".into()))?;
    state.application_service.delete(&id).await?;
    Ok(Json(ApiResponse::message("Application deleted successfully")))
}
