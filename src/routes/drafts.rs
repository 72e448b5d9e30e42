use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{envelope::ApiResponse, form_dto::JobForm},
    error::Result,
    middleware::json::ApiJson,
    AppState,
};

#[utoipa::path(
    get,
    path = "/jobs/draft",
    responses(
        (status = 200, description = "The saved draft, or null when there is none")
    )
)]
#[axum::debug_handler]
pub async fn get_draft(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let draft = state.draft_service.load().await?;
    Ok(Json(ApiResponse::ok(draft)))
}

#[utoipa::path(
    put,
    path = "/jobs/draft",
    responses(
        (status = 200, description = "Draft saved, replacing any previous one"),
        (status = 400, description = "Malformed form body")
    )
)]
#[axum::debug_handler]
pub async fn save_draft(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<JobForm>,
) -> Result<impl IntoResponse> {
    let draft = state.draft_service.save(form).await?;
    Ok(Json(ApiResponse::ok(draft).with_message("Draft saved")))
}

#[utoipa::path(
    delete,
    path = "/jobs/draft",
    responses(
        (status = 200, description = "Draft cleared")
    )
)]
#[axum::debug_handler]
pub async fn clear_draft(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.draft_service.clear().await?;
    Ok(Json(ApiResponse::message("Draft cleared")))
}
