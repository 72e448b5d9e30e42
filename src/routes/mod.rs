pub mod applications;
pub mod docs;
pub mod drafts;
pub mod health;
pub mod jobs;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{middleware::cors::permissive_cors, AppState};

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/jobs",
            get(jobs::list_jobs)
                .post(jobs::create_job)
                .delete(jobs::delete_job),
        )
        .route("/jobs/cards", get(jobs::list_job_cards))
        .route("/jobs/options", get(jobs::job_options))
        .route("/jobs/form", axum::routing::post(jobs::create_job_from_form))
        .route(
            "/jobs/draft",
            get(drafts::get_draft)
                .put(drafts::save_draft)
                .delete(drafts::clear_draft),
        )
        .route(
            "/applications",
            get(applications::list_applications)
                .post(applications::create_application)
                .delete(applications::delete_application),
        );

    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(api)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(permissive_cors())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
}
