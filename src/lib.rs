pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::database::store::DocumentStore;
use crate::services::{
    application_service::ApplicationService, draft_service::DraftService,
    job_service::JobService,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub draft_service: DraftService,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, draft_path: impl Into<PathBuf>) -> Self {
        let job_service = JobService::new(store.clone());
        let application_service = ApplicationService::new(store);
        let draft_service = DraftService::new(draft_path);

        Self {
            job_service,
            application_service,
            draft_service,
        }
    }
}
