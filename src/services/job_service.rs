use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::database::store::DocumentStore;
use crate::dto::job_dto::{CreateJobPayload, JobCardResponse};
use crate::error::{Error, Result};
use crate::models::job::{Job, NewJob};
use crate::utils::filter::{filter_jobs, JobFilters};
use crate::utils::time::now;

#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn DocumentStore>,
}

impl JobService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All jobs, newest first, optionally narrowed by `filters`.
    pub async fn list(&self, filters: Option<&JobFilters>) -> Result<Vec<Job>> {
        let jobs = self.store.list_jobs().await?;
        Ok(match filters {
            Some(filters) => filter_jobs(&jobs, filters),
            None => jobs,
        })
    }

    pub async fn list_cards(&self, filters: Option<&JobFilters>) -> Result<Vec<JobCardResponse>> {
        let at = now();
        let jobs = self.list(filters).await?;
        Ok(jobs
            .into_iter()
            .map(|job| JobCardResponse::from_job(job, at))
            .collect())
    }

    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        let new_job = NewJob::try_from(payload)?;
        let job = self.store.insert_job(new_job).await?;
        info!(job_id = %job.id, company = %job.company_name, "Job created");
        Ok(job)
    }

    /// Removes a job and returns what was stored. Applications that point
    /// at the job are left as they are.
    pub async fn delete(&self, raw_id: &str) -> Result<Job> {
        let id = parse_id(raw_id, "Job not found")?;
        let job = self
            .store
            .delete_job(id)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".into()))?;
        info!(job_id = %job.id, "Job deleted");
        Ok(job)
    }
}

/// Ids that are not UUIDs cannot exist in the store, so they are reported
/// as not found rather than malformed.
pub(crate) fn parse_id(raw_id: &str, not_found: &str) -> Result<Uuid> {
    Uuid::parse_str(raw_id.trim()).map_err(|_| Error::NotFound(not_found.to_string()))
}
