//! Persistence seam for the two document collections.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::application::{Application, NewApplication};
use crate::models::job::{Job, NewJob};

/// Storage for jobs and applications.
///
/// Implementations assign ids and `createdAt`/`updatedAt`, list newest
/// first and hand back the removed document on delete. Deleting a job
/// leaves its applications untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_job(&self, job: NewJob) -> Result<Job>;

    async fn list_jobs(&self) -> Result<Vec<Job>>;

    /// `Ok(None)` when no job has this id.
    async fn delete_job(&self, id: Uuid) -> Result<Option<Job>>;

    async fn insert_application(&self, application: NewApplication) -> Result<Application>;

    async fn list_applications(&self) -> Result<Vec<Application>>;

    /// `Ok(None)` when no application has this id.
    async fn delete_application(&self, id: Uuid) -> Result<Option<Application>>;

    /// Releases connections. Called once on shutdown.
    async fn close(&self);
}
