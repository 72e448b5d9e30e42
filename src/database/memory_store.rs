use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::store::DocumentStore;
use crate::error::Result;
use crate::models::application::{Application, NewApplication};
use crate::models::job::{Job, NewJob};
use crate::utils::time::now;

/// In-process store used when no database is configured and in tests.
/// Collections are kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    jobs: RwLock<Vec<Job>>,
    applications: RwLock<Vec<Application>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_job(&self, job: NewJob) -> Result<Job> {
        let job = job.into_job(Uuid::new_v4(), now());
        self.jobs.write().await.push(job.clone());
        Ok(job)
    }

    async fn list_jobs(&self) -> Result<Vec<Job>> {
        Ok(self.jobs.read().await.iter().rev().cloned().collect())
    }

    async fn delete_job(&self, id: Uuid) -> Result<Option<Job>> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs
            .iter()
            .position(|job| job.id == id)
            .map(|idx| jobs.remove(idx)))
    }

    async fn insert_application(&self, application: NewApplication) -> Result<Application> {
        let application = application.into_application(Uuid::new_v4(), now());
        self.applications.write().await.push(application.clone());
        Ok(application)
    }

    async fn list_applications(&self) -> Result<Vec<Application>> {
        Ok(self.applications.read().await.iter().rev().cloned().collect())
    }

    async fn delete_application(&self, id: Uuid) -> Result<Option<Application>> {
        let mut applications = self.applications.write().await;
        Ok(applications
            .iter()
            .position(|application| application.id == id)
            .map(|idx| applications.remove(idx)))
    }

    async fn close(&self) {}
}
