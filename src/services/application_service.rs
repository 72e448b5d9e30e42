use std::sync::Arc;
use tracing::info;

use crate::database::store::DocumentStore;
use crate::dto::application_dto::CreateApplicationPayload;
use crate::error::{Error, Result};
use crate::models::application::{Application, NewApplication};
use crate::services::job_service::parse_id;

#[derive(Clone)]
pub struct ApplicationService {
    store: Arc<dyn DocumentStore>,
}

impl ApplicationService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Application>> {
        self.store.list_applications().await
    }

    pub async fn create(&self, payload: CreateApplicationPayload) -> Result<Application> {
        let new_application = NewApplication::try_from(payload)?;
        let application = self.store.insert_application(new_application).await?;
        info!(
            application_id = %application.id,
            job_id = %application.job_id,
            "Application submitted"
        );
        Ok(application)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<Application> {
        let id = parse_id(raw_id, "Application not found")?;
        let application = self
            .store
            .delete_application(id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".into()))?;
        info!(application_id = %application.id, "Application deleted");
        Ok(application)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::store::MockDocumentStore;

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let mut store = MockDocumentStore::new();
        store.expect_delete_application().returning(|_| Ok(None));
        let service = ApplicationService::new(Arc::new(store));

        let err = service
            .delete("8a6e0804-2bd0-4672-b79d-d97027f9071a")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
