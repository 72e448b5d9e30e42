use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::fs;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::dto::form_dto::{JobDraft, JobForm};
use crate::error::Result;
use crate::utils::time::now;

/// One saved copy of the job creation form, kept in a JSON file separate
/// from the document store. A new save replaces the previous draft.
#[derive(Clone)]
pub struct DraftService {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl DraftService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn save(&self, form: JobForm) -> Result<JobDraft> {
        let draft = JobDraft {
            form,
            saved_at: now(),
            is_draft: true,
        };
        let bytes = serde_json::to_vec_pretty(&draft)?;

        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, &self.path).await?;

        info!(path = %self.path.display(), "Job draft saved");
        Ok(draft)
    }

    /// The saved draft, if any. An unreadable draft counts as no draft.
    pub async fn load(&self) -> Result<Option<JobDraft>> {
        let _guard = self.lock.lock().await;
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(draft) => Ok(Some(draft)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable job draft");
                Ok(None)
            }
        }
    }

    pub async fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                info!(path = %self.path.display(), "Job draft cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
