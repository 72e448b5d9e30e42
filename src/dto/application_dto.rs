use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::application::ApplicationStatus;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationPayload {
    #[validate(required, length(min = 1))]
    pub job_id: Option<String>,
    #[validate(required, length(min = 1))]
    pub job_title: Option<String>,
    #[validate(required, length(min = 1))]
    pub company_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub applicant_name: Option<String>,
    #[validate(required, email)]
    pub applicant_email: Option<String>,
    pub applicant_phone: Option<String>,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub applied_at: Option<DateTime<Utc>>,
}
