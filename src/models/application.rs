use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::dto::application_dto::CreateApplicationPayload;
use crate::error::{Error, Result};
use crate::utils::time::now;
use crate::utils::validation::{optional_text, require_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        ApplicationStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == token)
            .ok_or_else(|| Error::BadRequest(format!("Invalid application status: {}", s)))
    }
}

/// A candidate's submission against one job posting.
///
/// `job_id`, `job_title` and `company_name` are captured when the
/// application is submitted; they are not kept in sync with the job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub job_id: String,
    pub job_title: String,
    pub company_name: String,
    pub applicant_name: String,
    pub applicant_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub job_id: String,
    pub job_title: String,
    pub company_name: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_phone: Option<String>,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

impl NewApplication {
    pub fn into_application(self, id: Uuid, at: DateTime<Utc>) -> Application {
        Application {
            id,
            job_id: self.job_id,
            job_title: self.job_title,
            company_name: self.company_name,
            applicant_name: self.applicant_name,
            applicant_email: self.applicant_email,
            applicant_phone: self.applicant_phone,
            resume: self.resume,
            cover_letter: self.cover_letter,
            status: self.status,
            applied_at: self.applied_at,
            created_at: at,
            updated_at: at,
        }
    }
}

impl TryFrom<CreateApplicationPayload> for NewApplication {
    type Error = Error;

    fn try_from(payload: CreateApplicationPayload) -> Result<Self> {
        let applicant_email = require_text(payload.applicant_email, "applicantEmail")?;
        if !applicant_email.contains('@') {
            return Err(Error::BadRequest("applicantEmail is not a valid email".into()));
        }

        Ok(Self {
            job_id: require_text(payload.job_id, "jobId")?,
            job_title: require_text(payload.job_title, "jobTitle")?,
            company_name: require_text(payload.company_name, "companyName")?,
            applicant_name: require_text(payload.applicant_name, "applicantName")?,
            applicant_email: applicant_email.to_lowercase(),
            applicant_phone: optional_text(payload.applicant_phone),
            resume: payload.resume.filter(|r| !r.is_empty()),
            cover_letter: payload.cover_letter.filter(|c| !c.is_empty()),
            status: payload.status.unwrap_or_default(),
            applied_at: payload.applied_at.unwrap_or_else(now),
        })
    }
}
