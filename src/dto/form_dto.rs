use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::job_dto::CreateJobPayload;
use crate::error::{Error, Result};
use crate::models::job::{JobType, DEFAULT_EXPERIENCE, DEFAULT_POSTED_TIME, MAX_SALARY_LPA};
use crate::utils::format::company_icon;

const FALLBACK_COMPANY_NAME: &str = "Company";

/// Raw state of the job creation form, as typed by the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobForm {
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "Jobtitle")]
    pub job_title: String,
    pub experience: String,
    pub location: String,
    #[serde(rename = "salaryMin")]
    pub salary_min: String,
    #[serde(rename = "salaryMax")]
    pub salary_max: String,
    #[serde(rename = "JobDescription")]
    pub description: String,
    #[serde(rename = "JobType")]
    pub job_type: String,
    #[serde(rename = "ApplicationDate")]
    pub application_date: String,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            job_title: String::new(),
            experience: String::new(),
            location: String::new(),
            salary_min: String::new(),
            salary_max: String::new(),
            description: String::new(),
            job_type: JobType::default().as_str().to_string(),
            application_date: String::new(),
        }
    }
}

impl JobForm {
    /// Derives the stored fields (icon, salary string, ceiling) and turns
    /// the form into a regular create payload.
    pub fn into_payload(self) -> Result<CreateJobPayload> {
        if self.location.trim().is_empty() {
            return Err(Error::BadRequest("Please select a location".into()));
        }
        if self.salary_min.trim().is_empty() || self.salary_max.trim().is_empty() {
            return Err(Error::BadRequest(
                "Please enter both minimum and maximum salary".into(),
            ));
        }

        let min = leading_int(&self.salary_min).unwrap_or(0);
        let max = leading_int(&self.salary_max).unwrap_or(MAX_SALARY_LPA);
        if min >= max {
            return Err(Error::BadRequest(
                "Maximum salary must be greater than minimum salary".into(),
            ));
        }

        let company = if self.company_name.trim().is_empty() {
            FALLBACK_COMPANY_NAME
        } else {
            self.company_name.as_str()
        };
        let icon = company_icon(company).token();

        let experience = if self.experience.trim().is_empty() {
            DEFAULT_EXPERIENCE.to_string()
        } else {
            self.experience
        };

        Ok(CreateJobPayload {
            company_name: Some(self.company_name),
            job_title: Some(self.job_title),
            experience: Some(experience),
            location: Some(self.location),
            salary: Some(format!("{}-{} LPA", min, max)),
            salary_value: Some(max),
            job_type: Some(self.job_type),
            application_date: Some(self.application_date),
            posted_time: Some(DEFAULT_POSTED_TIME.to_string()),
            description: Some(self.description),
            icon: Some(icon),
        })
    }
}

/// Integer prefix of a typed salary bound: `"12abc"` reads as 12. No digits,
/// or a zero, counts as unset.
fn leading_int(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value: i32 = digits.parse().ok()?;
    let value = if negative { -value } else { value };
    (value != 0).then_some(value)
}

/// The single saved draft of the creation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    #[serde(flatten)]
    pub form: JobForm,
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
    #[serde(rename = "isDraft", default = "draft_marker")]
    pub is_draft: bool,
}

fn draft_marker() -> bool {
    true
}
