use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::job::{Job, JobType, Location, MAX_SALARY_LPA};
use crate::utils::filter::JobFilters;
use crate::utils::format::{
    company_icon, description_bullets, job_type_display_name, location_display_name,
    salary_bracket, salary_ceiling_label, CompanyIcon, SalaryRange, EXPERIENCE_LEVELS,
    POPULAR_LOCATIONS, SALARY_RANGES,
};
use crate::utils::time::relative_time_label;

/// Body of `POST /jobs`. Every field is optional at the wire level so a
/// missing field is reported as a validation failure instead of a JSON
/// parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[serde(rename = "CompanyName")]
    #[validate(required, length(min = 1))]
    pub company_name: Option<String>,
    #[serde(rename = "Jobtitle")]
    #[validate(required, length(min = 1))]
    pub job_title: Option<String>,
    #[validate(required, length(min = 1))]
    pub experience: Option<String>,
    #[validate(required, length(min = 1))]
    pub location: Option<String>,
    #[validate(required, length(min = 1))]
    pub salary: Option<String>,
    #[serde(rename = "salaryValue")]
    #[validate(required, range(min = 0, max = 60))]
    pub salary_value: Option<i32>,
    #[serde(rename = "JobType")]
    pub job_type: Option<String>,
    #[serde(rename = "ApplicationDate")]
    pub application_date: Option<String>,
    #[serde(rename = "postedTime")]
    pub posted_time: Option<String>,
    #[serde(rename = "JobDescription")]
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    #[serde(rename = "Jobicon")]
    #[validate(required, length(min = 1))]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeleteByIdQuery {
    pub id: Option<String>,
}

/// Optional filter parameters accepted by the job list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobListQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary_min: Option<String>,
    pub salary_max: Option<String>,
}

impl JobListQuery {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.location.is_none()
            && self.job_type.is_none()
            && self.salary_min.is_none()
            && self.salary_max.is_none()
    }

    pub fn into_filters(self) -> Result<JobFilters> {
        Ok(JobFilters {
            search: self.search.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            job_type: self.job_type.unwrap_or_default(),
            salary_min: parse_bound(self.salary_min, "salaryMin", 0)?,
            salary_max: parse_bound(self.salary_max, "salaryMax", MAX_SALARY_LPA)?,
        })
    }
}

fn parse_bound(raw: Option<String>, name: &str, default: i32) -> Result<i32> {
    match raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value
            .parse()
            .map_err(|_| Error::BadRequest(format!("{} must be an integer", name))),
        None => Ok(default),
    }
}

/// A job prepared for display on a listing card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCardResponse {
    pub id: uuid::Uuid,
    pub title: String,
    pub company: String,
    pub icon: CompanyIcon,
    pub job_type: String,
    pub experience: String,
    pub location: String,
    pub salary: String,
    pub salary_bracket: String,
    pub posted_time: String,
    pub posted_ago: String,
    pub bullets: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl JobCardResponse {
    pub fn from_job(job: Job, now: DateTime<Utc>) -> Self {
        Self {
            id: job.id,
            icon: company_icon(&job.company_name),
            job_type: job_type_display_name(Some(job.job_type.as_str())).to_string(),
            location: location_display_name(&job.location),
            salary: salary_ceiling_label(&job.salary),
            salary_bracket: salary_bracket(job.salary_value).to_string(),
            posted_ago: relative_time_label(job.created_at, now),
            bullets: description_bullets(&job.description),
            title: job.job_title,
            company: job.company_name,
            experience: job.experience,
            posted_time: job.posted_time,
            created_at: job.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionItem {
    pub value: &'static str,
    pub label: &'static str,
}

/// Choices offered by the creation form and the filter sidebar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOptionsResponse {
    pub locations: Vec<OptionItem>,
    pub popular_locations: Vec<&'static str>,
    pub job_types: Vec<OptionItem>,
    pub experience_levels: Vec<&'static str>,
    pub salary_ranges: Vec<SalaryRange>,
    pub max_salary: i32,
}

impl JobOptionsResponse {
    pub fn current() -> Self {
        Self {
            locations: Location::ALL
                .iter()
                .map(|l| OptionItem {
                    value: l.as_str(),
                    label: l.label(),
                })
                .collect(),
            popular_locations: POPULAR_LOCATIONS.to_vec(),
            job_types: JobType::ALL
                .iter()
                .map(|t| OptionItem {
                    value: t.as_str(),
                    label: job_type_display_name(Some(t.as_str())),
                })
                .collect(),
            experience_levels: EXPERIENCE_LEVELS.to_vec(),
            salary_ranges: SALARY_RANGES.to_vec(),
            max_salary: MAX_SALARY_LPA,
        }
    }
}
