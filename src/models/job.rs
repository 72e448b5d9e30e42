use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::dto::job_dto::CreateJobPayload;
use crate::error::{Error, Result};
use crate::utils::time::parse_optional_date;
use crate::utils::validation::{optional_text, parse_salary_range, require_text};

pub const MAX_SALARY_LPA: i32 = 60;
pub const DEFAULT_EXPERIENCE: &str = "1-3 years";
pub const DEFAULT_POSTED_TIME: &str = "24h Ago";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    #[default]
    Fulltime,
    Parttime,
    Internship,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::Fulltime,
        JobType::Parttime,
        JobType::Internship,
        JobType::Contract,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Fulltime => "fulltime",
            JobType::Parttime => "parttime",
            JobType::Internship => "internship",
            JobType::Contract => "contract",
        }
    }
}

impl FromStr for JobType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == token)
            .ok_or_else(|| Error::BadRequest(format!("Invalid job type: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Preferred,
    Chennai,
    Bangalore,
    Mumbai,
    Delhi,
    Hyderabad,
    Pune,
}

impl Location {
    pub const ALL: [Location; 7] = [
        Location::Preferred,
        Location::Chennai,
        Location::Bangalore,
        Location::Mumbai,
        Location::Delhi,
        Location::Hyderabad,
        Location::Pune,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Preferred => "preferred",
            Location::Chennai => "chennai",
            Location::Bangalore => "bangalore",
            Location::Mumbai => "mumbai",
            Location::Delhi => "delhi",
            Location::Hyderabad => "hyderabad",
            Location::Pune => "pune",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Location::Preferred => "Preferred Location",
            Location::Chennai => "Chennai",
            Location::Bangalore => "Bangalore",
            Location::Mumbai => "Mumbai",
            Location::Delhi => "Delhi",
            Location::Hyderabad => "Hyderabad",
            Location::Pune => "Pune",
        }
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        Location::ALL
            .into_iter()
            .find(|l| l.as_str() == token || l.label().eq_ignore_ascii_case(&token))
            .ok_or_else(|| Error::BadRequest(format!("Unsupported location: {}", s)))
    }
}

/// A persisted job posting. Serialized with the document field names the
/// job board front-end reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "Jobtitle")]
    pub job_title: String,
    pub experience: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "salaryValue")]
    pub salary_value: i32,
    #[serde(rename = "JobType")]
    pub job_type: JobType,
    #[serde(rename = "ApplicationDate", skip_serializing_if = "Option::is_none")]
    pub application_date: Option<DateTime<Utc>>,
    #[serde(rename = "postedTime")]
    pub posted_time: String,
    #[serde(rename = "JobDescription")]
    pub description: String,
    #[serde(rename = "Jobicon")]
    pub icon: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// A validated job that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub company_name: String,
    pub job_title: String,
    pub experience: String,
    pub location: Location,
    pub salary: String,
    pub salary_value: i32,
    pub job_type: JobType,
    pub application_date: Option<DateTime<Utc>>,
    pub posted_time: String,
    pub description: String,
    pub icon: String,
}

impl NewJob {
    pub fn into_job(self, id: Uuid, at: DateTime<Utc>) -> Job {
        Job {
            id,
            company_name: self.company_name,
            job_title: self.job_title,
            experience: self.experience,
            location: self.location.as_str().to_string(),
            salary: self.salary,
            salary_value: self.salary_value,
            job_type: self.job_type,
            application_date: self.application_date,
            posted_time: self.posted_time,
            description: self.description,
            icon: self.icon,
            created_at: at,
            updated_at: at,
        }
    }
}

impl TryFrom<CreateJobPayload> for NewJob {
    type Error = Error;

    fn try_from(payload: CreateJobPayload) -> Result<Self> {
        let company_name = require_text(payload.company_name, "CompanyName")?;
        let job_title = require_text(payload.job_title, "Jobtitle")?;
        let experience = require_text(payload.experience, "experience")?;
        let location: Location = require_text(payload.location, "location")?.parse()?;
        let salary = require_text(payload.salary, "salary")?;
        let salary_value = payload
            .salary_value
            .ok_or_else(|| Error::BadRequest("Missing required field: salaryValue".into()))?;
        let description = require_text(payload.description, "JobDescription")?;
        let icon = require_text(payload.icon, "Jobicon")?;

        if !(0..=MAX_SALARY_LPA).contains(&salary_value) {
            return Err(Error::BadRequest(format!(
                "salaryValue must be between 0 and {}",
                MAX_SALARY_LPA
            )));
        }
        let (min, max) = parse_salary_range(&salary).ok_or_else(|| {
            Error::BadRequest("salary must look like \"<min>-<max> LPA\"".into())
        })?;
        if min > max {
            return Err(Error::BadRequest(
                "salary minimum must not exceed the maximum".into(),
            ));
        }
        if max != salary_value {
            return Err(Error::BadRequest(
                "salary upper bound must equal salaryValue".into(),
            ));
        }

        let job_type = match optional_text(payload.job_type) {
            Some(raw) => raw.parse()?,
            None => JobType::default(),
        };
        let application_date = parse_optional_date(payload.application_date.as_deref())?;
        let posted_time = optional_text(payload.posted_time)
            .unwrap_or_else(|| DEFAULT_POSTED_TIME.to_string());

        Ok(Self {
            company_name,
            job_title,
            experience,
            location,
            salary,
            salary_value,
            job_type,
            application_date,
            posted_time,
            description,
            icon,
        })
    }
}
