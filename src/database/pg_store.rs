use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::store::DocumentStore;
use crate::error::{Error, Result};
use crate::models::application::{Application, NewApplication};
use crate::models::job::{Job, NewJob};

const JOB_COLUMNS: &str = "id, company_name, job_title, experience, location, salary, salary_value, job_type, application_date, posted_time, description, icon, created_at, updated_at";

const APPLICATION_COLUMNS: &str = "id, job_id, job_title, company_name, applicant_name, applicant_email, applicant_phone, resume, cover_letter, status, applied_at, created_at, updated_at";

#[derive(Debug, FromRow)]
struct JobRow {
    id: Uuid,
    company_name: String,
    job_title: String,
    experience: String,
    location: String,
    salary: String,
    salary_value: i32,
    job_type: String,
    application_date: Option<DateTime<Utc>>,
    posted_time: String,
    description: String,
    icon: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for Job {
    type Error = Error;

    fn try_from(row: JobRow) -> Result<Self> {
        let job_type = row
            .job_type
            .parse()
            .map_err(|_| Error::Internal(format!("job {} has job_type {:?}", row.id, row.job_type)))?;
        Ok(Job {
            id: row.id,
            company_name: row.company_name,
            job_title: row.job_title,
            experience: row.experience,
            location: row.location,
            salary: row.salary,
            salary_value: row.salary_value,
            job_type,
            application_date: row.application_date,
            posted_time: row.posted_time,
            description: row.description,
            icon: row.icon,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ApplicationRow {
    id: Uuid,
    job_id: String,
    job_title: String,
    company_name: String,
    applicant_name: String,
    applicant_email: String,
    applicant_phone: Option<String>,
    resume: Option<String>,
    cover_letter: Option<String>,
    status: String,
    applied_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ApplicationRow> for Application {
    type Error = Error;

    fn try_from(row: ApplicationRow) -> Result<Self> {
        let status = row.status.parse().map_err(|_| {
            Error::Internal(format!("application {} has status {:?}", row.id, row.status))
        })?;
        Ok(Application {
            id: row.id,
            job_id: row.job_id,
            job_title: row.job_title,
            company_name: row.company_name,
            applicant_name: row.applicant_name,
            applicant_email: row.applicant_email,
            applicant_phone: row.applicant_phone,
            resume: row.resume,
            cover_letter: row.cover_letter,
            status,
            applied_at: row.applied_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Postgres-backed store. The pool is created once at start-up and shared
/// by every request.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn insert_job(&self, job: NewJob) -> Result<Job> {
        let query = format!(
            r#"
            INSERT INTO jobs (
                id, company_name, job_title, experience, location, salary,
                salary_value, job_type, application_date, posted_time, description, icon
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12)
            RETURNING {}
            "#,
            JOB_COLUMNS
        );
        let row = sqlx::query_as::<_, JobRow>(&query)
            .bind(Uuid::new_v4())
            .bind(&job.company_name)
            .bind(&job.job_title)
            .bind(&job.experience)
            .bind(job.location.as_str())
            .bind(&job.salary)
            .bind(job.salary_value)
            .bind(job.job_type.as_str())
            .bind(job.application_date)
            .bind(&job.posted_time)
            .bind(&job.description)
            .bind(&job.icon)
            .fetch_one(&self.pool)
            .await?;

        row.try_into()
    }

    async fn list_jobs(&self) -> Result<Vec<Job>> {
        let query = format!("SELECT {} FROM jobs ORDER BY created_at DESC", JOB_COLUMNS);
        let rows = sqlx::query_as::<_, JobRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Job::try_from).collect()
    }

    async fn delete_job(&self, id: Uuid) -> Result<Option<Job>> {
        let query = format!("DELETE FROM jobs WHERE id = $1 RETURNING {}", JOB_COLUMNS);
        let row = sqlx::query_as::<_, JobRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Job::try_from).transpose()
    }

    async fn insert_application(&self, application: NewApplication) -> Result<Application> {
        let query = format!(
            r#"
            INSERT INTO applications (
                id, job_id, job_title, company_name, applicant_name, applicant_email,
                applicant_phone, resume, cover_letter, status, applied_at
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11)
            RETURNING {}
            "#,
            APPLICATION_COLUMNS
        );
        let row = sqlx::query_as::<_, ApplicationRow>(&query)
            .bind(Uuid::new_v4())
            .bind(&application.job_id)
            .bind(&application.job_title)
            .bind(&application.company_name)
            .bind(&application.applicant_name)
            .bind(&application.applicant_email)
            .bind(&application.applicant_phone)
            .bind(&application.resume)
            .bind(&application.cover_letter)
            .bind(application.status.as_str())
            .bind(application.applied_at)
            .fetch_one(&self.pool)
            .await?;

        row.try_into()
    }

    async fn list_applications(&self) -> Result<Vec<Application>> {
        let query = format!(
            "SELECT {} FROM applications ORDER BY created_at DESC",
            APPLICATION_COLUMNS
        );
        let rows = sqlx::query_as::<_, ApplicationRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Application::try_from).collect()
    }

    async fn delete_application(&self, id: Uuid) -> Result<Option<Application>> {
        let query = format!(
            "DELETE FROM applications WHERE id = $1 RETURNING {}",
            APPLICATION_COLUMNS
        );
        let row = sqlx::query_as::<_, ApplicationRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Application::try_from).transpose()
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
