use crate::models::job::{Job, MAX_SALARY_LPA};

/// Criteria for narrowing the job list. Empty text criteria match
/// everything; the salary window defaults to the full legal range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFilters {
    pub search: String,
    pub location: String,
    pub job_type: String,
    pub salary_min: i32,
    pub salary_max: i32,
}

impl Default for JobFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            location: String::new(),
            job_type: String::new(),
            salary_min: 0,
            salary_max: MAX_SALARY_LPA,
        }
    }
}

impl JobFilters {
    pub fn matches(&self, job: &Job) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !job.job_title.to_lowercase().contains(&needle)
                && !job.company_name.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if !self.location.is_empty()
            && !job
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase())
        {
            return false;
        }

        if !self.job_type.is_empty() && !job.job_type.as_str().eq_ignore_ascii_case(&self.job_type)
        {
            return false;
        }

        job.salary_value >= self.salary_min && job.salary_value <= self.salary_max
    }
}

/// Keeps the jobs matching every criterion, in their original order.
pub fn filter_jobs(jobs: &[Job], filters: &JobFilters) -> Vec<Job> {
    jobs.iter().filter(|job| filters.matches(job)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobType;
    use chrono::Utc;
    use uuid::Uuid;

    fn job(title: &str, company: &str, location: &str, job_type: JobType, salary: i32) -> Job {
        let now = Utc::now();
        Job {
            id: Uuid::new_v4(),
            company_name: company.into(),
            job_title: title.into(),
            experience: "1-3 years".into(),
            location: location.into(),
            salary: format!("0-{} LPA", salary),
            salary_value: salary,
            job_type,
            application_date: None,
            posted_time: "24h Ago".into(),
            description: "Build things".into(),
            icon: "A".into(),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample() -> Vec<Job> {
        vec![
            job("Backend Developer", "Amazon", "chennai", JobType::Fulltime, 12),
            job("UI Designer", "Tech Corp", "bangalore", JobType::Internship, 3),
            job("Data Scientist", "Swiggy", "pune", JobType::Contract, 40),
        ]
    }

    #[test]
    fn default_filters_are_identity() {
        let jobs = sample();
        assert_eq!(filter_jobs(&jobs, &JobFilters::default()), jobs);
    }

    #[test]
    fn salary_floor_above_ceiling_excludes_job() {
        for j in sample() {
            let filters = JobFilters {
                salary_min: j.salary_value + 1,
                ..JobFilters::default()
            };
            assert!(filter_jobs(&[j], &filters).is_empty());
        }
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_company() {
        let jobs = sample();
        let by_company = JobFilters {
            search: "AMAZON".into(),
            ..JobFilters::default()
        };
        let found = filter_jobs(&jobs, &by_company);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].company_name, "Amazon");

        let by_title = JobFilters {
            search: "designer".into(),
            ..JobFilters::default()
        };
        assert_eq!(filter_jobs(&jobs, &by_title)[0].job_title, "UI Designer");
    }

    #[test]
    fn criteria_are_combined() {
        let jobs = sample();
        let filters = JobFilters {
            location: "CHEN".into(),
            job_type: "FullTime".into(),
            salary_min: 10,
            salary_max: 20,
            ..JobFilters::default()
        };
        let found = filter_jobs(&jobs, &filters);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].job_title, "Backend Developer");

        let wrong_type = JobFilters {
            job_type: "contract".into(),
            ..filters
        };
        assert!(filter_jobs(&jobs, &wrong_type).is_empty());
    }

    #[test]
    fn job_type_is_an_exact_match() {
        let filters = JobFilters {
            job_type: "full".into(),
            ..JobFilters::default()
        };
        assert!(filter_jobs(&sample(), &filters).is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let jobs = sample();
        let filters = JobFilters {
            salary_min: 3,
            ..JobFilters::default()
        };
        let titles: Vec<_> = filter_jobs(&jobs, &filters)
            .into_iter()
            .map(|j| j.job_title)
            .collect();
        assert_eq!(titles, vec!["Backend Developer", "UI Designer", "Data Scientist"]);
    }
}
