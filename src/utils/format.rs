//! Display helpers that turn stored job fields into card labels.
//!
//! Everything here is pure and lenient: odd input falls back to a default
//! label instead of failing.

use serde::{Deserialize, Serialize};

use crate::models::job::Location;
use crate::utils::validation::parse_salary_range;

pub const BULLET_MAX_CHARS: usize = 85;
const BULLET_SPLIT_MIN_INDEX: usize = 20;
const PLACEHOLDER_BULLETS: [&str; 2] = ["No specific requirements mentioned", "Contact for more details"];
const FOLLOW_UP_BULLET: &str = "Apply to know more details";

/// Companies with a bundled logo asset.
const COMPANY_LOGOS: [(&str, &str); 4] = [
    ("amazon", "/amazon-icon.svg"),
    ("flipkart", "/flipkart-icon.svg"),
    ("microsoft", "/microsoft-icon.svg"),
    ("swiggy", "/swiggy-icon.svg"),
];

const LETTER_COLORS: [&str; 12] = [
    "bg-blue-500",
    "bg-green-500",
    "bg-purple-500",
    "bg-red-500",
    "bg-yellow-500",
    "bg-indigo-500",
    "bg-pink-500",
    "bg-gray-800",
    "bg-orange-500",
    "bg-teal-500",
    "bg-cyan-500",
    "bg-rose-500",
];

pub const POPULAR_LOCATIONS: [&str; 10] = [
    "Bangalore",
    "Chennai",
    "Mumbai",
    "Delhi",
    "Hyderabad",
    "Pune",
    "Gurgaon",
    "Noida",
    "Kolkata",
    "Ahmedabad",
];

pub const EXPERIENCE_LEVELS: [&str; 6] = [
    "0-1 years",
    "1-3 years",
    "3-5 years",
    "5-8 years",
    "8-12 years",
    "12+ years",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryRange {
    pub label: &'static str,
    pub min: i32,
    pub max: i32,
}

pub const SALARY_RANGES: [SalaryRange; 6] = [
    SalaryRange { label: "0-3 LPA", min: 0, max: 3 },
    SalaryRange { label: "3-6 LPA", min: 3, max: 6 },
    SalaryRange { label: "6-10 LPA", min: 6, max: 10 },
    SalaryRange { label: "10-15 LPA", min: 10, max: 15 },
    SalaryRange { label: "15-25 LPA", min: 15, max: 25 },
    SalaryRange { label: "25+ LPA", min: 25, max: 100 },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CompanyIcon {
    Logo { logo: String },
    Letter { letter: String, color: String },
}

impl CompanyIcon {
    /// The value stored in a job's `Jobicon` field.
    pub fn token(&self) -> String {
        match self {
            CompanyIcon::Logo { logo } => logo.clone(),
            CompanyIcon::Letter { letter, .. } => letter.clone(),
        }
    }
}

pub fn company_icon(company_name: &str) -> CompanyIcon {
    let key = company_name.to_lowercase();
    if let Some((_, logo)) = COMPANY_LOGOS.iter().find(|(name, _)| *name == key) {
        return CompanyIcon::Logo {
            logo: logo.to_string(),
        };
    }

    let initial = |word: &str| -> String {
        word.chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    };
    let words: Vec<&str> = company_name.split_whitespace().collect();
    let letter = match words.as_slice() {
        [] => "C".to_string(),
        [only] => initial(only),
        [first, second, ..] => format!("{}{}", initial(first), initial(second)),
    };

    let color = LETTER_COLORS[company_name.chars().count() % LETTER_COLORS.len()];
    CompanyIcon::Letter {
        letter,
        color: color.to_string(),
    }
}

pub fn job_type_display_name(job_type: Option<&str>) -> &'static str {
    match job_type.map(str::to_lowercase).as_deref() {
        Some("parttime") => "Part Time",
        Some("internship") => "Internship",
        Some("contract") => "Contract",
        _ => "Full Time",
    }
}

/// Reduces a free-text description to exactly two short bullet lines.
pub fn description_bullets(description: &str) -> Vec<String> {
    let normalized = description.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<String> = normalized
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    match lines.len() {
        0 => {
            lines = PLACEHOLDER_BULLETS.iter().map(|s| s.to_string()).collect();
        }
        1 => {
            let single: Vec<char> = lines[0].trim().chars().collect();
            lines = split_long_line(&single);
        }
        _ => {}
    }

    lines
        .into_iter()
        .take(2)
        .map(|line| truncate_text(line.trim(), BULLET_MAX_CHARS))
        .collect()
}

fn split_long_line(line: &[char]) -> Vec<String> {
    let whole: String = line.iter().collect();
    if line.len() <= BULLET_MAX_CHARS {
        return vec![whole, FOLLOW_UP_BULLET.to_string()];
    }

    let mid = line.len() / 2;
    let break_point = line[..=mid].iter().rposition(|c| *c == ' ');
    match break_point {
        Some(idx) if idx > BULLET_SPLIT_MIN_INDEX => vec![
            line[..idx].iter().collect(),
            line[idx + 1..].iter().collect(),
        ],
        _ => vec![whole, FOLLOW_UP_BULLET.to_string()],
    }
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First entry of a comma separated location list, using the city label
/// when it is one of the known locations.
pub fn location_display_name(location: &str) -> String {
    let first = location.split(',').next().unwrap_or_default().trim();
    match first.parse::<Location>() {
        Ok(known) => known.label().to_string(),
        Err(_) => capitalize_first(first),
    }
}

/// Bracket label for a salary ceiling in LPA.
pub fn salary_bracket(salary_value: i32) -> &'static str {
    match salary_value {
        v if v <= 3 => "0-3 LPA",
        v if v <= 6 => "3-6 LPA",
        v if v <= 10 => "6-10 LPA",
        v if v <= 15 => "10-15 LPA",
        v if v <= 25 => "15-25 LPA",
        _ => "25+ LPA",
    }
}

/// "0-60 LPA" becomes "60 LPA"; anything else is shown as stored.
pub fn salary_ceiling_label(salary: &str) -> String {
    match parse_salary_range(salary) {
        Some((_, max)) => format!("{} LPA", max),
        None => salary.to_string(),
    }
}
