use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Error, Result};

fn salary_range_regex() -> &'static Regex {
    static SALARY_RANGE: OnceLock<Regex> = OnceLock::new();
    SALARY_RANGE.get_or_init(|| {
        Regex::new(r"(?i)^\s*(\d+)\s*-\s*(\d+)\s*LPA\s*$").expect("salary range pattern is valid")
    })
}

/// Parses a `"<min>-<max> LPA"` display string into its bounds.
pub fn parse_salary_range(salary: &str) -> Option<(i32, i32)> {
    let caps = salary_range_regex().captures(salary)?;
    let min = caps.get(1)?.as_str().parse().ok()?;
    let max = caps.get(2)?.as_str().parse().ok()?;
    Some((min, max))
}

/// Trims a required text field, failing when it is absent or blank.
pub fn require_text(value: Option<String>, field: &str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::BadRequest(format!("Missing required field: {}", field))),
    }
}

/// Trims an optional text field; blank values collapse to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_salary_ranges() {
        assert_eq!(parse_salary_range("3-12 LPA"), Some((3, 12)));
        assert_eq!(parse_salary_range(" 0 - 60 lpa "), Some((0, 60)));
        assert_eq!(parse_salary_range("25+ LPA"), None);
        assert_eq!(parse_salary_range("12"), None);
    }

    #[test]
    fn required_text_is_trimmed_and_non_blank() {
        assert_eq!(require_text(Some("  Amazon ".into()), "CompanyName").unwrap(), "Amazon");
        assert!(require_text(Some("   ".into()), "CompanyName").is_err());
        assert!(require_text(None, "CompanyName").is_err());
    }

    #[test]
    fn optional_text_drops_blanks() {
        assert_eq!(optional_text(Some(" ".into())), None);
        assert_eq!(optional_text(Some(" x ".into())), Some("x".to_string()));
    }
}
