use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Error, Result};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn from_rfc3339(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::BadRequest(format!("Invalid timestamp {:?}: {}", s, e)))
}

/// Accepts either a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date
/// (as sent by date inputs). Blank input means "no date".
pub fn parse_optional_date(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    if let Ok(dt) = from_rfc3339(raw) {
        return Ok(Some(dt));
    }
    let invalid = || Error::BadRequest(format!("Invalid ApplicationDate: {}", raw));
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;
    Ok(Some(midnight.and_utc()))
}

/// Short "posted ... ago" label used on job cards.
pub fn relative_time_label(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - date).num_milliseconds().unsigned_abs();
    let day_ms = 24 * 60 * 60 * 1000;
    let days = elapsed_ms.div_ceil(day_ms);

    if days <= 1 {
        "24h Ago".to_string()
    } else if days <= 7 {
        format!("{}d Ago", days)
    } else if days <= 30 {
        format!("{}w Ago", days.div_ceil(7))
    } else {
        format!("{}m Ago", days.div_ceil(30))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn labels_follow_elapsed_buckets() {
        let now = Utc::now();
        assert_eq!(relative_time_label(now, now), "24h Ago");
        assert_eq!(relative_time_label(now - Duration::hours(20), now), "24h Ago");
        assert_eq!(relative_time_label(now - Duration::days(3), now), "3d Ago");
        assert_eq!(relative_time_label(now - Duration::days(7), now), "7d Ago");
        assert_eq!(relative_time_label(now - Duration::days(10), now), "2w Ago");
        assert_eq!(relative_time_label(now - Duration::days(30), now), "5w Ago");
        assert_eq!(relative_time_label(now - Duration::days(45), now), "2m Ago");
    }

    #[test]
    fn partial_days_round_up() {
        let now = Utc::now();
        let label = relative_time_label(now - Duration::hours(50), now);
        assert_eq!(label, "3d Ago");
    }

    #[test]
    fn parses_dates_and_blanks() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        let day = parse_optional_date(Some("2025-03-01")).unwrap().unwrap();
        assert_eq!(day.to_rfc3339(), "2025-03-01T00:00:00+00:00");
        let ts = parse_optional_date(Some("2025-03-01T10:30:00Z")).unwrap().unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-03-01T10:30:00+00:00");
        assert!(matches!(
            parse_optional_date(Some("next week")),
            Err(Error::BadRequest(_))
        ));
    }
}
