use crate::errors::{AppError, AppResult};
use crate::utils::date::year_bounds;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Inclusive date span handed to the extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Most recent Sunday on or before `today`.
pub fn last_sunday(today: NaiveDate) -> NaiveDate {
    let days_since_sunday = today.weekday().num_days_from_sunday();
    today - Duration::days(i64::from(days_since_sunday))
}

/// Range covered by a sync run.
///
/// With `year`, the whole calendar year. Otherwise `weeks` payroll weeks
/// (Monday..Sunday) ending on the last Sunday on or before `today`.
pub fn calculate_date_range(year: Option<i32>, weeks: u32, today: NaiveDate) -> AppResult<DateRange> {
    if let Some(y) = year {
        let (start, end) = year_bounds(y)?;
        return Ok(DateRange { start, end });
    }

    if weeks == 0 {
        return Err(AppError::InvalidWeeks(0));
    }

    let end = last_sunday(today);
    let start = end - Duration::days(7 * i64::from(weeks) - 1);
    Ok(DateRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn one_week_back_from_a_wednesday() {
        // 2025-06-18 is a Wednesday
        let r = calculate_date_range(None, 1, d(2025, 6, 18)).unwrap();
        assert_eq!(r.end, d(2025, 6, 15));
        assert_eq!(r.start, d(2025, 6, 9));
        assert_eq!(r.end - r.start, Duration::days(6));
    }

    #[test]
    fn sunday_is_its_own_week_end() {
        let r = calculate_date_range(None, 1, d(2025, 6, 15)).unwrap();
        assert_eq!(r.end, d(2025, 6, 15));
        assert_eq!(r.start, d(2025, 6, 9));
    }

    #[test]
    fn saturday_goes_back_six_days() {
        assert_eq!(last_sunday(d(2025, 6, 21)), d(2025, 6, 15));
        assert_eq!(last_sunday(d(2025, 6, 16)), d(2025, 6, 15));
    }

    #[test]
    fn four_weeks_span_28_days() {
        let r = calculate_date_range(None, 4, d(2025, 6, 18)).unwrap();
        assert_eq!(r.end, d(2025, 6, 15));
        assert_eq!(r.start, r.end - Duration::days(27));
        assert_eq!(r.start.weekday(), chrono::Weekday::Mon);
    }

    #[test]
    fn explicit_year_wins_over_weeks() {
        let r = calculate_date_range(Some(2024), 4, d(2025, 6, 18)).unwrap();
        assert_eq!(r, DateRange { start: d(2024, 1, 1), end: d(2024, 12, 31) });
    }

    #[test]
    fn zero_weeks_is_rejected() {
        assert!(matches!(
            calculate_date_range(None, 0, d(2025, 6, 18)),
            Err(AppError::InvalidWeeks(0))
        ));
    }
}
