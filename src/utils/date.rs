use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date as exported by the source: plain ISO dates, ISO timestamps
/// (time part discarded) or US `MM/DD/YYYY`. Anything else is `None`.
pub fn parse_flexible_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
        .or_else(|| parse_flexible_datetime(s).map(|dt| dt.date()))
}

/// Parse a timestamp; a bare date is read as midnight.
pub fn parse_flexible_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parse a `--range` expression.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - start:end, both sides in the same shape
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(format!(
                "start and end must have the same format: {r}"
            )));
        }

        let (from, _) = period_bounds(start)?;
        let (_, to) = period_bounds(end)?;
        if from > to {
            return Err(AppError::InvalidRange(format!("start is after end: {r}")));
        }
        Ok((from, to))
    } else {
        period_bounds(r.trim())
    }
}

/// First and last day of a single YYYY / YYYY-MM / YYYY-MM-DD period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            year_bounds(y)
        }
        // YYYY-MM
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            let last = first
                .checked_add_months(chrono::Months::new(1))
                .and_then(|d| d.pred_opt())
                .ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Jan 1st and Dec 31st of `year`.
pub fn year_bounds(year: i32) -> AppResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-01-01")))?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-12-31")))?;
    Ok((first, last))
}
