//! Row-at-a-time transformation of an extracted batch.

use crate::core::classifier::{NULL_METHOD, classify};
use crate::errors::{AppError, AppResult};
use crate::models::{RawTimeRecord, TimeEntry, XlcOperation};
use crate::ui::Reporter;
use crate::utils::date::{parse_flexible_date, parse_flexible_datetime};
use chrono::Datelike;
use std::collections::HashSet;

/// Allocation method of workers exempt from clocking.
pub const NOT_REQUIRED_TO_CLOCK: &str = "NOT_REQ_TO_CLOCK";

const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Absent and non-finite hour buckets count as zero.
fn hours(v: Option<f64>) -> f64 {
    v.filter(|h| h.is_finite()).unwrap_or(0.0)
}

/// Fill an absent or empty clock method with the NULL marker, as the
/// source's downstream reports expect.
fn method_or_null(m: &Option<String>) -> String {
    match m.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NULL_METHOD.to_string(),
    }
}

/// Clock timestamps are stored as `YYYY-MM-DD HH:MM:SS` when they parse;
/// otherwise the source text is kept as is.
fn timestamp_text(v: Option<&str>) -> Option<String> {
    let v = v.map(str::trim).filter(|t| !t.is_empty())?;
    Some(match parse_flexible_datetime(v) {
        Some(dt) => dt.format(TIMESTAMP_FMT).to_string(),
        None => v.to_string(),
    })
}

pub fn full_name(last: Option<&str>, first: Option<&str>) -> String {
    format!("{}, {}", last.unwrap_or(""), first.unwrap_or(""))
}

/// Build the derived entry for one raw row. Never fails: unparsable dates
/// and numbers become absent or zero.
pub fn transform_record(raw: &RawTimeRecord) -> TimeEntry {
    let clock_in_method = method_or_null(&raw.clock_in_method);
    let clock_out_method = method_or_null(&raw.clock_out_method);
    let entry_type = classify(Some(clock_in_method.as_str()), Some(clock_out_method.as_str()));

    let regular_hours = hours(raw.reg_hours);
    let overtime_hours = hours(raw.ot_hours);
    let double_time_hours = hours(raw.dt_hours);
    let holiday_hours = hours(raw.hol_wrk_hours);

    let week_end = raw.dt_end_cli_work_week.as_deref().and_then(parse_flexible_date);
    let iso = week_end.map(|d| d.iso_week());

    TimeEntry {
        applicant_id: raw.applicant_id.clone(),
        last_name: raw.last_name.clone(),
        first_name: raw.first_name.clone(),
        full_name: full_name(raw.last_name.as_deref(), raw.first_name.as_deref()),
        employee_type: raw.employee_type.clone(),
        ofc_name: raw.ofc_name.clone(),
        xlc_operation: raw.ofc_name.as_deref().map(XlcOperation::from_office),
        bu_dept_name: raw.bu_dept_name.clone(),
        shift_number: raw.shift_number.clone(),

        dt_end_cli_work_week: week_end,
        work_date: raw.work_date.as_deref().and_then(parse_flexible_date),
        dt_time_start: timestamp_text(raw.dt_time_start.as_deref()),
        dt_time_end: timestamp_text(raw.dt_time_end.as_deref()),
        week_number: iso.map(|w| w.week()),
        week_year: iso.map(|w| w.year()),
        year: week_end.map(|d| d.year()),

        clock_in_method,
        clock_out_method,
        entry_type,
        allocation_method: raw.allocation_method.clone(),

        regular_hours,
        overtime_hours,
        double_time_hours,
        holiday_hours,
        total_hours: regular_hours + overtime_hours + double_time_hours + holiday_hours,

        clock_in_tries: raw.clock_in_tries,
        clock_out_tries: raw.clock_out_tries,
    }
}

fn is_exempt_from_clocking(entry: &TimeEntry) -> bool {
    entry.allocation_method.as_deref() == Some(NOT_REQUIRED_TO_CLOCK)
}

/// Transform a batch: classify, keep compliance-relevant rows, drop workers
/// not required to clock and collapse exact duplicates (first one wins).
///
/// Duplicates are judged on the source row and the derived entry together,
/// so rows that only become equal after defaulting are all kept.
pub fn transform_batch(records: &[RawTimeRecord], reporter: &mut dyn Reporter) -> AppResult<Vec<TimeEntry>> {
    reporter.info("Transforming data...");

    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(records.len());
    let mut excluded = 0usize;
    let mut duplicates = 0usize;

    for (raw, entry) in records.iter().map(|r| (r, transform_record(r))) {
        if !entry.entry_type.is_compliance_relevant() || is_exempt_from_clocking(&entry) {
            excluded += 1;
            continue;
        }

        let key = serde_json::to_string(&(raw, &entry))
            .map_err(|e| AppError::Transformation(format!("cannot fingerprint row: {e}")))?;
        if !seen.insert(key) {
            duplicates += 1;
            continue;
        }
        out.push(entry);
    }

    tracing::debug!(
        input = records.len(),
        excluded,
        duplicates,
        kept = out.len(),
        "batch transformed"
    );
    reporter.info(&format!("After transformations: {} records", out.len()));

    Ok(out)
}
