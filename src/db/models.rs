//! Database row models for the analytical store.
//! These are thin wrappers around SQLite rows.

use rusqlite::Row;
use serde::Serialize;

/// A persisted time entry, flat and string-typed as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredTimeEntry {
    pub id: i64,
    pub year: Option<i32>,
    pub week_number: Option<u32>,
    pub week_year: Option<i32>,
    pub dt_end_cli_work_week: Option<String>,
    pub applicant_id: String,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub full_name: String,
    pub employee_type: Option<String>,
    pub ofc_name: Option<String>,
    pub xlc_operation: Option<String>,
    pub bu_dept_name: Option<String>,
    pub shift_number: String,
    pub work_date: Option<String>,
    pub dt_time_start: Option<String>,
    pub dt_time_end: Option<String>,
    pub clock_in_method: String,
    pub clock_out_method: String,
    pub entry_type: String,
    pub allocation_method: Option<String>,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub double_time_hours: f64,
    pub holiday_hours: f64,
    pub total_hours: f64,
    pub clock_in_tries: i64,
    pub clock_out_tries: i64,
    pub synced_at: String,
}

pub const STORED_COLUMNS: &str = "id, year, week_number, week_year, dt_end_cli_work_week, \
     applicant_id, last_name, first_name, full_name, employee_type, ofc_name, xlc_operation, \
     bu_dept_name, shift_number, work_date, dt_time_start, dt_time_end, clock_in_method, \
     clock_out_method, entry_type, allocation_method, regular_hours, overtime_hours, \
     double_time_hours, holiday_hours, total_hours, clock_in_tries, clock_out_tries, synced_at";

pub fn row_to_stored_entry(row: &Row) -> rusqlite::Result<StoredTimeEntry> {
    Ok(StoredTimeEntry {
        id: row.get("id")?,
        year: row.get("year")?,
        week_number: row.get("week_number")?,
        week_year: row.get("week_year")?,
        dt_end_cli_work_week: row.get("dt_end_cli_work_week")?,
        applicant_id: row.get("applicant_id")?,
        last_name: row.get("last_name")?,
        first_name: row.get("first_name")?,
        full_name: row.get("full_name")?,
        employee_type: row.get("employee_type")?,
        ofc_name: row.get("ofc_name")?,
        xlc_operation: row.get("xlc_operation")?,
        bu_dept_name: row.get("bu_dept_name")?,
        shift_number: row.get("shift_number")?,
        work_date: row.get("work_date")?,
        dt_time_start: row.get("dt_time_start")?,
        dt_time_end: row.get("dt_time_end")?,
        clock_in_method: row.get("clock_in_method")?,
        clock_out_method: row.get("clock_out_method")?,
        entry_type: row.get("entry_type")?,
        allocation_method: row.get("allocation_method")?,
        regular_hours: row.get("regular_hours")?,
        overtime_hours: row.get("overtime_hours")?,
        double_time_hours: row.get("double_time_hours")?,
        holiday_hours: row.get("holiday_hours")?,
        total_hours: row.get("total_hours")?,
        clock_in_tries: row.get("clock_in_tries")?,
        clock_out_tries: row.get("clock_out_tries")?,
        synced_at: row.get("synced_at")?,
    })
}
