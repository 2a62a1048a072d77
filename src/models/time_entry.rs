use super::{entry_type::EntryType, office::XlcOperation};
use chrono::NaiveDate;
use serde::Serialize;

/// A classified, normalized time-clock record ready to be persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub applicant_id: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub full_name: String, // "Last, First"
    pub employee_type: Option<String>,
    pub ofc_name: Option<String>,
    pub xlc_operation: Option<XlcOperation>,
    pub bu_dept_name: Option<String>,
    pub shift_number: Option<String>,

    pub dt_end_cli_work_week: Option<NaiveDate>,
    pub work_date: Option<NaiveDate>,
    pub dt_time_start: Option<String>, // `YYYY-MM-DD HH:MM:SS`, or source text when unparsable
    pub dt_time_end: Option<String>,
    pub week_number: Option<u32>, // ISO week of dt_end_cli_work_week
    pub week_year: Option<i32>,   // ISO week-based year
    pub year: Option<i32>,        // calendar year

    pub clock_in_method: String, // "NULL" when the source had none
    pub clock_out_method: String,
    pub entry_type: EntryType,
    pub allocation_method: Option<String>,

    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub double_time_hours: f64,
    pub holiday_hours: f64,
    pub total_hours: f64,

    pub clock_in_tries: Option<i64>,
    pub clock_out_tries: Option<i64>,
}

impl TimeEntry {
    pub fn week_end_str(&self) -> String {
        self.dt_end_cli_work_week
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn xlc_operation_str(&self) -> &str {
        self.xlc_operation
            .as_ref()
            .map(XlcOperation::as_label)
            .unwrap_or("")
    }

    /// One-line preview used by dry runs: office | week end | name | type
    pub fn preview_line(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.xlc_operation_str(),
            self.week_end_str(),
            self.full_name,
            self.entry_type
        )
    }
}
