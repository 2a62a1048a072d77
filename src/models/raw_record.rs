use serde::{Deserialize, Serialize};

/// One row of the approved-time result set, as delivered by the source.
///
/// Every field is optional: the source schema is not under our control and
/// absent or unparsable cells are tolerated here and defaulted later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTimeRecord {
    #[serde(rename = "ApplicantID", default)]
    pub applicant_id: Option<String>,
    #[serde(rename = "LastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "FirstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "EmployeeTypeID", default)]
    pub employee_type: Option<String>,
    #[serde(rename = "OfcName", default)]
    pub ofc_name: Option<String>,
    #[serde(rename = "BUDeptName", default)]
    pub bu_dept_name: Option<String>,
    #[serde(rename = "ShiftNumber", default)]
    pub shift_number: Option<String>,

    #[serde(rename = "WorkDate", default)]
    pub work_date: Option<String>,
    #[serde(rename = "dtEndCliWorkWeek", default)]
    pub dt_end_cli_work_week: Option<String>,
    #[serde(rename = "dtTimeStart", default)]
    pub dt_time_start: Option<String>,
    #[serde(rename = "dtTimeEnd", default)]
    pub dt_time_end: Option<String>,

    #[serde(rename = "ClockIn_Method", default)]
    pub clock_in_method: Option<String>,
    #[serde(rename = "ClockOut_Method", default)]
    pub clock_out_method: Option<String>,

    #[serde(rename = "RegHours", default, deserialize_with = "csv::invalid_option")]
    pub reg_hours: Option<f64>,
    #[serde(rename = "OTHours", default, deserialize_with = "csv::invalid_option")]
    pub ot_hours: Option<f64>,
    #[serde(rename = "DTHours", default, deserialize_with = "csv::invalid_option")]
    pub dt_hours: Option<f64>,
    #[serde(rename = "HolWrkHours", default, deserialize_with = "csv::invalid_option")]
    pub hol_wrk_hours: Option<f64>,

    #[serde(rename = "Allocation_Method", default)]
    pub allocation_method: Option<String>,

    #[serde(rename = "ClockIn_Tries", default, deserialize_with = "csv::invalid_option")]
    pub clock_in_tries: Option<i64>,
    #[serde(rename = "ClockOut_Tries", default, deserialize_with = "csv::invalid_option")]
    pub clock_out_tries: Option<i64>,
}
