#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bstt_sync::models::RawTimeRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Header of the approved-time procedure's result set.
pub const EXPORT_HEADER: &str = "ApplicantID,LastName,FirstName,EmployeeTypeID,OfcName,BUDeptName,\
ShiftNumber,WorkDate,dtEndCliWorkWeek,dtTimeStart,dtTimeEnd,ClockIn_Method,ClockOut_Method,\
RegHours,OTHours,DTHours,HolWrkHours,Allocation_Method,ClockIn_Tries,ClockOut_Tries";

/// Command for the built binary, with production credentials set and HOME
/// pointed at a scratch dir so the developer's own config is never read.
pub fn bstt() -> Command {
    let mut home = env::temp_dir();
    home.push("bsttsync_test_home");

    let mut cmd = cargo_bin_cmd!("bstt-sync");
    cmd.env("HOME", &home)
        .env("PROD_SQL_USER", "svc_bstt")
        .env("PROD_SQL_PASSWORD", "s3cret")
        .env_remove("PROD_SQL_SERVER")
        .env_remove("PROD_SQL_DATABASE");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bsttsync.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a procedure export with the given data lines (header included).
pub fn write_export(name: &str, lines: &[&str]) -> String {
    let path = temp_out(name, "csv");
    let mut body = String::from(EXPORT_HEADER);
    body.push('\n');
    for l in lines {
        body.push_str(l);
        body.push('\n');
    }
    fs::write(&path, body).expect("write export");
    path
}

/// Export with four rows in the week ending 2025-06-15 and one a week earlier.
///
/// The NOT_REQ_TO_CLOCK row and the time-swap row are dropped by the
/// transform, leaving two entries for 2025-06-15 and one for 2025-06-08.
pub fn sample_export(name: &str) -> String {
    write_export(
        name,
        &[
            "1001,Doe,Jane,FT,Blue Ash,Packing,1,2025-06-12,2025-06-15,2025-06-12 06:00:00,2025-06-12 14:30:00,FINGER,FINGER,8,0,0,0,,1,1",
            "1002,Roe,Rick,FT,Cincinnati,Packing,2,2025-06-13,2025-06-15,,,,,0,,,,,,",
            "1003,Poe,Ann,FT,Blue Ash,Packing,1,2025-06-13,2025-06-15,,,FINGER,FINGER,8,,,,NOT_REQ_TO_CLOCK,1,1",
            "1004,Fox,Ben,FT,Mason,Packing,1,2025-06-13,2025-06-15,,,SWAP,FINGER,8,,,,,,",
            "1005,Old,Otto,FT,Mason,Packing,1,2025-06-05,2025-06-08,,,FINGER,FINGER,7.5,0.5,,,,,",
        ],
    )
}

/// A raw record dated in the week ending `week_end`.
pub fn raw(id: &str, clock_in: Option<&str>, clock_out: Option<&str>, week_end: &str) -> RawTimeRecord {
    RawTimeRecord {
        applicant_id: Some(id.to_string()),
        last_name: Some("Doe".to_string()),
        first_name: Some(format!("Emp{id}")),
        ofc_name: Some("Blue Ash".to_string()),
        shift_number: Some("1".to_string()),
        work_date: Some(week_end.to_string()),
        dt_end_cli_work_week: Some(week_end.to_string()),
        clock_in_method: clock_in.map(str::to_string),
        clock_out_method: clock_out.map(str::to_string),
        reg_hours: Some(8.0),
        ..Default::default()
    }
}
