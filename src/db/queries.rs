use crate::db::models::{STORED_COLUMNS, StoredTimeEntry, row_to_stored_entry};
use crate::errors::AppResult;
use crate::models::TimeEntry;
use chrono::NaiveDate;
use rusqlite::{Connection, params};

const DATE_FMT: &str = "%Y-%m-%d";

/// Tries default to 1 when the source has none (or reports 0).
fn tries_or_one(v: Option<i64>) -> i64 {
    v.filter(|t| *t > 0).unwrap_or(1)
}

/// Delete every entry whose week-end date lies in `[from, to]`.
///
/// Takes a plain connection so callers can pass a `Transaction` and keep
/// the delete and the following insert in one atomic unit.
pub fn delete_entries_in_range(conn: &Connection, from: NaiveDate, to: NaiveDate) -> rusqlite::Result<usize> {
    conn.execute(
        "DELETE FROM time_entries
         WHERE dt_end_cli_work_week BETWEEN ?1 AND ?2",
        params![
            from.format(DATE_FMT).to_string(),
            to.format(DATE_FMT).to_string()
        ],
    )
}

/// Insert all entries with one cached statement. Returns the row count.
pub fn insert_entries(conn: &Connection, entries: &[TimeEntry], synced_at: &str) -> rusqlite::Result<usize> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO time_entries (
            year, week_number, week_year, dt_end_cli_work_week,
            applicant_id, last_name, first_name, full_name, employee_type,
            ofc_name, xlc_operation, bu_dept_name, shift_number,
            work_date, dt_time_start, dt_time_end,
            clock_in_method, clock_out_method, entry_type, allocation_method,
            regular_hours, overtime_hours, double_time_hours, holiday_hours, total_hours,
            clock_in_tries, clock_out_tries, synced_at
         ) VALUES (
            ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
            ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28
         )",
    )?;

    let mut inserted = 0;
    for e in entries {
        inserted += stmt.execute(params![
            e.year,
            e.week_number,
            e.week_year,
            e.dt_end_cli_work_week.map(|d| d.format(DATE_FMT).to_string()),
            e.applicant_id.clone().unwrap_or_default(),
            e.last_name,
            e.first_name,
            e.full_name,
            e.employee_type,
            e.ofc_name,
            e.xlc_operation.as_ref().map(|x| x.as_label().to_string()),
            e.bu_dept_name,
            e.shift_number.clone().unwrap_or_default(),
            e.work_date.map(|d| d.format(DATE_FMT).to_string()),
            e.dt_time_start,
            e.dt_time_end,
            e.clock_in_method,
            e.clock_out_method,
            e.entry_type.as_label(),
            e.allocation_method,
            e.regular_hours,
            e.overtime_hours,
            e.double_time_hours,
            e.holiday_hours,
            e.total_hours,
            tries_or_one(e.clock_in_tries),
            tries_or_one(e.clock_out_tries),
            synced_at,
        ])?;
    }

    Ok(inserted)
}

/// Load stored entries, optionally bounded by week-end date (inclusive).
pub fn load_entries(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<StoredTimeEntry>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {STORED_COLUMNS} FROM time_entries
                 ORDER BY dt_end_cli_work_week ASC, full_name ASC, id ASC"
            ))?;
            let rows = stmt.query_map([], row_to_stored_entry)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some((from, to)) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {STORED_COLUMNS} FROM time_entries
                 WHERE dt_end_cli_work_week BETWEEN ?1 AND ?2
                 ORDER BY dt_end_cli_work_week ASC, full_name ASC, id ASC"
            ))?;
            let rows = stmt.query_map(
                params![
                    from.format(DATE_FMT).to_string(),
                    to.format(DATE_FMT).to_string()
                ],
                row_to_stored_entry,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM time_entries", [], |row| row.get(0))?)
}

/// Entry counts per stored entry type, most frequent first.
pub fn count_by_entry_type(conn: &Connection) -> AppResult<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT entry_type, COUNT(*) FROM time_entries
         GROUP BY entry_type
         ORDER BY COUNT(*) DESC, entry_type ASC",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
