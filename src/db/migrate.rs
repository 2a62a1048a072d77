use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `time_entries` table.
fn create_time_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            year                 INTEGER,
            week_number          INTEGER,
            week_year            INTEGER,
            dt_end_cli_work_week TEXT,
            applicant_id         TEXT NOT NULL DEFAULT '',
            last_name            TEXT,
            first_name           TEXT,
            full_name            TEXT NOT NULL DEFAULT '',
            employee_type        TEXT,
            ofc_name             TEXT,
            xlc_operation        TEXT,
            bu_dept_name         TEXT,
            shift_number         TEXT NOT NULL DEFAULT '',
            work_date            TEXT,
            dt_time_start        TEXT,
            dt_time_end          TEXT,
            clock_in_method      TEXT NOT NULL DEFAULT 'NULL',
            clock_out_method     TEXT NOT NULL DEFAULT 'NULL',
            entry_type           TEXT NOT NULL,
            allocation_method    TEXT,
            regular_hours        REAL NOT NULL DEFAULT 0,
            overtime_hours       REAL NOT NULL DEFAULT 0,
            double_time_hours    REAL NOT NULL DEFAULT 0,
            holiday_hours        REAL NOT NULL DEFAULT 0,
            total_hours          REAL NOT NULL DEFAULT 0,
            clock_in_tries       INTEGER NOT NULL DEFAULT 1,
            clock_out_tries      INTEGER NOT NULL DEFAULT 1,
            synced_at            TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_time_entries_week_end ON time_entries(dt_end_cli_work_week);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Non-unique index on the natural key of a time entry, used by
/// duplicate lookups across sync runs.
fn migrate_add_natural_key_index(conn: &Connection) -> Result<()> {
    let version = "20250310_0002_time_entries_natural_key";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_time_entries_natural_key
            ON time_entries(applicant_id, dt_end_cli_work_week, shift_number, work_date, dt_time_start);
        "#,
    )?;

    mark_applied(conn, version, "Added natural key index to time_entries")?;

    success(format!(
        "Migration applied: {} → indexed time_entries natural key",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db() and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create time_entries if missing
    if !table_exists(conn, "time_entries")? {
        create_time_entries_table(conn)?;
        success("Created time_entries table.");
    }

    // 3) Versioned migrations
    migrate_add_natural_key_index(conn)?;

    Ok(())
}
