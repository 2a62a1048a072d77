use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring the analytical store up to date before any command touches it.
///
/// `log` and `time_entries` (plus their indexes) are owned by the migration
/// runner; calling this on an existing store is a no-op.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    tracing::debug!("analytical store schema is current");
    Ok(())
}
