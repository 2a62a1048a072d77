use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let n = ExportLogic::export(&mut pool, *format, file, range.as_deref(), *force)?;

        if n == 0 {
            warning("No time entries found for the selected range. Nothing to export.");
            return Ok(());
        }

        if let Err(e) = ttlog(&pool.conn, "export", file, &format!("Exported {n} time entries")) {
            warning(format!("Failed to write internal log: {e}"));
        }
        success(format!("Exported {n} time entries to {file}"));
    }
    Ok(())
}
