use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sync::{SyncLogic, SyncRequest};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::source::CsvExportConnector;
use crate::ui::ConsoleReporter;
use crate::utils::date::today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync {
        year,
        weeks,
        dry_run,
        replace,
        input,
    } = cmd
    {
        // An explicit year covers the whole calendar year; --weeks is unused then.
        let weeks = match u32::try_from(*weeks) {
            Ok(w) if w >= 1 => w,
            _ if year.is_some() => 1,
            _ => return Err(AppError::InvalidWeeks(*weeks)),
        };

        let export_file = input
            .as_deref()
            .or(cfg.export_file.as_deref())
            .ok_or_else(|| {
                AppError::Configuration(
                    "No extraction source configured: pass --input or set export_file".to_string(),
                )
            })?;

        let credentials = cfg.credentials()?;
        let connector = CsvExportConnector::new(export_file);

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let request = SyncRequest {
            year: *year,
            weeks,
            dry_run: *dry_run,
            replace: *replace,
            sample_size: cfg.sample_size,
        };

        SyncLogic::run(
            &mut pool,
            &connector,
            &credentials,
            &request,
            today(),
            &mut ConsoleReporter,
        )?;
    }
    Ok(())
}
