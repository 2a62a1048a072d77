//! Sync orchestration: connect, extract, transform, then preview or load.

use crate::config::ProductionCredentials;
use crate::core::date_range::{DateRange, calculate_date_range};
use crate::core::transform::transform_batch;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entries_in_range, insert_entries};
use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::source::{APPROVED_TIME_PROCEDURE, SourceConnector};
use crate::ui::Reporter;
use crate::ui::messages::rule;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_SAMPLE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct SyncRequest {
    pub year: Option<i32>,
    pub weeks: u32,
    pub dry_run: bool,
    pub replace: bool,
    /// Rows shown by a dry run.
    pub sample_size: usize,
}

impl Default for SyncRequest {
    fn default() -> Self {
        Self {
            year: None,
            weeks: 1,
            dry_run: false,
            replace: false,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStage {
    Idle,
    Connecting,
    Extracting,
    Transforming,
    Loading,
    Previewing,
    Done,
    Failed,
}

impl fmt::Display for SyncStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SyncStage::Idle => "idle",
            SyncStage::Connecting => "connecting",
            SyncStage::Extracting => "extracting",
            SyncStage::Transforming => "transforming",
            SyncStage::Loading => "loading",
            SyncStage::Previewing => "previewing",
            SyncStage::Done => "done",
            SyncStage::Failed => "failed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// The source returned nothing for the range.
    NoData,
    /// Dry run: computed and shown, nothing written.
    Previewed,
    Loaded,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    pub range: DateRange,
    pub status: SyncStatus,
    pub fetched: usize,
    pub transformed: usize,
    pub deleted: usize,
    pub persisted: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub deleted: usize,
    pub inserted: usize,
}

fn load_err(e: rusqlite::Error) -> AppError {
    AppError::Load(e.to_string())
}

/// Keep configuration and extraction errors as they are; anything else the
/// source raises is an extraction failure.
fn as_extraction(e: AppError) -> AppError {
    match e {
        AppError::Configuration(_) | AppError::Extraction(_) => e,
        other => AppError::Extraction(other.to_string()),
    }
}

/// Earliest and latest week-end date of a batch; `None` when no entry has one.
pub fn week_end_span(entries: &[TimeEntry]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = entries.iter().filter_map(|e| e.dt_end_cli_work_week);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}

/// Write a batch in one transaction: optional range delete, then insert.
/// Any failure drops the transaction, rolling back the delete as well.
pub fn load_entries(
    pool: &mut DbPool,
    entries: &[TimeEntry],
    replace: bool,
    reporter: &mut dyn Reporter,
) -> AppResult<LoadReport> {
    let synced_at = Local::now().to_rfc3339();
    let tx = pool.conn.transaction().map_err(load_err)?;

    let mut deleted = 0;
    if replace && let Some((min, max)) = week_end_span(entries) {
        deleted = delete_entries_in_range(&tx, min, max).map_err(load_err)?;
        reporter.info(&format!("Deleted {deleted} existing records"));
    }

    let inserted = insert_entries(&tx, entries, &synced_at).map_err(load_err)?;
    tx.commit().map_err(load_err)?;

    Ok(LoadReport { deleted, inserted })
}

/// Show what a live run would write, without touching the store.
pub fn preview_entries(entries: &[TimeEntry], sample_size: usize, reporter: &mut dyn Reporter) {
    reporter.warning("DRY RUN - No data saved");
    reporter.line(&format!("Would save {} records", entries.len()));
    reporter.line("");
    reporter.line("Sample records:");
    for e in entries.iter().take(sample_size) {
        reporter.line(&format!("  {}", e.preview_line()));
    }
}

pub struct SyncLogic;

impl SyncLogic {
    /// Run one sync over the range derived from `request` and `today`.
    ///
    /// The source connection lives only inside this call and is dropped on
    /// every path; errors are reported and then returned unchanged.
    pub fn run(
        pool: &mut DbPool,
        connector: &dyn SourceConnector,
        credentials: &ProductionCredentials,
        request: &SyncRequest,
        today: NaiveDate,
        reporter: &mut dyn Reporter,
    ) -> AppResult<SyncOutcome> {
        reporter.line(&rule('=', 60));
        reporter.line("BSTT Production Data Sync");
        reporter.line(&rule('=', 60));

        let mut stage = SyncStage::Idle;
        let result = Self::run_stages(pool, connector, credentials, request, today, reporter, &mut stage);

        match result {
            Ok(outcome) => {
                tracing::info!(status = ?outcome.status, persisted = outcome.persisted, "sync finished");
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!(%stage, error = %e, "sync failed");
                Self::enter(&mut stage, SyncStage::Failed);
                reporter.error(&format!("Sync failed: {e}"));
                Err(e)
            }
        }
    }

    fn enter(stage: &mut SyncStage, next: SyncStage) {
        tracing::debug!(from = %stage, to = %next, "sync stage");
        *stage = next;
    }

    #[allow(clippy::too_many_arguments)]
    fn run_stages(
        pool: &mut DbPool,
        connector: &dyn SourceConnector,
        credentials: &ProductionCredentials,
        request: &SyncRequest,
        today: NaiveDate,
        reporter: &mut dyn Reporter,
        stage: &mut SyncStage,
    ) -> AppResult<SyncOutcome> {
        let range = calculate_date_range(request.year, request.weeks, today)?;
        reporter.info(&format!("Date range: {range}"));

        // 1️⃣ connect
        Self::enter(stage, SyncStage::Connecting);
        reporter.info(&format!(
            "Connecting to {}/{}...",
            credentials.server, credentials.database
        ));
        let mut conn = connector.connect(credentials).map_err(as_extraction)?;

        // 2️⃣ extract
        Self::enter(stage, SyncStage::Extracting);
        reporter.info(&format!("Fetching data from {} to {}...", range.start, range.end));
        let records = conn.fetch(&range).map_err(as_extraction)?;
        reporter.info(&format!(
            "Fetched {} records from {} ({APPROVED_TIME_PROCEDURE})",
            records.len(),
            conn.describe()
        ));

        if records.is_empty() {
            reporter.warning("No data found for the specified period");
            Self::enter(stage, SyncStage::Done);
            return Ok(SyncOutcome {
                range,
                status: SyncStatus::NoData,
                fetched: 0,
                transformed: 0,
                deleted: 0,
                persisted: 0,
            });
        }

        // 3️⃣ transform
        Self::enter(stage, SyncStage::Transforming);
        let entries = transform_batch(&records, reporter)?;

        // 4️⃣ preview or load
        let report = if request.dry_run {
            Self::enter(stage, SyncStage::Previewing);
            preview_entries(&entries, request.sample_size, reporter);
            LoadReport::default()
        } else {
            Self::enter(stage, SyncStage::Loading);
            let report = load_entries(pool, &entries, request.replace, reporter)?;
            reporter.success(&format!("Saved {} records", report.inserted));

            // Audit trail (non-blocking)
            if let Err(e) = ttlog(
                &pool.conn,
                "sync",
                &format!("{}..{}", range.start, range.end),
                &format!(
                    "fetched {}, deleted {}, inserted {}{}",
                    records.len(),
                    report.deleted,
                    report.inserted,
                    if request.replace { " (replace)" } else { "" }
                ),
            ) {
                reporter.warning(&format!("Failed to write internal log: {e}"));
            }
            report
        };

        drop(conn);
        Self::enter(stage, SyncStage::Done);

        reporter.line(&rule('=', 60));
        reporter.success(&format!("Sync complete! {} records processed", report.inserted));

        Ok(SyncOutcome {
            range,
            status: if request.dry_run {
                SyncStatus::Previewed
            } else {
                SyncStatus::Loaded
            },
            fetched: records.len(),
            transformed: entries.len(),
            deleted: report.deleted,
            persisted: report.inserted,
        })
    }
}
