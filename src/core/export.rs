use crate::db::models::StoredTimeEntry;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_range;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export stored time entries.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or a `--range` expression filtered on the
    ///   work-week-end date
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "File '{}' already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let entries = load_entries(&pool.conn, bounds)?;
        if entries.is_empty() {
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
        }

        Ok(entries.len())
    }
}

fn export_json(entries: &[StoredTimeEntry], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(entries)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

fn export_csv(entries: &[StoredTimeEntry], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for item in entries {
        wtr.serialize(item)?;
    }
    wtr.flush().map_err(|e: io::Error| AppError::Export(format!("CSV flush error: {e}")))?;
    Ok(())
}
