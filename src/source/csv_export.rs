use super::{APPROVED_TIME_PROCEDURE, SourceConnection, SourceConnector};
use crate::config::ProductionCredentials;
use crate::core::date_range::DateRange;
use crate::errors::{AppError, AppResult};
use crate::models::RawTimeRecord;
use crate::utils::date::parse_flexible_date;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Reads the approved-time result set from a CSV export of the stored
/// procedure, with the procedure's column names as header.
#[derive(Debug, Clone)]
pub struct CsvExportConnector {
    path: PathBuf,
}

impl CsvExportConnector {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SourceConnector for CsvExportConnector {
    fn connect(&self, credentials: &ProductionCredentials) -> AppResult<Box<dyn SourceConnection>> {
        let file = File::open(&self.path).map_err(|e| {
            AppError::Extraction(format!("cannot open export {}: {e}", self.path.display()))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            server = %credentials.server,
            user = %credentials.user,
            "opened approved-time export"
        );

        Ok(Box::new(CsvExportConnection {
            label: format!("{}/{}", credentials.server, credentials.database),
            path: self.path.clone(),
            reader: Some(csv::Reader::from_reader(file)),
        }))
    }
}

struct CsvExportConnection {
    label: String,
    path: PathBuf,
    reader: Option<csv::Reader<File>>,
}

/// Date the procedure filters on: the work date, else the week end.
fn filter_date(r: &RawTimeRecord) -> Option<chrono::NaiveDate> {
    r.work_date
        .as_deref()
        .and_then(parse_flexible_date)
        .or_else(|| r.dt_end_cli_work_week.as_deref().and_then(parse_flexible_date))
}

impl SourceConnection for CsvExportConnection {
    fn fetch(&mut self, range: &DateRange) -> AppResult<Vec<RawTimeRecord>> {
        // The export is a forward-only cursor, like the procedure's result set.
        let mut reader = self.reader.take().ok_or_else(|| {
            AppError::Extraction(format!(
                "{APPROVED_TIME_PROCEDURE}: result set of {} already consumed",
                self.path.display()
            ))
        })?;

        let mut out = Vec::new();
        for (idx, row) in reader.deserialize::<RawTimeRecord>().enumerate() {
            let record = row.map_err(|e| {
                AppError::Extraction(format!("{APPROVED_TIME_PROCEDURE}: row {}: {e}", idx + 1))
            })?;

            match filter_date(&record) {
                Some(d) if !range.contains(d) => continue,
                _ => out.push(record),
            }
        }

        Ok(out)
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

impl Drop for CsvExportConnection {
    fn drop(&mut self) {
        tracing::debug!(source = %self.label, "source connection released");
    }
}
