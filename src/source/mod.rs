//! Extraction side of the sync: how approved time rows are pulled from
//! production.

pub mod csv_export;

pub use csv_export::CsvExportConnector;

use crate::config::ProductionCredentials;
use crate::core::date_range::DateRange;
use crate::errors::AppResult;
use crate::models::RawTimeRecord;

/// Name of the stored procedure whose result set the source reproduces.
pub const APPROVED_TIME_PROCEDURE: &str = "spSTT_ApprovedTimeAllFTWGroupsWithClockingHistNMethods";

/// Opens a connection to the production source.
pub trait SourceConnector {
    fn connect(&self, credentials: &ProductionCredentials) -> AppResult<Box<dyn SourceConnection>>;
}

/// A live connection. Dropping it releases the underlying resource.
pub trait SourceConnection {
    /// Run the approved-time extraction for `range` (both ends inclusive).
    fn fetch(&mut self, range: &DateRange) -> AppResult<Vec<RawTimeRecord>>;

    /// Short label for progress output, e.g. `server/database`.
    fn describe(&self) -> String;
}
