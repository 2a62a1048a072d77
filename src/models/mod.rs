pub mod entry_type;
pub mod office;
pub mod raw_record;
pub mod time_entry;

pub use entry_type::EntryType;
pub use office::XlcOperation;
pub use raw_record::RawTimeRecord;
pub use time_entry::TimeEntry;
