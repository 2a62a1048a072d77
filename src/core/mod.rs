pub mod classifier;
pub mod date_range;
pub mod export;
pub mod sync;
pub mod transform;
