//! Dataset model: records, summary statistics, and CSV loading.

pub mod dataset;
pub mod loader;
pub mod record;
