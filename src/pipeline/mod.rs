pub mod categorize;
pub mod runner;

pub use categorize::{categorize, CategoryGroups, LogRecord};
pub use runner::{BatchSummary, Pipeline};
