// Tue Jan 13 2026 - Alex

pub mod coordinator;
pub mod query;

pub use coordinator::{ConfigValue, ExtractError, ExtractionCoordinator};
pub use query::{default_queries, Query};
