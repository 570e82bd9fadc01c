// Tue Jan 15 2026 - Alex

pub mod config;
pub mod orchestration;
pub mod output;
pub mod symbol;
pub mod ui;

pub use config::Config;
pub use orchestration::{ExtractionCoordinator, Query};
pub use output::OutputFormat;
pub use symbol::{DebugInfoNavigator, Entry, LookupError, Scalar};
