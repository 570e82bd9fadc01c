// Tue Jan 13 2026 - Alex

pub mod dump;
pub mod entry;
pub mod error;
pub mod line;
pub mod locator;
pub mod navigator;
pub mod source;

pub use dump::DebugDump;
pub use entry::Entry;
pub use error::{LookupError, SourceError};
pub use line::{classify, LineKind};
pub use locator::{DebugFileLocator, SearchPath};
pub use navigator::{DebugInfoNavigator, Scalar};
pub use source::{DumpSource, ReadelfSource, ReaderSource, TextFileSource};

pub fn load_navigator(source: &dyn DumpSource) -> Result<DebugInfoNavigator, SourceError> {
    log::debug!("Loading dump from {}", source.describe());
    source.load().map(DebugInfoNavigator::new)
}
