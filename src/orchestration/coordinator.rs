// Tue Jan 13 2026 - Alex

use super::query::Query;
use crate::symbol::{DebugInfoNavigator, LookupError, Scalar};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("{define}: {query} not found: {source}")]
    QueryFailed {
        define: String,
        query: String,
        #[source]
        source: LookupError,
    },
    #[error("Failed to emit {define}: {source}")]
    Emit {
        define: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValue {
    pub define: String,
    pub value: String,
}

impl ConfigValue {
    pub fn new(define: &str, value: &Scalar) -> Self {
        Self {
            define: define.to_string(),
            value: value.as_str().to_string(),
        }
    }
}

/// Runs queries in order and stops at the first one that fails.
pub struct ExtractionCoordinator {
    queries: Vec<Query>,
}

impl ExtractionCoordinator {
    pub fn new(queries: Vec<Query>) -> Self {
        Self { queries }
    }

    pub fn run(&self, navigator: &mut DebugInfoNavigator) -> Result<Vec<ConfigValue>, ExtractError> {
        self.run_with(navigator, |_| Ok(()))
    }

    /// Hands each value to `emit` as soon as its query resolves. Values
    /// already emitted stay emitted when a later query fails.
    pub fn run_with<F>(&self, navigator: &mut DebugInfoNavigator, mut emit: F) -> Result<Vec<ConfigValue>, ExtractError>
    where
        F: FnMut(&ConfigValue) -> std::io::Result<()>,
    {
        let mut values = Vec::with_capacity(self.queries.len());

        for query in &self.queries {
            let value = query
                .evaluate(navigator)
                .map_err(|source| ExtractError::QueryFailed {
                    define: query.define().to_string(),
                    query: query.describe(),
                    source,
                })?;
            log::debug!("{} = {}", query.define(), value);

            let value = ConfigValue::new(query.define(), &value);
            emit(&value).map_err(|source| ExtractError::Emit {
                define: value.define.clone(),
                source,
            })?;
            values.push(value);
        }

        log::info!("Extracted {} values", values.len());
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "\
 <1><2d>: Abbrev Number: 5 (DW_TAG_structure_type)
    <2e>   DW_AT_name        : rtld_global
    <32>   DW_AT_byte_size   : 3960
 <2><36>: Abbrev Number: 6 (DW_TAG_member)
    <37>   DW_AT_name        : _dl_error_catch_tsd
    <3b>   DW_AT_data_member_location: 3848
 <1><40>: Abbrev Number: 5 (DW_TAG_structure_type)
    <41>   DW_AT_name        : rtld_global_ro
    <45>   DW_AT_byte_size   : 352
";

    #[test]
    fn test_run_in_order() {
        let coordinator = ExtractionCoordinator::new(vec![
            Query::struct_member_offset("OFFSET", "rtld_global", "_dl_error_catch_tsd"),
            Query::struct_size("RO_SIZE", "rtld_global_ro"),
            Query::struct_size("SIZE", "rtld_global"),
        ]);
        let mut nav = DebugInfoNavigator::from_text(DUMP);
        let values = coordinator.run(&mut nav).unwrap();
        let rendered: Vec<(&str, &str)> = values.iter().map(|v| (v.define.as_str(), v.value.as_str())).collect();
        assert_eq!(rendered, vec![("OFFSET", "3848"), ("RO_SIZE", "352"), ("SIZE", "3960")]);
    }

    #[test]
    fn test_run_stops_at_first_failure() {
        let coordinator = ExtractionCoordinator::new(vec![
            Query::struct_size("SIZE", "rtld_global"),
            Query::struct_size("TCB", "pthread"),
            Query::struct_size("ALSO_MISSING", "nope"),
        ]);
        let mut nav = DebugInfoNavigator::from_text(DUMP);
        let err = coordinator.run(&mut nav).unwrap_err();
        match err {
            ExtractError::QueryFailed { define, source, .. } => {
                assert_eq!(define, "TCB");
                assert!(matches!(source, LookupError::EntryNotFound { .. }));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_run_with_emits_values_before_failure() {
        let coordinator = ExtractionCoordinator::new(vec![
            Query::struct_size("SIZE", "rtld_global"),
            Query::struct_size("RO_SIZE", "rtld_global_ro"),
            Query::struct_size("TCB", "pthread"),
            Query::struct_size("NEVER_REACHED", "rtld_global"),
        ]);
        let mut nav = DebugInfoNavigator::from_text(DUMP);
        let mut emitted = Vec::new();
        let result = coordinator.run_with(&mut nav, |value| {
            emitted.push(value.define.clone());
            Ok(())
        });

        assert!(matches!(result, Err(ExtractError::QueryFailed { .. })));
        assert_eq!(emitted, vec!["SIZE", "RO_SIZE"]);
    }

    #[test]
    fn test_emit_failure_stops_run() {
        let coordinator = ExtractionCoordinator::new(vec![
            Query::struct_size("SIZE", "rtld_global"),
            Query::struct_size("RO_SIZE", "rtld_global_ro"),
        ]);
        let mut nav = DebugInfoNavigator::from_text(DUMP);
        let mut calls = 0;
        let result = coordinator.run_with(&mut nav, |_| {
            calls += 1;
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        });

        assert!(matches!(result, Err(ExtractError::Emit { ref define, .. }) if define == "SIZE"));
        assert_eq!(calls, 1);
    }
}
