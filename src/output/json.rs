// Tue Jan 13 2026 - Alex

use crate::orchestration::ConfigValue;
use indexmap::IndexMap;
use serde_json::{to_string, to_string_pretty};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Renders values as a JSON object keyed by define, in query order.
pub struct JsonSerializer {
    pretty_print: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn serialize(&self, values: &[ConfigValue]) -> Result<String, JsonError> {
        let object: IndexMap<&str, &str> = values
            .iter()
            .map(|v| (v.define.as_str(), v.value.as_str()))
            .collect();

        let mut text = if self.pretty_print {
            to_string_pretty(&object)?
        } else {
            to_string(&object)?
        };
        text.push('\n');
        Ok(text)
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}
