// Tue Jan 13 2026 - Alex

use crate::orchestration::ConfigValue;

/// Renders values as C preprocessor definitions, one per line.
pub struct OutputFormatter;

impl OutputFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_value(&self, value: &ConfigValue) -> String {
        format!("#define {} {}", value.define, value.value)
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}
