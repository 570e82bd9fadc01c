// Tue Jan 13 2026 - Alex

use super::dump::DebugDump;
use super::line::{classify, LineKind};
use indexmap::IndexMap;

pub const TAG_STRUCTURE: &str = "DW_TAG_structure_type";
pub const TAG_MEMBER: &str = "DW_TAG_member";
pub const TAG_TYPEDEF: &str = "DW_TAG_typedef";

pub const AT_NAME: &str = "DW_AT_name";
pub const AT_BYTE_SIZE: &str = "DW_AT_byte_size";
pub const AT_MEMBER_LOCATION: &str = "DW_AT_data_member_location";
pub const AT_TYPE: &str = "DW_AT_type";

/// One debug information entry as printed in the dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub level: String,
    pub reference: String,
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    attribute_lines: usize,
}

impl Entry {
    pub fn new(level: impl Into<String>, reference: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            reference: reference.into(),
            tag: tag.into(),
            attributes: IndexMap::new(),
            attribute_lines: 0,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.attribute(AT_NAME)
    }

    pub fn is_named(&self, tag: &str, name: &str) -> bool {
        self.tag == tag && self.name() == Some(name)
    }

    /// Lines this entry occupies in the dump, tag line included.
    pub fn line_count(&self) -> usize {
        1 + self.attribute_lines
    }

    fn record(&mut self, name: String, value: String) {
        self.attributes.insert(name, value);
        self.attribute_lines += 1;
    }
}

impl DebugDump {
    /// Parses the next entry, skipping anything before its tag line.
    pub fn read_one(&mut self) -> Option<Entry> {
        let mut entry = loop {
            let line = self.read_next_line()?;
            if let LineKind::Tag { level, reference, tag } = classify(line) {
                break Entry::new(level, reference, tag);
            }
        };

        while let Some(line) = self.read_next_line() {
            match classify(line) {
                LineKind::Attribute { name, value } => entry.record(name, value),
                LineKind::Tag { .. } | LineKind::Other => {
                    self.push_back_line();
                    break;
                }
            }
        }

        Some(entry)
    }

    /// Undoes the `read_one` that produced `entry`.
    pub fn push_back_entry(&mut self, entry: &Entry) {
        self.push_back(entry.line_count());
    }
}
