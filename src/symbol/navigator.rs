// Tue Jan 13 2026 - Alex

use super::dump::DebugDump;
use super::entry::{Entry, AT_BYTE_SIZE, AT_MEMBER_LOCATION, AT_TYPE, TAG_MEMBER, TAG_STRUCTURE, TAG_TYPEDEF};
use super::error::LookupError;
use std::fmt;

/// A size or offset read out of the dump, kept as printed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scalar(String);

impl Scalar {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Answers size and offset questions by scanning the dump.
///
/// Nothing is indexed: each public query rewinds and scans forward, so
/// the same navigator can serve any number of queries in sequence.
pub struct DebugInfoNavigator {
    dump: DebugDump,
}

impl DebugInfoNavigator {
    pub fn new(dump: DebugDump) -> Self {
        Self { dump }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(DebugDump::from_text(text))
    }

    pub fn dump(&self) -> &DebugDump {
        &self.dump
    }

    pub fn rewind(&mut self) {
        self.dump.rewind();
    }

    pub fn read_one(&mut self) -> Option<Entry> {
        self.dump.read_one()
    }

    pub fn push_back_entry(&mut self, entry: &Entry) {
        self.dump.push_back_entry(entry);
    }

    pub fn find_by_tag_and_name(&mut self, tag: &str, name: &str) -> Option<Entry> {
        while let Some(entry) = self.read_one() {
            if entry.is_named(tag, name) {
                log::trace!("Found {} '{}' at <{}>", tag, name, entry.reference);
                return Some(entry);
            }
        }
        None
    }

    pub fn find_by_ref(&mut self, reference: &str) -> Option<Entry> {
        while let Some(entry) = self.read_one() {
            if entry.reference == reference {
                return Some(entry);
            }
        }
        None
    }

    /// Scans the children of `parent`, which must have just been read.
    ///
    /// Stops at the first entry back on the parent's level; that entry is
    /// pushed back so the cursor rests on it.
    pub fn find_scoped_entry(&mut self, member_name: &str, parent: &Entry) -> Option<Entry> {
        while let Some(entry) = self.read_one() {
            if entry.level == parent.level {
                log::trace!("Left scope of <{}> at <{}>", parent.reference, entry.reference);
                self.push_back_entry(&entry);
                return None;
            }
            if entry.is_named(TAG_MEMBER, member_name) {
                return Some(entry);
            }
        }
        None
    }

    /// Location of the member named `member_name` among the children of
    /// `parent`, which must have just been read.
    pub fn find_scoped_member(&mut self, member_name: &str, parent: &Entry) -> Result<Scalar, LookupError> {
        let member = self
            .find_scoped_entry(member_name, parent)
            .ok_or_else(|| LookupError::MemberNotFound {
                member: member_name.to_string(),
                parent: parent.reference.clone(),
            })?;
        required(&member, AT_MEMBER_LOCATION).map(Scalar::new)
    }

    pub fn get_struct_size(&mut self, name: &str) -> Result<Scalar, LookupError> {
        log::debug!("Size of struct {}", name);
        self.rewind();
        let entry = self.locate(TAG_STRUCTURE, name)?;
        required(&entry, AT_BYTE_SIZE).map(Scalar::new)
    }

    pub fn get_struct_member_offset(&mut self, struct_name: &str, member_name: &str) -> Result<Scalar, LookupError> {
        log::debug!("Offset of {}.{}", struct_name, member_name);
        self.rewind();
        let parent = self.locate(TAG_STRUCTURE, struct_name)?;
        self.find_scoped_member(member_name, &parent)
    }

    pub fn get_typedef_member_offset(&mut self, typedef_name: &str, member_name: &str) -> Result<Scalar, LookupError> {
        log::debug!("Offset of {}.{} through typedef", typedef_name, member_name);
        self.rewind();
        let typedef = self.locate(TAG_TYPEDEF, typedef_name)?;
        let target = required(&typedef, AT_TYPE)?.to_string();

        self.rewind();
        let parent = self
            .find_by_ref(&target)
            .ok_or_else(|| LookupError::RefNotFound(target.clone()))?;
        self.find_scoped_member(member_name, &parent)
    }

    fn locate(&mut self, tag: &str, name: &str) -> Result<Entry, LookupError> {
        self.find_by_tag_and_name(tag, name)
            .ok_or_else(|| LookupError::EntryNotFound {
                tag: tag.to_string(),
                name: name.to_string(),
            })
    }
}

fn required<'a>(entry: &'a Entry, attribute: &str) -> Result<&'a str, LookupError> {
    entry.attribute(attribute).ok_or_else(|| LookupError::AttributeMissing {
        entry: entry.reference.clone(),
        attribute: attribute.to_string(),
    })
}
