// Tue Jan 13 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

/// ` <1><2d>: Abbrev Number: 5 (DW_TAG_structure_type)`
static TAG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<([^>]+)><([^>]+)>:[^A]*Abbrev Number:.*\d+.*\((\w+)\)")
        .expect("tag line pattern")
});

/// `    <2e>   DW_AT_name        : (indirect string, offset: 0x4b): rtld_global`
///
/// The value follows the last colon that is itself followed by whitespace,
/// so `::` inside a value stays part of it. Stray brackets are trimmed.
static ATTRIBUTE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]+>[^D]*(DW_AT_\w+)(?:[^:]*:)+\s+[<(\[]?([^\s<>()\[\]]+)[\s<>()\[\]]*$")
        .expect("attribute line pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Tag {
        level: String,
        reference: String,
        tag: String,
    },
    Attribute {
        name: String,
        value: String,
    },
    Other,
}

pub fn classify(line: &str) -> LineKind {
    if let Some(caps) = TAG_LINE.captures(line) {
        return LineKind::Tag {
            level: caps[1].to_string(),
            reference: caps[2].to_string(),
            tag: caps[3].to_string(),
        };
    }

    if let Some(caps) = ATTRIBUTE_LINE.captures(line) {
        let raw = &caps[2];
        let value = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .filter(|rest| !rest.is_empty())
            .unwrap_or(raw);
        return LineKind::Attribute {
            name: caps[1].to_string(),
            value: value.to_string(),
        };
    }

    LineKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(name: &str, value: &str) -> LineKind {
        LineKind::Attribute {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_tag_line() {
        let kind = classify(" <1><2d>: Abbrev Number: 5 (DW_TAG_structure_type)");
        assert_eq!(
            kind,
            LineKind::Tag {
                level: "1".to_string(),
                reference: "2d".to_string(),
                tag: "DW_TAG_structure_type".to_string(),
            }
        );
    }

    #[test]
    fn test_null_entry_is_other() {
        assert_eq!(classify(" <2><5a>: Abbrev Number: 0"), LineKind::Other);
    }

    #[test]
    fn test_plain_attribute() {
        assert_eq!(
            classify("    <2e>   DW_AT_byte_size   : 24"),
            attr("DW_AT_byte_size", "24")
        );
    }

    #[test]
    fn test_indirect_string_takes_last_colon() {
        assert_eq!(
            classify("    <2f>   DW_AT_name        : (indirect string, offset: 0x4b): rtld_global"),
            attr("DW_AT_name", "rtld_global")
        );
    }

    #[test]
    fn test_colons_inside_value_are_kept() {
        assert_eq!(
            classify("    <2e>   DW_AT_name        : std::string"),
            attr("DW_AT_name", "std::string")
        );
        assert_eq!(
            classify("    <2e>   DW_AT_name        : (indirect string, offset: 0x4b): ns::tcbhead"),
            attr("DW_AT_name", "ns::tcbhead")
        );
    }

    #[test]
    fn test_type_reference_strips_prefix_and_brackets() {
        assert_eq!(
            classify("    <33>   DW_AT_type        : <0x2d>  "),
            attr("DW_AT_type", "2d")
        );
    }

    #[test]
    fn test_block_location() {
        assert_eq!(
            classify("    <40>   DW_AT_data_member_location: 2 byte block: 23 8 \t(DW_OP_plus_uconst: 8)"),
            attr("DW_AT_data_member_location", "8")
        );
    }

    #[test]
    fn test_truncated_attribute_is_other() {
        assert_eq!(classify("    <41>   DW_AT_name        :"), LineKind::Other);
        assert_eq!(classify(""), LineKind::Other);
        assert_eq!(classify("Contents of the .debug_info section:"), LineKind::Other);
    }

    #[test]
    fn test_bare_hex_prefix_kept() {
        assert_eq!(classify("  <50>   DW_AT_const_value : 0x"), attr("DW_AT_const_value", "0x"));
    }
}
