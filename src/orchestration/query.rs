// Tue Jan 13 2026 - Alex

use crate::symbol::{DebugInfoNavigator, LookupError, Scalar};
use serde::{Deserialize, Serialize};

/// One value the extractor must produce, and the name it is emitted under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    StructSize {
        define: String,
        structure: String,
    },
    StructMemberOffset {
        define: String,
        structure: String,
        member: String,
    },
    TypedefMemberOffset {
        define: String,
        typedef: String,
        member: String,
    },
}

impl Query {
    pub fn struct_size(define: &str, structure: &str) -> Self {
        Query::StructSize {
            define: define.to_string(),
            structure: structure.to_string(),
        }
    }

    pub fn struct_member_offset(define: &str, structure: &str, member: &str) -> Self {
        Query::StructMemberOffset {
            define: define.to_string(),
            structure: structure.to_string(),
            member: member.to_string(),
        }
    }

    pub fn typedef_member_offset(define: &str, typedef: &str, member: &str) -> Self {
        Query::TypedefMemberOffset {
            define: define.to_string(),
            typedef: typedef.to_string(),
            member: member.to_string(),
        }
    }

    pub fn define(&self) -> &str {
        match self {
            Query::StructSize { define, .. }
            | Query::StructMemberOffset { define, .. }
            | Query::TypedefMemberOffset { define, .. } => define,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Query::StructSize { structure, .. } => format!("sizeof(struct {})", structure),
            Query::StructMemberOffset { structure, member, .. } => {
                format!("offsetof(struct {}, {})", structure, member)
            }
            Query::TypedefMemberOffset { typedef, member, .. } => {
                format!("offsetof({}, {})", typedef, member)
            }
        }
    }

    pub fn evaluate(&self, navigator: &mut DebugInfoNavigator) -> Result<Scalar, LookupError> {
        match self {
            Query::StructSize { structure, .. } => navigator.get_struct_size(structure),
            Query::StructMemberOffset { structure, member, .. } => {
                navigator.get_struct_member_offset(structure, member)
            }
            Query::TypedefMemberOffset { typedef, member, .. } => {
                navigator.get_typedef_member_offset(typedef, member)
            }
        }
    }
}

/// The loader's glibc layout constants, in emission order.
pub fn default_queries() -> Vec<Query> {
    vec![
        Query::struct_size("CONFIG_RTLD_GLOBAL_SIZE", "rtld_global"),
        Query::struct_size("CONFIG_RTLD_GLOBAL_RO_SIZE", "rtld_global_ro"),
        Query::struct_member_offset("CONFIG_DL_ERROR_CATCH_TSD_OFFSET", "rtld_global", "_dl_error_catch_tsd"),
        Query::struct_size("CONFIG_TCB_SIZE", "pthread"),
        Query::typedef_member_offset("CONFIG_TCB_TCB_OFFSET", "tcbhead_t", "tcb"),
        Query::typedef_member_offset("CONFIG_TCB_DTV_OFFSET", "tcbhead_t", "dtv"),
        Query::typedef_member_offset("CONFIG_TCB_SELF_OFFSET", "tcbhead_t", "self"),
        Query::typedef_member_offset("CONFIG_TCB_SYSINFO_OFFSET", "tcbhead_t", "sysinfo"),
    ]
}
