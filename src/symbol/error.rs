// Tue Jan 13 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

/// Why a high-level query produced no value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No {tag} named '{name}'")]
    EntryNotFound { tag: String, name: String },
    #[error("No entry with ref <{0}>")]
    RefNotFound(String),
    #[error("Member '{member}' not found under <{parent}>")]
    MemberNotFound { member: String, parent: String },
    #[error("Entry <{entry}> has no {attribute}")]
    AttributeMissing { entry: String, attribute: String },
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    ToolFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("Dump is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Debug file not found for {0}")]
    NotLocated(String),
    #[error("No such file: {0}")]
    MissingFile(PathBuf),
}
