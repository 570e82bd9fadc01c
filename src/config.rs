// Tue Jan 13 2026 - Alex

use crate::orchestration::{default_queries, Query};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub readelf: String,
    pub library: String,
    pub search_paths: Vec<PathBuf>,
    pub ld_so_conf: PathBuf,
    pub debug_dirs: Vec<PathBuf>,
    pub queries: Vec<Query>,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            readelf: "readelf".to_string(),
            library: "ld-linux-x86-64.so.2".to_string(),
            search_paths: Vec::new(),
            ld_so_conf: PathBuf::from("/etc/ld.so.conf"),
            debug_dirs: vec![PathBuf::from("/usr/lib/debug")],
            queries: default_queries(),
            format: OutputFormat::Define,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_readelf(mut self, readelf: String) -> Self {
        self.readelf = readelf;
        self
    }

    pub fn with_library(mut self, library: String) -> Self {
        self.library = library;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.readelf.trim().is_empty() {
            return Err(ConfigError::Invalid("readelf program must not be empty".to_string()));
        }
        if self.queries.is_empty() {
            return Err(ConfigError::Invalid("at least one query is required".to_string()));
        }
        let mut seen = HashSet::new();
        for query in &self.queries {
            if !seen.insert(query.define()) {
                return Err(ConfigError::Invalid(format!("duplicate define {}", query.define())));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.queries.len(), 8);
        assert_eq!(config.format, OutputFormat::Define);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"readelf": "eu-readelf", "format": "json"}"#).unwrap();
        assert_eq!(config.readelf, "eu-readelf");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.library, "ld-linux-x86-64.so.2");
        assert_eq!(config.queries.len(), 8);
    }

    #[test]
    fn test_custom_queries() {
        let json = r#"{"queries": [{"kind": "struct_size", "define": "FOO_SIZE", "structure": "foo"}]}"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.queries, vec![Query::struct_size("FOO_SIZE", "foo")]);
    }

    #[test]
    fn test_rejects_duplicate_defines() {
        let mut config = Config::default();
        config.queries.push(Query::struct_size("CONFIG_TCB_SIZE", "other"));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_empty_queries() {
        let mut config = Config::default();
        config.queries.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load(Path::new("/nonexistent/config.json")),
            Err(ConfigError::Read { .. })
        ));
    }
}
