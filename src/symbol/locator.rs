// Wed Jan 14 2026 - Alex

use super::error::SourceError;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LIBRARY_DIRS: &[&str] = &[
    "/lib64",
    "/usr/lib64",
    "/lib",
    "/usr/lib",
    "/lib/x86_64-linux-gnu",
    "/usr/lib/x86_64-linux-gnu",
];

/// Ordered, de-duplicated list of library directories.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extras first, then `ld.so.conf`, then the usual system directories.
    pub fn build(extra: &[PathBuf], ld_so_conf: &Path) -> Self {
        let mut path = Self::new();
        for dir in extra {
            path.push(dir.clone());
        }
        for dir in read_ld_so_conf(ld_so_conf) {
            path.push(dir);
        }
        for dir in DEFAULT_LIBRARY_DIRS {
            path.push(PathBuf::from(dir));
        }
        path
    }

    pub fn push(&mut self, dir: PathBuf) {
        if !self.dirs.contains(&dir) {
            self.dirs.push(dir);
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn find(&self, name: &str) -> Option<PathBuf> {
        let direct = Path::new(name);
        if direct.is_absolute() {
            return direct.is_file().then(|| direct.to_path_buf());
        }
        self.dirs.iter().map(|dir| dir.join(name)).find(|candidate| candidate.is_file())
    }
}

/// Directories listed in an `ld.so.conf` file, following `include` lines.
pub fn read_ld_so_conf(path: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let mut visited = Vec::new();
    collect_conf(path, &mut dirs, &mut visited);
    dirs
}

fn collect_conf(path: &Path, dirs: &mut Vec<PathBuf>, visited: &mut Vec<PathBuf>) {
    if visited.iter().any(|seen| seen == path) {
        return;
    }
    visited.push(path.to_path_buf());

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Skipping {}: {}", path.display(), e);
            return;
        }
    };

    let base = path.parent().unwrap_or_else(|| Path::new("/"));

    for raw in text.lines() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        if let Some(pattern) = line
            .strip_prefix("include")
            .filter(|rest| rest.starts_with(char::is_whitespace))
        {
            for include in expand_include(base, pattern.trim()) {
                collect_conf(&include, dirs, visited);
            }
            continue;
        }

        // "hwcap" lines name capability masks, not directories
        if line.starts_with("hwcap") {
            continue;
        }

        dirs.push(PathBuf::from(line));
    }
}

/// Expands `dir/*.conf`-style includes; a literal path passes through.
fn expand_include(base: &Path, pattern: &str) -> Vec<PathBuf> {
    let pattern = if Path::new(pattern).is_absolute() {
        PathBuf::from(pattern)
    } else {
        base.join(pattern)
    };

    let file_name = pattern.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let Some(suffix) = file_name.strip_prefix('*') else {
        return vec![pattern];
    };

    let dir = pattern.parent().unwrap_or_else(|| Path::new("/"));
    let mut matches: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .map_or(false, |n| n.ends_with(suffix))
            })
            .collect(),
        Err(e) => {
            log::warn!("Skipping include {}: {}", pattern.display(), e);
            Vec::new()
        }
    };
    matches.sort();
    matches
}

/// Finds the file carrying debug info for a library.
pub struct DebugFileLocator {
    search_path: SearchPath,
    debug_dirs: Vec<PathBuf>,
}

impl DebugFileLocator {
    pub fn new(search_path: SearchPath, debug_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_path,
            debug_dirs,
        }
    }

    pub fn locate(&self, library: &str) -> Result<PathBuf, SourceError> {
        let found = self
            .search_path
            .find(library)
            .ok_or_else(|| SourceError::NotLocated(library.to_string()))?;
        log::debug!("{} resolved to {}", library, found.display());

        let found = fs::canonicalize(&found).unwrap_or(found);
        for candidate in self.debug_candidates(&found) {
            if candidate.is_file() {
                log::info!("Using separate debug file {}", candidate.display());
                return Ok(candidate);
            }
        }

        Ok(found)
    }

    fn debug_candidates(&self, library: &Path) -> Vec<PathBuf> {
        let relative = library.strip_prefix("/").unwrap_or(library);
        let mut candidates = Vec::new();

        for dir in &self.debug_dirs {
            let mirrored = dir.join(relative);
            let mut with_ext = mirrored.clone().into_os_string();
            with_ext.push(".debug");
            candidates.push(mirrored);
            candidates.push(PathBuf::from(with_ext));
        }

        if let (Some(parent), Some(name)) = (library.parent(), library.file_name()) {
            candidates.push(parent.join(".debug").join(name));
        }

        candidates
    }
}
