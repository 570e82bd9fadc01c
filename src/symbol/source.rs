// Wed Jan 14 2026 - Alex

use super::dump::DebugDump;
use super::error::SourceError;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::Command;
use std::sync::Mutex;

/// Anything that can produce the textual debug-info dump.
pub trait DumpSource {
    fn load(&self) -> Result<DebugDump, SourceError>;
    fn describe(&self) -> String;
}

/// A dump saved to disk earlier.
pub struct TextFileSource {
    path: PathBuf,
}

impl TextFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DumpSource for TextFileSource {
    fn load(&self) -> Result<DebugDump, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::MissingFile(self.path.clone()));
        }
        let bytes = fs::read(&self.path)?;
        let text = String::from_utf8(bytes)?;
        Ok(DebugDump::from_text(&text))
    }

    fn describe(&self) -> String {
        format!("dump file {}", self.path.display())
    }
}

/// Reads the dump from a stream such as stdin. The stream is drained on
/// the first `load`.
pub struct ReaderSource<R: Read> {
    reader: Mutex<R>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader: Mutex::new(reader) }
    }
}

impl ReaderSource<std::io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin())
    }
}

impl<R: Read> DumpSource for ReaderSource<R> {
    fn load(&self) -> Result<DebugDump, SourceError> {
        let mut bytes = Vec::new();
        let mut reader = self
            .reader
            .lock()
            .map_err(|_| SourceError::Io(std::io::Error::other("reader lock poisoned")))?;
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)?;
        Ok(DebugDump::from_text(&text))
    }

    fn describe(&self) -> String {
        "standard input".to_string()
    }
}

/// Runs `readelf -wi` against an object file.
pub struct ReadelfSource {
    program: String,
    object: PathBuf,
}

impl ReadelfSource {
    pub fn new(program: impl Into<String>, object: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            object: object.into(),
        }
    }
}

impl DumpSource for ReadelfSource {
    fn load(&self) -> Result<DebugDump, SourceError> {
        if !self.object.exists() {
            return Err(SourceError::MissingFile(self.object.clone()));
        }

        log::info!("Running {} -wi {}", self.program, self.object.display());

        let output = Command::new(&self.program)
            .arg("-wi")
            .arg(&self.object)
            .output()
            .map_err(|source| SourceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::ToolFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout)?;
        let dump = DebugDump::from_text(&text);
        log::debug!("{} produced {} lines", self.program, dump.len());
        Ok(dump)
    }

    fn describe(&self) -> String {
        format!("{} -wi {}", self.program, self.object.display())
    }
}
