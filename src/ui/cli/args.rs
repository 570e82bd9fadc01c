// Wed Jan 15 2026 - Alex

use crate::output::OutputFormat;
use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dwarf-config-extract")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Extracts structure sizes and member offsets from DWARF debug info", long_about = None)]
#[command(group(ArgGroup::new("source").args(["input", "stdin", "binary"]).multiple(false)))]
pub struct Args {
    /// Saved `readelf -wi` output
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Read the dump from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Object file to run readelf on
    #[arg(short, long)]
    pub binary: Option<PathBuf>,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub readelf: Option<String>,

    /// Library to locate when no input is given
    #[arg(long)]
    pub library: Option<String>,

    #[arg(long = "search-path")]
    pub search_paths: Vec<PathBuf>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}
