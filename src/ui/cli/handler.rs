// Wed Jan 15 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::orchestration::{ExtractError, ExtractionCoordinator};
use crate::output::{self, JsonSerializer, OutputFormat, OutputFormatter};
use crate::symbol::{
    load_navigator, DebugFileLocator, DebugInfoNavigator, DumpSource, ReadelfSource, ReaderSource, SearchPath,
    TextFileSource,
};
use anyhow::Context;
use std::io::Write;
use std::path::Path;

pub const EXIT_NOT_FOUND: i32 = 1;
pub const EXIT_FAILURE: i32 = 2;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args);

        if args.no_color {
            colored::control::set_override(false);
        }

        let config = self.build_config(&args)?;
        let source = self.build_source(&args, &config)?;

        let mut navigator = load_navigator(source.as_ref())
            .with_context(|| format!("Failed to load debug info from {}", source.describe()))?;
        if navigator.dump().is_empty() {
            log::warn!("{} produced an empty dump", source.describe());
        }
        log::info!("Loaded {} dump lines", navigator.dump().len());

        let coordinator = ExtractionCoordinator::new(config.queries.clone());
        let destination = args.output.as_deref();
        match config.format {
            OutputFormat::Define => self.emit_defines(&coordinator, &mut navigator, destination),
            OutputFormat::Json => self.emit_json(&coordinator, &mut navigator, destination),
        }
    }

    /// Each line is written and flushed as soon as its query resolves, so a
    /// failing query leaves the earlier lines in place.
    fn emit_defines(
        &self,
        coordinator: &ExtractionCoordinator,
        navigator: &mut DebugInfoNavigator,
        destination: Option<&Path>,
    ) -> anyhow::Result<()> {
        let mut out = output::open_output(destination).with_context(|| describe_destination(destination))?;
        let formatter = OutputFormatter::new();

        coordinator.run_with(navigator, |value| {
            writeln!(out, "{}", formatter.format_value(value))?;
            out.flush()
        })?;

        Ok(())
    }

    /// A JSON object is only written once every query resolved; on failure
    /// the destination is not touched.
    fn emit_json(
        &self,
        coordinator: &ExtractionCoordinator,
        navigator: &mut DebugInfoNavigator,
        destination: Option<&Path>,
    ) -> anyhow::Result<()> {
        let values = coordinator.run(navigator)?;
        let text = JsonSerializer::new().serialize(&values)?;

        let mut out = output::open_output(destination).with_context(|| describe_destination(destination))?;
        out.write_all(text.as_bytes())
            .and_then(|_| out.flush())
            .with_context(|| describe_destination(destination))?;

        Ok(())
    }

    fn setup_logging(&self, args: &Args) {
        env_logger::Builder::new()
            .filter_level(args.log_level.into())
            .format_timestamp(None)
            .try_init()
            .ok();
    }

    fn build_config(&self, args: &Args) -> anyhow::Result<Config> {
        let mut config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(readelf) = &args.readelf {
            config = config.with_readelf(readelf.clone());
        }
        if let Some(library) = &args.library {
            config = config.with_library(library.clone());
        }
        if let Some(format) = args.format {
            config = config.with_format(format);
        }

        let mut search_paths = args.search_paths.clone();
        search_paths.extend(config.search_paths.drain(..));
        config.search_paths = search_paths;

        config.validate()?;
        Ok(config)
    }

    fn build_source(&self, args: &Args, config: &Config) -> anyhow::Result<Box<dyn DumpSource>> {
        if let Some(input) = &args.input {
            return Ok(Box::new(TextFileSource::new(input)));
        }
        if args.stdin {
            return Ok(Box::new(ReaderSource::stdin()));
        }
        if let Some(binary) = &args.binary {
            return Ok(Box::new(ReadelfSource::new(config.readelf.clone(), binary)));
        }

        let search_path = SearchPath::build(&config.search_paths, &config.ld_so_conf);
        let locator = DebugFileLocator::new(search_path, config.debug_dirs.clone());
        let object = locator
            .locate(&config.library)
            .with_context(|| format!("Cannot find debug info for {}", config.library))?;
        Ok(Box::new(ReadelfSource::new(config.readelf.clone(), object)))
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn describe_destination(destination: Option<&Path>) -> String {
    match destination {
        Some(path) => format!("Failed to write {}", path.display()),
        None => "Failed to write to stdout".to_string(),
    }
}

/// A query that found nothing gets its own status; everything else is a
/// generic failure.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ExtractError>() {
        Some(ExtractError::QueryFailed { .. }) => EXIT_NOT_FOUND,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    const DUMP: &str = "\
 <1><2d>: Abbrev Number: 5 (DW_TAG_structure_type)
    <2e>   DW_AT_name        : foo
    <32>   DW_AT_byte_size   : 24
 <2><36>: Abbrev Number: 6 (DW_TAG_member)
    <37>   DW_AT_name        : bar
    <3b>   DW_AT_data_member_location: 4
";

    const QUERIES: &str = r#"{"queries": [
        {"kind": "struct_size", "define": "FOO_SIZE", "structure": "foo"},
        {"kind": "struct_member_offset", "define": "FOO_BAR", "structure": "foo", "member": "bar"}
    ]}"#;

    const QUERIES_WITH_GAP: &str = r#"{"queries": [
        {"kind": "struct_size", "define": "FOO_SIZE", "structure": "foo"},
        {"kind": "struct_size", "define": "MISSING_SIZE", "structure": "missing"},
        {"kind": "struct_member_offset", "define": "FOO_BAR", "structure": "foo", "member": "bar"}
    ]}"#;

    /// Runs the CLI against `DUMP` in a fresh directory and returns the
    /// result together with the output file contents, if any.
    fn run_cli(queries: &str, extra: &[&str]) -> (anyhow::Result<()>, Option<String>) {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("dump.txt");
        let config = dir.path().join("config.json");
        let out = dir.path().join("config.h");
        fs::write(&dump, DUMP).unwrap();
        fs::write(&config, queries).unwrap();

        let mut argv = vec![
            "dwarf-config-extract".to_string(),
            "-i".to_string(),
            dump.to_string_lossy().into_owned(),
            "-c".to_string(),
            config.to_string_lossy().into_owned(),
            "-o".to_string(),
            out.to_string_lossy().into_owned(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));

        let args = Args::try_parse_from(argv).unwrap();
        let result = CommandHandler::new().execute(args);
        (result, fs::read_to_string(&out).ok())
    }

    #[test]
    fn test_end_to_end_define_output() {
        let (result, written) = run_cli(QUERIES, &[]);
        result.unwrap();
        assert_eq!(written.as_deref(), Some("#define FOO_SIZE 24\n#define FOO_BAR 4\n"));
    }

    #[test]
    fn test_not_found_keeps_earlier_defines() {
        let (result, written) = run_cli(QUERIES_WITH_GAP, &[]);
        let err = result.unwrap_err();
        assert_eq!(exit_code(&err), EXIT_NOT_FOUND);
        assert_eq!(written.as_deref(), Some("#define FOO_SIZE 24\n"));
    }

    #[test]
    fn test_json_output() {
        let (result, written) = run_cli(QUERIES, &["--format", "json"]);
        result.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written.unwrap()).unwrap();
        assert_eq!(parsed["FOO_SIZE"], "24");
        assert_eq!(parsed["FOO_BAR"], "4");
    }

    #[test]
    fn test_json_not_found_writes_nothing() {
        let (result, written) = run_cli(QUERIES_WITH_GAP, &["--format", "json"]);
        let err = result.unwrap_err();
        assert_eq!(exit_code(&err), EXIT_NOT_FOUND);
        assert_eq!(written, None);
    }

    #[test]
    fn test_missing_input_is_generic_failure() {
        let args = Args::try_parse_from(["dwarf-config-extract", "-i", "/nonexistent/dump.txt"]).unwrap();
        let err = CommandHandler::new().execute(args).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_FAILURE);
    }
}
