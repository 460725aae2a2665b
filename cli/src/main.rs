//! CLI entrypoint for hvadvilduhelst
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use hvad_application::{
    ExportDatasetInput, ExportDatasetUseCase, LoadDatasetUseCase, LoadProgressNotifier,
    NoProgress, ProbeDatasetInput, ProbeDatasetUseCase,
};
use hvad_domain::{Dataset, OutputFormat};
use hvad_infrastructure::{ConfigLoader, FileConfig, JsonlDatasetWriter, LocalRecordSource};
use hvad_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines reach the file
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Run with --help to see the available commands.");
    };

    let format = resolve_format(&cli, &config);
    let dir = command
        .dir()
        .cloned()
        .unwrap_or_else(|| PathBuf::from(&config.dataset.dir));

    info!("Starting hvadvilduhelst on {}", dir.display());

    // === Dependency Injection ===
    let source = Arc::new(LocalRecordSource::with_extension(&config.dataset.extension));
    let progress = progress_for(cli.quiet);

    match command {
        Command::Load { .. } => {
            let dataset = LoadDatasetUseCase::new(source)
                .execute_with_progress(&dir, progress.as_ref())
                .with_context(|| format!("Failed to load dataset from {}", dir.display()))?;

            match format {
                OutputFormat::Text => {
                    println!("{}", ConsoleFormatter::format_load(&dataset));
                    print_warnings(&dataset);
                }
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_load_json(&dataset)),
            }
        }
        Command::Probe { .. } => {
            let input = ProbeDatasetInput::new(&dir).with_settings(config.probe.to_settings());
            let output = ProbeDatasetUseCase::new(source)
                .execute_with_progress(input, progress.as_ref())
                .with_context(|| format!("Failed to probe dataset in {}", dir.display()))?;

            match format {
                OutputFormat::Text => {
                    println!("{}", ConsoleFormatter::format_probe(&output.report));
                    print_warnings(&output.dataset);
                }
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_probe_json(&output.report))
                }
            }
        }
        Command::Export { output, force, .. } => {
            let writer = Arc::new(JsonlDatasetWriter::new());
            let input = ExportDatasetInput::new(&dir, output).with_force(force);
            let result = ExportDatasetUseCase::new(source, writer)
                .execute_with_progress(input, progress.as_ref())
                .context("Export failed")?;

            match format {
                OutputFormat::Text => {
                    print!("{}", ConsoleFormatter::format_export(&result));
                    print_warnings(&result.dataset);
                }
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_export_json(&result))
                }
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// Returns a guard when logs go to a file; dropping it flushes the writer.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file = std::fs::File::create(path)
        .with_context(|| format!("Could not create log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    config
        .validate()
        .context("Invalid configuration")?;
    Ok(config)
}

/// The `--output-format` flag wins over `output.format` from config
fn resolve_format(cli: &Cli, config: &FileConfig) -> OutputFormat {
    cli.output_format
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default()
}

fn progress_for(quiet: bool) -> Box<dyn LoadProgressNotifier> {
    if quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    }
}

/// Malformed lines never fail a command; they are reported on stderr
fn print_warnings(dataset: &Dataset) {
    let warnings = ConsoleFormatter::format_diagnostics(dataset.diagnostics());
    if !warnings.is_empty() {
        eprint!("{}", warnings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["hvadvilduhelst"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flag_overrides_config_format() {
        let mut config = FileConfig::default();
        config.output.format = Some(OutputFormat::Text);

        let format = resolve_format(&cli(&["-o", "json", "load"]), &config);
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_config_format_used_without_flag() {
        let mut config = FileConfig::default();
        config.output.format = Some(OutputFormat::Json);

        assert_eq!(resolve_format(&cli(&["load"]), &config), OutputFormat::Json);
        assert_eq!(
            resolve_format(&cli(&["load"]), &FileConfig::default()),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let config = load_config(&cli(&["--no-config", "load"])).unwrap();
        assert_eq!(config.dataset.dir, "data/hygdk");
        assert_eq!(config.dataset.extension, "jsonl");
    }

    #[test]
    fn test_invalid_explicit_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[probe]\nbalance_threshold = -1.0\n").unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let result = load_config(&cli(&["--config", &path_arg, "load"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_wired_load_and_export() {
        let data = tempfile::tempdir().unwrap();
        fs::write(
            data.path().join("mad.jsonl"),
            concat!(
                r#"{"question": "Ville du helst spise is eller kage?", "answer_A": "Is", "answer_B": "Kage"}"#,
                "\n",
                r#"{"question": "Ville du helst drikke kaffe?", "answer_A": "Ja"}"#,
                "\n",
            ),
        )
        .unwrap();
        fs::write(
            data.path().join("familie.jsonl"),
            r#"{"question": "Ville du helst have en bror eller en søster?", "answer_A": "Bror", "answer_B": "Søster"}"#,
        )
        .unwrap();

        let source = Arc::new(LocalRecordSource::new());
        let dataset = LoadDatasetUseCase::new(source.clone())
            .execute(data.path())
            .unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.count_for("mad"), 1);
        assert_eq!(dataset.count_for("familie"), 1);
        assert_eq!(dataset.diagnostics().len(), 1);

        let out = tempfile::tempdir().unwrap();
        let dest = out.path().join("alle.jsonl");
        let writer = Arc::new(JsonlDatasetWriter::new());
        let use_case = ExportDatasetUseCase::new(source, writer);

        let result = use_case
            .execute(ExportDatasetInput::new(data.path(), &dest))
            .unwrap();
        assert_eq!(result.records_written, 2);

        let content = fs::read_to_string(&dest).unwrap();
        let first: serde_json::Value =
            serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(first["category"], "familie");

        // A second export without force must not touch the file
        let again = use_case.execute(ExportDatasetInput::new(data.path(), &dest));
        assert!(again.is_err());
        assert_eq!(fs::read_to_string(&dest).unwrap(), content);
    }
}
