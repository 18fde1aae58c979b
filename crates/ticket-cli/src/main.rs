//! Ticket normalizer CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use ticket_cli::logging::{LogConfig, LogFormat, init_logging};
use ticket_cli::summary::{print_ingest_summary, print_normalize_summary};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{load_config, run_ingest, run_normalize, run_show};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let config = load_config(&cli.normalizer)?;
    match &cli.command {
        Command::Normalize(args) => {
            let result = run_normalize(args, &config)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result.values)?);
            } else {
                print_normalize_summary(&result);
            }
            Ok(exit_code(result.saved))
        }
        Command::Ingest(args) => {
            let result = run_ingest(args, &config)?;
            print_ingest_summary(&result);
            Ok(exit_code(result.saved))
        }
        Command::Show(args) => {
            run_show(args, &config)?;
            Ok(0)
        }
    }
}

/// A failed save is reported through the exit code; the run itself succeeded.
fn exit_code(saved: Option<bool>) -> i32 {
    if saved == Some(false) { 2 } else { 0 }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default().with_level(cli.verbosity.tracing_level_filter());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};

    use clap::CommandFactory;
    use serde_json::{Value, json};
    use ticket_model::EntityClass;
    use ticket_normalize::{NormalizerConfig, ResolutionKind};

    use crate::cli::{ClassArg, IngestArgs, NormalizeArgs};

    fn config_in(dir: &Path) -> NormalizerConfig {
        NormalizerConfig {
            mappings_dir: dir.join("mappings"),
            ..NormalizerConfig::default()
        }
    }

    fn write_tickets(dir: &Path) -> PathBuf {
        let path = dir.join("tickets.json");
        let tickets = json!([{"company_name": "Cobalt Roofing LLC", "id": 7}]);
        fs::write(&path, tickets.to_string()).unwrap();
        path
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    fn ingest_args(file: PathBuf) -> IngestArgs {
        IngestArgs {
            file,
            output: None,
            review: false,
            dry_run: false,
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config_values() {
        let cli = Cli::parse_from([
            "ticket-normalizer",
            "normalize",
            "--class",
            "company",
            "--auto-threshold",
            "0.95",
            "--no-seed",
            "Acme",
        ]);
        let config = load_config(&cli.normalizer).unwrap();
        assert_eq!(config.auto_threshold, 0.95);
        assert_eq!(config.suggest_threshold, 0.7);
        assert!(!config.seed_vocabulary);
    }

    #[test]
    fn explicit_log_level_disables_env_filter() {
        let cli = Cli::parse_from(["ticket-normalizer", "--log-level", "debug", "show"]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn ingest_rewrites_the_input_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let file = write_tickets(dir.path());

        let result = run_ingest(&ingest_args(file.clone()), &config).unwrap();

        assert_eq!(result.records, 1);
        assert_eq!(result.output.as_deref(), Some(file.as_path()));
        assert_eq!(result.saved, Some(true));
        assert_eq!(
            read_json(&file),
            json!([{"company_name": "Cobalt Roofing", "id": 7}])
        );
        assert!(config.layout().path_for(EntityClass::Company).exists());
        assert_eq!(exit_code(result.saved), 0);
    }

    #[test]
    fn ingest_with_output_leaves_the_input_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let file = write_tickets(dir.path());
        let before = fs::read_to_string(&file).unwrap();
        let output = dir.path().join("normalized.json");
        let args = IngestArgs {
            output: Some(output.clone()),
            ..ingest_args(file.clone())
        };

        let result = run_ingest(&args, &config).unwrap();

        assert_eq!(result.output, Some(output.clone()));
        assert_eq!(fs::read_to_string(&file).unwrap(), before);
        assert_eq!(read_json(&output)[0]["company_name"], "Cobalt Roofing");
    }

    #[test]
    fn ingest_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let file = write_tickets(dir.path());
        let before = fs::read_to_string(&file).unwrap();
        let args = IngestArgs {
            dry_run: true,
            ..ingest_args(file.clone())
        };

        let result = run_ingest(&args, &config).unwrap();

        assert_eq!(result.records, 1);
        assert_eq!(result.output, None);
        assert_eq!(result.saved, None);
        assert_eq!(fs::read_to_string(&file).unwrap(), before);
        assert!(!config.mappings_dir.exists());
        assert_eq!(exit_code(result.saved), 0);
    }

    #[test]
    fn ingest_reports_a_failed_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        // a regular file where the mappings directory should be
        config.mappings_dir = dir.path().join("not-a-dir");
        fs::write(&config.mappings_dir, "").unwrap();
        let file = write_tickets(dir.path());

        let result = run_ingest(&ingest_args(file.clone()), &config).unwrap();

        assert_eq!(result.saved, Some(false));
        assert_eq!(exit_code(result.saved), 2);
        assert_eq!(read_json(&file)[0]["company_name"], "Cobalt Roofing");
    }

    #[test]
    fn normalize_dry_run_resolves_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let args = NormalizeArgs {
            class: ClassArg::Company,
            values: vec!["Cobalt Roofing LLC".to_string(), "n/a".to_string()],
            unchecked: false,
            review: false,
            dry_run: true,
            json: false,
        };

        let result = run_normalize(&args, &config).unwrap();

        assert_eq!(result.class, EntityClass::Company);
        assert_eq!(result.values[0].resolution.canonical, "Cobalt Roofing");
        assert!(matches!(
            result.values[0].resolution.kind,
            ResolutionKind::New { .. }
        ));
        assert_eq!(result.values[1].resolution.canonical, "Unknown Company");
        assert_eq!(result.saved, None);
        assert!(!config.mappings_dir.exists());
    }

    #[test]
    fn only_a_failed_save_changes_the_exit_code() {
        assert_eq!(exit_code(Some(false)), 2);
        assert_eq!(exit_code(Some(true)), 0);
        assert_eq!(exit_code(None), 0);
    }
}
