use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::Colorize;
use rtgen_codegen::config::MANIFEST_FILE;
use rtgen_codegen::{FormatContext, Generator, OutputConfig, StaleReason};
use rtgen_manifest::types::common::Severity;
use rtgen_manifest::{ErrorEntry, Manifest, ValidationReport};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gen_restricted_traces",
    about = "Generates integration code for the restricted trace tests"
)]
#[command(version)]
struct Cli {
    /// `inputs` or `outputs`: print the files this tool reads or writes
    mode: Option<String>,

    /// Anything after the mode is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,

    /// Directory holding the manifest and receiving the outputs
    #[arg(short = 'C', long, default_value = ".")]
    dir: PathBuf,

    /// Manifest file name, relative to --dir
    #[arg(long, default_value = MANIFEST_FILE)]
    manifest: String,

    /// Only check that the outputs on disk are up to date
    #[arg(long)]
    check: bool,

    /// Print the manifest report as JSON on stdout instead of coloured text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    // Every bad invocation exits 1, usage errors included.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            };
        }
    };
    init_logging(cli.verbose);
    if !cli.ignored.is_empty() {
        tracing::debug!(args = ?cli.ignored, "ignoring arguments after mode");
    }

    let config = OutputConfig::default().with_manifest(cli.manifest.as_str());

    let result = match cli.mode.as_deref() {
        Some(mode) => cmd_list(mode, &config),
        None if cli.check => cmd_check(&cli.dir, &config, cli.json),
        None => cmd_generate(&cli.dir, &config, cli.json),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Comma-joined file list for the `inputs`/`outputs` modes.
fn list_files(mode: &str, config: &OutputConfig) -> Option<String> {
    match mode {
        "inputs" => Some(config.inputs().join(",")),
        "outputs" => Some(config.outputs().join(",")),
        _ => None,
    }
}

fn cmd_list(mode: &str, config: &OutputConfig) -> Result<bool> {
    match list_files(mode, config) {
        Some(list) => {
            println!("{list}");
            Ok(true)
        }
        None => {
            eprintln!("{} Invalid script parameters.", "error:".red().bold());
            Ok(false)
        }
    }
}

fn print_entry(entry: &ErrorEntry) {
    let severity_str = match entry.severity {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
    };

    eprintln!(
        "  {} [{}] {} ({}:{})",
        severity_str,
        entry.code.dimmed(),
        entry.message,
        entry.file.dimmed(),
        entry.path.dimmed(),
    );

    if let Some(suggestion) = &entry.suggestion {
        eprintln!("    {} {}", "hint:".cyan(), suggestion);
    }
}

fn emit_report(report: &ValidationReport, config: &OutputConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for entry in report.with_severity(Severity::Error) {
        print_entry(entry);
    }
    eprintln!(
        "{} {} error(s) in {}",
        "✗".red().bold(),
        report.count(Severity::Error),
        config.manifest_file,
    );
    Ok(())
}

/// Load and validate the manifest. `Ok(None)` means the report was emitted
/// and the run should fail.
fn load_and_validate(dir: &Path, config: &OutputConfig, json: bool) -> Result<Option<Manifest>> {
    let manifest_path = dir.join(&config.manifest_file);

    let (manifest, report) = match rtgen_manifest::load_manifest(&manifest_path) {
        Ok(manifest) => {
            let report = rtgen_manifest::validate(&manifest, &config.manifest_file);
            (Some(manifest), report)
        }
        Err(e) => match e.entry().cloned() {
            Some(entry) => (None, ValidationReport::single(entry)),
            None => {
                return Err(e).with_context(|| {
                    format!("Failed to load manifest '{}'", manifest_path.display())
                });
            }
        },
    };

    if report.has_errors() {
        emit_report(&report, config, json)?;
        return Ok(None);
    }

    Ok(manifest)
}

fn cmd_generate(dir: &Path, config: &OutputConfig, json: bool) -> Result<bool> {
    let Some(manifest) = load_and_validate(dir, config, json)? else {
        return Ok(false);
    };

    let generator = Generator::new(config);
    let files = generator.generate(&manifest, &FormatContext::from_config(config));

    files
        .write_to_disk(dir)
        .with_context(|| format!("Failed to write outputs to '{}'", dir.display()))?;

    tracing::info!(
        traces = manifest.len(),
        files = files.file_count(),
        dir = %dir.display(),
        "generated restricted trace sources"
    );
    Ok(true)
}

fn cmd_check(dir: &Path, config: &OutputConfig, json: bool) -> Result<bool> {
    let Some(manifest) = load_and_validate(dir, config, json)? else {
        return Ok(false);
    };

    let files = Generator::new(config).generate(&manifest, &FormatContext::from_config(config));
    let stale = files
        .check_against_disk(dir)
        .with_context(|| format!("Failed to read outputs in '{}'", dir.display()))?;

    if stale.is_empty() {
        tracing::info!(files = files.file_count(), "outputs are up to date");
        return Ok(true);
    }

    for file in &stale {
        let reason = match file.reason {
            StaleReason::Missing => "missing",
            StaleReason::Differs => "out of date",
        };
        eprintln!("  {} {} ({})", "✗".red().bold(), file.name, reason);
    }
    eprintln!(
        "{} re-run gen_restricted_traces to update {} file(s)",
        "hint:".cyan(),
        stale.len()
    );
    Ok(false)
}
