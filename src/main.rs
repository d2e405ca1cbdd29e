//! Statement redaction CLI.
//!
//! Batch mode (the default) converts every PDF in a directory to redacted
//! text. Per-file failures are reported and do not change the exit status.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use statement_redactor::extraction::{self, decode_dropping_invalid};
use statement_redactor::{BatchReport, BatchRunner, ExtractorBackend, Redactor, Settings};

/// Bank Statement Redaction Tool
///
/// Extracts text from PDF bank statements and masks account numbers,
/// routing numbers, the customer's name and address, phone numbers,
/// emails and SSNs.
#[derive(Parser)]
#[command(name = "statement-redactor")]
#[command(version, about, long_about = None)]
struct Cli {
    /// YAML settings file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Directory containing statement PDFs
    #[arg(short, long, value_name = "DIR")]
    input_dir: Option<PathBuf>,

    /// Directory for redacted text output
    #[arg(short, long, value_name = "DIR", global = true)]
    output_dir: Option<PathBuf>,

    /// Customer name to redact (exact, case-insensitive)
    #[arg(long, value_name = "NAME", global = true)]
    name: Option<String>,

    /// Regex matching the customer's address
    #[arg(long, value_name = "REGEX", global = true)]
    address_pattern: Option<String>,

    /// pdftotext program to run
    #[arg(long, value_name = "PROGRAM", global = true, conflicts_with = "embedded")]
    pdftotext: Option<String>,

    /// Use the built-in PDF parser instead of pdftotext
    #[arg(long, global = true)]
    embedded: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Redact a single PDF
    File {
        /// Input PDF file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },

    /// Redact plain text (no PDF extraction)
    Text {
        /// Input text file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output text file (defaults to stdout)
        #[arg(short = 'O', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Builds settings from the config file with command-line overrides applied.
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if let Some(dir) = &cli.input_dir {
        settings.input_dir = dir.clone();
    }
    if let Some(dir) = &cli.output_dir {
        settings.output_dir = Some(dir.clone());
    }
    if let Some(name) = &cli.name {
        settings.redaction.name = Some(name.clone());
    }
    if let Some(pattern) = &cli.address_pattern {
        settings.redaction.address_pattern = Some(pattern.clone());
    }
    if let Some(program) = &cli.pdftotext {
        settings.extractor.backend = ExtractorBackend::Pdftotext;
        settings.extractor.program = program.clone();
    }
    if cli.embedded {
        settings.extractor.backend = ExtractorBackend::Embedded;
    }

    Ok(settings)
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn build_runner(settings: &Settings) -> Result<BatchRunner> {
    let redactor = Redactor::new(&settings.redaction).context("Invalid redaction settings")?;
    let runner = BatchRunner::new(extraction::from_config(&settings.extractor), redactor);
    Ok(match &settings.output_dir {
        Some(dir) => runner.with_output_dir(dir),
        None => runner,
    })
}

fn print_summary(report: &BatchReport) {
    println!("{}", "-".repeat(50));
    for output in report.outputs() {
        println!("✓ Saved redacted text to: {}", output.display());
    }
    for (input, err) in report.failures() {
        println!("✗ {}: {}", input.display(), err);
    }
    println!(
        "Processing complete! {} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );
}

fn run_batch(settings: &Settings) -> Result<()> {
    let runner = build_runner(settings)?;
    let report = runner
        .run(&settings.input_dir)
        .with_context(|| format!("Cannot read {}", settings.input_dir.display()))?;

    if report.is_empty() {
        println!("No PDF files found in {}", settings.input_dir.display());
        return Ok(());
    }

    print_summary(&report);
    Ok(())
}

fn run_file(settings: &Settings, input: &Path) -> Result<()> {
    let runner = build_runner(settings)?;
    let report = runner.run_paths(&[input.to_path_buf()]);
    print_summary(&report);
    Ok(())
}

fn run_text(settings: &Settings, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let redactor = Redactor::new(&settings.redaction).context("Invalid redaction settings")?;

    let bytes = match input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let redacted = redactor.redact_text(&decode_dropping_invalid(&bytes));

    match output {
        Some(path) => std::fs::write(path, redacted)
            .with_context(|| format!("Failed to write to {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(redacted.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let settings = resolve_settings(&cli)?;

    match &cli.command {
        Some(Commands::File { input }) => run_file(&settings, input),
        Some(Commands::Text { input, output }) => {
            run_text(&settings, input.as_deref(), output.as_deref())
        }
        None => run_batch(&settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from([
            "statement-redactor",
            "--input-dir",
            "pdfs",
            "--name",
            "Jane Doe",
            "--pdftotext",
            "/opt/poppler/pdftotext",
        ]);
        let settings = resolve_settings(&cli).unwrap();
        assert_eq!(settings.input_dir, PathBuf::from("pdfs"));
        assert_eq!(settings.redaction.name.as_deref(), Some("Jane Doe"));
        assert_eq!(settings.extractor.program, "/opt/poppler/pdftotext");
        assert_eq!(settings.output_dir, Some(PathBuf::from("./redacted_texts")));
    }

    #[test]
    fn test_embedded_flag() {
        let cli = Cli::parse_from(["statement-redactor", "--embedded"]);
        let settings = resolve_settings(&cli).unwrap();
        assert_eq!(settings.extractor.backend, ExtractorBackend::Embedded);
    }

    #[test]
    fn test_text_subcommand_parses() {
        let cli = Cli::parse_from(["statement-redactor", "text", "-O", "out.txt"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Text { input: None, output: Some(_) })
        ));
    }
}
