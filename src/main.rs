//! Lexis CLI
//!
//! Reads one text file, prints its most frequent non-stopword terms and the
//! concept association table.
//!
//! Precedence for every setting: command-line flag, then `--config` YAML
//! file, then built-in default.
//!
//! Exit codes: 0 on success, 1 when the input cannot be loaded or decoded,
//! 2 for configuration and usage errors.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use lexis::config::{ConfigLoadError, load_stopwords};
use lexis::{LexisConfig, OutputFormat, PipelineError, StopwordSet, TextEncoding, analyze_file};
use tracing_subscriber::EnvFilter;

/// Word-frequency analysis for plain-text documents
#[derive(Parser, Debug)]
#[command(name = "lexis", version, about)]
struct Cli {
    /// Text file to analyze [default: testo_meraviglia.txt]
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Input text encoding (utf-8, latin-1)
    #[arg(short, long, value_name = "ENCODING")]
    encoding: Option<TextEncoding>,

    /// Number of most frequent words to report
    #[arg(short = 'n', long = "top", value_name = "N")]
    top: Option<usize>,

    /// Stopword list file, one word per line
    #[arg(long, value_name = "FILE", conflicts_with = "no_stopwords")]
    stopwords: Option<PathBuf>,

    /// Count every word, stopwords included
    #[arg(long)]
    no_stopwords: bool,

    /// Report format (text, json)
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Log filter, e.g. "info" or "lexis=debug"; RUST_LOG takes precedence
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut file_config = match &cli.config {
        Some(path) => LexisConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LexisConfig::default(),
    };
    apply_overrides(&cli, &mut file_config)?;

    let log_level = cli.log_level.as_deref().unwrap_or(&file_config.log_level);
    init_tracing(log_level, cli.log_format);

    let mut analysis_config = file_config.to_analysis_config()?;
    if let Some(path) = &cli.stopwords {
        analysis_config.stopwords = load_stopwords(path)?;
    } else if cli.no_stopwords {
        analysis_config.stopwords = StopwordSet::empty();
    }

    let input = &file_config.input.path;
    tracing::debug!(
        input = %input.display(),
        encoding = %analysis_config.ingest.encoding,
        top_n = analysis_config.top_n,
        stopwords = analysis_config.stopwords.len(),
        "configuration_resolved"
    );

    let analysis = analyze_file(input, &analysis_config)
        .with_context(|| format!("analyzing {}", input.display()))?;

    let stdout = io::stdout();
    analysis
        .report
        .write_to(stdout.lock(), file_config.output.format)
        .context("writing report")?;
    Ok(())
}

/// Folds command-line flags into the file configuration and re-validates.
fn apply_overrides(cli: &Cli, config: &mut LexisConfig) -> Result<(), ConfigLoadError> {
    if let Some(input) = &cli.input {
        config.input.path = input.clone();
    }
    if let Some(encoding) = cli.encoding {
        config.input.encoding = encoding;
    }
    if let Some(top) = cli.top {
        config.analysis.top_n = top;
    }
    if cli.stopwords.is_some() || cli.no_stopwords {
        // The flag replaces whatever list the file configured.
        config.analysis.stopwords = None;
        config.analysis.stopwords_file = None;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    config.validate()
}

fn init_tracing(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn exit_status(err: &anyhow::Error) -> u8 {
    let is_config = err.chain().any(|cause| {
        cause.is::<ConfigLoadError>()
            || matches!(
                cause.downcast_ref::<PipelineError>(),
                Some(PipelineError::IngestConfig(_) | PipelineError::ZeroTopN)
            )
    });
    if is_config { 2 } else { 1 }
}
