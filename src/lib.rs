//! Lexis: word-frequency analysis for plain-text documents.
//!
//! This crate stitches the stage crates into one straight pipeline:
//!
//! ```text
//! file ──load──▶ RawText ──normalize──▶ NormalizedText ──tokenize/filter──▶ TokenList
//!                                                                              │
//!                  Report ◀──rank top N── FrequencyTable ◀──────count──────────┘
//! ```
//!
//! Only loading can fail. Everything after it is a total function of the
//! text and the [`AnalysisConfig`].
//!
//! ```
//! use lexis::{AnalysisConfig, analyze_text};
//!
//! let cfg = AnalysisConfig::default();
//! let analysis = analyze_text("Il Sapere è la Meraviglia del sapere.", &cfg);
//! assert_eq!(analysis.frequencies.count("sapere"), 2);
//! assert_eq!(analysis.report.top_terms[1].term, "meraviglia");
//! ```

pub mod concepts;
pub mod config;
pub mod report;

pub use canonical::{
    CanonicalizedText, ITALIAN_STOPWORDS, NormalizeConfig, NormalizedText, StopwordSet, Token,
    TokenList, canonicalize, filter_stopwords, normalize, tokenize,
};
pub use frequency::{FrequencyTable, TermCount};
pub use ingest::{IngestConfig, IngestError, RawText, TextEncoding, load_text};

pub use crate::concepts::{ConceptEntry, ConceptMap, DEFAULT_CONCEPTS};
pub use crate::config::{ConfigLoadError, LexisConfig};
pub use crate::report::{OutputFormat, Report};

use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use tracing::{Level, debug, info};

/// Default number of terms in the frequency section.
pub const DEFAULT_TOP_N: usize = 5;

/// Errors that can occur while running the pipeline on a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Ingest(IngestError),
    IngestConfig(ingest::ConfigError),
    ZeroTopN,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Ingest(err) => write!(f, "load failure: {err}"),
            PipelineError::IngestConfig(err) => write!(f, "invalid input configuration: {err}"),
            PipelineError::ZeroTopN => write!(f, "top-N count must be at least 1"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Ingest(err) => Some(err),
            PipelineError::IngestConfig(err) => Some(err),
            PipelineError::ZeroTopN => None,
        }
    }
}

impl From<IngestError> for PipelineError {
    fn from(value: IngestError) -> Self {
        PipelineError::Ingest(value)
    }
}

impl From<ingest::ConfigError> for PipelineError {
    fn from(value: ingest::ConfigError) -> Self {
        PipelineError::IngestConfig(value)
    }
}

/// Everything the pipeline needs besides the text itself.
///
/// The stopword set and concept table are owned here and only read during a
/// run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub ingest: IngestConfig,
    pub normalize: NormalizeConfig,
    pub top_n: usize,
    pub stopwords: StopwordSet,
    pub concepts: ConceptMap,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ingest: IngestConfig::default(),
            normalize: NormalizeConfig::default(),
            top_n: DEFAULT_TOP_N,
            stopwords: StopwordSet::italian(),
            concepts: ConceptMap::philosophical(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        self.ingest.validate()?;
        if self.top_n == 0 {
            return Err(PipelineError::ZeroTopN);
        }
        Ok(())
    }
}

/// Intermediate and final products of one run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub canonical: CanonicalizedText,
    pub frequencies: FrequencyTable,
    pub report: Report,
}

/// Loads `path` and analyzes it.
///
/// Fails before any analysis when the config is invalid, the file cannot be
/// read, or its bytes do not decode.
pub fn analyze_file(
    path: impl AsRef<Path>,
    cfg: &AnalysisConfig,
) -> Result<Analysis, PipelineError> {
    cfg.validate()?;
    let raw = load_text(path, &cfg.ingest)?;
    Ok(analyze_raw(&raw, cfg))
}

/// Analyzes an already loaded document.
pub fn analyze_raw(raw: &RawText, cfg: &AnalysisConfig) -> Analysis {
    let span = tracing::span!(
        Level::INFO,
        "lexis.analyze",
        source = %raw.source().display()
    );
    let _guard = span.enter();
    analyze_text(raw.as_str(), cfg)
}

/// Runs normalization, filtering, counting and ranking over `text`.
///
/// A `top_n` of zero yields an empty frequency section; file-based entry
/// points reject it up front via [`AnalysisConfig::validate`].
pub fn analyze_text(text: &str, cfg: &AnalysisConfig) -> Analysis {
    let start = Instant::now();

    let canonical = canonicalize(text, &cfg.normalize, &cfg.stopwords);
    debug!(
        normalized_len = canonical.normalized.len(),
        total_tokens = canonical.total_tokens,
        kept_tokens = canonical.tokens.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "canonical_complete"
    );

    let frequencies = FrequencyTable::from_tokens(canonical.tokens.texts());
    let top_terms = frequencies.top_n(cfg.top_n);

    if tracing::enabled!(Level::DEBUG) {
        let matched: Vec<&str> = cfg
            .concepts
            .matched(&frequencies)
            .into_iter()
            .map(|e| e.word.as_str())
            .collect();
        debug!(?matched, "concepts_in_text");
    }

    let report = Report::new(cfg.top_n, top_terms, &cfg.concepts);

    info!(
        tokens = frequencies.total(),
        distinct = frequencies.len(),
        stopwords_removed = canonical.stopwords_removed(),
        top_n = cfg.top_n,
        elapsed_micros = start.elapsed().as_micros(),
        "analysis_complete"
    );

    Analysis {
        canonical,
        frequencies,
        report,
    }
}
