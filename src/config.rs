//! YAML configuration file support.
//!
//! Every field is optional; missing sections fall back to the built-in
//! defaults (UTF-8 input, Italian stopwords, top 5, philosophical concepts).
//!
//! ## Example YAML configuration
//!
//! ```yaml
//! version: "1"
//!
//! input:
//!   path: "testo_meraviglia.txt"
//!   encoding: "utf-8"
//!   max_input_bytes: 10485760
//!
//! normalize:
//!   normalize_unicode: false
//!   lowercase: true
//!   strip_punctuation: true
//!
//! analysis:
//!   top_n: 5
//!   # Replaces the built-in list when present.
//!   stopwords: ["il", "la", "lo"]
//!   # Or read them from a file, one per line.
//!   # stopwords_file: "stopwords.txt"
//!
//! concepts:
//!   - { word: "filosofia", concept: "conoscenza" }
//!   - { word: "meraviglia", concept: "origine" }
//!
//! output:
//!   format: "text"
//!
//! log_level: "warn"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use canonical::{NormalizeConfig, StopwordSet};
use ingest::{IngestConfig, TextEncoding};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::AnalysisConfig;
use crate::concepts::{ConceptEntry, ConceptMap};
use crate::report::OutputFormat;

/// Input path used when neither the CLI nor the config file names one.
pub const DEFAULT_INPUT_PATH: &str = "testo_meraviglia.txt";

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LexisConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub input: InputYamlConfig,

    #[serde(default)]
    pub normalize: NormalizeConfig,

    #[serde(default)]
    pub analysis: AnalysisYamlConfig,

    /// Replaces the built-in concept table when present.
    #[serde(default)]
    pub concepts: Option<Vec<ConceptEntry>>,

    #[serde(default)]
    pub output: OutputYamlConfig,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl LexisConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = read_file(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: LexisConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.input.validate()?;
        self.analysis.validate()?;

        if let Some(concepts) = &self.concepts {
            if let Some(entry) = concepts.iter().find(|e| e.word.trim().is_empty()) {
                return Err(ConfigLoadError::Validation(format!(
                    "concept entry '{}' has an empty word",
                    entry.concept
                )));
            }
        }

        Ok(())
    }

    /// Builds the runtime configuration, reading the stopword file if one is
    /// configured.
    pub fn to_analysis_config(&self) -> Result<AnalysisConfig, ConfigLoadError> {
        let stopwords = match (&self.analysis.stopwords, &self.analysis.stopwords_file) {
            (Some(words), _) => StopwordSet::from_words(words),
            (None, Some(path)) => load_stopwords(path)?,
            (None, None) => StopwordSet::italian(),
        };

        let concepts = match &self.concepts {
            Some(entries) => ConceptMap::from_entries(entries.iter().cloned()),
            None => ConceptMap::philosophical(),
        };

        Ok(AnalysisConfig {
            ingest: self.input.ingest_config(),
            normalize: self.normalize.clone(),
            top_n: self.analysis.top_n,
            stopwords,
            concepts,
        })
    }
}

impl Default for LexisConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            name: None,
            input: InputYamlConfig::default(),
            normalize: NormalizeConfig::default(),
            analysis: AnalysisYamlConfig::default(),
            concepts: None,
            output: OutputYamlConfig::default(),
            log_level: default_log_level(),
        }
    }
}

/// Where and how to read the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputYamlConfig {
    #[serde(default = "default_input_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub encoding: TextEncoding,

    #[serde(default)]
    pub max_input_bytes: Option<usize>,
}

impl InputYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation("input.path must not be empty".into()));
        }
        self.ingest_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("input: {e}")))
    }

    pub fn ingest_config(&self) -> IngestConfig {
        IngestConfig {
            encoding: self.encoding,
            max_input_bytes: self.max_input_bytes,
        }
    }
}

impl Default for InputYamlConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            encoding: TextEncoding::default(),
            max_input_bytes: None,
        }
    }
}

/// Counting and ranking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisYamlConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    #[serde(default)]
    pub stopwords: Option<Vec<String>>,

    #[serde(default)]
    pub stopwords_file: Option<PathBuf>,
}

impl AnalysisYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.top_n == 0 {
            return Err(ConfigLoadError::Validation("analysis.top_n must be >= 1".into()));
        }
        if self.stopwords.is_some() && self.stopwords_file.is_some() {
            return Err(ConfigLoadError::Validation(
                "analysis.stopwords and analysis.stopwords_file are mutually exclusive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisYamlConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            stopwords: None,
            stopwords_file: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputYamlConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Reads a stopword list file: one word per line, `#` comments allowed.
pub fn load_stopwords(path: &Path) -> Result<StopwordSet, ConfigLoadError> {
    let content = read_file(path)?;
    Ok(StopwordSet::parse_list(&content))
}

fn read_file(path: &Path) -> Result<String, ConfigLoadError> {
    fs::read_to_string(path).map_err(|source| ConfigLoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn default_version() -> String {
    "1".to_string()
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_PATH)
}

fn default_top_n() -> usize {
    5
}

fn default_log_level() -> String {
    "warn".to_string()
}
