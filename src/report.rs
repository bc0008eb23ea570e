//! Report rendering.
//!
//! Text output is a fixed two-section layout:
//!
//! ```text
//! Le 5 parole più frequenti:
//! - sapere: 2
//! - meraviglia: 1
//!
//! Associazioni concettuali:
//! - filosofia → conoscenza
//! ```
//!
//! The first header always names the configured N, even when fewer terms
//! exist. JSON output carries the same data for scripts.

use std::fmt::{self, Write as _};
use std::io;
use std::str::FromStr;

use frequency::TermCount;
use serde::{Deserialize, Serialize};

use crate::concepts::{ConceptEntry, ConceptMap};

pub const CONCEPTS_HEADER: &str = "Associazioni concettuali:";

/// Header line of the frequency section.
pub fn top_header(top_n: usize) -> String {
    format!("Le {top_n} parole più frequenti:")
}

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Final result of an analysis, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Requested N.
    pub top_n: usize,
    /// At most `top_n` terms, highest count first.
    pub top_terms: Vec<TermCount>,
    /// Concept table in definition order.
    pub concepts: Vec<ConceptEntry>,
}

impl Report {
    pub fn new(top_n: usize, top_terms: Vec<TermCount>, concepts: &ConceptMap) -> Self {
        Self {
            top_n,
            top_terms,
            concepts: concepts.to_vec(),
        }
    }

    /// Plain-text layout, newline-terminated.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "{}", top_header(self.top_n))?;
        for entry in &self.top_terms {
            writeln!(out, "- {}: {}", entry.term, entry.count)?;
        }
        writeln!(out)?;
        writeln!(out, "{CONCEPTS_HEADER}")?;
        for entry in &self.concepts {
            writeln!(out, "- {} → {}", entry.word, entry.concept)?;
        }
        Ok(())
    }

    /// Pretty-printed JSON, newline-terminated.
    pub fn render_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }

    /// Renders and writes the whole report in one call.
    pub fn write_to<W: io::Write>(&self, mut writer: W, format: OutputFormat) -> io::Result<()> {
        let rendered = self.render(format).map_err(io::Error::other)?;
        writer.write_all(rendered.as_bytes())?;
        writer.flush()
    }
}
