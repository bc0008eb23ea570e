//! The loaded document.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::encoding::TextEncoding;

/// Verbatim decoded contents of an input file.
///
/// Immutable once built: there are accessors but no setters, and the text is
/// never rewritten in place. Later stages derive new values from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawText {
    source: PathBuf,
    encoding: TextEncoding,
    byte_len: usize,
    text: String,
}

impl RawText {
    pub(crate) fn new(source: PathBuf, encoding: TextEncoding, byte_len: usize, text: String) -> Self {
        Self {
            source,
            encoding,
            byte_len,
            text,
        }
    }

    /// Wraps in-memory text as if it had been loaded as UTF-8.
    ///
    /// Useful for callers that already hold the text and want to run the
    /// rest of the pipeline on it.
    pub fn from_memory(label: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            source: label.into(),
            encoding: TextEncoding::Utf8,
            byte_len: text.len(),
            text,
        }
    }

    /// Path the text was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Encoding used to decode the file.
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Size of the file on disk, before decoding.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for RawText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
