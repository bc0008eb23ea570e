//! Text encodings understood by the loader.
//!
//! Only single-step decoders live here: UTF-8 (validated, never lossy) and
//! ISO-8859-1, where every byte maps to the code point of the same value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IngestError;

/// Decoding scheme applied to the raw bytes of an input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TextEncoding {
    /// Strict UTF-8. Invalid sequences are a hard error.
    #[default]
    Utf8,
    /// ISO-8859-1. Total: any byte sequence decodes.
    Latin1,
}

/// Reason a byte buffer could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    /// Byte offset of the first invalid sequence.
    pub offset: usize,
}

impl TextEncoding {
    /// Canonical label, as printed in logs and error messages.
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "iso-8859-1",
        }
    }

    /// Decodes `bytes` into an owned string.
    ///
    /// Takes ownership so the UTF-8 path reuses the buffer instead of copying.
    pub fn decode(self, bytes: Vec<u8>) -> Result<String, DecodeFailure> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|err| DecodeFailure {
                offset: err.utf8_error().valid_up_to(),
            }),
            TextEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(TextEncoding::Latin1),
            other => Err(IngestError::UnsupportedEncoding(other.to_string())),
        }
    }
}

impl TryFrom<String> for TextEncoding {
    type Error = IngestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TextEncoding> for String {
    fn from(value: TextEncoding) -> Self {
        value.label().to_string()
    }
}
