//! Error types produced by the ingest crate.
//!
//! Every failure here is fatal for a run: the loader either hands back the
//! complete decoded text or nothing at all. Errors carry the path and the
//! encoding involved so the caller can print a useful message without
//! re-deriving context.
//!
//! | Error | Cause |
//! |-------|-------|
//! | [`Io`](IngestError::Io) | File missing, unreadable, permission denied |
//! | [`InvalidEncoding`](IngestError::InvalidEncoding) | Bytes not valid for the declared encoding |
//! | [`InputTooLarge`](IngestError::InputTooLarge) | File exceeds `max_input_bytes` |
//! | [`UnsupportedEncoding`](IngestError::UnsupportedEncoding) | Unknown encoding label |
//!
//! ```rust
//! use ingest::IngestError;
//!
//! let err = IngestError::UnsupportedEncoding("ebcdic".into());
//! assert_eq!(err.to_string(), "unsupported text encoding: ebcdic");
//! ```
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::TextEncoding;

/// Errors that can occur while loading an input file.
///
/// The enum is cloneable and comparable so tests can match on exact values;
/// I/O failures are flattened into their [`io::ErrorKind`] plus message for
/// that reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {message}", .path.display())]
    Io {
        path: PathBuf,
        kind: io::ErrorKind,
        message: String,
    },

    /// The file contents are not valid under the declared encoding.
    #[error(
        "failed to decode {} as {encoding}: invalid byte sequence at offset {offset}",
        .path.display()
    )]
    InvalidEncoding {
        path: PathBuf,
        encoding: TextEncoding,
        offset: usize,
    },

    /// The file is larger than the configured limit.
    #[error("{} is {size} bytes, exceeding the limit of {limit}", .path.display())]
    InputTooLarge {
        path: PathBuf,
        size: u64,
        limit: usize,
    },

    /// The encoding label is not one the loader knows.
    #[error("unsupported text encoding: {0}")]
    UnsupportedEncoding(String),
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        IngestError::Io {
            path: path.into(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Returns true when the error means the input file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            IngestError::Io {
                kind: io::ErrorKind::NotFound,
                ..
            }
        )
    }
}
