//! Loader configuration.
//!
//! ```rust
//! use ingest::{IngestConfig, TextEncoding};
//!
//! let config = IngestConfig::default();
//! assert_eq!(config.encoding, TextEncoding::Utf8);
//! assert!(config.max_input_bytes.is_none());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encoding::TextEncoding;

/// Settings that control how an input file is read and decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Decoding scheme for the file bytes. Defaults to UTF-8.
    #[serde(default)]
    pub encoding: TextEncoding,

    /// Optional upper bound on the file size in bytes.
    ///
    /// Checked against file metadata before the contents are read, so an
    /// oversized file is rejected without being loaded.
    #[serde(default)]
    pub max_input_bytes: Option<usize>,
}

/// Configuration validation errors for [`IngestConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// `max_input_bytes` was set to zero, which would reject every file.
    #[error("max_input_bytes must be greater than zero")]
    ZeroInputLimit,
}

impl IngestConfig {
    /// Config with the given encoding and no size limit.
    pub fn with_encoding(encoding: TextEncoding) -> Self {
        Self {
            encoding,
            ..Self::default()
        }
    }

    /// Validates internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_bytes == Some(0) {
            return Err(ConfigError::ZeroInputLimit);
        }
        Ok(())
    }
}
