//! Lexis ingest layer.
//!
//! This is where a document enters the pipeline. We read the whole file into
//! memory, decode it under the configured encoding, and hand back a
//! [`RawText`] that later stages only ever read from.
//!
//! ## What we do here
//!
//! - **Read once** - the file is opened, read to the end and closed inside a
//!   single call. Nothing is streamed.
//! - **Decode strictly** - invalid UTF-8 is an error, never a replacement
//!   character. Latin-1 is available for legacy files.
//! - **Enforce limits** - an optional byte ceiling checked before reading.
//! - **Log outcomes** - `load_success` / `load_failure` events via tracing.
//!
//! ## Example
//!
//! ```no_run
//! use ingest::{load_text, IngestConfig};
//!
//! let raw = load_text("testo_meraviglia.txt", &IngestConfig::default())?;
//! println!("{} bytes from {}", raw.byte_len(), raw.source().display());
//! # Ok::<(), ingest::IngestError>(())
//! ```

mod config;
mod encoding;
mod error;
mod loader;
mod types;

pub use crate::config::{ConfigError, IngestConfig};
pub use crate::encoding::{DecodeFailure, TextEncoding};
pub use crate::error::IngestError;
pub use crate::loader::load_text;
pub use crate::types::RawText;
