//! Configuration for the normalization stage.
//!
//! # Examples
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert!(!config.normalize_unicode);
//! assert!(config.lowercase);
//! assert!(config.strip_punctuation);
//! ```
//!
//! Folding composed and decomposed accents together:
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig {
//!     normalize_unicode: true,
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Controls how raw text becomes normalized text.
///
/// The defaults reproduce plain lowercase-then-strip behaviour: no Unicode
/// normalization, full lowercase mapping, ASCII punctuation deleted.
///
/// ```json
/// {
///   "normalize_unicode": false,
///   "lowercase": true,
///   "strip_punctuation": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// If true, apply Unicode NFKC before anything else.
    ///
    /// With this on, `"e\u{0300}"` (e + combining grave) and `"è"` produce the
    /// same token. Off by default so output matches the input's own code
    /// points.
    pub normalize_unicode: bool,

    /// If true, map every character to its Unicode lowercase form.
    ///
    /// This is a full mapping, not ASCII-only: `"È"` becomes `"è"`. One
    /// character can expand to several (`"İ"` lowercases to two code points).
    pub lowercase: bool,

    /// If true, delete ASCII punctuation characters.
    ///
    /// Characters are removed, not replaced by a space, so `"word,word"`
    /// becomes the single token `"wordword"` and `"l'anima"` becomes
    /// `"lanima"`. Non-ASCII punctuation such as `«` or `…` is kept.
    pub strip_punctuation: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            normalize_unicode: false,
            lowercase: true,
            strip_punctuation: true,
        }
    }
}
