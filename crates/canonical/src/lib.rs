//! Lexis canonical text layer.
//!
//! Turns decoded text into the token stream that frequency counting works
//! on.
//!
//! ## What we do
//!
//! - Optional Unicode NFKC normalization (off by default)
//! - Full Unicode lowercasing, accented capitals included
//! - Deletion of the 32 ASCII punctuation characters
//! - Whitespace tokenization with byte offsets
//! - Stopword filtering against a fixed, read-only set
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale lookups. Same text, config and
//! stopwords give the same result on any machine.
//!
//! ## Known quirk
//!
//! Punctuation is deleted rather than turned into a separator, so
//! `"parola,parola"` is one token (`"parolaparola"`) and an elided article
//! like `"l'anima"` becomes `"lanima"`.

mod config;
mod document;
mod normalize;
mod pipeline;
mod stopwords;
mod token;

pub use crate::config::NormalizeConfig;
pub use crate::document::CanonicalizedText;
pub use crate::normalize::{is_stripped_punctuation, normalize, NormalizedText};
pub use crate::pipeline::{canonicalize, filter_stopwords};
pub use crate::stopwords::{StopwordSet, ITALIAN_STOPWORDS};
pub use crate::token::{is_separator, tokenize, Token, TokenList};
