use serde::Serialize;

use crate::normalize::NormalizedText;
use crate::token::TokenList;

/// Output of the canonical stage for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalizedText {
    /// Lowercased, punctuation-free text.
    pub normalized: NormalizedText,
    /// Tokens left after stopword removal, in positional order.
    pub tokens: TokenList,
    /// Number of whitespace-separated tokens before filtering.
    pub total_tokens: usize,
}

impl CanonicalizedText {
    /// How many tokens were dropped as stopwords.
    pub fn stopwords_removed(&self) -> usize {
        self.total_tokens - self.tokens.len()
    }
}
