use crate::config::NormalizeConfig;
use crate::document::CanonicalizedText;
use crate::normalize::normalize;
use crate::stopwords::StopwordSet;
use crate::token::{tokenize, Token, TokenList};

/// Main entry point. Normalizes `raw`, splits it into tokens and drops
/// stopwords.
pub fn canonicalize(raw: &str, cfg: &NormalizeConfig, stopwords: &StopwordSet) -> CanonicalizedText {
    let normalized = normalize(raw, cfg);
    let all_tokens = tokenize(normalized.as_str());
    let total_tokens = all_tokens.len();
    let tokens = filter_stopwords(all_tokens, stopwords);

    CanonicalizedText {
        normalized,
        tokens,
        total_tokens,
    }
}

/// Keeps the tokens that are not stopwords, in their original order.
///
/// Matching is exact, so `tokens` should come from normalized text when the
/// set holds lowercase words.
pub fn filter_stopwords(tokens: Vec<Token>, stopwords: &StopwordSet) -> TokenList {
    if stopwords.is_empty() {
        return TokenList::new(tokens);
    }
    TokenList::new(
        tokens
            .into_iter()
            .filter(|t| !stopwords.contains(&t.text))
            .collect(),
    )
}
