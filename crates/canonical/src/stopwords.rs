//! Stopword sets.
//!
//! A stopword is a function word (article, preposition, conjunction) that is
//! dropped before counting. The set is built once and only queried after
//! that.

use fxhash::FxHashSet;

/// Default Italian stopwords: articles, common prepositions, conjunctions
/// and a few high-frequency adverbs.
pub const ITALIAN_STOPWORDS: &[&str] = &[
    "il", "la", "lo", "i", "gli", "è", "si", "le", "un", "una", "uno", "di", "a", "da", "in",
    "con", "su", "per", "tra", "fra", "e", "o", "ma", "che", "non", "più", "come", "anche", "se",
];

/// Read-only set of lowercase stopwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::italian()
    }
}

impl StopwordSet {
    /// The built-in Italian list.
    pub fn italian() -> Self {
        Self::from_words(ITALIAN_STOPWORDS.iter().copied())
    }

    /// A set that filters nothing.
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Builds a set from arbitrary words.
    ///
    /// Entries are trimmed and lowercased so they can match normalized text;
    /// blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parses a word list: one word per line, `#` starts a comment.
    pub fn parse_list(list: &str) -> Self {
        Self::from_words(
            list.lines()
                .map(|line| line.split('#').next().unwrap_or_default()),
        )
    }

    /// Exact membership test. `word` is expected to be lowercase already.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order, for stable display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn italian_set_has_all_default_words() {
        let set = StopwordSet::italian();
        assert_eq!(set.len(), ITALIAN_STOPWORDS.len());
        for word in ITALIAN_STOPWORDS {
            assert!(set.contains(word), "missing {word}");
        }
        assert!(set.contains("è"));
        assert!(set.contains("più"));
        assert!(!set.contains("del"));
        assert!(!set.contains("sapere"));
    }

    #[test]
    fn default_list_is_already_lowercase() {
        for word in ITALIAN_STOPWORDS {
            assert_eq!(word.to_lowercase(), *word);
        }
    }

    #[test]
    fn custom_words_are_lowercased_and_trimmed() {
        let set = StopwordSet::from_words(["  The ", "AND", "", "   "]);
        assert_eq!(set.sorted(), vec!["and", "the"]);
        assert!(!set.contains("The"));
    }

    #[test]
    fn parse_list_skips_comments_and_blanks() {
        let set = StopwordSet::parse_list("# articoli\nil\nla # femminile\n\n  Lo\n");
        assert_eq!(set.sorted(), vec!["il", "la", "lo"]);
    }

    #[test]
    fn empty_set_filters_nothing() {
        let set = StopwordSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains("il"));
    }
}
