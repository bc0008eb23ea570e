//! Static word → concept associations.
//!
//! The table does not depend on the analyzed text. It is printed as-is after
//! the frequency section, in the order it was defined.

use frequency::FrequencyTable;
use serde::{Deserialize, Serialize};

/// Built-in associations between key words and philosophical ideas.
pub const DEFAULT_CONCEPTS: &[(&str, &str)] = &[
    ("filosofia", "conoscenza"),
    ("meraviglia", "origine"),
    ("sapere", "epistemologia"),
    ("desiderio", "motivazione"),
    ("conoscenza", "fine in sé"),
];

/// One row of the concept table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptEntry {
    pub word: String,
    pub concept: String,
}

impl ConceptEntry {
    pub fn new(word: impl Into<String>, concept: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            concept: concept.into(),
        }
    }
}

/// Ordered, read-only word → concept table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptMap {
    entries: Vec<ConceptEntry>,
}

impl Default for ConceptMap {
    fn default() -> Self {
        Self::philosophical()
    }
}

impl ConceptMap {
    /// The built-in table.
    pub fn philosophical() -> Self {
        Self::from_entries(
            DEFAULT_CONCEPTS
                .iter()
                .map(|&(word, concept)| ConceptEntry::new(word, concept)),
        )
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a table from entries in order.
    ///
    /// A repeated word replaces the earlier concept but keeps the earlier
    /// position.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ConceptEntry>,
    {
        let mut map = Self::empty();
        for entry in entries {
            match map.entries.iter_mut().find(|e| e.word == entry.word) {
                Some(existing) => existing.concept = entry.concept,
                None => map.entries.push(entry),
            }
        }
        map
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.concept.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConceptEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose word occurs in `table`, in table-definition order.
    pub fn matched<'a>(&'a self, table: &FrequencyTable) -> Vec<&'a ConceptEntry> {
        self.entries
            .iter()
            .filter(|e| table.contains(&e.word))
            .collect()
    }

    pub fn to_vec(&self) -> Vec<ConceptEntry> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_keeps_definition_order() {
        let map = ConceptMap::default();
        let words: Vec<&str> = map.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(
            words,
            vec!["filosofia", "meraviglia", "sapere", "desiderio", "conoscenza"]
        );
        assert_eq!(map.get("conoscenza"), Some("fine in sé"));
        assert_eq!(map.get("gatto"), None);
    }

    #[test]
    fn repeated_word_overrides_in_place() {
        let map = ConceptMap::from_entries([
            ConceptEntry::new("a", "uno"),
            ConceptEntry::new("b", "due"),
            ConceptEntry::new("a", "primo"),
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.to_vec()[0], ConceptEntry::new("a", "primo"));
    }

    #[test]
    fn matched_lists_words_present_in_text() {
        let table = FrequencyTable::from_tokens(["sapere", "gatto", "filosofia"]);
        let map = ConceptMap::default();
        let matched: Vec<&str> = map
            .matched(&table)
            .into_iter()
            .map(|e| e.word.as_str())
            .collect();
        assert_eq!(matched, vec!["filosofia", "sapere"]);
    }
}
