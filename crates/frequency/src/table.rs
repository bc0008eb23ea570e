use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A term and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

impl TermCount {
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// Term → count mapping that remembers first-encountered order.
///
/// Entries live in a `Vec` in the order their term was first recorded; the
/// hash map only indexes into it. Iteration and ranking therefore never
/// depend on hash order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<TermCount>,
    index: FxHashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every item of `terms`.
    pub fn from_tokens<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for term in terms {
            table.record(term.as_ref());
        }
        table
    }

    /// Adds one occurrence of `term`, inserting it with a zero count first
    /// if it has not been seen.
    pub fn record(&mut self, term: &str) {
        let slot = match self.index.get(term) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.entries.push(TermCount::new(term, 0));
                self.index.insert(term.to_string(), slot);
                slot
            }
        };
        self.entries[slot].count += 1;
        self.total += 1;
    }

    /// Occurrences of `term`; zero when absent.
    pub fn count(&self, term: &str) -> usize {
        self.index
            .get(term)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the number of recorded occurrences.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Entries in first-encountered order.
    pub fn iter(&self) -> std::slice::Iter<'_, TermCount> {
        self.entries.iter()
    }

    /// Position of `term` in first-encountered order.
    pub fn first_seen(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a TermCount;
    type IntoIter = std::slice::Iter<'a, TermCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_occurrence() {
        let table = FrequencyTable::from_tokens(["sapere", "meraviglia", "del", "sapere"]);
        assert_eq!(table.count("sapere"), 2);
        assert_eq!(table.count("meraviglia"), 1);
        assert_eq!(table.count("del"), 1);
        assert_eq!(table.count("assente"), 0);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn iteration_follows_first_encounter() {
        let table: FrequencyTable = ["c", "a", "c", "b", "a", "c"].into_iter().collect();
        let order: Vec<&str> = table.iter().map(|e| e.term.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
        assert_eq!(table.first_seen("b"), Some(2));
        assert_eq!(table.first_seen("z"), None);
    }

    #[test]
    fn counts_sum_to_number_of_tokens() {
        let tokens: Vec<String> = "uno due tre due tre tre quattro"
            .split(' ')
            .map(String::from)
            .collect();
        let table = FrequencyTable::from_tokens(&tokens);
        let sum: usize = table.iter().map(|e| e.count).sum();
        assert_eq!(sum, tokens.len());
        assert_eq!(table.total(), tokens.len());
    }

    #[test]
    fn empty_table() {
        let table = FrequencyTable::from_tokens(Vec::<String>::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(!table.contains("x"));
    }

    #[test]
    fn counting_order_does_not_change_counts() {
        let forward = FrequencyTable::from_tokens(["a", "b", "a", "c", "b", "a"]);
        let backward = FrequencyTable::from_tokens(["a", "b", "c", "a", "b", "a"].iter().rev());
        for term in ["a", "b", "c"] {
            assert_eq!(forward.count(term), backward.count(term));
        }
    }
}
