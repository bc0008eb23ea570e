use crate::table::{FrequencyTable, TermCount};

impl FrequencyTable {
    /// The `n` most frequent terms, highest count first.
    ///
    /// Terms with equal counts keep first-encountered order: entries are
    /// already stored that way and `sort_by` is stable. Returns every term
    /// when there are fewer than `n`, and nothing for an empty table.
    pub fn top_n(&self, n: usize) -> Vec<TermCount> {
        if n == 0 || self.is_empty() {
            return Vec::new();
        }
        let mut ranked: Vec<&TermCount> = self.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.into_iter().take(n).cloned().collect()
    }

    /// All terms ranked, same ordering as [`top_n`](Self::top_n).
    pub fn ranked(&self) -> Vec<TermCount> {
        self.top_n(self.len())
    }
}
