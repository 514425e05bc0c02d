//! Corpus-wide document frequency table for IDF weighting.

use std::collections::HashMap;

/// term → number of indexed documents containing it, plus the indexed document count.
///
/// Counts change only through [`DocFrequencies::add_document`] and
/// [`DocFrequencies::remove_document`], which the corpus calls with a document's
/// distinct terms.
#[derive(Debug, Default, Clone)]
pub struct DocFrequencies {
    counts: HashMap<String, u64>,
    doc_count: u64,
}

impl DocFrequencies {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one document's distinct terms.
    pub fn add_document<'a, I>(&mut self, terms: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for term in terms {
            *self.counts.entry(term.to_string()).or_insert(0) += 1;
        }
        self.doc_count += 1;
    }

    /// Uncount a document previously passed to `add_document`.
    pub fn remove_document<'a, I>(&mut self, terms: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for term in terms {
            if let Some(count) = self.counts.get_mut(term) {
                if *count > 1 {
                    *count -= 1;
                } else {
                    self.counts.remove(term);
                }
            }
        }
        self.doc_count = self.doc_count.saturating_sub(1);
    }

    /// Number of indexed documents containing `term`.
    pub fn get(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of indexed documents.
    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    /// Number of unique terms.
    pub fn term_count(&self) -> usize {
        self.counts.len()
    }

    /// `ln(N / (1 + df))` for the current state.
    pub fn idf(&self, term: &str) -> f64 {
        idf(self.doc_count, self.get(term))
    }

    /// Clear all counts.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.doc_count = 0;
    }
}

/// Inverse document frequency from a document count and a document frequency.
pub fn idf(doc_count: u64, doc_frequency: u64) -> f64 {
    (doc_count as f64 / (1.0 + doc_frequency as f64)).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_remove_restores_counts() {
        let mut df = DocFrequencies::new();
        df.add_document(["server", "crash"]);
        df.add_document(["server", "login"]);
        assert_eq!(df.get("server"), 2);
        assert_eq!(df.doc_count(), 2);

        df.remove_document(["server", "login"]);
        assert_eq!(df.get("server"), 1);
        assert_eq!(df.get("login"), 0);
        assert_eq!(df.term_count(), 2);
        assert_eq!(df.doc_count(), 1);
    }

    #[test]
    fn idf_never_increases_with_df() {
        let mut previous = f64::INFINITY;
        for df in 0..20 {
            let value = idf(10, df);
            assert!(value <= previous);
            previous = value;
        }
    }

    #[test]
    fn idf_is_zero_when_df_plus_one_equals_n() {
        assert_eq!(idf(4, 3), 0.0);
    }
}
