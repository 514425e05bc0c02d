//! Inverted index mapping terms to per-document TF-IDF weights.

use std::collections::{BTreeMap, HashMap};

/// term → {document key: weight}. Postings are ordered by key so traversal is
/// reproducible.
#[derive(Debug, Clone)]
pub struct TermIndex<K: Ord> {
    postings: HashMap<String, BTreeMap<K, f64>>,
    doc_count: usize,
}

impl<K: Ord + Clone> TermIndex<K> {
    /// Create an empty term index.
    pub fn new() -> Self {
        Self {
            postings: HashMap::new(),
            doc_count: 0,
        }
    }

    /// Build the index from `(key, weights)` pairs, one per document.
    pub fn build<'a, I, W>(documents: I) -> Self
    where
        K: 'a,
        I: IntoIterator<Item = (&'a K, W)>,
        W: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        let mut index = Self::new();
        for (key, weights) in documents {
            index.insert_document(key, weights);
        }
        index
    }

    /// Record every weight of one document.
    pub fn insert_document<'a, W>(&mut self, key: &K, weights: W)
    where
        W: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        for (term, weight) in weights {
            self.postings
                .entry(term.clone())
                .or_default()
                .insert(key.clone(), *weight);
        }
        self.doc_count += 1;
    }

    /// Look up a term's postings.
    pub fn get(&self, term: &str) -> Option<&BTreeMap<K, f64>> {
        self.postings.get(term)
    }

    /// Number of documents holding a posting for `term`.
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map(|p| p.len()).unwrap_or(0)
    }

    /// Total number of indexed documents.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of unique terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of (term, document) entries.
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(|p| p.len()).sum()
    }

    /// Whether no document has been indexed.
    pub fn is_empty(&self) -> bool {
        self.doc_count == 0
    }

    /// Clear the index.
    pub fn clear(&mut self) {
        self.postings.clear();
        self.doc_count = 0;
    }
}

impl<K: Ord + Clone> Default for TermIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}
