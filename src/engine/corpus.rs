//! Document store, document frequencies and the inverted index.

use std::collections::BTreeMap;
use std::fmt::Debug;

use log::{debug, info};

use super::document::Document;
use super::tokenizer::Tokenizer;
use crate::index::{DocFrequencies, TermIndex};
use crate::types::{ClusterConfig, DEFAULT_MIN_DOCUMENT_LENGTH};

/// What happened to a record passed to [`Corpus::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Stored under a new key.
    Indexed,
    /// Stored, replacing an earlier document with the same key.
    Replaced,
    /// Fewer distinct terms than the minimum. Any earlier document under the
    /// same key has been removed.
    TooShort,
}

/// Counts from a batch of loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub indexed: usize,
    pub replaced: usize,
    pub too_short: usize,
}

impl LoadStats {
    fn record(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Indexed => self.indexed += 1,
            LoadOutcome::Replaced => self.replaced += 1,
            LoadOutcome::TooShort => self.too_short += 1,
        }
    }
}

/// Owns every indexed document, the corpus-wide document frequencies, and the
/// inverted index built from them.
///
/// Documents are kept ordered by key, which fixes the traversal order used by
/// clustering. Loading after [`Corpus::create_index`] drops the index and every
/// memoized TF-IDF vector, since both depend on the document frequencies.
///
/// A key loaded twice is overwritten: the old document's terms are uncounted
/// before the new text is filtered and counted.
pub struct Corpus<K: Ord> {
    documents: BTreeMap<K, Document>,
    frequencies: DocFrequencies,
    index: TermIndex<K>,
    indexed: bool,
    /// Some document may hold a memoized TF-IDF vector.
    weighted: bool,
    tokenizer: Tokenizer,
    min_document_length: usize,
}

impl<K: Ord + Clone + Debug> Corpus<K> {
    /// Create an empty corpus with the default tokenizer and minimum length.
    pub fn new() -> Self {
        Self::with_tokenizer(Tokenizer::new(), DEFAULT_MIN_DOCUMENT_LENGTH)
    }

    /// Create an empty corpus with an explicit tokenizer and minimum length.
    pub fn with_tokenizer(tokenizer: Tokenizer, min_document_length: usize) -> Self {
        Self {
            documents: BTreeMap::new(),
            frequencies: DocFrequencies::new(),
            index: TermIndex::new(),
            indexed: false,
            weighted: false,
            tokenizer,
            min_document_length,
        }
    }

    /// Create an empty corpus from configuration.
    pub fn from_config(config: &ClusterConfig) -> Self {
        Self::with_tokenizer(
            Tokenizer::from_config(&config.tokenizer),
            config.min_document_length,
        )
    }

    /// Add a record. Records with fewer distinct terms than the minimum are
    /// dropped before term frequencies are computed.
    pub fn load(&mut self, key: K, text: &str) -> LoadOutcome {
        self.thaw();

        let replaced = match self.documents.remove(&key) {
            Some(old) => {
                debug!("replacing document {:?}", key);
                self.frequencies.remove_document(old.terms());
                true
            }
            None => false,
        };

        let tokens = self.tokenizer.tokenize(text);
        let mut distinct: Vec<&String> = tokens.iter().collect();
        distinct.sort();
        distinct.dedup();
        if distinct.len() < self.min_document_length.max(1) {
            debug!(
                "dropping document {:?}: {} distinct terms, need {}",
                key,
                distinct.len(),
                self.min_document_length
            );
            return LoadOutcome::TooShort;
        }

        let document = match Document::from_tokens(text, &tokens) {
            Ok(document) => document,
            Err(_) => return LoadOutcome::TooShort,
        };
        self.frequencies.add_document(document.terms());
        self.documents.insert(key, document);

        if replaced {
            LoadOutcome::Replaced
        } else {
            LoadOutcome::Indexed
        }
    }

    /// Load a batch of records in order.
    pub fn load_all<I, S>(&mut self, records: I) -> LoadStats
    where
        I: IntoIterator<Item = (K, S)>,
        S: AsRef<str>,
    {
        let mut stats = LoadStats::default();
        for (key, text) in records {
            stats.record(self.load(key, text.as_ref()));
        }
        stats
    }

    /// Build the inverted index from scratch over the current documents.
    /// Calling it again rebuilds; it never appends to a previous index.
    pub fn create_index(&mut self) {
        self.index.clear();
        for (key, document) in self.documents.iter_mut() {
            let weights = document.refresh_tf_idf(&self.frequencies);
            self.index.insert_document(key, weights);
        }
        self.indexed = true;
        self.weighted = true;
        info!(
            "indexed {} documents, {} terms, {} postings",
            self.index.doc_count(),
            self.index.term_count(),
            self.index.posting_count()
        );
    }

    /// Build the index unless it is current.
    pub fn ensure_index(&mut self) {
        if !self.indexed {
            self.create_index();
        }
    }

    /// Whether the index reflects the current documents.
    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    /// The inverted index. Empty until [`Corpus::create_index`] runs.
    pub fn index(&self) -> &TermIndex<K> {
        &self.index
    }

    /// Corpus-wide document frequencies.
    pub fn frequencies(&self) -> &DocFrequencies {
        &self.frequencies
    }

    /// Document frequency of one term.
    pub fn doc_frequency(&self, term: &str) -> u64 {
        self.frequencies.get(term)
    }

    /// IDF of every term in the document stored under `key`.
    pub fn idf(&self, key: &K) -> Option<BTreeMap<String, f64>> {
        self.documents.get(key).map(|d| d.idf(&self.frequencies))
    }

    /// TF-IDF vector of the document under `key`, memoized.
    pub fn tf_idf(&mut self, key: &K) -> Option<&BTreeMap<String, f64>> {
        self.weighted = true;
        let frequencies = &self.frequencies;
        self.documents.get_mut(key).map(|d| d.tf_idf(frequencies))
    }

    /// Recompute the TF-IDF vector of the document under `key`, ignoring any
    /// memoized value. The index is not touched; call [`Corpus::create_index`]
    /// to rebuild it.
    pub fn refresh_tf_idf(&mut self, key: &K) -> Option<&BTreeMap<String, f64>> {
        self.weighted = true;
        let frequencies = &self.frequencies;
        self.documents.get_mut(key).map(|d| d.refresh_tf_idf(frequencies))
    }

    /// Document stored under `key`.
    pub fn get(&self, key: &K) -> Option<&Document> {
        self.documents.get(key)
    }

    /// Whether a document is stored under `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.documents.contains_key(key)
    }

    /// Documents in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Document)> {
        self.documents.iter()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.documents.keys()
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no document passed the length filter.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Minimum distinct terms a record needs to be stored.
    pub fn min_document_length(&self) -> usize {
        self.min_document_length
    }

    /// Tokenizer applied by [`Corpus::load`].
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Drop everything derived from the current document frequencies.
    fn thaw(&mut self) {
        if self.weighted {
            for document in self.documents.values_mut() {
                document.invalidate();
            }
            self.weighted = false;
        }
        if self.indexed {
            self.index.clear();
            self.indexed = false;
        }
    }
}

impl<K: Ord + Clone + Debug> Default for Corpus<K> {
    fn default() -> Self {
        Self::new()
    }
}
