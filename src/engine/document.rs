//! A single record's term frequencies and its memoized TF-IDF vector.

use std::collections::BTreeMap;

use crate::index::DocFrequencies;
use crate::types::{GroupError, GroupResult};

/// One indexed record.
///
/// The TF-IDF vector is memoized on first use. The memo is only valid while the
/// document frequencies it was computed from are unchanged; the owning corpus
/// calls [`Document::invalidate`] whenever it loads or replaces a document.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    tf: BTreeMap<String, f64>,
    tf_idf: Option<BTreeMap<String, f64>>,
}

impl Document {
    /// Build from an already tokenized stream. Term frequency is
    /// `count(term) / tokens.len()`.
    pub fn from_tokens(text: impl Into<String>, tokens: &[String]) -> GroupResult<Self> {
        if tokens.is_empty() {
            return Err(GroupError::EmptyDocument);
        }

        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }

        let total = tokens.len() as f64;
        let tf = counts
            .into_iter()
            .map(|(term, count)| (term, count as f64 / total))
            .collect();

        Ok(Self {
            text: text.into(),
            tf,
            tf_idf: None,
        })
    }

    /// Raw record text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// term → frequency in (0, 1].
    pub fn tf(&self) -> &BTreeMap<String, f64> {
        &self.tf
    }

    /// Distinct terms, in ascending order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.tf.keys().map(String::as_str)
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.tf.len()
    }

    /// `ln(N / (1 + df(term)))` for every term of this document. Not memoized.
    pub fn idf(&self, frequencies: &DocFrequencies) -> BTreeMap<String, f64> {
        self.tf
            .keys()
            .map(|term| (term.clone(), frequencies.idf(term)))
            .collect()
    }

    /// `tf × idf` per term, memoized after the first call.
    pub fn tf_idf(&mut self, frequencies: &DocFrequencies) -> &BTreeMap<String, f64> {
        let tf = &self.tf;
        self.tf_idf.get_or_insert_with(|| weigh(tf, frequencies))
    }

    /// Recompute the TF-IDF vector regardless of the memo.
    pub fn refresh_tf_idf(&mut self, frequencies: &DocFrequencies) -> &BTreeMap<String, f64> {
        self.tf_idf = None;
        self.tf_idf(frequencies)
    }

    /// Memoized vector, if computed.
    pub fn cached_tf_idf(&self) -> Option<&BTreeMap<String, f64>> {
        self.tf_idf.as_ref()
    }

    /// Drop the memoized vector.
    pub fn invalidate(&mut self) {
        self.tf_idf = None;
    }
}

fn weigh(tf: &BTreeMap<String, f64>, frequencies: &DocFrequencies) -> BTreeMap<String, f64> {
    tf.iter()
        .map(|(term, tf)| (term.clone(), tf * frequencies.idf(term)))
        .collect()
}
