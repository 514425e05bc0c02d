//! Greedy single-pass star clustering over the inverted index.
//!
//! Documents are visited in ascending key order. An unclaimed document becomes an
//! anchor and scores every unclaimed document sharing a term with it as
//! `Σ w_anchor(t) · w_candidate(t)`. Candidates scoring at least the threshold join
//! the anchor and are never considered again, as anchors or as members. Groups
//! are not merged transitively.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use log::info;

use super::corpus::Corpus;
use crate::types::{Cluster, ClusterConfig, ClusterSummary, DEFAULT_SIM_THRESHOLD};

/// Partitions an indexed corpus into similarity groups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterEngine {
    sim_threshold: f64,
}

impl ClusterEngine {
    /// Engine grouping candidates whose score is at least `sim_threshold`.
    pub fn new(sim_threshold: f64) -> Self {
        Self { sim_threshold }
    }

    /// Engine using the configured threshold.
    pub fn from_config(config: &ClusterConfig) -> Self {
        Self::new(config.sim_threshold)
    }

    /// Minimum score, inclusive.
    pub fn sim_threshold(&self) -> f64 {
        self.sim_threshold
    }

    /// Build the index if needed, then cluster.
    ///
    /// Every document appears exactly once in the result: as an anchor (possibly
    /// with no members) or as a member of one anchor. Groups are ordered by
    /// member count descending, then anchor key ascending.
    pub fn cluster<K: Ord + Clone + Debug>(&self, corpus: &mut Corpus<K>) -> Vec<Cluster<K>> {
        corpus.ensure_index();
        self.cluster_indexed(corpus)
    }

    /// Cluster a corpus whose index is already built. An unindexed corpus yields
    /// an empty result.
    pub fn cluster_indexed<K: Ord + Clone + Debug>(&self, corpus: &Corpus<K>) -> Vec<Cluster<K>> {
        if !corpus.is_indexed() {
            return Vec::new();
        }

        let index = corpus.index();
        let no_weights = BTreeMap::new();
        let mut seen: BTreeSet<K> = BTreeSet::new();
        let mut clusters = Vec::new();

        for (key, document) in corpus.iter() {
            if seen.contains(key) {
                continue;
            }
            seen.insert(key.clone());

            let mut scores: BTreeMap<K, f64> = BTreeMap::new();
            let weights = document.cached_tf_idf().unwrap_or(&no_weights);
            for (term, anchor_weight) in weights {
                let Some(postings) = index.get(term) else {
                    continue;
                };
                for (candidate, candidate_weight) in postings {
                    if seen.contains(candidate) {
                        continue;
                    }
                    *scores.entry(candidate.clone()).or_insert(0.0) +=
                        anchor_weight * candidate_weight;
                }
            }

            scores.retain(|_, score| *score >= self.sim_threshold);
            seen.extend(scores.keys().cloned());
            clusters.push(Cluster {
                anchor: key.clone(),
                members: scores,
            });
        }

        sort_clusters(&mut clusters);

        let summary = ClusterSummary::from_clusters(&clusters);
        info!(
            "clustered {} documents into {} groups ({} singletons, threshold {})",
            summary.documents, summary.clusters, summary.singletons, self.sim_threshold
        );

        clusters
    }

    /// Score `candidate` against `anchor` the way the clustering pass would,
    /// ignoring which documents are already claimed.
    pub fn score<K: Ord + Clone + Debug>(
        &self,
        corpus: &Corpus<K>,
        anchor: &K,
        candidate: &K,
    ) -> Option<f64> {
        if !corpus.is_indexed() {
            return None;
        }
        let weights = corpus.get(anchor)?.cached_tf_idf()?;
        let index = corpus.index();
        corpus.get(candidate)?;

        let mut score = 0.0;
        for (term, anchor_weight) in weights {
            if let Some(candidate_weight) = index.get(term).and_then(|p| p.get(candidate)) {
                score += anchor_weight * candidate_weight;
            }
        }
        Some(score)
    }
}

impl Default for ClusterEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SIM_THRESHOLD)
    }
}

/// Member count descending, then anchor ascending.
fn sort_clusters<K: Ord>(clusters: &mut [Cluster<K>]) {
    clusters.sort_by(|a, b| match b.len().cmp(&a.len()) {
        Ordering::Equal => a.anchor.cmp(&b.anchor),
        other => other,
    });
}

/// Index and cluster `corpus` with the configured threshold.
pub fn cluster<K: Ord + Clone + Debug>(
    corpus: &mut Corpus<K>,
    config: &ClusterConfig,
) -> Vec<Cluster<K>> {
    ClusterEngine::from_config(config).cluster(corpus)
}
