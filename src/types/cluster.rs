//! Output types of the clustering pass.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

/// One group: an anchor document and the members it claimed, keyed to their score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster<K: Ord> {
    pub anchor: K,
    pub members: BTreeMap<K, f64>,
}

impl<K: Ord> Cluster<K> {
    /// Number of members, excluding the anchor.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the anchor claimed no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Alias of [`Cluster::is_empty`] in report vocabulary.
    pub fn is_singleton(&self) -> bool {
        self.is_empty()
    }

    /// Members ordered by score descending, then key ascending.
    pub fn members_by_score(&self) -> Vec<(&K, f64)> {
        let mut members: Vec<(&K, f64)> = self.members.iter().map(|(k, s)| (k, *s)).collect();
        members.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        members
    }
}

/// Aggregate counts over a clustering result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClusterSummary {
    /// Indexed documents (anchors plus members).
    pub documents: usize,
    /// Groups with at least one member.
    pub clusters: usize,
    /// Anchors that claimed nothing.
    pub singletons: usize,
    /// Documents inside a non-singleton group, anchors included.
    pub clustered_documents: usize,
}

impl ClusterSummary {
    /// Summarize an engine result.
    pub fn from_clusters<K: Ord>(clusters: &[Cluster<K>]) -> Self {
        let mut summary = Self::default();
        for cluster in clusters {
            summary.documents += 1 + cluster.len();
            if cluster.is_singleton() {
                summary.singletons += 1;
            } else {
                summary.clusters += 1;
                summary.clustered_documents += 1 + cluster.len();
            }
        }
        summary
    }

    /// Fraction of documents left alone, 0.0 for an empty result.
    pub fn isolation_rate(&self) -> f64 {
        if self.documents == 0 {
            0.0
        } else {
            self.singletons as f64 / self.documents as f64
        }
    }
}
