//! Rendering of clustering results for people and for tools.

use std::fmt::Debug;
use std::io::Write;

use serde::Serialize;

use super::corpus::Corpus;
use crate::types::{Cluster, GroupResult};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Rendering options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Keep anchors that claimed no members.
    pub include_singletons: bool,
}

#[derive(Serialize)]
struct JsonCluster<'a, K> {
    anchor: &'a K,
    text: &'a str,
    members: Vec<JsonMember<'a, K>>,
}

#[derive(Serialize)]
struct JsonMember<'a, K> {
    key: &'a K,
    score: f64,
    text: &'a str,
}

/// Write `clusters` to `out` in the requested format.
pub fn render<K, W>(
    out: &mut W,
    corpus: &Corpus<K>,
    clusters: &[Cluster<K>],
    options: ReportOptions,
) -> GroupResult<()>
where
    K: Ord + Clone + Debug + Serialize,
    W: Write,
{
    let visible = clusters
        .iter()
        .filter(|c| options.include_singletons || !c.is_singleton());

    match options.format {
        ReportFormat::Text => {
            for cluster in visible {
                writeln!(
                    out,
                    "* {} ({})",
                    text_of(corpus, &cluster.anchor),
                    cluster.len()
                )?;
                for (member, score) in cluster.members_by_score() {
                    writeln!(out, "   *  {:.6}:  {}", score, text_of(corpus, member))?;
                }
            }
        }
        ReportFormat::Json => {
            let rows: Vec<JsonCluster<'_, K>> = visible
                .map(|cluster| JsonCluster {
                    anchor: &cluster.anchor,
                    text: text_of(corpus, &cluster.anchor),
                    members: cluster
                        .members_by_score()
                        .into_iter()
                        .map(|(key, score)| JsonMember {
                            key,
                            score,
                            text: text_of(corpus, key),
                        })
                        .collect(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &rows).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn text_of<'a, K: Ord + Clone + Debug>(corpus: &'a Corpus<K>, key: &K) -> &'a str {
    corpus.get(key).map(|d| d.text()).unwrap_or("")
}
