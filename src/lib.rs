//! Groups short free-text records (support tickets, bug reports) into clusters
//! of near-duplicates.
//!
//! Records are tokenized, weighted with TF-IDF over the whole collection and
//! placed in an inverted index. A greedy single pass then picks anchors in key
//! order and pulls in every unclaimed record whose weighted term overlap with the
//! anchor reaches the similarity threshold.
//!
//! ```
//! use issue_grouper::{ClusterEngine, Corpus};
//!
//! let mut corpus: Corpus<u64> = Corpus::new();
//! corpus.load(1, "server crashed during login");
//! corpus.load(2, "server crashes during login");
//! let clusters = ClusterEngine::new(0.0).cluster(&mut corpus);
//! assert_eq!(clusters.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod engine;
pub mod index;
pub mod reader;
pub mod types;

pub use engine::{
    cluster, render, ClusterEngine, Corpus, Document, LoadOutcome, LoadStats, NoStemmer,
    ReportFormat, ReportOptions, SnowballStemmer, Stemmer, Tokenizer,
};
pub use index::{DocFrequencies, TermIndex};
pub use reader::{parse_delimiter, RecordReader, Records};
pub use types::{
    Cluster, ClusterConfig, ClusterSummary, GroupError, GroupResult, TokenizerConfig,
    DEFAULT_MIN_DOCUMENT_LENGTH, DEFAULT_SIM_THRESHOLD,
};
