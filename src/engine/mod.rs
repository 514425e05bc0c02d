//! Tokenization, document weighting, corpus indexing and clustering.

pub mod cluster;
pub mod corpus;
pub mod document;
pub mod report;
pub mod tokenizer;

pub use cluster::{cluster, ClusterEngine};
pub use corpus::{Corpus, LoadOutcome, LoadStats};
pub use document::Document;
pub use report::{render, ReportFormat, ReportOptions};
pub use tokenizer::{NoStemmer, SnowballStemmer, Stemmer, Tokenizer};
