//! Index structures for scoring. Each index is independent and rebuildable.

pub mod doc_frequencies;
pub mod term_index;

pub use doc_frequencies::{idf, DocFrequencies};
pub use term_index::TermIndex;
