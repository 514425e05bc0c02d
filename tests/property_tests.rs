use std::collections::BTreeSet;

use issue_grouper::{ClusterEngine, Corpus, NoStemmer, Tokenizer};
use proptest::prelude::*;

const VOCAB: &[&str] = &[
    "server", "login", "crash", "refund", "payment", "printer", "timeout", "email", "password",
    "upload",
];

fn corpus_from(docs: &[Vec<usize>]) -> Corpus<u64> {
    let tokenizer = Tokenizer::with_parts(std::iter::empty::<&str>(), Box::new(NoStemmer));
    let mut corpus = Corpus::with_tokenizer(tokenizer, 3);
    for (key, words) in docs.iter().enumerate() {
        let text: Vec<&str> = words.iter().map(|&i| VOCAB[i]).collect();
        corpus.load(key as u64, &text.join(" "));
    }
    corpus
}

fn docs_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0..VOCAB.len(), 0..8), 0..30)
}

proptest! {
    #[test]
    fn prop_every_document_placed_exactly_once(
        docs in docs_strategy(),
        threshold in -0.5f64..0.5
    ) {
        let mut corpus = corpus_from(&docs);
        let clusters = ClusterEngine::new(threshold).cluster(&mut corpus);

        let mut placed = BTreeSet::new();
        for cluster in &clusters {
            prop_assert!(placed.insert(cluster.anchor));
            for (member, score) in &cluster.members {
                prop_assert!(placed.insert(*member));
                prop_assert!(*score >= threshold);
            }
        }
        let keys: BTreeSet<u64> = corpus.keys().copied().collect();
        prop_assert_eq!(placed, keys);
    }

    #[test]
    fn prop_clustering_is_deterministic(
        docs in docs_strategy(),
        threshold in -0.5f64..0.5
    ) {
        let engine = ClusterEngine::new(threshold);
        let first = engine.cluster(&mut corpus_from(&docs));
        let second = engine.cluster(&mut corpus_from(&docs));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_output_sorted_by_size_then_anchor(
        docs in docs_strategy(),
        threshold in -0.5f64..0.5
    ) {
        let clusters = ClusterEngine::new(threshold).cluster(&mut corpus_from(&docs));
        for pair in clusters.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.len() > b.len() || (a.len() == b.len() && a.anchor < b.anchor));
        }
    }

    #[test]
    fn prop_doc_frequency_never_decreases(docs in docs_strategy()) {
        let tokenizer = Tokenizer::with_parts(std::iter::empty::<&str>(), Box::new(NoStemmer));
        let mut corpus: Corpus<u64> = Corpus::with_tokenizer(tokenizer, 3);
        let mut previous: Vec<u64> = vec![0; VOCAB.len()];
        for (key, words) in docs.iter().enumerate() {
            let text: Vec<&str> = words.iter().map(|&i| VOCAB[i]).collect();
            corpus.load(key as u64, &text.join(" "));
            for (slot, term) in VOCAB.iter().enumerate() {
                let df = corpus.doc_frequency(term);
                prop_assert!(df >= previous[slot]);
                previous[slot] = df;
            }
        }
    }

    #[test]
    fn prop_term_frequencies_in_unit_interval(docs in docs_strategy()) {
        let corpus = corpus_from(&docs);
        for (_, document) in corpus.iter() {
            prop_assert!(document.term_count() >= 3);
            for &tf in document.tf().values() {
                prop_assert!(tf > 0.0 && tf <= 1.0);
            }
        }
    }
}
