//! Tokenizer feeding document term frequencies.

use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer as RawStemmer};

use crate::types::TokenizerConfig;

/// Stop words to exclude from tokenization.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall", "can",
    "need", "must", "to", "of", "in", "for", "on", "with", "at", "by", "from", "as", "into",
    "about", "but", "not", "or", "and", "if", "it", "its", "this", "that", "which", "who", "what",
    "when", "where", "how", "all", "each", "both", "few", "more", "most", "other", "some", "such",
    "no", "than", "too", "very", "just", "also", "i", "me", "my", "we", "our", "you", "your",
    "he", "him", "his", "she", "her", "they", "them", "their", "there", "so", "then", "up", "out",
];

/// Characters stripped from both ends of every whitespace-separated word.
const EDGE_CHARS: &[char] = &[
    '\\', '.', '!', '?', ',', '(', ')', '{', '}', '[', ']', '"', '\'',
];

/// Reduces an inflected word to its stem.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// English Porter2 stemmer.
pub struct SnowballStemmer {
    inner: RawStemmer,
}

impl SnowballStemmer {
    /// Porter2 stemmer for English.
    pub fn english() -> Self {
        Self {
            inner: RawStemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

/// Leaves words untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStemmer;

impl Stemmer for NoStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Deterministic tokenizer: lowercase, edge punctuation stripped, stop words
/// removed, then stemmed.
pub struct Tokenizer {
    stop_words: HashSet<String>,
    stemmer: Box<dyn Stemmer>,
}

impl Tokenizer {
    /// Create a new tokenizer with the default stop word list and English stemming.
    pub fn new() -> Self {
        Self::with_parts(
            STOP_WORDS.iter().map(|s| s.to_string()),
            Box::new(SnowballStemmer::english()),
        )
    }

    /// Build from an explicit stop word set and stemmer.
    pub fn with_parts<I, S>(stop_words: I, stemmer: Box<dyn Stemmer>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stop_words: stop_words.into_iter().map(|s| s.into().to_lowercase()).collect(),
            stemmer,
        }
    }

    /// Build from configuration: built-in stop words plus extras, optional stemming.
    pub fn from_config(config: &TokenizerConfig) -> Self {
        let stemmer: Box<dyn Stemmer> = if config.stemming {
            Box::new(SnowballStemmer::english())
        } else {
            Box::new(NoStemmer)
        };
        let stop_words = STOP_WORDS
            .iter()
            .map(|s| s.to_string())
            .chain(config.extra_stop_words.iter().cloned());
        Self::with_parts(stop_words, stemmer)
    }

    /// Replace the stemmer.
    pub fn with_stemmer(mut self, stemmer: Box<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Whether `word` (already lowercased) is filtered as a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Lazily yield the normalized terms of `text`. Call again to restart.
    pub fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split_whitespace().filter_map(move |word| {
            let lower = word.to_lowercase();
            let stripped = lower.trim_matches(EDGE_CHARS);
            if stripped.is_empty() || self.stop_words.contains(stripped) {
                return None;
            }
            Some(self.stemmer.stem(stripped))
        })
    }

    /// Tokenize text into normalized terms.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokens(text).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
