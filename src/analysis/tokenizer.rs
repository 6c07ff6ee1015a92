//! Tokenizer collaborators: a stemming variant and a segmentation
//! variant behind one capability trait.

use jieba_rs::Jieba;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::stopwords::{CHINESE_STOPWORD_SET, ENGLISH_STOPWORD_SET};

/// Contract every tokenizer variant satisfies.
///
/// The engine is built against this trait once and never inspects which
/// language it is holding. `tokenize` turns raw text into a normalized
/// token sequence (order preserving, punctuation dropped, stemmed or
/// segmented as the variant sees fit); `remove_stopwords` drops tokens
/// with no search value.
pub trait Analyzer {
    fn tokenize(&self, text: &str) -> Vec<String>;

    fn remove_stopwords(&self, tokens: Vec<String>) -> Vec<String>;

    /// Full pipeline: tokenize, then remove stop-words.
    fn analyze(&self, text: &str) -> Vec<String> {
        self.remove_stopwords(self.tokenize(text))
    }
}

/// English analyzer: Unicode word segmentation, lowercasing, Snowball
/// stemming.
pub struct StemmingAnalyzer {
    stemmer: Stemmer,
}

impl StemmingAnalyzer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for StemmingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StemmingAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(|word| self.stemmer.stem(&word.to_lowercase()).into_owned())
            .collect()
    }

    fn remove_stopwords(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !ENGLISH_STOPWORD_SET.contains(token.as_str()))
            .collect()
    }
}

/// CJK analyzer: jieba word segmentation, punctuation dropped.
pub struct SegmentingAnalyzer {
    segmenter: Jieba,
}

impl SegmentingAnalyzer {
    pub fn new() -> Self {
        Self {
            segmenter: Jieba::new(),
        }
    }
}

impl Default for SegmentingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for SegmentingAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.segmenter
            .cut(text, false)
            .into_iter()
            .filter(|word| word.chars().any(|c| c.is_alphanumeric()))
            .map(|word| word.to_lowercase())
            .collect()
    }

    fn remove_stopwords(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !CHINESE_STOPWORD_SET.contains(token.as_str()))
            .collect()
    }
}
