//! Stop-word sets used by the bundled analyzers.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// Lucene-compatible English stop words (36 words).
/// Function words only: articles, prepositions, conjunctions, pronouns,
/// auxiliaries. No content words a user would search for.
static ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// High-frequency Chinese function words.
static CHINESE_STOPWORDS: &[&str] = &[
    "的", "了", "是", "在", "我", "有", "和", "就", "不", "人", "都", "一", "一个", "上", "也",
    "很", "到", "说", "要", "去", "你", "会", "着", "没有", "看", "好", "自己", "这", "那", "他",
    "她", "它", "们", "与", "及", "或", "而", "被", "把", "对", "从", "为", "于",
];

lazy_static! {
    pub static ref ENGLISH_STOPWORD_SET: HashSet<&'static str> =
        ENGLISH_STOPWORDS.iter().copied().collect();
    pub static ref CHINESE_STOPWORD_SET: HashSet<&'static str> =
        CHINESE_STOPWORDS.iter().copied().collect();
}
