//! This crate is a search and ranking engine built on the vector space
//! model.
pub mod analysis;
pub mod corpus;
pub mod error;
pub mod vectorizer;

/// Vector Space engine
/// The top-level struct of this crate. It converts a document
/// collection into term-count and TF-IDF vectors over a corpus
/// vocabulary and ranks documents against a query by similarity.
///
/// Internally, it holds:
/// - The corpus vocabulary (term to dense index)
/// - One raw term-count vector per document
/// - The derived TF-IDF vectors
/// - The IDF weight vector
///
/// `VectorSpace<A>` is generic over the tokenizer collaborator `A`,
/// chosen once at build time. All fields are immutable after `build`;
/// a built engine can be shared read-only, and a corpus change means
/// building a new engine and swapping the reference.
pub use vectorizer::VectorSpace;

/// Corpus vocabulary
/// Term to dense-index mapping with deterministic first-seen ordering.
/// Every document, query and IDF vector of a given build has exactly
/// this length.
pub use vectorizer::vocabulary::Vocabulary;

/// Similarity metrics and search results
/// - `SimilarityMetric`: cosine similarity or Euclidean distance
/// - `TermWeighting`: score against raw counts or TF-IDF vectors
/// - `Hits` / `HitEntry`: ranked results with stable tie-breaking
pub use vectorizer::evaluate::scoring::{HitEntry, Hits, SimilarityMetric, TermWeighting};

/// Tokenizer collaborators
/// The `Analyzer` trait is the contract the engine is built against;
/// `StemmingAnalyzer` (Snowball English) and `SegmentingAnalyzer`
/// (jieba) are the two bundled variants.
pub use analysis::tokenizer::{Analyzer, SegmentingAnalyzer, StemmingAnalyzer};

/// Part-of-speech collaborator used by the relevance-feedback path.
pub use analysis::pos::{HeuristicTagger, PosTag, PosTagger};

/// One corpus document: identifier plus raw text.
pub use corpus::Document;

pub use error::EngineError;
