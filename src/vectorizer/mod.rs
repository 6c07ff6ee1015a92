pub mod evaluate;
pub mod idf;
pub mod vectorize;
pub mod vocabulary;
pub mod weighting;

use tracing::{debug, info};

use crate::analysis::pos::PosTagger;
use crate::analysis::tokenizer::Analyzer;
use crate::corpus::Document;
use crate::error::EngineError;
use crate::vectorizer::evaluate::feedback;
use crate::vectorizer::evaluate::scoring::{self, Hits, SimilarityMetric, TermWeighting};
use crate::vectorizer::vocabulary::Vocabulary;

/// Vector-space model over one corpus.
///
/// `build` scans the document list once and owns everything derived
/// from it: the vocabulary, the IDF weights, one raw term-count vector
/// per document and the TF-IDF counterparts. Nothing is mutated
/// afterwards, so a built model can be shared read-only between any
/// number of concurrent searches; picking up corpus changes means
/// building a new model and swapping the reference.
///
/// The tokenizer variant is chosen once at build time. The engine only
/// sees the [`Analyzer`] contract and never branches on a language.
#[derive(Debug, Clone)]
pub struct VectorSpace<A: Analyzer> {
    analyzer: A,
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    doc_keys: Vec<String>,
    tf_vectors: Vec<Vec<f64>>,
    tfidf_vectors: Vec<Vec<f64>>,
}

impl<A: Analyzer> VectorSpace<A> {
    /// Create the vector space for the passed documents.
    ///
    /// Vocabulary and IDF are derived together from the same corpus
    /// scan; an empty corpus is valid and produces a zero-dimensional
    /// space where every similarity score is 0.
    pub fn build(analyzer: A, documents: &[Document]) -> Result<Self, EngineError> {
        let vocabulary = Vocabulary::build(&analyzer, documents);
        let idf = idf::compute_idf(&analyzer, documents, &vocabulary)?;

        let mut doc_keys = Vec::with_capacity(documents.len());
        let mut tf_vectors = Vec::with_capacity(documents.len());
        let mut tfidf_vectors = Vec::with_capacity(documents.len());
        for doc in documents {
            let tokens = analyzer.analyze(&doc.text);
            let tf = vectorize::term_count_vector(&tokens, &vocabulary);
            tfidf_vectors.push(weighting::tf_idf(&tf, &idf)?);
            tf_vectors.push(tf);
            doc_keys.push(doc.id.clone());
        }

        info!(
            documents = doc_keys.len(),
            vocabulary = vocabulary.len(),
            "vector space built"
        );
        Ok(Self {
            analyzer,
            vocabulary,
            idf,
            doc_keys,
            tf_vectors,
            tfidf_vectors,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn doc_count(&self) -> usize {
        self.doc_keys.len()
    }

    pub fn doc_keys(&self) -> &[String] {
        &self.doc_keys
    }

    /// Raw term-count vector of the document at `index`.
    pub fn tf_vector(&self, index: usize) -> Option<&[f64]> {
        self.tf_vectors.get(index).map(|v| v.as_slice())
    }

    /// TF-IDF vector of the document at `index`.
    pub fn tfidf_vector(&self, index: usize) -> Option<&[f64]> {
        self.tfidf_vectors.get(index).map(|v| v.as_slice())
    }

    /// Vectorize raw text exactly like a corpus document.
    pub fn vectorize_text(&self, text: &str) -> Vec<f64> {
        let tokens = self.analyzer.analyze(text);
        vectorize::term_count_vector(&tokens, &self.vocabulary)
    }

    /// Vectorize an already tokenized input, counting vocabulary hits.
    pub fn vectorize_tokens<T: AsRef<str>>(&self, tokens: &[T]) -> Vec<f64> {
        vectorize::term_count_vector(tokens, &self.vocabulary)
    }

    /// Query vector restricted to content-bearing (noun/verb) tokens.
    ///
    /// Used for noisy feedback text, where function words would drown
    /// the expansion terms.
    pub fn filtered_query_vector<P: PosTagger>(&self, tokens: &[String], tagger: &P) -> Vec<f64> {
        let kept: Vec<String> = tagger
            .tag(tokens)
            .into_iter()
            .filter(|(_, tag)| tag.is_content_bearing())
            .map(|(token, _)| token)
            .collect();
        self.vectorize_tokens(&kept)
    }

    fn vectors_for(&self, weighting: TermWeighting) -> &[Vec<f64>] {
        match weighting {
            TermWeighting::TermFrequency => &self.tf_vectors,
            TermWeighting::TfIdf => &self.tfidf_vectors,
        }
    }

    /// Search with a raw text query.
    pub fn search_text(
        &self,
        query: &str,
        metric: SimilarityMetric,
        weighting: TermWeighting,
    ) -> Result<Hits, EngineError> {
        let query_vector = self.vectorize_text(query);
        self.search_vector(&query_vector, metric, weighting)
    }

    /// Search with an already tokenized query.
    pub fn search_tokens<T: AsRef<str>>(
        &self,
        tokens: &[T],
        metric: SimilarityMetric,
        weighting: TermWeighting,
    ) -> Result<Hits, EngineError> {
        let query_vector = self.vectorize_tokens(tokens);
        self.search_vector(&query_vector, metric, weighting)
    }

    /// Score a prepared query vector against every document and rank
    /// the hits for the metric.
    pub fn search_vector(
        &self,
        query_vector: &[f64],
        metric: SimilarityMetric,
        weighting: TermWeighting,
    ) -> Result<Hits, EngineError> {
        let scores = scoring::score(query_vector, self.vectors_for(weighting), metric)?;
        let mut hits = Hits::from_scores(&self.doc_keys, scores);
        hits.rank(metric);
        debug!(?metric, hits = hits.list.len(), "query scored");
        Ok(hits)
    }

    /// One round of relevance feedback.
    ///
    /// Blends the original query with the noun/verb terms of a document
    /// judged relevant, then scores the expanded query against the
    /// TF-IDF vectors with cosine similarity (the only combination this
    /// path supports).
    pub fn search_with_feedback<P: PosTagger>(
        &self,
        query: &str,
        feedback_text: &str,
        tagger: &P,
    ) -> Result<Hits, EngineError> {
        let original = self.vectorize_text(query);
        let feedback_tokens = self.analyzer.analyze(feedback_text);
        let feedback_vector = self.filtered_query_vector(&feedback_tokens, tagger);
        let expanded = feedback::expand(&original, &feedback_vector)?;
        self.search_vector(&expanded, SimilarityMetric::Cosine, TermWeighting::TfIdf)
    }

    /// Documents related to the document at `index`, by cosine over the
    /// raw term-count vectors.
    pub fn related(&self, index: usize) -> Result<Hits, EngineError> {
        let query_vector =
            self.tf_vectors
                .get(index)
                .ok_or(EngineError::DocumentOutOfRange {
                    index,
                    len: self.doc_keys.len(),
                })?;
        self.search_vector(query_vector, SimilarityMetric::Cosine, TermWeighting::TermFrequency)
    }
}
