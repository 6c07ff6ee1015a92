use std::fmt::{self, Debug};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Enum for similarity metrics used in search queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimilarityMetric {
    /// Cosine similarity
    /// Considers only direction; higher is more similar
    Cosine,
    /// Euclidean distance
    /// Straight-line distance; lower is more similar
    Euclidean,
}

impl SimilarityMetric {
    /// true when larger scores mean better matches
    pub fn descending(self) -> bool {
        matches!(self, SimilarityMetric::Cosine)
    }
}

impl FromStr for SimilarityMetric {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cosine" => Ok(SimilarityMetric::Cosine),
            "euclidean" => Ok(SimilarityMetric::Euclidean),
            _ => Err(EngineError::UnknownMetric {
                name: s.to_string(),
            }),
        }
    }
}

/// Which vector set a search scores against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermWeighting {
    /// Raw term counts
    TermFrequency,
    /// Counts scaled by inverse document frequency
    TfIdf,
}

/// cosθ = A・B / (|A||B|)
///
/// Defined as 0 when either norm is 0, so empty vectors and queries
/// with no vocabulary overlap score instead of raising.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// ‖a − b‖, the L2 distance.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Score a query vector against every document vector, returning one
/// scalar per vector in input order.
///
/// The function is agnostic about where the vectors came from (raw
/// counts or TF-IDF); any length mismatch with the query is a contract
/// violation and fails fast.
pub fn score(
    query: &[f64],
    vectors: &[Vec<f64>],
    metric: SimilarityMetric,
) -> Result<Vec<f64>, EngineError> {
    for vector in vectors {
        if vector.len() != query.len() {
            return Err(EngineError::DimensionMismatch {
                expected: query.len(),
                actual: vector.len(),
            });
        }
    }
    Ok(vectors
        .iter()
        .map(|vector| match metric {
            SimilarityMetric::Cosine => cosine(query, vector),
            SimilarityMetric::Euclidean => euclidean(query, vector),
        })
        .collect())
}

/// A single result entry, document key plus score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitEntry {
    pub key: String,
    pub score: f64,
}

/// Structure to store search results
#[derive(Clone, Serialize, Deserialize)]
pub struct Hits {
    /// Entries in corpus order until one of the sorts is applied
    pub list: Vec<HitEntry>,
}

impl Hits {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Pair corpus keys with their scores, keeping corpus order.
    pub fn from_scores(keys: &[String], scores: Vec<f64>) -> Self {
        Hits {
            list: keys
                .iter()
                .cloned()
                .zip(scores)
                .map(|(key, score)| HitEntry { key, score })
                .collect(),
        }
    }

    /// Sort results by descending score.
    /// The sort is stable, so equal scores keep corpus order.
    pub fn sort_by_score(&mut self) -> &mut Self {
        self.list.retain(|entry| !entry.score.is_nan());
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Sort results by ascending score (distance metrics).
    pub fn sort_by_score_rev(&mut self) -> &mut Self {
        self.list.retain(|entry| !entry.score.is_nan());
        self.list.sort_by(|a, b| a.score.total_cmp(&b.score));
        self
    }

    /// Rank according to the metric's notion of better: descending for
    /// similarity, ascending for distance.
    pub fn rank(&mut self, metric: SimilarityMetric) -> &mut Self {
        if metric.descending() {
            self.sort_by_score()
        } else {
            self.sort_by_score_rev()
        }
    }

    /// The best `n` entries (fewer when the corpus is smaller).
    pub fn top(&self, n: usize) -> &[HitEntry] {
        &self.list[..self.list.len().min(n)]
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for entry in &self.list {
                writeln!(f, "    {}: {:.5}", entry.key, entry.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|entry| (&entry.key, entry.score)))
                .finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_self_is_one() {
        let v = [1.0, 2.0, 3.0];
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        let v = [1.0, 2.0, 3.0];
        let zero = [0.0, 0.0, 0.0];
        assert_eq!(cosine(&v, &zero), 0.0);
        assert_eq!(cosine(&zero, &zero), 0.0);
    }

    #[test]
    fn test_cosine_empty_vectors() {
        assert_eq!(cosine(&[], &[]), 0.0);
    }

    #[test]
    fn test_euclidean_self_is_zero() {
        let v = [1.0, 2.0, 3.0];
        assert_eq!(euclidean(&v, &v), 0.0);
    }

    #[test]
    fn test_euclidean_known_distance() {
        assert!((euclidean(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_order_matches_input() {
        let vectors = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let scores = score(&[1.0, 0.0], &vectors, SimilarityMetric::Cosine).unwrap();
        assert!((scores[0] - 1.0).abs() < 1e-12);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn test_score_dimension_mismatch() {
        let vectors = vec![vec![1.0, 0.0, 0.0]];
        let result = score(&[1.0, 0.0], &vectors, SimilarityMetric::Cosine);
        assert!(matches!(
            result,
            Err(EngineError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_metric_from_str() {
        assert_eq!(
            "cosine".parse::<SimilarityMetric>().unwrap(),
            SimilarityMetric::Cosine
        );
        assert_eq!(
            "Euclidean".parse::<SimilarityMetric>().unwrap(),
            SimilarityMetric::Euclidean
        );
        assert!(matches!(
            "manhattan".parse::<SimilarityMetric>(),
            Err(EngineError::UnknownMetric { name }) if name == "manhattan"
        ));
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let keys = vec!["d1".to_string(), "d2".to_string(), "d3".to_string()];
        let mut hits = Hits::from_scores(&keys, vec![0.5, 0.9, 0.5]);
        hits.sort_by_score();
        let order: Vec<&str> = hits.list.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(order, vec!["d2", "d1", "d3"]);
    }

    #[test]
    fn test_top_clamps_to_len() {
        let keys = vec!["d1".to_string()];
        let hits = Hits::from_scores(&keys, vec![1.0]);
        assert_eq!(hits.top(10).len(), 1);
    }
}
