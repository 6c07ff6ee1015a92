use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Analyzer;
use crate::corpus::Document;

/// Term to dense-index mapping for one corpus build.
///
/// Index assignment is first occurrence in the concatenated corpus
/// token stream after stop-word removal, so building twice from the
/// same corpus with the same analyzer yields the identical mapping.
/// Indices are contiguous in `[0, len)`. Immutable once built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: IndexSet<String>,
}

impl Vocabulary {
    /// Scan the full corpus once, deduplicating while preserving
    /// first-seen order.
    pub fn build<A: Analyzer>(analyzer: &A, documents: &[Document]) -> Self {
        let mut terms = IndexSet::new();
        for doc in documents {
            for token in analyzer.analyze(&doc.text) {
                terms.insert(token);
            }
        }
        Vocabulary { terms }
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    pub fn term_at(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|term| term.as_str())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|term| term.as_str())
    }
}
