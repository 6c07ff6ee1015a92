use std::collections::HashSet;

use crate::analysis::tokenizer::Analyzer;
use crate::corpus::Document;
use crate::error::EngineError;
use crate::vectorizer::vocabulary::Vocabulary;

/// Compute one inverse-document-frequency weight per vocabulary term.
///
/// `idf[i] = ln(N / df_i)` where `df_i` counts the documents containing
/// term `i` at least once (repeats within a document count once).
/// A term present in every document gets weight 0; there is
/// deliberately no smoothing floor.
///
/// `df_i == 0` is a numeric-domain error and aborts the build. It
/// cannot happen when the vocabulary was built from the same corpus,
/// which is the only way the engine calls this.
pub fn compute_idf<A: Analyzer>(
    analyzer: &A,
    documents: &[Document],
    vocabulary: &Vocabulary,
) -> Result<Vec<f64>, EngineError> {
    let mut doc_freq = vec![0u64; vocabulary.len()];
    for doc in documents {
        let tokens = analyzer.analyze(&doc.text);
        let unique: HashSet<&str> = tokens.iter().map(|token| token.as_str()).collect();
        for token in unique {
            if let Some(index) = vocabulary.index_of(token) {
                doc_freq[index] += 1;
            }
        }
    }

    let doc_num = documents.len() as f64;
    doc_freq
        .iter()
        .enumerate()
        .map(|(index, &df)| {
            if df == 0 {
                Err(EngineError::ZeroDocumentFrequency {
                    term: vocabulary.term_at(index).unwrap_or_default().to_string(),
                })
            } else {
                Ok((doc_num / df as f64).ln())
            }
        })
        .collect()
}
