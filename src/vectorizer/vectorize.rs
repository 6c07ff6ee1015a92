use crate::vectorizer::vocabulary::Vocabulary;

/// Count vocabulary hits in a token list (simple term-count model).
///
/// Tokens outside the vocabulary, whether removed as stop-words or
/// never seen at build time, are dropped silently. That is expected
/// behavior, not an error.
pub fn term_count_vector<T: AsRef<str>>(tokens: &[T], vocabulary: &Vocabulary) -> Vec<f64> {
    let mut vector = vec![0.0; vocabulary.len()];
    for token in tokens {
        if let Some(index) = vocabulary.index_of(token.as_ref()) {
            vector[index] += 1.0;
        }
    }
    vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::StemmingAnalyzer;
    use crate::corpus::Document;

    #[test]
    fn test_counts_and_unknowns() {
        let analyzer = StemmingAnalyzer::new();
        let docs = [Document::new("d1", "cat sat dog")];
        let vocab = Vocabulary::build(&analyzer, &docs);

        let vector = term_count_vector(&["cat", "cat", "unknown", "dog"], &vocab);
        assert_eq!(vector, vec![2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_length_matches_vocabulary() {
        let analyzer = StemmingAnalyzer::new();
        let docs = [Document::new("d1", "one two three four")];
        let vocab = Vocabulary::build(&analyzer, &docs);
        let vector = term_count_vector::<&str>(&[], &vocab);
        assert_eq!(vector.len(), vocab.len());
    }
}
