use crate::error::EngineError;

/// Element-wise TF x IDF product.
///
/// Both inputs must share the vocabulary length; a mismatch is a caller
/// bug and fails fast instead of truncating or padding.
pub fn tf_idf(tf: &[f64], idf: &[f64]) -> Result<Vec<f64>, EngineError> {
    if tf.len() != idf.len() {
        return Err(EngineError::DimensionMismatch {
            expected: idf.len(),
            actual: tf.len(),
        });
    }
    Ok(tf.iter().zip(idf).map(|(t, w)| t * w).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elementwise_product() {
        let weighted = tf_idf(&[1.0, 2.0, 0.0], &[0.5, 1.0, 3.0]).unwrap();
        assert_eq!(weighted, vec![0.5, 2.0, 0.0]);
    }

    #[test]
    fn test_monotonic_in_term_count() {
        let idf = [0.7, 1.2];
        let low = tf_idf(&[1.0, 1.0], &idf).unwrap();
        let high = tf_idf(&[2.0, 1.0], &idf).unwrap();
        assert!(high[0] >= low[0]);
        assert_eq!(high[1], low[1]);
    }

    #[test]
    fn test_length_mismatch_fails() {
        let result = tf_idf(&[1.0], &[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(EngineError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }
}
