use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    // Configuration errors
    #[error("unknown similarity metric: {name}")]
    UnknownMetric { name: String },

    #[error("vector length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    // Numeric-domain errors
    #[error("term {term:?} has zero document frequency")]
    ZeroDocumentFrequency { term: String },

    #[error("document index {index} out of range (corpus holds {len} documents)")]
    DocumentOutOfRange { index: usize, len: usize },

    // Document source errors
    #[error("document source error: {0}")]
    Io(#[from] std::io::Error),
}
