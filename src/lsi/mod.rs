pub mod matrix;
pub mod similarity;
pub mod svd;
pub mod token;

use std::path::PathBuf;

use thiserror::Error;

/// Error type for the LSI pipeline.
///
/// Every cause is deterministic and input-driven, so no variant is ever
/// retried; each one carries the context (path, rank, document name) needed
/// to act on it. The pipeline either produces a complete report or fails
/// before producing one.
#[derive(Debug, Error)]
pub enum LsiError {
    /// The term-document matrix has no rows or no columns, so there is
    /// nothing to decompose.
    #[error("empty corpus: term-document matrix is {terms} terms x {docs} documents")]
    EmptyCorpus { terms: usize, docs: usize },

    /// The requested truncation rank is outside [1, len(sigma)].
    #[error("invalid rank {k}: must be between 1 and {max}")]
    InvalidRank { k: usize, max: usize },

    /// Two input documents normalized to the same column name. Allowing this
    /// would make the similarity report ambiguous.
    #[error("duplicate document name {0:?}: document names must be distinct after stripping directories and extension")]
    DuplicateDocumentName(String),

    /// A document or stopword file could not be read.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The SVD iteration did not converge. Does not happen for the finite,
    /// well-scaled matrices this pipeline builds, but the underlying API is
    /// fallible.
    #[error("svd failed: {0}")]
    Svd(String),
}
