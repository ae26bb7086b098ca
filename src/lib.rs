//! Latent Semantic Indexing over a small collection of plain-text documents.
//!
//! The pipeline builds a relative-frequency term-document matrix, factorizes
//! it with a full SVD, truncates the factors to a caller-chosen rank k, and
//! ranks documents by pairwise similarity in the reduced space. Each stage is
//! a pure function of the previous stage's output:
//!
//! ```
//! use std::collections::HashSet;
//! use lsi_engine::{DistanceMatrix, SvdFactors, TermDocumentMatrix, TermWeights};
//!
//! # fn main() -> Result<(), lsi_engine::LsiError> {
//! let stopwords = HashSet::new();
//! let matrix = TermDocumentMatrix::build(vec![
//!     ("a".to_string(), TermWeights::from_text("ocean ocean wave wave wave", &stopwords)),
//!     ("b".to_string(), TermWeights::from_text("ocean ocean mountain mountain", &stopwords)),
//! ])?;
//! let factors = SvdFactors::decompose(&matrix)?;
//! // inspect factors.singular_contribution() to choose k, then:
//! let report = DistanceMatrix::compute(&factors.truncate(1)?).ranked();
//! assert_eq!(report.entries[0].neighbors[0].document, "b");
//! # Ok(())
//! # }
//! ```
pub mod corpus;
pub mod lsi;

/// Pipeline error type. Every variant is fatal and input-driven; nothing is
/// retried and there is no partial success.
pub use lsi::LsiError;

/// Tokenizer/weighter output: one document's terms mapped to
/// relative-frequency weights.
pub use lsi::token::TermWeights;

/// Dense terms x documents matrix, the outer join of all per-document
/// weight mappings.
pub use lsi::matrix::TermDocumentMatrix;

/// Full SVD factors (U, sigma, row-oriented V) and their rank-k truncation.
pub use lsi::svd::{SvdFactors, TruncatedFactors};

/// Reduced-space distance matrix and the ranked per-document report.
pub use lsi::similarity::{DistanceMatrix, Neighbor, ReportEntry, SimilarityReport};
