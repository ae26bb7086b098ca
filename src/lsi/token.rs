use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

/// Per-document term weighting.
///
/// Tokenizes one document's raw text and maps each surviving term to its
/// relative frequency within the document. Weights of a non-empty mapping
/// sum to 1.0.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use lsi_engine::TermWeights;
///
/// let weights = TermWeights::from_text("Ocean ocean wave wave wave", &HashSet::new());
/// assert_eq!(weights.get("ocean"), Some(0.4));
/// assert_eq!(weights.get("wave"), Some(0.6));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TermWeights {
    #[serde(with = "indexmap::map::serde_seq")]
    weights: IndexMap<String, f64>,
}

impl TermWeights {
    /// Tokenize `text` and weight the surviving terms by relative frequency.
    ///
    /// Tokens are maximal runs of alphabetic characters in the lower-cased
    /// text; digits, underscores, and everything else separate tokens.
    /// Tokens of length <= 3 and stopwords are discarded. A document whose
    /// tokens are all discarded yields an empty mapping.
    pub fn from_text(text: &str, stopwords: &HashSet<String>) -> Self {
        let lowered = text.to_lowercase();
        let mut counts: IndexMap<String, u64> = IndexMap::new();
        let mut total: u64 = 0;
        for token in lowered.split(|c: char| !c.is_alphabetic()) {
            if token.chars().count() <= 3 || stopwords.contains(token) {
                continue;
            }
            *counts.entry(token.to_string()).or_insert(0) += 1;
            total += 1;
        }
        let weights = counts
            .into_iter()
            .map(|(term, count)| (term, count as f64 / total as f64))
            .collect();
        TermWeights { weights }
    }

    /// Weight of `term` in this document, if present.
    #[inline]
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    /// Number of distinct terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when no token survived filtering.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate terms and weights in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, &weight)| (term.as_str(), weight))
    }
}
