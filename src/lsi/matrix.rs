use indexmap::IndexMap;
use log::debug;
use nalgebra::DMatrix;

use crate::lsi::token::TermWeights;
use crate::lsi::LsiError;

/// Dense term-document matrix.
///
/// Rows are the union vocabulary over all documents (one row per term,
/// first-seen order), columns are the documents in input order. A cell holds
/// the term's relative-frequency weight in that document, or 0.0 when the
/// term never appears there. Immutable once built; the sole input to the
/// decomposer.
#[derive(Debug, Clone)]
pub struct TermDocumentMatrix {
    /// term -> row index; insertion order fixes the row order
    terms: IndexMap<String, usize>,
    doc_names: Vec<String>,
    /// terms x docs
    cells: DMatrix<f64>,
}

impl TermDocumentMatrix {
    /// Outer-join the per-document mappings into one dense matrix.
    ///
    /// Documents keep their input order as columns. Fails with
    /// [`LsiError::DuplicateDocumentName`] when two documents share a name,
    /// since a duplicate column would make the report ambiguous.
    pub fn build(documents: Vec<(String, TermWeights)>) -> Result<Self, LsiError> {
        let mut terms: IndexMap<String, usize> = IndexMap::new();
        let mut doc_names = Vec::with_capacity(documents.len());
        for (name, weights) in &documents {
            if doc_names.contains(name) {
                return Err(LsiError::DuplicateDocumentName(name.clone()));
            }
            doc_names.push(name.clone());
            for (term, _) in weights.iter() {
                let next_row = terms.len();
                terms.entry(term.to_string()).or_insert(next_row);
            }
        }

        // Columns start zero-filled; absent terms stay at exactly 0.0.
        let mut cells = DMatrix::zeros(terms.len(), documents.len());
        for (col, (_, weights)) in documents.iter().enumerate() {
            for (term, weight) in weights.iter() {
                let row = terms[term];
                cells[(row, col)] = weight;
            }
        }

        debug!(
            "built term-document matrix: {} terms x {} documents",
            terms.len(),
            doc_names.len()
        );
        Ok(TermDocumentMatrix {
            terms,
            doc_names,
            cells,
        })
    }

    /// Number of vocabulary terms (rows).
    #[inline]
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Number of documents (columns).
    #[inline]
    pub fn n_docs(&self) -> usize {
        self.doc_names.len()
    }

    /// Document names in column order.
    #[inline]
    pub fn doc_names(&self) -> &[String] {
        &self.doc_names
    }

    /// Vocabulary terms in row order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Weight of `term` in the document at `col`, or 0.0 for unknown terms.
    pub fn weight(&self, term: &str, col: usize) -> f64 {
        match self.terms.get(term) {
            Some(&row) => self.cells[(row, col)],
            None => 0.0,
        }
    }

    /// The underlying dense matrix (terms x docs).
    #[inline]
    pub fn cells(&self) -> &DMatrix<f64> {
        &self.cells
    }
}
