use std::io::{self, Write};

use log::debug;
use nalgebra::DMatrix;
use serde::Serialize;

use crate::lsi::svd::TruncatedFactors;

/// Symmetric document-to-document distance matrix in the reduced space.
///
/// For documents i and j with k-dimensional projections v_i, v_j (columns of
/// Vk), distance(i, j) is the Euclidean norm of (v_i - v_j) with each
/// coordinate scaled by its singular value. Lower means more similar;
/// distance(i, i) = 0.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    doc_names: Vec<String>,
    distances: DMatrix<f64>,
}

/// One document's neighbors, most similar first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub document: String,
    pub neighbors: Vec<Neighbor>,
}

/// A ranked neighbor and its distance in the reduced space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub document: String,
    pub distance: f64,
}

/// Per-document similarity ranking over the whole corpus. Rebuilt from the
/// truncated factors on every invocation; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    pub entries: Vec<ReportEntry>,
}

impl DistanceMatrix {
    /// Compute all pairwise distances from the truncated factors.
    pub fn compute(factors: &TruncatedFactors) -> Self {
        let vk = factors.vk();
        let sigmak = factors.sigmak();
        let n = factors.doc_names().len();
        let mut distances = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d: f64 = vk
                    .column(i)
                    .iter()
                    .zip(vk.column(j).iter())
                    .zip(sigmak.iter())
                    .map(|((vi, vj), s)| ((vi - vj) * s).powi(2))
                    .sum::<f64>()
                    .sqrt();
                distances[(i, j)] = d;
                distances[(j, i)] = d;
            }
        }
        debug!("computed {}x{} distance matrix at rank {}", n, n, factors.rank());
        DistanceMatrix {
            doc_names: factors.doc_names().to_vec(),
            distances,
        }
    }

    /// Document names in matrix order.
    #[inline]
    pub fn doc_names(&self) -> &[String] {
        &self.doc_names
    }

    /// Distance between documents `i` and `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[(i, j)]
    }

    /// Rank every document's neighbors by ascending distance.
    ///
    /// Ties are broken by ascending document name so the report is
    /// deterministic run to run.
    pub fn ranked(&self) -> SimilarityReport {
        let entries = self
            .doc_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut neighbors: Vec<Neighbor> = self
                    .doc_names
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(j, other)| Neighbor {
                        document: other.clone(),
                        distance: self.distances[(i, j)],
                    })
                    .collect();
                neighbors.sort_by(|a, b| {
                    a.distance
                        .total_cmp(&b.distance)
                        .then_with(|| a.document.cmp(&b.document))
                });
                ReportEntry {
                    document: name.clone(),
                    neighbors,
                }
            })
            .collect();
        SimilarityReport { entries }
    }
}

impl SimilarityReport {
    /// Serialize the report in the plain-text sink format: per document, a
    /// header line, an order note, the comma-joined neighbor names, and a
    /// blank line.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for entry in &self.entries {
            let names: Vec<&str> = entry
                .neighbors
                .iter()
                .map(|n| n.document.as_str())
                .collect();
            writeln!(writer, "Documents most similar to {}:", entry.document)?;
            writeln!(writer, "(in decreasing order)")?;
            writeln!(writer, "{}", names.join(", "))?;
            writeln!(writer)?;
        }
        Ok(())
    }
}
