use log::{debug, info};
use nalgebra::{DMatrix, DVector};

use crate::lsi::matrix::TermDocumentMatrix;
use crate::lsi::LsiError;

/// Full SVD of a term-document matrix.
///
/// Holds U (terms x r), the singular values (length r = min(terms, docs),
/// descending), and V in row orientation (r x docs), so that
/// A = U * diag(sigma) * vt within floating tolerance. Document names ride
/// along so the scorer can label columns of V.
#[derive(Debug, Clone)]
pub struct SvdFactors {
    u: DMatrix<f64>,
    sigma: DVector<f64>,
    vt: DMatrix<f64>,
    doc_names: Vec<String>,
}

/// Rank-k truncation of [`SvdFactors`]: first k columns of U, first k
/// singular values, first k rows of V.
#[derive(Debug, Clone)]
pub struct TruncatedFactors {
    uk: DMatrix<f64>,
    sigmak: DVector<f64>,
    vk: DMatrix<f64>,
    doc_names: Vec<String>,
}

impl SvdFactors {
    /// Compute the full singular value decomposition of `matrix`.
    ///
    /// Fails with [`LsiError::EmptyCorpus`] when the matrix has no rows or
    /// no columns. A fully-zero column (a document that contributed no
    /// surviving terms) decomposes fine.
    pub fn decompose(matrix: &TermDocumentMatrix) -> Result<Self, LsiError> {
        if matrix.n_terms() == 0 || matrix.n_docs() == 0 {
            return Err(LsiError::EmptyCorpus {
                terms: matrix.n_terms(),
                docs: matrix.n_docs(),
            });
        }

        // try_svd sorts the singular values in descending order; niter = 0
        // means no iteration cap.
        let svd = matrix
            .cells()
            .clone()
            .try_svd(true, true, f64::EPSILON, 0)
            .ok_or_else(|| LsiError::Svd("iteration did not converge".to_string()))?;
        let u = svd
            .u
            .ok_or_else(|| LsiError::Svd("left singular vectors not computed".to_string()))?;
        let vt = svd
            .v_t
            .ok_or_else(|| LsiError::Svd("right singular vectors not computed".to_string()))?;

        info!(
            "decomposed {}x{} matrix into {} singular values",
            matrix.n_terms(),
            matrix.n_docs(),
            svd.singular_values.len()
        );
        Ok(SvdFactors {
            u,
            sigma: svd.singular_values,
            vt,
            doc_names: matrix.doc_names().to_vec(),
        })
    }

    /// Singular values, descending.
    #[inline]
    pub fn singular_values(&self) -> &DVector<f64> {
        &self.sigma
    }

    /// Left singular vectors (terms x r).
    #[inline]
    pub fn u(&self) -> &DMatrix<f64> {
        &self.u
    }

    /// Right singular vectors, row-oriented (r x docs).
    #[inline]
    pub fn vt(&self) -> &DMatrix<f64> {
        &self.vt
    }

    /// Fraction of total squared singular-value mass per singular value:
    /// sigma_i^2 / sum_j sigma_j^2.
    ///
    /// Computed from the full spectrum only, independent of any truncation
    /// rank; used upstream to help a human choose k. Sums to 1.0.
    pub fn singular_contribution(&self) -> Vec<f64> {
        let sum_square: f64 = self.sigma.iter().map(|s| s * s).sum();
        self.sigma.iter().map(|s| s * s / sum_square).collect()
    }

    /// Truncate to rank `k`, keeping the k largest singular values.
    ///
    /// Fails with [`LsiError::InvalidRank`] unless 1 <= k <= len(sigma).
    pub fn truncate(&self, k: usize) -> Result<TruncatedFactors, LsiError> {
        let max = self.sigma.len();
        if k < 1 || k > max {
            return Err(LsiError::InvalidRank { k, max });
        }
        debug!("truncating factors to rank {} of {}", k, max);
        Ok(TruncatedFactors {
            uk: self.u.columns(0, k).into_owned(),
            sigmak: self.sigma.rows(0, k).into_owned(),
            vk: self.vt.rows(0, k).into_owned(),
            doc_names: self.doc_names.clone(),
        })
    }

    /// U * diag(sigma) * vt, for reconstruction checks.
    pub fn reconstruct(&self) -> DMatrix<f64> {
        &self.u * DMatrix::from_diagonal(&self.sigma) * &self.vt
    }
}

impl TruncatedFactors {
    /// Retained rank k.
    #[inline]
    pub fn rank(&self) -> usize {
        self.sigmak.len()
    }

    /// First k columns of U (terms x k).
    #[inline]
    pub fn uk(&self) -> &DMatrix<f64> {
        &self.uk
    }

    /// First k singular values, descending.
    #[inline]
    pub fn sigmak(&self) -> &DVector<f64> {
        &self.sigmak
    }

    /// First k rows of V (k x docs); columns are document projections.
    #[inline]
    pub fn vk(&self) -> &DMatrix<f64> {
        &self.vk
    }

    /// Document names in column order.
    #[inline]
    pub fn doc_names(&self) -> &[String] {
        &self.doc_names
    }
}
