//! Thin SVD restricted to what LSA ranking needs
//!
//! Sentence ranking only uses the singular values and the right singular
//! vectors, so both are read off the symmetric eigendecomposition of the
//! Gram matrix `AᵀA` (sentences × sentences).

use nalgebra::{DMatrix, SymmetricEigen};
use ndarray::{Array1, Array2};
use tracing::trace;

use crate::errors::{DigestError, Result};

/// Singular values (descending) and matching right singular vectors
#[derive(Debug, Clone)]
pub struct RightSingular {
    /// `min(rows, cols)` singular values, largest first
    pub sigma: Array1<f64>,
    /// `cols × sigma.len()`; column `i` pairs with `sigma[i]`
    pub v: Array2<f64>,
}

/// Singular values and right singular vectors of `matrix`.
pub fn right_singular(matrix: &Array2<f64>) -> Result<RightSingular> {
    if matrix.iter().any(|x| !x.is_finite()) {
        return Err(DigestError::Collaborator(
            "term matrix contains non-finite values".to_string(),
        ));
    }

    let (rows, cols) = matrix.dim();
    let gram = matrix.t().dot(matrix);
    let gram = DMatrix::from_fn(cols, cols, |i, j| gram[[i, j]]);
    let eigen = SymmetricEigen::new(gram);
    let eigenvalues = eigen.eigenvalues;
    let eigenvectors = eigen.eigenvectors;
    trace!(size = cols, "gram matrix decomposed");

    let mut order: Vec<usize> = (0..cols).collect();
    order.sort_by(|&a, &b| eigenvalues[b].total_cmp(&eigenvalues[a]));

    let k = rows.min(cols);
    let mut sigma = Array1::zeros(k);
    let mut v = Array2::zeros((cols, k));
    for (slot, &i) in order.iter().take(k).enumerate() {
        // Rounding can leave tiny negative eigenvalues
        sigma[slot] = eigenvalues[i].max(0.0).sqrt();
        for row in 0..cols {
            v[[row, slot]] = eigenvectors[(row, i)];
        }
    }

    Ok(RightSingular { sigma, v })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_diagonal_matrix() {
        let m = array![[3.0, 0.0], [0.0, 4.0]];
        let svd = right_singular(&m).unwrap();

        assert!(close(svd.sigma[0], 4.0));
        assert!(close(svd.sigma[1], 3.0));
        assert!(close(svd.v[[1, 0]].abs(), 1.0));
        assert!(close(svd.v[[0, 1]].abs(), 1.0));
    }

    #[test]
    fn test_known_singular_values() {
        // Singular values of [[2, 0], [1, 1]] are sqrt(3 ± sqrt(5))
        let m = array![[2.0, 0.0], [1.0, 1.0]];
        let svd = right_singular(&m).unwrap();

        assert!(close(svd.sigma[0], (3.0 + 5f64.sqrt()).sqrt()));
        assert!(close(svd.sigma[1], (3.0 - 5f64.sqrt()).sqrt()));
    }

    #[test]
    fn test_reconstructs_gram_matrix() {
        let m = array![
            [1.0, 0.4, 0.4],
            [0.4, 1.0, 0.4],
            [1.0, 1.0, 0.4],
            [0.4, 0.4, 1.0]
        ];
        let svd = right_singular(&m).unwrap();
        let gram = m.t().dot(&m);

        let sigma_sq = Array2::from_diag(&svd.sigma.mapv(|s| s * s));
        let rebuilt = svd.v.dot(&sigma_sq).dot(&svd.v.t());
        for (x, y) in gram.iter().zip(rebuilt.iter()) {
            assert!(close(*x, *y));
        }
    }

    #[test]
    fn test_wide_matrix_keeps_min_dimension() {
        // 1 term x 3 sentences -> one singular value
        let m = array![[1.0, 2.0, 2.0]];
        let svd = right_singular(&m).unwrap();

        assert_eq!(svd.sigma.len(), 1);
        assert_eq!(svd.v.dim(), (3, 1));
        assert!(close(svd.sigma[0], 3.0));
    }

    #[test]
    fn test_long_document_vectors_are_orthonormal() {
        // 25 terms x 60 sentences, deterministic pattern
        let m = Array2::from_shape_fn((25, 60), |(r, c)| ((r * 7 + c * 3) % 5) as f64 * 0.3);
        let svd = right_singular(&m).unwrap();

        assert_eq!(svd.sigma.len(), 25);
        for w in svd.sigma.as_slice().unwrap().windows(2) {
            assert!(w[0] >= w[1]);
        }
        let vtv = svd.v.t().dot(&svd.v);
        for ((i, j), x) in vtv.indexed_iter() {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!((x - expected).abs() < 1e-6, "({i}, {j}) = {x}");
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        let m = array![[1.0, f64::NAN]];
        assert!(matches!(
            right_singular(&m),
            Err(DigestError::Collaborator(_))
        ));
    }

    #[test]
    fn test_zero_matrix() {
        let m = Array2::<f64>::zeros((2, 2));
        let svd = right_singular(&m).unwrap();

        assert!(svd.sigma.iter().all(|&s| s == 0.0));
    }
}
