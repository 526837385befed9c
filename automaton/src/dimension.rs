//! Hausdorff dimension of the attractor (`spec.md` §4.6/§6.3): `log(rho) /
//! log(p)`, where `rho` is the spectral radius of the DFA's adjacency
//! matrix. The core only produces the integer matrix; the eigenvalue problem
//! is handed off to `nalgebra`'s dense eigensolver behind a small
//! [`SpectralRadius`] seam, matching `spec.md`'s framing of the eigensolver
//! as an external collaborator.

use nalgebra::DMatrix;

/// A non-negative integer square matrix's largest eigenvalue magnitude.
pub trait SpectralRadius {
    fn spectral_radius(&self) -> f64;
}

impl SpectralRadius for Vec<Vec<u64>> {
    fn spectral_radius(&self) -> f64 {
        let n = self.len();
        if n == 0 {
            return 0.0;
        }
        let flat: Vec<f64> =
            self.iter().flat_map(|row| row.iter().map(|&x| x as f64)).collect();
        let matrix = DMatrix::from_row_slice(n, n, &flat);
        matrix.complex_eigenvalues().iter().map(|c| c.norm()).fold(0.0_f64, f64::max)
    }
}

/// `log(rho(M)) / log(p)`, the Hausdorff dimension of the IFS attractor.
pub fn hausdorff_dimension(p: u64, adjacency: &[Vec<u64>]) -> f64 {
    let rho = adjacency.to_vec().spectral_radius();
    rho.ln() / (p as f64).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s4_binary_cantor_has_dimension_one() {
        // Single state, two self-loops: M = [[2]], rho = 2, dim = log2(2) = 1.
        let dim = hausdorff_dimension(2, &[vec![2]]);
        assert!((dim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn s5_ternary_cantor_has_log2_over_log3_dimension() {
        let dim = hausdorff_dimension(3, &[vec![2]]);
        assert!((dim - (2.0_f64.ln() / 3.0_f64.ln())).abs() < 1e-9);
    }

    #[test]
    fn dimension_is_in_unit_interval_for_binary_examples() {
        let matrices: Vec<Vec<Vec<u64>>> = vec![vec![vec![2]], vec![vec![1, 1], vec![1, 1]]];
        for matrix in &matrices {
            let dim = hausdorff_dimension(2, matrix);
            assert!((0.0..=1.0).contains(&dim));
        }
    }
}
