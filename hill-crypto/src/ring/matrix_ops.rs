use crate::errors::HillCipherError;
use crate::ring::{Matrix, Ring};

/// Computes the matrix product `C = AB` with every entry reduced into
/// `[0, modulus)`.
///
/// All arithmetic is exact integer arithmetic; entries may be arbitrary
/// (including negative) `i64` values and are normalized by the ring as they
/// are consumed.
///
/// # Errors
///
/// Returns `HillCipherError::DimensionMismatch` if the inner dimensions do
/// not match or if rows within either matrix have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    let rows = a.len();
    if rows == 0 {
        return Ok(Matrix::new());
    }
    let inner = a[0].len();
    if b.len() != inner {
        return Err(HillCipherError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            inner,
            b.len()
        )));
    }

    let cols = b.first().map_or(0, |row| row.len());
    for (k, row) in b.iter().enumerate() {
        if row.len() != cols {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Matrix B row {} has length {} but expected {}",
                k,
                row.len(),
                cols
            )));
        }
    }

    let mut product = vec![vec![0i64; cols]; rows];
    for (i, row) in a.iter().enumerate() {
        if row.len() != inner {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Matrix A row {} has length {} but expected {}",
                i,
                row.len(),
                inner
            )));
        }
        for j in 0..cols {
            let mut sum = 0i64;
            for (k, &entry) in row.iter().enumerate() {
                sum = ring.add(sum, ring.mul(entry, b[k][j]));
            }
            product[i][j] = sum;
        }
    }
    Ok(product)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    (0..n)
        .map(|i| (0..n).map(|j| i64::from(i == j)).collect())
        .collect()
}

/// Checks whether `b` is the modular inverse of `a`, i.e. whether
/// `(A·B) mod m` is the identity.
///
/// The cipher transforms assume this invariant and never verify it; callers
/// that want the guarantee run this once before trusting a decrypt round
/// trip.
///
/// # Errors
///
/// Returns `HillCipherError::DimensionMismatch` if the matrices are not
/// square or not of equal size.
pub fn is_inverse_of(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<bool, HillCipherError> {
    let n = a.len();
    if b.len() != n {
        return Err(HillCipherError::DimensionMismatch(format!(
            "Matrices must be the same size ({} vs {})",
            n,
            b.len()
        )));
    }
    if a.iter().chain(b.iter()).any(|row| row.len() != n) {
        return Err(HillCipherError::DimensionMismatch(
            "is_inverse_of: matrices must be square".into(),
        ));
    }

    Ok(matrix_mul(a, b, ring)? == identity_matrix(n))
}
