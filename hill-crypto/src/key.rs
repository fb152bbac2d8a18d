//! Key-matrix configuration. Keys are immutable values injected into each
//! transform call; nothing in the crate holds key state.

use serde::{Deserialize, Serialize};

use crate::errors::HillCipherError;
use crate::ring::matrix_ops::is_inverse_of;
use crate::ring::{Matrix, Ring};

/// An n×n key matrix with every entry normalized into `[0, 26)`.
///
/// Deserialization goes through [`KeyMatrix::try_with`], so key material read
/// from configuration files is validated the same way as programmatic input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Matrix", into = "Matrix")]
pub struct KeyMatrix {
    rows: Matrix,
}

impl KeyMatrix {
    /// Builds a key matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::InvalidParameters` for an empty matrix and
    /// `HillCipherError::DimensionMismatch` when the matrix is not square.
    pub fn try_with(rows: Matrix) -> Result<Self, HillCipherError> {
        let size = rows.len();
        if size == 0 {
            return Err(HillCipherError::InvalidParameters(
                "key matrix must not be empty".into(),
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(HillCipherError::DimensionMismatch(format!(
                    "key matrix must be square, but row {} has length {} (expected {})",
                    i,
                    row.len(),
                    size
                )));
            }
        }

        let ring = Ring::alphabet();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|entry| ring.normalize(entry)).collect())
            .collect();

        Ok(Self { rows })
    }

    /// The block size n of this key.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &Matrix {
        &self.rows
    }
}

impl TryFrom<Matrix> for KeyMatrix {
    type Error = HillCipherError;

    fn try_from(rows: Matrix) -> Result<Self, Self::Error> {
        Self::try_with(rows)
    }
}

impl From<KeyMatrix> for Matrix {
    fn from(key: KeyMatrix) -> Self {
        key.rows
    }
}

/// The encryption key K and its precomputed modular inverse K⁻¹.
///
/// The inverse relation `(K·K⁻¹) mod 26 == I` is assumed by the transforms,
/// not verified; [`KeyPair::is_consistent`] makes the check available to
/// callers that want it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub encryption: KeyMatrix,
    pub decryption: KeyMatrix,
}

impl KeyPair {
    /// Pairs an encryption matrix with its inverse.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::DimensionMismatch` when the two matrices do
    /// not share a block size.
    pub fn try_with(encryption: KeyMatrix, decryption: KeyMatrix) -> Result<Self, HillCipherError> {
        if encryption.size() != decryption.size() {
            return Err(HillCipherError::DimensionMismatch(format!(
                "key matrices must share a block size ({} vs {})",
                encryption.size(),
                decryption.size()
            )));
        }

        Ok(Self {
            encryption,
            decryption,
        })
    }

    /// The block size n shared by both matrices.
    pub fn block_size(&self) -> usize {
        self.encryption.size()
    }

    /// Checks `(K·K⁻¹) mod 26 == I`.
    pub fn is_consistent(&self) -> Result<bool, HillCipherError> {
        is_inverse_of(self.encryption.rows(), self.decryption.rows(), &Ring::alphabet())
    }
}
