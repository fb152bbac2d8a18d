//! Reshaping between flat residue sequences and the n×m column-block
//! matrices the engine multiplies.

use itertools::Itertools;

use crate::errors::HillCipherError;
use crate::ring::{Matrix, Vector};

/// Residue the encryptor pads with: 23, the letter `'X'`.
pub const PAD_RESIDUE: i64 = 23;

/// Pads `residues` on the right with [`PAD_RESIDUE`] to the next multiple of
/// `block_size`, then reshapes into `block_size` rows where column j holds
/// `residues[j*n .. j*n + n)`.
///
/// Input whose length is already a multiple of `block_size` receives zero
/// padding, not a full extra block.
pub fn partition_for_encrypt(residues: &[i64], block_size: usize) -> Matrix {
    assert!(block_size > 0, "block size must be positive");
    let padding = (block_size - residues.len() % block_size) % block_size;
    let padded_len = residues.len() + padding;

    reshape(
        residues.iter().copied().pad_using(padded_len, |_| PAD_RESIDUE),
        block_size,
        padded_len / block_size,
    )
}

/// Reshapes without padding.
///
/// # Errors
///
/// Returns `HillCipherError::MisalignedInput` when the length is not a
/// multiple of `block_size` — the sequence was not produced by this cipher
/// with a matching block size, or was corrupted.
pub fn partition_for_decrypt(residues: &[i64], block_size: usize) -> Result<Matrix, HillCipherError> {
    assert!(block_size > 0, "block size must be positive");
    if residues.len() % block_size != 0 {
        return Err(HillCipherError::MisalignedInput {
            len: residues.len(),
            block_size,
        });
    }

    Ok(reshape(
        residues.iter().copied(),
        block_size,
        residues.len() / block_size,
    ))
}

/// Inverse reshape: reads the blocks back column by column, matching the
/// column-major write order of the partition functions.
pub fn flatten(blocks: &Matrix) -> Vector {
    let Some(first) = blocks.first() else {
        return Vector::new();
    };

    (0..first.len())
        .flat_map(|column| blocks.iter().map(move |row| row[column]))
        .collect()
}

fn reshape(residues: impl Iterator<Item = i64>, block_size: usize, columns: usize) -> Matrix {
    let mut blocks = vec![vec![0i64; columns]; block_size];
    for (index, residue) in residues.enumerate() {
        blocks[index % block_size][index / block_size] = residue;
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_single_block() {
        // "ACT" as residues, one column
        let blocks = partition_for_encrypt(&[0, 2, 19], 3);
        assert_eq!(blocks, vec![vec![0], vec![2], vec![19]]);
    }

    #[test]
    fn test_partition_pads_with_x() {
        // five residues, one 'X' (23) appended to fill the second column
        let blocks = partition_for_encrypt(&[7, 4, 11, 11, 14], 3);
        assert_eq!(blocks, vec![vec![7, 11], vec![4, 14], vec![11, 23]]);
    }

    #[test]
    fn test_partition_aligned_input_gets_no_padding() {
        let blocks = partition_for_encrypt(&[0, 1, 2, 3, 4, 5], 3);
        assert_eq!(blocks, vec![vec![0, 3], vec![1, 4], vec![2, 5]]);
    }

    #[test]
    fn test_partition_for_decrypt_rejects_misaligned() {
        assert_eq!(
            partition_for_decrypt(&[0, 1, 2, 3], 3).unwrap_err(),
            HillCipherError::MisalignedInput { len: 4, block_size: 3 }
        );
    }

    #[test]
    fn test_partition_for_decrypt_never_pads() {
        let blocks = partition_for_decrypt(&[9, 0, 12], 3).unwrap();
        assert_eq!(blocks, vec![vec![9], vec![0], vec![12]]);
    }

    #[test]
    fn test_flatten_is_column_major() {
        let blocks = vec![vec![7, 11], vec![4, 14], vec![11, 23]];
        assert_eq!(flatten(&blocks), vec![7, 4, 11, 11, 14, 23]);
    }

    #[test]
    fn test_flatten_inverts_partition() {
        let residues = vec![0, 25, 13, 2, 19, 7, 8, 3, 4];
        let blocks = partition_for_decrypt(&residues, 3).unwrap();
        assert_eq!(flatten(&blocks), residues);
    }

    #[test]
    fn test_empty_round_trip() {
        let blocks = partition_for_encrypt(&[], 3);
        assert_eq!(blocks, vec![Vec::new(); 3]);
        assert_eq!(flatten(&blocks), Vector::new());
        assert_eq!(flatten(&Matrix::new()), Vector::new());
    }
}
