//! The Hill cipher transform: encode, partition, multiply, flatten, decode.
//!
//! Both directions are pure, stateless functions; every column block is
//! transformed independently of the others (ECB-style, no inter-block state
//! and no initialization vector).

use crate::block::{flatten, partition_for_decrypt, partition_for_encrypt};
use crate::codec::{decode, encode};
use crate::errors::HillCipherError;
use crate::key::KeyMatrix;
use crate::ring::Ring;
use crate::ring::matrix_ops::matrix_mul;

/// Encrypts a cleaned uppercase-letter string with the key matrix K.
///
/// Input is padded with `'X'` to the next multiple of the key's block size,
/// so the output length is always a multiple of n and at least the input
/// length. Empty plaintext yields empty ciphertext.
///
/// # Errors
///
/// Returns `HillCipherError::InvalidCharacter` when `plaintext` contains
/// anything outside `'A'..='Z'`.
pub fn encrypt(plaintext: &str, key: &KeyMatrix) -> Result<String, HillCipherError> {
    if plaintext.is_empty() {
        return Ok(String::new());
    }

    let ring = Ring::alphabet();
    let residues = encode(plaintext)?;
    let blocks = partition_for_encrypt(&residues, key.size());
    let encrypted = matrix_mul(key.rows(), &blocks, &ring)?;

    decode(&flatten(&encrypted))
}

/// Decrypts a ciphertext string with the inverse key matrix K⁻¹.
///
/// Trailing `'X'` padding added during encryption is NOT stripped: a round
/// trip on plaintext whose length was not a multiple of n returns the
/// original text with `'X'` appended. That is a property of the cipher, not
/// a defect; callers needing exact round trips must track padding
/// themselves. Empty ciphertext yields empty plaintext.
///
/// # Errors
///
/// Returns `HillCipherError::MisalignedInput` when the ciphertext length is
/// not a multiple of the key's block size, and
/// `HillCipherError::InvalidCharacter` for input outside `'A'..='Z'`.
pub fn decrypt(ciphertext: &str, inverse_key: &KeyMatrix) -> Result<String, HillCipherError> {
    if ciphertext.is_empty() {
        return Ok(String::new());
    }

    let ring = Ring::alphabet();
    let residues = encode(ciphertext)?;
    let blocks = partition_for_decrypt(&residues, inverse_key.size())?;
    let decrypted = matrix_mul(inverse_key.rows(), &blocks, &ring)?;

    decode(&flatten(&decrypted))
}
