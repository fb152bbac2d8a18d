#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum HillCipherError {
    /// A character outside `'A'..='Z'` reached the alphabet codec. The
    /// loading collaborator is expected to clean input beforehand; the codec
    /// rejects violations instead of corrupting the output.
    #[error("invalid character {ch:?} at position {position}, expected 'A'..='Z'")]
    InvalidCharacter { ch: char, position: usize },
    /// A residue outside `[0, 26)` reached the codec. This can only happen
    /// when the matrix engine failed to reduce an entry.
    #[error("invalid residue {0}, expected a value in [0, 26)")]
    InvalidResidue(i64),
    /// Ciphertext length is not a multiple of the key's block size. The text
    /// was not produced by this cipher with a matching key, or it was
    /// truncated.
    #[error("misaligned input: length {len} is not a multiple of block size {block_size}")]
    MisalignedInput { len: usize, block_size: usize },

    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
}
