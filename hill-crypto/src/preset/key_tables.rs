use lazy_static::lazy_static;

use crate::key::{KeyMatrix, KeyPair};

lazy_static! {
    /// The fixed 3×3 project key pair: the encryption matrix K and its
    /// precomputed inverse K⁻¹ modulo 26. Used whenever the caller supplies
    /// no key configuration of its own.
    pub static ref PROJECT_KEY_PAIR: KeyPair = {
        let encryption = KeyMatrix::try_with(vec![
            vec![1, 2, 3],
            vec![0, 1, 4],
            vec![5, 6, 0],
        ])
        .expect("project key matrix is well-formed");

        let decryption = KeyMatrix::try_with(vec![
            vec![2, 18, 5],
            vec![20, 11, 22],
            vec![21, 4, 1],
        ])
        .expect("project inverse matrix is well-formed");

        KeyPair::try_with(encryption, decryption)
            .expect("project matrices share a block size")
    };
}
