//! Classical Hill cipher over the 26-letter uppercase alphabet.
//!
//! Fixed-size groups of letters are encrypted by multiplying the vector of
//! their residues by a key matrix modulo 26; decryption multiplies by the
//! key's precomputed modular inverse. All arithmetic is exact integer
//! arithmetic over [`ring::Ring`].
//!
//! ```
//! use hill_crypto::cipher::{decrypt, encrypt};
//! use hill_crypto::preset::key_tables::PROJECT_KEY_PAIR;
//!
//! let ciphertext = encrypt("ACT", &PROJECT_KEY_PAIR.encryption)?;
//! assert_eq!(ciphertext, "JAM");
//!
//! let plaintext = decrypt(&ciphertext, &PROJECT_KEY_PAIR.decryption)?;
//! assert_eq!(plaintext, "ACT");
//! # Ok::<(), hill_crypto::errors::HillCipherError>(())
//! ```

pub mod analysis;
pub mod block;
pub mod cipher;
pub mod codec;
pub mod errors;
pub mod key;
pub mod preset;
pub mod ring;

pub use cipher::{decrypt, encrypt};
pub use errors::HillCipherError;
pub use key::{KeyMatrix, KeyPair};
