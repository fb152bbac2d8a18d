//! Modular arithmetic over a finite ring Z_m.

use crate::codec::ALPHABET_LEN;
use crate::errors::HillCipherError;

/// Represents a finite ring Z_m using modular arithmetic.
///
/// The cipher itself only ever uses [`Ring::alphabet`], but the engine works
/// for any modulus greater than 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, HillCipherError> {
        if modulus <= 1 {
            return Err(HillCipherError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// The ring the cipher operates in: Z_26, one residue per letter.
    pub const fn alphabet() -> Self {
        Ring {
            modulus: ALPHABET_LEN as u64,
        }
    }

    /// Returns the modulus of the ring.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces a value into the range `[0, modulus)`.
    ///
    /// True mathematical modulo: negative inputs land on a non-negative
    /// residue, never on a truncated remainder.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.normalize(27), 1);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus as i64)
    }

    /// Computes `(a + b) mod modulus`.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        self.normalize(self.normalize(a) + self.normalize(b))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Widens to `i128` before reducing so intermediate products cannot
    /// overflow near the `i64` boundary.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.mul(5, 6), 4); // 30 mod 26 = 4
    /// assert_eq!(ring.mul(-2, 3), 20); // -6 mod 26 = 20
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let product = self.normalize(a) as i128 * self.normalize(b) as i128;

        self.normalize((product % self.modulus as i128) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_creation() {
        assert!(Ring::try_with(26).is_ok());
        assert!(Ring::try_with(2).is_ok());
        assert!(Ring::try_with(1).is_err());
        assert!(Ring::try_with(0).is_err());
    }

    #[test]
    fn test_alphabet_ring() {
        assert_eq!(Ring::alphabet().modulus(), 26);
    }

    #[test]
    fn test_normalization() {
        let ring = Ring::alphabet();
        assert_eq!(ring.normalize(0), 0);
        assert_eq!(ring.normalize(25), 25);
        assert_eq!(ring.normalize(61), 9); // 61 = 2*26 + 9
        assert_eq!(ring.normalize(-1), 25);
    }

    #[test]
    fn test_addition() {
        let ring = Ring::alphabet();
        assert_eq!(ring.add(20, 10), 4);
        assert_eq!(ring.add(-3, 5), 2);
        // operands near i64::MAX still reduce before the sum
        assert_eq!(ring.add(i64::MAX, i64::MAX), ring.mul(2, ring.normalize(i64::MAX)));
    }

    #[test]
    fn test_multiplication() {
        let ring = Ring::alphabet();
        assert_eq!(ring.mul(5, 6), 4);
        assert_eq!(ring.mul(0, 13), 0);
        assert_eq!(ring.mul(-5, 6), 22); // -30 mod 26 = 22
    }
}
