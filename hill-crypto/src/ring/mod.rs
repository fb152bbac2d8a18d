//! # Ring module
//!
//! Provides the [`Ring`] struct for modular arithmetic over Z_m and the
//! matrix operations the cipher transform builds on.

pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use math::Ring;
