//! Coefficient traits.
//!
//! This module defines the numeric bound that polynomial terms are
//! generic over, along with the exponentiation used during evaluation.

use std::fmt::{Debug, Display};

use num_traits::{One, Zero};

/// A numeric value usable as a polynomial coefficient.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
///
/// Floating point types only satisfy these approximately, which is
/// fine for storage and rendering but means algebraic identities
/// should be checked with a tolerance.
///
/// Any type meeting the bounds implements this trait automatically.
pub trait Coefficient: Clone + PartialEq + Debug + Display + Zero + One {
    /// Returns true if this is exactly the multiplicative identity.
    fn is_unit(&self) -> bool {
        *self == Self::one()
    }
}

impl<T> Coefficient for T where T: Clone + PartialEq + Debug + Display + Zero + One {}

/// Computes `base^exp` by repeated squaring.
///
/// Runs in O(log exp) multiplications, so exponents in the millions
/// are cheap. `pow(x, 0)` is `one()` for every `x`, including zero.
#[must_use]
pub fn pow<T: Coefficient>(base: &T, exp: u64) -> T {
    if exp == 0 {
        return T::one();
    }
    if base.is_zero() {
        return T::zero();
    }

    let mut result = T::one();
    let mut base = base.clone();
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base.clone();
        }
        exp >>= 1;
        if exp > 0 {
            base = base.clone() * base;
        }
    }

    result
}
