//! Algebraic operations on term stores.
//!
//! Every operation reads its operands and builds a fresh result through
//! [`TermStore::set_coefficient`], so results satisfy the store invariants
//! without a separate normalization pass.
//!
//! - Addition: two-pointer merge over both descending term lists, O(n + m)
//! - Multiplication: schoolbook convolution, O(n·m) products
//! - Evaluation: term-wise sum with exponentiation by squaring

use std::cmp::Ordering;

use sparsepoly_rings::{pow, Coefficient};
use tracing::{trace, warn};

use crate::error::{PolyError, Result};
use crate::store::TermStore;

impl<T: Coefficient> TermStore<T> {
    /// Evaluates the polynomial at `x`.
    ///
    /// Terms are accumulated from the highest power to the lowest. The
    /// empty store evaluates to zero.
    #[must_use]
    pub fn evaluate(&self, x: &T) -> T {
        self.iter().fold(T::zero(), |acc, term| {
            acc + term.coefficient().clone() * pow(x, term.power())
        })
    }

    fn check_variable(&self, other: &Self) -> Result<()> {
        if self.variable() == other.variable() {
            Ok(())
        } else {
            Err(PolyError::VariableMismatch {
                left: self.variable(),
                right: other.variable(),
            })
        }
    }

    /// Adds two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::VariableMismatch`] if the operands are over
    /// different variables.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_variable(other)?;
        trace!(lhs = self.len(), rhs = other.len(), "add");

        let mut result = Self::with_variable(self.variable());
        let mut lhs = self.iter().peekable();
        let mut rhs = other.iter().peekable();

        while let (Some(a), Some(b)) = (lhs.peek().copied(), rhs.peek().copied()) {
            match a.power().cmp(&b.power()) {
                Ordering::Equal => {
                    // A zero sum is simply never stored.
                    let sum = a.coefficient().clone() + b.coefficient().clone();
                    result.set_coefficient(sum, a.power());
                    lhs.next();
                    rhs.next();
                }
                Ordering::Greater => {
                    result.set_coefficient(a.coefficient().clone(), a.power());
                    lhs.next();
                }
                Ordering::Less => {
                    result.set_coefficient(b.coefficient().clone(), b.power());
                    rhs.next();
                }
            }
        }

        // At most one side has terms left.
        for term in lhs.chain(rhs) {
            result.set_coefficient(term.coefficient().clone(), term.power());
        }

        Ok(result)
    }

    /// Adds two polynomials, returning an empty store on a variable mismatch.
    ///
    /// An empty result is indistinguishable from a true zero sum; use
    /// [`try_add`](Self::try_add) to tell the two apart.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.try_add(other).unwrap_or_else(|err| {
            warn!(%err, "add produced an empty polynomial");
            Self::with_variable(self.variable())
        })
    }

    /// Multiplies two polynomials.
    ///
    /// Pairs are visited with the outer loop over `self` and the inner loop
    /// over `other`, both highest power first. Each product is accumulated
    /// into whatever the result already holds at that power.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::VariableMismatch`] if the operands are over
    /// different variables, or [`PolyError::PowerOverflow`] if a product
    /// power does not fit in [`Power`](crate::Power).
    pub fn try_multiply(&self, other: &Self) -> Result<Self> {
        self.check_variable(other)?;
        trace!(lhs = self.len(), rhs = other.len(), "multiply");

        let mut result = Self::with_variable(self.variable());
        if self.is_empty() || other.is_empty() {
            return Ok(result);
        }

        for a in self {
            for b in other {
                let power = a
                    .power()
                    .checked_add(b.power())
                    .ok_or(PolyError::PowerOverflow {
                        left: a.power(),
                        right: b.power(),
                    })?;
                let product = a.coefficient().clone() * b.coefficient().clone();
                let accumulated = result.coefficient(power) + product;
                result.set_coefficient(accumulated, power);
            }
        }

        Ok(result)
    }

    /// Multiplies two polynomials, returning an empty store on failure.
    ///
    /// See [`try_multiply`](Self::try_multiply) for the failure cases.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        self.try_multiply(other).unwrap_or_else(|err| {
            warn!(%err, "multiply produced an empty polynomial");
            Self::with_variable(self.variable())
        })
    }

    /// Multiplies every coefficient by `scalar`.
    ///
    /// Terms whose product is zero are dropped, so scaling by zero yields
    /// the empty store.
    #[must_use]
    pub fn scalar_multiply(&self, scalar: &T) -> Self {
        trace!(len = self.len(), "scalar multiply");
        let mut result = Self::with_variable(self.variable());
        for term in self {
            result.set_coefficient(term.coefficient().clone() * scalar.clone(), term.power());
        }
        result
    }
}
