//! Single polynomial terms.

use std::fmt;

use sparsepoly_rings::Coefficient;

/// The exponent of a term.
pub type Power = u64;

/// A single monomial `coefficient * var^power`.
///
/// Terms stored inside a [`TermStore`](crate::TermStore) never carry a
/// zero coefficient, but a free-standing `Term` may.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Term<T> {
    coefficient: T,
    power: Power,
}

impl<T> Term<T> {
    /// Creates a new term.
    #[must_use]
    pub const fn new(coefficient: T, power: Power) -> Self {
        Self { coefficient, power }
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coefficient(&self) -> &T {
        &self.coefficient
    }

    /// Returns the power.
    #[must_use]
    pub fn power(&self) -> Power {
        self.power
    }

    /// Splits the term into `(coefficient, power)`.
    #[must_use]
    pub fn into_parts(self) -> (T, Power) {
        (self.coefficient, self.power)
    }

    pub(crate) fn set_coefficient(&mut self, coefficient: T) {
        self.coefficient = coefficient;
    }
}

impl<T: Coefficient> Term<T> {
    /// Returns a displayable view of this term over `variable`.
    #[must_use]
    pub fn display_with(&self, variable: char) -> TermDisplay<'_, T> {
        TermDisplay {
            term: self,
            variable,
        }
    }
}

/// Renders one term the way [`TermStore::display_poly`](crate::TermStore::display_poly) does.
///
/// A coefficient of exactly one is dropped unless the term is a
/// constant; every other coefficient is wrapped in parentheses.
#[derive(Clone, Copy, Debug)]
pub struct TermDisplay<'a, T> {
    term: &'a Term<T>,
    variable: char,
}

impl<T: Coefficient> fmt::Display for TermDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Term { coefficient, power } = self.term;

        if !coefficient.is_unit() || *power == 0 {
            write!(f, "({coefficient})")?;
        }

        match *power {
            0 => Ok(()),
            1 => write!(f, "{}", self.variable),
            _ => write!(f, "{}^{power}", self.variable),
        }
    }
}
