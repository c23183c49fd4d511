//! The ordered term store.
//!
//! A [`TermStore`] keeps the nonzero terms of a univariate polynomial in a
//! `Vec`, sorted by strictly descending power. The sort order doubles as
//! the search key, so lookups and insert positions are binary searches.

use std::fmt;

use sparsepoly_rings::Coefficient;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::{PolyError, Result};
use crate::term::{Power, Term};

/// A sparse univariate polynomial.
///
/// Invariants:
/// - terms are strictly descending by power
/// - no two terms share a power
/// - no stored coefficient is zero
///
/// Cloning deep-copies every term.
#[derive(Clone, PartialEq, Debug)]
pub struct TermStore<T> {
    /// Terms, highest power first.
    terms: Vec<Term<T>>,
    /// Variable symbol, used only for rendering and compatibility checks.
    variable: char,
}

impl<T: Coefficient> TermStore<T> {
    /// Creates an empty store over the default variable `x`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Creates an empty store over `variable`.
    #[must_use]
    pub fn with_variable(variable: char) -> Self {
        Self {
            terms: Vec::new(),
            variable,
        }
    }

    /// Creates an empty store from a configuration.
    #[must_use]
    pub fn with_config(config: &StoreConfig) -> Self {
        Self::with_variable(config.variable)
    }

    /// Builds a store from `(coefficient, power)` pairs.
    ///
    /// Pairs are applied in order with [`set_coefficient`](Self::set_coefficient),
    /// so a later pair for the same power replaces an earlier one and zero
    /// coefficients remove the power.
    #[must_use]
    pub fn from_terms<I>(variable: char, terms: I) -> Self
    where
        I: IntoIterator<Item = (T, Power)>,
    {
        let mut store = Self::with_variable(variable);
        for (coefficient, power) in terms {
            store.set_coefficient(coefficient, power);
        }
        store
    }

    /// Returns the variable symbol.
    #[must_use]
    pub fn variable(&self) -> char {
        self.variable
    }

    /// Returns the number of stored terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if no terms are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms, highest power first.
    #[must_use]
    pub fn terms(&self) -> &[Term<T>] {
        &self.terms
    }

    /// Iterates over the terms, highest power first.
    pub fn iter(&self) -> std::slice::Iter<'_, Term<T>> {
        self.terms.iter()
    }

    /// Returns the term with the highest power.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term<T>> {
        self.terms.first()
    }

    /// Returns the degree, or `None` for the empty store.
    #[must_use]
    pub fn degree(&self) -> Option<Power> {
        self.leading_term().map(Term::power)
    }

    /// Locates `power`: `Ok(index)` if stored, otherwise `Err(index)` where
    /// inserting keeps the descending order.
    fn position(&self, power: Power) -> std::result::Result<usize, usize> {
        self.terms.binary_search_by(|t| power.cmp(&t.power()))
    }

    /// Returns the term stored at `power`.
    #[must_use]
    pub fn lookup(&self, power: Power) -> Option<&Term<T>> {
        self.position(power).ok().map(|i| &self.terms[i])
    }

    /// Returns the coefficient at `power`, or zero if no term is stored.
    #[must_use]
    pub fn coefficient(&self, power: Power) -> T {
        self.lookup(power)
            .map_or_else(T::zero, |t| t.coefficient().clone())
    }

    /// Sets the coefficient at a caller-supplied power.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidPower`] if `power` is negative. The store
    /// is left unchanged in that case.
    pub fn change_coefficient(&mut self, coefficient: T, power: i64) -> Result<()> {
        let Ok(power) = Power::try_from(power) else {
            warn!(power, variable = %self.variable, "rejected negative power");
            return Err(PolyError::InvalidPower(power));
        };
        self.set_coefficient(coefficient, power);
        Ok(())
    }

    /// Sets the coefficient at `power`.
    ///
    /// A zero coefficient removes the term (a no-op if absent). A nonzero
    /// coefficient replaces an existing term in place, or inserts a new term
    /// at the position that keeps powers descending.
    pub fn set_coefficient(&mut self, coefficient: T, power: Power) {
        match (self.position(power), coefficient.is_zero()) {
            (Ok(i), true) => {
                self.terms.remove(i);
                debug!(power, variable = %self.variable, "removed term");
            }
            (Err(_), true) => {}
            (Ok(i), false) => {
                self.terms[i].set_coefficient(coefficient);
                debug!(power, variable = %self.variable, "updated term");
            }
            (Err(i), false) => {
                self.terms.insert(i, Term::new(coefficient, power));
                debug!(power, variable = %self.variable, "inserted term");
            }
        }
    }

    /// Removes every term. The variable is kept.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Renders the polynomial, highest power first.
    ///
    /// Terms are joined with `" + "`; negative coefficients keep their sign
    /// inside parentheses, e.g. `(5)x^3 + (-5)x`. The empty store renders
    /// as `0`.
    #[must_use]
    pub fn display_poly(&self) -> String {
        self.to_string()
    }
}

impl<T: Coefficient> Default for TermStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a TermStore<T> {
    type Item = &'a Term<T>;
    type IntoIter = std::slice::Iter<'a, Term<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<T: Coefficient> fmt::Display for TermStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term.display_with(self.variable))?;
        }
        Ok(())
    }
}
