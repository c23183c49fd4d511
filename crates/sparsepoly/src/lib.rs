//! # sparsepoly
//!
//! Sparse univariate polynomials for any numeric coefficient type.
//!
//! This crate provides:
//! - `Term`, a single `(coefficient, power)` monomial
//! - `TermStore`, the nonzero terms of a polynomial kept in descending
//!   power order, with lookup, in-place update and rendering
//! - Addition by sorted merge, multiplication by convolution, scalar
//!   multiplication and evaluation
//!
//! ## Example
//!
//! ```rust
//! use sparsepoly::TermStore;
//!
//! let mut p = TermStore::new();
//! p.change_coefficient(3, 2).unwrap();
//! p.change_coefficient(-1, 0).unwrap();
//!
//! assert_eq!(p.display_poly(), "(3)x^2 + (-1)");
//! assert_eq!(p.evaluate(&2), 11);
//! assert_eq!(p.scalar_multiply(&2).display_poly(), "(6)x^2 + (-2)");
//! ```
//!
//! ## Mismatched Variables
//!
//! `add` and `multiply` return an empty store when the operands use
//! different variable symbols. `try_add` and `try_multiply` report the
//! mismatch as a `PolyError` instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod ops;
pub mod store;
pub mod term;

#[cfg(test)]
mod proptests;

pub use config::StoreConfig;
pub use error::{PolyError, Result};
pub use store::TermStore;
pub use term::{Power, Term};
