//! # sparsepoly-rings
//!
//! Coefficient abstractions for sparse univariate polynomials.
//!
//! This crate provides:
//! - The `Coefficient` trait, blanket-implemented for every numeric type
//!   offering `Zero`, `One`, `+`, `*`, equality and text formatting
//! - `pow`, an exponentiation by squaring that accepts 64-bit exponents
//!
//! ## Supported Coefficients
//!
//! ```text
//! i32, i64, i128, u64, ...   machine integers
//! f32, f64                   floating point
//! Ratio<T>, BigInt           via num-rational / num-bigint
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod traits;

#[cfg(test)]
mod proptests;

pub use traits::{pow, Coefficient};
