//! Dense matrix and vector primitives.
//!
//! [`Matrix`] and [`Vector`] are independent, heap backed containers of `f64`.
//! Reads are forgiving: out of range element reads return `0.0`. Matrix
//! mutation and arithmetic validate their inputs and return [`LinalgError`].
//! Vector arithmetic keeps a soft-fail contract and returns an empty vector on
//! mismatched operands, with `checked_*` variants for explicit errors.

mod error;
mod glam_ext;
mod matrix;
mod vector;

pub use error::{LinalgError, Result};
pub use matrix::Matrix;
pub use vector::{cross_product, dot_product, Vector};

pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0, |dot, (&lhs, &rhs)| dot + lhs * rhs)
}
