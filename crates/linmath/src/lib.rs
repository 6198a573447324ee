//! Fixed-size linear algebra with dimensions checked at compile time.
//!
//! # Overview
//!
//! This crate provides two value types, [`Vector`] and [`Matrix`], whose dimensions are const
//! generic parameters. Every shape mismatch (adding a 2D vector to a 3D vector, multiplying a 2x3
//! matrix with another 2x3 matrix, constructing a vector from the wrong number of elements) is a
//! type error rather than a runtime check.
//!
//! Operations that only make sense for some shapes are only *available* for those shapes:
//!
//! - Named accessors ([`Vector::x`], [`Vector::y`], [`Vector::z`], [`Vector::w`]) only compile for
//!   vectors with enough components, and [`Vector::cross`] only for vectors with at least 3.
//! - [`Matrix::identity`], [`Matrix::inverse`] and friends exist only for square matrices.
//!
//! ```compile_fail
//! # use linmath::*;
//! // 2D vectors have no Z component.
//! let z = vec2(1.0, 2.0).z();
//! ```
//!
//! ```compile_fail
//! # use linmath::*;
//! // The inner dimensions of a matrix product must match.
//! let a = Mat2x3::<f32>::ZERO;
//! let b = Mat2x3::<f32>::ZERO;
//! let c = a * b;
//! ```
//!
//! # Goals & Non-Goals
//!
//! - No heap allocation, no dynamically-sized vectors or matrices. Everything is a `Copy` value
//!   when the element type is.
//! - A single, row-major, unpadded data layout for matrices.
//! - Generic over the element type, but only over [`Copy`] numeric types.
//! - Numeric edge cases (zero-length normalization, singular matrices) follow IEEE semantics and
//!   produce NaN or infinity instead of panicking. Where an explicit "no result" signal is more
//!   useful, an [`Option`] is returned instead (eg. [`Matrix::try_inverse`]).
//! - No printing or other I/O.

mod approx;
mod matrix;
mod traits;
mod vector;

pub use matrix::*;
pub use traits::*;
pub use vector::*;
