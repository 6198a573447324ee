//! Geometric transform builders and small numeric helpers for [`linmath`] types.
//!
//! Everything in here is built on the public [`Vector`] and [`Matrix`] API; nothing reaches into
//! their storage.
//!
//! All transforms follow the column-vector convention: a transform `m` is applied to a point `p`
//! as `m * p`, and `a * b` applies `b` first.
//!
//! [`Vector`]: linmath::Vector
//! [`Matrix`]: linmath::Matrix

pub mod angle;
pub mod pretty;
pub mod projection;
pub mod solve;
pub mod transform;

pub use angle::{to_degrees, to_radians};
pub use solve::solve_quadratic;
