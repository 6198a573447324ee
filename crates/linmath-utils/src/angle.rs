//! Degree/radian conversion.

use linmath::Float;

/// Converts an angle in degrees to radians.
///
/// # Examples
///
/// ```
/// # use linmath_utils::to_radians;
/// # use approx::assert_relative_eq;
/// assert_relative_eq!(to_radians(180.0f64), std::f64::consts::PI);
/// ```
#[inline]
pub fn to_radians<T: Float>(degrees: T) -> T {
    degrees.to_radians()
}

/// Converts an angle in radians to degrees.
///
/// # Examples
///
/// ```
/// # use linmath_utils::to_degrees;
/// # use approx::assert_relative_eq;
/// assert_relative_eq!(to_degrees(std::f32::consts::FRAC_PI_2), 90.0);
/// ```
#[inline]
pub fn to_degrees<T: Float>(radians: T) -> T {
    radians.to_degrees()
}
