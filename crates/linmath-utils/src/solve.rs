//! Equation solving.

use linmath::Float;

/// Computes the real roots of `a·x² + b·x + c = 0`.
///
/// Returns the roots as `(x0, x1)` with `x0 <= x1`, or [`None`] if the equation has no real
/// roots. A double root is returned twice. `a` must be non-zero; a linear equation is not
/// considered quadratic and yields [`None`] as well.
///
/// The roots are computed as `q / a` and `c / q` with `q = -(b ± √d) / 2`, which avoids the
/// cancellation that the textbook formula suffers from when `b² ≫ 4ac`.
///
/// # Examples
///
/// ```
/// # use linmath_utils::solve_quadratic;
/// assert_eq!(solve_quadratic(1.0, -3.0, 2.0), Some((1.0, 2.0)));
/// assert_eq!(solve_quadratic(1.0, 2.0, 1.0), Some((-1.0, -1.0)));
/// assert_eq!(solve_quadratic(1.0, 2.0, 5.0), None);
/// ```
pub fn solve_quadratic<T: Float>(a: T, b: T, c: T) -> Option<(T, T)> {
    if a == T::ZERO {
        log::trace!("not a quadratic equation: a=0, b={:?}, c={:?}", b, c);
        return None;
    }

    let two = T::ONE + T::ONE;
    let discr = b * b - two * two * a * c;
    // Also rejects NaN.
    if !(discr >= T::ZERO) {
        log::trace!(
            "no real roots: a={:?}, b={:?}, c={:?} (discriminant {:?})",
            a,
            b,
            c,
            discr
        );
        return None;
    }

    if discr == T::ZERO {
        let root = -b / (two * a);
        return Some((root, root));
    }

    let sqrt = discr.sqrt();
    let q = if b > T::ZERO {
        -(b + sqrt) / two
    } else {
        -(b - sqrt) / two
    };
    let (x0, x1) = (q / a, c / q);
    if x0 > x1 {
        Some((x1, x0))
    } else {
        Some((x0, x1))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn two_roots() {
        assert_eq!(solve_quadratic(1.0, -3.0, 2.0), Some((1.0, 2.0)));
        assert_eq!(solve_quadratic(-1.0, 3.0, -2.0), Some((1.0, 2.0)));
        assert_eq!(solve_quadratic(2.0f32, 0.0, -8.0), Some((-2.0, 2.0)));
        assert_eq!(solve_quadratic(1.0, 5.0, 0.0), Some((-5.0, 0.0)));
    }

    #[test]
    fn double_root() {
        assert_eq!(solve_quadratic(1.0, 2.0, 1.0), Some((-1.0, -1.0)));
        assert_eq!(solve_quadratic(4.0, -4.0, 1.0), Some((0.5, 0.5)));
    }

    #[test]
    fn no_roots() {
        assert_eq!(solve_quadratic(1.0, 2.0, 5.0), None);
        assert_eq!(solve_quadratic(1.0, 0.0, 1.0), None);
        assert_eq!(solve_quadratic(0.0, 2.0, 1.0), None);
        assert_eq!(solve_quadratic(f64::NAN, 2.0, 1.0), None);
    }

    #[test]
    fn stable_for_small_roots() {
        // x² - 1e8·x + 1 has roots near 1e8 and 1e-8. The textbook formula loses the small one.
        let (small, large) = solve_quadratic(1.0, -1e8, 1.0).unwrap();
        assert_relative_eq!(small, 1e-8, max_relative = 1e-12);
        assert_relative_eq!(large, 1e8, max_relative = 1e-12);
    }
}
