//! [`approx`] trait impls, comparing element by element.
//!
//! Compound values are considered approximately equal if all of their elements are.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Vector};

macro_rules! approx_impls {
    ($ty:ident<$($params:ident),+>) => {
        impl<T, $(const $params: usize),+> AbsDiffEq for $ty<T, $($params),+>
        where
            T: AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.elements()
                    .zip(other.elements())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<T, $(const $params: usize),+> RelativeEq for $ty<T, $($params),+>
        where
            T: RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.elements()
                    .zip(other.elements())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl<T, $(const $params: usize),+> UlpsEq for $ty<T, $($params),+>
        where
            T: UlpsEq,
            T::Epsilon: Copy,
        {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.elements()
                    .zip(other.elements())
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

approx_impls!(Vector<N>);
approx_impls!(Matrix<R, C>);

#[cfg(test)]
mod tests {
    use ::approx::{assert_abs_diff_eq, assert_relative_eq, assert_relative_ne, assert_ulps_eq};

    use crate::*;

    #[test]
    fn vector() {
        let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
        assert_relative_eq!(vec2(one, 2.0), vec2(1.0, 2.0));
        assert_ulps_eq!(vec2(one, 2.0), vec2(1.0, 2.0));
        assert_relative_ne!(vec2(1.0, 2.0), vec2(1.0, 2.1));
        assert_abs_diff_eq!(vec2(1.0, 2.0), vec2(1.0, 2.1), epsilon = 0.2);
    }

    #[test]
    fn matrix() {
        let m = Mat2d::identity() * 3.0;
        assert_relative_eq!(m, Matrix::new([[3.0 + 1e-14, 0.0], [0.0, 3.0]]), max_relative = 1e-12);
        assert_relative_ne!(m, Mat2d::identity());
    }

    #[test]
    fn nan_is_never_equal() {
        assert_relative_ne!(vec1(f32::NAN), vec1(f32::NAN));
    }
}
