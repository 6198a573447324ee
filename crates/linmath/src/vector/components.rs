//! Named component access, gated on the vector's dimension.
//!
//! [`Vector::x`] and friends only compile for vectors that actually have the component. The check
//! happens when the method is instantiated, so it covers every dimension:
//!
//! ```
//! # use linmath::*;
//! let mut v = vec3(1.0, 2.0, 3.0);
//! v.set_z(-3.0);
//! assert_eq!(v.z(), -3.0);
//! ```
//!
//! ```compile_fail
//! # use linmath::*;
//! let v = vec3(1.0, 2.0, 3.0);
//! let w = v.w();
//! ```
//!
//! ```compile_fail
//! # use linmath::*;
//! let c = vec2(1.0, 0.0).cross(vec2(0.0, 1.0));
//! ```

use crate::{traits::Number, Vector};

/// Compile-time check that a vector of dimension `N` has at least `MIN` components.
///
/// Referencing [`AtLeast::OK`] in a function body makes every instantiation with `N < MIN` fail to
/// compile.
struct AtLeast<const N: usize, const MIN: usize>;

impl<const N: usize, const MIN: usize> AtLeast<N, MIN> {
    const OK: () = assert!(N >= MIN, "vector has too few dimensions for this component");
}

macro_rules! component {
    ($index:literal, $get:ident, $set:ident, $get_mut:ident) => {
        impl<T, const N: usize> Vector<T, N> {
            #[doc = concat!("Returns element ", $index, " (`", stringify!($get), "`).")]
            #[inline]
            pub fn $get(&self) -> T
            where
                T: Copy,
            {
                let () = AtLeast::<N, { $index + 1 }>::OK;
                self.0[$index]
            }

            #[doc = concat!("Replaces element ", $index, " (`", stringify!($get), "`) with `value`.")]
            #[inline]
            pub fn $set(&mut self, value: T) {
                let () = AtLeast::<N, { $index + 1 }>::OK;
                self.0[$index] = value;
            }

            #[doc = concat!("Returns a mutable reference to element ", $index, " (`", stringify!($get), "`).")]
            #[inline]
            pub fn $get_mut(&mut self) -> &mut T {
                let () = AtLeast::<N, { $index + 1 }>::OK;
                &mut self.0[$index]
            }
        }
    };
}
component!(0, x, set_x, x_mut);
component!(1, y, set_y, y_mut);
component!(2, z, set_z, z_mut);
component!(3, w, set_w, w_mut);

impl<T, const N: usize> Vector<T, N> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`; swapping the arguments inverts its
    /// direction.
    ///
    /// Only the first three components take part. For vectors with more than 3 dimensions, all
    /// components of the result past `z` are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    ///
    /// // `w` is ignored and zeroed.
    /// assert_eq!(vec4(1, 0, 0, 5).cross(vec4(0, 1, 0, 7)), [0, 0, 1, 0]);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let () = AtLeast::<N, 3>::OK;
        let (a1, a2, a3) = (self.x(), self.y(), self.z());
        let (b1, b2, b3) = (other.x(), other.y(), other.z());

        let mut cross = Self::ZERO;
        cross.set_x(a2 * b3 - a3 * b2);
        cross.set_y(a3 * b1 - a1 * b3);
        cross.set_z(a1 * b2 - a2 * b1);
        cross
    }
}
