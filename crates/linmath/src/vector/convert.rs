//! Conversions between vectors of different element types and dimensions.

use std::ops::{Div, Mul};

use crate::{
    traits::{CastFrom, Zero},
    Vector,
};

impl<T, const N: usize> Vector<T, N> {
    /// Converts each element to the element type `U`, using `as`-cast semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = vec3(1.9f32, -2.5, 5.0).cast::<i32>();
    /// assert_eq!(v, [1, -2, 5]);
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        U: CastFrom<T>,
    {
        self.map(U::cast_from)
    }

    /// Returns a vector with `M` elements: the first `min(N, M)` elements of `self`, followed by
    /// zeroes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = vec2(2.1, -3.5);
    /// assert_eq!(v.resize::<3>(), [2.1, -3.5, 0.0]);
    /// assert_eq!(v.resize::<1>(), [2.1]);
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M>
    where
        T: Zero,
    {
        let mut elems = self.0.into_iter();
        Vector::from_fn(|_| elems.next().unwrap_or(T::ZERO))
    }

    /// Converts `self` to a vector with a different element type *and* dimension.
    ///
    /// This is [`Vector::cast`] and [`Vector::resize`] in one step: elements present in both
    /// vectors are converted, excess elements of `self` are dropped, and missing ones are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = vec4(-1.0f64, 3.23, 2.1, 4.0);
    /// let wide: Vector<i32, 5> = v.convert();
    /// assert_eq!(wide, [-1, 3, 2, 4, 0]);
    /// ```
    pub fn convert<U, const M: usize>(self) -> Vector<U, M>
    where
        U: CastFrom<T> + Zero,
    {
        self.cast::<U>().resize()
    }

    /// Overwrites `self` with the converted contents of `other`.
    ///
    /// Afterwards, `self` is equal to `other.convert()`: elements beyond the length of `other`
    /// are reset to zero rather than keeping their previous value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mut v = vec4(9, 9, 9, 9);
    /// v.assign_from(vec2(1.5f32, 2.5));
    /// assert_eq!(v, [1, 2, 0, 0]);
    /// ```
    pub fn assign_from<U, const M: usize>(&mut self, other: Vector<U, M>)
    where
        T: CastFrom<U> + Zero,
    {
        *self = other.convert();
    }

    /// Multiplies every element by `factor`, after casting it to `T`.
    ///
    /// The `*` operator requires the scalar to have the vector's exact element type; this accepts
    /// any scalar type `T` can be cast from.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = vec3(1.0f64, -2.0, 0.5).scaled_by(2.0f32);
    /// assert_eq!(v, [2.0, -4.0, 1.0]);
    ///
    /// // `as`-cast semantics: the factor is truncated first.
    /// assert_eq!(vec2(3i32, 4).scaled_by(2.9f64), [6, 8]);
    /// ```
    pub fn scaled_by<S>(self, factor: S) -> Vector<T::Output, N>
    where
        T: CastFrom<S> + Mul + Copy,
    {
        self * T::cast_from(factor)
    }

    /// Divides every element by `divisor`, after casting it to `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(9u8, 4).divided_by(2i64), [4, 2]);
    /// ```
    pub fn divided_by<S>(self, divisor: S) -> Vector<T::Output, N>
    where
        T: CastFrom<S> + Div + Copy,
    {
        self / T::cast_from(divisor)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn same_dimension() {
        let vd: Vec3d = vec3(1.182938394828, -2.49281739292, 5.495030919283);
        let vf: Vec3f = vd.cast();
        let vi: Vec3i = vf.cast();
        assert_eq!(vf, vd.map(|e| e as f32));
        assert_eq!(vi, [1, -2, 5]);
    }

    #[test]
    fn round_trip_loses_precision() {
        let vd: Vec3d = vec3(0.1, 1.0 / 3.0, -7.25);
        let back: Vec3d = vd.cast::<f32>().cast();
        assert_ne!(back, vd);
        assert_eq!(back[2], -7.25);
        for i in 0..3 {
            assert!((back[i] - vd[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn narrowing_and_widening() {
        let v2 = vec2(2.1f32, -3.53);
        assert_eq!(v2.resize::<3>(), [2.1, -3.53, 0.0]);
        assert_eq!(v2.resize::<1>(), [2.1]);
        assert_eq!(v2.resize::<2>(), v2);
        assert_eq!(v2.resize::<0>(), Vector::<f32, 0>::ZERO);

        let v5: Vector<i32, 5> = vec4(-1.0f32, 3.23, 2.1, 4.0).convert();
        assert_eq!(v5, [-1, 3, 2, 4, 0]);
        assert_eq!(v5.w(), 4);
        assert_eq!(v5[4], 0);
    }

    #[test]
    fn assign() {
        let mut v = Vector::<u8, 3>::splat(7);
        v.assign_from(vec2(300i32, -1));
        assert_eq!(v, [44u8, 255, 0]);
        v.assign_from(Vector::new([1.0f64, 2.0, 3.0, 4.0]));
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn mixed_type_scalars() {
        let v = vec3(1.5f64, -2.0, 0.25);
        assert_eq!(v.scaled_by(2.0f32), v * 2.0);
        assert_eq!(v.scaled_by(4u8), [6.0, -8.0, 1.0]);
        assert_eq!(v.divided_by(-2i32), [-0.75, 1.0, -0.125]);

        let v = vec4(10i32, -20, 30, 0);
        assert_eq!(v.scaled_by(3u64), [30, -60, 90, 0]);
        assert_eq!(v.divided_by(10.0f32), [1, -2, 3, 0]);
    }
}
