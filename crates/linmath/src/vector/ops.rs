//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Generates an element-wise binary operator and its assigning form.
macro_rules! elementwise {
    ($op:ident::$f:ident, $op_assign:ident::$f_assign:ident, $sym:tt) => {
        /// Element-wise operation.
        impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
        where
            T: $op,
        {
            type Output = Vector<T::Output, N>;

            fn $f(self, rhs: Vector<T, N>) -> Self::Output {
                self.zip(rhs).map(|(l, r)| l $sym r)
            }
        }

        /// Element-wise operation.
        impl<T, const N: usize> $op_assign<Vector<T, N>> for Vector<T, N>
        where
            T: $op_assign,
        {
            fn $f_assign(&mut self, rhs: Vector<T, N>) {
                self.0
                    .iter_mut()
                    .zip(rhs.0)
                    .for_each(|(lhs, rhs)| lhs.$f_assign(rhs));
            }
        }
    };
}

elementwise!(Add::add, AddAssign::add_assign, +);
elementwise!(Sub::sub, SubAssign::sub_assign, -);
elementwise!(Mul::mul, MulAssign::mul_assign, *);
elementwise!(Div::div, DivAssign::div_assign, /);

// NB: element-wise `Mul<Vector>` and scaling `Mul<T>` coexist, which rules out a more generic
// `Mul<U> for Vector<T, N> where T: Mul<U>`. Same for `Div`.

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize> Mul<T> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize> MulAssign<T> for Vector<T, N>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Vector-Scalar division (scaling).
impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Vector-Scalar division (scaling).
impl<T, const N: usize> DivAssign<T> for Vector<T, N>
where
    T: DivAssign + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}

// Coherence only allows `Scalar * Vector` for concrete scalar types.
macro_rules! scalar_lhs_mul {
    ($($types:ty),+) => {
        $(
            /// Scalar-Vector multiplication (scaling).
            impl<const N: usize> Mul<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                fn mul(self, rhs: Vector<$types, N>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
