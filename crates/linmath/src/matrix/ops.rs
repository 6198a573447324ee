use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{traits::Number, Matrix, Vector};

/// Row access.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.0[row]
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! elementwise {
    ($op:ident::$f:ident, $op_assign:ident::$f_assign:ident, $sym:tt) => {
        /// Element-wise operation.
        impl<T, const R: usize, const C: usize> $op<Matrix<T, R, C>> for Matrix<T, R, C>
        where
            T: $op,
        {
            type Output = Matrix<T::Output, R, C>;

            fn $f(self, rhs: Matrix<T, R, C>) -> Self::Output {
                let mut rhs = rhs.0.into_iter().flatten();
                self.map(|l| match rhs.next() {
                    Some(r) => l $sym r,
                    None => unreachable!("both matrices have `R * C` elements"),
                })
            }
        }

        /// Element-wise operation.
        impl<T, const R: usize, const C: usize> $op_assign<Matrix<T, R, C>> for Matrix<T, R, C>
        where
            T: $op_assign,
        {
            fn $f_assign(&mut self, rhs: Matrix<T, R, C>) {
                self.0
                    .iter_mut()
                    .flatten()
                    .zip(rhs.0.into_iter().flatten())
                    .for_each(|(lhs, rhs)| lhs.$f_assign(rhs));
            }
        }
    };
}

elementwise!(Add::add, AddAssign::add_assign, +);
elementwise!(Sub::sub, SubAssign::sub_assign, -);

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| self.row(row).dot(rhs))
    }
}

/// Matrix * Matrix.
///
/// The number of columns of the left operand must match the number of rows of the right one.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self.0[i][k] * rhs.0[k][j]))
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Mul + Copy,
{
    type Output = Matrix<T::Output, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        self.0.iter_mut().flatten().for_each(|lhs| *lhs *= rhs);
    }
}

macro_rules! scalar_lhs_mul {
    ($($types:ty),+) => {
        $(
            /// Scalar * Matrix.
            impl<const R: usize, const C: usize> Mul<Matrix<$types, R, C>> for $types {
                type Output = Matrix<$types, R, C>;

                fn mul(self, rhs: Matrix<$types, R, C>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
