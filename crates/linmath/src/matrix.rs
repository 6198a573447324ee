use std::{array, fmt};

use crate::{
    traits::{CastFrom, Float, Number, One, Zero},
    Vector,
};

mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;

/// A 1x1 matrix with [`f32`] elements.
pub type Mat1f = Mat1<f32>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A 1x1 matrix with [`f64`] elements.
pub type Mat1d = Mat1<f64>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::new`] takes a nested array in natural writing order: `R` rows of `C` elements.
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] accept arrays of row or column vectors (or
///   anything convertible to them).
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - For square matrices (where `R` equals `C`), [`Matrix::identity`] and
///   [`Matrix::from_diagonal`] create diagonal matrices.
/// - [`Matrix::ZERO`] (and the [`Default`] impl for numeric `T`) is a matrix with every element
///   set to 0.
///
/// # Element Access
///
/// Indexing with a single `usize` yields a whole row as an array, so `m[row][col]` works as it
/// would on the nested array. [`Matrix`] also implements [`Index`] and [`IndexMut`] for tuples of
/// `(usize, usize)`. The first element of the tuple is the *row*, the second is the *column*,
/// matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use linmath::*;
/// let mut mat = Matrix::new([
///     [0, 1],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[0][1], 1);
/// assert_eq!(mat[0], [4, 1]);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing:
///
/// ```
/// # use linmath::*;
/// let mat = Matrix::new([
///     [0, 1],
/// ]);
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

unsafe impl<T, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> where
    T: bytemuck::Zeroable
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    const ZERO_ROW: [T; C] = [T::ZERO; C];

    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Self::ZERO_ROW; R]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from its rows, given as arrays.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::new([
    ///     [1, -1, 2],
    ///     [0, -3, 1],
    /// ]);
    /// assert_eq!(mat[(1, 1)], -3);
    /// ```
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let rows = Matrix::from_rows([
    ///     vec2(0, 1),
    ///     vec2(2, 3),
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// See [`Matrix::from_rows`] for an example.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`]. Elements are created row by row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::new([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::new([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::new([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(|elem| f(elem))))
    }

    /// Converts each element to the element type `U`, using `as`-cast semantics.
    ///
    /// Unlike vectors, matrices can only be converted between element types, not between shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::new([[0.5f64, -1.5], [2.0, 3.75]]);
    /// assert_eq!(mat.cast::<i32>(), Matrix::new([[0, -1], [2, 3]]));
    /// ```
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        U: CastFrom<T>,
    {
        self.map(U::cast_from)
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::new([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::new([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        // Column `c` of `self` is assembled by taking the next element of every row in turn.
        let mut rows = self.0.map(|row| row.into_iter());
        Matrix(array::from_fn(|_| {
            array::from_fn(|r| match rows[r].next() {
                Some(elem) => elem,
                None => unreachable!("every row has `C` elements"),
            })
        }))
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::new([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mut mat = Matrix::new([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// if let Some(elem) = mat.get_mut(1, 0) {
    ///     *elem = 999;
    /// }
    /// if let Some(elem) = mat.get_mut(2, 0) {
    ///     *elem = 777;
    /// }
    /// assert_eq!(mat, Matrix::new([
    ///     [0, 1, 2],
    ///     [999, 4, 5],
    /// ]));
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Replaces the element at `(row, col)` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R` or `col >= C`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.0[row][col] = value;
    }

    /// Returns row `index` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= R`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(mat.row(1), vec2(3, 4));
    /// assert_eq!(mat.column(1), vec2(2, 4));
    /// ```
    pub fn row(&self, index: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::new(self.0[index])
    }

    /// Returns column `index` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= C`.
    pub fn column(&self, index: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][index])
    }

    /// Returns a reference to the underlying rows.
    #[inline]
    pub fn as_array(&self) -> &[[T; C]; R] {
        &self.0
    }

    /// Converts this [`Matrix`] into its array of rows.
    #[inline]
    pub fn into_array(self) -> [[T; C]; R] {
        self.0
    }

    /// Iterates over the elements in row-major order.
    pub(crate) fn elements(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flatten()
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Each row goes on one line, even with `{:#?}`.
        struct FormatRow<'a, T>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    #[inline]
    fn from(mat: Matrix<T, R, C>) -> Self {
        mat.0
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the `N`x`N` identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector or
    /// matrix with it returns that value unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = vec3(3.0, -1.0, 0.5);
    /// assert_eq!(Mat3f::identity() * v, v);
    /// assert_eq!(Mat2::<i32>::identity(), Matrix::new([[1, 0], [0, 1]]));
    /// ```
    pub fn identity() -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::new([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::new([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let mut this = Self::ZERO;
        for (i, elem) in diag.into().into_array().into_iter().enumerate() {
            this.0[i][i] = elem;
        }
        this
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// Computed by Gaussian elimination with partial pivoting, so the result is subject to
    /// floating-point rounding.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::new([
    ///     [4.0, 7.0],
    ///     [2.0, 6.0],
    /// ]);
    /// assert_eq!(mat.determinant(), 10.0);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T
    where
        T: Float,
    {
        let mut m = self.0;
        let mut det = T::ONE;
        for col in 0..N {
            let pivot_row = pivot_row(&m, col);
            let pivot = m[pivot_row][col];
            if pivot == T::ZERO {
                return T::ZERO;
            }
            if pivot_row != col {
                m.swap(pivot_row, col);
                det = -det;
            }
            det = det * pivot;

            for row in col + 1..N {
                let factor = m[row][col] / pivot;
                for j in col..N {
                    m[row][j] = m[row][j] - factor * m[col][j];
                }
            }
        }
        det
    }

    /// Computes the inverse of this matrix, or returns [`None`] if it is singular.
    ///
    /// Uses Gauss-Jordan elimination with partial pivoting. Alongside every element, elimination
    /// tracks the sum of magnitudes that went into it. A pivot is considered zero (and the matrix
    /// singular) when it does not exceed `N * EPSILON` times that sum, ie. when it is
    /// indistinguishable from cancellation noise. NaN pivots are also rejected.
    ///
    /// Since the threshold is per element, matrices mixing very large and very small entries (like
    /// a translation by a large offset) are handled as well as uniformly scaled ones.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::new([
    ///     [2.0, 1.0],
    ///     [4.0, 4.0],
    /// ]);
    /// let inv = mat.try_inverse().unwrap();
    /// assert_eq!(inv, Matrix::new([[1.0, -0.25], [-1.0, 0.5]]));
    ///
    /// let singular = Matrix::new([
    ///     [1.0, 2.0],
    ///     [2.0, 4.0],
    /// ]);
    /// assert_eq!(singular.try_inverse(), None);
    /// ```
    pub fn try_inverse(&self) -> Option<Self>
    where
        T: Float,
    {
        let noise = (0..N).fold(T::ZERO, |acc, _| acc + T::EPSILON);

        let mut lhs = self.0;
        let mut magnitude = self.map(|elem| elem.abs()).0;
        let mut inv = Self::identity().0;
        for col in 0..N {
            let pivot_row = pivot_row(&lhs, col);
            let pivot = lhs[pivot_row][col];
            if !(pivot.abs() > noise * magnitude[pivot_row][col]) {
                return None;
            }
            lhs.swap(pivot_row, col);
            magnitude.swap(pivot_row, col);
            inv.swap(pivot_row, col);

            let recip = T::ONE / pivot;
            for j in 0..N {
                lhs[col][j] = lhs[col][j] * recip;
                magnitude[col][j] = magnitude[col][j] * recip.abs();
                inv[col][j] = inv[col][j] * recip;
            }

            for row in 0..N {
                let factor = lhs[row][col];
                if row == col || factor == T::ZERO {
                    continue;
                }
                for j in 0..N {
                    lhs[row][j] = lhs[row][j] - factor * lhs[col][j];
                    magnitude[row][j] = magnitude[row][j] + factor.abs() * magnitude[col][j];
                    inv[row][j] = inv[row][j] - factor * inv[col][j];
                }
            }
        }

        Some(Self(inv))
    }

    /// Computes the inverse of this matrix.
    ///
    /// If the matrix is singular (see [`Matrix::try_inverse`]), every element of the result is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let inv = Mat2d::ZERO.inverse();
    /// assert!(inv[(0, 0)].is_nan());
    /// ```
    pub fn inverse(&self) -> Self
    where
        T: Float,
    {
        self.try_inverse()
            .unwrap_or_else(|| Self::from_fn(|_, _| T::NAN))
    }
}

/// Returns the row at or below `col` whose element in column `col` has the largest magnitude.
fn pivot_row<T: Float, const N: usize>(m: &[[T; N]; N], col: usize) -> usize {
    (col + 1..N).fold(col, |best, row| {
        if m[row][col].abs() > m[best][col].abs() {
            row
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::vec3;

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(
            Mat2x3::new([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_rows([vec3(1, 2, 3), vec3(4, 5, 6)]),
        );
    }

    #[test]
    fn row_major_layout() {
        let mat = Matrix::new([[1u8, 2, 3], [4, 5, 6]]);
        let bytes: &[u8] = bytemuck::bytes_of(&mat);
        assert_eq!(bytes, [1u8, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::new([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
        assert_eq!(mat.trace(), 3);
    }

    #[test]
    fn access() {
        let mut mat = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat[1], [4, 5, 6]);
        assert_eq!(mat[1][2], 6);
        assert_eq!(mat[(0, 2)], 3);
        assert_eq!(mat.row(0), [1, 2, 3]);
        assert_eq!(mat.column(0), [1, 4]);

        mat[0][0] = -1;
        mat[(1, 1)] = -5;
        mat.set(1, 2, -6);
        assert_eq!(mat, Matrix::new([[-1, 2, 3], [4, -5, -6]]));
        assert_eq!(mat.get(1, 3), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let mat = Mat2::<i32>::identity();
        let _ = mat[(2, 0)];
    }

    #[test]
    fn fmt() {
        let mat = Matrix::new([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::identity()), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat2x3::<i32>::default(), Mat2x3::<i32>::ZERO);
    }

    #[test]
    fn cast() {
        let mat = Matrix::new([[1.9f32, -2.9], [300.0, f32::NAN]]);
        assert_eq!(mat.cast::<u8>(), Matrix::new([[1u8, 0], [255, 0]]));
        assert_eq!(mat.cast::<i32>()[(0, 1)], -2);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat1f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat1f::identity().determinant(), 1.0);
        assert_eq!(Mat2f::identity().determinant(), 1.0);
        assert_eq!(Mat4f::identity().determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::new([
            [-2.0, -1.0,  2.0],
            [ 2.0,  1.0,  4.0],
            [-3.0,  3.0, -1.0],
        ]);
        assert_relative_eq!(testmat.determinant(), 54.0, max_relative = 1e-12);
        assert_relative_eq!(testmat.transpose().determinant(), 54.0, max_relative = 1e-12);

        // Swapping two rows flips the sign.
        let swapped = Matrix::new([testmat[1], testmat[0], testmat[2]]);
        assert_relative_eq!(swapped.determinant(), -54.0, max_relative = 1e-12);
    }

    #[test]
    fn inverse() {
        #[rustfmt::skip]
        let mat: Mat3d = Matrix::new([
            [2.0, 0.0, 1.0],
            [1.0, 3.0, 2.0],
            [1.0, 1.0, 1.0],
        ]);
        let inv = mat.try_inverse().unwrap();
        assert_abs_diff_eq!(mat * inv, Mat3d::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(inv * mat, Mat3d::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(mat.inverse(), inv);

        // Needs a row swap: the first pivot is zero.
        let perm = Matrix::new([[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(perm.inverse(), perm);

        assert_eq!(Mat4d::identity().inverse(), Mat4d::identity());
    }

    #[test]
    fn singular() {
        #[rustfmt::skip]
        let mat = Matrix::new([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        assert_eq!(mat.try_inverse(), None);
        assert!(mat.inverse().elements().all(|e| e.is_nan()));

        assert_eq!(Mat3f::ZERO.try_inverse(), None);
        assert!(Mat1f::new([[f32::NAN]]).try_inverse().is_none());

        // Tiny but exactly singular.
        let tiny = Matrix::new([[1e-30, 2e-30], [2e-30, 4e-30]]);
        assert_eq!(tiny.try_inverse(), None);
    }

    #[test]
    fn inverse_mixed_magnitudes() {
        #[rustfmt::skip]
        let translate: Mat4f = Matrix::new([
            [1.0, 0.0, 0.0, 5.0e6],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let inv = translate.try_inverse().unwrap();
        assert_eq!(inv[(0, 3)], -5.0e6);
        assert_eq!(translate * inv, Mat4f::identity());

        let mut far = Mat4d::identity();
        far[(0, 3)] = 1e16;
        far[(2, 3)] = -3e15;
        let inv = far.try_inverse().unwrap();
        assert_eq!(far * inv, Mat4d::identity());

        let diag = Mat4f::from_diagonal(Vector::new([1000.0, 1000.0, 1e-4, 1.0]));
        assert_relative_eq!(diag.determinant(), 100.0, max_relative = 1e-5);
        let inv = diag.try_inverse().unwrap();
        assert_relative_eq!(
            inv.into_diagonal(),
            Vector::new([1e-3, 1e-3, 1e4, 1.0]),
            max_relative = 1e-6
        );
        assert_relative_eq!(diag * inv, Mat4f::identity(), max_relative = 1e-6);

        // Uniform scaling doesn't change whether a matrix is invertible.
        #[rustfmt::skip]
        let mat: Mat3d = Matrix::new([
            [2.0, 0.0, 1.0],
            [1.0, 3.0, 2.0],
            [1.0, 1.0, 1.0],
        ]);
        for factor in [1e-200, 1e-8, 1e8, 1e200] {
            let inv = (mat * factor).try_inverse().unwrap();
            assert_abs_diff_eq!(mat * factor * inv, Mat3d::identity(), epsilon = 1e-12);
        }
    }
}
