//! Affine transforms in homogeneous coordinates.
//!
//! 3D transforms are [`Mat4`]s acting on `(x, y, z, 1)` points and `(x, y, z, 0)` directions. 2D
//! transforms are [`Mat3`]s acting on `(x, y, 1)`.
//!
//! Rotations are right-handed: looking down the rotation axis towards the origin, a positive
//! angle rotates counterclockwise.

use linmath::{Float, Mat3, Mat4, Matrix, Vec2, Vec3};

/// Creates a rotation about the X axis by `radians`.
///
/// A rotation by 90° maps +Y to +Z.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// # use linmath_utils::{to_radians, transform::rotation_x};
/// # use approx::assert_abs_diff_eq;
/// let rot = rotation_x(to_radians(90.0f64));
/// assert_abs_diff_eq!(rot * Vec4d::Y, Vec4d::Z, epsilon = 1e-15);
/// ```
pub fn rotation_x<T: Float>(radians: T) -> Mat4<T> {
    let (o, i) = (T::ZERO, T::ONE);
    let (s, c) = (radians.sin(), radians.cos());
    Matrix::new([
        [i, o, o, o],
        [o, c, -s, o],
        [o, s, c, o],
        [o, o, o, i],
    ])
}

/// Creates a rotation about the Y axis by `radians`.
///
/// A rotation by 90° maps +Z to +X.
pub fn rotation_y<T: Float>(radians: T) -> Mat4<T> {
    let (o, i) = (T::ZERO, T::ONE);
    let (s, c) = (radians.sin(), radians.cos());
    Matrix::new([
        [c, o, s, o],
        [o, i, o, o],
        [-s, o, c, o],
        [o, o, o, i],
    ])
}

/// Creates a rotation about the Z axis by `radians`.
///
/// A rotation by 90° maps +X to +Y.
pub fn rotation_z<T: Float>(radians: T) -> Mat4<T> {
    let (o, i) = (T::ZERO, T::ONE);
    let (s, c) = (radians.sin(), radians.cos());
    Matrix::new([
        [c, -s, o, o],
        [s, c, o, o],
        [o, o, i, o],
        [o, o, o, i],
    ])
}

/// Creates a counterclockwise 2D rotation by `radians`.
pub fn rotation_2d<T: Float>(radians: T) -> Mat3<T> {
    let (o, i) = (T::ZERO, T::ONE);
    let (s, c) = (radians.sin(), radians.cos());
    Matrix::new([
        [c, -s, o],
        [s, c, o],
        [o, o, i],
    ])
}

/// Creates a translation by `offset`.
///
/// Points (`w = 1`) are moved, directions (`w = 0`) are left unchanged.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// # use linmath_utils::transform::translation;
/// let m = translation(vec3(1.0, 2.0, 3.0));
/// assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), [2.0, 3.0, 4.0, 1.0]);
/// assert_eq!(m * vec4(1.0, 1.0, 1.0, 0.0), [1.0, 1.0, 1.0, 0.0]);
/// ```
pub fn translation<T: Float>(offset: Vec3<T>) -> Mat4<T> {
    let mut m = Mat4::identity();
    for (row, value) in offset.into_array().into_iter().enumerate() {
        m[(row, 3)] = value;
    }
    m
}

/// Creates a 2D translation by `offset`.
pub fn translation_2d<T: Float>(offset: Vec2<T>) -> Mat3<T> {
    let mut m = Mat3::identity();
    m[(0, 2)] = offset.x();
    m[(1, 2)] = offset.y();
    m
}

/// Creates a scaling transform with a separate factor for each axis.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// # use linmath_utils::transform::scale;
/// let m = scale(vec3(2.0, 3.0, 4.0));
/// assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), [2.0, 3.0, 4.0, 1.0]);
/// ```
pub fn scale<T: Float>(factors: Vec3<T>) -> Mat4<T> {
    Matrix::from_diagonal(factors.extend(T::ONE))
}

/// Creates a 2D scaling transform.
pub fn scale_2d<T: Float>(factors: Vec2<T>) -> Mat3<T> {
    Matrix::from_diagonal(factors.extend(T::ONE))
}
