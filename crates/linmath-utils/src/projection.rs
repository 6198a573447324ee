//! Projection matrices.
//!
//! All projections map into OpenGL-style clip space: after the perspective divide, the visible
//! volume is the cube from `(-1, -1, -1)` to `(1, 1, 1)`, and the camera looks down `-Z`.

use linmath::{Float, Mat4, Matrix};

use crate::to_radians;

/// Creates a perspective projection.
///
/// # Parameters
///
/// - `fov_degrees`: the vertical field of view, in degrees.
/// - `aspect`: the width of the viewport divided by its height.
/// - `near`, `far`: distances from the camera to the near and far clipping planes. Both should be
///   positive.
///
/// Degenerate inputs (zero `aspect`, `near == far`, or a field of view of 0° or 180°) produce
/// infinite or NaN elements.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// # use linmath_utils::projection::perspective;
/// # use approx::assert_relative_eq;
/// let proj = perspective(90.0, 1.0, 1.0, 100.0);
/// let clip: Vec4d = proj * vec4(0.0, 0.0, -1.0, 1.0);
/// assert_relative_eq!(clip.z() / clip.w(), -1.0, max_relative = 1e-12);
/// ```
pub fn perspective<T: Float>(fov_degrees: T, aspect: T, near: T, far: T) -> Mat4<T> {
    let o = T::ZERO;
    let two = T::ONE + T::ONE;
    if near == far || aspect == o {
        log::trace!(
            "degenerate perspective frustum: aspect={:?} near={:?} far={:?}",
            aspect,
            near,
            far
        );
    }

    let f = T::ONE / (to_radians(fov_degrees) / two).tan();
    let depth = near - far;
    Matrix::new([
        [f / aspect, o, o, o],
        [o, f, o, o],
        [o, o, (far + near) / depth, two * far * near / depth],
        [o, o, -T::ONE, o],
    ])
}

/// Creates an orthographic projection with a depth range of `[-1, 1]`.
///
/// `top` may be smaller than `bottom`, which flips the Y axis (eg. for pixel coordinates where Y
/// grows downwards).
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// # use linmath_utils::projection::orthographic;
/// # use approx::assert_abs_diff_eq;
/// let proj = orthographic(0.0, 800.0, 0.0, 600.0);
/// let center = proj * vec4(400.0, 300.0, 0.0, 1.0);
/// assert_abs_diff_eq!(center, vec4(0.0, 0.0, 0.0, 1.0), epsilon = 1e-12);
/// assert_eq!(proj * vec4(0.0, 0.0, 0.0, 1.0), [-1.0, 1.0, 0.0, 1.0]);
/// ```
pub fn orthographic<T: Float>(left: T, right: T, top: T, bottom: T) -> Mat4<T> {
    orthographic_with_depth(left, right, top, bottom, -T::ONE, T::ONE)
}

/// Creates an orthographic projection that maps `z = -near` to -1 and `z = -far` to 1.
pub fn orthographic_with_depth<T: Float>(
    left: T,
    right: T,
    top: T,
    bottom: T,
    near: T,
    far: T,
) -> Mat4<T> {
    let (o, i) = (T::ZERO, T::ONE);
    let two = i + i;
    if left == right || top == bottom || near == far {
        log::trace!(
            "degenerate orthographic volume: x={:?}..{:?} y={:?}..{:?} z={:?}..{:?}",
            left,
            right,
            bottom,
            top,
            near,
            far
        );
    }

    let width = right - left;
    let height = top - bottom;
    let depth = far - near;
    Matrix::new([
        [two / width, o, o, -(right + left) / width],
        [o, two / height, o, -(top + bottom) / height],
        [o, o, -two / depth, -(far + near) / depth],
        [o, o, o, i],
    ])
}
