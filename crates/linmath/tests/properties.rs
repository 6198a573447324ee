//! Algebraic properties checked against randomly generated inputs.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use fastrand::Rng;
use linmath::*;

const ITERATIONS: usize = 200;

fn rng() -> Rng {
    Rng::with_seed(0x5eed_1a7e_0f_c0ffee)
}

fn int_vec<const N: usize>(rng: &mut Rng) -> Vector<i64, N> {
    Vector::from_fn(|_| rng.i64(-1000..1000))
}

fn float_vec<const N: usize>(rng: &mut Rng) -> Vector<f64, N> {
    Vector::from_fn(|_| rng.f64() * 20.0 - 10.0)
}

fn float_mat<const R: usize, const C: usize>(rng: &mut Rng) -> Matrix<f64, R, C> {
    Matrix::from_fn(|_, _| rng.f64() * 2.0 - 1.0)
}

#[test]
fn vector_addition() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = int_vec::<5>(&mut rng);
        let b = int_vec::<5>(&mut rng);
        assert_eq!(a + Vector::ZERO, a);
        assert_eq!(a + b, b + a);
        assert_eq!(a - a, Vector::<i64, 5>::ZERO);
        assert_eq!(a + b - b, a);
    }
}

#[test]
fn scalar_multiplication_commutes() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = int_vec::<3>(&mut rng);
        let s = rng.i64(-50..50);
        assert_eq!(v * s, s * v);

        let v = float_vec::<4>(&mut rng);
        let s = rng.f64();
        assert_eq!(v * s, s * v);
    }
}

#[test]
fn cross_product_is_orthogonal() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = float_vec::<3>(&mut rng);
        let b = float_vec::<3>(&mut rng);
        let c = a.cross(b);
        assert_abs_diff_eq!(a.dot(c), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.dot(c), 0.0, epsilon = 1e-9);
        assert_eq!(b.cross(a), -c);

        // Integer cross products are exact.
        let a = int_vec::<3>(&mut rng);
        let b = int_vec::<3>(&mut rng);
        let c = a.cross(b);
        assert_eq!(a.dot(c), 0);
        assert_eq!(b.dot(c), 0);
    }
}

#[test]
fn normalized_has_unit_length() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = float_vec::<6>(&mut rng);
        if v.length_squared() < 1e-6 {
            continue;
        }
        assert_relative_eq!(v.normalized().length(), 1.0, max_relative = 1e-12);
    }
}

#[test]
fn identity_is_neutral() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let m = float_mat::<4, 4>(&mut rng);
        assert_eq!(m * Mat4d::identity(), m);
        assert_eq!(Mat4d::identity() * m, m);

        let v = float_vec::<4>(&mut rng);
        assert_eq!(Mat4d::identity() * v, v);

        let rect = float_mat::<2, 3>(&mut rng);
        assert_eq!(Mat2d::identity() * rect * Mat3d::identity(), rect);
    }
}

#[test]
fn matrix_product_is_associative() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = float_mat::<2, 3>(&mut rng);
        let b = float_mat::<3, 4>(&mut rng);
        let c = float_mat::<4, 2>(&mut rng);
        assert_abs_diff_eq!((a * b) * c, a * (b * c), epsilon = 1e-12);

        let v = float_vec::<2>(&mut rng);
        assert_abs_diff_eq!((a * b * c) * v, a * (b * (c * v)), epsilon = 1e-12);
    }
}

#[test]
fn transpose_reverses_products() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = float_mat::<3, 2>(&mut rng);
        let b = float_mat::<2, 4>(&mut rng);
        assert_abs_diff_eq!((a * b).transpose(), b.transpose() * a.transpose(), epsilon = 1e-12);
        assert_eq!(a.transpose().transpose(), a);
    }
}

#[test]
fn inverse_roundtrip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        // Diagonally dominant, so always invertible.
        let m = float_mat::<4, 4>(&mut rng) + Mat4d::identity() * 8.0;
        let inv = m.try_inverse().expect("diagonally dominant matrix must be invertible");
        assert_abs_diff_eq!(m * inv, Mat4d::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(inv * m, Mat4d::identity(), epsilon = 1e-12);
        assert_relative_eq!(
            m.determinant() * inv.determinant(),
            1.0,
            max_relative = 1e-9
        );
    }
}

/// Rotation by `angle` in the plane spanned by axes `a` and `b`.
fn plane_rotation(a: usize, b: usize, angle: f64) -> Mat4d {
    let (sin, cos) = angle.sin_cos();
    let mut m = Mat4d::identity();
    m[(a, a)] = cos;
    m[(a, b)] = -sin;
    m[(b, a)] = sin;
    m[(b, b)] = cos;
    m
}

/// A random affine transform: scale, then rotate, then translate.
///
/// Scale factors span `1e-4..1e4`, offsets span `-max_offset..max_offset`.
fn affine(rng: &mut Rng, max_offset: f64) -> Mat4d {
    let factors = Vector::<f64, 3>::from_fn(|_| 10f64.powf(rng.f64() * 8.0 - 4.0));
    let scale = Mat4d::from_diagonal(factors.extend(1.0));

    let mut angle = || (rng.f64() * 2.0 - 1.0) * std::f64::consts::PI;
    let rotation = plane_rotation(0, 1, angle())
        * plane_rotation(1, 2, angle())
        * plane_rotation(2, 0, angle());

    let mut translation = Mat4d::identity();
    for row in 0..3 {
        translation[(row, 3)] = (rng.f64() * 2.0 - 1.0) * max_offset;
    }
    translation * rotation * scale
}

/// Asserts that `m * m.try_inverse()` is the identity, up to rounding relative to the magnitudes
/// involved in each element.
fn assert_inverts<T: Float + CastFrom<f64>>(m: Mat4<T>) {
    let inv = m
        .try_inverse()
        .unwrap_or_else(|| panic!("{:?} should be invertible", m));
    let residual = m * inv - Mat4::identity();
    let magnitude = m.map(|e| e.abs()) * inv.map(|e| e.abs());
    let tolerance = T::cast_from(1000.0) * T::EPSILON;
    for row in 0..4 {
        for col in 0..4 {
            let limit = tolerance * (magnitude[(row, col)] + T::ONE);
            assert!(
                residual[(row, col)].abs() <= limit,
                "residual {:?} at ({}, {}) exceeds {:?} for {:?}",
                residual[(row, col)],
                row,
                col,
                limit,
                m
            );
        }
    }
}

#[test]
fn inverse_of_wide_range_transforms() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        assert_inverts(affine(&mut rng, 1e12));
        assert_inverts(affine(&mut rng, 1e6).cast::<f32>());
    }
}

#[test]
fn singular_matrices() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        // A zero column makes any matrix singular.
        let mut m = float_mat::<3, 3>(&mut rng);
        let col = rng.usize(0..3);
        for row in 0..3 {
            m[row][col] = 0.0;
        }
        assert_eq!(m.try_inverse(), None);
        assert!(m.inverse().into_array().iter().flatten().all(|e| e.is_nan()));
        assert_eq!(m.determinant(), 0.0);
    }
}

#[test]
fn conversion_roundtrip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let vd = float_vec::<3>(&mut rng);
        let vf: Vec3f = vd.cast();
        let back: Vec3d = vf.cast();
        assert_relative_eq!(back, vd, max_relative = 1e-6);

        let wide: Vector<f64, 5> = vd.resize();
        assert_eq!(wide.resize::<3>(), vd);
        assert_eq!(wide[3], 0.0);
        assert_eq!(wide[4], 0.0);
    }
}

#[test]
fn reference_products() {
    let m = Matrix::new([[1.0, -1.0, 2.0], [0.0, -3.0, 1.0]]);
    assert_eq!(m * vec3(2.0, 1.0, 0.0), [1.0, -3.0]);

    let md = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    let me = Matrix::new([[7, 8], [9, 10], [11, 12]]);
    assert_eq!(md * me, Matrix::new([[58, 64], [139, 154]]));
}
