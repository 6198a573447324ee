//! Walks through the vector and matrix API and logs every intermediate result.
//!
//! Usage: `linmath-demo [--digits <n>]`
//!
//! `--digits` selects how many fractional digits are printed. Verbosity can be adjusted with the
//! `RUST_LOG` environment variable.

use std::fmt;

use anyhow::{bail, ensure, Context};
use linmath::*;
use linmath_utils::{
    pretty::{self, Precision},
    projection::{orthographic, perspective},
    solve_quadratic, to_radians,
    transform::{rotation_x, rotation_y, rotation_z, scale, translation},
};
use log::LevelFilter;

/// Used where the demo wants to show conversion artifacts regardless of `--digits`.
const DETAILED: Precision = Precision::Digits(12);

/// Initializes logging to *stderr*.
///
/// This binary and `linmath-utils` log at *trace* level with `debug_assertions` and at *debug*
/// level otherwise. `RUST_LOG` is applied on top.
fn init_logger() {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("linmath_utils"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

fn parse_args() -> anyhow::Result<Precision> {
    let mut precision = Precision::Default;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--digits" => {
                let value = args.next().context("`--digits` requires a value")?;
                let digits = value
                    .parse()
                    .with_context(|| format!("invalid digit count `{value}`"))?;
                precision = Precision::Digits(digits);
            }
            _ => bail!("usage: linmath-demo [--digits <n>]"),
        }
    }
    Ok(precision)
}

fn show_vector<T: fmt::Display, const N: usize>(
    label: &str,
    v: &Vector<T, N>,
    precision: Precision,
) {
    log::info!("{label}:\n{}", pretty::vector(v, precision));
}

fn show_matrix<T: fmt::Display, const R: usize, const C: usize>(
    label: &str,
    m: &Matrix<T, R, C>,
    precision: Precision,
) {
    log::info!("{label}:\n{}", pretty::matrix(m, precision));
}

fn is_close<const N: usize>(a: Vector<f64, N>, b: Vector<f64, N>) -> bool {
    (a - b).length() < 1e-12
}

fn vectors(p: Precision) -> anyhow::Result<()> {
    log::info!("testing vector...");
    let v = vec3(0.0f32, 2.0, 1.0);
    ensure!(v == Vector::new([0.0, 2.0, 1.0]), "vector construction");
    show_vector("v * 2", &(v * 2.0), p);
    show_vector("2 * v", &(2.0 * v), p);
    ensure!(v * 2.0 == 2.0 * v, "scalar multiplication must commute");
    show_vector("v", &v, p);

    let v4 = vec4(-1.0f32, 3.23, 2.1, 4.0);
    let v5i: Vector<i32, 5> = v4.convert();
    show_vector("v4", &v4, p);
    show_vector("v4 as 5 ints", &v5i, p);
    log::info!("w components: {} {}", v4.w(), v5i.w());
    ensure!(v5i == [-1, 3, 2, 4, 0], "conversion produced {:?}", v5i);
    Ok(())
}

fn matrices(p: Precision) -> anyhow::Result<()> {
    log::info!("testing matrix...");
    let identity = Mat3f::identity();
    ensure!(
        identity == Matrix::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
        "identity is {:?}",
        identity
    );
    show_matrix("identity", &identity, p);

    let m: Mat4x2<f32> = Matrix::new([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]]);
    show_matrix("4x2", &m, p);
    Ok(())
}

fn operations(p: Precision) -> anyhow::Result<()> {
    log::info!("testing operations...");
    let v = vec3(2.0, 1.0, 0.0);
    let mat: Mat2x3<f64> = Matrix::new([[1.0, -1.0, 2.0], [0.0, -3.0, 1.0]]);
    let result = mat * v;
    ensure!(result == [1.0, -3.0], "matrix * vector is {:?}", result);
    show_vector("matrix * vector", &result, p);

    let length_squared = v.length_squared();
    log::info!("length squared: {length_squared}");
    ensure!(length_squared == 5.0, "length squared is {}", length_squared);

    let cross = v.cross(vec3(-2.0, 3.0, 1.0));
    show_vector("cross product", &cross, p);
    ensure!(cross == [1.0, -2.0, 8.0], "cross product is {:?}", cross);
    Ok(())
}

fn rotations(p: Precision) -> anyhow::Result<()> {
    let cases = [
        ("X rotation by 90°", rotation_x(to_radians(90.0))),
        ("X rotation by 45°", rotation_x(to_radians(45.0))),
        ("Y rotation by 90°", rotation_y(to_radians(90.0))),
        ("Z rotation by 90°", rotation_z(to_radians(90.0))),
    ];
    for (label, rot) in cases {
        show_matrix(label, &rot, p);
        for (axis, hat) in [("x", Vec4d::X), ("y", Vec4d::Y), ("z", Vec4d::Z)] {
            show_vector(&format!("rotated {axis}"), &(rot * hat), p);
        }
    }

    let (rx, ry, rz) = (cases[0].1, cases[2].1, cases[3].1);
    ensure!(is_close(rx * Vec4d::Y, Vec4d::Z), "X rotation must map Y to Z");
    ensure!(is_close(ry * Vec4d::Z, Vec4d::X), "Y rotation must map Z to X");
    ensure!(is_close(rz * Vec4d::X, Vec4d::Y), "Z rotation must map X to Y");
    Ok(())
}

fn products(p: Precision) -> anyhow::Result<()> {
    log::info!("testing matrix operations...");
    let ma = Mat4d::identity();
    let mb = Mat4d::identity();
    let mc = ma * mb;
    show_matrix("ma", &ma, p);
    show_matrix("mb", &mb, p);
    show_matrix("ma * mb", &mc, p);
    ensure!(ma == mb && ma == mc, "identity products must be identity");

    let md: Mat2x3<f32> = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let me: Mat3x2<f32> = Matrix::new([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
    let mf = md * me;
    show_matrix("md", &md, p);
    show_matrix("me", &me, p);
    show_matrix("md * me", &mf, p);
    ensure!(
        mf == Matrix::new([[58.0, 64.0], [139.0, 154.0]]),
        "md * me is {:?}",
        mf
    );
    show_matrix("ma * mb * mc", &(ma * mb * mc), p);

    let quarter = to_radians(90.0);
    let rotation: Mat4d = rotation_z(quarter) * rotation_y(quarter) * rotation_x(quarter);
    let transform = translation(vec3(0.0, 1.0, 2.0)) * rotation;
    show_matrix("translated rotation", &transform, p);

    let inverse = transform
        .try_inverse()
        .context("rigid transforms must be invertible")?;
    show_matrix("inverse", &inverse, p);
    let roundtrip = transform * inverse;
    ensure!(
        (0..4).all(|i| is_close(roundtrip.row(i), Mat4d::identity().row(i))),
        "transform * inverse is {:?}",
        roundtrip
    );
    let singular: Mat4d = scale(vec3(1.0, 0.0, 1.0));
    ensure!(singular.try_inverse().is_none(), "flattening scale must be singular");
    show_matrix("inverse of a singular matrix", &singular.inverse(), p);

    let proj: Mat4d = perspective(90.0, 4.0 / 3.0, 1.0, 100.0);
    show_matrix("perspective projection", &proj, p);
    let point = vec4(1.0, 1.0, 0.0, 1.0);
    let projected = proj * scale(vec3(1.0, 1.0, 1.0)) * translation(vec3(0.0, 0.0, 0.0)) * point;
    show_vector("point", &point, p);
    show_vector("projected point", &projected, p);
    Ok(())
}

fn conversions(p: Precision) -> anyhow::Result<()> {
    log::info!("testing some conversions...");
    let vd = vec3(1.182938394828, -2.49281739292, 5.495030919283);
    let vf: Vec3f = vd.cast();
    let vi: Vec3i = vf.cast();
    show_vector("f64", &vd, DETAILED);
    show_vector("f32", &vf, DETAILED);
    show_vector("i32", &vi, DETAILED);
    ensure!(vi == [1, -2, 5], "float to int conversion is {:?}", vi);

    let v2f = vec2(2.1f32, -3.53);
    let v3f = v2f.resize::<3>();
    let v1f = v2f.resize::<1>();
    show_vector("1D", &v1f, p);
    show_vector("2D", &v2f, p);
    show_vector("3D", &v3f, p);
    ensure!(v3f == [2.1, -3.53, 0.0] && v1f == [2.1], "resizing changed elements");

    let ortho = orthographic(0.0f32, 800.0, 0.0, 600.0);
    show_matrix("orthographic projection", &ortho, p);
    Ok(())
}

fn equations(p: Precision) -> anyhow::Result<()> {
    log::info!("solving quadratic equations...");
    for (a, b, c) in [(1.0, -3.0, 2.0), (1.0, 2.0, 1.0), (1.0, 2.0, 5.0)] {
        let equation = format!("{a}x² + {b}x + {c}");
        match solve_quadratic::<f64>(a, b, c) {
            Some((x0, x1)) => show_vector(&format!("roots of {equation}"), &vec2(x0, x1), p),
            None => log::info!("{equation} has no real roots"),
        }
    }
    ensure!(solve_quadratic(1.0, -3.0, 2.0) == Some((1.0, 2.0)), "wrong roots");
    ensure!(solve_quadratic(1.0, 2.0, 5.0).is_none(), "expected no real roots");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let precision = parse_args()?;

    vectors(precision)?;
    matrices(precision)?;
    operations(precision)?;
    rotations(precision)?;
    products(precision)?;
    conversions(precision)?;
    equations(precision)?;

    log::info!("all checks passed");
    Ok(())
}
