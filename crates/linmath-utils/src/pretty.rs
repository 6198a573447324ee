//! Console-friendly rendering of vectors and matrices.
//!
//! The output is bracketed, space-separated, and underlined with dashes so that consecutive values
//! are easy to tell apart in a log:
//!
//! ```text
//! [ 1 2 ]
//! [ 3 4 ]
//! -------
//! ```

use std::fmt;

use linmath::{Matrix, Vector};

/// How many fractional digits to print for each element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Precision {
    /// Use the element's [`fmt::Display`] impl as-is.
    #[default]
    Default,
    /// Print exactly this many digits after the decimal point.
    ///
    /// Has no effect on integer elements.
    Digits(usize),
}

fn element<T: fmt::Display>(elem: &T, precision: Precision) -> String {
    match precision {
        Precision::Default => elem.to_string(),
        Precision::Digits(digits) => format!("{:.*}", digits, elem),
    }
}

/// Renders a vector as `[ a b c ]`, underlined with dashes.
///
/// The result has no trailing newline.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// # use linmath_utils::pretty::{self, Precision};
/// let text = pretty::vector(&vec3(0, 2, 1), Precision::Default);
/// assert_eq!(text, "[ 0 2 1 ]\n---------");
///
/// let text = pretty::vector(&vec2(0.5, -1.0), Precision::Digits(2));
/// assert_eq!(text, "[ 0.50 -1.00 ]\n--------------");
/// ```
pub fn vector<T: fmt::Display, const N: usize>(v: &Vector<T, N>, precision: Precision) -> String {
    let mut line = String::from("[ ");
    for i in 0..N {
        line.push_str(&element(&v[i], precision));
        line.push(' ');
    }
    line.push(']');

    let underline = "-".repeat(line.chars().count());
    format!("{line}\n{underline}")
}

/// Renders a matrix with one bracketed line per row, underlined with dashes.
///
/// Shorter rows are padded with spaces so that all closing brackets line up. The result has no
/// trailing newline.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// # use linmath_utils::pretty::{self, Precision};
/// let m = Matrix::new([[1, -10], [100, 0]]);
/// assert_eq!(
///     pretty::matrix(&m, Precision::Default),
///     "[ 1 -10 ]\n[ 100 0 ]\n---------",
/// );
/// ```
pub fn matrix<T: fmt::Display, const R: usize, const C: usize>(
    m: &Matrix<T, R, C>,
    precision: Precision,
) -> String {
    let rows: Vec<String> = (0..R)
        .map(|row| {
            let mut line = String::from("[ ");
            for col in 0..C {
                line.push_str(&element(&m[(row, col)], precision));
                line.push(' ');
            }
            line
        })
        .collect();
    let longest = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for row in &rows {
        out.push_str(row);
        out.push_str(&" ".repeat(longest - row.chars().count()));
        out.push_str("]\n");
    }
    out.push_str(&"-".repeat(longest + 1));
    out
}

#[cfg(test)]
mod tests {
    use linmath::{vec1, vec4, Mat2x3, Mat3f, Vector};

    use super::*;

    #[test]
    fn vectors() {
        assert_eq!(vector(&vec1(7), Precision::Default), "[ 7 ]\n-----");
        assert_eq!(
            vector(&vec4(-1.0, 3.23, 2.1, 4.0), Precision::Default),
            "[ -1 3.23 2.1 4 ]\n-----------------"
        );
        assert_eq!(
            vector(&Vector::new([1, 2, 3, 4, 0]), Precision::Digits(3)),
            "[ 1 2 3 4 0 ]\n-------------"
        );
        assert_eq!(vector(&Vector::<i32, 0>::ZERO, Precision::Default), "[ ]\n---");
    }

    #[test]
    fn precision() {
        let v = vec1(1.0f64 / 3.0);
        assert_eq!(vector(&v, Precision::Digits(0)), "[ 0 ]\n-----");
        assert_eq!(vector(&v, Precision::Digits(4)), "[ 0.3333 ]\n----------");
    }

    #[test]
    fn matrices() {
        let expected = "\
[ 1 0 0 ]
[ 0 1 0 ]
[ 0 0 1 ]
---------";
        assert_eq!(matrix(&Mat3f::identity(), Precision::Default), expected);

        let m: Mat2x3<f32> = Matrix::new([[1.0, -1.0, 2.0], [0.0, -3.0, 0.5]]);
        let expected = "\
[ 1.0 -1.0 2.0 ]
[ 0.0 -3.0 0.5 ]
----------------";
        assert_eq!(matrix(&m, Precision::Digits(1)), expected);
    }

    #[test]
    fn ragged_rows_are_padded() {
        let m = Matrix::new([[1], [-100], [10]]);
        let expected = "\
[ 1    ]
[ -100 ]
[ 10   ]
--------";
        assert_eq!(matrix(&m, Precision::Default), expected);
    }

    #[test]
    fn empty_matrix() {
        let m = Matrix::<i32, 0, 0>::ZERO;
        assert_eq!(matrix(&m, Precision::Default), "-");
    }
}
