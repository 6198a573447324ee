use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
}

/// Floating-point element types.
///
/// This is what inversion, projection and angle math require. It is implemented for [`f32`] and
/// [`f64`].
pub trait Float: Number + Sqrt + Trig + PartialOrd + fmt::Debug {
    /// Not-a-Number.
    const NAN: Self;
    /// The difference between `1.0` and the next larger representable number.
    const EPSILON: Self;
    /// Archimedes' constant (π).
    const PI: Self;

    fn abs(self) -> Self;
    fn is_nan(self) -> bool;
    /// Converts an angle in degrees to radians.
    fn to_radians(self) -> Self;
    /// Converts an angle in radians to degrees.
    fn to_degrees(self) -> Self;
}

/// Lossy numeric conversion with the semantics of an `as` cast.
///
/// Integer-to-integer casts wrap, float-to-integer casts round toward zero and saturate (NaN
/// becomes 0), and integer-to-float casts round to the nearest representable value.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// assert_eq!(i32::cast_from(3.9f64), 3);
/// assert_eq!(i32::cast_from(-3.9f32), -3);
/// assert_eq!(u8::cast_from(f32::NAN), 0);
/// assert_eq!(f32::cast_from(7u64), 7.0);
/// ```
pub trait CastFrom<U> {
    fn cast_from(value: U) -> Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0: f32, f64);

macro_rules! float {
    ($($types:ident),+) => {
        $(
            impl Sqrt for $types {
                #[inline]
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Trig for $types {
                #[inline]
                fn sin(self) -> Self {
                    self.sin()
                }

                #[inline]
                fn cos(self) -> Self {
                    self.cos()
                }

                #[inline]
                fn tan(self) -> Self {
                    self.tan()
                }
            }

            impl Float for $types {
                const NAN: Self = $types::NAN;
                const EPSILON: Self = $types::EPSILON;
                const PI: Self = std::$types::consts::PI;

                #[inline]
                fn abs(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn is_nan(self) -> bool {
                    self.is_nan()
                }

                #[inline]
                fn to_radians(self) -> Self {
                    self.to_radians()
                }

                #[inline]
                fn to_degrees(self) -> Self {
                    self.to_degrees()
                }
            }
        )+
    };
}
float!(f32, f64);

macro_rules! cast_from {
    (@each [$($dst:ty),+] $src:tt) => {
        $( cast_from!(@impl $dst, $src); )+
    };
    (@impl $dst:ty, [$($src:ty),+]) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }
            }
        )+
    };
    ($($types:ty),+) => {
        cast_from!(@each [$($types),+] [$($types),+]);
    };
}
cast_from!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
