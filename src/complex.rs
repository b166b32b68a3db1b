use crate::arith;
use crate::num::Real;
use num_traits::{One, PrimInt, Zero};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod ops;
mod parse;

/// A complex number over a floating-point component type.
///
/// The value is immutable: every operation returns a new `Complex`. The two components are
/// independent, so either may be NaN or infinite on its own. Special values follow
/// Annex G conventions, in particular a complex number with an infinite component is
/// infinite even if its other component is NaN.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex<T> {
    real: T,
    imaginary: T,
}

impl<T: Real> Complex<T> {
    /// Create a new complex number from real and imaginary parts
    #[inline]
    pub fn new(real: T, imaginary: T) -> Self {
        Complex { real, imaginary }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    #[inline]
    pub fn from_real(real: T) -> Self {
        Complex::new(real, T::zero())
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    #[inline]
    pub fn from_imaginary(imaginary: T) -> Self {
        Complex::new(T::zero(), imaginary)
    }

    /// The imaginary unit
    #[inline]
    pub fn i() -> Self {
        Complex::new(T::zero(), T::one())
    }

    /// Create a NaN complex number
    pub fn nan() -> Self {
        Complex::new(T::nan(), T::nan())
    }

    /// Create an infinite complex number
    pub fn infinity() -> Self {
        Complex::new(T::infinity(), T::infinity())
    }

    /// Create a complex number from an integer that the component type holds exactly.
    ///
    /// Returns `None` when the integer would be rounded, e.g. `2^53 + 1` into `f64`.
    pub fn exactly<I: PrimInt>(n: I) -> Option<Self> {
        T::exactly(n).map(Complex::from_real)
    }

    #[inline]
    pub fn real(&self) -> T {
        self.real
    }

    #[inline]
    pub fn imaginary(&self) -> T {
        self.imaginary
    }

    /// Check if both components are finite
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }

    /// Check if either component is infinite
    pub fn is_infinite(&self) -> bool {
        self.real.is_infinite() || self.imaginary.is_infinite()
    }

    /// Check if the complex number is NaN.
    ///
    /// An infinite component wins over a NaN one: `NaN + ∞i` is infinite, not NaN.
    pub fn is_nan(&self) -> bool {
        (self.real.is_nan() && !self.imaginary.is_infinite())
            || (self.imaginary.is_nan() && !self.real.is_infinite())
    }

    /// Check if both components are zero, ignoring their signs
    pub fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imaginary.is_zero()
    }

    /// Get the magnitude (absolute value) of the complex number.
    ///
    /// The smaller component is scaled by the larger one so that no component is ever
    /// squared directly; `Complex::new(f64::MAX, 0.0).magnitude()` is `f64::MAX`.
    pub fn magnitude(&self) -> T {
        let mut x = self.real.abs();
        let mut y = self.imaginary.abs();
        if x.is_infinite() {
            return x;
        }
        if y.is_infinite() {
            return y;
        }
        if x.is_zero() {
            return y;
        }
        if x < y {
            std::mem::swap(&mut x, &mut y);
        }
        let ratio = y / x;
        x * (T::one() + ratio * ratio).sqrt()
    }

    /// `re² + im²` without rescaling; overflows for components beyond `sqrt(T::MAX)`.
    pub fn length_squared(&self) -> T {
        self.real * self.real + self.imaginary * self.imaginary
    }

    /// The magnitude as a purely real complex number.
    pub fn abs(&self) -> Self {
        Complex::from_real(self.magnitude())
    }

    /// Get the complex conjugate
    pub fn conjugate(&self) -> Self {
        arith::conjugate(*self)
    }

    pub fn adding_real(&self, real: T) -> Self {
        Complex::new(self.real + real, self.imaginary)
    }

    pub fn subtracting_real(&self, real: T) -> Self {
        Complex::new(self.real - real, self.imaginary)
    }

    pub fn adding_imaginary(&self, imaginary: T) -> Self {
        Complex::new(self.real, self.imaginary + imaginary)
    }

    pub fn subtracting_imaginary(&self, imaginary: T) -> Self {
        Complex::new(self.real, self.imaginary - imaginary)
    }
}

impl<T: Real> Zero for Complex<T> {
    fn zero() -> Self {
        Complex::new(T::zero(), T::zero())
    }

    fn is_zero(&self) -> bool {
        Complex::is_zero(self)
    }
}

impl<T: Real> One for Complex<T> {
    fn one() -> Self {
        Complex::from_real(T::one())
    }
}

fn fmt_component<T: fmt::Display>(f: &mut fmt::Formatter<'_>, value: T) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{:.*}", precision, value),
        None => write!(f, "{}", value),
    }
}

// `-NaN` keeps the sign bit visible; std prints every NaN as `NaN`.
impl<T: Real> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.real.is_nan() && self.real.is_sign_negative() {
            write!(f, "-")?;
            fmt_component(f, -self.real)?;
        } else {
            fmt_component(f, self.real)?;
        }
        if self.imaginary.is_sign_negative() {
            write!(f, " - ")?;
            fmt_component(f, -self.imaginary)?;
        } else {
            write!(f, " + ")?;
            fmt_component(f, self.imaginary)?;
        }
        write!(f, "i")
    }
}

impl<T: Real> fmt::Debug for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Complex({:?}, {:?})", self.real, self.imaginary)
    }
}

impl<T: Real> From<(T, T)> for Complex<T> {
    fn from((real, imaginary): (T, T)) -> Self {
        Complex::new(real, imaginary)
    }
}

impl<T: Real> From<Complex<T>> for (T, T) {
    fn from(value: Complex<T>) -> (T, T) {
        (value.real, value.imaginary)
    }
}

macro_rules! impl_from_literal {
    ($float:ty; $($int:ty),*) => {
        impl From<$float> for Complex<$float> {
            fn from(real: $float) -> Self {
                Complex::from_real(real)
            }
        }
        $(
            impl From<$int> for Complex<$float> {
                fn from(n: $int) -> Self {
                    Complex::from_real(<$float as Real>::from_literal(n as i64))
                }
            }
        )*
    };
}

impl_from_literal!(f32; i8, i16, i32, i64, u8, u16, u32);
impl_from_literal!(f64; i8, i16, i32, i64, u8, u16, u32);
