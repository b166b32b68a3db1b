//! Elementary complex arithmetic with Annex G style handling of special values.
//!
//! These free functions are the canonical implementations; the `std::ops` operators on
//! [`Complex`] forward to them.

use crate::complex::Complex;
use crate::num::Real;

/// `lhs + rhs`, componentwise.
#[inline]
pub fn add<T: Real>(lhs: Complex<T>, rhs: Complex<T>) -> Complex<T> {
    Complex::new(lhs.real() + rhs.real(), lhs.imaginary() + rhs.imaginary())
}

/// `lhs - rhs`, componentwise.
#[inline]
pub fn subtract<T: Real>(lhs: Complex<T>, rhs: Complex<T>) -> Complex<T> {
    Complex::new(lhs.real() - rhs.real(), lhs.imaginary() - rhs.imaginary())
}

/// Flips the sign of both components, signed zeros included.
#[inline]
pub fn negate<T: Real>(operand: Complex<T>) -> Complex<T> {
    Complex::new(-operand.real(), -operand.imaginary())
}

#[inline]
pub fn conjugate<T: Real>(operand: Complex<T>) -> Complex<T> {
    Complex::new(operand.real(), -operand.imaginary())
}

// Infinite components become a signed one, everything else (NaN included) a signed zero.
#[inline]
fn unit_or_zero<T: Real>(value: T) -> T {
    let magnitude = if value.is_infinite() { T::one() } else { T::zero() };
    T::with_sign_of(value, magnitude)
}

#[inline]
fn zero_if_nan<T: Real>(value: T) -> T {
    if value.is_nan() {
        T::with_sign_of(value, T::zero())
    } else {
        value
    }
}

/// `lhs * rhs`.
///
/// The textbook formula is used first. When both of its components come out NaN the
/// product may still be a well defined complex infinity (for example `(∞ + 1i)(0 + 1i)`),
/// so the operands are normalized and the product is recomputed as a signed infinity.
/// A genuinely indeterminate product such as `∞ · 0` keeps its NaN result.
pub fn multiply<T: Real>(lhs: Complex<T>, rhs: Complex<T>) -> Complex<T> {
    let (mut a, mut b) = (lhs.real(), lhs.imaginary());
    let (mut c, mut d) = (rhs.real(), rhs.imaginary());

    let ac = a * c;
    let bd = b * d;
    let ad = a * d;
    let bc = b * c;
    let x = ac - bd;
    let y = ad + bc;

    if !(x.is_nan() && y.is_nan()) {
        return Complex::new(x, y);
    }

    let mut recalc = false;
    if a.is_infinite() || b.is_infinite() {
        a = unit_or_zero(a);
        b = unit_or_zero(b);
        c = zero_if_nan(c);
        d = zero_if_nan(d);
        recalc = true;
    }
    if c.is_infinite() || d.is_infinite() {
        c = unit_or_zero(c);
        d = unit_or_zero(d);
        a = zero_if_nan(a);
        b = zero_if_nan(b);
        recalc = true;
    }
    if !recalc && (ac.is_infinite() || bd.is_infinite() || ad.is_infinite() || bc.is_infinite())
    {
        a = zero_if_nan(a);
        b = zero_if_nan(b);
        c = zero_if_nan(c);
        d = zero_if_nan(d);
        recalc = true;
    }

    if recalc {
        let inf = T::infinity();
        Complex::new(inf * (a * c - b * d), inf * (a * d + b * c))
    } else {
        Complex::new(x, y)
    }
}

/// `lhs / rhs` using Smith's algorithm.
///
/// The branch is picked on the larger denominator component so `c² + d²` is never formed.
/// A `(NaN, NaN)` quotient is repaired when it stems from division by zero, an infinite
/// numerator over a finite denominator, or a finite numerator over an infinite denominator.
pub fn divide<T: Real>(lhs: Complex<T>, rhs: Complex<T>) -> Complex<T> {
    let (mut a, mut b) = (lhs.real(), lhs.imaginary());
    let (mut c, mut d) = (rhs.real(), rhs.imaginary());

    let (x, y) = if c.abs() >= d.abs() {
        let ratio = d / c;
        let denom = c + d * ratio;
        ((a + b * ratio) / denom, (b - a * ratio) / denom)
    } else {
        let ratio = c / d;
        let denom = c * ratio + d;
        ((a * ratio + b) / denom, (b * ratio - a) / denom)
    };

    if !(x.is_nan() && y.is_nan()) {
        return Complex::new(x, y);
    }

    if c.is_zero() && d.is_zero() && (!a.is_nan() || !b.is_nan()) {
        let inf = T::with_sign_of(c, T::infinity());
        Complex::new(inf * a, inf * b)
    } else if (a.is_infinite() || b.is_infinite()) && c.is_finite() && d.is_finite() {
        a = unit_or_zero(a);
        b = unit_or_zero(b);
        let inf = T::infinity();
        Complex::new(inf * (a * c + b * d), inf * (b * c - a * d))
    } else if (c.is_infinite() || d.is_infinite()) && a.is_finite() && b.is_finite() {
        c = unit_or_zero(c);
        d = unit_or_zero(d);
        let zero = T::zero();
        Complex::new(zero * (a * c + b * d), zero * (b * c - a * d))
    } else {
        Complex::new(x, y)
    }
}
