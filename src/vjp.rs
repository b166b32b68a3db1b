//! Reverse-mode differentiation rules for [`Complex`] arithmetic.
//!
//! Every function here returns the primal value together with a pullback: a closure that
//! maps the upstream cotangent `v` to the cotangents of the operands. Building the pair
//! only costs the primal arithmetic; the pullback runs when a differentiation engine
//! walks its tape backwards. Tape and graph bookkeeping are left to that engine.
//!
//! | primal                       | pullback(v)                  |
//! |------------------------------|------------------------------|
//! | `add(l, r)`                  | `(v, v)`                     |
//! | `subtract(l, r)`             | `(v, -v)`                    |
//! | `multiply(l, r)`             | `(r·v, l·v)`                 |
//! | `divide(l, r)`               | `(v/r, -l/(r·r)·v)`          |
//! | `negate(x)`                  | `-v`                         |
//! | `conjugate(x)`               | `conj(v)`                    |
//! | `adding_real(x, r)`          | `(v, v.real)`                |
//! | `subtracting_real(x, r)`     | `(v, -v.real)`               |
//! | `adding_imaginary(x, i)`     | `(v, v.imaginary)`           |
//! | `subtracting_imaginary(x, i)`| `(v, -v.imaginary)`          |

use crate::arith;
use crate::complex::Complex;
use crate::num::Real;
use std::fmt;

/// Boxed pullback of a binary operator, as handed out by [`Operator::vjp`].
pub type BinaryPullback<T> = Box<dyn Fn(Complex<T>) -> (Complex<T>, Complex<T>) + Send + Sync>;

pub fn add<T: Real>(
    lhs: Complex<T>,
    rhs: Complex<T>,
) -> (Complex<T>, impl Fn(Complex<T>) -> (Complex<T>, Complex<T>)) {
    (arith::add(lhs, rhs), |v: Complex<T>| (v, v))
}

pub fn subtract<T: Real>(
    lhs: Complex<T>,
    rhs: Complex<T>,
) -> (Complex<T>, impl Fn(Complex<T>) -> (Complex<T>, Complex<T>)) {
    (arith::subtract(lhs, rhs), |v: Complex<T>| {
        (v, arith::negate(v))
    })
}

pub fn multiply<T: Real>(
    lhs: Complex<T>,
    rhs: Complex<T>,
) -> (Complex<T>, impl Fn(Complex<T>) -> (Complex<T>, Complex<T>)) {
    (arith::multiply(lhs, rhs), move |v: Complex<T>| {
        (arith::multiply(rhs, v), arith::multiply(lhs, v))
    })
}

/// The rhs cotangent is `-lhs / rhs² · v`, evaluated left to right.
pub fn divide<T: Real>(
    lhs: Complex<T>,
    rhs: Complex<T>,
) -> (Complex<T>, impl Fn(Complex<T>) -> (Complex<T>, Complex<T>)) {
    (arith::divide(lhs, rhs), move |v: Complex<T>| {
        let rhs_squared = arith::multiply(rhs, rhs);
        let scale = arith::divide(arith::negate(lhs), rhs_squared);
        (arith::divide(v, rhs), arith::multiply(scale, v))
    })
}

pub fn negate<T: Real>(operand: Complex<T>) -> (Complex<T>, impl Fn(Complex<T>) -> Complex<T>) {
    (arith::negate(operand), arith::negate::<T>)
}

pub fn conjugate<T: Real>(operand: Complex<T>) -> (Complex<T>, impl Fn(Complex<T>) -> Complex<T>) {
    (arith::conjugate(operand), arith::conjugate::<T>)
}

pub fn adding_real<T: Real>(
    operand: Complex<T>,
    real: T,
) -> (Complex<T>, impl Fn(Complex<T>) -> (Complex<T>, T)) {
    (operand.adding_real(real), |v: Complex<T>| (v, v.real()))
}

pub fn subtracting_real<T: Real>(
    operand: Complex<T>,
    real: T,
) -> (Complex<T>, impl Fn(Complex<T>) -> (Complex<T>, T)) {
    (operand.subtracting_real(real), |v: Complex<T>| (v, -v.real()))
}

pub fn adding_imaginary<T: Real>(
    operand: Complex<T>,
    imaginary: T,
) -> (Complex<T>, impl Fn(Complex<T>) -> (Complex<T>, T)) {
    (operand.adding_imaginary(imaginary), |v: Complex<T>| {
        (v, v.imaginary())
    })
}

pub fn subtracting_imaginary<T: Real>(
    operand: Complex<T>,
    imaginary: T,
) -> (Complex<T>, impl Fn(Complex<T>) -> (Complex<T>, T)) {
    (operand.subtracting_imaginary(imaginary), |v: Complex<T>| {
        (v, -v.imaginary())
    })
}

/// Binary complex operators with a registered differentiation rule.
///
/// Lets an engine that records operators by tag look up the primal and the pullback
/// without naming the individual functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn all() -> [Operator; 4] {
        [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Run the primal operation only.
    pub fn apply<T: Real>(&self, lhs: Complex<T>, rhs: Complex<T>) -> Complex<T> {
        match self {
            Operator::Add => arith::add(lhs, rhs),
            Operator::Subtract => arith::subtract(lhs, rhs),
            Operator::Multiply => arith::multiply(lhs, rhs),
            Operator::Divide => arith::divide(lhs, rhs),
        }
    }

    /// Primal value and boxed pullback for this operator.
    pub fn vjp<T: Real>(
        &self,
        lhs: Complex<T>,
        rhs: Complex<T>,
    ) -> (Complex<T>, BinaryPullback<T>) {
        match self {
            Operator::Add => {
                let (value, pullback) = add(lhs, rhs);
                (value, Box::new(pullback) as BinaryPullback<T>)
            }
            Operator::Subtract => {
                let (value, pullback) = subtract(lhs, rhs);
                (value, Box::new(pullback) as BinaryPullback<T>)
            }
            Operator::Multiply => {
                let (value, pullback) = multiply(lhs, rhs);
                (value, Box::new(pullback) as BinaryPullback<T>)
            }
            Operator::Divide => {
                let (value, pullback) = divide(lhs, rhs);
                (value, Box::new(pullback) as BinaryPullback<T>)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod vjp_tests {
    use super::*;
    use float_cmp::{approx_eq, F64Margin};

    const MARGIN: F64Margin = F64Margin {
        epsilon: 1e-12,
        ulps: 8,
    };

    fn c(real: f64, imaginary: f64) -> Complex<f64> {
        Complex::new(real, imaginary)
    }

    fn assert_close(lhs: Complex<f64>, rhs: Complex<f64>) {
        assert!(
            approx_eq!(f64, lhs.real(), rhs.real(), MARGIN)
                && approx_eq!(f64, lhs.imaginary(), rhs.imaginary(), MARGIN),
            "{} != {}",
            lhs,
            rhs
        );
    }

    #[test]
    fn test_add_subtract() {
        let v = c(0.5, -2.0);

        let (value, pullback) = add(c(1.0, 2.0), c(3.0, 4.0));
        assert_eq!(value, c(4.0, 6.0));
        assert_eq!(pullback(v), (v, v));

        let (value, pullback) = subtract(c(1.0, 2.0), c(3.0, 4.0));
        assert_eq!(value, c(-2.0, -2.0));
        assert_eq!(pullback(v), (v, c(-0.5, 2.0)));
    }

    #[test]
    fn test_multiply() {
        let lhs = c(2.0, 3.0);
        let rhs = c(1.0, 1.0);
        let (value, pullback) = multiply(lhs, rhs);
        assert_eq!(value, c(-1.0, 5.0));
        assert_eq!(pullback(c(1.0, 0.0)), (c(1.0, 1.0), c(2.0, 3.0)));
        assert_eq!(pullback(c(0.0, 1.0)), (c(-1.0, 1.0), c(-3.0, 2.0)));
    }

    #[test]
    fn test_divide() {
        let lhs = c(2.0, 3.0);
        let rhs = c(1.0, 1.0);
        let (value, pullback) = divide(lhs, rhs);
        assert_close(value, c(2.5, 0.5));

        let (dlhs, drhs) = pullback(c(1.0, 0.0));
        // 1 / (1 + i) = (1 - i) / 2
        assert_close(dlhs, c(0.5, -0.5));
        // -(2 + 3i) / 2i = -1.5 + i
        assert_close(drhs, c(-1.5, 1.0));
    }

    #[test]
    fn test_divide_pullback_is_linear_in_v() {
        let (_, pullback) = divide(c(-0.75, 4.0), c(2.0, -1.5));
        let (a_lhs, a_rhs) = pullback(c(1.0, 0.0));
        let (b_lhs, b_rhs) = pullback(c(3.0, 0.0));
        assert_close(arith::multiply(a_lhs, c(3.0, 0.0)), b_lhs);
        assert_close(arith::multiply(a_rhs, c(3.0, 0.0)), b_rhs);
    }

    #[test]
    fn test_negate_and_conjugate() {
        let (value, pullback) = negate(c(1.0, -2.0));
        assert_eq!(value, c(-1.0, 2.0));
        assert_eq!(pullback(c(3.0, 4.0)), c(-3.0, -4.0));

        let (value, pullback) = conjugate(c(1.0, -2.0));
        assert_eq!(value, c(1.0, 2.0));
        assert_eq!(pullback(c(3.0, 4.0)), c(3.0, -4.0));
    }

    #[test]
    fn test_component_helpers() {
        let x = c(1.0, 2.0);
        let v = c(5.0, -7.0);

        let (value, pullback) = adding_real(x, 0.5);
        assert_eq!(value, c(1.5, 2.0));
        assert_eq!(pullback(v), (v, 5.0));

        let (value, pullback) = subtracting_real(x, 0.5);
        assert_eq!(value, c(0.5, 2.0));
        assert_eq!(pullback(v), (v, -5.0));
    }

    #[test]
    fn test_imaginary_helpers_use_imaginary_primal() {
        let x = c(1.0, 2.0);
        let v = c(5.0, -7.0);

        let (value, pullback) = adding_imaginary(x, 0.5);
        assert_eq!(value, c(1.0, 2.5));
        assert_eq!(pullback(v), (v, -7.0));

        let (value, pullback) = subtracting_imaginary(x, 0.5);
        assert_eq!(value, c(1.0, 1.5));
        assert_eq!(pullback(v), (v, 7.0));
    }

    #[test]
    fn test_operator_registry_matches_functions() {
        let lhs = c(2.0, 3.0);
        let rhs = c(1.0, -1.0);
        let v = c(0.25, 1.5);

        for op in Operator::all() {
            let (value, pullback) = op.vjp(lhs, rhs);
            assert_eq!(value, op.apply(lhs, rhs));
            let expected = match op {
                Operator::Add => (add(lhs, rhs).1)(v),
                Operator::Subtract => (subtract(lhs, rhs).1)(v),
                Operator::Multiply => (multiply(lhs, rhs).1)(v),
                Operator::Divide => (divide(lhs, rhs).1)(v),
            };
            assert_eq!(pullback(v), expected, "operator {}", op);
        }
    }

    #[test]
    fn test_pullbacks_cross_threads() {
        let (_, pullback) = Operator::Multiply.vjp(c(2.0, 3.0), c(1.0, 1.0));
        let handle = std::thread::spawn(move || pullback(c(1.0, 0.0)));
        assert_eq!(handle.join().unwrap(), (c(1.0, 1.0), c(2.0, 3.0)));
    }
}
