use super::Complex;
use crate::arith;
use crate::num::Real;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Operator sugar over the named functions in `arith`, for every owned/borrowed pairing.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $func:path, $assign_imp:ident, $assign_method:ident) => {
        impl<T: Real> $imp for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, other: Complex<T>) -> Complex<T> {
                $func(self, other)
            }
        }

        impl<T: Real> $imp<&Complex<T>> for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, other: &Complex<T>) -> Complex<T> {
                $func(self, *other)
            }
        }

        impl<T: Real> $imp<Complex<T>> for &Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, other: Complex<T>) -> Complex<T> {
                $func(*self, other)
            }
        }

        impl<T: Real> $imp<&Complex<T>> for &Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, other: &Complex<T>) -> Complex<T> {
                $func(*self, *other)
            }
        }

        impl<T: Real> $assign_imp for Complex<T> {
            #[inline]
            fn $assign_method(&mut self, other: Complex<T>) {
                *self = $func(*self, other);
            }
        }

        impl<T: Real> $assign_imp<&Complex<T>> for Complex<T> {
            #[inline]
            fn $assign_method(&mut self, other: &Complex<T>) {
                *self = $func(*self, *other);
            }
        }
    };
}

forward_binop!(Add, add, arith::add, AddAssign, add_assign);
forward_binop!(Sub, sub, arith::subtract, SubAssign, sub_assign);
forward_binop!(Mul, mul, arith::multiply, MulAssign, mul_assign);
forward_binop!(Div, div, arith::divide, DivAssign, div_assign);

impl<T: Real> Neg for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn neg(self) -> Complex<T> {
        arith::negate(self)
    }
}

impl<T: Real> Neg for &Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn neg(self) -> Complex<T> {
        arith::negate(*self)
    }
}
