//! diffcomplex prelude.
//!
//! This module contains the most used types, traits and functions that you can import
//! easily as a group.
//!
//! ```
//! use diffcomplex::prelude::*;
//!
//! let (value, pullback) = vjp::multiply(Complex::new(2.0, 3.0), Complex::new(1.0, 1.0));
//! assert_eq!(value, Complex::new(-1.0, 5.0));
//! assert_eq!(pullback(Complex::new(1.0, 0.0)).0, Complex::new(1.0, 1.0));
//! ```

#[doc(no_inline)]
pub use crate::arith::{add, conjugate, divide, multiply, negate, subtract};
#[doc(no_inline)]
pub use crate::complex::Complex;
#[doc(no_inline)]
pub use crate::num::Real;
#[doc(no_inline)]
pub use crate::vjp::{self, BinaryPullback, Operator};
