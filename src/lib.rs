pub mod arith;
pub mod complex;
pub mod num;
pub mod prelude;
pub mod vjp;

pub use crate::complex::Complex;
pub use crate::num::Real;

/// Create a **[`Complex`]** from real and imaginary parts.
///
/// ```
/// use diffcomplex::{complex, Complex};
/// let z = complex!(1.5, -2.0);
///
/// assert_eq!(z, Complex::new(1.5, -2.0));
/// assert_eq!(complex!(3.0), Complex::new(3.0, 0.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr, $im:expr $(,)?) => {
        $crate::complex::Complex::new($re, $im)
    };
    ($re:expr $(,)?) => {
        $crate::complex::Complex::from_real($re)
    };
}
