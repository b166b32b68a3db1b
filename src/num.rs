use num_traits::{Float, NumCast, PrimInt};
use std::fmt::{Debug, Display};
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point component type of a [`Complex`](crate::complex::Complex).
///
/// Everything the arithmetic core needs from its components is reachable through this
/// trait: NaN and signed infinities, signed zero, `abs`, `sqrt` and `copysign`.
pub trait Real:
    sealed::Sealed + Float + Default + Display + Debug + FromStr + Send + Sync + 'static
{
    /// Value with the magnitude of `magnitude` and the sign bit of `sign`.
    fn with_sign_of(sign: Self, magnitude: Self) -> Self {
        magnitude.copysign(sign)
    }

    /// Rounding conversion from an integer literal.
    fn from_literal(n: i64) -> Self;

    /// Conversion that only succeeds when `n` survives the round trip unchanged.
    fn exactly<I: PrimInt>(n: I) -> Option<Self> {
        let value = <Self as NumCast>::from(n)?;
        let back = <I as NumCast>::from(value)?;
        if back == n {
            Some(value)
        } else {
            None
        }
    }
}

impl Real for f32 {
    fn from_literal(n: i64) -> f32 {
        n as f32
    }
}

impl Real for f64 {
    fn from_literal(n: i64) -> f64 {
        n as f64
    }
}
