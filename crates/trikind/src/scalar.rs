//! Numeric domains that classify against a tolerance band.
//!
//! - `f64`: IEEE double. Results beyond the finite range are `Overflow`; a
//!   nonzero product that lands on zero or a subnormal is `PrecisionLoss`.
//! - `Decimal`: 96-bit fixed-point; squaring stays decimal, never binary
//!   float. Any result the type had to round is `PrecisionLoss`.
//!
//! Integers are deliberately not `Tolerant`: they use the exact path in
//! `classify::triangle_kind_int`.

use std::fmt::Debug;
use std::ops::Neg;

use rust_decimal::Decimal;

use crate::error::TriangleError;

/// Scalar with checked arithmetic and a positive-tolerance notion.
///
/// `try_*` fail with `Overflow` or `PrecisionLoss` when the result is not
/// representable faithfully enough for the sign test.
pub trait Tolerant: Copy + PartialOrd + Neg<Output = Self> + Debug {
    const ZERO: Self;

    /// False for values that never compare meaningfully (NaN, ±∞).
    fn is_admissible(self) -> bool;

    fn try_add(self, rhs: Self) -> Result<Self, TriangleError>;
    fn try_sub(self, rhs: Self) -> Result<Self, TriangleError>;
    fn try_mul(self, rhs: Self) -> Result<Self, TriangleError>;

    #[inline]
    fn try_square(self) -> Result<Self, TriangleError> {
        self.try_mul(self)
    }
}

#[inline]
fn finite(x: f64) -> Result<f64, TriangleError> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(TriangleError::Overflow)
    }
}

impl Tolerant for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn is_admissible(self) -> bool {
        self.is_finite()
    }
    #[inline]
    fn try_add(self, rhs: Self) -> Result<Self, TriangleError> {
        finite(self + rhs)
    }
    #[inline]
    fn try_sub(self, rhs: Self) -> Result<Self, TriangleError> {
        finite(self - rhs)
    }
    #[inline]
    fn try_mul(self, rhs: Self) -> Result<Self, TriangleError> {
        let p = finite(self * rhs)?;
        // Zero or subnormal from nonzero factors: digits fell off the low end.
        if self != 0.0 && rhs != 0.0 && !p.is_normal() {
            return Err(TriangleError::PrecisionLoss);
        }
        Ok(p)
    }
}

/// Scale of `x` with trailing zeros stripped.
#[inline]
fn exact_scale(x: Decimal) -> u32 {
    x.normalize().scale()
}

/// `r` carries at least `needed` fractional digits, i.e. nothing was rounded.
#[inline]
fn kept_digits(r: Option<Decimal>, needed: u32) -> Result<Decimal, TriangleError> {
    let r = r.ok_or(TriangleError::Overflow)?;
    if r.scale() < needed {
        return Err(TriangleError::PrecisionLoss);
    }
    Ok(r)
}

/// Sums only round on mantissa overflow, which never yields zero.
#[inline]
fn kept_sum(r: Option<Decimal>, needed: u32) -> Result<Decimal, TriangleError> {
    match r {
        Some(z) if z.is_zero() => Ok(z),
        r => kept_digits(r, needed),
    }
}

impl Tolerant for Decimal {
    const ZERO: Self = Decimal::ZERO;

    #[inline]
    fn is_admissible(self) -> bool {
        true
    }
    #[inline]
    fn try_add(self, rhs: Self) -> Result<Self, TriangleError> {
        let needed = exact_scale(self).max(exact_scale(rhs));
        kept_sum(Decimal::checked_add(self, rhs), needed)
    }
    #[inline]
    fn try_sub(self, rhs: Self) -> Result<Self, TriangleError> {
        let needed = exact_scale(self).max(exact_scale(rhs));
        kept_sum(Decimal::checked_sub(self, rhs), needed)
    }
    #[inline]
    fn try_mul(self, rhs: Self) -> Result<Self, TriangleError> {
        let (a, b) = (self.normalize(), rhs.normalize());
        kept_digits(Decimal::checked_mul(a, b), a.scale() + b.scale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn f64_overflow_is_reported() {
        assert_eq!(1e200_f64.try_square(), Err(TriangleError::Overflow));
        assert_eq!(f64::MAX.try_add(f64::MAX), Err(TriangleError::Overflow));
        assert_eq!(3.0_f64.try_square(), Ok(9.0));
        assert!(!f64::NAN.is_admissible());
        assert!(!f64::INFINITY.is_admissible());
    }

    #[test]
    fn f64_underflow_is_reported() {
        assert_eq!(1e-170_f64.try_square(), Err(TriangleError::PrecisionLoss));
        // 1e-155² = 1e-310 is subnormal.
        assert_eq!(1e-155_f64.try_square(), Err(TriangleError::PrecisionLoss));
        assert!(1e-150_f64.try_square().is_ok());
        assert_eq!(0.0_f64.try_mul(5.0), Ok(0.0));
        // Differences may legitimately be zero.
        assert_eq!(1e-300_f64.try_sub(1e-300), Ok(0.0));
    }

    #[test]
    fn decimal_squares_exactly() {
        assert_eq!(dec("12.1").try_square(), Ok(dec("146.41")));
        // 0.12² + 0.05² − 0.13² is exactly zero in decimal, unlike binary float.
        let d = dec("0.12")
            .try_square()
            .and_then(|a| a.try_add(dec("0.05").try_square()?))
            .and_then(|s| s.try_sub(dec("0.13").try_square()?));
        assert_eq!(d, Ok(Decimal::ZERO));
        assert_eq!(Decimal::MAX.try_square(), Err(TriangleError::Overflow));
    }

    #[test]
    fn decimal_rounding_is_reported() {
        // 1e-15² needs 30 fractional digits; the type keeps 28.
        assert_eq!(
            dec("0.000000000000001").try_square(),
            Err(TriangleError::PrecisionLoss)
        );
        // Mantissa overflow forces a rescale that drops digits.
        assert_eq!(
            dec("12345678901234.56789012345").try_square(),
            Err(TriangleError::PrecisionLoss)
        );
        // Trailing zeros do not count as digits that need keeping.
        assert_eq!(dec("0.10000000000000000000").try_square(), Ok(dec("0.01")));
        assert_eq!(dec("0.00000000000001").try_square(), Ok(Decimal::new(1, 28)));
    }
}
