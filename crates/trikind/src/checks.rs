//! Input gates run before the sign test.
//!
//! - `validate_*`: positivity of every side (and of the precision).
//! - `check_inequality_*`: strict triangle inequality, with the precision as
//!   the margin for tolerant domains and zero for integers.
//!
//! Order matters to callers: validation errors win over geometric ones, so a
//! zero side is `OutOfRange`, never `GeometricallyImpossible`.

use crate::error::{Param, TriangleError};
use crate::scalar::Tolerant;

#[inline]
fn positive<T: Tolerant>(value: T, param: Param) -> Result<(), TriangleError> {
    // `!(v > 0)` also rejects NaN, which compares false both ways.
    if !value.is_admissible() || !(value > T::ZERO) {
        return Err(TriangleError::out_of_range(param));
    }
    Ok(())
}

/// Reject a non-positive precision, then the first non-positive side.
pub fn validate_tolerant<T: Tolerant>(sides: [T; 3], precision: T) -> Result<(), TriangleError> {
    positive(precision, Param::Precision)?;
    for (side, param) in sides.into_iter().zip(Param::SIDES) {
        positive(side, param)?;
    }
    Ok(())
}

/// Reject the first non-positive side.
pub fn validate_exact(sides: [i64; 3]) -> Result<(), TriangleError> {
    for (side, param) in sides.into_iter().zip(Param::SIDES) {
        if side <= 0 {
            return Err(TriangleError::out_of_range(param));
        }
    }
    Ok(())
}

/// `a + b − c` for the three rotations of `[a, b, c]`.
#[inline]
fn margins<T: Tolerant>([a, b, c]: [T; 3]) -> Result<[T; 3], TriangleError> {
    let m = |x: T, y: T, z: T| x.try_add(y)?.try_sub(z);
    Ok([m(a, b, c)?, m(a, c, b)?, m(b, c, a)?])
}

/// Fails when any `side_i + side_j − side_k <= precision`.
///
/// Near-degenerate triples inside the band are rejected, not classified.
pub fn check_inequality_tolerant<T: Tolerant>(
    sides: [T; 3],
    precision: T,
) -> Result<(), TriangleError> {
    if margins(sides)?.into_iter().any(|m| m <= precision) {
        return Err(TriangleError::GeometricallyImpossible);
    }
    Ok(())
}

/// Fails when any `side_i + side_j − side_k <= 0`, computed in `i128`.
pub fn check_inequality_exact(sides: [i64; 3]) -> Result<(), TriangleError> {
    let [a, b, c] = sides.map(i128::from);
    if a + b - c <= 0 || a + c - b <= 0 || b + c - a <= 0 {
        return Err(TriangleError::GeometricallyImpossible);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_is_checked_before_sides() {
        let err = validate_tolerant([0.0, 0.0, 0.0], -1.0).unwrap_err();
        assert_eq!(
            err,
            TriangleError::OutOfRange {
                param: Param::Precision
            }
        );
        let err = validate_tolerant([1.0, -2.0, 0.0], 1e-4).unwrap_err();
        assert_eq!(err, TriangleError::OutOfRange { param: Param::Side2 });
    }

    #[test]
    fn non_finite_floats_are_out_of_range() {
        assert!(validate_tolerant([f64::NAN, 1.0, 1.0], 1e-4).is_err());
        assert!(validate_tolerant([1.0, f64::INFINITY, 1.0], 1e-4).is_err());
        assert!(validate_tolerant([1.0, 1.0, 1.0], f64::NAN).is_err());
    }

    #[test]
    fn inequality_uses_precision_as_margin() {
        // 1 + 1 − 1.99995 = 5e-5 is positive but inside the 1e-4 band.
        assert_eq!(
            check_inequality_tolerant([1.0, 1.0, 1.99995], 1e-4),
            Err(TriangleError::GeometricallyImpossible)
        );
        assert!(check_inequality_tolerant([1.0, 1.0, 1.99995], 1e-5).is_ok());
    }

    #[test]
    fn exact_inequality_rejects_flat_triples() {
        assert_eq!(
            check_inequality_exact([1, 2, 3]),
            Err(TriangleError::GeometricallyImpossible)
        );
        assert!(check_inequality_exact([2, 3, 4]).is_ok());
        assert!(check_inequality_exact([i64::MAX, i64::MAX, i64::MAX]).is_ok());
    }

    #[test]
    fn exact_validation_names_first_bad_side() {
        assert_eq!(
            validate_exact([3, 4, 0]),
            Err(TriangleError::OutOfRange { param: Param::Side3 })
        );
        assert!(validate_exact([3, 4, 5]).is_ok());
    }
}
