//! Law-of-cosines sign test.
//!
//! For sides a, b, c the three differences of squares
//! `a²+b²−c²`, `a²+c²−b²`, `b²+c²−a²` are each a positive multiple of the
//! cosine of the angle opposite the subtracted side. One of them near zero
//! means a right angle; one negative means an obtuse angle.
//!
//! Decision order (first match wins)
//! - any difference within `[−precision, +precision]` → Right
//! - any difference below `−precision` → Obtuse
//! - otherwise → Acute
//!
//! The integer path uses the same order with exact `i128` comparisons.

use rust_decimal::Decimal;

use crate::checks::{
    check_inequality_exact, check_inequality_tolerant, validate_exact, validate_tolerant,
};
use crate::error::TriangleError;
use crate::kind::TriangleKind;
use crate::scalar::Tolerant;

fn square_differences<T: Tolerant>([a, b, c]: [T; 3]) -> Result<[T; 3], TriangleError> {
    let (a2, b2, c2) = (a.try_square()?, b.try_square()?, c.try_square()?);
    let d = |x: T, y: T, z: T| x.try_add(y)?.try_sub(z);
    Ok([d(a2, b2, c2)?, d(a2, c2, b2)?, d(b2, c2, a2)?])
}

fn sign_test<T: Tolerant>(diffs: [T; 3], precision: T) -> TriangleKind {
    let lo = -precision;
    if diffs.iter().any(|&d| d >= lo && d <= precision) {
        TriangleKind::Right
    } else if diffs.iter().any(|&d| d < lo) {
        TriangleKind::Obtuse
    } else {
        TriangleKind::Acute
    }
}

/// Classify a triangle in any tolerant domain.
///
/// Errors: `OutOfRange` for a non-positive side or precision,
/// `GeometricallyImpossible` when `side_i + side_j − side_k <= precision`,
/// `Overflow` when a sum or square is not representable,
/// `PrecisionLoss` when a square underflows or would be rounded.
pub fn triangle_kind<T: Tolerant>(
    side1: T,
    side2: T,
    side3: T,
    precision: T,
) -> Result<TriangleKind, TriangleError> {
    let sides = [side1, side2, side3];
    validate_tolerant(sides, precision)?;
    check_inequality_tolerant(sides, precision)?;
    Ok(sign_test(square_differences(sides)?, precision))
}

/// Floating-point classification. See [`triangle_kind`].
#[inline]
pub fn triangle_kind_f64(
    side1: f64,
    side2: f64,
    side3: f64,
    precision: f64,
) -> Result<TriangleKind, TriangleError> {
    triangle_kind(side1, side2, side3, precision)
}

/// Fixed-point classification; all arithmetic stays in `Decimal`.
#[inline]
pub fn triangle_kind_decimal(
    side1: Decimal,
    side2: Decimal,
    side3: Decimal,
    precision: Decimal,
) -> Result<TriangleKind, TriangleError> {
    triangle_kind(side1, side2, side3, precision)
}

/// Integer classification with exact comparisons and no precision.
///
/// Squares and sums are computed in `i128`; `2·(2⁶³−1)²` fits, so no positive
/// `i64` triple can overflow.
pub fn triangle_kind_int(
    side1: impl Into<i64>,
    side2: impl Into<i64>,
    side3: impl Into<i64>,
) -> Result<TriangleKind, TriangleError> {
    let sides = [side1.into(), side2.into(), side3.into()];
    validate_exact(sides)?;
    check_inequality_exact(sides)?;

    let [a2, b2, c2] = sides.map(|s| i128::from(s) * i128::from(s));
    let diffs = [a2 + b2 - c2, a2 + c2 - b2, b2 + c2 - a2];
    Ok(if diffs.contains(&0) {
        TriangleKind::Right
    } else if diffs.iter().any(|&d| d < 0) {
        TriangleKind::Obtuse
    } else {
        TriangleKind::Acute
    })
}
