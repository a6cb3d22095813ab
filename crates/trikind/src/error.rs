//! Errors surfaced by validation, the inequality check, and the arithmetic.

use std::fmt;

/// Named input of a classification call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    Side1,
    Side2,
    Side3,
    Precision,
}

impl Param {
    pub const SIDES: [Param; 3] = [Param::Side1, Param::Side2, Param::Side3];

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Param::Side1 => "side1",
            Param::Side2 => "side2",
            Param::Side3 => "side3",
            Param::Precision => "precision",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a classification call failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangleError {
    /// A side or the precision is not strictly positive (or not finite).
    OutOfRange { param: Param },
    /// The sides violate the strict triangle inequality at the given tolerance.
    GeometricallyImpossible,
    /// An intermediate sum or square left the range of the numeric domain.
    Overflow,
    /// A square underflowed or had to be rounded, so the sign test would
    /// compare noise.
    PrecisionLoss,
}

impl TriangleError {
    pub(crate) fn out_of_range(param: Param) -> Self {
        Self::OutOfRange { param }
    }
}

impl fmt::Display for TriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { param } => {
                write!(f, "argument {param} is out of range (must be positive)")
            }
            Self::GeometricallyImpossible => {
                write!(f, "sides do not satisfy the triangle inequality")
            }
            Self::Overflow => write!(f, "arithmetic overflow while classifying"),
            Self::PrecisionLoss => {
                write!(f, "sides too small or too finely scaled to square exactly")
            }
        }
    }
}

impl std::error::Error for TriangleError {}
