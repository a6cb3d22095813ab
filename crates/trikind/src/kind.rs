//! Result type of a classification.
//!
//! `TriangleKind` is a closed set. `code()` keeps the legacy signed values for
//! callers that store kinds as integers; they carry no ordering.

use std::fmt;
use std::str::FromStr;

/// Triangle kind by its largest angle.
///
/// Closed set: no further variants will be added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleKind {
    /// All angles are below 90°.
    Acute,
    /// One angle is 90° (within the comparison band).
    Right,
    /// One angle is above 90°.
    Obtuse,
}

impl TriangleKind {
    pub const ALL: [TriangleKind; 3] = [Self::Acute, Self::Right, Self::Obtuse];

    /// Signed interop code: Acute = -1, Right = 0, Obtuse = 1. Not an ordering.
    #[inline]
    pub fn code(self) -> i16 {
        match self {
            Self::Acute => -1,
            Self::Right => 0,
            Self::Obtuse => 1,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::Acute => "Acute",
            Self::Right => "Right",
            Self::Obtuse => "Obtuse",
        }
    }
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no triangle kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown triangle kind {:?}", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for TriangleKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_interop_values() {
        assert_eq!(TriangleKind::Acute.code(), -1);
        assert_eq!(TriangleKind::Right.code(), 0);
        assert_eq!(TriangleKind::Obtuse.code(), 1);
    }

    #[test]
    fn parse_is_case_insensitive_and_matches_display() {
        for k in TriangleKind::ALL {
            assert_eq!(k.to_string().parse::<TriangleKind>().unwrap(), k);
        }
        assert_eq!(" obtuse ".parse::<TriangleKind>().unwrap(), TriangleKind::Obtuse);
        assert_eq!("RIGHT".parse::<TriangleKind>().unwrap(), TriangleKind::Right);
        assert!("scalene".parse::<TriangleKind>().is_err());
    }
}
