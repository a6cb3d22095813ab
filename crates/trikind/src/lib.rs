//! Triangle kind classification by the law-of-cosines sign test.
//!
//! Three numeric domains share one contract: validate, check the triangle
//! inequality, classify.
//! - `f64` and `Decimal` compare against a caller-supplied precision band
//!   (generic over [`Tolerant`]).
//! - Integers compare exactly, with all intermediates widened to `i128`.
//!
//! API Policy
//! - Every entry point is a pure function; there is no state and no I/O.
//! - Errors are returned, never logged or recovered here.

pub mod cfg;
pub mod checks;
pub mod classify;
pub mod error;
pub mod kind;
pub mod scalar;

pub use classify::{triangle_kind, triangle_kind_decimal, triangle_kind_f64, triangle_kind_int};
pub use error::{Param, TriangleError};
pub use kind::TriangleKind;
pub use rust_decimal::Decimal;
pub use scalar::Tolerant;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::DEFAULT_PRECISION;
    pub use crate::classify::{
        triangle_kind, triangle_kind_decimal, triangle_kind_f64, triangle_kind_int,
    };
    pub use crate::{Decimal, Param, Tolerant, TriangleError, TriangleKind};
}
