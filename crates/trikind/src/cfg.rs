//! Tolerance defaults.
//!
//! Policy
//! - Callers pass the precision explicitly; these constants are what the
//!   console front end uses when none is given.
//! - One value serves both the degeneracy check and the right-angle band.

/// Default comparison band. The console front end also parses its decimal
/// default from this value's text form.
pub const DEFAULT_PRECISION: f64 = 1e-3;
