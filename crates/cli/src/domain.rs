//! Parsing of side strings per numeric domain and dispatch into `trikind`.
//!
//! All parsing is locale-invariant: `.` is the only decimal separator.

use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use trikind::{triangle_kind_decimal, triangle_kind_f64, triangle_kind_int, Decimal};

/// Numeric domain used for the classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// IEEE double with a tolerance band
    Float,
    /// Exact fixed-point decimal with a tolerance band
    Decimal,
    /// Integers, exact comparison (precision is ignored)
    Int,
}

pub const SIDE_LABELS: [&str; 3] = ["A", "B", "C"];

/// Result of one classification, as printed or serialized.
#[derive(Debug, Serialize)]
pub struct Verdict {
    pub domain: Domain,
    pub sides: [String; 3],
    pub precision: Option<String>,
    pub kind: String,
}

impl Verdict {
    pub fn sentence(&self) -> String {
        match &self.precision {
            Some(p) => format!("Triangular kind is {} (with precision {p} used).", self.kind),
            None => format!("Triangular kind is {} (exact comparison used).", self.kind),
        }
    }
}

fn parse<T>(raw: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("parsing {what} from {raw:?}"))
}

fn parse_all<T>(sides: &[String; 3]) -> Result<[T; 3]>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok([
        parse(&sides[0], "side A")?,
        parse(&sides[1], "side B")?,
        parse(&sides[2], "side C")?,
    ])
}

/// Parse `sides` and `precision` in `domain` and classify.
pub fn classify(domain: Domain, sides: &[String; 3], precision: &str) -> Result<Verdict> {
    let (shown, precision, kind) = match domain {
        Domain::Float => {
            let [a, b, c] = parse_all::<f64>(sides)?;
            let p: f64 = parse(precision, "precision")?;
            let kind = triangle_kind_f64(a, b, c, p)?;
            ([a, b, c].map(|s| s.to_string()), Some(p.to_string()), kind)
        }
        Domain::Decimal => {
            let [a, b, c] = parse_all::<Decimal>(sides)?;
            let p: Decimal = parse(precision, "precision")?;
            let kind = triangle_kind_decimal(a, b, c, p)?;
            ([a, b, c].map(|s| s.to_string()), Some(p.to_string()), kind)
        }
        Domain::Int => {
            let [a, b, c] = parse_all::<i64>(sides)?;
            let kind = triangle_kind_int(a, b, c)?;
            ([a, b, c].map(|s| s.to_string()), None, kind)
        }
    };
    Ok(Verdict {
        domain,
        sides: shown,
        precision,
        kind: kind.to_string(),
    })
}
