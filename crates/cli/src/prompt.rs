//! Interactive console loop: banner, three side prompts, one verdict.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::domain::{classify, Domain, Verdict, SIDE_LABELS};

const BANNER: &str = "\
.:Triangle kind checker:.
_________________________

Please, enter triangular sides as rational values:
(use '.' as the decimal separator)
";

/// Read one trimmed line after printing `Side <label>: `.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "Side {label}: ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("reading stdin")? == 0 {
        bail!("unexpected end of input while reading side {label}");
    }
    Ok(line.trim().to_string())
}

/// Prompt for three sides on `out`, read them from `input`, classify.
pub fn run_prompt<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    domain: Domain,
    precision: &str,
) -> Result<Verdict> {
    writeln!(out, "{BANNER}")?;
    let mut sides: [String; 3] = Default::default();
    for (slot, label) in sides.iter_mut().zip(SIDE_LABELS) {
        *slot = ask(&mut input, &mut out, label)?;
    }
    tracing::info!(?domain, sides = ?sides, "read sides");
    writeln!(out)?;
    classify(domain, &sides, precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompts_for_each_side_in_order() {
        let mut out = Vec::new();
        let v = run_prompt(Cursor::new("3\n4\n5\n"), &mut out, Domain::Float, "0.001").unwrap();
        assert_eq!(v.kind, "Right");
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(".:Triangle kind checker:."));
        let a = text.find("Side A: ").unwrap();
        let b = text.find("Side B: ").unwrap();
        let c = text.find("Side C: ").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn handles_crlf_and_whitespace() {
        let input = Cursor::new(" 6.5 \r\n6.5\r\n12.1\r\n");
        let v = run_prompt(input, Vec::new(), Domain::Decimal, "0.0001").unwrap();
        assert_eq!(v.kind, "Obtuse");
    }

    #[test]
    fn eof_names_the_missing_side() {
        let err = run_prompt(Cursor::new("3\n4\n"), Vec::new(), Domain::Float, "0.001").unwrap_err();
        assert!(err.to_string().contains("side C"), "{err:#}");
    }
}
