//! # Text Input and Output
//!
//! Whitespace-separated token formats for point sets, planar sites and hull
//! listings.
//!
//! ## Formats
//!
//! ```text
//! point sets:  T  then T times:  N  x y z (N times)
//! sites:       x y  repeated until end of input
//! hull:        F  then F lines:  3 i j k
//! hull json:   [{"i":..,"j":..,"k":..}, ...]  one line per hull
//! ```

use crate::error::{HullError, HullResult};
use crate::facet::Facet;
use glam::{DVec2, DVec3};
use std::io::Write;
use std::str::{FromStr, SplitWhitespace};

/// Significant digits used when printing a mean edge count.
const MEAN_DIGITS: usize = 12;

// =============================================================================
// TOKENS
// =============================================================================

/// Cursor over whitespace-separated tokens that remembers its position for
/// error reporting.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
            position: 0,
        }
    }

    /// Parses the next token, failing at end of input.
    fn expect<T: FromStr>(&mut self, what: &str) -> HullResult<T> {
        self.parse_next(what)?.ok_or_else(|| {
            HullError::parse(
                self.position,
                format!("expected {what}, found end of input"),
            )
        })
    }

    /// Parses the next token, or returns `None` at end of input.
    fn parse_next<T: FromStr>(&mut self, what: &str) -> HullResult<Option<T>> {
        let Some(token) = self.inner.next() else {
            return Ok(None);
        };
        let position = self.position;
        self.position += 1;
        token
            .parse()
            .map(Some)
            .map_err(|_| HullError::parse(position, format!("expected {what}, found '{token}'")))
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Parses a test count followed by that many point sets.
///
/// # Example
///
/// ```rust
/// use kinetic_hull::io::parse_point_sets;
///
/// let sets = parse_point_sets("1\n2\n0 0 0\n1 2 3\n").unwrap();
/// assert_eq!(sets.len(), 1);
/// assert_eq!(sets[0][1].z, 3.0);
/// ```
pub fn parse_point_sets(input: &str) -> HullResult<Vec<Vec<DVec3>>> {
    let mut tokens = Tokens::new(input);
    let count: usize = tokens.expect("test count")?;

    let mut sets = Vec::new();
    for _ in 0..count {
        let size: usize = tokens.expect("point count")?;
        let mut points = Vec::new();
        for _ in 0..size {
            points.push(DVec3::new(
                tokens.expect("x coordinate")?,
                tokens.expect("y coordinate")?,
                tokens.expect("z coordinate")?,
            ));
        }
        sets.push(points);
    }
    Ok(sets)
}

/// Parses `x y` pairs until end of input.
///
/// # Example
///
/// ```rust
/// use kinetic_hull::io::parse_sites;
///
/// let sites = parse_sites("0 0\n1.5 -2\n").unwrap();
/// assert_eq!(sites.len(), 2);
/// assert!(parse_sites("0 0 1").is_err());
/// ```
pub fn parse_sites(input: &str) -> HullResult<Vec<DVec2>> {
    let mut tokens = Tokens::new(input);
    let mut sites = Vec::new();
    while let Some(x) = tokens.parse_next("x coordinate")? {
        let y = tokens.expect("y coordinate")?;
        sites.push(DVec2::new(x, y));
    }
    Ok(sites)
}

// =============================================================================
// RENDERING
// =============================================================================

/// Writes the facet count, then one `3 i j k` line per facet.
pub fn write_hull(out: &mut impl Write, facets: &[Facet]) -> HullResult<()> {
    writeln!(out, "{}", facets.len())?;
    for facet in facets {
        writeln!(out, "3 {facet}")?;
    }
    Ok(())
}

/// Writes the facets as one JSON array on a single line.
pub fn write_hull_json(out: &mut impl Write, facets: &[Facet]) -> HullResult<()> {
    serde_json::to_writer(&mut *out, facets)?;
    writeln!(out)?;
    Ok(())
}

/// Writes a mean edge count with twelve significant digits.
pub fn write_mean(out: &mut impl Write, mean: f64) -> HullResult<()> {
    writeln!(out, "{}", format_significant(mean, MEAN_DIGITS))?;
    Ok(())
}

/// Formats `value` rounded to `digits` significant digits, dropping
/// trailing zeros. Integer digits are never rounded away.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - magnitude).max(0) as usize;
    let text = format!("{value:.decimals$}");

    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
